//! Pointer interaction state for the popup window.
//!
//! The popup can be dragged from anywhere except the bottom-right grip, and
//! resized by dragging the grip. [`DisplaySurface`] holds the transient
//! interaction state and applies geometry changes through a [`SurfaceHost`],
//! so the logic runs the same against a real window or a test double.

use crate::config::{GRIP_SIZE, MIN_SURFACE_EXTENT};
use log::debug;
use std::ops::{Add, Sub};

/// A point in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Window dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grows or shrinks by `delta`, never going below the minimum extent on either axis.
    pub fn resized_by(self, delta: Point) -> Size {
        Size::new(
            (self.width + delta.x).max(MIN_SURFACE_EXTENT),
            (self.height + delta.y).max(MIN_SURFACE_EXTENT),
        )
    }

    /// Whether `local` falls in the resize grip of a window this size.
    pub fn grip_contains(self, local: Point) -> bool {
        local.x >= self.width - GRIP_SIZE
            && local.x < self.width
            && local.y >= self.height - GRIP_SIZE
            && local.y < self.height
    }
}

/// Cursor shapes the popup switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    DiagonalResize,
}

/// Pointer location, both relative to the window and on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub local: Point,
    pub screen: Point,
}

impl Pointer {
    /// Builds a pointer from a window-local point and the window's top-left corner.
    pub fn at(local: Point, window_origin: Point) -> Self {
        Self {
            local,
            screen: window_origin + local,
        }
    }
}

/// Current interaction. Exactly one variant holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Button went down outside the grip; `offset` is pointer minus window origin.
    DragPending { offset: Point },
    /// Button went down on the grip.
    Resizing { start_pointer: Point, start_size: Size },
}

/// Window operations the surface needs.
pub trait SurfaceHost {
    fn position(&self) -> Point;
    fn size(&self) -> Size;
    fn set_position(&mut self, position: Point);
    fn set_size(&mut self, size: Size);
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Drag and resize handling for one popup window.
#[derive(Debug, Default)]
pub struct DisplaySurface {
    interaction: Interaction,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Primary button pressed: starts a resize on the grip, otherwise arms a drag.
    pub fn pointer_down(&mut self, host: &mut impl SurfaceHost, pointer: Pointer) {
        let size = host.size();
        self.interaction = if size.grip_contains(pointer.local) {
            Interaction::Resizing {
                start_pointer: pointer.screen,
                start_size: size,
            }
        } else {
            Interaction::DragPending {
                offset: pointer.screen - host.position(),
            }
        };
        debug!("Pointer down at {:?}: {:?}", pointer.screen, self.interaction);
    }

    /// Pointer moved: applies live resize or drag, then refreshes the hover cursor.
    pub fn pointer_move(&mut self, host: &mut impl SurfaceHost, pointer: Pointer, primary_held: bool) {
        match self.interaction {
            Interaction::Resizing {
                start_pointer,
                start_size,
            } => {
                host.set_size(start_size.resized_by(pointer.screen - start_pointer));
            }
            Interaction::DragPending { offset } if primary_held => {
                host.set_position(pointer.screen - offset);
            }
            _ => {}
        }

        let cursor = if host.size().grip_contains(pointer.local) {
            Cursor::DiagonalResize
        } else {
            Cursor::Default
        };
        host.set_cursor(cursor);
    }

    /// Any button released, anywhere: back to idle.
    pub fn pointer_up(&mut self, host: &mut impl SurfaceHost) {
        if self.interaction != Interaction::Idle {
            debug!("Pointer up, leaving {:?}", self.interaction);
        }
        self.interaction = Interaction::Idle;
        host.set_cursor(Cursor::Default);
    }
}
