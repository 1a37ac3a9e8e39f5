//! Pointer handlers for the popup window.
//!
//! The TouchArea in `ImageWindow` forwards press, move and release to
//! these callbacks, which feed a shared [`DisplaySurface`]. Window geometry
//! is read and written in physical pixels through [`SlintSurfaceHost`].

use crate::state::{Cursor, DisplaySurface, Point, Pointer, Size, SurfaceHost};
use slint::{ComponentHandle, PhysicalPosition, PhysicalSize};
use std::cell::RefCell;
use std::rc::Rc;

/// [`SurfaceHost`] over a live popup window.
pub struct SlintSurfaceHost<'a> {
    ui: &'a crate::ImageWindow,
}

impl<'a> SlintSurfaceHost<'a> {
    pub fn new(ui: &'a crate::ImageWindow) -> Self {
        Self { ui }
    }

    /// Converts TouchArea coordinates (logical) into a physical pointer.
    fn pointer(&self, x: f32, y: f32) -> Pointer {
        let scale = self.ui.window().scale_factor();
        let local = Point::new((x * scale).round() as i32, (y * scale).round() as i32);
        Pointer::at(local, self.position())
    }
}

impl SurfaceHost for SlintSurfaceHost<'_> {
    fn position(&self) -> Point {
        let position = self.ui.window().position();
        Point::new(position.x, position.y)
    }

    fn size(&self) -> Size {
        let size = self.ui.window().size();
        Size::new(size.width as i32, size.height as i32)
    }

    fn set_position(&mut self, position: Point) {
        self.ui
            .window()
            .set_position(PhysicalPosition::new(position.x, position.y));
    }

    fn set_size(&mut self, size: Size) {
        self.ui
            .window()
            .set_size(PhysicalSize::new(size.width as u32, size.height as u32));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.ui.set_grip_hover(cursor == Cursor::DiagonalResize);
    }
}

/// Registers the pointer callbacks that drag and resize the popup.
pub fn setup_handlers(ui: &crate::ImageWindow) {
    let surface = Rc::new(RefCell::new(DisplaySurface::new()));

    ui.on_pointer_down({
        let ui_handle = ui.as_weak();
        let surface = surface.clone();
        move |x, y| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut host = SlintSurfaceHost::new(&ui);
            let pointer = host.pointer(x, y);
            surface.borrow_mut().pointer_down(&mut host, pointer);
        }
    });

    ui.on_pointer_move({
        let ui_handle = ui.as_weak();
        let surface = surface.clone();
        move |x, y, primary_held| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut host = SlintSurfaceHost::new(&ui);
            let pointer = host.pointer(x, y);
            surface
                .borrow_mut()
                .pointer_move(&mut host, pointer, primary_held);
        }
    });

    ui.on_pointer_up({
        let ui_handle = ui.as_weak();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut host = SlintSurfaceHost::new(&ui);
            surface.borrow_mut().pointer_up(&mut host);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use slint::LogicalPosition;
    use slint::platform::{PointerEventButton, WindowEvent};

    fn move_pointer(ui: &crate::ImageWindow, x: f32, y: f32) {
        ui.window().dispatch_event(WindowEvent::PointerMoved {
            position: LogicalPosition::new(x, y),
        });
    }

    fn press(ui: &crate::ImageWindow, x: f32, y: f32) {
        ui.window().dispatch_event(WindowEvent::PointerPressed {
            position: LogicalPosition::new(x, y),
            button: PointerEventButton::Left,
        });
    }

    fn release(ui: &crate::ImageWindow, x: f32, y: f32) {
        ui.window().dispatch_event(WindowEvent::PointerReleased {
            position: LogicalPosition::new(x, y),
            button: PointerEventButton::Left,
        });
    }

    #[test]
    fn grip_cursor_tracks_hover_and_resets_on_release() {
        i_slint_backend_testing::init_no_event_loop();
        let ui = crate::ImageWindow::new().unwrap();
        ui.window().set_size(PhysicalSize::new(200, 100));
        setup_handlers(&ui);
        ui.show().unwrap();

        move_pointer(&ui, 50.0, 50.0);
        assert!(!ui.get_grip_hover());

        // No button held.
        move_pointer(&ui, 195.0, 95.0);
        assert!(ui.get_grip_hover());

        move_pointer(&ui, 50.0, 50.0);
        assert!(!ui.get_grip_hover());

        press(&ui, 195.0, 95.0);
        move_pointer(&ui, 196.0, 96.0);
        assert!(ui.get_grip_hover());
        release(&ui, 196.0, 96.0);
        assert!(!ui.get_grip_hover());
    }
}
