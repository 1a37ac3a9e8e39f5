//! UI module for the startup dialogs and the popup window.
//!
//! Everything here runs on the Slint event loop thread:
//! - `slint::Timer`: advances animation frames
//! - `on_winit_window_event`: platform tweaks that need the native window

pub mod dialogs;
pub mod handlers;
pub mod image_display;

pub use dialogs::{DesktopPrompter, show_error};
pub use handlers::setup_handlers;
pub use image_display::show_popup;

/// Keeps the popup out of the taskbar, like a tool window.
#[cfg(target_os = "windows")]
fn setup_platform_window_hooks(ui: &crate::ImageWindow) {
    use i_slint_backend_winit::winit::platform::windows::WindowExtWindows;
    use i_slint_backend_winit::{EventResult, WinitWindowAccessor};
    use slint::ComponentHandle;
    use std::cell::Cell;

    // The native window only exists once the event loop is running.
    let applied = Cell::new(false);
    ui.window().on_winit_window_event(move |window, _event| {
        if !applied.get() {
            let done = window
                .with_winit_window(|winit_window| winit_window.set_skip_taskbar(true))
                .is_some();
            if done {
                log::debug!("Popup hidden from taskbar");
            }
            applied.set(done);
        }
        EventResult::Propagate
    });
}

#[cfg(not(target_os = "windows"))]
fn setup_platform_window_hooks(_ui: &crate::ImageWindow) {}
