//! Popup window creation and frame playback.
//!
//! Animation frames are converted to Slint images once; a chain of
//! single-shot timers on the UI thread swaps them in. The chain ends when
//! the window is gone.

use crate::error::Result;
use crate::image_loader::{self, Content};
use crate::state::Playback;
use log::{debug, info};
use slint::{ComponentHandle, Image, PhysicalSize};
use std::rc::Rc;

/// Opens the borderless popup showing `content` and runs until it is closed.
pub fn show_popup(content: Content) -> Result<()> {
    let ui = crate::ImageWindow::new()?;

    let size = content.natural_size();
    ui.window()
        .set_size(PhysicalSize::new(size.width as u32, size.height as u32));

    super::setup_handlers(&ui);
    super::setup_platform_window_hooks(&ui);

    match content {
        Content::Static(pixels) => {
            ui.set_frame(image_loader::create_slint_image(&pixels));
        }
        Content::Animation(frames) => {
            let playback = Playback::new(frames.iter().map(|frame| frame.delay));
            let images: Rc<Vec<Image>> = Rc::new(
                frames
                    .iter()
                    .map(|frame| image_loader::create_slint_image(&frame.pixels))
                    .collect(),
            );
            if let Some(first) = images.first() {
                ui.set_frame(first.clone());
            }
            if playback.is_animated() {
                info!("Starting playback of {} frames", images.len());
                schedule_next_frame(ui.as_weak(), images, playback);
            }
        }
    }

    ui.run()?;
    Ok(())
}

fn schedule_next_frame(
    ui_handle: slint::Weak<crate::ImageWindow>,
    images: Rc<Vec<Image>>,
    mut playback: Playback,
) {
    slint::Timer::single_shot(playback.current_delay(), move || {
        let Some(ui) = ui_handle.upgrade() else {
            debug!("Popup closed, stopping playback");
            return;
        };
        let index = playback.advance();
        if let Some(image) = images.get(index) {
            ui.set_frame(image.clone());
        }
        schedule_next_frame(ui_handle, images, playback);
    });
}
