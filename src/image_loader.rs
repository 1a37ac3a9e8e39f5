//! Decoding of the selected file into displayable content.
//!
//! Static images are decoded once. GIFs are decoded to fully composited RGBA
//! frames up front so playback only swaps buffers.

use crate::error::{AppError, Result};
use crate::file_utils;
use crate::state::Size;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};
use log::debug;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// One animation frame and how long the file asks for it to be shown.
pub struct AnimationFrame {
    pub pixels: RgbaImage,
    pub delay: Duration,
}

/// Content of the popup, fixed for the lifetime of the window.
pub enum Content {
    Static(RgbaImage),
    Animation(Vec<AnimationFrame>),
}

impl Content {
    /// Loads `path`, choosing animation or still image by extension.
    pub fn load(path: &Path) -> Result<Content> {
        let content = if file_utils::is_animation(path) {
            Content::Animation(load_animation(path)?)
        } else {
            Content::Static(load_static(path)?)
        };

        let size = content.natural_size();
        debug!(
            "Loaded {} ({}x{}, {} frame(s))",
            path.display(),
            size.width,
            size.height,
            content.frame_count()
        );
        Ok(content)
    }

    /// Pixel size of the image, or of the first frame for animations.
    pub fn natural_size(&self) -> Size {
        let first = match self {
            Content::Static(pixels) => Some(pixels),
            Content::Animation(frames) => frames.first().map(|frame| &frame.pixels),
        };
        first
            .map(|pixels| Size::new(pixels.width() as i32, pixels.height() as i32))
            .unwrap_or(Size::new(0, 0))
    }

    pub fn frame_count(&self) -> usize {
        match self {
            Content::Static(_) => 1,
            Content::Animation(frames) => frames.len(),
        }
    }
}

fn open_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::ImageLoad(format!("{}: {}", path.display(), err))
}

fn load_static(path: &Path) -> Result<RgbaImage> {
    let img = image::ImageReader::open(path)
        .map_err(|e| open_error(path, e))?
        .with_guessed_format()
        .map_err(|e| open_error(path, e))?
        .decode()?;
    Ok(img.to_rgba8())
}

fn load_animation(path: &Path) -> Result<Vec<AnimationFrame>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let decoder = GifDecoder::new(BufReader::new(file))?;

    let frames: Vec<AnimationFrame> = decoder
        .into_frames()
        .collect_frames()?
        .into_iter()
        .map(|frame| AnimationFrame {
            delay: Duration::from(frame.delay()),
            pixels: frame.into_buffer(),
        })
        .collect();

    if frames.is_empty() {
        return Err(open_error(path, "animation has no frames"));
    }
    Ok(frames)
}

/// Converts decoded RGBA pixels into a Slint image.
pub fn create_slint_image(pixels: &RgbaImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        pixels.as_raw(),
        pixels.width(),
        pixels.height(),
    );
    Image::from_rgba8(buffer)
}
