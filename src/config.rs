//! Application configuration constants.

use std::time::Duration;

/// Name of the asset folder created next to the executable.
pub const ASSET_FOLDER_NAME: &str = "gif";

/// Supported image file extensions for scanning the asset folder.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["gif", "jpg", "jpeg", "png", "webp"];

/// Extensions played back as looping animations.
pub const ANIMATED_IMAGE_EXTENSIONS: [&str; 1] = ["gif"];

/// Edge length of the bottom-right resize grip, in physical pixels.
pub const GRIP_SIZE: i32 = 16;

/// Smallest width or height the popup can be resized to.
pub const MIN_SURFACE_EXTENT: i32 = 40;

/// Frame delays shorter than this are treated as unset.
pub const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);

/// Delay used for frames whose own delay is unset.
pub const FALLBACK_FRAME_DELAY: Duration = Duration::from_millis(100);
