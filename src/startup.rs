use crate::config::ASSET_FOLDER_NAME;
use crate::error::Result;
use crate::image_loader::Content;
use crate::services::{BootstrapOutcome, BootstrapService, SystemFolderOpener};
use crate::ui::DesktopPrompter;
use std::path::{Path, PathBuf};

/// First positional argument, if any. Flags are skipped.
fn asset_folder_from_args(args: impl IntoIterator<Item = std::ffi::OsString>) -> Option<PathBuf> {
    args.into_iter()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
}

/// `gif` next to the executable, falling back to the working directory.
fn default_asset_folder() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default();
    base.join(ASSET_FOLDER_NAME)
}

pub fn asset_folder() -> PathBuf {
    asset_folder_from_args(std::env::args_os()).unwrap_or_else(default_asset_folder)
}

/// Whole program: bootstrap, then the popup if a file was chosen.
pub fn run() -> Result<()> {
    let asset_dir = asset_folder();
    log::debug!("Using asset folder {}", asset_dir.display());

    let outcome =
        BootstrapService::new(&asset_dir, DesktopPrompter::new(), SystemFolderOpener::new())
            .run()?;

    match outcome {
        BootstrapOutcome::Selected(path) => {
            let content = Content::load(&path)?;
            crate::ui::show_popup(content)
        }
        other => {
            log::info!("Exiting without popup: {:?}", other);
            Ok(())
        }
    }
}
