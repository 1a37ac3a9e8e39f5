//! Opens the asset folder in the platform file browser.

use super::bootstrap_service::FolderOpener;
use log::{debug, warn};
use std::io;
use std::path::Path;
use std::process::Command;

#[cfg(target_os = "windows")]
const FILE_BROWSER: Option<&str> = Some("explorer.exe");
#[cfg(target_os = "macos")]
const FILE_BROWSER: Option<&str> = Some("open");
#[cfg(all(unix, not(target_os = "macos")))]
const FILE_BROWSER: Option<&str> = Some("xdg-open");
#[cfg(not(any(unix, target_os = "windows")))]
const FILE_BROWSER: Option<&str> = None;

/// Uses the desktop's own file browser. Failures are logged and ignored.
///
/// The launcher is spawned and left running; it is never waited on.
pub struct SystemFolderOpener {
    launcher: Option<&'static str>,
}

impl SystemFolderOpener {
    pub fn new() -> Self {
        Self {
            launcher: FILE_BROWSER,
        }
    }

    /// Spawns the launcher for `dir` and returns its process id.
    fn launch(&self, dir: &Path) -> io::Result<u32> {
        let Some(program) = self.launcher else {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Opening folders is not supported on this platform",
            ));
        };
        Command::new(program)
            .arg(dir)
            .spawn()
            .map(|child| child.id())
    }
}

impl FolderOpener for SystemFolderOpener {
    fn open_folder(&self, dir: &Path) {
        match self.launch(dir) {
            Ok(pid) => debug!(
                "Opened {} in file browser (launcher pid {})",
                dir.display(),
                pid
            ),
            Err(e) => warn!("Could not open {}: {}", dir.display(), e),
        }
    }
}
