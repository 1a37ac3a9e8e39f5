//! Startup flow that ends with the file to pop up, or a clean exit.
//!
//! Dialogs and the OS file browser go through [`Prompter`] and
//! [`FolderOpener`] so the flow can be exercised without a display.

use crate::error::Result;
use crate::file_utils;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// User-facing prompts shown during startup.
pub trait Prompter {
    /// Blocking informational message.
    fn notice(&mut self, title: &str, message: &str);
    /// Welcome screen; returns once the user dismisses it.
    fn welcome(&mut self) -> Result<()>;
    /// Lets the user pick one of `names`. `None` means cancelled.
    fn choose(&mut self, names: &[String]) -> Result<Option<String>>;
}

/// Opens a folder in the platform file browser. Best effort.
pub trait FolderOpener {
    fn open_folder(&self, dir: &Path);
}

/// How startup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The asset folder did not exist and was created.
    FolderCreated,
    /// The asset folder holds no supported files.
    NoImages,
    /// The user backed out of the picker.
    Cancelled,
    /// The file to display.
    Selected(PathBuf),
}

/// Runs the startup flow against `asset_dir`.
pub struct BootstrapService<'a, P: Prompter, O: FolderOpener> {
    asset_dir: &'a Path,
    prompter: P,
    opener: O,
}

impl<'a, P: Prompter, O: FolderOpener> BootstrapService<'a, P, O> {
    pub fn new(asset_dir: &'a Path, prompter: P, opener: O) -> Self {
        Self {
            asset_dir,
            prompter,
            opener,
        }
    }

    pub fn run(mut self) -> Result<BootstrapOutcome> {
        if !self.asset_dir.exists() {
            fs::create_dir_all(self.asset_dir)?;
            info!("Created asset folder {}", self.asset_dir.display());
            self.prompter.notice(
                "Notice",
                &format!(
                    "The gif folder has been created!\n\n{}\n\nPut your image files there and run the program again.",
                    self.asset_dir.display()
                ),
            );
            self.opener.open_folder(self.asset_dir);
            return Ok(BootstrapOutcome::FolderCreated);
        }

        self.prompter.welcome()?;

        let files = file_utils::scan_directory(self.asset_dir)?;
        info!(
            "Found {} image(s) in {}",
            files.len(),
            self.asset_dir.display()
        );
        if files.is_empty() {
            self.prompter.notice(
                "Notice",
                "There are no image files in the gif folder!\nOpen the folder and copy in the images you want.",
            );
            self.opener.open_folder(self.asset_dir);
            return Ok(BootstrapOutcome::NoImages);
        }

        let names: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        match self.prompter.choose(&names)? {
            Some(name) if !name.is_empty() => {
                let path = self.asset_dir.join(&name);
                info!("Selected {}", path.display());
                Ok(BootstrapOutcome::Selected(path))
            }
            _ => {
                warn!("Image selection cancelled");
                self.prompter.notice("Notice", "Cancelled.");
                Ok(BootstrapOutcome::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct ScriptedPrompter {
        pick: Option<String>,
        notices: Vec<String>,
        welcomed: bool,
        offered: Vec<String>,
    }

    impl Prompter for &mut ScriptedPrompter {
        fn notice(&mut self, _title: &str, message: &str) {
            self.notices.push(message.to_string());
        }

        fn welcome(&mut self) -> Result<()> {
            self.welcomed = true;
            Ok(())
        }

        fn choose(&mut self, names: &[String]) -> Result<Option<String>> {
            self.offered = names.to_vec();
            Ok(self.pick.clone())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl FolderOpener for &RecordingOpener {
        fn open_folder(&self, dir: &Path) {
            self.opened.borrow_mut().push(dir.to_path_buf());
        }
    }

    #[test]
    fn absent_folder_is_created_and_nothing_else_happens() {
        let root = tempfile::tempdir().unwrap();
        let asset_dir = root.path().join("gif");
        let mut prompter = ScriptedPrompter::default();
        let opener = RecordingOpener::default();

        let outcome = BootstrapService::new(&asset_dir, &mut prompter, &opener)
            .run()
            .unwrap();

        assert_eq!(outcome, BootstrapOutcome::FolderCreated);
        assert!(asset_dir.is_dir());
        assert_eq!(prompter.notices.len(), 1);
        assert!(prompter.notices[0].contains(&asset_dir.display().to_string()));
        assert!(!prompter.welcomed);
        assert!(prompter.offered.is_empty());
        assert_eq!(*opener.opened.borrow(), vec![asset_dir]);
    }

    #[test]
    fn folder_without_images_reports_and_exits() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("readme.txt"), b"hello").unwrap();
        let mut prompter = ScriptedPrompter::default();
        let opener = RecordingOpener::default();

        let outcome = BootstrapService::new(root.path(), &mut prompter, &opener)
            .run()
            .unwrap();

        assert_eq!(outcome, BootstrapOutcome::NoImages);
        assert!(prompter.welcomed);
        assert!(prompter.offered.is_empty());
        assert_eq!(prompter.notices.len(), 1);
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn picked_file_is_returned() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("b.gif"), b"").unwrap();
        fs::write(root.path().join("a.png"), b"").unwrap();
        fs::write(root.path().join("notes.txt"), b"").unwrap();
        let mut prompter = ScriptedPrompter {
            pick: Some("b.gif".to_string()),
            ..Default::default()
        };
        let opener = RecordingOpener::default();

        let outcome = BootstrapService::new(root.path(), &mut prompter, &opener)
            .run()
            .unwrap();

        assert_eq!(
            outcome,
            BootstrapOutcome::Selected(root.path().join("b.gif"))
        );
        assert_eq!(prompter.offered, vec!["a.png", "b.gif"]);
        assert!(prompter.notices.is_empty());
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn cancelled_picker_exits_with_notice() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("a.png"), b"").unwrap();
        let mut prompter = ScriptedPrompter::default();
        let opener = RecordingOpener::default();

        let outcome = BootstrapService::new(root.path(), &mut prompter, &opener)
            .run()
            .unwrap();

        assert_eq!(outcome, BootstrapOutcome::Cancelled);
        assert_eq!(prompter.notices, vec!["Cancelled."]);
    }
}
