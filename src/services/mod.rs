//! Service layer for startup logic.
//!
//! Separates the startup flow from windowing for testability.

pub mod bootstrap_service;
pub mod folder_service;

pub use bootstrap_service::{BootstrapOutcome, BootstrapService, Prompter};
pub use folder_service::SystemFolderOpener;
