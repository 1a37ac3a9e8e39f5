// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_loader;
mod services;
mod startup;
mod state;
mod ui;

use error::AppError;
use std::any::Any;
use std::panic;

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn main() {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();
    #[cfg(not(debug_assertions))]
    env_logger::init();

    let result = panic::catch_unwind(startup::run)
        .unwrap_or_else(|payload| Err(AppError::Unexpected(panic_message(payload))));

    if let Err(e) = result {
        log::error!("{}", e);
        ui::show_error(&e.to_string());
        std::process::exit(1);
    }
}
