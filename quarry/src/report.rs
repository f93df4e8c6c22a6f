use std::{fs::OpenOptions, io::Write, path::PathBuf};

use crate::asset;

pub fn error_log_path() -> PathBuf {
    let mut path = asset::base_path();
    path.push("error.log");
    path
}

fn append_error_log(message: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(error_log_path())
    {
        let _ = writeln!(file, "{}\n", message);
    }
}

#[track_caller]
pub fn nonfatal_error(message: &str) {
    let location = std::panic::Location::caller();
    log::error!("nonfatal at {}: {}", location, message);
    append_error_log(&format!("nonfatal at {}:\n{}", location, message));
    eprintln!(
        "{}",
        console::style("A nonfatal error occurred. See error.log for details.").red()
    );
}

pub trait ResultExt<T> {
    fn unwrap_nonfatal(self) -> T;
}

impl<T: Default, E: std::error::Error> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn unwrap_nonfatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                nonfatal_error(&error.to_string());
                Default::default()
            }
        }
    }
}

fn panic_message<'a>(payload: &'a (dyn std::any::Any + Send)) -> &'a str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "An unknown error occurred"
    }
}

fn panic_handler(panic_info: &std::panic::PanicHookInfo) {
    log::error!("{}", panic_info);
    append_error_log(&panic_info.to_string());
    eprintln!(
        "{}",
        console::style("A fatal error occurred. See error.log for details.").red()
    );
    eprintln!("{}", panic_message(panic_info.payload()));
}

/// Clears the previous error log and routes panics, such as an action sent
/// to a receiver that no longer exists, into it.
pub fn install_panic_hook() {
    let _ = std::fs::remove_file(error_log_path());
    std::panic::set_hook(Box::new(panic_handler));
}
