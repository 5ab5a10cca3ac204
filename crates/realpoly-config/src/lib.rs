//! # realpoly-config
//!
//! Loads the polynomial tolerance from a JSON settings file.
//!
//! The file holds a single `Epsilon` entry, given either as a number or as a
//! numeric string:
//!
//! ```json
//! { "Epsilon": 0.0001 }
//! ```
//!
//! Loading into the process-wide setting never fails: on any error the
//! current tolerance is kept and the failure is logged at `debug` level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod file;

pub use error::ConfigError;
pub use file::{
    apply_default_settings_file, apply_settings_file, apply_settings_file_to, load_settings,
    parse_settings, DEFAULT_SETTINGS_FILE,
};
