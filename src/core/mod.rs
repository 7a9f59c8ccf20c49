

pub mod config;
pub mod error;

pub use self::config::ConsultConfig;
pub use self::error::{ConsultError, Result};
