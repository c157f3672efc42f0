//! Select command helpers which wire a configured selection engine with catalog filtering
//! and request validation.

mod config;
pub use self::config::*;

mod service;
pub use self::service::*;
