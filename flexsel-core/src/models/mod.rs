//! A collection of models to represent assets and selection outcome in the demand-response domain.

pub mod common;

mod asset;
pub use self::asset::*;

mod result;
pub use self::result::*;
