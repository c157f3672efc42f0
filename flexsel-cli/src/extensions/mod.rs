//! Contains tooling extensions built on top of the core selection crate.

pub mod generate;
pub mod select;
