//! Core crate contains main building blocks to pick a minimum-cost subset of flexibility
//! assets which together cover a demand-response target volume on activation.
//!

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

pub mod models;
pub mod prelude;
pub mod selection;
pub mod utils;
