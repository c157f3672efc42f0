//! This module reimports a common used types.

pub use crate::models::Asset;
pub use crate::models::SelectionFailure;
pub use crate::models::SelectionResult;
pub use crate::models::SelectionSuccess;
pub use crate::models::common::Cost;
pub use crate::models::{INTERNAL_FAILURE_CODE, VALIDATION_FAILURE_CODE};

pub use crate::selection::DynamicProgEngine;
pub use crate::selection::GreedyEngine;
pub use crate::selection::HybridEngine;
pub use crate::selection::SelectionEngine;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::compare_floats;
pub use crate::utils::{GenericError, GenericResult};
