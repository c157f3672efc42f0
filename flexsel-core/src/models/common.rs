//! Common types shared by the selection domain.

/// Alias to a scalar cost type.
pub type Cost = f64;
