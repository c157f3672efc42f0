use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An asset catalog entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAsset {
    /// A unique asset identifier.
    pub code: String,
    /// A display label.
    pub name: String,
    /// A cost incurred if the asset is activated.
    pub activation_cost: f64,
    /// Dates on which the asset can be activated.
    pub availability: Vec<NaiveDate>,
    /// A capacity contributed if the asset is selected.
    pub volume: i64,
}

/// A selection request: a date and a volume to be covered on it.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    /// An activation date.
    pub date: NaiveDate,
    /// A target volume. Kept signed so that invalid requests can be validated, not rejected
    /// at the parsing level.
    pub volume: i64,
}

/// A selected asset view returned to the caller on success.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAsset {
    /// A unique asset identifier.
    pub code: String,
    /// A display label.
    pub name: String,
    /// An activation price of the asset.
    pub price: f64,
    /// Dates on which the asset can be activated.
    pub availability: Vec<NaiveDate>,
    /// A capacity contributed by the asset.
    pub volume: i64,
}

/// An error payload returned to the caller on failure.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    /// A human readable reason.
    pub error: String,
    /// A transport status matching the failure classification.
    pub status: i32,
}
