#[cfg(test)]
#[path = "../../tests/unit/format/serializer_test.rs"]
mod serializer_test;

use crate::format::{CatalogAsset, ErrorOutput, SelectedAsset};
use flexsel_core::models::{Asset, SelectionResult};
use flexsel_core::utils::GenericResult;
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::Arc;

/// Reads an asset catalog from json, validating the invariants engines rely on: positive
/// volumes and non-negative activation costs.
pub fn deserialize_catalog<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Arc<Asset>>> {
    let entries: Vec<CatalogAsset> =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize catalog: '{err}'"))?;

    entries
        .into_iter()
        .map(|entry| {
            if entry.volume <= 0 {
                return Err(format!("asset '{}' has non-positive volume: '{}'", entry.code, entry.volume).into());
            }
            if entry.activation_cost < 0. {
                return Err(
                    format!("asset '{}' has negative activation cost: '{}'", entry.code, entry.activation_cost).into()
                );
            }

            Ok(Arc::new(Asset::new(
                &entry.code,
                &entry.name,
                entry.activation_cost,
                entry.availability,
                entry.volume as usize,
            )))
        })
        .collect()
}

/// Writes an asset catalog as json.
pub fn serialize_catalog<W: Write>(writer: BufWriter<W>, assets: &[Arc<Asset>]) -> GenericResult<()> {
    let entries = assets
        .iter()
        .map(|asset| CatalogAsset {
            code: asset.code.clone(),
            name: asset.name.clone(),
            activation_cost: asset.activation_cost,
            availability: asset.availability.clone(),
            volume: asset.volume as i64,
        })
        .collect::<Vec<_>>();

    serde_json::to_writer_pretty(writer, &entries).map_err(|err| format!("cannot serialize catalog: '{err}'").into())
}

/// Writes a selection result as json: a list of selected asset views on success, an error
/// payload carrying the classification code as a transport status on failure.
pub fn serialize_selection_result<W: Write>(writer: BufWriter<W>, result: &SelectionResult) -> GenericResult<()> {
    match result {
        SelectionResult::Success(success) => {
            let assets = success
                .assets
                .iter()
                .map(|asset| SelectedAsset {
                    code: asset.code.clone(),
                    name: asset.name.clone(),
                    price: asset.activation_cost,
                    availability: asset.availability.clone(),
                    volume: asset.volume as i64,
                })
                .collect::<Vec<_>>();

            serde_json::to_writer_pretty(writer, &assets)
        }
        SelectionResult::Failure(failure) => {
            let error = ErrorOutput { error: failure.reason.clone(), status: failure.code };

            serde_json::to_writer_pretty(writer, &error)
        }
    }
    .map_err(|err| format!("cannot serialize selection result: '{err}'").into())
}
