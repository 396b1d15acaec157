//! Waiting on queued operations in foreground mode.

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::time::Duration;

use super::client::ApiClient;
use crate::error::{Error, Result};
use crate::models::Operation;
use crate::utils::resource_path;

pub async fn get_operation(api: &ApiClient, id: u64) -> Result<Operation> {
    let data = api.get(&resource_path("/v1/operations", &id.to_string(), None), None).await?;
    Ok(serde_json::from_value(data)?)
}

/// Operations embedded in a create/update result.
///
/// The result is either one operation object or an array of them; anything
/// that does not decode as an operation is ignored.
pub fn operations_from_value(value: &Value) -> Vec<Operation> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect(),
        Value::Object(_) => serde_json::from_value(value.clone()).map(|op| vec![op]).unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Poll until every operation reaches DONE. Order of the input is preserved.
pub async fn wait_for_operations(api: &ApiClient, opers: Vec<Operation>, interval: Duration) -> Result<Vec<Operation>> {
    if opers.is_empty() {
        return Ok(opers);
    }

    let pb = ProgressBar::new(opers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| Error::Decode(format!("progress style: {}", e)))?
            .progress_chars("#>-"),
    );

    let mut current: Vec<Operation> = opers;
    pb.inc(current.iter().filter(|op| op.is_done()).count() as u64);
    loop {
        let mut pending = 0;
        for slot in current.iter_mut() {
            if slot.is_done() {
                continue;
            }
            let latest = get_operation(api, slot.id).await?;
            tracing::trace!(id = latest.id, step = %latest.step, "polled operation");
            if latest.is_failed() {
                pb.abandon_with_message(format!("{} failed", latest.kind));
                return Err(Error::OperationFailed {
                    id: latest.id,
                    kind: latest.kind,
                    step: latest.step,
                });
            }
            if latest.is_done() {
                pb.inc(1);
            } else {
                pb.set_message(format!("{} {}", latest.kind, latest.step));
                pending += 1;
            }
            *slot = latest;
        }
        if pending == 0 {
            break;
        }
        tokio::time::sleep(interval).await;
    }

    pb.finish_with_message("done");
    Ok(current)
}
