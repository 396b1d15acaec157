use serde::{Deserialize, Serialize};

/// A server-side job queued by a mutating call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_id: Option<u64>,
}

impl Operation {
    pub fn is_done(&self) -> bool {
        self.step.eq_ignore_ascii_case("DONE")
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.step.to_ascii_uppercase().as_str(), "ERROR" | "CANCEL")
    }
}
