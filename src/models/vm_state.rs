use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state reported for a VM.
///
/// States the API may add later are kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VmState {
    Running,
    Halted,
    Paused,
    Locked,
    BeingCreated,
    Invalid,
    Deleted,
    Other(String),
}

impl VmState {
    pub fn as_str(&self) -> &str {
        match self {
            VmState::Running => "running",
            VmState::Halted => "halted",
            VmState::Paused => "paused",
            VmState::Locked => "locked",
            VmState::BeingCreated => "being_created",
            VmState::Invalid => "invalid",
            VmState::Deleted => "deleted",
            VmState::Other(s) => s,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, VmState::Running)
    }
}

impl From<String> for VmState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "running" => VmState::Running,
            "halted" => VmState::Halted,
            "paused" => VmState::Paused,
            "locked" => VmState::Locked,
            "being_created" => VmState::BeingCreated,
            "invalid" => VmState::Invalid,
            "deleted" => VmState::Deleted,
            _ => VmState::Other(s),
        }
    }
}

impl From<&str> for VmState {
    fn from(s: &str) -> Self {
        VmState::from(s.to_string())
    }
}

impl From<VmState> for String {
    fn from(state: VmState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
