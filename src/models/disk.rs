use serde::{Deserialize, Serialize};

/// A disk attached to a VM.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Disk {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kernel_version: Option<String>,
    /// Size in MB
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub datacenter_id: Option<u64>,
}
