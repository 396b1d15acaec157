use serde::{Deserialize, Serialize};

/// A system image a VM can boot from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiskImage {
    pub disk_id: u64,
    pub label: String,
    #[serde(default)]
    pub os_arch: Option<String>,
    #[serde(default)]
    pub kernel_version: Option<String>,
    #[serde(default)]
    pub datacenter_id: Option<u64>,
}

impl DiskImage {
    /// Whether `choice` names this image, by label (case-insensitive) or disk id.
    pub fn matches(&self, choice: &str) -> bool {
        let choice = choice.trim();
        self.label.eq_ignore_ascii_case(choice) || self.disk_id.to_string() == choice
    }
}
