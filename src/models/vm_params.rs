use serde::Serialize;

use crate::params::{DatacenterCode, IpVersion};

/// Filters accepted by the VM listing. Only provided fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VmFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl VmFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(state) = &self.state {
            params.push(("state".to_string(), state.clone()));
        }
        params
    }
}

/// Everything needed to create a VM.
///
/// The datacenter and image are already resolved against reference data.
#[derive(Clone, Debug, PartialEq)]
pub struct VmCreate {
    pub datacenter: DatacenterCode,
    pub datacenter_id: u64,
    pub memory: u64,
    pub cores: u32,
    pub ip_version: IpVersion,
    pub bandwidth: u64,
    pub login: String,
    pub password: Option<String>,
    pub hostname: String,
    pub disk_id: u64,
    pub run: Option<String>,
    pub ssh_key: Option<String>,
}

/// Changes requested on an existing VM. `None` means leave unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VmUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<bool>,
}
