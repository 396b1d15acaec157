use serde::{Deserialize, Serialize};

/// A datacenter as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Datacenter {
    pub id: u64,
    pub iso: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub dc_code: Option<String>,
}

/// Display label for a datacenter id, looked up in the reference list.
pub fn datacenter_label(datacenters: &[Datacenter], id: Option<u64>) -> Option<&str> {
    let id = id?;
    datacenters.iter().find(|dc| dc.id == id).map(|dc| dc.iso.as_str())
}

/// Records that live in a datacenter.
pub trait Located {
    fn datacenter_id(&self) -> Option<u64>;
}

impl Located for crate::models::Disk {
    fn datacenter_id(&self) -> Option<u64> {
        self.datacenter_id
    }
}

impl Located for crate::models::DiskImage {
    fn datacenter_id(&self) -> Option<u64> {
        self.datacenter_id
    }
}

impl Located for crate::models::VmRecord {
    fn datacenter_id(&self) -> Option<u64> {
        self.datacenter_id
    }
}
