use serde::{Deserialize, Serialize};

use crate::models::disk::Disk;
use crate::models::vm_state::VmState;

/// A single IP address bound to a network interface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IpAddress {
    pub id: Option<u64>,
    pub ip: String,
    pub version: u8,
}

/// A network interface of a VM.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Iface {
    pub id: Option<u64>,
    #[serde(default)]
    pub bandwidth: Option<u64>,
    #[serde(default)]
    pub ips: Vec<IpAddress>,
}

/// A virtual machine as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VmRecord {
    pub id: u64,
    pub hostname: String,
    pub state: VmState,
    #[serde(default)]
    pub cores: Option<u32>,
    /// Memory in MB
    #[serde(default)]
    pub memory: Option<u64>,
    /// Whether the emergency console is active (0/1 on the wire)
    #[serde(default)]
    pub console: Option<u8>,
    #[serde(default)]
    pub console_url: Option<String>,
    #[serde(default)]
    pub datacenter_id: Option<u64>,
    #[serde(default)]
    pub ifaces: Vec<Iface>,
    #[serde(default)]
    pub disks: Vec<Disk>,
}

impl VmRecord {
    pub fn console_enabled(&self) -> bool {
        self.console.unwrap_or(0) != 0
    }
}
