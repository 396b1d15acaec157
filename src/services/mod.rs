//! Seams to the remote provider. Commands only talk to these traits.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Datacenter, DiskImage, Operation, VmCreate, VmFilter, VmRecord, VmUpdate};

/// Virtual machine lifecycle operations.
///
/// A resource is a hostname or an id; resolving it is the implementor's job.
#[async_trait]
pub trait IaasService: Send + Sync {
    async fn list(&self, filter: &VmFilter) -> Result<Vec<VmRecord>>;

    async fn info(&self, resource: &str) -> Result<VmRecord>;

    async fn start(&self, resources: &[String], background: bool) -> Result<Vec<Operation>>;

    async fn stop(&self, resources: &[String], background: bool) -> Result<Vec<Operation>>;

    async fn reboot(&self, resources: &[String], background: bool) -> Result<Vec<Operation>>;

    async fn delete(&self, resources: &[String], background: bool) -> Result<Vec<Operation>>;

    async fn create(&self, request: &VmCreate, background: bool) -> Result<Value>;

    async fn update(&self, resource: &str, update: &VmUpdate, background: bool) -> Result<Value>;

    /// Attach the terminal to the VM console until the session ends.
    async fn console(&self, resource: &str) -> Result<()>;
}

#[async_trait]
pub trait DatacenterService: Send + Sync {
    async fn list(&self) -> Result<Vec<Datacenter>>;
}

/// Disk images. The datacenter is given by API id, already resolved by the caller.
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn list(&self, datacenter_id: Option<u64>, label: Option<&str>) -> Result<Vec<DiskImage>>;
}
