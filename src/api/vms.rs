use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;

use super::client::ApiClient;
use super::operations::{operations_from_value, wait_for_operations};
use super::ssh_keys::{resolve_ssh_key, SshKeyRef};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Operation, VmCreate, VmFilter, VmRecord, VmUpdate};
use crate::services::IaasService;
use crate::utils::resource_path;

const VMS: &str = "/v1/vms";

/// VM lifecycle over the HTTP API.
pub struct HttpIaas {
    api: ApiClient,
    poll_interval: Duration,
    console_host: String,
}

impl HttpIaas {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        Self {
            api,
            poll_interval: config.poll_interval,
            console_host: config.console_host.clone(),
        }
    }

    /// Queue `action` for every resource, then wait unless `background`.
    async fn act_on_each(&self, method: Method, action: Option<&str>, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        let mut opers = Vec::with_capacity(resources.len());
        for resource in resources {
            let endpoint = resource_path(VMS, resource, action);
            let data = self.api.call(method.clone(), &endpoint, None, None).await?;
            opers.extend(operations_from_value(&data));
        }
        tracing::debug!(count = opers.len(), ?action, background, "queued operations");
        self.settle(opers, background).await
    }

    async fn settle(&self, opers: Vec<Operation>, background: bool) -> Result<Vec<Operation>> {
        if background {
            return Ok(opers);
        }
        wait_for_operations(&self.api, opers, self.poll_interval).await
    }

    /// Activate the emergency console if needed and return the ssh target.
    pub async fn console_target(&self, resource: &str) -> Result<String> {
        let vm = self.info(resource).await?;
        if !vm.console_enabled() {
            tracing::info!(hostname = %vm.hostname, "activating emergency console");
            let activate = VmUpdate {
                console: Some(true),
                ..Default::default()
            };
            self.update(&vm.id.to_string(), &activate, false).await?;
        }

        let host = vm
            .console_url
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(self.console_host.as_str());
        Ok(format!("{}@{}", vm.id, host))
    }
}

/// Request body for `POST /v1/vms`.
fn create_body(request: &VmCreate) -> Result<Value> {
    let mut body = json!({
        "datacenter_id": request.datacenter_id,
        "memory": request.memory,
        "cores": request.cores,
        "ip_version": request.ip_version.as_u8(),
        "bandwidth": request.bandwidth,
        "login": request.login,
        "hostname": request.hostname,
        "disk_id": request.disk_id,
        "disk_name": format!("sys_{}", request.hostname),
    });
    if let Some(password) = &request.password {
        body["password"] = Value::from(password.clone());
    }
    if let Some(run) = &request.run {
        body["run"] = Value::from(run.clone());
    }
    if let Some(key) = &request.ssh_key {
        match resolve_ssh_key(key)? {
            SshKeyRef::Material(material) => body["ssh_key"] = Value::from(material),
            SshKeyRef::Name(name) => body["keys"] = json!([name]),
        }
    }
    Ok(body)
}

#[async_trait]
impl IaasService for HttpIaas {
    async fn list(&self, filter: &VmFilter) -> Result<Vec<VmRecord>> {
        let data = self.api.get(VMS, Some(filter.to_query())).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn info(&self, resource: &str) -> Result<VmRecord> {
        let data = self.api.get(&resource_path(VMS, resource, None), None).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn start(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.act_on_each(Method::POST, Some("start"), resources, background).await
    }

    async fn stop(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.act_on_each(Method::POST, Some("stop"), resources, background).await
    }

    async fn reboot(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.act_on_each(Method::POST, Some("reboot"), resources, background).await
    }

    async fn delete(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.act_on_each(Method::DELETE, None, resources, background).await
    }

    async fn create(&self, request: &VmCreate, background: bool) -> Result<Value> {
        let body = create_body(request)?;
        tracing::info!(hostname = %request.hostname, datacenter = %request.datacenter, "creating VM");
        let data = self.api.call(Method::POST, VMS, Some(body), None).await?;
        self.settle(operations_from_value(&data), background).await?;
        Ok(data)
    }

    async fn update(&self, resource: &str, update: &VmUpdate, background: bool) -> Result<Value> {
        let body = serde_json::to_value(update)?;
        let data = self
            .api
            .call(Method::PUT, &resource_path(VMS, resource, None), Some(body), None)
            .await?;
        self.settle(operations_from_value(&data), background).await?;
        Ok(data)
    }

    async fn console(&self, resource: &str) -> Result<()> {
        let target = self.console_target(resource).await?;
        tracing::debug!(%target, "opening console");

        let status = tokio::process::Command::new("ssh")
            .arg("-t")
            .arg(&target)
            .status()
            .await?;
        if !status.success() {
            return Err(Error::Console(format!("ssh {} exited with {}", target, status)));
        }
        Ok(())
    }
}
