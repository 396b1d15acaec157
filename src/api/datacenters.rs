use async_trait::async_trait;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::Datacenter;
use crate::services::DatacenterService;

pub async fn load_datacenters(api: &ApiClient) -> Result<Vec<Datacenter>> {
    let data = api.get("/v1/datacenters", None).await?;
    Ok(serde_json::from_value(data)?)
}

pub struct HttpDatacenters {
    api: ApiClient,
}

impl HttpDatacenters {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DatacenterService for HttpDatacenters {
    async fn list(&self) -> Result<Vec<Datacenter>> {
        load_datacenters(&self.api).await
    }
}
