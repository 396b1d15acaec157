use async_trait::async_trait;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::DiskImage;
use crate::services::ImageService;

/// Load images, optionally restricted to a datacenter id and a label.
pub async fn load_images(api: &ApiClient, datacenter_id: Option<u64>, label: Option<&str>) -> Result<Vec<DiskImage>> {
    let mut params = Vec::new();
    if let Some(id) = datacenter_id {
        params.push(("datacenter_id".to_string(), id.to_string()));
    }
    if let Some(label) = label.filter(|l| !l.trim().is_empty()) {
        params.push(("label".to_string(), label.to_string()));
    }
    let data = api.get("/v1/images", Some(params)).await?;
    Ok(serde_json::from_value(data)?)
}

pub struct HttpImages {
    api: ApiClient,
}

impl HttpImages {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ImageService for HttpImages {
    async fn list(&self, datacenter_id: Option<u64>, label: Option<&str>) -> Result<Vec<DiskImage>> {
        load_images(&self.api, datacenter_id, label).await
    }
}
