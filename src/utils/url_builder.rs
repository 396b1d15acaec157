use urlencoding::encode;

/// Join the configured API base URL and an endpoint path.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, trimmed)
}

/// Endpoint for a single resource, with the reference percent-encoded.
///
/// `resource_path("/v1/vms", "web 1", Some("stop"))` is `/v1/vms/web%201/stop`.
pub fn resource_path(collection: &str, reference: &str, action: Option<&str>) -> String {
    let mut path = format!("{}/{}", collection.trim_end_matches('/'), encode(reference.trim()));
    if let Some(action) = action {
        path.push('/');
        path.push_str(action);
    }
    path
}
