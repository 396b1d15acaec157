use yansi::Paint;

use crate::context::Context;
use crate::error::{Error, Result};

/// Ensure credentials are present, then make one read-only call with them.
pub async fn run(ctx: &Context) -> Result<()> {
    let mut missing = Vec::new();
    if ctx.config.api_base_url.trim().is_empty() {
        missing.push("API_BASE_URL");
    }
    if ctx.config.api_token.trim().is_empty() {
        missing.push("API_TOKEN");
    }
    if !missing.is_empty() {
        return Err(Error::Usage(format!("{} is not configured", missing.join(" and "))));
    }

    let datacenters = ctx.datacenters.list().await?;
    ctx.out.echo(
        Paint::new(format!(
            "Configuration looks valid ({} datacenters returned by {})",
            datacenters.len(),
            ctx.config.api_base_url
        ))
        .green()
        .to_string(),
    );
    Ok(())
}
