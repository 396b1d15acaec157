use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::utils::{absolute_url, build_query_string, value_to_short_string};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Echo every request as a curl command line (and its response) on stderr.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

/// Authenticated access to the provider's JSON API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    api_base_url: String,
    api_token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("gandi-cli/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    pub async fn get(&self, endpoint: &str, params: Option<Vec<(String, String)>>) -> Result<Value> {
        self.call(Method::GET, endpoint, None, params).await
    }

    /// Send one request and return the `data` member of the response envelope.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        params: Option<Vec<(String, String)>>,
    ) -> Result<Value> {
        self.log_request(&method, endpoint, body.as_ref(), params.as_deref());
        tracing::debug!(%method, endpoint, "API request");

        let url = absolute_url(&self.api_base_url, endpoint);
        let mut req = self.client.request(method, &url);
        if !self.api_token.is_empty() {
            req = req.header("API-Token", &self.api_token);
        }
        if let Some(ref p) = params {
            req = req.query(p);
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let payload = match resp.json::<Value>().await {
            Ok(v) => v,
            Err(e) if status == StatusCode::NOT_FOUND => {
                tracing::debug!(%e, "non-JSON 404 body");
                return Err(Error::NotFound(endpoint.to_string()));
            }
            Err(e) => return Err(Error::Decode(format!("{} {}: {}", status, endpoint, e))),
        };

        let response_str = serde_json::to_string(&payload).unwrap_or_default();
        log_output(format!("Response:\n{}", Paint::new(response_str).rgb(100, 100, 100)));

        unwrap_envelope(status, payload, endpoint)
    }

    fn log_request(&self, method: &Method, endpoint: &str, body: Option<&Value>, params: Option<&[(String, String)]>) {
        if !VERBOSE.load(Ordering::Relaxed) {
            return;
        }
        let mut url_for_log = absolute_url(&self.api_base_url, endpoint);
        if let Some(p) = params.filter(|p| !p.is_empty()) {
            url_for_log = format!("{}?{}", url_for_log, build_query_string(p));
        }

        let mut parts = Vec::new();
        parts.push(Paint::new("curl").green().bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).yellow().bold()));
        parts.push(format!("'{}'", Paint::new(&url_for_log).cyan()));
        if !self.api_token.is_empty() {
            // Never echo the token itself.
            parts.push(format!("{} {}", Paint::new("-H").magenta(), Paint::new("'API-Token: ****'").magenta()));
        }
        if let Some(d) = body {
            let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
            let escaped_json = json_str.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-H").magenta(),
                Paint::new("'Content-Type: application/json'").magenta()
            ));
            parts.push(format!("{} {}", Paint::new("-d").blue(), Paint::new(format!("'{}'", escaped_json)).white()));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}

/// Turn a `{"code", "detail", "data"}` envelope into the data or an error.
///
/// Bodies without a `code` member are taken as the data itself when the HTTP
/// status is a success.
pub fn unwrap_envelope(status: StatusCode, payload: Value, endpoint: &str) -> Result<Value> {
    let detail = |payload: &Value| {
        payload
            .get("detail")
            .and_then(|d| d.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| endpoint.to_string())
    };

    match payload.get("code").and_then(|c| c.as_str()) {
        Some("OKAY") => Ok(payload.get("data").cloned().unwrap_or(Value::Null)),
        Some("NOT_FOUND") => Err(Error::NotFound(detail(&payload))),
        Some(code) => Err(Error::Api {
            code: code.to_string(),
            detail: detail(&payload),
        }),
        None if status == StatusCode::NOT_FOUND => Err(Error::NotFound(endpoint.to_string())),
        None if !status.is_success() => Err(Error::Api {
            code: status.as_u16().to_string(),
            detail: value_to_short_string(&payload),
        }),
        None => Ok(payload),
    }
}
