//! Shared flag types and validation used by several commands.

use clap::ValueEnum;
use std::fmt;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::models::{Datacenter, DiskImage};

pub const DEFAULT_IMAGE: &str = "Debian 7";

/// How many times a mismatched password confirmation is retried.
pub const PASSWORD_ATTEMPTS: usize = 3;

/// Datacenters a VM can be placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DatacenterCode {
    /// Paris, France
    #[value(name = "FR")]
    Fr,
    /// Baltimore, United States
    #[value(name = "US")]
    Us,
    /// Bissen, Luxembourg
    #[value(name = "LU")]
    Lu,
}

impl DatacenterCode {
    pub fn iso(&self) -> &'static str {
        match self {
            DatacenterCode::Fr => "FR",
            DatacenterCode::Us => "US",
            DatacenterCode::Lu => "LU",
        }
    }
}

impl fmt::Display for DatacenterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iso())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IpVersion {
    #[value(name = "4")]
    V4,
    #[value(name = "6")]
    V6,
}

impl IpVersion {
    pub fn as_u8(&self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// The datacenter record for `code` in an already loaded reference list.
pub fn find_datacenter(datacenters: &[Datacenter], code: DatacenterCode) -> Result<&Datacenter> {
    datacenters
        .iter()
        .find(|dc| dc.iso.eq_ignore_ascii_case(code.iso()))
        .ok_or_else(|| Error::NotFound(format!("datacenter {}", code)))
}

/// Check an `--image` choice against the images available in `datacenter`.
///
/// Returns the exact image chosen, so a disk id picks one build even when
/// several images share a label.
pub async fn resolve_image(ctx: &Context, choice: &str, datacenter: &Datacenter) -> Result<DiskImage> {
    let images = ctx.images.list(Some(datacenter.id), None).await?;
    let choice = choice.trim();
    let by_id = images.iter().find(|i| i.disk_id.to_string() == choice);
    if let Some(image) = by_id.or_else(|| images.iter().find(|i| i.matches(choice))) {
        return Ok(image.clone());
    }
    let mut labels: Vec<&str> = images.iter().map(|i| i.label.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();
    Err(Error::Usage(format!(
        "image '{}' is not available in {} (choose from: {})",
        choice,
        datacenter.iso,
        labels.join(", ")
    )))
}

/// Source of hidden interactive input.
pub trait Prompter: Send + Sync {
    fn prompt_hidden(&self, prompt: &str) -> Result<String>;
}

/// Reads from the controlling terminal without echo.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt_hidden(&self, prompt: &str) -> Result<String> {
        Ok(rpassword::prompt_password(prompt)?)
    }
}

/// Ask for a password twice; both entries must match and be non-empty.
pub fn prompt_confirmed_password(prompter: &dyn Prompter) -> Result<String> {
    for attempt in 1..=PASSWORD_ATTEMPTS {
        let first = prompter.prompt_hidden("password: ")?;
        if first.is_empty() {
            tracing::warn!(attempt, "empty password");
            eprintln!("{}", yansi::Paint::new("Error: a password is required").red());
            continue;
        }
        let second = prompter.prompt_hidden("Repeat for confirmation: ")?;
        if first == second {
            return Ok(first);
        }
        tracing::warn!(attempt, "the two entered values do not match");
        eprintln!("{}", yansi::Paint::new("Error: the two entered values do not match").red());
    }
    Err(Error::PasswordMismatch)
}
