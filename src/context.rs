use std::sync::Arc;

use crate::config::Config;
use crate::output::Output;
use crate::params::Prompter;
use crate::services::{DatacenterService, IaasService, ImageService};

/// Per-invocation state handed to every command.
#[derive(Clone)]
pub struct Context {
    pub iaas: Arc<dyn IaasService>,
    pub datacenters: Arc<dyn DatacenterService>,
    pub images: Arc<dyn ImageService>,
    pub prompter: Arc<dyn Prompter>,
    pub out: Output,
    pub config: Config,
}
