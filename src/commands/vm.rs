//! The `vm` command group.
//!
//! Every command returns the raw service result in addition to what it prints.

use clap::Args;
use serde_json::Value;

use crate::context::Context;
use crate::error::Result;
use crate::models::{DiskImage, Operation, VmCreate, VmFilter, VmRecord, VmUpdate};
use crate::output::DEFAULT_JUSTIFY;
use crate::params::{find_datacenter, prompt_confirmed_password, resolve_image, DatacenterCode, IpVersion, DEFAULT_IMAGE};

const INFO_JUSTIFY: usize = 14;
const IMAGE_JUSTIFY: usize = 14;
const OPERATION_KEYS: [&str; 3] = ["id", "type", "step"];

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter results by state
    #[arg(long)]
    pub state: Option<String>,
    /// Display ids
    #[arg(long)]
    pub id: bool,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Hostnames or ids
    pub resource: Vec<String>,
}

/// Arguments shared by start, stop, reboot and delete.
#[derive(Args, Debug)]
pub struct LifecycleArgs {
    /// Hostnames or ids
    pub resource: Vec<String>,
    /// Return once the operation is queued instead of waiting for it
    #[arg(long)]
    pub background: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Datacenter where the VM will be spawned
    #[arg(long, value_enum, ignore_case = true, default_value_t = DatacenterCode::Fr)]
    pub datacenter: DatacenterCode,
    /// Quantity of RAM in megabytes to allocate
    #[arg(long, default_value_t = 256)]
    pub memory: u64,
    /// Number of CPUs
    #[arg(long, default_value_t = 1)]
    pub cores: u32,
    /// Version of the created IP
    #[arg(long, value_enum, default_value_t = IpVersion::V4)]
    pub ip_version: IpVersion,
    /// Network bandwidth in bit/s of the VM's first network interface
    #[arg(long, default_value_t = 102400)]
    pub bandwidth: u64,
    /// Login to create on the VM
    #[arg(long, default_value = "admin")]
    pub login: String,
    /// Prompt for the password of the root account and the created login
    #[arg(long)]
    pub password: bool,
    /// Hostname of the VM
    #[arg(long, default_value = "tempo")]
    pub hostname: String,
    /// Disk image used to boot the VM (label or disk id)
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,
    /// Shell command run as root in `/` at the end of the first boot
    #[arg(long)]
    pub run: Option<String>,
    /// Return once the creation is queued instead of waiting for it
    #[arg(long)]
    pub background: bool,
    /// SSH key to authorize: a public key file or the name of a registered key
    #[arg(long)]
    pub ssh_key: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Hostname or id
    pub resource: String,
    /// Quantity of RAM in megabytes to allocate
    #[arg(long)]
    pub memory: Option<u64>,
    /// Number of CPUs
    #[arg(long)]
    pub cores: Option<u32>,
    /// Activate the emergency console
    #[arg(long)]
    pub console: bool,
    /// Return once the update is queued instead of waiting for it
    #[arg(long)]
    pub background: bool,
}

#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// Hostname or id
    pub resource: String,
}

#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Only show images whose label matches
    pub label: Option<String>,
    /// Filter by datacenter
    #[arg(long, value_enum, ignore_case = true)]
    pub datacenter: Option<DatacenterCode>,
}

pub async fn list(ctx: &Context, args: ListArgs) -> Result<Vec<VmRecord>> {
    let filter = VmFilter {
        state: args.state.filter(|s| !s.is_empty()),
    };
    let mut output_keys = vec!["hostname", "state"];
    if args.id {
        output_keys.push("id");
    }

    let datacenters = ctx.datacenters.list().await?;
    let result = ctx.iaas.list(&filter).await?;
    for vm in &result {
        ctx.out.separator();
        ctx.out.vm(vm, &datacenters, &output_keys, DEFAULT_JUSTIFY);
    }
    Ok(result)
}

/// Fetch and render each resource in order, stopping at the first failure.
pub async fn info(ctx: &Context, args: InfoArgs) -> Result<Vec<VmRecord>> {
    if args.resource.is_empty() {
        return Ok(Vec::new());
    }
    let output_keys = ["hostname", "state", "cores", "memory", "console", "datacenter", "ip"];
    let disk_keys = ["label", "kernel_version", "name", "size"];

    let datacenters = ctx.datacenters.list().await?;
    let mut ret = Vec::with_capacity(args.resource.len());
    for item in &args.resource {
        let vm = ctx.iaas.info(item).await?;
        ctx.out.vm(&vm, &datacenters, &output_keys, INFO_JUSTIFY);
        for disk in &vm.disks {
            ctx.out.image(disk, &datacenters, &disk_keys, INFO_JUSTIFY);
        }
        ret.push(vm);
    }
    Ok(ret)
}

fn output_operations<'a>(ctx: &Context, opers: impl IntoIterator<Item = &'a Operation>) {
    for oper in opers {
        ctx.out.generic(oper, &OPERATION_KEYS, DEFAULT_JUSTIFY);
    }
}

pub async fn stop(ctx: &Context, args: LifecycleArgs) -> Result<Vec<Operation>> {
    let opers = ctx.iaas.stop(&args.resource, args.background).await?;
    if args.background {
        output_operations(ctx, &opers);
    }
    Ok(opers)
}

pub async fn start(ctx: &Context, args: LifecycleArgs) -> Result<Vec<Operation>> {
    let opers = ctx.iaas.start(&args.resource, args.background).await?;
    if args.background {
        output_operations(ctx, &opers);
    }
    Ok(opers)
}

pub async fn reboot(ctx: &Context, args: LifecycleArgs) -> Result<Vec<Operation>> {
    let opers = ctx.iaas.reboot(&args.resource, args.background).await?;
    if args.background {
        output_operations(ctx, &opers);
    }
    Ok(opers)
}

/// Stop whatever is running, then delete everything in one call.
///
/// Only the delete operations are returned; stop operations are printed
/// ahead of them in background mode.
pub async fn delete(ctx: &Context, args: LifecycleArgs) -> Result<Vec<Operation>> {
    let mut stop_opers = Vec::new();
    for item in &args.resource {
        let vm = ctx.iaas.info(item).await?;
        if vm.state.is_running() {
            tracing::debug!(resource = %item, "stopping before delete");
            let opers = ctx.iaas.stop(std::slice::from_ref(item), args.background).await?;
            stop_opers.extend(opers);
        }
    }

    let opers = ctx.iaas.delete(&args.resource, args.background).await?;
    // Background stops are listed too, ahead of the deletes they precede.
    if args.background {
        output_operations(ctx, stop_opers.iter().chain(opers.iter()));
    }
    Ok(opers)
}

pub async fn create(ctx: &Context, args: CreateArgs) -> Result<Value> {
    let datacenters = ctx.datacenters.list().await?;
    let datacenter = find_datacenter(&datacenters, args.datacenter)?;
    let image = resolve_image(ctx, &args.image, datacenter).await?;

    let password = if args.password {
        Some(prompt_confirmed_password(ctx.prompter.as_ref())?)
    } else {
        None
    };

    let request = VmCreate {
        datacenter: args.datacenter,
        datacenter_id: datacenter.id,
        memory: args.memory,
        cores: args.cores,
        ip_version: args.ip_version,
        bandwidth: args.bandwidth,
        login: args.login,
        password,
        hostname: args.hostname,
        disk_id: image.disk_id,
        run: args.run,
        ssh_key: args.ssh_key.or_else(|| ctx.config.ssh_key.clone()),
    };

    let result = ctx.iaas.create(&request, args.background).await?;
    if args.background {
        ctx.out.pretty(&result);
    }
    Ok(result)
}

pub async fn update(ctx: &Context, args: UpdateArgs) -> Result<Value> {
    let changes = VmUpdate {
        memory: args.memory,
        cores: args.cores,
        console: args.console.then_some(true),
    };

    let result = ctx.iaas.update(&args.resource, &changes, args.background).await?;
    if args.background {
        ctx.out.pretty(&result);
    }
    Ok(result)
}

pub async fn console(ctx: &Context, args: ConsoleArgs) -> Result<()> {
    ctx.iaas.console(&args.resource).await
}

pub async fn images(ctx: &Context, args: ImagesArgs) -> Result<Vec<DiskImage>> {
    let output_keys = ["label", "os_arch", "kernel_version", "disk_id", "dc"];

    let datacenters = ctx.datacenters.list().await?;
    let datacenter_id = args
        .datacenter
        .map(|code| find_datacenter(&datacenters, code).map(|dc| dc.id))
        .transpose()?;
    let result = ctx.images.list(datacenter_id, args.label.as_deref()).await?;
    for image in &result {
        ctx.out.separator();
        ctx.out.image(image, &datacenters, &output_keys, IMAGE_JUSTIFY);
    }
    Ok(result)
}
