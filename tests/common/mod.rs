//! Recording in-memory services for driving commands in tests.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use gandi::config::Config;
use gandi::models::{Datacenter, Disk, DiskImage, Iface, IpAddress, Operation, VmCreate, VmFilter, VmRecord, VmState, VmUpdate};
use gandi::output::Output;
use gandi::params::Prompter;
use gandi::services::{DatacenterService, IaasService, ImageService};
use gandi::{Context, Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Datacenters,
    Images(Option<u64>, Option<String>),
    List(VmFilter),
    Info(String),
    Start(Vec<String>, bool),
    Stop(Vec<String>, bool),
    Reboot(Vec<String>, bool),
    Delete(Vec<String>, bool),
    Create(VmCreate, bool),
    Update(String, VmUpdate, bool),
    Console(String),
}

#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    pub fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than reference-data lookups.
    pub fn vm_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Datacenters | Call::Images(..)))
            .collect()
    }
}

pub struct MockIaas {
    rec: Arc<Recorder>,
    vms: Vec<VmRecord>,
    next_op: AtomicU64,
}

impl MockIaas {
    fn find(&self, resource: &str) -> Result<VmRecord> {
        self.vms
            .iter()
            .find(|vm| vm.hostname == resource || vm.id.to_string() == resource)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("vm {}", resource)))
    }

    fn operations(&self, kind: &str, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        for r in resources {
            self.find(r)?;
        }
        Ok(resources
            .iter()
            .map(|_| Operation {
                id: self.next_op.fetch_add(1, Ordering::SeqCst),
                kind: kind.to_string(),
                step: if background { "WAIT".into() } else { "DONE".into() },
                vm_id: None,
            })
            .collect())
    }
}

#[async_trait]
impl IaasService for MockIaas {
    async fn list(&self, filter: &VmFilter) -> Result<Vec<VmRecord>> {
        self.rec.push(Call::List(filter.clone()));
        Ok(self
            .vms
            .iter()
            .filter(|vm| filter.state.as_deref().map_or(true, |s| vm.state.as_str() == s))
            .cloned()
            .collect())
    }

    async fn info(&self, resource: &str) -> Result<VmRecord> {
        self.rec.push(Call::Info(resource.to_string()));
        self.find(resource)
    }

    async fn start(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.rec.push(Call::Start(resources.to_vec(), background));
        self.operations("vm_start", resources, background)
    }

    async fn stop(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.rec.push(Call::Stop(resources.to_vec(), background));
        self.operations("vm_stop", resources, background)
    }

    async fn reboot(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.rec.push(Call::Reboot(resources.to_vec(), background));
        self.operations("vm_reboot", resources, background)
    }

    async fn delete(&self, resources: &[String], background: bool) -> Result<Vec<Operation>> {
        self.rec.push(Call::Delete(resources.to_vec(), background));
        self.operations("vm_delete", resources, background)
    }

    async fn create(&self, request: &VmCreate, background: bool) -> Result<Value> {
        self.rec.push(Call::Create(request.clone(), background));
        Ok(json!([
            {"id": 500, "type": "disk_create", "step": "BILL"},
            {"id": 501, "type": "vm_create", "step": "BILL"}
        ]))
    }

    async fn update(&self, resource: &str, update: &VmUpdate, background: bool) -> Result<Value> {
        self.rec.push(Call::Update(resource.to_string(), update.clone(), background));
        self.find(resource)?;
        Ok(json!({"id": 600, "type": "vm_update", "step": "WAIT"}))
    }

    async fn console(&self, resource: &str) -> Result<()> {
        self.rec.push(Call::Console(resource.to_string()));
        self.find(resource).map(drop)
    }
}

pub struct MockDatacenters {
    rec: Arc<Recorder>,
}

#[async_trait]
impl DatacenterService for MockDatacenters {
    async fn list(&self) -> Result<Vec<Datacenter>> {
        self.rec.push(Call::Datacenters);
        Ok(datacenters())
    }
}

pub struct MockImages {
    rec: Arc<Recorder>,
}

#[async_trait]
impl ImageService for MockImages {
    async fn list(&self, dc_id: Option<u64>, label: Option<&str>) -> Result<Vec<DiskImage>> {
        self.rec.push(Call::Images(dc_id, label.map(str::to_string)));
        Ok(images()
            .into_iter()
            .filter(|i| dc_id.map_or(true, |id| i.datacenter_id == Some(id)))
            .filter(|i| label.map_or(true, |l| i.label.contains(l)))
            .collect())
    }
}

/// Answers prompts from a fixed script.
pub struct ScriptedPrompter {
    answers: Mutex<Vec<String>>,
    asked: Mutex<usize>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
            asked: Mutex::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_hidden(&self, _prompt: &str) -> Result<String> {
        *self.asked.lock().unwrap() += 1;
        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            return Err(Error::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no more answers")));
        }
        Ok(answers.remove(0))
    }
}

pub struct Harness {
    pub ctx: Context,
    pub rec: Arc<Recorder>,
    pub prompter: Arc<ScriptedPrompter>,
}

impl Harness {
    pub fn new(vms: Vec<VmRecord>) -> Self {
        Self::with_answers(vms, &[])
    }

    pub fn with_answers(vms: Vec<VmRecord>, answers: &[&str]) -> Self {
        let rec = Arc::new(Recorder::default());
        let prompter = Arc::new(ScriptedPrompter::new(answers));
        let ctx = Context {
            iaas: Arc::new(MockIaas {
                rec: rec.clone(),
                vms,
                next_op: AtomicU64::new(100),
            }),
            datacenters: Arc::new(MockDatacenters { rec: rec.clone() }),
            images: Arc::new(MockImages { rec: rec.clone() }),
            prompter: prompter.clone(),
            out: Output::buffer(),
            config: Config::default(),
        };
        Self { ctx, rec, prompter }
    }

    pub fn lines(&self) -> Vec<String> {
        self.ctx.out.lines()
    }
}

pub fn datacenters() -> Vec<Datacenter> {
    vec![
        Datacenter { id: 1, iso: "FR".into(), name: "Equinix Paris".into(), country: "France".into(), dc_code: None },
        Datacenter { id: 2, iso: "US".into(), name: "Level3 Baltimore".into(), country: "United States of America".into(), dc_code: None },
        Datacenter { id: 3, iso: "LU".into(), name: "Bissen".into(), country: "Luxembourg".into(), dc_code: None },
    ]
}

pub fn images() -> Vec<DiskImage> {
    vec![
        DiskImage { disk_id: 3315704, label: "Debian 7".into(), os_arch: Some("x86-64".into()), kernel_version: Some("3.2-x86_64".into()), datacenter_id: Some(1) },
        DiskImage { disk_id: 3315992, label: "Ubuntu 12.04".into(), os_arch: Some("x86-64".into()), kernel_version: Some("3.2-x86_64".into()), datacenter_id: Some(1) },
        DiskImage { disk_id: 3316070, label: "Debian 7".into(), os_arch: Some("x86-64".into()), kernel_version: Some("3.2-x86_64".into()), datacenter_id: Some(2) },
        DiskImage { disk_id: 3316133, label: "Debian 7".into(), os_arch: Some("x86-32".into()), kernel_version: Some("3.2-i386".into()), datacenter_id: Some(1) },
    ]
}

pub fn vm(id: u64, hostname: &str, state: &str) -> VmRecord {
    VmRecord {
        id,
        hostname: hostname.to_string(),
        state: VmState::from(state),
        cores: Some(1),
        memory: Some(256),
        console: Some(0),
        console_url: None,
        datacenter_id: Some(1),
        ifaces: vec![Iface {
            id: Some(id * 10),
            bandwidth: Some(102400),
            ips: vec![IpAddress { id: None, ip: format!("192.0.2.{}", id), version: 4 }],
        }],
        disks: vec![Disk {
            id: id * 100,
            name: format!("sys_{}", hostname),
            label: Some("Debian 7".into()),
            kernel_version: Some("3.2-x86_64".into()),
            size: Some(3072),
            datacenter_id: Some(1),
        }],
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
