//! Terminal rendering of API records.
//!
//! Records are printed as `key      : value` lines. Collections print a
//! separator before each item.

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use terminal_size::{terminal_size, Width};

use crate::models::{datacenter_label, Datacenter, Located, VmRecord};
use crate::utils::{field_value, value_to_short_string};

pub const DEFAULT_JUSTIFY: usize = 10;
pub const SEPARATOR: &str = "----------";
const UNKNOWN_DATACENTER: &str = "Nowhere";

#[derive(Clone)]
enum Sink {
    Stdout,
    Buffer(Arc<Mutex<Vec<String>>>),
}

/// Where command output goes.
#[derive(Clone)]
pub struct Output {
    sink: Sink,
}

impl Output {
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Collects lines in memory; read them back with [`Output::contents`].
    pub fn buffer() -> Self {
        Self {
            sink: Sink::Buffer(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Everything echoed so far, one entry per line. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Buffer(buf) => buf.lock().map(|b| b.clone()).unwrap_or_default(),
        }
    }

    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }

    pub fn echo(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        match &self.sink {
            Sink::Stdout => println!("{}", msg),
            Sink::Buffer(buf) => {
                if let Ok(mut b) = buf.lock() {
                    b.extend(msg.split('\n').map(str::to_string));
                }
            }
        }
    }

    pub fn separator(&self) {
        self.echo(SEPARATOR);
    }

    pub fn line(&self, key: &str, value: &str, justify: usize) {
        if value.is_empty() {
            self.echo(format!("{:<width$}:", key, width = justify));
        } else {
            self.echo(format!("{:<width$}: {}", key, value, width = justify));
        }
    }

    /// Print the listed keys that are present in `record`.
    pub fn generic<T: Serialize>(&self, record: &T, keys: &[&str], justify: usize) {
        let value = serde_json::to_value(record).unwrap_or(Value::Null);
        for key in keys {
            if let Some(v) = field_value(&value, key) {
                self.line(key, &v, justify);
            }
        }
    }

    pub fn vm(&self, vm: &VmRecord, datacenters: &[Datacenter], keys: &[&str], justify: usize) {
        let value = serde_json::to_value(vm).unwrap_or(Value::Null);
        for key in keys {
            match *key {
                "datacenter" => {
                    let label = datacenter_label(datacenters, vm.datacenter_id()).unwrap_or(UNKNOWN_DATACENTER);
                    self.line("datacenter", label, justify);
                }
                "ip" => {
                    for iface in &vm.ifaces {
                        if let Some(bw) = iface.bandwidth {
                            self.line("bandwidth", &bw.to_string(), justify);
                        }
                        for ip in &iface.ips {
                            self.line(&format!("ip{}", ip.version), &ip.ip, justify);
                        }
                    }
                }
                other => {
                    if let Some(v) = field_value(&value, other) {
                        self.line(other, &v, justify);
                    }
                }
            }
        }
    }

    /// Disks and images. The `dc` key prints the datacenter label.
    pub fn image<T: Serialize + Located>(&self, image: &T, datacenters: &[Datacenter], keys: &[&str], justify: usize) {
        let value = serde_json::to_value(image).unwrap_or(Value::Null);
        for key in keys {
            if *key == "dc" {
                let label = datacenter_label(datacenters, image.datacenter_id()).unwrap_or(UNKNOWN_DATACENTER);
                self.line("datacenter", label, justify);
            } else if let Some(v) = field_value(&value, key) {
                self.line(key, &v, justify);
            }
        }
    }

    /// Print a whole structured result as a table.
    pub fn pretty(&self, value: &Value) {
        match build_table(value, matches!(self.sink, Sink::Stdout)) {
            Some(table) => self.echo(format!("\n{table}\n")),
            None => self.echo(value_to_short_string(value)),
        }
    }
}

fn build_table(value: &Value, fit_terminal: bool) -> Option<Table> {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if fit_terminal {
        if let Some((Width(w), _)) = terminal_size() {
            table.set_width(w.saturating_sub(4));
        }
    }

    match value {
        Value::Array(arr) => {
            if arr.is_empty() {
                return None;
            }
            if let Some(first) = arr.iter().find_map(|v| v.as_object()) {
                let headers: Vec<&String> = first.keys().collect();
                table.set_header(&headers);
                for item in arr.iter().filter_map(|v| v.as_object()) {
                    let row: Vec<String> = headers
                        .iter()
                        .map(|k| item.get(*k).map(value_to_short_string).unwrap_or_default())
                        .collect();
                    table.add_row(row);
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![value_to_short_string(item)]);
                }
            }
        }
        Value::Object(obj) => {
            table.set_header(vec!["Field", "Value"]);
            for (k, v) in obj {
                table.add_row(vec![k.clone(), value_to_short_string(v)]);
            }
        }
        _ => return None,
    }
    Some(table)
}
