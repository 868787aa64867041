//! Protocols command: evaluate a protocol allow/deny spec.

use anyhow::Result;
use filearg_core::config::FileargConfig;
use filearg_core::protocols::{apply_protocol_spec, ProtocolTable};

pub fn run_protocols(cfg: &FileargConfig, spec: &str, defaults: Option<&[String]>) -> Result<()> {
    let table = ProtocolTable::builtin();
    let all: Vec<String> = table.names().map(String::from).collect();
    let defaults = defaults
        .or(cfg.default_protocols.as_deref())
        .unwrap_or(&all);

    let result = apply_protocol_spec(&table, defaults, spec)?;
    println!("{}", result);
    Ok(())
}
