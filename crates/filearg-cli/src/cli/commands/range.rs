//! Range command: show the parsed range suffix of a file argument.

use anyhow::Result;
use filearg_core::parse_range_suffix;

pub fn run_range(file: &str, json: bool) -> Result<()> {
    let suffix = parse_range_suffix(file);

    if json {
        let mut value = serde_json::to_value(&suffix)?;
        value["open_path"] = serde_json::json!(suffix.open_path());
        value["length"] = serde_json::json!(suffix.spec.byte_len());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("flags:     {:?}", suffix.flags);
    if let Some(start) = suffix.spec.start {
        println!("start:     {}", start);
    }
    if let Some(end) = suffix.spec.end {
        println!("end:       {}", end);
    }
    if let Some(len) = suffix.spec.byte_len() {
        println!("length:    {}", len);
    }
    println!("filename:  {}", suffix.filename);
    println!("open path: {}", suffix.open_path());
    Ok(())
}
