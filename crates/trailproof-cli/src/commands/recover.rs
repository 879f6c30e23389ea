//! Recover command implementation.

use crate::commands::open_existing;
use serde_json::json;

pub fn run(journal: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let trail = open_existing(&journal, None)?;

    if json {
        let report = json!({
            "events": trail.count(),
            "last_hash": trail.last_hash(),
            "corrupt_lines": trail.corrupt_lines(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("events:        {}", trail.count());
    println!("last hash:     {}", trail.last_hash());
    if trail.corrupt_lines().is_empty() {
        println!("corrupt lines: none");
    } else {
        let lines: Vec<String> = trail.corrupt_lines().iter().map(|i| i.to_string()).collect();
        println!("corrupt lines: {}", lines.join(", "));
    }

    Ok(())
}
