//! Trace command implementation.

use crate::commands::open_existing;
use crate::output;

pub fn run(journal: String, trace_id: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let trail = open_existing(&journal, None)?;
    let events = trail.get_trace(&trace_id);

    if json {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }

    output::print_table_header();
    for event in &events {
        println!("{}", output::format_table_row(event));
    }

    Ok(())
}
