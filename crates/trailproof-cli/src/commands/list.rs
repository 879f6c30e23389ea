//! List command implementation.

use crate::commands::open_existing;
use crate::output;
use clap::Args;
use trailproof::{QueryFilters, DEFAULT_LIMIT};

/// Query filters accepted on the command line.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only events of this type
    #[arg(long)]
    pub event_type: Option<String>,
    /// Only events by this actor
    #[arg(long)]
    pub actor: Option<String>,
    /// Only events of this tenant
    #[arg(long)]
    pub tenant: Option<String>,
    /// Only events of this trace
    #[arg(long)]
    pub trace: Option<String>,
    /// Only events of this session
    #[arg(long)]
    pub session: Option<String>,
    /// Earliest timestamp, inclusive; compared as a string, so a date prefix works
    #[arg(long)]
    pub from: Option<String>,
    /// Latest timestamp, inclusive; compared as a string
    #[arg(long)]
    pub to: Option<String>,
    /// Page size
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
    /// Resume after this event ID
    #[arg(long)]
    pub cursor: Option<String>,
}

impl From<FilterArgs> for QueryFilters {
    fn from(args: FilterArgs) -> Self {
        QueryFilters {
            event_type: args.event_type,
            actor_id: args.actor,
            tenant_id: args.tenant,
            trace_id: args.trace,
            session_id: args.session,
            from_time: args.from,
            to_time: args.to,
            limit: args.limit,
            cursor: args.cursor,
        }
    }
}

pub fn run(journal: String, filters: FilterArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let trail = open_existing(&journal, None)?;
    let result = trail.query(&QueryFilters::from(filters));

    if json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    output::print_table_header();
    for event in &result.events {
        println!("{}", output::format_table_row(event));
    }
    if let Some(cursor) = result.next_cursor {
        println!();
        println!("next cursor: {}", cursor);
    }

    Ok(())
}
