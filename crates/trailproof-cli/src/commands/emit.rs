//! Emit command implementation.

use crate::output;
use serde_json::Value;
use trailproof::{EmitRequest, Trailproof, TrailproofConfig};

pub struct EmitArgs {
    pub journal: String,
    pub event_type: String,
    pub actor: String,
    pub payload: String,
    pub tenant: Option<String>,
    pub trace: Option<String>,
    pub session: Option<String>,
    pub signing_key: Option<String>,
    pub sync: bool,
}

pub fn run(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let payload: Value =
        serde_json::from_str(&args.payload).map_err(|e| format!("Invalid payload JSON: {}", e))?;

    let mut config = TrailproofConfig::jsonl(&args.journal).with_sync(args.sync);
    if let Some(key) = args.signing_key {
        config = config.with_signing_key(key);
    }
    let mut trail = Trailproof::new(config)?;

    let mut request = EmitRequest::new(args.event_type, args.actor, payload);
    request.tenant_id = args.tenant;
    request.trace_id = args.trace;
    request.session_id = args.session;

    let event = trail.emit(request)?;
    trail.flush()?;

    println!("{}", output::format_json(&event));
    Ok(())
}
