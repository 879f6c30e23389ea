//! Trailproof CLI - record, inspect and verify audit trail journals.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{canonicalize, emit, list, recover, trace, verify};

#[derive(Parser)]
#[command(name = "trailproof")]
#[command(about = "Tamper-evident audit trail CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append an event to a journal
    Emit {
        /// Path to journal file
        journal: String,
        /// Namespaced event type (e.g. memproof.memory.write)
        #[arg(long)]
        event_type: String,
        /// Actor that performed the action
        #[arg(long)]
        actor: String,
        /// Event payload as a JSON object
        #[arg(long)]
        payload: String,
        /// Tenant ID
        #[arg(long, env = "TRAILPROOF_TENANT_ID")]
        tenant: Option<String>,
        /// Trace ID
        #[arg(long)]
        trace: Option<String>,
        /// Session ID
        #[arg(long)]
        session: Option<String>,
        /// HMAC signing key
        #[arg(long, env = "TRAILPROOF_SIGNING_KEY", hide_env_values = true)]
        signing_key: Option<String>,
        /// Fsync the journal after writing
        #[arg(long)]
        sync: bool,
    },
    /// List one page of events
    List {
        /// Path to journal file
        journal: String,
        #[command(flatten)]
        filters: list::FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every event of a trace in timestamp order
    Trace {
        /// Path to journal file
        journal: String,
        /// Trace ID
        trace_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the hash chain and signatures of a journal
    Verify {
        /// Path to journal file
        journal: String,
        /// HMAC signing key
        #[arg(long, env = "TRAILPROOF_SIGNING_KEY", hide_env_values = true)]
        signing_key: Option<String>,
        /// Exit with error code if the chain is broken
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Report what a journal recovers to
    Recover {
        /// Path to journal file
        journal: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Emit {
            journal,
            event_type,
            actor,
            payload,
            tenant,
            trace,
            session,
            signing_key,
            sync,
        } => emit::run(emit::EmitArgs {
            journal,
            event_type,
            actor,
            payload,
            tenant,
            trace,
            session,
            signing_key,
            sync,
        }),
        Commands::List {
            journal,
            filters,
            json,
        } => list::run(journal, filters, json),
        Commands::Trace {
            journal,
            trace_id,
            json,
        } => trace::run(journal, trace_id, json),
        Commands::Verify {
            journal,
            signing_key,
            strict,
            json,
        } => verify::run(journal, signing_key, strict, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Recover { journal, json } => recover::run(journal, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
