//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire an in-process registry, install the font extension, print the result.
//! - Keep output deterministic apart from the generated registration id.

use clap::Parser;
use fontres_core::{
    core_version, default_log_level, init_logging, install_resource_manager,
    parse_resource_kind, supported_resource_kind_strings, ExtensionRegistry,
};
use log::info;
use std::io::Write;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "fontres", version, about = "Register the font resource extension")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, value_name = "ABS_PATH")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, value_name = "LEVEL", requires = "log_dir")]
    log_level: Option<String>,

    /// List registered extensions handling this resource kind.
    #[arg(long, value_name = "KIND", conflicts_with = "json")]
    kind: Option<String>,

    /// Print the registry snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(&cli, &mut std::io::stdout().lock());
    report(result, &mut std::io::stderr().lock())
}

/// Maps the run outcome to a process exit code, printing failures to `err`.
fn report(result: Result<(), String>, err: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            // Why: stderr may already be closed; the exit code still reports failure.
            let _ = writeln!(err, "fontres: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let kind = cli
        .kind
        .as_deref()
        .map(parse_resource_kind)
        .transpose()
        .map_err(|err| err.to_string())?;

    let mut registry = ExtensionRegistry::new();
    let registration_id =
        install_resource_manager(&mut registry).map_err(|err| err.to_string())?;
    info!("event=cli_install module=cli status=ok registration_id={registration_id}");

    let write_err = |err: std::io::Error| format!("failed to write output: {err}");

    if cli.json {
        let snapshot = serde_json::to_string_pretty(&registry.snapshot())
            .map_err(|err| format!("failed to encode snapshot: {err}"))?;
        writeln!(out, "{snapshot}").map_err(write_err)?;
        return Ok(());
    }

    writeln!(out, "fontres_core version={}", core_version()).map_err(write_err)?;
    for entry in registry.snapshot() {
        writeln!(
            out,
            "fontres registered extension={} id={} registration_id={}",
            entry.extension.name, entry.extension.id, entry.registration_id
        )
        .map_err(write_err)?;
    }

    if let Some(kind) = kind {
        let handlers = registry.list_by_resource_kind(kind);
        if handlers.is_empty() {
            writeln!(
                out,
                "fontres kind={kind} handlers=none (known kinds: {})",
                supported_resource_kind_strings().join("|")
            )
            .map_err(write_err)?;
        }
        for entry in handlers {
            writeln!(out, "fontres kind={kind} handler={}", entry.extension.id)
                .map_err(write_err)?;
        }
    }

    Ok(())
}
