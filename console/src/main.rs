//! Parish Permissions - Preview Entry Point
//!
//! Resolves a user record (JSON file argument or stdin) and prints what the
//! editor would show for it.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;

use parish_common::UserRecord;
use parish_console::config::Config;
use parish_console::permissions::{PermissionCatalog, PermissionResolver};
use parish_console::report::PermissionReport;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON document
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parish_console=info,parish_permissions=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        policy = ?config.unknown_role_policy,
        language = config.default_language.code(),
        "Starting permission preview"
    );

    let input = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read user record from stdin")?;
            buf
        }
    };

    let user = UserRecord::from_json(&input).context("Invalid user record")?;
    let resolver =
        PermissionResolver::new(PermissionCatalog::builtin(), config.unknown_role_policy);

    let report = PermissionReport::build(&user, &resolver, config.default_language)
        .with_context(|| format!("Failed to resolve permissions for {}", user.username))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
