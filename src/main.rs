//! RAX FTP Client - Entry Point
//!
//! Logs in to the configured server, lists one directory and prints it.

use log::{error, info};
use std::process::ExitCode;

use rax_ftp_client::error::handlers::log_error;
use rax_ftp_client::config::TargetConfig;
use rax_ftp_client::listing::MtimeKind;
use rax_ftp_client::utils::logging::setup_logging;
use rax_ftp_client::{ClientConfig, ControlSession, DirectoryEntry, FtpResult, ListingReport};

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default `info` level
    setup_logging();

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Launching FTP client...");
    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ClientConfig) -> FtpResult<()> {
    let target = &config.target;
    let mut session = ControlSession::connect(&target.address, config.session.clone()).await?;

    let result = login_and_list(&mut session, target).await;
    session.quit().await;

    let report = result?;
    for entry in &report.entries {
        println!("{}", format_entry(entry));
    }
    if !report.skipped.is_empty() {
        println!("({} lines not understood)", report.skipped.len());
    }
    Ok(())
}

async fn login_and_list(
    session: &mut ControlSession,
    target: &TargetConfig,
) -> FtpResult<ListingReport> {
    session.login(&target.username, &target.password).await?;
    session.list_report(&target.list_path).await
}

fn format_entry(entry: &DirectoryEntry) -> String {
    let kind = match (entry.try_cwd, entry.try_retr) {
        (true, true) => 'l',
        (true, false) => 'd',
        _ => '-',
    };
    let mtime = match (entry.mtime, entry.mtime_kind) {
        (Some(t), MtimeKind::RemoteDay) => t.format("%Y-%m-%d      ").to_string(),
        (Some(t), _) => t.format("%Y-%m-%d %H:%M").to_string(),
        (None, _) => " ".repeat(16),
    };
    let name = match &entry.link_target {
        Some(target) => format!("{} -> {}", entry.name, target),
        None => entry.name.clone(),
    };
    format!("{} {:>12} {} {}", kind, entry.size, mtime, name)
}
