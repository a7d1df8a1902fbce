//! `agent-ctl` — validate or deploy the docs agent
//!
//! Thin wrapper around the packaged `make-agent` tool: resolves the
//! target agent URL, forwards the sub-command and propagates the child's
//! exit code.

use std::process::{exit, Command};

use clap::{Parser, Subcommand};

use docs_agent::cli::{resolve_agent_url, URL_GUIDANCE};

#[derive(Parser)]
#[command(name = "agent-ctl", about = "Validate or deploy the docs agent via make-agent")]
struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check the deployed agent's manifest
    Validate {
        /// Target agent URL (overrides BITTE_AGENT_URL)
        #[arg(long)]
        url: Option<String>,
    },
    /// Register the agent at its public URL
    Deploy {
        /// Target agent URL (overrides BITTE_AGENT_URL)
        #[arg(long)]
        url: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let (command, url_flag) = match &cli.action {
        Action::Validate { url } => ("validate", url.as_deref()),
        Action::Deploy { url } => ("deploy", url.as_deref()),
    };

    let env_url = std::env::var("BITTE_AGENT_URL").ok();
    let agent_url = match resolve_agent_url(url_flag, env_url.as_deref()) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("{URL_GUIDANCE}");
            exit(1);
        }
    };

    let verb = if command == "validate" {
        "Validating"
    } else {
        "Deploying"
    };
    println!("{verb} agent at: {agent_url}");

    // stdio is inherited, so make-agent's own output passes through.
    match Command::new("make-agent")
        .arg(command)
        .arg("--url")
        .arg(&agent_url)
        .status()
    {
        Ok(status) => exit(status.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Failed to run make-agent: {e}");
            exit(1);
        }
    }
}
