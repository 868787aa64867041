//! CLI for filearg.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filearg_core::args::RequestArgs;
use filearg_core::config;
use std::path::PathBuf;

use commands::{
    run_completions, run_load, run_man, run_number, run_protocols, run_range, run_request,
    NumberKind,
};

/// Top-level CLI for filearg.
#[derive(Debug, Parser)]
#[command(name = "filearg")]
#[command(about = "filearg: load file arguments, with optional !start-end range suffixes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load a file argument and write its content (`-` reads stdin).
    Load {
        /// File name, optionally followed by `!start-end`, `!start-` or `!-count`.
        file: String,
        /// Drop CR, LF and NUL bytes from the content.
        #[arg(long)]
        strip: bool,
        /// Print the SHA-256 of the loaded content instead of the content.
        #[arg(long)]
        digest: bool,
        /// Write the content here instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show how a file argument's range suffix is parsed.
    Range {
        /// File name with optional range suffix.
        file: String,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a protocol list such as `=https,+ftp` or `all,-file`.
    Protocols {
        /// Comma-separated protocol spec.
        #[arg(allow_hyphen_values = true)]
        spec: String,
        /// Starting set (defaults to the config file, then every known protocol).
        #[arg(long, value_delimiter = ',', value_name = "LIST")]
        default: Option<Vec<String>>,
    },

    /// Parse a numeric option value.
    Number {
        /// Which parser to apply.
        #[arg(value_enum)]
        kind: NumberKind,
        /// The value to parse.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Finalize request arguments, prompting for any missing password.
    Request {
        /// Server credentials, `user[:password][;options]`.
        #[arg(long, short)]
        user: Option<String>,
        /// Proxy credentials, same format.
        #[arg(long, value_name = "USER")]
        proxy_user: Option<String>,
        /// Extra header, `Name: value` (repeatable).
        #[arg(long = "header", short = 'H', value_name = "HEADER")]
        headers: Vec<String>,
        /// Send and accept JSON.
        #[arg(long)]
        json: bool,
        /// Credentials come from a bearer token; skip the server password.
        #[arg(long)]
        oauth_bearer: bool,
        #[arg(long, short = 'A', value_name = "AGENT")]
        user_agent: Option<String>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Load {
                file,
                strip,
                digest,
                output,
            } => run_load(&cfg, &file, strip, digest, output.as_deref())?,
            CliCommand::Range { file, json } => run_range(&file, json)?,
            CliCommand::Protocols { spec, default } => {
                run_protocols(&cfg, &spec, default.as_deref())?
            }
            CliCommand::Number { kind, value } => run_number(kind, &value)?,
            CliCommand::Request {
                user,
                proxy_user,
                headers,
                json,
                oauth_bearer,
                user_agent,
            } => run_request(RequestArgs {
                json,
                headers,
                userpwd: user,
                proxyuserpwd: proxy_user,
                oauth_bearer,
                useragent: user_agent,
            })?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
