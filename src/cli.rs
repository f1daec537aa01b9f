//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Provision a MongoDB instance directory and launch mongod in the background
#[derive(Parser)]
#[command(name = "mongoprov", version)]
pub struct Cli {
    #[command(flatten)]
    pub args: commands::provision::ProvisionArgs,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}

impl Cli {
    /// Execute the CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if provisioning or the mongod launch fails.
    pub async fn run(self, ctx: &crate::output::OutputContext) -> Result<()> {
        commands::provision::run(&self.args, ctx).await
    }
}
