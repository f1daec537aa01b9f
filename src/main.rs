//! mongoprov — provision a per-run MongoDB instance directory and launch mongod.

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use mongoprov::cli::Cli;
use mongoprov::domain::ProvisionError;
use mongoprov::output::OutputContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let ctx = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run(&ctx).await {
        // The usage gate prints its message to stdout; every other failure
        // is a diagnostic on stderr. Both exit non-zero.
        if matches!(e.downcast_ref::<ProvisionError>(), Some(ProvisionError::Usage { .. })) {
            println!("{e}");
        } else {
            ctx.error(&e.to_string());
        }
        std::process::exit(1);
    }
}
