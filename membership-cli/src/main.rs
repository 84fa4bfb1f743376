mod error;
mod transport;
mod walkthrough;

use clap::{Parser, ValueEnum};
use membership_core::{FieldStyle, MembershipClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::transport::UreqTransport;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldStyleArg {
    /// Send `value=<v>`
    Canonical,
    /// Send `<key>=<v>`
    KeyNamed,
}

impl From<FieldStyleArg> for FieldStyle {
    fn from(arg: FieldStyleArg) -> Self {
        match arg {
            FieldStyleArg::Canonical => FieldStyle::Canonical,
            FieldStyleArg::KeyNamed => FieldStyle::KeyNamed,
        }
    }
}

/// Replays the membership walkthrough against a running server.
#[derive(Debug, Parser)]
#[command(name = "membership-cli", version, about, long_about = None)]
struct Cli {
    /// Server base URL; `/membership_api/{key}` is appended.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Form field naming used for POST and PUT bodies.
    #[arg(long, value_enum, default_value_t = FieldStyleArg::KeyNamed)]
    field_style: FieldStyleArg,

    /// Enable debug logging of each request.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), error::CliError> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "membership_cli=debug"
    } else {
        "membership_cli=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = MembershipClient::new(&cli.base_url)?.with_field_style(cli.field_style.into());
    let transport = UreqTransport::new();

    println!("## membership walkthrough against {}", cli.base_url);
    for report in walkthrough::run(&client, &transport) {
        if let Err(err) = &report.result {
            tracing::warn!(step = report.step.number, error = %err, "step failed");
        }
        println!("{report}");
    }
    println!("## walkthrough completed");
    Ok(())
}
