pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "homestead")]
#[command(about = "Homestead CLI - talk to the property-management backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and OTP flows")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Invoices, payments, and payouts")]
    Finance {
        #[command(subcommand)]
        cmd: commands::finance::FinanceCommands,
    },

    #[command(about = "Property management")]
    Properties {
        #[command(subcommand)]
        cmd: commands::properties::PropertyCommands,
    },

    #[command(about = "Verification-link token tooling")]
    Verify {
        #[command(subcommand)]
        cmd: commands::verify::VerifyCommands,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Finance { cmd } => commands::finance::handle(cmd, output_format).await,
        Commands::Properties { cmd } => commands::properties::handle(cmd, output_format).await,
        Commands::Verify { cmd } => commands::verify::handle(cmd, output_format).await,
    }
}
