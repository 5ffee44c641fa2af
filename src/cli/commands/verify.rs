use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::verify::{Verifier, VerifyPurpose};

#[derive(Subcommand)]
pub enum VerifyCommands {
    #[command(about = "Issue a verification link for an email")]
    Issue {
        #[arg(help = "Purpose: otp or email")]
        purpose: String,
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "URL to continue to after verification")]
        callback_url: Option<String>,
    },

    #[command(about = "Validate a verification token")]
    Check {
        #[arg(help = "Purpose the token should carry: otp or email")]
        purpose: String,
        #[arg(help = "The token string")]
        token: String,
    },
}

fn parse_purpose(s: &str) -> anyhow::Result<VerifyPurpose> {
    match s {
        "otp" => Ok(VerifyPurpose::Otp),
        "email" => Ok(VerifyPurpose::Email),
        other => anyhow::bail!("unknown purpose '{other}', expected otp or email"),
    }
}

pub async fn handle(cmd: VerifyCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let verifier = Verifier::from_config()?;

    match cmd {
        VerifyCommands::Issue { purpose, email, callback_url } => {
            let purpose = parse_purpose(&purpose)?;
            let url = verifier.verification_url(purpose, &email, callback_url.as_deref())?;
            utils::output_data(output_format, &serde_json::json!({ "url": url.as_str() }))
        }
        VerifyCommands::Check { purpose, token } => {
            let purpose = parse_purpose(&purpose)?;
            let verification = verifier.validate(&token, purpose)?;
            utils::output_data(
                output_format,
                &serde_json::json!({
                    "valid": true,
                    "email": verification.email,
                    "callback_url": verification.callback_url,
                }),
            )
        }
    }
}
