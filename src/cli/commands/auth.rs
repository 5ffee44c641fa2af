use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::models::auth::LoginRequest;
use crate::timer::{shared_store, RetryTimer};
use crate::verify::VerifyPurpose;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login and print the access token")]
    Login {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "Password")]
        password: String,
    },

    #[command(about = "Ask the backend to resend a verification OTP/email")]
    Resend {
        #[arg(help = "Purpose: otp or email")]
        purpose: String,
        #[arg(help = "Account email")]
        email: String,
    },

    #[command(about = "Show seconds left on the resend cooldown")]
    Cooldown {
        #[arg(help = "Purpose: otp or email")]
        purpose: String,
        #[arg(help = "Account email")]
        email: String,
    },
}

fn parse_purpose(s: &str) -> anyhow::Result<VerifyPurpose> {
    match s {
        "otp" => Ok(VerifyPurpose::Otp),
        "email" => Ok(VerifyPurpose::Email),
        other => anyhow::bail!("unknown purpose '{other}', expected otp or email"),
    }
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;

    match cmd {
        AuthCommands::Login { email, password } => {
            let login = client.login(&LoginRequest { email, password }).await?;
            utils::output_data(output_format, &login)?;
            Ok(())
        }
        AuthCommands::Resend { purpose, email } => {
            let purpose = parse_purpose(&purpose)?;
            let timer = RetryTimer::new(shared_store());
            let pending = timer.remaining(purpose, &email).await?;
            if pending > 0 {
                anyhow::bail!("cooldown active: retry in {pending}s");
            }

            let ack = client.resend_verification(purpose, &email).await?;
            if let Some(secs) = ack.retry_after_secs {
                timer.start(purpose, &email, secs).await?;
            }
            utils::output_success(output_format, &format!("verification resent to {}", ack.email))
        }
        AuthCommands::Cooldown { purpose, email } => {
            let purpose = parse_purpose(&purpose)?;
            let timer = RetryTimer::new(shared_store());
            let left = timer.remaining(purpose, &email).await?;
            utils::output_data(output_format, &serde_json::json!({ "remaining_secs": left }))?;
            Ok(())
        }
    }
}
