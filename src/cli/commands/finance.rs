use clap::Subcommand;
use uuid::Uuid;

use crate::api::finance::InvoiceFilter;
use crate::cli::commands::context_from_env;
use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::models::finance::PayerKind;

#[derive(Subcommand)]
pub enum FinanceCommands {
    #[command(about = "List invoices")]
    Invoices {
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Search term")]
        search: Option<String>,
    },

    #[command(about = "List unpaid invoices for a payer")]
    Unpaid {
        #[arg(help = "Payer id (uuid)")]
        payer_id: Uuid,
        #[arg(help = "Payer kind: tenant or owner")]
        payer_kind: String,
    },

    #[command(about = "List payments, optionally for one invoice")]
    Payments {
        #[arg(long, help = "Invoice id (uuid)")]
        invoice_id: Option<Uuid>,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
    },

    #[command(about = "List owner payouts")]
    Payouts {
        #[arg(long, help = "Page number")]
        page: Option<u32>,
    },
}

pub async fn handle(cmd: FinanceCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;
    let ctx = context_from_env()?;

    match cmd {
        FinanceCommands::Invoices { page, search } => {
            let filter = InvoiceFilter { page, search, ..Default::default() };
            let invoices = client.list_invoices(&ctx, &filter).await?;
            utils::output_data(output_format, &invoices)
        }
        FinanceCommands::Unpaid { payer_id, payer_kind } => {
            let payer_kind = match payer_kind.as_str() {
                "tenant" => PayerKind::Tenant,
                "owner" => PayerKind::Owner,
                other => anyhow::bail!("unknown payer kind '{other}', expected tenant or owner"),
            };
            let invoices = client.unpaid_invoices(&ctx, payer_id, payer_kind).await?;
            utils::output_data(output_format, &invoices)
        }
        FinanceCommands::Payments { invoice_id, page } => {
            let payments = client.list_payments(&ctx, invoice_id, page).await?;
            utils::output_data(output_format, &payments)
        }
        FinanceCommands::Payouts { page } => {
            let payouts = client.list_payouts(&ctx, None, page).await?;
            utils::output_data(output_format, &payouts)
        }
    }
}
