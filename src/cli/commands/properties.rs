use clap::Subcommand;
use uuid::Uuid;

use crate::api::properties::PropertyFilter;
use crate::cli::commands::context_from_env;
use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;

#[derive(Subcommand)]
pub enum PropertyCommands {
    #[command(about = "List properties")]
    List {
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Search term")]
        search: Option<String>,
    },

    #[command(about = "Show one property")]
    Show {
        #[arg(help = "Property id (uuid)")]
        id: Uuid,
    },

    #[command(about = "Archive a property")]
    Archive {
        #[arg(help = "Property id (uuid)")]
        id: Uuid,
    },
}

pub async fn handle(cmd: PropertyCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;
    let ctx = context_from_env()?;

    match cmd {
        PropertyCommands::List { page, search } => {
            let filter = PropertyFilter { page, search, ..Default::default() };
            let properties = client.list_properties(&ctx, &filter).await?;
            utils::output_data(output_format, &properties)
        }
        PropertyCommands::Show { id } => {
            let property = client.property(&ctx, id).await?;
            utils::output_data(output_format, &property)
        }
        PropertyCommands::Archive { id } => {
            let message = client.archive_property(&ctx, id).await?;
            utils::output_success(
                output_format,
                message.as_deref().unwrap_or("property archived"),
            )
        }
    }
}
