//! Administrative CLI for the wedding content table.
//!
//! Creates the `WeddingData` table, writes the singleton content record and
//! prints a preview of what is currently stored.

mod commands;
mod preview;
mod sample;

use std::path::PathBuf;

use anyhow::Result;
use aws_config::{BehaviorVersion, Region};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wedding_content::DynamoContentStore;
use wedding_models::CONTENT_TABLE;

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage wedding content in DynamoDB")]
struct Cli {
    /// AWS region, overriding the SDK region chain
    #[arg(long, global = true)]
    region: Option<String>,

    /// DynamoDB table holding the content record
    #[arg(long, global = true, default_value = CONTENT_TABLE)]
    table: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Create the content table and wait until it is active
    CreateTable,
    /// Write the content record from a file, or the built-in sample
    Update {
        /// HTML file to store as the page content
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show when the content was last updated and a short preview
    Get,
    /// Create the table, then write the sample content
    Setup,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wedding_admin=info,wedding_content=info,warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = cli.region.clone() {
        loader = loader.region(Region::new(region));
    }
    let sdk_config = loader.load().await;

    let store = DynamoContentStore::new(&sdk_config, cli.table.clone());

    match cli.command {
        Command::CreateTable => commands::create_table(&store).await,
        Command::Update { file } => commands::update(&store, file.as_deref()).await,
        Command::Get => commands::get(&store).await,
        Command::Setup => commands::setup(&store).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_with_file() {
        let cli = Cli::try_parse_from(["wedding-admin", "update", "--file", "page.html"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Update {
                file: Some(PathBuf::from("page.html"))
            }
        );
        assert_eq!(cli.table, "WeddingData");
        assert_eq!(cli.region, None);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wedding-admin",
            "get",
            "--region",
            "eu-west-1",
            "--table",
            "WeddingDataStaging",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::Get);
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.table, "WeddingDataStaging");
    }

    #[test]
    fn test_subcommand_names() {
        for (arg, expected) in [
            ("create-table", Command::CreateTable),
            ("setup", Command::Setup),
            ("update", Command::Update { file: None }),
        ] {
            let cli = Cli::try_parse_from(["wedding-admin", arg]).unwrap();
            assert_eq!(cli.command, expected);
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["wedding-admin"]).is_err());
        assert!(Cli::try_parse_from(["wedding-admin", "delete"]).is_err());
    }
}
