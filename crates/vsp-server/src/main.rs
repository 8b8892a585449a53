//! VSP Host binary

// Force-link vsp-providers to ensure linkme registrations are included
extern crate vsp_providers;

use clap::Parser;
use vsp_application::list_storage_providers;
use vsp_server::run;

/// Command line interface for the VSP Host
#[derive(Parser, Debug)]
#[command(name = "vsp")]
#[command(about = "VSP Host - pluggable storage provider server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Print the registered storage providers and exit
    #[arg(long)]
    pub list_providers: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_providers {
        for provider in list_storage_providers() {
            let required = if provider.required_settings.is_empty() {
                String::new()
            } else {
                format!(" (requires: {})", provider.required_settings.join(", "))
            };
            println!("{:<12} {}{}", provider.kind, provider.description, required);
        }
        return Ok(());
    }

    run(cli.config.as_deref()).await
}
