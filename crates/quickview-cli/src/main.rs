mod run;
mod terminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "quickview")]
#[command(about = "Storefront product quick view from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the quick view for a product and print it
    Show {
        /// Product handle, e.g. `classic-tee`
        handle: String,
    },
    /// Open a product, choose option values, and add it to the cart
    Add {
        /// Product handle, e.g. `classic-tee`
        handle: String,

        /// Option value for the next selector slot, in slot order
        #[arg(long = "select", value_name = "VALUE")]
        select: Vec<String>,

        /// Exit right after the add instead of waiting for the delayed
        /// label revert and auto-close
        #[arg(long)]
        no_wait: bool,
    },
    /// Print the number of items in the cart
    Cart,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = quickview_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, store_url = %config.store_url, "configuration loaded");

    match cli.command {
        Commands::Show { handle } => run::run_show(&config, &handle).await?,
        Commands::Add {
            handle,
            select,
            no_wait,
        } => run::run_add(&config, &handle, &select, !no_wait).await?,
        Commands::Cart => run::run_cart(&config).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
