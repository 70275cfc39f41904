use anyhow::Context;
use clap::Parser;
use food_order_rust::cli::{run_session, Cli};
use food_order_rust::logger;
use food_order_rust::menu::MenuCatalog;
use food_order_rust::ordering::OrderingService;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    // One service for the whole process; nothing outlives it
    let mut service = OrderingService::new(MenuCatalog::initialize());
    tracing::info!(items = service.catalog().len(), "Menu loaded");

    let input = BufReader::new(tokio::io::stdin());
    run_session(&mut service, input, tokio::io::stdout())
        .await
        .context("console session failed")?;

    tracing::info!("Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use food_order_rust::cli::Cli;

    #[test]
    fn test_verbose_flag() {
        assert!(!Cli::try_parse_from(["food-order"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["food-order", "-v"]).unwrap().verbose);
        assert!(Cli::try_parse_from(["food-order", "--verbose"]).unwrap().verbose);
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["food-order", "--port", "8000"]).is_err());
    }
}
