use clap::Parser;
use portfolio_contact::utils::{logger, validation::Validate};
use portfolio_contact::{CliArgs, ContactError, ContactServer, LogSink, ServerConfig};
use std::sync::Arc;

fn exit_with(e: &ContactError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn load_config(args: &CliArgs) -> Result<ServerConfig, ContactError> {
    let config = args.resolve()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // 日誌尚未初始化，先用命令列旗標的設定
            logger::init_logger(args.verbose, args.log_format.unwrap_or_default());
            exit_with(&e);
        }
    };

    logger::init_logger(config.verbose, config.log_format);
    tracing::info!("Starting portfolio-contact");
    tracing::debug!("Resolved config: {:?}", config);

    let server = ContactServer::new(config, Arc::new(LogSink::new()));
    if let Err(e) = server.run().await {
        exit_with(&e);
    }

    Ok(())
}
