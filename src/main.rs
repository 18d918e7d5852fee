use anyhow::Context;
use clap::Parser;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{CliConfig, StatsEngine, StatsError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時忽略
    dotenv::dotenv().ok();

    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vacancy-stats");
    tracing::debug!(
        "config file: {:?}, languages: {:?}",
        cli.config,
        cli.languages
    );

    let config = match cli.load_app_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    let engine = StatsEngine::from_config(&config).context("failed to build HTTP client")?;

    match engine.run().await {
        Ok(tables) => {
            for table in tables {
                println!("{}", table.render());
            }
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: StatsError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
