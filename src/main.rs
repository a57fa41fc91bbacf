use bikeshare_stats::utils::logger;
use bikeshare_stats::{BikeshareError, CliConfig, DatasetConfig, FilterPrompt, Session};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting bikeshare explorer");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match DatasetConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }
    let data_dir = config.data_dir.display().to_string();

    let session = Session::new(config);
    let stdin = std::io::stdin();
    let mut prompt = FilterPrompt::new(stdin.lock(), std::io::stdout());

    match session.run(&mut prompt) {
        Ok(iterations) => {
            tracing::info!("✅ Finished after {} iteration(s)", iterations);
            Ok(())
        }
        // 使用者關閉輸入 (Ctrl-D) 不算失敗
        Err(BikeshareError::InputClosedError { field }) => {
            tracing::warn!("Input closed while waiting for {}", field);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {}", e);
            Err(session_failure(e, &data_dir))
        }
    }
}

/// 致命錯誤只由 anyhow 輸出一次：友善訊息與建議放在 context，原始錯誤在 "Caused by"
fn session_failure(error: BikeshareError, data_dir: &str) -> anyhow::Error {
    let message = error.user_friendly_message();
    let suggestion = error.recovery_suggestion();
    anyhow::Error::new(error).context(format!(
        "❌ {}\n💡 {} (data directory: {})",
        message, suggestion, data_dir
    ))
}
