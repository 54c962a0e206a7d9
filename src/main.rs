use clap::Parser;
use tracing::debug;

use linkdeck::cli::Cli;
use linkdeck::config::{get_config, init_config, init_config_from, set_api_base_url};
use linkdeck::runtime::modes::{self, Mode};
use linkdeck::system::{LogSink, init_logging};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 配置优先级：--api-url > ENV > 配置文件 > 默认值
    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    if let Some(api_url) = cli.api_url.as_deref() {
        set_api_base_url(api_url);
    }

    let mode = modes::detect_mode(cli.command.as_ref());
    let sink = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => LogSink::Silent,
        _ => LogSink::Stderr,
    };

    let config = get_config();
    let guard = init_logging(&config.logging, sink);
    debug!("Starting in {:?} mode", mode);

    let exit_code = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => match modes::run_tui().await {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("TUI error: {:?}", e);
                1
            }
        },
        #[cfg(feature = "cli")]
        Mode::Cli => match cli.command {
            Some(cmd) => match modes::run_cli(cmd).await {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    1
                }
            },
            None => 0,
        },
        Mode::Unknown => {
            eprintln!("No interface enabled. Rebuild with the `cli` or `tui` feature.");
            1
        }
    };

    // Flush buffered log lines before exiting
    drop(guard);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
