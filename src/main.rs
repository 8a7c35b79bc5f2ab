use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use stepca_console::config::Config;
use stepca_console::logging::init_tracing;
use stepca_console::shutdown::ShutdownCoordinator;
use stepca_console::ui::runtime;

/// Terminal dashboard for previewing step-ca certificate commands.
#[derive(Debug, Parser)]
#[command(name = "stepca-console", version)]
struct Cli {
    /// Config file (default: <config_dir>/stepca-console/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the mock submission delay
    #[arg(long, value_name = "MS")]
    submit_delay_ms: Option<u64>,

    /// Override the log file location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Override the log filter (e.g. "debug", "stepca_console=trace")
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(delay_ms) = self.submit_delay_ms {
            config.submit.delay_ms = delay_ms;
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from '{}'", config_path.display()))?;
    cli.apply(&mut config);

    let log_path = init_tracing(&config.logging).context("failed to initialise logging")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        delay_ms = config.submit.delay_ms,
        "starting stepca-console"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let shutdown = ShutdownCoordinator::new();

    let result = runtime::run(config, tokio_runtime.handle().clone(), &shutdown);
    tokio_runtime.shutdown_timeout(Duration::from_millis(100));
    result.context("terminal UI failed")?;

    tracing::info!("stepca-console exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_keeps_config() {
        let cli = Cli::parse_from(["stepca-console"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
        assert_eq!(cli.config_path(), Config::config_path());
    }

    #[test]
    fn overrides_apply() {
        let cli = Cli::parse_from([
            "stepca-console",
            "--config",
            "/tmp/custom.toml",
            "--submit-delay-ms",
            "50",
            "--log-file",
            "/tmp/console.log",
            "--log-level",
            "debug",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/custom.toml"));
        assert_eq!(config.submit.delay_ms, 50);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/console.log")));
        assert_eq!(config.logging.level, "debug");
    }
}
