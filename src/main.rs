use anyhow::Context;
use clap::Parser;
use hotel_desk::cli::{Console, MainMenu};
use hotel_desk::domain::ports::ConfigProvider;
use hotel_desk::utils::logger::{self, LogFormat};
use hotel_desk::utils::validation::Validate;
use hotel_desk::{CliConfig, FrontDesk, SessionSettings, SystemClock, TomlConfig};
use std::io;

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(config) {
        tracing::error!("Front desk stopped: {:#}", e);
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let file_config = match &config.config {
        Some(path) => {
            let loaded = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            loaded
                .validate()
                .with_context(|| format!("invalid configuration in {}", path.display()))?;
            Some(loaded)
        }
        None => None,
    };

    let format = match (&file_config, config.json_logs) {
        (_, true) => LogFormat::Json,
        (Some(file), false) => file.log_format(),
        (None, false) => LogFormat::Compact,
    };
    let level = file_config.as_ref().and_then(TomlConfig::log_level);
    logger::init_logger(format, config.verbose, level);

    tracing::info!("Starting hotel-desk");
    tracing::debug!("CLI config: {:?}", config);

    let provider: &dyn ConfigProvider = match &file_config {
        Some(file) => file,
        None => &config,
    };
    let mut settings = SessionSettings::from_provider(provider);
    settings.allow_past_dates |= config.allow_past_dates;

    let desk = FrontDesk::new();
    desk.seed_rooms(provider.seed_rooms())
        .context("failed to register configured rooms")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    MainMenu::new(&desk, &settings, &SystemClock)
        .run(&mut console)
        .context("console session failed")?;

    Ok(())
}
