use anyhow::Context;
use clap::Parser;
use portfolio_showcase::app::render_section;
use portfolio_showcase::core::ConfigProvider;
use portfolio_showcase::utils::{logger, validation::Validate};
use portfolio_showcase::{
    ActiveTab, CliConfig, ImageProbe, PortfolioError, PortfolioView, SupabaseSource, TomlConfig,
};

/// Settings the binary needs once configuration sources are merged.
struct Startup {
    source: SupabaseSource,
    default_tab: ActiveTab,
}

fn startup(config: &CliConfig) -> Result<Startup, PortfolioError> {
    match &config.config {
        Some(path) => {
            let mut toml = TomlConfig::from_file(path)?;
            if config.timeout_seconds.is_some() {
                toml.source.timeout_seconds = config.timeout_seconds;
            }
            toml.validate()?;
            tracing::debug!("Using source {} from {}", toml.base_url(), path.display());
            Ok(Startup {
                source: SupabaseSource::from_config(&toml),
                default_tab: toml.default_tab(),
            })
        }
        None => {
            let settings = config.resolve_source()?;
            settings.validate()?;
            tracing::debug!("Using source {}", settings.base_url());
            Ok(Startup {
                source: SupabaseSource::from_config(&settings),
                default_tab: ActiveTab::default(),
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting portfolio-showcase");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let startup = match startup(&config) {
        Ok(startup) => startup,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(if e.is_config_error() { 1 } else { 2 });
        }
    };

    let mut view = PortfolioView::mount(startup.source).await;
    if let Some(reason) = view.last_error() {
        tracing::warn!("Certificates unavailable, showing empty state: {}", reason);
    }

    view.set_active_tab(config.tab.unwrap_or(startup.default_tab));
    for action in &config.actions {
        if !view.apply(*action) {
            tracing::debug!("Action {} changed nothing", action);
        }
    }

    if config.check_images && view.active_tab() == ActiveTab::Certificates {
        let probe = match config.timeout_seconds {
            Some(secs) => ImageProbe::new(std::time::Duration::from_secs(secs)),
            None => ImageProbe::default(),
        };
        let failed = probe.check_visible(&mut view).await;
        tracing::info!("{} image(s) replaced by the fallback", failed.len());
    }

    let output = render_section(&view.section());
    let mut stdout = std::io::stdout().lock();
    std::io::Write::write_all(&mut stdout, output.as_bytes())
        .context("failed to write section to stdout")?;

    Ok(())
}
