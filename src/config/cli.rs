use crate::config::{env, SourceSettings};
use crate::core::portfolio::NavAction;
use crate::core::ActiveTab;
use crate::utils::error::{PortfolioError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-showcase")]
#[command(about = "Render the projects and certificates section of a portfolio")]
pub struct CliConfig {
    #[arg(
        long,
        conflicts_with = "config",
        help = "Supabase project URL (falls back to SUPABASE_URL)"
    )]
    pub supabase_url: Option<String>,

    #[arg(
        long,
        conflicts_with = "config",
        help = "Supabase anon key (falls back to SUPABASE_ANON_KEY)"
    )]
    pub api_key: Option<String>,

    #[arg(
        long,
        conflicts_with = "config",
        help = "Certificate table (falls back to SUPABASE_TABLE, then Certifikat)"
    )]
    pub table: Option<String>,

    #[arg(long, help = "Read source settings from a TOML file instead")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Tab to open: projects or certificates")]
    pub tab: Option<ActiveTab>,

    #[arg(
        long = "action",
        value_delimiter = ',',
        help = "Actions to replay after loading: next, prev, page:N, tab:NAME"
    )]
    pub actions: Vec<NavAction>,

    #[arg(long, help = "Probe image URLs on the shown page and use the fallback for broken ones")]
    pub check_images: bool,

    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout for the data source and image checks"
    )]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Source settings from flags, with the environment filling in what is missing.
    pub fn resolve_source(&self) -> Result<SourceSettings> {
        self.resolve_source_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_source_with<F>(&self, lookup: F) -> Result<SourceSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overlay = |name: &str| match name {
            env::URL_VAR => self.supabase_url.clone().or_else(|| lookup(name)),
            env::API_KEY_VAR => self.api_key.clone().or_else(|| lookup(name)),
            env::TABLE_VAR => self.table.clone().or_else(|| lookup(name)),
            _ => None,
        };

        let mut settings = env::source_from_lookup(overlay).map_err(|e| match e {
            PortfolioError::MissingConfigError { field } => PortfolioError::MissingConfigError {
                field: format!("--{} / {}", flag_for(&field), field),
            },
            other => other,
        })?;
        settings.timeout_seconds = self.timeout_seconds;
        Ok(settings)
    }
}

fn flag_for(var: &str) -> &'static str {
    match var {
        env::URL_VAR => "supabase-url",
        _ => "api-key",
    }
}
