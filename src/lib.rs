pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ImageProbe, SupabaseSource};
pub use config::{toml_config::TomlConfig, SourceSettings};
pub use crate::core::{
    loader::{DataLoader, LoadOutcome},
    paginator::Paginator,
    portfolio::{NavAction, PortfolioView},
};
pub use domain::model::{ActiveTab, CertificateRecord, ProjectRecord};
pub use utils::error::{PortfolioError, Result};
