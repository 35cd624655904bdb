use crate::config::{default_table, SourceSettings};
use crate::utils::error::{PortfolioError, Result};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const API_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const TABLE_VAR: &str = "SUPABASE_TABLE";

/// Build source settings from `SUPABASE_URL`, `SUPABASE_ANON_KEY` and the
/// optional `SUPABASE_TABLE`, as answered by `lookup`.
pub fn source_from_lookup<F>(lookup: F) -> Result<SourceSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &str| {
        lookup(name)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| PortfolioError::MissingConfigError {
                field: name.to_string(),
            })
    };

    Ok(SourceSettings {
        base_url: required(URL_VAR)?,
        api_key: required(API_KEY_VAR)?,
        table: lookup(TABLE_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_table),
        timeout_seconds: None,
    })
}
