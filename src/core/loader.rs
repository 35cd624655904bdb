use crate::core::{CertificateRecord, CertificateSource};

/// Result of the single certificate fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<CertificateRecord>),
    Failed { message: String },
}

impl LoadOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed { .. })
    }
}

pub struct DataLoader<S: CertificateSource> {
    source: S,
}

impl<S: CertificateSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read every certificate once, newest first.
    ///
    /// Failures are logged and returned as [`LoadOutcome::Failed`]; they never
    /// propagate as errors.
    pub async fn load(&self) -> LoadOutcome {
        tracing::debug!("Fetching certificates");

        match self.source.list_certificates().await {
            Ok(mut records) => {
                // stable, so equal ids keep the source's order
                records.sort_by(|a, b| b.id.cmp(&a.id));
                tracing::info!("Loaded {} certificates", records.len());
                LoadOutcome::Loaded(records)
            }
            Err(e) => {
                tracing::error!("Error fetching certificates: {}", e);
                tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
                LoadOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
