use crate::domain::model::CertificateRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the certificate table.
#[async_trait]
pub trait CertificateSource: Send + Sync {
    /// All certificate records, newest (highest id) first.
    async fn list_certificates(&self) -> Result<Vec<CertificateRecord>>;
}

#[async_trait]
impl<S: CertificateSource + ?Sized> CertificateSource for Box<S> {
    async fn list_certificates(&self) -> Result<Vec<CertificateRecord>> {
        (**self).list_certificates().await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn table(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
