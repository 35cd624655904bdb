pub mod image;
pub mod loader;
pub mod paginator;
pub mod portfolio;

pub use crate::domain::model::{
    ActiveTab, CertificateRecord, ProjectRecord, CERTIFICATES_PER_PAGE, CERTIFICATE_TABLE,
    FALLBACK_IMAGE_URL,
};
pub use crate::domain::ports::{CertificateSource, ConfigProvider};
pub use crate::utils::error::Result;
