use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of certificate cards shown per page.
pub const CERTIFICATES_PER_PAGE: usize = 3;

/// Table the certificates are read from.
pub const CERTIFICATE_TABLE: &str = "Certifikat";

/// Image shown when a certificate has no image or its image fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1586380879823-b0dc8c8c7d5e?w=600&h=400&fit=crop";

/// One row of the certificate table. Columns beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub img: Option<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Projects,
    Certificates,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::Projects, ActiveTab::Certificates];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Projects => "projects",
            ActiveTab::Certificates => "certificates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Projects => "Projects",
            ActiveTab::Certificates => "Certificates",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "projects" => Ok(ActiveTab::Projects),
            "certificates" => Ok(ActiveTab::Certificates),
            other => Err(format!(
                "unknown tab '{}', expected 'projects' or 'certificates'",
                other
            )),
        }
    }
}
