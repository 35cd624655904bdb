use crate::core::portfolio::PortfolioView;
use crate::core::FALLBACK_IMAGE_URL;
use reqwest::{Client, StatusCode};
use std::time::Duration;

fn head_unsupported(status: StatusCode) -> bool {
    status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED
}

/// Checks whether image URLs actually load, the way a browser `onerror` would.
#[derive(Debug, Clone)]
pub struct ImageProbe {
    client: Client,
    timeout: Duration,
}

impl Default for ImageProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl ImageProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// `true` when the URL answers with a success status. Hosts that refuse
    /// `HEAD` are asked again with `GET`.
    pub async fn loads(&self, url: &str) -> bool {
        match self.client.head(url).timeout(self.timeout).send().await {
            Ok(response) if head_unsupported(response.status()) => {
                tracing::debug!("Image {} refused HEAD, retrying with GET", url);
                self.loads_with_get(url).await
            }
            Ok(response) => Self::report(url, response.status()),
            Err(e) => {
                tracing::debug!("Image {} failed: {}", url, e);
                false
            }
        }
    }

    async fn loads_with_get(&self, url: &str) -> bool {
        match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => Self::report(url, response.status()),
            Err(e) => {
                tracing::debug!("Image {} failed: {}", url, e);
                false
            }
        }
    }

    fn report(url: &str, status: StatusCode) -> bool {
        let ok = status.is_success();
        if !ok {
            tracing::debug!("Image {} answered {}", url, status);
        }
        ok
    }

    /// Probe the images on the current certificate page and report broken ones
    /// to the view. Returns the ids that switched to the fallback.
    pub async fn check_visible(&self, view: &mut PortfolioView) -> Vec<i64> {
        let candidates: Vec<(i64, String)> = view
            .visible_certificates()
            .iter()
            .map(|c| (c.id, view.displayed_image(c).to_string()))
            .filter(|(_, url)| url != FALLBACK_IMAGE_URL)
            .collect();

        let mut failed = Vec::new();
        for (id, url) in candidates {
            if !self.loads(&url).await {
                view.report_image_failure(id);
                failed.push(id);
            }
        }
        failed
    }
}
