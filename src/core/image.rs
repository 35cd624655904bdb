use crate::core::FALLBACK_IMAGE_URL;
use std::collections::HashSet;

/// The image to show for a record: its own URL, or the fallback when it has none.
pub fn resolve_image(img: Option<&str>) -> &str {
    match img {
        Some(url) if !url.is_empty() => url,
        _ => FALLBACK_IMAGE_URL,
    }
}

/// Tracks which cards failed to load their image.
#[derive(Debug, Clone, Default)]
pub struct ImageFailures {
    failed: HashSet<i64>,
}

impl ImageFailures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_failed(&mut self, id: i64) -> bool {
        self.failed.insert(id)
    }

    pub fn has_failed(&self, id: i64) -> bool {
        self.failed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }

    /// What the card with `id` actually displays.
    pub fn displayed<'a>(&self, id: i64, img: Option<&'a str>) -> &'a str {
        if self.has_failed(id) {
            FALLBACK_IMAGE_URL
        } else {
            resolve_image(img)
        }
    }
}
