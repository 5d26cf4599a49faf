//! Catalog listing configuration.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> usize {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Quizzes per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
