//! Remote content store access.
//!
//! Study content lives as markdown files in a public repository:
//! `question_banks/aws_<module>_qb.md` and `flashcards/aws_<module>_fc.md`,
//! optionally under a per-course prefix. This service fetches documents
//! and probes for module existence; it applies no retry or backoff.

use thiserror::Error;

const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/AdityaW2005/aws-modules-qb/main";

/// Highest module number probed during discovery.
const DISCOVERY_LIMIT: u32 = 20;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },
}

/// Client for the remote content repository.
pub struct ContentService {
    client: reqwest::Client,
    base_url: String,
}

impl ContentService {
    /// Create a service from the `CONTENT_BASE_URL` environment variable,
    /// falling back to the public content repository.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CONTENT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw question-bank markdown for a module.
    pub async fn fetch_question_bank(
        &self,
        module_id: &str,
        course_id: Option<&str>,
    ) -> Result<String, ContentError> {
        self.fetch(&self.question_bank_url(module_id, course_id))
            .await
    }

    /// Fetch the raw flashcard-deck markdown for a module.
    pub async fn fetch_flashcards(
        &self,
        module_id: &str,
        course_id: Option<&str>,
    ) -> Result<String, ContentError> {
        self.fetch(&self.flashcards_url(module_id, course_id)).await
    }

    /// Probe a numbered sequence of module ids (`m1`, `m2`, ...) and
    /// return those whose question bank exists.
    pub async fn discover_modules(&self) -> Vec<String> {
        let mut modules = Vec::new();
        for n in 1..=DISCOVERY_LIMIT {
            let module_id = format!("m{}", n);
            if self.exists(&self.question_bank_url(&module_id, None)).await {
                modules.push(module_id);
            }
        }
        modules
    }

    /// Whether a flashcard deck exists for a module.
    pub async fn has_flashcards(&self, module_id: &str) -> bool {
        self.exists(&self.flashcards_url(module_id, None)).await
    }

    async fn fetch(&self, url: &str) -> Result<String, ContentError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!("HEAD probe failed for {}: {}", url, err);
                false
            }
        }
    }

    fn question_bank_url(&self, module_id: &str, course_id: Option<&str>) -> String {
        self.content_url(course_id, &format!("question_banks/aws_{}_qb.md", module_id))
    }

    fn flashcards_url(&self, module_id: &str, course_id: Option<&str>) -> String {
        self.content_url(course_id, &format!("flashcards/aws_{}_fc.md", module_id))
    }

    /// A course id selects a content variant by prefixing the path.
    fn content_url(&self, course_id: Option<&str>, path: &str) -> String {
        match course_id {
            Some(course) => format!("{}/{}/{}", self.base_url, course, path),
            None => format!("{}/{}", self.base_url, path),
        }
    }
}
