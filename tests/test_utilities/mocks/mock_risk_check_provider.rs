use async_trait::async_trait;
use datacert::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// Mock RiskCheckProvider returning canned results per MIME type
pub struct MockRiskCheckProvider {
    pub default_result: RiskCheckResult,
    pub by_mime: HashMap<String, RiskCheckResult>,
    pub failing_mimes: Vec<String>,
    pub slow_mimes: Vec<(String, Duration)>,
}

impl MockRiskCheckProvider {
    /// Every file gets a clean result
    pub fn new() -> Self {
        Self {
            default_result: RiskCheckResult::default(),
            by_mime: HashMap::new(),
            failing_mimes: Vec::new(),
            slow_mimes: Vec::new(),
        }
    }

    pub fn returning(result: RiskCheckResult) -> Self {
        Self {
            default_result: result,
            ..Self::new()
        }
    }

    pub fn with_result(mut self, mime_type: &str, result: RiskCheckResult) -> Self {
        self.by_mime.insert(mime_type.to_string(), result);
        self
    }

    pub fn failing_for(mut self, mime_type: &str) -> Self {
        self.failing_mimes.push(mime_type.to_string());
        self
    }

    pub fn slow_for(mut self, mime_type: &str, delay: Duration) -> Self {
        self.slow_mimes.push((mime_type.to_string(), delay));
        self
    }
}

impl Default for MockRiskCheckProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RiskCheckProvider for MockRiskCheckProvider {
    async fn check(&self, mime_type: &str, _metadata: &FileMetadata) -> Result<RiskCheckResult> {
        if let Some((_, delay)) = self.slow_mimes.iter().find(|(m, _)| m == mime_type) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_mimes.iter().any(|m| m == mime_type) {
            anyhow::bail!("Mock risk check failure for {}", mime_type);
        }

        Ok(self
            .by_mime
            .get(mime_type)
            .cloned()
            .unwrap_or_else(|| self.default_result.clone()))
    }
}
