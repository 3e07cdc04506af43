//! Level template repository trait (port)

use async_trait::async_trait;
use crate::domain::{Level, LevelTemplate, TemplateEntry};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LevelTemplateRepository: Send + Sync {
    /// `Ok(None)` when the level has no template yet.
    async fn fetch_level_template(&self, level: Level) -> Result<Option<LevelTemplate>, DomainError>;

    /// Replaces the template and returns what the store now holds.
    async fn save_level_template(
        &self,
        level: Level,
        name: &str,
        entries: &[TemplateEntry],
    ) -> Result<LevelTemplate, DomainError>;
}
