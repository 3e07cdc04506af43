// ============================================================================
// Menu Access Infrastructure - HTTP Level Template Repository
// File: crates/menu-access-infrastructure/src/http/level_template_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use menu_access_core::domain::{Level, LevelTemplate, TemplateEntry};
use menu_access_core::error::DomainError;
use menu_access_core::repositories::LevelTemplateRepository;

use super::client::BackendClient;

pub struct HttpLevelTemplateRepository {
    client: BackendClient,
}

impl HttpLevelTemplateRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn path(level: Level) -> String {
        format!("levels/{}/template", level)
    }
}

#[derive(Debug, Serialize)]
struct SaveTemplateBody<'a> {
    name: &'a str,
    entries: &'a [TemplateEntry],
}

#[async_trait]
impl LevelTemplateRepository for HttpLevelTemplateRepository {
    async fn fetch_level_template(&self, level: Level) -> Result<Option<LevelTemplate>, DomainError> {
        let template: Option<LevelTemplate> = self.client.get_optional(&Self::path(level)).await?;
        if template.is_none() {
            info!("No template stored for level {}", level);
        }
        Ok(template)
    }

    async fn save_level_template(
        &self,
        level: Level,
        name: &str,
        entries: &[TemplateEntry],
    ) -> Result<LevelTemplate, DomainError> {
        let body = SaveTemplateBody { name, entries };
        let saved: Option<LevelTemplate> = self.client.put(&Self::path(level), &body).await?;

        match saved {
            Some(template) => {
                info!("Saved template for level {}: {} entries", level, template.entries.len());
                Ok(template)
            }
            None => {
                // Older backends answer with an empty envelope.
                warn!("Backend returned no template for level {}, using submitted copy", level);
                LevelTemplate::new(level, name, entries.to_vec())
            }
        }
    }
}
