// ============================================================================
// Menu Access Core - Level Template Entity
// File: crates/menu-access-core/src/domain/level_template.rs
// Description: Sparse permission template keyed by level
// ============================================================================

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use menu_access_shared::MenuId;

use super::{Level, PermissionSet};
use crate::error::DomainError;

/// One explicit grant in a template. Menus without an entry resolve to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub menu_id: MenuId,
    #[serde(flatten)]
    pub permissions: PermissionSet,
}

/// Level template entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LevelTemplate {
    pub level: Level,

    #[validate(length(min = 1, max = 100, message = "Template name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    pub entries: Vec<TemplateEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LevelTemplate {
    pub fn new(level: Level, name: impl Into<String>, entries: Vec<TemplateEntry>) -> Result<Self, DomainError> {
        let template = Self {
            level,
            name: name.into().trim().to_string(),
            entries,
            updated_at: None,
        };

        template
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(template)
    }

    /// Name used when a level has never been saved before.
    pub fn default_name(level: Level) -> String {
        format!("Level {}", level)
    }

    pub fn entry(&self, menu_id: MenuId) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.menu_id == menu_id)
    }

    /// Entries keyed by menu id. A later duplicate wins.
    pub fn lookup(&self) -> HashMap<MenuId, PermissionSet> {
        self.entries
            .iter()
            .map(|e| (e.menu_id, e.permissions))
            .collect()
    }
}
