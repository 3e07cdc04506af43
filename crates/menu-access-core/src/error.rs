//! Domain errors

use thiserror::Error;

use menu_access_shared::MenuId;

use crate::domain::ReorderScope;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Level template not found for level {0}")]
    TemplateNotFound(i64),

    #[error("Menu not found: {0}")]
    MenuNotFound(MenuId),

    #[error("No level selected")]
    NoLevelSelected,

    #[error("Transport error: {0}")]
    TransportError(String),

    /// Internal only. Never surfaced to users.
    #[error("Response for level {level} arrived after the matrix changed and was discarded")]
    StaleResponse { level: i64 },

    #[error("Failed to update sidebar visibility for menu {menu_id}; the change was rolled back: {reason}")]
    VisibilityRolledBack { menu_id: MenuId, reason: String },

    #[error("Failed to save permissions for level {level}; local edits were kept and saving again is safe: {reason}")]
    SaveFailed { level: i64, reason: String },

    #[error("Failed to save {scope} order; the order was reloaded from the server: {reason}")]
    ReorderRolledBack { scope: ReorderScope, reason: String },
}

impl DomainError {
    /// The same action can simply be repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::SaveFailed { .. } | DomainError::TransportError(_)
        )
    }

    /// Local state was restored after an optimistic change failed to persist.
    pub fn was_rolled_back(&self) -> bool {
        matches!(
            self,
            DomainError::VisibilityRolledBack { .. } | DomainError::ReorderRolledBack { .. }
        )
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, DomainError::StaleResponse { .. })
    }
}
