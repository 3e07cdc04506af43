//! Global sidebar visibility repository trait (port)

use async_trait::async_trait;
use menu_access_shared::MenuId;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuVisibilityRepository: Send + Sync {
    /// Applies to the menu across every level and role.
    async fn set_menu_sidebar_visibility_global(&self, menu_id: MenuId, visible: bool) -> Result<(), DomainError>;
}
