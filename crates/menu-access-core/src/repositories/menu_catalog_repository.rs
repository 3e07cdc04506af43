//! Menu catalog repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuNode;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuCatalogRepository: Send + Sync {
    /// Full menu tree as a flat list with parent references.
    async fn fetch_menu_catalog(&self) -> Result<Vec<MenuNode>, DomainError>;
}
