// ============================================================================
// Menu Access Infrastructure - HTTP Menu Catalog Repository
// File: crates/menu-access-infrastructure/src/http/menu_catalog_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use tracing::info;

use menu_access_core::domain::MenuNode;
use menu_access_core::error::DomainError;
use menu_access_core::repositories::MenuCatalogRepository;

use super::client::BackendClient;

pub struct HttpMenuCatalogRepository {
    client: BackendClient,
}

impl HttpMenuCatalogRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuCatalogRepository for HttpMenuCatalogRepository {
    async fn fetch_menu_catalog(&self) -> Result<Vec<MenuNode>, DomainError> {
        let menus: Vec<MenuNode> = self.client.get("menus").await?.unwrap_or_default();
        info!("Fetched menu catalog: {} menus", menus.len());
        Ok(menus)
    }
}
