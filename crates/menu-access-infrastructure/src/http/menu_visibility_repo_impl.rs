// ============================================================================
// Menu Access Infrastructure - HTTP Sidebar Visibility Repository
// File: crates/menu-access-infrastructure/src/http/menu_visibility_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::info;

use menu_access_core::error::DomainError;
use menu_access_core::repositories::MenuVisibilityRepository;
use menu_access_shared::MenuId;

use super::client::BackendClient;

pub struct HttpMenuVisibilityRepository {
    client: BackendClient,
}

impl HttpMenuVisibilityRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct VisibilityBody {
    show_in_sidebar: bool,
}

#[async_trait]
impl MenuVisibilityRepository for HttpMenuVisibilityRepository {
    async fn set_menu_sidebar_visibility_global(&self, menu_id: MenuId, visible: bool) -> Result<(), DomainError> {
        let path = format!("menus/{}/sidebar-visibility", menu_id);
        self.client
            .put::<_, IgnoredAny>(&path, &VisibilityBody { show_in_sidebar: visible })
            .await?;
        info!("Menu {} sidebar visibility set to {}", menu_id, visible);
        Ok(())
    }
}
