// ============================================================================
// Menu Access Infrastructure - HTTP Menu Order Repository
// File: crates/menu-access-infrastructure/src/http/menu_order_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::info;

use menu_access_core::error::DomainError;
use menu_access_core::repositories::{MenuOrderRepository, OrderUpdate};

use super::client::BackendClient;

pub struct HttpMenuOrderRepository {
    client: BackendClient,
}

impl HttpMenuOrderRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct BulkOrderBody<'a> {
    orders: &'a [OrderUpdate],
}

#[async_trait]
impl MenuOrderRepository for HttpMenuOrderRepository {
    async fn bulk_set_menu_order(&self, entries: &[OrderUpdate]) -> Result<(), DomainError> {
        if entries.is_empty() {
            return Ok(());
        }
        self.client
            .put::<_, IgnoredAny>("menus/order", &BulkOrderBody { orders: entries })
            .await?;
        info!("Updated order for {} menus", entries.len());
        Ok(())
    }
}
