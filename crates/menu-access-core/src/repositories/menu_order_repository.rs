//! Menu order repository trait (port)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use menu_access_shared::{MenuId, OrderIndex};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub menu_id: MenuId,
    pub order_index: OrderIndex,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuOrderRepository: Send + Sync {
    async fn bulk_set_menu_order(&self, entries: &[OrderUpdate]) -> Result<(), DomainError>;
}
