//! In-memory backend whose calls can be held open or failed on demand.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{mpsc, Semaphore};

use menu_access_core::repositories::{
    LevelTemplateRepository, MenuCatalogRepository, MenuOrderRepository, MenuVisibilityRepository,
    OrderUpdate,
};
use menu_access_core::services::{MenuEventBus, PermissionMatrixEditor, ReorderCoordinator};
use menu_access_core::{DomainError, Level, LevelTemplate, MenuNode, PermissionSet, TemplateEntry};

pub const CATALOG: &str = "catalog";
pub const SAVE: &str = "save";
pub const VISIBILITY: &str = "visibility";
pub const ORDER: &str = "order";

pub fn template_key(level: i64) -> String {
    format!("template:{}", level)
}

#[derive(Default)]
struct Faults {
    held: HashMap<String, Arc<Semaphore>>,
    failing: HashSet<String>,
    active: HashMap<String, usize>,
    max_active: HashMap<String, usize>,
}

pub struct GatedBackend {
    pub catalog: Mutex<Vec<MenuNode>>,
    pub templates: Mutex<HashMap<Level, LevelTemplate>>,
    pub visibility: Mutex<HashMap<i64, bool>>,
    pub order_writes: Mutex<Vec<Vec<OrderUpdate>>>,
    faults: Mutex<Faults>,
    started_tx: mpsc::UnboundedSender<String>,
    started_rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<String>>,
}

impl GatedBackend {
    pub fn new(catalog: Vec<MenuNode>) -> Arc<Self> {
        let (started_tx, started_rx) = mpsc::unbounded_channel();
        Arc::new(Self {
            catalog: Mutex::new(catalog),
            templates: Mutex::new(HashMap::new()),
            visibility: Mutex::new(HashMap::new()),
            order_writes: Mutex::new(Vec::new()),
            faults: Mutex::new(Faults::default()),
            started_tx,
            started_rx: tokio::sync::Mutex::new(started_rx),
        })
    }

    pub fn with_template(self: Arc<Self>, level: i64, entries: Vec<TemplateEntry>) -> Arc<Self> {
        let level = Level::new(level).unwrap();
        let template = LevelTemplate::new(level, format!("Template {}", level), entries).unwrap();
        self.templates.lock().insert(level, template);
        self
    }

    /// Calls to `op` block until `release(op)` is called once per call.
    pub fn hold(&self, op: impl Into<String>) {
        self.faults
            .lock()
            .held
            .insert(op.into(), Arc::new(Semaphore::new(0)));
    }

    pub fn release(&self, op: &str) {
        if let Some(gate) = self.faults.lock().held.get(op) {
            gate.add_permits(1);
        }
    }

    pub fn fail(&self, op: impl Into<String>) {
        self.faults.lock().failing.insert(op.into());
    }

    pub fn succeed(&self, op: &str) {
        self.faults.lock().failing.remove(op);
    }

    pub fn max_concurrent(&self, op: &str) -> usize {
        self.faults.lock().max_active.get(op).copied().unwrap_or(0)
    }

    /// Waits until a call to `op` has entered the backend.
    pub async fn started(&self, op: &str) {
        let mut rx = self.started_rx.lock().await;
        while let Some(name) = rx.recv().await {
            if name == op {
                return;
            }
        }
    }

    async fn enter(&self, op: &str) -> Result<(), DomainError> {
        let gate = {
            let mut faults = self.faults.lock();
            let active = faults.active.entry(op.to_string()).or_insert(0);
            *active += 1;
            let now = *active;
            let max = faults.max_active.entry(op.to_string()).or_insert(0);
            *max = (*max).max(now);
            faults.held.get(op).cloned()
        };
        let _ = self.started_tx.send(op.to_string());

        if let Some(gate) = gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        let mut faults = self.faults.lock();
        if let Some(active) = faults.active.get_mut(op) {
            *active -= 1;
        }
        if faults.failing.contains(op) {
            return Err(DomainError::TransportError(format!("{} failed", op)));
        }
        Ok(())
    }
}

#[async_trait]
impl MenuCatalogRepository for GatedBackend {
    async fn fetch_menu_catalog(&self) -> Result<Vec<MenuNode>, DomainError> {
        self.enter(CATALOG).await?;
        let visibility = self.visibility.lock().clone();
        Ok(self
            .catalog
            .lock()
            .iter()
            .cloned()
            .map(|mut node| {
                node.show_in_sidebar = visibility.get(&node.menu_id).copied();
                node
            })
            .collect())
    }
}

#[async_trait]
impl LevelTemplateRepository for GatedBackend {
    async fn fetch_level_template(&self, level: Level) -> Result<Option<LevelTemplate>, DomainError> {
        self.enter(&template_key(level.value())).await?;
        Ok(self.templates.lock().get(&level).cloned())
    }

    async fn save_level_template(
        &self,
        level: Level,
        name: &str,
        entries: &[TemplateEntry],
    ) -> Result<LevelTemplate, DomainError> {
        self.enter(SAVE).await?;
        let template = LevelTemplate::new(level, name, entries.to_vec())?;
        self.templates.lock().insert(level, template.clone());
        Ok(template)
    }
}

#[async_trait]
impl MenuVisibilityRepository for GatedBackend {
    async fn set_menu_sidebar_visibility_global(&self, menu_id: i64, visible: bool) -> Result<(), DomainError> {
        self.enter(VISIBILITY).await?;
        self.visibility.lock().insert(menu_id, visible);
        Ok(())
    }
}

#[async_trait]
impl MenuOrderRepository for GatedBackend {
    async fn bulk_set_menu_order(&self, entries: &[OrderUpdate]) -> Result<(), DomainError> {
        self.enter(ORDER).await?;
        let mut catalog = self.catalog.lock();
        for update in entries {
            if let Some(node) = catalog.iter_mut().find(|n| n.menu_id == update.menu_id) {
                node.order_index = update.order_index;
            }
        }
        self.order_writes.lock().push(entries.to_vec());
        Ok(())
    }
}

/// Inventory (1) with Stock List (2) and Stock Movements (5), Vendors (3)
/// with Vendor Contacts (4), Reports (6).
pub fn catalog() -> Vec<MenuNode> {
    vec![
        MenuNode::new(1, "Inventory", "/inventory", None, 10),
        MenuNode::new(2, "Stock List", "/inventory/stock", Some(1), 20),
        MenuNode::new(5, "Stock Movements", "/inventory/movements", Some(1), 21),
        MenuNode::new(3, "Vendors", "/vendors", None, 20),
        MenuNode::new(4, "Vendor Contacts", "/vendors/contacts", Some(3), 21),
        MenuNode::new(6, "Reports", "/reports", None, 30),
    ]
}

pub fn read_on(menu_id: i64) -> TemplateEntry {
    TemplateEntry {
        menu_id,
        permissions: PermissionSet::read_only(),
    }
}

pub fn editor(backend: &Arc<GatedBackend>, bus: &MenuEventBus) -> PermissionMatrixEditor {
    PermissionMatrixEditor::new(backend.clone(), backend.clone(), backend.clone(), bus.clone())
}

pub fn coordinator(backend: &Arc<GatedBackend>, editor: &PermissionMatrixEditor, bus: &MenuEventBus) -> ReorderCoordinator {
    ReorderCoordinator::new(editor.clone(), backend.clone(), bus.clone(), 10)
}

pub fn level(value: i64) -> Level {
    Level::new(value).unwrap()
}
