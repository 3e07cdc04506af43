// ============================================================================
// Menu Access Core - Permission Matrix Editor
// File: crates/menu-access-core/src/services/matrix_editor.rs
// ============================================================================
//! In-memory editing surface for one level's permission matrix.
//!
//! Every await point releases the state lock, so the matrix stays editable
//! while a save, visibility write, or level load is in flight. Results that
//! come back after the selected level changed are discarded using the
//! `(level, generation)` token captured when the request was issued.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use menu_access_shared::MenuId;

use crate::domain::{
    group_rows, Level, LevelTemplate, MatrixGroup, MatrixRow, MenuNode, PermissionAction,
    PermissionSet, TemplateEntry,
};
use crate::error::DomainError;
use crate::repositories::{
    LevelTemplateRepository, MenuCatalogRepository, MenuVisibilityRepository, OrderUpdate,
};
use crate::services::events::{MenuEvent, MenuEventBus};
use crate::services::resolver::{display_order, PermissionMatrixResolver, ResolvedMatrix};

/// What happened to the result of an async matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The result was applied to the current matrix.
    Applied,
    /// The selected level changed while the request was in flight.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatrixToken {
    level: Level,
    generation: u64,
}

#[derive(Debug, Default)]
struct MatrixState {
    selected: Option<Level>,
    generation: u64,
    /// Rows belong to `selected`. False while a level switch is loading.
    loaded: bool,
    catalog: Vec<MenuNode>,
    template_name: String,
    rows: Vec<MatrixRow>,
    /// Grants as last loaded or saved, for dirty tracking.
    baseline: HashMap<MenuId, PermissionSet>,
    /// Bumped on every grant edit.
    edit_seq: u64,
    search: String,
}

impl MatrixState {
    fn token(&self) -> Option<MatrixToken> {
        self.selected.map(|level| MatrixToken {
            level,
            generation: self.generation,
        })
    }

    fn is_current(&self, token: MatrixToken) -> bool {
        self.selected == Some(token.level) && self.generation == token.generation
    }

    fn loaded_level(&self) -> Result<Level, DomainError> {
        match (self.selected, self.loaded) {
            (Some(level), true) => Ok(level),
            (Some(level), false) => Err(DomainError::ValidationError(format!(
                "Permission matrix for level {} is still loading",
                level
            ))),
            (None, _) => Err(DomainError::NoLevelSelected),
        }
    }

    fn row_mut(&mut self, menu_id: MenuId) -> Result<&mut MatrixRow, DomainError> {
        self.rows
            .iter_mut()
            .find(|r| r.menu_id == menu_id)
            .ok_or(DomainError::MenuNotFound(menu_id))
    }

    fn grants(&self) -> HashMap<MenuId, PermissionSet> {
        self.rows.iter().map(|r| (r.menu_id, r.permissions)).collect()
    }

    fn visibility(&self) -> HashMap<MenuId, bool> {
        self.rows
            .iter()
            .map(|r| (r.menu_id, r.permissions.show_in_sidebar))
            .collect()
    }

    /// Full replacement; rows are never patched from a resolved matrix.
    fn install(&mut self, resolved: ResolvedMatrix) {
        self.baseline = resolved
            .rows
            .iter()
            .map(|r| (r.menu_id, r.permissions))
            .collect();
        self.catalog = resolved.catalog;
        self.template_name = resolved.template_name;
        self.rows = resolved.rows;
        self.loaded = true;
    }

    fn save_entries(&self) -> Vec<TemplateEntry> {
        self.rows
            .iter()
            .filter(|r| r.permissions.has_any_grant())
            .map(|r| TemplateEntry {
                menu_id: r.menu_id,
                permissions: r.permissions,
            })
            .collect()
    }
}

/// Permission matrix editor. Cheap to clone; clones share the same matrix.
#[derive(Clone)]
pub struct PermissionMatrixEditor {
    resolver: PermissionMatrixResolver,
    templates: Arc<dyn LevelTemplateRepository>,
    visibility: Arc<dyn MenuVisibilityRepository>,
    events: MenuEventBus,
    state: Arc<Mutex<MatrixState>>,
}

impl PermissionMatrixEditor {
    pub fn new(
        catalog: Arc<dyn MenuCatalogRepository>,
        templates: Arc<dyn LevelTemplateRepository>,
        visibility: Arc<dyn MenuVisibilityRepository>,
        events: MenuEventBus,
    ) -> Self {
        Self {
            resolver: PermissionMatrixResolver::new(catalog, templates.clone()),
            templates,
            visibility,
            events,
            state: Arc::new(Mutex::new(MatrixState::default())),
        }
    }

    pub fn resolver(&self) -> &PermissionMatrixResolver {
        &self.resolver
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MenuEvent> {
        self.events.subscribe()
    }

    // ========================================================================
    // LEVEL SELECTION
    // ========================================================================

    /// Switches the matrix to `level` and loads it.
    ///
    /// The previous rows are dropped immediately. A non-positive level is
    /// rejected before anything is fetched or changed.
    pub async fn select_level(&self, level: i64) -> Result<Settlement, DomainError> {
        let level = Level::new(level)?;

        let token = {
            let mut state = self.state.lock();
            state.selected = Some(level);
            state.generation += 1;
            state.loaded = false;
            state.rows.clear();
            state.catalog.clear();
            state.baseline.clear();
            MatrixToken {
                level,
                generation: state.generation,
            }
        };

        info!("Loading permission matrix for level {}", level);
        let resolved = match self.resolver.resolve(level).await {
            Ok(resolved) => resolved,
            Err(_) if !self.state.lock().is_current(token) => {
                debug!("{} (load failed)", DomainError::StaleResponse { level: level.value() });
                return Ok(Settlement::Discarded);
            }
            Err(e) => return Err(e),
        };
        Ok(self.install_if_current(token, resolved))
    }

    /// Reloads the selected level from the server, dropping unsaved edits.
    pub async fn refresh(&self) -> Result<Settlement, DomainError> {
        let level = self
            .state
            .lock()
            .selected
            .ok_or(DomainError::NoLevelSelected)?;
        self.select_level(level.value()).await
    }

    /// Re-fetches the catalog and rebuilds the rows around the current grants.
    ///
    /// Used to restore authoritative menu order; unsaved grant edits survive.
    pub async fn reload_catalog(&self) -> Result<Settlement, DomainError> {
        let (token, template_name, grants, known_visibility, baseline) = {
            let state = self.state.lock();
            state.loaded_level()?;
            let token = state.token().ok_or(DomainError::NoLevelSelected)?;
            (
                token,
                state.template_name.clone(),
                state.grants(),
                state.visibility(),
                state.baseline.clone(),
            )
        };

        let resolved = match self
            .resolver
            .resolve_with_grants(token.level, template_name, &grants, &known_visibility)
            .await
        {
            Ok(resolved) => resolved,
            Err(_) if !self.state.lock().is_current(token) => return Ok(Settlement::Discarded),
            Err(e) => return Err(e),
        };

        let mut state = self.state.lock();
        if !state.is_current(token) {
            debug!("{}", DomainError::StaleResponse { level: token.level.value() });
            return Ok(Settlement::Discarded);
        }
        state.install(resolved);
        state.baseline = baseline;
        Ok(Settlement::Applied)
    }

    fn install_if_current(&self, token: MatrixToken, resolved: ResolvedMatrix) -> Settlement {
        let mut state = self.state.lock();
        if !state.is_current(token) || resolved.level != token.level {
            debug!("{}", DomainError::StaleResponse { level: token.level.value() });
            return Settlement::Discarded;
        }
        state.install(resolved);
        Settlement::Applied
    }

    // ========================================================================
    // GRANT EDITS
    // ========================================================================

    /// Sets exactly one CRUD flag on exactly one row.
    pub fn toggle_action(&self, menu_id: MenuId, action: PermissionAction, value: bool) -> Result<(), DomainError> {
        let mut state = self.state.lock();
        state.loaded_level()?;
        state.row_mut(menu_id)?.permissions.set(action, value);
        state.edit_seq += 1;
        Ok(())
    }

    /// Sets or clears all four CRUD flags on one row. Visibility is untouched.
    pub fn toggle_all(&self, menu_id: MenuId, value: bool) -> Result<(), DomainError> {
        let mut state = self.state.lock();
        state.loaded_level()?;
        state.row_mut(menu_id)?.permissions.set_all(value);
        state.edit_seq += 1;
        Ok(())
    }

    // ========================================================================
    // GLOBAL SIDEBAR VISIBILITY
    // ========================================================================

    /// Optimistically flips the sidebar bit, then writes it for every level.
    ///
    /// On failure the row goes back to the value it had right before this
    /// toggle, whatever the row holds by the time the failure arrives.
    pub async fn toggle_sidebar_visibility(&self, menu_id: MenuId, visible: bool) -> Result<(), DomainError> {
        let previous = {
            let mut state = self.state.lock();
            state.loaded_level()?;
            let row = state.row_mut(menu_id)?;
            let previous = row.permissions.show_in_sidebar;
            row.permissions.show_in_sidebar = visible;
            previous
        };

        match self
            .visibility
            .set_menu_sidebar_visibility_global(menu_id, visible)
            .await
        {
            Ok(()) => {
                info!("Sidebar visibility for menu {} set to {} globally", menu_id, visible);
                self.events
                    .publish(MenuEvent::SidebarVisibilityChanged { menu_id, visible });
                Ok(())
            }
            Err(e) => {
                {
                    let mut state = self.state.lock();
                    if let Ok(row) = state.row_mut(menu_id) {
                        row.permissions.show_in_sidebar = previous;
                    }
                }
                warn!(
                    "Failed to set sidebar visibility for menu {}, rolled back to {}: {}",
                    menu_id, previous, e
                );
                Err(DomainError::VisibilityRolledBack {
                    menu_id,
                    reason: e.to_string(),
                })
            }
        }
    }

    // ========================================================================
    // SAVE
    // ========================================================================

    /// Writes the matrix as `level`'s template.
    ///
    /// Only rows with at least one CRUD grant become entries. On success the
    /// rows are replaced with the server's copy, unless they were edited while
    /// the request was in flight; then the newer local edits are kept and
    /// stay dirty. On failure nothing local changes.
    pub async fn save(&self, level: Level) -> Result<Settlement, DomainError> {
        let (token, name, entries, edit_seq) = {
            let state = self.state.lock();
            let loaded = state.loaded_level()?;
            if loaded != level {
                return Err(DomainError::ValidationError(format!(
                    "Cannot save level {} while level {} is selected",
                    level, loaded
                )));
            }
            let token = state.token().ok_or(DomainError::NoLevelSelected)?;
            (token, state.template_name.clone(), state.save_entries(), state.edit_seq)
        };

        // Validated before anything is sent.
        LevelTemplate::new(level, name.clone(), entries.clone())?;

        info!("Saving level {} template with {} entries", level, entries.len());
        let result = self
            .templates
            .save_level_template(level, &name, &entries)
            .await;

        let mut state = self.state.lock();
        if !state.is_current(token) {
            debug!(
                "{} (save {})",
                DomainError::StaleResponse { level: level.value() },
                if result.is_ok() { "succeeded" } else { "failed" }
            );
            return Ok(Settlement::Discarded);
        }

        match result {
            Ok(saved) => {
                let saved = if saved.level == level {
                    saved
                } else {
                    warn!(
                        "Save for level {} returned level {}, keeping the submitted template",
                        level, saved.level
                    );
                    LevelTemplate::new(level, name, entries)?
                };
                let known_visibility = state.visibility();
                let resolved = PermissionMatrixResolver::resolve_from(
                    level,
                    state.catalog.clone(),
                    Some(&saved),
                    &known_visibility,
                );
                if state.edit_seq == edit_seq {
                    state.install(resolved);
                } else {
                    debug!("Rows edited during save of level {}, keeping local edits", level);
                    state.template_name = resolved.template_name;
                    state.baseline = resolved
                        .rows
                        .iter()
                        .map(|r| (r.menu_id, r.permissions))
                        .collect();
                }
                drop(state);
                info!("Level {} template saved", level);
                self.events.publish(MenuEvent::TemplateSaved { level });
                Ok(Settlement::Applied)
            }
            Err(e) => {
                warn!("Failed to save level {} template, local edits kept: {}", level, e);
                Err(DomainError::SaveFailed {
                    level: level.value(),
                    reason: e.to_string(),
                })
            }
        }
    }

    // ========================================================================
    // VIEW
    // ========================================================================

    /// Sets the view filter. Never changes grants or order.
    pub fn set_search(&self, query: impl Into<String>) {
        self.state.lock().search = query.into();
    }

    pub fn search(&self) -> String {
        self.state.lock().search.clone()
    }

    pub fn selected_level(&self) -> Option<Level> {
        self.state.lock().selected
    }

    pub fn is_loaded(&self) -> bool {
        self.state.lock().loaded
    }

    /// Template name the next save will use.
    pub fn template_name(&self) -> String {
        self.state.lock().template_name.clone()
    }

    /// True when any grant differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        let state = self.state.lock();
        state.rows.iter().any(|row| {
            state
                .baseline
                .get(&row.menu_id)
                .map_or(row.permissions.has_any_grant(), |base| {
                    !base.same_grants(&row.permissions)
                })
        })
    }

    /// All rows in display order, ignoring the search filter.
    pub fn rows(&self) -> Vec<MatrixRow> {
        self.state.lock().rows.clone()
    }

    pub fn row(&self, menu_id: MenuId) -> Option<MatrixRow> {
        self.state
            .lock()
            .rows
            .iter()
            .find(|r| r.menu_id == menu_id)
            .cloned()
    }

    /// Rows matching the search filter, in display order.
    pub fn visible_rows(&self) -> Vec<MatrixRow> {
        let state = self.state.lock();
        state
            .rows
            .iter()
            .filter(|r| r.matches_search(&state.search))
            .cloned()
            .collect()
    }

    /// Groups for display under the search filter.
    ///
    /// A group is kept when its root or any child matches. A matching root
    /// keeps all its children; otherwise only matching children are shown.
    pub fn groups(&self) -> Vec<MatrixGroup> {
        let state = self.state.lock();
        let query = state.search.as_str();
        group_rows(&state.rows)
            .into_iter()
            .filter_map(|mut group| {
                if group.root.matches_search(query) {
                    return Some(group);
                }
                group.children.retain(|c| c.matches_search(query));
                (!group.children.is_empty()).then_some(group)
            })
            .collect()
    }

    /// Groups without the search filter. Reordering always works on these.
    pub fn all_groups(&self) -> Vec<MatrixGroup> {
        group_rows(&self.state.lock().rows)
    }

    pub(crate) fn ensure_loaded(&self) -> Result<Level, DomainError> {
        self.state.lock().loaded_level()
    }

    /// Applies new order indexes to rows and the cached catalog, then re-sorts.
    pub(crate) fn apply_order(&self, updates: &[OrderUpdate]) {
        let mut state = self.state.lock();
        let by_id: HashMap<MenuId, i32> = updates
            .iter()
            .map(|u| (u.menu_id, u.order_index))
            .collect();

        for row in state.rows.iter_mut() {
            if let Some(order_index) = by_id.get(&row.menu_id) {
                row.order_index = *order_index;
            }
        }
        for node in state.catalog.iter_mut() {
            if let Some(order_index) = by_id.get(&node.menu_id) {
                node.order_index = *order_index;
            }
        }

        let rows = std::mem::take(&mut state.rows);
        state.rows = display_order(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockLevelTemplateRepository, MockMenuCatalogRepository, MockMenuVisibilityRepository,
    };

    fn inventory_catalog() -> Vec<MenuNode> {
        vec![
            MenuNode::new(1, "Inventory", "/inventory", None, 10),
            MenuNode::new(2, "Stock List", "/inventory/stock", Some(1), 20),
            MenuNode::new(3, "Vendors", "/vendors", None, 20),
            MenuNode::new(4, "Vendor Contacts", "/vendors/contacts", Some(3), 21),
        ]
    }

    fn level(value: i64) -> Level {
        Level::new(value).unwrap()
    }

    fn catalog_mock() -> MockMenuCatalogRepository {
        let mut catalog = MockMenuCatalogRepository::new();
        catalog
            .expect_fetch_menu_catalog()
            .returning(|| Ok(inventory_catalog()));
        catalog
    }

    fn template_mock() -> MockLevelTemplateRepository {
        let mut templates = MockLevelTemplateRepository::new();
        templates.expect_fetch_level_template().returning(|lvl| {
            Ok(Some(LevelTemplate::new(
                lvl,
                "Warehouse",
                vec![TemplateEntry {
                    menu_id: 2,
                    permissions: PermissionSet::read_only(),
                }],
            )?))
        });
        templates
    }

    fn editor_with(
        templates: MockLevelTemplateRepository,
        visibility: MockMenuVisibilityRepository,
    ) -> PermissionMatrixEditor {
        PermissionMatrixEditor::new(
            Arc::new(catalog_mock()),
            Arc::new(templates),
            Arc::new(visibility),
            MenuEventBus::new(16),
        )
    }

    #[tokio::test]
    async fn test_rejects_non_positive_level_before_fetching() {
        // No expectations: any fetch would panic.
        let editor = PermissionMatrixEditor::new(
            Arc::new(MockMenuCatalogRepository::new()),
            Arc::new(MockLevelTemplateRepository::new()),
            Arc::new(MockMenuVisibilityRepository::new()),
            MenuEventBus::new(4),
        );
        let result = editor.select_level(0).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
        assert_eq!(editor.selected_level(), None);
    }

    #[tokio::test]
    async fn test_toggle_all_grants_only_target_row() {
        let editor = editor_with(template_mock(), MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();

        editor.toggle_all(2, true).unwrap();
        let once = editor.rows();
        editor.toggle_all(2, true).unwrap();
        assert_eq!(editor.rows(), once);

        let stock = editor.row(2).unwrap();
        assert!(stock.permissions.has_all_grants());
        assert!(stock.permissions.show_in_sidebar);
        assert_eq!(editor.row(1).unwrap().permissions, PermissionSet::default());
        assert!(editor.is_dirty());
    }

    #[tokio::test]
    async fn test_toggle_action_sets_one_flag() {
        let editor = editor_with(template_mock(), MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();

        editor.toggle_action(1, PermissionAction::Update, true).unwrap();
        let inventory = editor.row(1).unwrap().permissions;
        assert!(inventory.can_update);
        assert!(!inventory.can_read && !inventory.can_create && !inventory.can_delete);

        let missing = editor.toggle_action(99, PermissionAction::Read, true);
        assert_eq!(missing, Err(DomainError::MenuNotFound(99)));
    }

    #[tokio::test]
    async fn test_edits_require_loaded_matrix() {
        let editor = editor_with(template_mock(), MockMenuVisibilityRepository::new());
        assert_eq!(editor.toggle_all(2, true), Err(DomainError::NoLevelSelected));
    }

    #[tokio::test]
    async fn test_sidebar_failure_rolls_back_and_keeps_other_edits() {
        let mut visibility = MockMenuVisibilityRepository::new();
        visibility
            .expect_set_menu_sidebar_visibility_global()
            .returning(|_, _| Err(DomainError::TransportError("timeout".into())));
        let editor = editor_with(template_mock(), visibility);
        editor.select_level(3).await.unwrap();

        editor.toggle_all(4, true).unwrap();
        let result = editor.toggle_sidebar_visibility(2, false).await;

        let err = result.unwrap_err();
        assert!(err.was_rolled_back());
        assert!(editor.row(2).unwrap().permissions.show_in_sidebar);
        assert!(editor.row(4).unwrap().permissions.has_all_grants());
    }

    #[tokio::test]
    async fn test_sidebar_success_emits_invalidation() {
        let mut visibility = MockMenuVisibilityRepository::new();
        visibility
            .expect_set_menu_sidebar_visibility_global()
            .withf(|menu_id, visible| *menu_id == 2 && !*visible)
            .times(1)
            .returning(|_, _| Ok(()));
        let editor = editor_with(template_mock(), visibility);
        editor.select_level(3).await.unwrap();
        let mut rx = editor.subscribe();

        editor.toggle_sidebar_visibility(2, false).await.unwrap();

        assert!(!editor.row(2).unwrap().permissions.show_in_sidebar);
        assert_eq!(
            rx.recv().await.unwrap(),
            MenuEvent::SidebarVisibilityChanged { menu_id: 2, visible: false }
        );
    }

    #[tokio::test]
    async fn test_save_sends_only_granted_rows() {
        let mut templates = template_mock();
        templates
            .expect_save_level_template()
            .withf(|lvl, name, entries| {
                lvl.value() == 3
                    && name == "Warehouse"
                    && entries.len() == 1
                    && entries[0].menu_id == 2
                    && entries[0].permissions.has_all_grants()
            })
            .times(1)
            .returning(|lvl, name, entries| LevelTemplate::new(lvl, name, entries.to_vec()));
        let editor = editor_with(templates, MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();

        editor.toggle_all(2, true).unwrap();
        assert_eq!(editor.save(level(3)).await.unwrap(), Settlement::Applied);
        assert!(!editor.is_dirty());
        assert!(editor.row(2).unwrap().permissions.has_all_grants());
    }

    #[tokio::test]
    async fn test_save_ignores_template_returned_for_another_level() {
        let mut templates = template_mock();
        templates.expect_save_level_template().returning(|_, _, _| {
            LevelTemplate::new(
                Level::new(9)?,
                "Auditors",
                vec![TemplateEntry {
                    menu_id: 1,
                    permissions: PermissionSet::full_access(),
                }],
            )
        });
        let editor = editor_with(templates, MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();

        editor.toggle_all(2, true).unwrap();
        assert_eq!(editor.save(level(3)).await.unwrap(), Settlement::Applied);

        assert_eq!(editor.template_name(), "Warehouse");
        assert!(editor.row(2).unwrap().permissions.has_all_grants());
        assert!(!editor.row(1).unwrap().permissions.has_any_grant());
        assert!(!editor.is_dirty());
    }

    #[tokio::test]
    async fn test_save_failure_keeps_local_edits() {
        let mut templates = template_mock();
        templates
            .expect_save_level_template()
            .returning(|_, _, _| Err(DomainError::TransportError("502".into())));
        let editor = editor_with(templates, MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();

        editor.toggle_action(1, PermissionAction::Read, true).unwrap();
        let err = editor.save(level(3)).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(editor.row(1).unwrap().permissions.can_read);
        assert!(editor.is_dirty());
    }

    #[tokio::test]
    async fn test_save_for_other_level_is_rejected() {
        let editor = editor_with(template_mock(), MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();
        let result = editor.save(level(2)).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_search_filters_view_only() {
        let editor = editor_with(template_mock(), MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();
        let before = editor.rows();

        editor.set_search("STOCK");
        let visible: Vec<MenuId> = editor.visible_rows().iter().map(|r| r.menu_id).collect();
        assert_eq!(visible, vec![2]);

        let groups = editor.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].root_id(), 1);
        assert_eq!(groups[0].children.len(), 1);

        editor.set_search("vendors");
        let groups = editor.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].children.len(), 1);

        assert_eq!(editor.rows(), before);
        assert_eq!(editor.all_groups().len(), 2);
    }

    #[tokio::test]
    async fn test_apply_order_resorts_rows() {
        let editor = editor_with(template_mock(), MockMenuVisibilityRepository::new());
        editor.select_level(3).await.unwrap();

        editor.apply_order(&[
            OrderUpdate { menu_id: 3, order_index: 10 },
            OrderUpdate { menu_id: 1, order_index: 20 },
        ]);
        let ids: Vec<MenuId> = editor.rows().iter().map(|r| r.menu_id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}
