// ============================================================================
// Menu Access Core - Permission Matrix Resolver
// File: crates/menu-access-core/src/services/resolver.rs
// ============================================================================
//! Merges the menu catalog with a level template into matrix rows.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use menu_access_shared::MenuId;

use crate::domain::{group_rows, Level, LevelTemplate, MatrixRow, MenuNode, PermissionSet};
use crate::error::DomainError;
use crate::repositories::{LevelTemplateRepository, MenuCatalogRepository};

/// A full matrix, tagged with the level it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatrix {
    pub level: Level,
    pub template_name: String,
    pub catalog: Vec<MenuNode>,
    pub rows: Vec<MatrixRow>,
}

/// Builds one row per distinct `menu_id` in `catalog`, in display order.
///
/// CRUD flags come from `grants` and default to none. Sidebar visibility is
/// taken from `known_visibility` first, then the catalog's global value, then
/// the grant's mirrored value, and finally defaults to visible.
pub fn resolve_rows(
    catalog: &[MenuNode],
    grants: &HashMap<MenuId, PermissionSet>,
    known_visibility: &HashMap<MenuId, bool>,
) -> Vec<MatrixRow> {
    let mut seen = HashSet::with_capacity(catalog.len());
    let rows: Vec<MatrixRow> = catalog
        .iter()
        .filter(|node| {
            let first = seen.insert(node.menu_id);
            if !first {
                warn!("Duplicate menu_id {} in catalog, keeping the first entry", node.menu_id);
            }
            first
        })
        .map(|node| {
            let mut permissions = grants.get(&node.menu_id).copied().unwrap_or_default();
            permissions.show_in_sidebar = known_visibility
                .get(&node.menu_id)
                .copied()
                .or(node.show_in_sidebar)
                .unwrap_or(permissions.show_in_sidebar);
            MatrixRow::from_node(node, permissions)
        })
        .collect();

    display_order(rows)
}

/// Sorts rows as they are shown: group by group, each group's rows in
/// row-scope order.
pub fn display_order(rows: Vec<MatrixRow>) -> Vec<MatrixRow> {
    group_rows(&rows)
        .iter()
        .flat_map(|group| group.items().cloned().collect::<Vec<_>>())
        .collect()
}

/// Resolver service fetching both sources for a level.
#[derive(Clone)]
pub struct PermissionMatrixResolver {
    catalog: Arc<dyn MenuCatalogRepository>,
    templates: Arc<dyn LevelTemplateRepository>,
}

impl PermissionMatrixResolver {
    pub fn new(
        catalog: Arc<dyn MenuCatalogRepository>,
        templates: Arc<dyn LevelTemplateRepository>,
    ) -> Self {
        Self { catalog, templates }
    }

    /// Resolves the full matrix for `level` from fresh catalog and template reads.
    ///
    /// A missing template or a failed template fetch both yield the default
    /// matrix for this level. A failed catalog fetch is an error.
    pub async fn resolve(&self, level: Level) -> Result<ResolvedMatrix, DomainError> {
        let catalog = self.fetch_catalog().await?;

        let template = match self.templates.fetch_level_template(level).await {
            Ok(Some(template)) if template.level == level => Some(template),
            Ok(Some(template)) => {
                warn!(
                    "Template fetch for level {} returned level {}, using defaults",
                    level, template.level
                );
                None
            }
            Ok(None) => {
                debug!("{}, using defaults", DomainError::TemplateNotFound(level.value()));
                None
            }
            Err(e) => {
                warn!("Failed to fetch template for level {}, using defaults: {}", level, e);
                None
            }
        };

        let resolved = Self::resolve_from(level, catalog, template.as_ref(), &HashMap::new());
        info!(
            "Resolved permission matrix for level {}: {} rows",
            level,
            resolved.rows.len()
        );
        Ok(resolved)
    }

    /// Re-resolves with a fresh catalog but caller-provided grants.
    pub async fn resolve_with_grants(
        &self,
        level: Level,
        template_name: String,
        grants: &HashMap<MenuId, PermissionSet>,
        known_visibility: &HashMap<MenuId, bool>,
    ) -> Result<ResolvedMatrix, DomainError> {
        let catalog = self.fetch_catalog().await?;
        let rows = resolve_rows(&catalog, grants, known_visibility);
        Ok(ResolvedMatrix {
            level,
            template_name,
            catalog,
            rows,
        })
    }

    /// Pure merge of an already fetched catalog and template.
    pub fn resolve_from(
        level: Level,
        catalog: Vec<MenuNode>,
        template: Option<&LevelTemplate>,
        known_visibility: &HashMap<MenuId, bool>,
    ) -> ResolvedMatrix {
        let grants = template.map(LevelTemplate::lookup).unwrap_or_default();
        let template_name = template
            .map(|t| t.name.clone())
            .unwrap_or_else(|| LevelTemplate::default_name(level));
        let rows = resolve_rows(&catalog, &grants, known_visibility);

        ResolvedMatrix {
            level,
            template_name,
            catalog,
            rows,
        }
    }

    async fn fetch_catalog(&self) -> Result<Vec<MenuNode>, DomainError> {
        self.catalog.fetch_menu_catalog().await.map_err(|e| {
            warn!("Failed to fetch menu catalog: {}", e);
            e
        })
    }
}
