//! Plain-text output

use std::fmt::Write;

use menu_access_core::repositories::OrderUpdate;
use menu_access_core::services::NavigationGroup;
use menu_access_core::{MatrixGroup, MatrixRow, PermissionAction};

fn flag(on: bool, letter: char) -> char {
    if on { letter } else { '-' }
}

pub fn row_line(row: &MatrixRow) -> String {
    let p = &row.permissions;
    let grants: String = PermissionAction::ALL
        .iter()
        .map(|a| flag(p.get(*a), a.as_str().chars().next().unwrap_or('?').to_ascii_uppercase()))
        .collect();
    format!(
        "{:>5}  {}  {:<7}  {} ({})",
        row.menu_id,
        grants,
        if p.show_in_sidebar { "shown" } else { "hidden" },
        row.menu_name,
        row.menu_path,
    )
}

pub fn matrix(title: &str, groups: &[MatrixGroup]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    if groups.is_empty() {
        let _ = writeln!(out, "  (no menus)");
    }
    for group in groups {
        for row in group.items() {
            let indent = if row.menu_id == group.root_id() { "" } else { "  " };
            let _ = writeln!(out, "{}{}", indent, row_line(row));
        }
    }
    out
}

pub fn order_result(updates: Option<&[OrderUpdate]>) -> String {
    match updates {
        None => "Nothing to reorder\n".to_string(),
        Some(updates) => updates
            .iter()
            .map(|u| format!("{:>5} -> {}\n", u.menu_id, u.order_index))
            .collect(),
    }
}

pub fn navigation(tree: &[NavigationGroup]) -> String {
    let mut out = String::new();
    for group in tree {
        let _ = writeln!(out, "{} ({})", group.root.menu_name, group.root.menu_path);
        for item in &group.children {
            let _ = writeln!(out, "  {} ({})", item.menu_name, item.menu_path);
        }
    }
    out
}
