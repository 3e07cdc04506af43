//! Order index planning for the two reorder scopes.

use menu_access_shared::{MenuId, OrderIndex};

use crate::domain::MatrixGroup;
use crate::repositories::OrderUpdate;

/// Moves the element at `from` to `to`, shifting the ones in between.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

fn move_ids(mut ids: Vec<MenuId>, active: MenuId, over: MenuId) -> Option<Vec<MenuId>> {
    let from = ids.iter().position(|id| *id == active)?;
    let to = ids.iter().position(|id| *id == over)?;
    if from == to {
        return None;
    }
    array_move(&mut ids, from, to);
    Some(ids)
}

/// New order for every root group after dragging `active` onto `over`.
///
/// Position `p` (0-based) gets `(p + 1) * stride`. Detached groups (whose root
/// has a parent) are not part of the box scope.
pub fn plan_box_reorder(
    groups: &[MatrixGroup],
    active: MenuId,
    over: MenuId,
    stride: OrderIndex,
) -> Option<Vec<OrderUpdate>> {
    let roots: Vec<MenuId> = groups
        .iter()
        .filter(|g| g.root.is_root())
        .map(MatrixGroup::root_id)
        .collect();

    let moved = move_ids(roots, active, over)?;
    Some(stride_order(&moved, stride))
}

pub fn stride_order(root_ids: &[MenuId], stride: OrderIndex) -> Vec<OrderUpdate> {
    root_ids
        .iter()
        .enumerate()
        .map(|(position, menu_id)| OrderUpdate {
            menu_id: *menu_id,
            order_index: (position as OrderIndex + 1) * stride,
        })
        .collect()
}

/// New order for the root and children of `group` after a row drag.
///
/// Items get a dense sequence starting at the group's lowest current index,
/// so repeated drags never creep towards the next root's slot.
pub fn plan_row_reorder(group: &MatrixGroup, active: MenuId, over: MenuId) -> Option<Vec<OrderUpdate>> {
    let ids: Vec<MenuId> = group.items().map(|r| r.menu_id).collect();
    let moved = move_ids(ids, active, over)?;
    let base = group.base_order();

    Some(
        moved
            .into_iter()
            .enumerate()
            .map(|(position, menu_id)| OrderUpdate {
                menu_id,
                order_index: base + position as OrderIndex,
            })
            .collect(),
    )
}
