//! Linearization of the backward-pointer box tree.
//!
//! Produces an order in which every parent precedes its children and earlier
//! siblings precede later ones, starting from an arbitrary enumeration of the
//! boxes. Each box walks up its previous-sibling chain and then to its parent
//! until it reaches a box that is already placed or the root. The walk is
//! reversed and appended, so each box is placed exactly once and the whole
//! pass is linear in the number of boxes.

use seed_core::{Entity, SiblingFault, TreeError};

use crate::scratch::{Scratch, NO_PARENT};
use crate::tree::{BoxStorage, LayoutBox};

fn fetch<S: BoxStorage>(store: &S, from: Entity, target: Entity) -> Result<&LayoutBox, TreeError> {
    store
        .get_box(target)
        .ok_or(TreeError::UnknownBox { entity: from, target })
}

/// Enumeration number of `target`, referenced by `from`.
fn number(scratch: &Scratch, from: Entity, target: Entity) -> Result<usize, TreeError> {
    scratch
        .number
        .get(target)
        .map(|&n| n as usize)
        .ok_or(TreeError::UnknownBox { entity: from, target })
}

/// A walk closed on itself. Without any parentless box this is a rootless
/// store rather than a loop beside a valid tree.
fn closed_walk<S: BoxStorage>(store: &S, entity: Entity) -> TreeError {
    let has_root = store
        .box_entities()
        .any(|e| store.get_box(e).is_some_and(LayoutBox::is_root));
    if has_root {
        TreeError::CycleDetected { entity }
    } else {
        TreeError::MissingRoot {
            boxes: store.box_count(),
        }
    }
}

/// Fill `scratch.order`, `scratch.parent` and `scratch.settings`.
///
/// With `strict` set, sibling chains that fork or parents with two first
/// children are rejected as well.
pub(crate) fn linearize<S: BoxStorage>(
    store: &S,
    scratch: &mut Scratch,
    strict: bool,
) -> Result<(), TreeError> {
    scratch.reset(store);
    let mut root: Option<Entity> = None;

    for start in 0..scratch.boxes.len() {
        if scratch.visited[start] {
            continue;
        }
        scratch.run.clear();
        scratch.run.push(start as u32);
        scratch.visited.set(start, true);

        let mut current = start;
        loop {
            let entity = scratch.boxes[current];
            let node = fetch(store, entity, entity)?;
            let next = match (node.prev_sibling, node.parent) {
                (Some(sibling), parent) => {
                    let prev = fetch(store, entity, sibling)?;
                    if prev.parent != parent {
                        return Err(TreeError::InconsistentSibling {
                            entity,
                            fault: SiblingFault::ParentMismatch { sibling },
                        });
                    }
                    if parent.is_none() {
                        return Err(TreeError::MultipleRoots {
                            first: sibling,
                            second: entity,
                        });
                    }
                    let next = number(scratch, entity, sibling)?;
                    if strict {
                        if scratch.claimed[next] {
                            return Err(TreeError::InconsistentSibling {
                                entity,
                                fault: SiblingFault::SharedPrevious { sibling },
                            });
                        }
                        scratch.claimed.set(next, true);
                    }
                    next
                }
                (None, Some(parent)) => {
                    let next = number(scratch, entity, parent)?;
                    if strict {
                        if scratch.first_child[next] {
                            return Err(TreeError::InconsistentSibling {
                                entity,
                                fault: SiblingFault::DuplicateFirstChild { parent },
                            });
                        }
                        scratch.first_child.set(next, true);
                    }
                    next
                }
                (None, None) => {
                    if let Some(first) = root {
                        return Err(TreeError::MultipleRoots {
                            first,
                            second: entity,
                        });
                    }
                    root = Some(entity);
                    break;
                }
            };

            if scratch.visited[next] {
                // Reaching a box of the walk in progress means a loop.
                if !scratch.placed[next] {
                    return Err(closed_walk(store, scratch.boxes[next]));
                }
                break;
            }
            scratch.visited.set(next, true);
            scratch.run.push(next as u32);
            current = next;
        }

        for i in (0..scratch.run.len()).rev() {
            let n = scratch.run[i] as usize;
            let entity = scratch.boxes[n];
            let node = fetch(store, entity, entity)?;
            let parent = match node.parent {
                Some(parent) => scratch.slot[number(scratch, entity, parent)?],
                None => NO_PARENT,
            };
            scratch.slot[n] = scratch.order.len() as u32;
            scratch.placed.set(n, true);
            scratch.order.push(entity);
            scratch.parent.push(parent);
            scratch.settings.push(node.settings);
        }
    }

    Ok(())
}
