//! Box layout computation for Seed user interfaces.
//!
//! This crate turns a tree of constrained boxes into clip-space rectangles.
//! Boxes only point backwards (parent and previous sibling), and the store
//! enumerates them in no particular order. Any [`BoxStorage`] works as the
//! store; it is implemented for `slotmap`'s `SlotMap` and `DenseSlotMap`
//! keyed by [`Entity`](seed_core::Entity).
//!
//! # Architecture
//!
//! 1. **Linearization**: rebuilds a parent-before-child, sibling-ordered
//!    sequence from the backward pointers and validates the tree
//! 2. **Minimum sizes**: bottom-up accumulation of minimum footprints and
//!    grow totals
//! 3. **Distribution**: top-down placement, growth and cross-axis fill
//!
//! Each pass is iterative and linear in the number of boxes; working buffers
//! are reused between calls.
//!
//! # Example
//!
//! ```
//! use seed_core::{Direction, Entity, PixelSize};
//! use seed_layout::{BoxLayout, LayoutBox};
//! use slotmap::SlotMap;
//!
//! let mut boxes: SlotMap<Entity, LayoutBox> = SlotMap::with_key();
//! let root = boxes.insert(LayoutBox::new().with_direction(Direction::Row));
//! let child = boxes.insert(LayoutBox::new().with_parent(root).with_grow(1.0).with_fill_cross(true));
//!
//! let mut layout = BoxLayout::new(boxes, PixelSize::new(800, 600)).unwrap();
//! layout.layout().unwrap();
//! assert_eq!(layout.shape(child).map(|r| r.w), Some(2.0));
//! ```

mod auto_layout;
mod compute;
mod linearize;
mod scratch;
mod tree;

pub use compute::{BoxLayout, LayoutOptions};
pub use tree::{BoxSettings, BoxStorage, LayoutBox};
