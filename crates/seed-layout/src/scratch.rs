//! Per-call working state for a layout run.
//!
//! Boxes are numbered by enumeration order on entry; the linearizer's bitsets
//! are indexed by that number. Everything else is indexed by position in the
//! linear order so the two passes walk dense arrays. All of it is cleared at
//! the start of every call and the buffers are reused.

use bitvec::vec::BitVec;
use glam::Vec2;
use seed_core::{Entity, Rect};
use slotmap::SecondaryMap;

use crate::tree::{BoxSettings, BoxStorage};

/// Parent position of the root.
pub(crate) const NO_PARENT: u32 = u32::MAX;

#[derive(Debug, Default)]
pub(crate) struct Scratch {
    /// Entity to enumeration number
    pub number: SecondaryMap<Entity, u32>,
    /// Enumeration number to entity
    pub boxes: Vec<Entity>,

    // Indexed by enumeration number.
    pub visited: BitVec,
    pub placed: BitVec,
    /// Already named as a previous sibling by some box
    pub claimed: BitVec,
    /// Already has a child without a previous sibling
    pub first_child: BitVec,
    pub slot: Vec<u32>,

    /// Current upward walk, child first.
    pub run: Vec<u32>,

    // Indexed by linear position.
    pub order: Vec<Entity>,
    pub parent: Vec<u32>,
    pub settings: Vec<BoxSettings>,
    /// Sum/max of the children's outer minimum sizes
    pub content: Vec<Vec2>,
    /// Own minimum size: content clamped to `min_size`
    pub min: Vec<Vec2>,
    pub grow_total: Vec<f32>,
    /// Main-axis length left over for this box's growing children
    pub surplus: Vec<f32>,
    /// Main-axis cursor for placing the next child
    pub offset: Vec<f32>,
    pub shape: Vec<Rect>,
}

impl Scratch {
    /// Clear everything and number the boxes of `store`.
    pub fn reset<S: BoxStorage>(&mut self, store: &S) {
        self.number.clear();
        self.boxes.clear();
        for entity in store.box_entities() {
            self.number.insert(entity, self.boxes.len() as u32);
            self.boxes.push(entity);
        }

        let count = self.boxes.len();
        for bits in [
            &mut self.visited,
            &mut self.placed,
            &mut self.claimed,
            &mut self.first_child,
        ] {
            bits.clear();
            bits.resize(count, false);
        }
        self.slot.clear();
        self.slot.resize(count, NO_PARENT);
        self.run.clear();

        self.order.clear();
        self.order.reserve(count);
        self.parent.clear();
        self.parent.reserve(count);
        self.settings.clear();
        self.settings.reserve(count);

        self.content.clear();
        self.min.clear();
        self.grow_total.clear();
        self.surplus.clear();
        self.offset.clear();
        self.shape.clear();
    }

    /// Size the per-position pass tables for the linearized boxes.
    pub fn prepare_passes(&mut self) {
        let n = self.order.len();
        self.content.resize(n, Vec2::ZERO);
        self.min.resize(n, Vec2::ZERO);
        self.grow_total.resize(n, 0.0);
        self.surplus.resize(n, 0.0);
        self.offset.resize(n, 0.0);
        self.shape.resize(n, Rect::ZERO);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}
