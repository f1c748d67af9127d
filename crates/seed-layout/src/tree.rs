//! Box records and the storage they are read from.
//!
//! A box knows only its parent and its previous sibling. Children and forward
//! sibling order are reconstructed by the linearizer on every layout call.

use seed_core::{Direction, Entity, Margins, PixelSize, Rect};
use slotmap::{DenseSlotMap, SlotMap};

/// Caller-supplied layout settings for one box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoxSettings {
    /// Axis along which children are arranged
    pub direction: Direction,
    /// Share of the parent's surplus main-axis length (0 = don't grow)
    pub grow: f32,
    /// Stretch to the parent's inner cross-axis length
    pub fill_cross: bool,
    /// Outer margins in pixels
    pub margins: Margins,
    /// Minimum content size in pixels
    pub min_size: PixelSize,
}

impl Default for BoxSettings {
    fn default() -> Self {
        Self {
            direction: Direction::Row,
            grow: 0.0,
            fill_cross: false,
            margins: Margins::ZERO,
            min_size: PixelSize::ZERO,
        }
    }
}

/// A node in the box tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutBox {
    /// Parent box (None for the root)
    pub parent: Option<Entity>,
    /// Previous sibling under the same parent (None for the first child)
    pub prev_sibling: Option<Entity>,
    pub settings: BoxSettings,
    /// Computed rectangle in clip coordinates, written by layout
    pub shape: Rect,
}

impl LayoutBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parent.
    pub fn with_parent(mut self, parent: Entity) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the previous sibling.
    pub fn with_prev_sibling(mut self, sibling: Entity) -> Self {
        self.prev_sibling = Some(sibling);
        self
    }

    pub fn with_settings(mut self, settings: BoxSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.settings.direction = direction;
        self
    }

    pub fn with_grow(mut self, grow: f32) -> Self {
        self.settings.grow = grow;
        self
    }

    pub fn with_fill_cross(mut self, fill_cross: bool) -> Self {
        self.settings.fill_cross = fill_cross;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.settings.margins = margins;
        self
    }

    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.settings.min_size = PixelSize::new(width, height);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Read/write access to the box records of one tree.
///
/// Enumeration order is unspecified but must be stable for the duration of
/// a layout call.
pub trait BoxStorage {
    /// Number of boxes.
    fn box_count(&self) -> usize;

    /// Every box entity, in storage order.
    fn box_entities(&self) -> impl Iterator<Item = Entity> + '_;

    fn get_box(&self, entity: Entity) -> Option<&LayoutBox>;

    fn get_box_mut(&mut self, entity: Entity) -> Option<&mut LayoutBox>;
}

impl BoxStorage for SlotMap<Entity, LayoutBox> {
    fn box_count(&self) -> usize {
        self.len()
    }

    fn box_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.keys()
    }

    fn get_box(&self, entity: Entity) -> Option<&LayoutBox> {
        self.get(entity)
    }

    fn get_box_mut(&mut self, entity: Entity) -> Option<&mut LayoutBox> {
        self.get_mut(entity)
    }
}

/// Dense storage enumerates in insertion order until a removal swaps the
/// last box into the freed place.
impl BoxStorage for DenseSlotMap<Entity, LayoutBox> {
    fn box_count(&self) -> usize {
        self.len()
    }

    fn box_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.keys()
    }

    fn get_box(&self, entity: Entity) -> Option<&LayoutBox> {
        self.get(entity)
    }

    fn get_box_mut(&mut self, entity: Entity) -> Option<&mut LayoutBox> {
        self.get_mut(entity)
    }
}
