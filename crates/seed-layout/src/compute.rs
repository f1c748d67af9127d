//! Layout computation over a box store.

use glam::Vec2;
use seed_core::{Entity, PixelSize, Rect, TreeError, Viewport, ViewportError};

use crate::auto_layout::measure;
use crate::linearize::linearize;
use crate::scratch::Scratch;
use crate::tree::BoxStorage;

/// Options for layout computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Initial viewport size in pixels
    pub viewport: PixelSize,
    /// Reject forked sibling chains and parents with two first children
    pub strict_siblings: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            viewport: PixelSize::new(800, 600),
            strict_siblings: true,
        }
    }
}

impl LayoutOptions {
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = PixelSize::new(width, height);
        self
    }

    pub fn with_strict_siblings(mut self, strict: bool) -> Self {
        self.strict_siblings = strict;
        self
    }
}

/// Box-layout engine bound to one box store.
///
/// Every [`layout`](Self::layout) call recomputes every box's `shape` from
/// scratch. Shapes are only valid once `layout` has returned `Ok`.
#[derive(Debug)]
pub struct BoxLayout<S> {
    store: S,
    viewport: Viewport,
    options: LayoutOptions,
    scratch: Scratch,
    laid_out: bool,
}

impl<S: BoxStorage> BoxLayout<S> {
    /// Create an engine over `store` with the given viewport size.
    pub fn new(store: S, viewport: PixelSize) -> Result<Self, ViewportError> {
        Self::with_options(store, LayoutOptions::default().with_viewport(viewport.width, viewport.height))
    }

    pub fn with_options(store: S, options: LayoutOptions) -> Result<Self, ViewportError> {
        let viewport = Viewport::new(options.viewport)?;
        Ok(Self {
            store,
            viewport,
            options,
            scratch: Scratch::default(),
            laid_out: false,
        })
    }

    /// Change the viewport size. Takes effect on the next layout call.
    pub fn set_viewport(&mut self, size: PixelSize) -> Result<(), ViewportError> {
        match Viewport::new(size) {
            Ok(viewport) => {
                self.viewport = viewport;
                self.options.viewport = size;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring viewport change");
                Err(err)
            }
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the boxes. Invalidates the last layout.
    pub fn store_mut(&mut self) -> &mut S {
        self.laid_out = false;
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Recompute the shape of every box.
    ///
    /// On error no shape is modified.
    pub fn layout(&mut self) -> Result<(), TreeError> {
        let span = tracing::debug_span!("layout", boxes = self.store.box_count());
        let _enter = span.enter();
        self.laid_out = false;

        if let Err(err) = linearize(&self.store, &mut self.scratch, self.options.strict_siblings) {
            tracing::debug!(%err, "box tree rejected");
            return Err(err);
        }
        tracing::trace!(entries = self.scratch.len(), "linearized");

        let measured = measure(&mut self.scratch, &self.viewport);
        tracing::trace!("minimum sizes measured");
        measured.distribute(&self.viewport);
        tracing::trace!("sizes distributed");

        // Linearization resolved every entity in the order.
        for (&entity, &shape) in self.scratch.order.iter().zip(&self.scratch.shape) {
            let node = self.store.get_box_mut(entity);
            debug_assert!(node.is_some(), "linearized box {entity} left the store");
            if let Some(node) = node {
                node.shape = shape;
            }
        }
        self.laid_out = true;
        Ok(())
    }

    /// Boxes in parent-before-child order from the last successful layout.
    pub fn order(&self) -> &[Entity] {
        if self.laid_out {
            &self.scratch.order
        } else {
            &[]
        }
    }

    /// Current shape of a box.
    pub fn shape(&self, entity: Entity) -> Option<Rect> {
        self.store.get_box(entity).map(|node| node.shape)
    }

    /// Topmost box containing `point` (clip coordinates).
    ///
    /// Later boxes in linear order are children or later siblings and win.
    pub fn hit_test(&self, point: Vec2) -> Option<Entity> {
        if !self.laid_out {
            return None;
        }
        self.scratch
            .order
            .iter()
            .zip(&self.scratch.shape)
            .rev()
            .find(|(_, shape)| shape.contains(point))
            .map(|(&entity, _)| entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutBox;
    use seed_core::Direction;
    use slotmap::SlotMap;

    fn split_tree() -> (SlotMap<Entity, LayoutBox>, Entity, Entity, Entity) {
        let mut store = SlotMap::with_key();
        let root = store.insert(LayoutBox::new().with_direction(Direction::Row));
        let left = store.insert(LayoutBox::new().with_parent(root).with_grow(1.0).with_fill_cross(true));
        let right = store.insert(
            LayoutBox::new()
                .with_parent(root)
                .with_prev_sibling(left)
                .with_grow(1.0)
                .with_fill_cross(true),
        );
        (store, root, left, right)
    }

    #[test]
    fn test_layout_writes_shapes() {
        let (store, root, left, right) = split_tree();
        let mut engine = BoxLayout::new(store, PixelSize::new(800, 600)).unwrap();
        engine.layout().unwrap();

        assert_eq!(engine.order(), &[root, left, right]);
        assert_eq!(engine.shape(root), Some(Rect::new(-1.0, -1.0, 2.0, 2.0)));
        assert_eq!(engine.shape(left), Some(Rect::new(-1.0, -1.0, 1.0, 2.0)));
        assert_eq!(engine.shape(right), Some(Rect::new(0.0, -1.0, 1.0, 2.0)));
    }

    #[test]
    fn test_hit_test() {
        let (store, _, left, right) = split_tree();
        let mut engine = BoxLayout::new(store, PixelSize::new(800, 600)).unwrap();
        assert_eq!(engine.hit_test(Vec2::ZERO), None);

        engine.layout().unwrap();
        assert_eq!(engine.hit_test(Vec2::new(-0.5, 0.0)), Some(left));
        assert_eq!(engine.hit_test(Vec2::new(0.5, 0.0)), Some(right));
        assert_eq!(engine.hit_test(Vec2::new(2.0, 0.0)), None);

        let pixel = engine.viewport().pixel_to_clip(Vec2::new(700.0, 100.0));
        assert_eq!(engine.hit_test(pixel), Some(right));
    }

    #[test]
    fn test_rejected_viewport_keeps_previous() {
        let (store, ..) = split_tree();
        let mut engine = BoxLayout::new(store, PixelSize::new(800, 600)).unwrap();
        assert_eq!(
            engine.set_viewport(PixelSize::new(0, 10)),
            Err(ViewportError::Empty { width: 0, height: 10 })
        );
        assert_eq!(engine.viewport().size(), PixelSize::new(800, 600));

        engine.set_viewport(PixelSize::new(1024, 768)).unwrap();
        assert_eq!(engine.options().viewport, PixelSize::new(1024, 768));
    }

    #[test]
    fn test_empty_viewport_rejected_at_init() {
        let (store, ..) = split_tree();
        assert!(BoxLayout::new(store, PixelSize::new(10, 0)).is_err());
    }

    #[test]
    fn test_store_mut_invalidates_order() {
        let (store, ..) = split_tree();
        let mut engine = BoxLayout::new(store, PixelSize::new(800, 600)).unwrap();
        engine.layout().unwrap();
        assert_eq!(engine.order().len(), 3);

        engine.store_mut();
        assert!(engine.order().is_empty());
        assert_eq!(engine.hit_test(Vec2::ZERO), None);
    }

    #[test]
    fn test_options_builder() {
        let options = LayoutOptions::default().with_viewport(320, 240).with_strict_siblings(false);
        assert_eq!(options.viewport, PixelSize::new(320, 240));
        assert!(!options.strict_siblings);
        assert!(LayoutOptions::default().strict_siblings);
    }
}
