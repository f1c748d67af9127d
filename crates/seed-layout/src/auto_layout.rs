//! The two constraint passes over the linear order.
//!
//! 1. **Minimum sizes** (children before parents): each box's minimum is its
//!    children's accumulated outer size clamped to its own `min_size`. Outer
//!    sizes add up along the parent's main axis and take the maximum along
//!    its cross axis. Grow factors are summed per parent.
//! 2. **Distribution** (parents before children): each box takes its minimum
//!    main-axis length plus its grow share of the parent's surplus, is placed
//!    at the parent's running offset, and optionally stretches across.
//!
//! Distribution reads totals that are only complete once every child has been
//! measured, so it is only reachable through the [`Measured`] value returned
//! by [`measure`].

use seed_core::{Rect, Viewport};

use crate::scratch::{Scratch, NO_PARENT};

/// Scratch state whose minimum-size pass has completed.
pub(crate) struct Measured<'a> {
    scratch: &'a mut Scratch,
}

/// Run the minimum-size pass over a linearized scratch.
pub(crate) fn measure<'a>(scratch: &'a mut Scratch, viewport: &Viewport) -> Measured<'a> {
    scratch.prepare_passes();

    for pos in (0..scratch.len()).rev() {
        let settings = scratch.settings[pos];
        let parent = scratch.parent[pos];
        if parent == NO_PARENT {
            scratch.min[pos] = scratch.content[pos];
            continue;
        }

        let min = scratch.content[pos].max(viewport.to_clip(settings.min_size));
        scratch.min[pos] = min;
        let outer = min + viewport.margin_extent(settings.margins);

        let parent = parent as usize;
        let main = scratch.settings[parent].direction;
        let cross = main.cross();
        let content = scratch.content[parent];
        scratch.content[parent] = main.compose(
            main.pick(content) + main.pick(outer),
            cross.pick(content).max(cross.pick(outer)),
        );
        scratch.grow_total[parent] += settings.grow.max(0.0);
    }

    Measured { scratch }
}

impl Measured<'_> {
    /// Resolve every shape into `scratch.shape`.
    pub fn distribute(self, viewport: &Viewport) {
        let scratch = self.scratch;

        for pos in 0..scratch.len() {
            let settings = scratch.settings[pos];
            let parent = scratch.parent[pos];

            let shape = if parent == NO_PARENT {
                viewport.pad_inward(Rect::CLIP, settings.margins)
            } else {
                let parent = parent as usize;
                let main = scratch.settings[parent].direction;
                let cross = main.cross();
                let inner = viewport.pad_inward(scratch.shape[parent], settings.margins);

                let grow_total = scratch.grow_total[parent];
                // Share of the parent's surplus.
                let extra = if grow_total > 0.0 {
                    settings.grow.max(0.0) * scratch.surplus[parent] / grow_total
                } else {
                    0.0
                };

                let min = scratch.min[pos];
                let length = (main.pick(min) + extra).max(0.0);
                let breadth = if settings.fill_cross {
                    inner.extent(cross)
                } else {
                    cross.pick(min)
                };

                let mut shape = Rect::ZERO;
                shape.set_span(main, inner.origin(main) + scratch.offset[parent], length);
                shape.set_span(cross, inner.origin(cross), breadth);

                scratch.offset[parent] += length + main.pick(viewport.margin_extent(settings.margins));
                shape
            };

            let own = settings.direction;
            scratch.surplus[pos] = (shape.extent(own) - own.pick(scratch.content[pos])).max(0.0);
            scratch.offset[pos] = 0.0;
            scratch.shape[pos] = shape;
        }
    }
}
