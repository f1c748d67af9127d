//! Layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seed_core::{Direction, Entity, Margins, PixelSize};
use seed_layout::{BoxLayout, LayoutBox};
use slotmap::SlotMap;

/// A root with `rows` rows of `cols` growing cells, stored leaves first.
fn grid_tree(rows: usize, cols: usize) -> SlotMap<Entity, LayoutBox> {
    let mut boxes = SlotMap::with_key();
    let cells: Vec<Entity> = (0..rows * cols)
        .map(|_| boxes.insert(LayoutBox::new().with_grow(1.0).with_min_size(4, 4)))
        .collect();
    let row_ids: Vec<Entity> = (0..rows)
        .map(|_| {
            boxes.insert(
                LayoutBox::new()
                    .with_grow(1.0)
                    .with_fill_cross(true)
                    .with_margins(Margins::uniform(2)),
            )
        })
        .collect();
    let root = boxes.insert(LayoutBox::new().with_direction(Direction::Col));

    for (r, &row) in row_ids.iter().enumerate() {
        boxes[row].parent = Some(root);
        boxes[row].prev_sibling = r.checked_sub(1).map(|prev| row_ids[prev]);
        for c in 0..cols {
            let cell = cells[r * cols + c];
            boxes[cell].parent = Some(row);
            boxes[cell].prev_sibling = c.checked_sub(1).map(|prev| cells[r * cols + prev]);
        }
    }
    boxes
}

fn deep_tree(depth: usize) -> SlotMap<Entity, LayoutBox> {
    let mut boxes = SlotMap::with_key();
    let mut parent: Option<Entity> = None;
    for _ in 0..depth {
        let mut node = LayoutBox::new().with_grow(1.0).with_fill_cross(true);
        node.parent = parent;
        parent = Some(boxes.insert(node));
    }
    boxes
}

fn layout_grid(c: &mut Criterion) {
    let mut layout = BoxLayout::new(grid_tree(100, 100), PixelSize::new(1920, 1080)).unwrap();
    c.bench_function("layout_grid_100x100", |b| {
        b.iter(|| black_box(layout.layout()))
    });
}

fn layout_deep(c: &mut Criterion) {
    let mut layout = BoxLayout::new(deep_tree(10_000), PixelSize::new(1920, 1080)).unwrap();
    c.bench_function("layout_deep_10000", |b| {
        b.iter(|| black_box(layout.layout()))
    });
}

criterion_group!(benches, layout_grid, layout_deep);
criterion_main!(benches);
