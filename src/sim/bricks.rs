//! Brick grid generation
//!
//! A pure function of the layout: same inputs, same bricks, same order.

use glam::Vec2;

use super::state::{Brick, Color};
use crate::consts::BRICK_ROW_POINTS;
use crate::settings::BrickLayout;

/// Left x of the grid so the whole block is horizontally centered
pub fn grid_start_x(canvas_width: f32, layout: &BrickLayout) -> f32 {
    let block_width = layout.cols as f32 * (layout.brick_width + layout.padding) - layout.padding;
    (canvas_width - block_width) / 2.0
}

/// Points for a brick in `row` (row 0 is the top, furthest from the paddle)
pub fn row_points(total_rows: u32, row: u32) -> u64 {
    u64::from(total_rows.saturating_sub(row)) * BRICK_ROW_POINTS
}

/// Build the row-major brick grid. All bricks start visible.
pub fn build_brick_grid(canvas_width: f32, layout: &BrickLayout) -> Vec<Brick> {
    let start_x = grid_start_x(canvas_width, layout);
    let step = Vec2::new(
        layout.brick_width + layout.padding,
        layout.brick_height + layout.padding,
    );
    let size = Vec2::new(layout.brick_width, layout.brick_height);

    let count = (layout.rows as usize).saturating_mul(layout.cols as usize);
    let mut bricks = Vec::with_capacity(count);
    for row in 0..layout.rows {
        let color = row_color(&layout.palette, row);
        let points = row_points(layout.rows, row);
        for col in 0..layout.cols {
            bricks.push(Brick {
                pos: Vec2::new(
                    start_x + col as f32 * step.x,
                    layout.top_offset + row as f32 * step.y,
                ),
                size,
                color,
                visible: true,
                points,
            });
        }
    }
    bricks
}

fn row_color(palette: &[Color], row: u32) -> Color {
    if palette.is_empty() {
        return Color(0xffffff);
    }
    palette[row as usize % palette.len()]
}
