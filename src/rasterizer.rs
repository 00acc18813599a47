//! The Pineda edge-function rasterizer.
//!
//! Bounding-box scan with incremental per-edge accumulators: three linear
//! edge functions `Eᵢ(x,y) = (y - Vᵢ.y)·Δxᵢ - (x - Vᵢ.x)·Δyᵢ`, row-major
//! scan order, a pixel is covered iff all three edge functions are `>= 0`
//! at the pixel center. The bounding-box-then-scan shape (compute a
//! bounding box clamped to the target, walk it row by row, test each pixel
//! against the triangle) keeps the three edge functions as explicit
//! incremental accumulators rather than a barycentric-matrix-inverse
//! formulation, so each row/column step is a handful of additions instead
//! of a per-pixel matrix solve.

use crate::math::Vec2;

/// A window-space vertex position: pixel `x, y`, NDC `z`, and the
/// pre-divide `w` needed for perspective correction.
#[derive(Copy, Clone, Debug)]
pub struct WindowPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// A covered fragment: its pixel coordinates and the three edge-function
/// values needed to derive barycentric weights.
#[derive(Copy, Clone, Debug)]
pub struct Coverage {
    pub x: usize,
    pub y: usize,
    /// Screen-space barycentric weights, already normalized to sum to 1.
    pub l0: f32,
    pub l1: f32,
    pub l2: f32,
}

/// Rasterize a triangle's bounding box and invoke `emit` for every covered
/// pixel. `fb_width`/`fb_height` bound the viewport clamp.
pub fn rasterize_triangle(
    fb_width: usize,
    fb_height: usize,
    v0: WindowPos,
    v1: WindowPos,
    v2: WindowPos,
    mut emit: impl FnMut(Coverage),
) {
    let verts = [Vec2::new(v0.x, v0.y), Vec2::new(v1.x, v1.y), Vec2::new(v2.x, v2.y)];

    let min_x = verts.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
    let min_y = verts.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
    let max_x = verts.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);
    let max_y = verts.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);

    if fb_width == 0 || fb_height == 0 {
        return;
    }

    let x_start = (min_x.floor().max(0.0) as usize).min(fb_width - 1);
    let y_start = (min_y.floor().max(0.0) as usize).min(fb_height - 1);
    let x_end = (max_x.ceil().max(0.0) as usize).min(fb_width - 1);
    let y_end = (max_y.ceil().max(0.0) as usize).min(fb_height - 1);

    if x_start > x_end || y_start > y_end {
        return;
    }

    // Edge deltas: edge i runs from vertex i to vertex (i+1) % 3.
    let dx = [
        verts[1].x - verts[0].x,
        verts[2].x - verts[1].x,
        verts[0].x - verts[2].x,
    ];
    let dy = [
        verts[1].y - verts[0].y,
        verts[2].y - verts[1].y,
        verts[0].y - verts[2].y,
    ];

    // Total signed area (used to normalize edge functions into
    // barycentric weights); a degenerate (zero-area) triangle produces no
    // fragments.
    let area = edge_fn(verts[0], dx[0], dy[0], verts[2]);
    if area == 0.0 {
        return;
    }

    let sample0 = Vec2::new(x_start as f32 + 0.5, y_start as f32 + 0.5);
    let row_start = [
        edge_fn(verts[0], dx[0], dy[0], sample0),
        edge_fn(verts[1], dx[1], dy[1], sample0),
        edge_fn(verts[2], dx[2], dy[2], sample0),
    ];

    let mut row = row_start;
    for y in y_start..=y_end {
        let mut e = row;
        for x in x_start..=x_end {
            if e[0] >= 0.0 && e[1] >= 0.0 && e[2] >= 0.0 {
                // Edge i is opposite vertex (i+2) % 3; normalize by the
                // whole-triangle area to get barycentric weights.
                let l2 = e[0] / area;
                let l0 = e[1] / area;
                let l1 = e[2] / area;
                emit(Coverage { x, y, l0, l1, l2 });
            }
            e[0] -= dy[0];
            e[1] -= dy[1];
            e[2] -= dy[2];
        }
        row[0] += dx[0];
        row[1] += dx[1];
        row[2] += dx[2];
    }
}

#[inline]
fn edge_fn(v: Vec2<f32>, dx: f32, dy: f32, p: Vec2<f32>) -> f32 {
    (p.y - v.y) * dx - (p.x - v.x) * dy
}
