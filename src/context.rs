//! The draw-call entry points: `clear`, `draw_triangles`. `draw_model`
//! lives in [`crate::scene`] since it's a client of this module, not part
//! of the core pipeline.
//!
//! This is the Rust analogue of `gpu.cpp`'s free functions `clear` and
//! `drawTrianglesImpl`, generalized from the student skeleton's
//! single-purpose loop into the full pipeline stage sequence: vertex
//! fetch, vertex stage, primitive assembly, near-plane clip, perspective
//! divide + viewport map, rasterize, perspective-correct interpolate,
//! fragment stage, and ROP.

use crate::attribute::{Attribute, AttributeType, MAX_ATTRIBUTES};
use crate::buffer::Framebuffer;
use crate::clip::clip_near;
use crate::fragment::InFragment;
use crate::interpolate::Barycentric;
use crate::math::Vec4;
use crate::program::Program;
use crate::rasterizer::{rasterize_triangle, WindowPos};
use crate::vertex::{fetch_vertex, InVertex, OutVertex, VertexArrayBinding};

/// Bundles a vertex-array binding, a program, and a framebuffer — the
/// three configuration groups a draw call needs.
pub struct Context<'a> {
    pub vao: VertexArrayBinding<'a>,
    pub program: Program,
    pub framebuffer: Framebuffer,
}

impl<'a> Context<'a> {
    pub fn new(framebuffer: Framebuffer) -> Self {
        Self {
            vao: VertexArrayBinding::default(),
            program: Program::default(),
            framebuffer,
        }
    }

    /// Reset depth to the cleared sentinel and color to `(r, g, b, a) *
    /// 255`.
    pub fn clear(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.framebuffer.clear(r, g, b, a);
    }

    /// Process `nof_vertices / 3` triangles out of the currently bound
    /// vertex array, shading and rasterizing each with the currently
    /// bound program. `nof_vertices` not a multiple of 3 is a caller
    /// error.
    pub fn draw_triangles(&mut self, nof_vertices: u32) {
        assert_eq!(nof_vertices % 3, 0, "nof_vertices must be a multiple of 3");

        for tri in 0..nof_vertices / 3 {
            let base = tri * 3;
            let out = [
                self.shade_vertex(base),
                self.shade_vertex(base + 1),
                self.shade_vertex(base + 2),
            ];

            for clipped in clip_near(out) {
                self.draw_clip_space_triangle(clipped);
            }
        }
    }

    fn shade_vertex(&self, invocation: u32) -> OutVertex {
        let in_vertex: InVertex = fetch_vertex(&self.vao, invocation);
        (self.program.vertex_shader)(&in_vertex, &self.program.uniforms)
    }

    fn draw_clip_space_triangle(&mut self, tri: [OutVertex; 3]) {
        let (positions, windows) = post_transform(
            &tri,
            self.framebuffer.width(),
            self.framebuffer.height(),
        );

        rasterize_triangle(
            self.framebuffer.width(),
            self.framebuffer.height(),
            windows[0],
            windows[1],
            windows[2],
            |coverage| {
                let screen = Barycentric {
                    l0: coverage.l0,
                    l1: coverage.l1,
                    l2: coverage.l2,
                };
                let z_interp = screen.interpolate_depth(windows[0].z, windows[1].z, windows[2].z);

                let old_depth = self.framebuffer.depth_at(coverage.x, coverage.y);
                if z_interp >= old_depth {
                    return;
                }

                let corrected =
                    screen.perspective_correct(positions[0].w, positions[1].w, positions[2].w);

                let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
                for slot in 0..MAX_ATTRIBUTES {
                    if self.program.vs2fs[slot] == AttributeType::Empty {
                        continue;
                    }
                    attributes[slot] = corrected.interpolate_attribute(
                        &tri[0].attributes[slot],
                        &tri[1].attributes[slot],
                        &tri[2].attributes[slot],
                    );
                }

                let in_fragment = InFragment {
                    frag_coord: Vec4::new(
                        coverage.x as f32 + 0.5,
                        coverage.y as f32 + 0.5,
                        z_interp,
                        1.0,
                    ),
                    attributes,
                };

                let out_fragment = (self.program.fragment_shader)(&in_fragment, &self.program.uniforms);
                let out_color = out_fragment.frag_color;

                if out_color.w > 0.5 {
                    self.framebuffer.set_depth_at(coverage.x, coverage.y, z_interp);
                }

                let old = self.framebuffer.color_at(coverage.x, coverage.y);
                let blended = blend(old, out_color);
                self.framebuffer.set_color_at(coverage.x, coverage.y, blended);
            },
        );
    }
}

/// Perspective divide (x, y, z by w, leaving w intact) then viewport map to
/// pixel space. Returns the pre-divide clip-space
/// positions (needed later for perspective correction) alongside the
/// window-space positions the rasterizer consumes.
fn post_transform(
    tri: &[OutVertex; 3],
    width: usize,
    height: usize,
) -> ([Vec4<f32>; 3], [WindowPos; 3]) {
    let mut positions = [Vec4::zero(); 3];
    let mut windows = [WindowPos { x: 0.0, y: 0.0, z: 0.0, w: 0.0 }; 3];

    for i in 0..3 {
        let p = tri[i].position;
        positions[i] = p;

        let ndc_x = p.x / p.w;
        let ndc_y = p.y / p.w;
        let ndc_z = p.z / p.w;

        windows[i] = WindowPos {
            x: (ndc_x * 0.5 + 0.5) * width as f32,
            y: (ndc_y * 0.5 + 0.5) * height as f32,
            z: ndc_z,
            w: p.w,
        };
    }

    (positions, windows)
}

/// Alpha blend a fragment into the framebuffer: for
/// each channel `c`, `new = clamp((frame[c]/255)*(1-a) + out[c]*a, 0, 1) *
/// 255`, truncated to `u8`.
fn blend(old: [u8; 4], out_color: Vec4<f32>) -> [u8; 4] {
    let a = out_color.w;
    let out = [out_color.x, out_color.y, out_color.z, out_color.w];
    let mut result = [0u8; 4];
    for c in 0..4 {
        let old_f = old[c] as f32 / 255.0;
        let blended = (old_f * (1.0 - a) + out[c] * a).max(0.0).min(1.0);
        result[c] = (blended * 255.0) as u8;
    }
    result
}
