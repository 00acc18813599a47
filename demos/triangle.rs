//! Draws a single full-viewport triangle and writes it to `triangle.png`
//! via `Framebuffer::to_image` (windowing is out of scope for this crate).

use rasterpipe::attribute::{Attribute, MAX_ATTRIBUTES};
use rasterpipe::buffer::Framebuffer;
use rasterpipe::context::Context;
use rasterpipe::fragment::{InFragment, OutFragment};
use rasterpipe::math::Vec4;
use rasterpipe::uniform::Uniforms;
use rasterpipe::vertex::{AttribBinding, InVertex, OutVertex};
use rasterpipe::AttributeType;

const W: usize = 640;
const H: usize = 480;

fn vertex_shader(in_vertex: &InVertex, _uniforms: &Uniforms) -> OutVertex {
    let position = in_vertex.attributes[0].as_vec4();
    let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
    attributes[0] = Attribute::Vec2(rasterpipe::math::Vec2::new(
        position.x * 0.5 + 0.5,
        position.y * 0.5 + 0.5,
    ));
    OutVertex { position, attributes }
}

fn fragment_shader(in_fragment: &InFragment, _uniforms: &Uniforms) -> OutFragment {
    let uv = in_fragment.attributes[0].as_vec2();
    OutFragment {
        frag_color: Vec4::new(uv.x, uv.y, 0.0, 1.0),
    }
}

fn main() {
    let positions: [f32; 12] = [
        -1.0, -1.0, 0.0, 1.0, //
        1.0, -1.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 1.0,
    ];
    let bytes: Vec<u8> = positions.iter().flat_map(|f| f.to_le_bytes()).collect();

    let fb = Framebuffer::new(W, H);
    let mut ctx = Context::new(fb);
    ctx.clear(0.0, 0.0, 0.0, 1.0);

    ctx.vao.attributes[0] = AttribBinding {
        attribute_type: AttributeType::Vec4,
        data: &bytes,
        stride: 16,
        offset: 0,
    };
    ctx.program.vertex_shader = vertex_shader;
    ctx.program.fragment_shader = fragment_shader;
    ctx.program.vs2fs[0] = AttributeType::Vec2;

    ctx.draw_triangles(3);

    #[cfg(feature = "image")]
    ctx.framebuffer
        .to_image()
        .save("triangle.png")
        .expect("failed to write triangle.png");
}
