use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use rasterpipe::attribute::{Attribute, AttributeType, MAX_ATTRIBUTES};
use rasterpipe::buffer::Framebuffer;
use rasterpipe::context::Context;
use rasterpipe::fragment::OutFragment;
use rasterpipe::math::Vec4;
use rasterpipe::vertex::{AttribBinding, InVertex, OutVertex};
use std::time::Duration;

fn flat_vertex_shader(in_vertex: &InVertex, _uniforms: &rasterpipe::uniform::Uniforms) -> OutVertex {
    let position = in_vertex.attributes[0].as_vec4();
    let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
    attributes[0] = Attribute::Vec3(position.xyz());
    OutVertex { position, attributes }
}

fn flat_fragment_shader(
    in_fragment: &rasterpipe::fragment::InFragment,
    _uniforms: &rasterpipe::uniform::Uniforms,
) -> OutFragment {
    let world = in_fragment.attributes[0].as_vec3();
    OutFragment {
        frag_color: Vec4::new(world.x * 0.5 + 0.5, world.y * 0.5 + 0.5, 0.5, 1.0),
    }
}

/// A grid of `rows * cols` screen-filling quads, each two triangles, packed
/// as plain clip-space position vec4s with no index buffer.
fn grid_vertices(rows: usize, cols: usize) -> Vec<u8> {
    let mut floats = Vec::with_capacity(rows * cols * 6 * 4);
    for row in 0..rows {
        for col in 0..cols {
            let x0 = -1.0 + 2.0 * col as f32 / cols as f32;
            let x1 = -1.0 + 2.0 * (col + 1) as f32 / cols as f32;
            let y0 = -1.0 + 2.0 * row as f32 / rows as f32;
            let y1 = -1.0 + 2.0 * (row + 1) as f32 / rows as f32;
            let quad = [
                [x0, y0, 0.0, 1.0],
                [x1, y0, 0.0, 1.0],
                [x1, y1, 0.0, 1.0],
                [x0, y0, 0.0, 1.0],
                [x1, y1, 0.0, 1.0],
                [x0, y1, 0.0, 1.0],
            ];
            for v in quad {
                floats.extend_from_slice(&v);
            }
        }
    }
    floats.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn grid_benchmark(b: &mut Bencher, &[width, height]: &[usize; 2]) {
    let rows = 16;
    let cols = 16;
    let bytes = grid_vertices(rows, cols);
    let nof_vertices = (rows * cols * 6) as u32;

    let fb = Framebuffer::new(width, height);
    let mut ctx = Context::new(fb);
    ctx.vao.attributes[0] = AttribBinding {
        attribute_type: AttributeType::Vec4,
        data: &bytes,
        stride: 16,
        offset: 0,
    };
    ctx.program.vertex_shader = flat_vertex_shader;
    ctx.program.fragment_shader = flat_fragment_shader;
    ctx.program.vs2fs[0] = AttributeType::Vec3;

    b.iter(|| {
        ctx.clear(0.0, 0.0, 0.0, 0.0);
        ctx.draw_triangles(nof_vertices);
        black_box(&ctx.framebuffer);
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "grid",
        |b, &size| grid_benchmark(b, size),
        &[[32, 32], [640, 480], [1024, 800], [1920, 1080]],
    );
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(1000));
    targets = criterion_benchmark
}

criterion_main!(benches);
