//! Draws a two-node scene (a parent cube and a child quad, offset and
//! rotated) with the reference Lambert kernels and writes the result to
//! `model.png`. Geometry is synthesized in-memory since model-file loading
//! is out of scope for this crate.

use rasterpipe::buffer::Framebuffer;
use rasterpipe::context::Context;
use rasterpipe::math::{Mat4, Vec3, Vec4};
use rasterpipe::scene::{draw_model, Mesh, Model, Node};
use rasterpipe::vertex::{AttribBinding, IndexBinding, IndexType};
use rasterpipe::AttributeType;

const W: usize = 640;
const H: usize = 480;

/// A unit quad in the XY plane, facing +Z, as interleaved position/normal
/// homogeneous f32 quadruples (no texture coordinates — diffuse color
/// only). Position carries `w=1`, normal carries `w=0`, matching
/// `model_vertex_shader`'s attribute 0/1 contract.
fn quad_buffers() -> (Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>) {
    let positions: [[f32; 4]; 4] = [
        [-0.5, -0.5, 0.0, 1.0],
        [0.5, -0.5, 0.0, 1.0],
        [0.5, 0.5, 0.0, 1.0],
        [-0.5, 0.5, 0.0, 1.0],
    ];
    let normal = [0.0f32, 0.0, 1.0, 0.0];
    let uv = [0.0f32, 0.0];
    let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];

    let position_bytes: Vec<u8> = positions.iter().flatten().flat_map(|f| f.to_le_bytes()).collect();
    let normal_bytes: Vec<u8> = (0..4).flat_map(|_| normal).flat_map(|f| f.to_le_bytes()).collect();
    let uv_bytes: Vec<u8> = (0..4).flat_map(|_| uv).flat_map(|f| f.to_le_bytes()).collect();
    let index_bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();

    (position_bytes, normal_bytes, uv_bytes, index_bytes)
}

fn main() {
    let (positions, normals, uvs, indices) = quad_buffers();

    let mesh = Mesh {
        position: AttribBinding {
            attribute_type: AttributeType::Vec4,
            data: &positions,
            stride: 16,
            offset: 0,
        },
        normal: AttribBinding {
            attribute_type: AttributeType::Vec4,
            data: &normals,
            stride: 16,
            offset: 0,
        },
        tex_coord: AttribBinding {
            attribute_type: AttributeType::Vec2,
            data: &uvs,
            stride: 8,
            offset: 0,
        },
        index: IndexBinding {
            data: &indices,
            element_type: IndexType::U16,
        },
        nof_indices: 6,
        diffuse_color: Vec4::new(0.8, 0.2, 0.2, 1.0),
        diffuse_texture: None,
        texture: None,
    };

    let model = Model {
        meshes: vec![mesh],
        roots: vec![Node {
            model_matrix: Mat4::identity(),
            mesh: Some(0),
            children: vec![Node {
                model_matrix: Mat4::translation_3d(Vec3::new(1.2, 0.0, 0.0))
                    * Mat4::rotation_y(std::f32::consts::FRAC_PI_2),
                mesh: Some(0),
                children: vec![],
            }],
        }],
    };

    let fb = Framebuffer::new(W, H);
    let mut ctx = Context::new(fb);
    ctx.clear(0.0, 0.0, 0.0, 1.0);

    let proj = Mat4::perspective_fov_lh_zo(1.0, W as f32, H as f32, 0.1, 100.0);
    let view = Mat4::translation_3d(Vec3::new(0.0, 0.0, 3.0));
    let light_pos = Vec3::new(2.0, 2.0, -2.0);
    let camera_pos = Vec3::new(0.0, 0.0, -3.0);

    draw_model(&mut ctx, &model, proj, view, light_pos, camera_pos);

    #[cfg(feature = "image")]
    ctx.framebuffer
        .to_image()
        .save("model.png")
        .expect("failed to write model.png");
}
