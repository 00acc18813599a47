//! The scene walker: depth-first traversal over a hierarchical model,
//! binding mesh state and a composed transform into a [`Context`] and
//! issuing one draw per mesh.
//!
//! Grounded on `drawModel.cpp`'s `drawNode`/`drawModel`: `drawNode` binds
//! uniform slots 1/2 from the composed matrix, slot 0 from `proj*view`,
//! slot 3 from the light position, sets `vs2fs[0..=2]` to vec3/vec3/vec2,
//! and calls `drawTriangles(mesh.nofIndices)`; `drawModel` recurses from
//! an identity matrix over `model.roots`. Unlike the C++ stub (which
//! passes the *parent's* matrix to every recursive call, never the
//! composed one), this walker composes `M' = M_parent * node.model_matrix`
//! and recurses with `M'`, so every descendant sees its full ancestor
//! chain of transforms.

use crate::attribute::AttributeType;
use crate::context::Context;
use crate::kernels::{lambert_fragment_shader, model_vertex_shader, slots};
use crate::math::{Mat4, Vec3, Vec4};
use crate::texture::Texture;
use crate::uniform::UniformValue;
use crate::vertex::{AttribBinding, IndexBinding};

/// A drawable mesh: vertex-array bindings, an index binding, and the
/// material the Lambert fragment kernel consumes.
pub struct Mesh<'a> {
    pub position: AttribBinding<'a>,
    pub normal: AttribBinding<'a>,
    pub tex_coord: AttribBinding<'a>,
    pub index: IndexBinding<'a>,
    pub nof_indices: u32,
    pub diffuse_color: Vec4<f32>,
    /// Slot into [`crate::uniform::Uniforms`]'s texture table, or `None`
    /// for an untextured mesh.
    pub diffuse_texture: Option<usize>,
    /// The texture resource bound at `diffuse_texture`'s slot, if any.
    /// `None` with `diffuse_texture: Some(_)` samples as transparent black
    /// (see [`Texture::missing`]).
    pub texture: Option<Texture>,
}

/// A scene-graph node: a local transform, an optional mesh index, and an
/// ordered sequence of children.
pub struct Node<'m> {
    pub model_matrix: Mat4<f32>,
    pub mesh: Option<usize>,
    pub children: Vec<Node<'m>>,
}

/// The model: the meshes the scene's nodes reference, plus the ordered
/// root nodes of the forest.
pub struct Model<'a> {
    pub meshes: Vec<Mesh<'a>>,
    pub roots: Vec<Node<'a>>,
}

/// Render `model` with the reference kernels: depth-first pre-order
/// traversal composing `M' = M_parent * node.model_matrix`, binding mesh
/// state and `M'`/`inverse(transpose(M'))` at each mesh node, and drawing
/// `mesh.nof_indices` indices. `camera_pos` is accepted but unused by the
/// reference kernels.
pub fn draw_model<'a>(
    ctx: &mut Context<'a>,
    model: &Model<'a>,
    proj: Mat4<f32>,
    view: Mat4<f32>,
    light_pos: Vec3<f32>,
    _camera_pos: Vec3<f32>,
) {
    let proj_view = proj * view;
    for root in &model.roots {
        draw_node(ctx, root, model, Mat4::identity(), proj_view, light_pos);
    }
}

fn draw_node<'a>(
    ctx: &mut Context<'a>,
    node: &Node<'a>,
    model: &Model<'a>,
    parent_matrix: Mat4<f32>,
    proj_view: Mat4<f32>,
    light_pos: Vec3<f32>,
) {
    let combined = parent_matrix * node.model_matrix;

    if let Some(mesh_index) = node.mesh {
        let mesh = &model.meshes[mesh_index];

        ctx.vao.attributes[0] = mesh.position;
        ctx.vao.attributes[1] = mesh.normal;
        ctx.vao.attributes[2] = mesh.tex_coord;
        ctx.vao.index = Some(IndexBinding {
            data: mesh.index.data,
            element_type: mesh.index.element_type,
        });

        ctx.program.vertex_shader = model_vertex_shader;
        ctx.program.fragment_shader = lambert_fragment_shader;
        ctx.program.vs2fs = [AttributeType::Empty; crate::attribute::MAX_ATTRIBUTES];
        ctx.program.vs2fs[0] = AttributeType::Vec3;
        ctx.program.vs2fs[1] = AttributeType::Vec3;
        ctx.program.vs2fs[2] = AttributeType::Vec2;

        let inv_transpose = combined.inverted().transposed();
        ctx.program.uniforms.set(slots::PROJ_VIEW, UniformValue::Mat4(proj_view));
        ctx.program.uniforms.set(slots::MODEL, UniformValue::Mat4(combined));
        ctx.program
            .uniforms
            .set(slots::MODEL_INV_TRANSPOSE, UniformValue::Mat4(inv_transpose));
        ctx.program.uniforms.set(slots::LIGHT_POS, UniformValue::Vec3(light_pos));
        ctx.program
            .uniforms
            .set(slots::DIFFUSE_COLOR, UniformValue::Vec4(mesh.diffuse_color));

        match mesh.diffuse_texture {
            Some(slot) => {
                ctx.program.uniforms.set(slots::HAS_TEXTURE, UniformValue::Float(1.0));
                debug_assert_eq!(slot, slots::DIFFUSE_TEXTURE, "only texture slot 0 is wired to the reference kernel");
                ctx.program.uniforms.set_texture(slot, mesh.texture.clone());
            }
            None => {
                ctx.program.uniforms.set(slots::HAS_TEXTURE, UniformValue::Float(0.0));
            }
        }

        ctx.draw_triangles(mesh.nof_indices);
    }

    for child in &node.children {
        draw_node(ctx, child, model, combined, proj_view, light_pos);
    }
}
