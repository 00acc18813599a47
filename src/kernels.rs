//! The two reference shader kernels: a model-space vertex transform and a
//! Lambert fragment shader, ported from `drawModel.cpp`'s
//! `drawModel_vertexShader` / `_fragmentShader` stubs and the
//! uniform/attribute slot conventions `drawNode` wires up.

use crate::attribute::{Attribute, MAX_ATTRIBUTES};
use crate::fragment::{InFragment, OutFragment};
use crate::math::Vec4;
use crate::uniform::Uniforms;
use crate::vertex::{InVertex, OutVertex};

/// Uniform slot convention for [`model_vertex_shader`] and
/// [`lambert_fragment_shader`], as bound by `drawNode` in `drawModel.cpp`:
/// - 0: `proj * view` (mat4)
/// - 1: model matrix (mat4)
/// - 2: inverse-transpose of the model matrix (mat4)
/// - 3: light position in world space (vec3)
/// - 5: diffuse color (vec4)
/// - 6: has-texture flag (float, `> 0` means "use texture slot 0")
pub mod slots {
    pub const PROJ_VIEW: usize = 0;
    pub const MODEL: usize = 1;
    pub const MODEL_INV_TRANSPOSE: usize = 2;
    pub const LIGHT_POS: usize = 3;
    pub const DIFFUSE_COLOR: usize = 5;
    pub const HAS_TEXTURE: usize = 6;
    pub const DIFFUSE_TEXTURE: usize = 0;
}

/// vs→fs attribute slot convention: 0 = world position (vec3), 1 = world
/// normal (vec3), 2 = texture coordinate (vec2), matching `drawNode`'s
/// `ctx.prg.vs2fs[0..=2]` assignment.
pub mod attrs {
    pub const POSITION: usize = 0;
    pub const NORMAL: usize = 1;
    pub const UV: usize = 2;
}

/// Transforms attribute 0 (position, vec4) into world space by the model
/// matrix, attribute 1 (normal, vec4 with `w=0`) into world space by the
/// inverse-transpose model matrix, passes attribute 2 (uv) through
/// unchanged, and writes `gl_Position = (proj*view) * world_position`.
pub fn model_vertex_shader(in_vertex: &InVertex, uniforms: &Uniforms) -> OutVertex {
    let proj_view = uniforms.get(slots::PROJ_VIEW).as_mat4();
    let model = uniforms.get(slots::MODEL).as_mat4();
    let model_inv_transpose = uniforms.get(slots::MODEL_INV_TRANSPOSE).as_mat4();

    let local_position = in_vertex.attributes[attrs::POSITION].as_vec4();
    let local_normal = in_vertex.attributes[attrs::NORMAL].as_vec4();

    let world_position = model * local_position;
    let world_normal = model_inv_transpose * local_normal;

    let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
    attributes[attrs::POSITION] = Attribute::Vec3(world_position.xyz());
    attributes[attrs::NORMAL] = Attribute::Vec3(world_normal.xyz());
    attributes[attrs::UV] = in_vertex.attributes[attrs::UV];

    OutVertex {
        position: proj_view * world_position,
        attributes,
    }
}

/// Lambert diffuse shading: samples the diffuse texture (if
/// `has_texture > 0`) or falls back to the uniform diffuse color, then
/// scales by `0.2 + clamp(dot(L, N), 0, 1)` (a constant ambient term plus
/// N·L diffuse), matching `drawModel_fragmentShader`'s documented
/// behaviour.
pub fn lambert_fragment_shader(in_fragment: &InFragment, uniforms: &Uniforms) -> OutFragment {
    let light_pos = uniforms.get(slots::LIGHT_POS).as_vec3();
    let has_texture = uniforms.get(slots::HAS_TEXTURE).as_float();

    let diffuse = if has_texture > 0.0 {
        let uv = in_fragment.attributes[attrs::UV].as_vec2();
        uniforms
            .texture(slots::DIFFUSE_TEXTURE)
            .map(|tex| tex.sample_nearest(uv))
            .unwrap_or_else(Vec4::zero)
    } else {
        uniforms.get(slots::DIFFUSE_COLOR).as_vec4()
    };

    let world_position = in_fragment.attributes[attrs::POSITION].as_vec3();
    let normal = in_fragment.attributes[attrs::NORMAL].as_vec3().normalized();
    let light_dir = (light_pos - world_position).normalized();
    let diffuse_factor = light_dir.dot(normal).max(0.0).min(1.0);

    let shaded = diffuse * (0.2 + diffuse_factor);

    OutFragment {
        frag_color: Vec4::new(shaded.x, shaded.y, shaded.z, diffuse.w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Mat4, Vec3};
    use crate::uniform::UniformValue;

    #[test]
    fn model_vertex_shader_transforms_position_and_normal() {
        let mut uniforms = Uniforms::default();
        uniforms.set(slots::PROJ_VIEW, UniformValue::Mat4(Mat4::identity()));
        uniforms.set(slots::MODEL, UniformValue::Mat4(Mat4::identity()));
        uniforms.set(
            slots::MODEL_INV_TRANSPOSE,
            UniformValue::Mat4(Mat4::identity()),
        );

        let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
        attributes[attrs::POSITION] = Attribute::Vec4(Vec4::new(1.0, 2.0, 3.0, 1.0));
        attributes[attrs::NORMAL] = Attribute::Vec4(Vec4::new(0.0, 1.0, 0.0, 0.0));
        attributes[attrs::UV] = Attribute::Vec2(crate::math::Vec2::new(0.5, 0.5));

        let in_vertex = InVertex {
            vertex_id: 0,
            attributes,
        };

        let out = model_vertex_shader(&in_vertex, &uniforms);
        assert_eq!(out.attributes[attrs::POSITION].as_vec3(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(out.attributes[attrs::NORMAL].as_vec3(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(out.position, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn lambert_shader_falls_back_to_uniform_color_without_texture() {
        let mut uniforms = Uniforms::default();
        uniforms.set(slots::LIGHT_POS, UniformValue::Vec3(Vec3::new(0.0, 5.0, 0.0)));
        uniforms.set(slots::HAS_TEXTURE, UniformValue::Float(0.0));
        uniforms.set(
            slots::DIFFUSE_COLOR,
            UniformValue::Vec4(Vec4::new(1.0, 0.0, 0.0, 1.0)),
        );

        let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
        attributes[attrs::POSITION] = Attribute::Vec3(Vec3::new(0.0, 0.0, 0.0));
        attributes[attrs::NORMAL] = Attribute::Vec3(Vec3::new(0.0, 1.0, 0.0));

        let in_fragment = InFragment {
            frag_coord: Vec4::new(0.5, 0.5, 0.0, 1.0),
            attributes,
        };

        let out = lambert_fragment_shader(&in_fragment, &uniforms);
        // Light is straight up, normal is straight up: diffuse factor = 1.
        assert!((out.frag_color.x - 1.2).abs() < 1e-5);
        assert_eq!(out.frag_color.w, 1.0);
    }
}
