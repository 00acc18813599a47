//! The uniform environment: a fixed-size array of typed slots addressed by
//! integer index, plus a fixed-size array of texture handles.
//!
//! The pipeline never interprets slot semantics — kernels are coupled to
//! slot numbers purely by convention. The binding table for the two
//! reference kernels is documented on
//! [`crate::kernels::model_vertex_shader`] and
//! [`crate::kernels::lambert_fragment_shader`].

use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::texture::Texture;

pub const MAX_UNIFORMS: usize = 16;
pub const MAX_TEXTURES: usize = 8;

/// A single typed uniform slot.
#[derive(Copy, Clone, Debug)]
pub enum UniformValue {
    Empty,
    Float(f32),
    Vec2(Vec2<f32>),
    Vec3(Vec3<f32>),
    Vec4(Vec4<f32>),
    Mat4(Mat4<f32>),
}

impl Default for UniformValue {
    fn default() -> Self {
        UniformValue::Empty
    }
}

impl UniformValue {
    pub fn as_float(&self) -> f32 {
        match self {
            UniformValue::Float(v) => *v,
            _ => panic!("uniform slot was not written as a float"),
        }
    }

    pub fn as_vec3(&self) -> Vec3<f32> {
        match self {
            UniformValue::Vec3(v) => *v,
            _ => panic!("uniform slot was not written as a vec3"),
        }
    }

    pub fn as_vec4(&self) -> Vec4<f32> {
        match self {
            UniformValue::Vec4(v) => *v,
            _ => panic!("uniform slot was not written as a vec4"),
        }
    }

    pub fn as_mat4(&self) -> Mat4<f32> {
        match self {
            UniformValue::Mat4(v) => *v,
            _ => panic!("uniform slot was not written as a mat4"),
        }
    }
}

/// Fixed-size uniform registry bound to a [`crate::program::Program`] for
/// the duration of a draw.
#[derive(Clone)]
pub struct Uniforms {
    slots: [UniformValue; MAX_UNIFORMS],
    textures: [Option<Texture>; MAX_TEXTURES],
}

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            slots: [UniformValue::Empty; MAX_UNIFORMS],
            textures: Default::default(),
        }
    }
}

impl Uniforms {
    pub fn set(&mut self, slot: usize, value: UniformValue) {
        self.slots[slot] = value;
    }

    pub fn get(&self, slot: usize) -> &UniformValue {
        &self.slots[slot]
    }

    pub fn set_texture(&mut self, slot: usize, texture: Option<Texture>) {
        self.textures[slot] = texture;
    }

    /// Borrow the texture bound at `slot`, if any is bound (a missing
    /// texture samples as transparent black).
    pub fn texture(&self, slot: usize) -> Option<&Texture> {
        self.textures[slot].as_ref()
    }
}
