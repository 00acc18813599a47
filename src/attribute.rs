//! Tagged per-vertex / per-fragment attribute cells.
//!
//! An [`Attribute`] is a runtime tagged union (the Rust analogue of the C++
//! student skeleton's `union { float v1; vec2 v2; vec3 v3; vec4 v4; }`, see
//! `gpu.cpp`'s `in_vertex.attributes[i]`). The tag is never stored alongside
//! the value itself — it's supplied externally, once by the vertex-array
//! binding at fetch time and once by `Program::vs2fs` at interpolation
//! time. A cell must never be read as a different arity than it was
//! written with.

use crate::math::{Lerp, Vec2, Vec3, Vec4};

/// The maximum number of attribute slots a [`crate::vertex::VertexArrayBinding`]
/// or a [`crate::program::Program`] may declare.
pub const MAX_ATTRIBUTES: usize = 8;

/// The arity tag for an attribute slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AttributeType {
    #[default]
    Empty,
    F32,
    Vec2,
    Vec3,
    Vec4,
}

/// A single polymorphic attribute cell.
#[derive(Copy, Clone, Debug)]
pub enum Attribute {
    Empty,
    F32(f32),
    Vec2(Vec2<f32>),
    Vec3(Vec3<f32>),
    Vec4(Vec4<f32>),
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::Empty
    }
}

impl Attribute {
    pub fn as_f32(&self) -> f32 {
        match self {
            Attribute::F32(v) => *v,
            _ => panic!("attribute cell was not written as f32"),
        }
    }

    pub fn as_vec2(&self) -> Vec2<f32> {
        match self {
            Attribute::Vec2(v) => *v,
            _ => panic!("attribute cell was not written as vec2"),
        }
    }

    pub fn as_vec3(&self) -> Vec3<f32> {
        match self {
            Attribute::Vec3(v) => *v,
            _ => panic!("attribute cell was not written as vec3"),
        }
    }

    pub fn as_vec4(&self) -> Vec4<f32> {
        match self {
            Attribute::Vec4(v) => *v,
            _ => panic!("attribute cell was not written as vec4"),
        }
    }

    /// Linearly blend two attribute cells of matching arity by `t` (used by
    /// the near-plane clipper to introduce new clip-space vertices).
    pub fn lerp(a: &Attribute, b: &Attribute, t: f32) -> Attribute {
        match (a, b) {
            (Attribute::Empty, Attribute::Empty) => Attribute::Empty,
            (Attribute::F32(a), Attribute::F32(b)) => Attribute::F32(Lerp::lerp_unchecked(a, b, t)),
            (Attribute::Vec2(a), Attribute::Vec2(b)) => {
                Attribute::Vec2(Lerp::lerp_unchecked(a, b, t))
            }
            (Attribute::Vec3(a), Attribute::Vec3(b)) => {
                Attribute::Vec3(Lerp::lerp_unchecked(a, b, t))
            }
            (Attribute::Vec4(a), Attribute::Vec4(b)) => {
                Attribute::Vec4(Lerp::lerp_unchecked(a, b, t))
            }
            _ => panic!("lerp between attribute cells of mismatched arity"),
        }
    }

    /// Perspective-correct barycentric blend of three attribute cells of
    /// matching arity, weighted by `w0, w1, w2` (already perspective
    /// corrected — see [`crate::interpolate`]).
    pub fn blend3(a: &Attribute, b: &Attribute, c: &Attribute, w0: f32, w1: f32, w2: f32) -> Attribute {
        match (a, b, c) {
            (Attribute::Empty, Attribute::Empty, Attribute::Empty) => Attribute::Empty,
            (Attribute::F32(a), Attribute::F32(b), Attribute::F32(c)) => {
                Attribute::F32(a * w0 + b * w1 + c * w2)
            }
            (Attribute::Vec2(a), Attribute::Vec2(b), Attribute::Vec2(c)) => {
                Attribute::Vec2(*a * w0 + *b * w1 + *c * w2)
            }
            (Attribute::Vec3(a), Attribute::Vec3(b), Attribute::Vec3(c)) => {
                Attribute::Vec3(*a * w0 + *b * w1 + *c * w2)
            }
            (Attribute::Vec4(a), Attribute::Vec4(b), Attribute::Vec4(c)) => {
                Attribute::Vec4(*a * w0 + *b * w1 + *c * w2)
            }
            _ => panic!("blend between attribute cells of mismatched arity"),
        }
    }

    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Attribute::Empty => AttributeType::Empty,
            Attribute::F32(_) => AttributeType::F32,
            Attribute::Vec2(_) => AttributeType::Vec2,
            Attribute::Vec3(_) => AttributeType::Vec3,
            Attribute::Vec4(_) => AttributeType::Vec4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_vec3_is_linear() {
        let a = Attribute::Vec3(Vec3::new(0.0, 0.0, 0.0));
        let b = Attribute::Vec3(Vec3::new(2.0, 4.0, 6.0));
        let mid = Attribute::lerp(&a, &b, 0.5);
        assert_eq!(mid.as_vec3(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn mismatched_arity_panics() {
        let a = Attribute::F32(1.0);
        let b = Attribute::Vec3(Vec3::zero());
        let _ = Attribute::lerp(&a, &b, 0.5);
    }
}
