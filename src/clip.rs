//! Near-plane clipping.
//!
//! A clip-space vertex is inside iff `z >= -w`. Triangles straddling the
//! near plane are subdivided into 0, 1, or 2 triangles: a single
//! clip-space coordinate tested against a range, generalized into full
//! triangle subdivision against the one plane this pipeline clips
//! against.
//!
//! Clipped triangles are returned in a capacity-2 stack buffer rather than
//! heap-allocated one at a time, avoiding a per-triangle allocation in the
//! hot clip path.

use crate::vertex::OutVertex;
use arrayvec::ArrayVec;

fn inside(v: &OutVertex) -> bool {
    v.position.z >= -v.position.w
}

/// Parameter `t` along edge `from -> to` where `z + w == 0`.
fn intersect_t(from: &OutVertex, to: &OutVertex) -> f32 {
    let from_d = -from.position.w - from.position.z;
    let to_d = to.position.w - from.position.w + to.position.z - from.position.z;
    from_d / to_d
}

fn lerp_vertex(from: &OutVertex, to: &OutVertex, t: f32) -> OutVertex {
    let position = from.position + (to.position - from.position) * t;
    let mut attributes = from.attributes;
    for i in 0..attributes.len() {
        attributes[i] = crate::attribute::Attribute::lerp(&from.attributes[i], &to.attributes[i], t);
    }
    OutVertex {
        position,
        attributes,
    }
}

/// Clip a triangle `[v0, v1, v2]` against the near plane, emitting 0, 1, or
/// 2 triangles.
pub fn clip_near(tri: [OutVertex; 3]) -> ArrayVec<[OutVertex; 3], 2> {
    let [v0, v1, v2] = tri;
    let inside_flags = [inside(&v0), inside(&v1), inside(&v2)];
    let n_inside = inside_flags.iter().filter(|i| **i).count();

    let mut out = ArrayVec::new();
    match n_inside {
        3 => {
            out.push([v0, v1, v2]);
        }
        0 => {}
        1 => {
            // Rotate so v0 is the inside vertex.
            let (i, a, b) = match inside_flags {
                [true, _, _] => (v0, v1, v2),
                [_, true, _] => (v1, v2, v0),
                _ => (v2, v0, v1),
            };
            let a_prime = lerp_vertex(&i, &a, intersect_t(&i, &a));
            let b_prime = lerp_vertex(&i, &b, intersect_t(&i, &b));
            out.push([i, a_prime, b_prime]);
        }
        2 => {
            // Rotate so v2 (slot index) is the outside vertex, i0/i1 inside.
            let (o, i0, i1) = match inside_flags {
                [false, _, _] => (v0, v1, v2),
                [_, false, _] => (v1, v2, v0),
                _ => (v2, v0, v1),
            };
            let a = lerp_vertex(&o, &i0, intersect_t(&o, &i0));
            let b = lerp_vertex(&o, &i1, intersect_t(&o, &i1));
            out.push([i0.clone(), a.clone(), b.clone()]);
            out.push([i0, b, i1]);
        }
        _ => unreachable!(),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Attribute, MAX_ATTRIBUTES};
    use crate::math::Vec4;

    fn vertex(x: f32, y: f32, z: f32, w: f32, a0: f32) -> OutVertex {
        let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
        attributes[0] = Attribute::F32(a0);
        OutVertex {
            position: Vec4::new(x, y, z, w),
            attributes,
        }
    }

    #[test]
    fn fully_inside_triangle_is_unchanged() {
        let tri = [
            vertex(-1.0, -1.0, 0.0, 1.0, 0.0),
            vertex(1.0, -1.0, 0.0, 1.0, 1.0),
            vertex(0.0, 1.0, 0.0, 1.0, 2.0),
        ];
        let out = clip_near(tri);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn fully_outside_triangle_is_culled() {
        let tri = [
            vertex(-1.0, -1.0, -2.0, 1.0, 0.0),
            vertex(1.0, -1.0, -2.0, 1.0, 1.0),
            vertex(0.0, 1.0, -2.0, 1.0, 2.0),
        ];
        let out = clip_near(tri);
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn one_outside_vertex_produces_one_triangle_on_near_plane() {
        // z/w = (-2, 0.5, 0.5) at w=1: vertex 0 is outside, 1 and 2 inside.
        let tri = [
            vertex(0.0, 0.0, -2.0, 1.0, 0.0),
            vertex(1.0, 0.0, 0.5, 1.0, 1.0),
            vertex(0.0, 1.0, 0.5, 1.0, 2.0),
        ];
        let out = clip_near(tri);
        assert_eq!(out.len(), 1);
        let [i, a, b] = &out[0];
        // `i` is the original inside vertex (v1), a and b sit on z = -w.
        assert!((i.position.z - 0.5).abs() < 1e-6);
        assert!((a.position.z + a.position.w).abs() < 1e-5);
        assert!((b.position.z + b.position.w).abs() < 1e-5);
    }

    #[test]
    fn two_outside_vertices_produce_two_triangles() {
        let tri = [
            vertex(0.0, 0.0, 0.5, 1.0, 0.0),
            vertex(1.0, 0.0, -2.0, 1.0, 1.0),
            vertex(0.0, 1.0, -2.0, 1.0, 2.0),
        ];
        let out = clip_near(tri);
        assert_eq!(out.len(), 2);
    }
}
