//! Vertex fetch: resolve a vertex id from the draw-call invocation index,
//! then pull typed attributes out of strided byte buffers.
//!
//! Grounded on `gpu.cpp`'s `VertexAssembly` class: `compute_vertex_id`
//! switches on the index type and reads `gl_VertexID`; `read_attributes`
//! walks `vertexAttrib[]` and decodes 1/2/3/4 little-endian floats at
//! `base + stride * id + offset`. This module is the safe-Rust analogue of
//! that pointer arithmetic: buffers are borrowed `&[u8]` slices, and every
//! read is an explicit, bounds-checked little-endian decode.

use crate::attribute::{Attribute, AttributeType, MAX_ATTRIBUTES};
use crate::math::{Vec2, Vec3, Vec4};

/// The element type of an index buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexType {
    U8,
    U16,
    U32,
}

/// An index binding: a borrowed byte buffer plus its element type. Absent
/// (`VertexArrayBinding::index` is `None`) means the vertex id equals the
/// invocation index.
pub struct IndexBinding<'a> {
    pub data: &'a [u8],
    pub element_type: IndexType,
}

impl<'a> IndexBinding<'a> {
    /// Read element `k`, zero-extended to `u32`.
    fn read(&self, k: u32) -> u32 {
        let k = k as usize;
        match self.element_type {
            IndexType::U8 => self.data[k] as u32,
            IndexType::U16 => {
                let bytes = [self.data[k * 2], self.data[k * 2 + 1]];
                u16::from_le_bytes(bytes) as u32
            }
            IndexType::U32 => {
                let base = k * 4;
                let bytes = [
                    self.data[base],
                    self.data[base + 1],
                    self.data[base + 2],
                    self.data[base + 3],
                ];
                u32::from_le_bytes(bytes)
            }
        }
    }
}

/// One attribute slot of a [`VertexArrayBinding`]: a typed, strided view
/// into a borrowed byte buffer.
#[derive(Copy, Clone)]
pub struct AttribBinding<'a> {
    pub attribute_type: AttributeType,
    pub data: &'a [u8],
    /// Byte stride between consecutive vertices.
    pub stride: usize,
    /// Byte offset of the first component within a vertex.
    pub offset: usize,
}

impl<'a> AttribBinding<'a> {
    pub const EMPTY: AttribBinding<'static> = AttribBinding {
        attribute_type: AttributeType::Empty,
        data: &[],
        stride: 0,
        offset: 0,
    };

    fn read_f32(&self, byte_offset: usize) -> f32 {
        let bytes = [
            self.data[byte_offset],
            self.data[byte_offset + 1],
            self.data[byte_offset + 2],
            self.data[byte_offset + 3],
        ];
        f32::from_le_bytes(bytes)
    }

    fn fetch(&self, vertex_id: u32) -> Attribute {
        let base = self.offset + self.stride * vertex_id as usize;
        match self.attribute_type {
            AttributeType::Empty => Attribute::Empty,
            AttributeType::F32 => Attribute::F32(self.read_f32(base)),
            AttributeType::Vec2 => Attribute::Vec2(Vec2::new(
                self.read_f32(base),
                self.read_f32(base + 4),
            )),
            AttributeType::Vec3 => Attribute::Vec3(Vec3::new(
                self.read_f32(base),
                self.read_f32(base + 4),
                self.read_f32(base + 8),
            )),
            AttributeType::Vec4 => Attribute::Vec4(Vec4::new(
                self.read_f32(base),
                self.read_f32(base + 4),
                self.read_f32(base + 8),
                self.read_f32(base + 12),
            )),
        }
    }
}

/// Vertex-array binding: up to [`MAX_ATTRIBUTES`] attribute slots plus an
/// optional index binding.
pub struct VertexArrayBinding<'a> {
    pub attributes: [AttribBinding<'a>; MAX_ATTRIBUTES],
    pub index: Option<IndexBinding<'a>>,
}

impl<'a> Default for VertexArrayBinding<'a> {
    fn default() -> Self {
        Self {
            attributes: [AttribBinding::EMPTY; MAX_ATTRIBUTES],
            index: None,
        }
    }
}

/// Input to the vertex kernel: `gl_VertexID` plus the fetched attribute
/// cells.
#[derive(Clone)]
pub struct InVertex {
    pub vertex_id: u32,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Output of the vertex kernel: `gl_Position` in clip space plus the
/// vs→fs attribute cells it chooses to emit.
#[derive(Clone)]
pub struct OutVertex {
    pub position: Vec4<f32>,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

impl Default for OutVertex {
    fn default() -> Self {
        Self {
            position: Vec4::zero(),
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// Fetch the `k`-th vertex of a draw call: resolve `gl_VertexID`, then pull
/// every non-empty attribute slot. No allocation.
pub fn fetch_vertex(vao: &VertexArrayBinding, invocation: u32) -> InVertex {
    let vertex_id = match &vao.index {
        None => invocation,
        Some(index) => index.read(invocation),
    };

    let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
    for (slot, binding) in vao.attributes.iter().enumerate() {
        attributes[slot] = binding.fetch(vertex_id);
    }

    InVertex {
        vertex_id,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_without_index_binding_equals_invocation() {
        let vao = VertexArrayBinding::default();
        for k in 0..5u32 {
            assert_eq!(fetch_vertex(&vao, k).vertex_id, k);
        }
    }

    #[test]
    fn vertex_id_with_u16_index_binding() {
        let indices: [u16; 3] = [5, 2, 7];
        let bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        let vao = VertexArrayBinding {
            attributes: [AttribBinding::EMPTY; MAX_ATTRIBUTES],
            index: Some(IndexBinding {
                data: &bytes,
                element_type: IndexType::U16,
            }),
        };
        assert_eq!(fetch_vertex(&vao, 0).vertex_id, 5);
        assert_eq!(fetch_vertex(&vao, 1).vertex_id, 2);
        assert_eq!(fetch_vertex(&vao, 2).vertex_id, 7);
    }

    #[test]
    fn vec3_attribute_pull_honours_stride_and_offset() {
        // stride 16 bytes, offset 4 bytes; vertex id 3 reads floats at
        // byte offsets 4 + 3*16 = 52, 56, 60.
        let mut data = vec![0u8; 16 * 4];
        let expected = (1.5f32, -2.5f32, 3.25f32);
        data[52..56].copy_from_slice(&expected.0.to_le_bytes());
        data[56..60].copy_from_slice(&expected.1.to_le_bytes());
        data[60..64].copy_from_slice(&expected.2.to_le_bytes());

        let mut attributes = [AttribBinding::EMPTY; MAX_ATTRIBUTES];
        attributes[0] = AttribBinding {
            attribute_type: AttributeType::Vec3,
            data: &data,
            stride: 16,
            offset: 4,
        };
        let vao = VertexArrayBinding {
            attributes,
            index: None,
        };

        let v = fetch_vertex(&vao, 3);
        let value = v.attributes[0].as_vec3();
        assert_eq!(value, Vec3::new(expected.0, expected.1, expected.2));
    }
}
