//! A software triangle rasterization pipeline: vertex pull through
//! fragment output, emulating the fixed- and programmable-function stages
//! of a GPU in plain Rust.
//!
//! The pipeline is the [`context::Context`] type: bind a vertex array, a
//! [`program::Program`] (kernel pointers + uniforms), and a
//! [`buffer::Framebuffer`], then call [`context::Context::draw_triangles`].
//! [`scene::draw_model`] is a reference client that walks a hierarchical
//! [`scene::Model`] and drives that call per mesh.

pub mod attribute;
pub mod buffer;
pub mod clip;
pub mod context;
pub mod fragment;
pub mod interpolate;
pub mod kernels;
pub mod math;
pub mod program;
pub mod rasterizer;
pub mod scene;
pub mod texture;
pub mod uniform;
pub mod vertex;

pub use attribute::{Attribute, AttributeType};
pub use buffer::Framebuffer;
pub use context::Context;
pub use fragment::{InFragment, OutFragment};
pub use program::Program;
pub use scene::{draw_model, Mesh, Model, Node};
pub use texture::Texture;
pub use uniform::{UniformValue, Uniforms};
pub use vertex::{AttribBinding, IndexBinding, IndexType, InVertex, OutVertex, VertexArrayBinding};
