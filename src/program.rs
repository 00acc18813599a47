//! The program: kernel dispatch plus the `vs2fs` attribute-type table.
//!
//! Kernel dispatch is first-class function references — a capability
//! `(out, in, uniforms) → void` — rather than an inheritance hierarchy,
//! mirroring `gpu.cpp`'s `GPUContext::prg.vertexShader` /
//! `fragmentShader` function-pointer fields: plain function pointers in a
//! single concrete struct, so that `drawModel`'s scene walker can rebind
//! the active kernels per mesh without changing the `Context`'s type (see
//! `src/scene.rs`).

use crate::attribute::{AttributeType, MAX_ATTRIBUTES};
use crate::fragment::{InFragment, OutFragment};
use crate::uniform::Uniforms;
use crate::vertex::{InVertex, OutVertex};

pub type VertexKernel = fn(&InVertex, &Uniforms) -> OutVertex;
pub type FragmentKernel = fn(&InFragment, &Uniforms) -> OutFragment;

fn noop_vertex(_in: &InVertex, _uniforms: &Uniforms) -> OutVertex {
    OutVertex::default()
}

fn noop_fragment(_in: &InFragment, _uniforms: &Uniforms) -> OutFragment {
    OutFragment::default()
}

/// The configured vertex kernel, fragment kernel, `vs2fs` attribute-type
/// declarations, uniform environment, and bound textures.
pub struct Program {
    pub vertex_shader: VertexKernel,
    pub fragment_shader: FragmentKernel,
    /// Arity of each vs→fs attribute slot, consulted only at interpolation
    /// time — the engine does not inspect `vs2fs` at vertex-shade time.
    pub vs2fs: [AttributeType; MAX_ATTRIBUTES],
    pub uniforms: Uniforms,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            vertex_shader: noop_vertex,
            fragment_shader: noop_fragment,
            vs2fs: [AttributeType::Empty; MAX_ATTRIBUTES],
            uniforms: Uniforms::default(),
        }
    }
}
