//! Fragment-stage data: the input built per covered pixel and the output
//! the fragment kernel writes into it.

use crate::attribute::{Attribute, MAX_ATTRIBUTES};
use crate::math::Vec4;

/// Input to the fragment kernel: `gl_FragCoord` plus the interpolated
/// attribute cells.
#[derive(Clone)]
pub struct InFragment {
    /// `(x + 0.5, y + 0.5, interpolated depth, 1)`.
    pub frag_coord: Vec4<f32>,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Output of the fragment kernel.
#[derive(Clone)]
pub struct OutFragment {
    pub frag_color: Vec4<f32>,
}

impl Default for OutFragment {
    fn default() -> Self {
        Self {
            frag_color: Vec4::zero(),
        }
    }
}
