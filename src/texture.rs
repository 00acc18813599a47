//! Textures and nearest-pixel sampling.
//!
//! Grounded on `gpu.cpp`'s `read_texture` (fractional-UV wrap, per-channel
//! byte-to-float conversion), collapsed into a single function since this
//! crate only ever needs nearest-pixel lookup with `fract`-based wrap, not
//! general texture filtering.

use crate::math::{Denormalize, Vec2, Vec4};

/// A row-major byte texture. `data: None` models a missing texture, which
/// samples as fully transparent black.
#[derive(Clone)]
pub struct Texture {
    data: Option<Vec<u8>>,
    width: usize,
    height: usize,
    channels: usize,
}

impl Texture {
    /// # Panics
    /// If `channels` is not in `1..=4`, or `data` does not hold exactly
    /// `width * height * channels` bytes.
    pub fn new(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Self {
        assert!((1..=4).contains(&channels), "texture channel count must be 1..=4");
        assert_eq!(
            data.len(),
            width * height * channels,
            "texture data size does not match width * height * channels"
        );
        Self {
            data: Some(data),
            width,
            height,
            channels,
        }
    }

    /// A texture with no backing data — always samples as `(0,0,0,0)`.
    pub fn missing() -> Self {
        Self {
            data: None,
            width: 0,
            height: 0,
            channels: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `uv`, wrapping via `fract` and nearest-pixel lookup, as
    /// `gpu.cpp::read_texture` does.
    pub fn sample_nearest(&self, uv: Vec2<f32>) -> Vec4<f32> {
        let data = match &self.data {
            Some(data) => data,
            None => return Vec4::zero(),
        };

        let wrapped = Vec2::new(wrap_unit(uv.x), wrap_unit(uv.y));
        let x = wrapped.x.denormalize_to(self.width);
        let y = wrapped.y.denormalize_to(self.height);

        let base = (y * self.width + x) * self.channels;
        let mut color = Vec4::new(0.0, 0.0, 0.0, 1.0);
        for c in 0..self.channels {
            color[c] = data[base + c] as f32 / 255.0;
        }
        color
    }
}

/// `fract`, but well-defined for negative inputs (wraps into `[0, 1)`).
fn wrap_unit(x: f32) -> f32 {
    x - x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_samples_transparent_black() {
        let tex = Texture::missing();
        assert_eq!(tex.sample_nearest(Vec2::new(0.5, 0.5)), Vec4::zero());
    }

    #[test]
    fn nearest_sample_reads_expected_texel() {
        // 2x1 RGBA texture: red texel then green texel.
        let data = vec![255, 0, 0, 255, 0, 255, 0, 255];
        let tex = Texture::new(data, 2, 1, 4);
        let left = tex.sample_nearest(Vec2::new(0.25, 0.5));
        let right = tex.sample_nearest(Vec2::new(0.75, 0.5));
        assert_eq!(left, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(right, Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn uv_wraps_via_fract() {
        let data = vec![255, 0, 0, 255, 0, 255, 0, 255];
        let tex = Texture::new(data, 2, 1, 4);
        let wrapped = tex.sample_nearest(Vec2::new(1.25, 0.5));
        let base = tex.sample_nearest(Vec2::new(0.25, 0.5));
        assert_eq!(wrapped, base);
    }
}
