//! Perspective-correct barycentric interpolation.
//!
//! Generalizes a plain barycentric blend of three fixed vector types by
//! weight into perspective-correct interpolation: weights must first be
//! divided by `w` and renormalized before being used to blend `vs2fs`
//! attributes, while `gl_FragCoord.z` uses the *uncorrected* weights.

use crate::attribute::Attribute;

/// Screen-space barycentric weights (`λ0, λ1, λ2`), opposite vertices 0, 1,
/// and 2 respectively.
#[derive(Copy, Clone, Debug)]
pub struct Barycentric {
    pub l0: f32,
    pub l1: f32,
    pub l2: f32,
}

impl Barycentric {
    /// Divide each weight by its vertex's pre-divide `w` and renormalize,
    /// `s = Σ λᵢ/wᵢ`, `λᵢ ← (λᵢ/wᵢ)/s`.
    pub fn perspective_correct(self, w0: f32, w1: f32, w2: f32) -> Barycentric {
        let (a, b, c) = (self.l0 / w0, self.l1 / w1, self.l2 / w2);
        let s = a + b + c;
        Barycentric {
            l0: a / s,
            l1: b / s,
            l2: c / s,
        }
    }

    /// Interpolated window-space depth, using the *uncorrected* weights on
    /// the already-divided `z`.
    pub fn interpolate_depth(self, z0: f32, z1: f32, z2: f32) -> f32 {
        self.l0 * z0 + self.l1 * z1 + self.l2 * z2
    }

    /// Perspective-correct blend of three vs→fs attribute cells.
    pub fn interpolate_attribute(self, a: &Attribute, b: &Attribute, c: &Attribute) -> Attribute {
        Attribute::blend3(a, b, c, self.l0, self.l1, self.l2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perspective_correct_matches_closed_form() {
        // Triangle (-1,-1,0,1), (1,-1,0,1), (0,1,0,2) with attribute
        // (0,0,1) at the respective vertices.
        let (w0, w1, w2) = (1.0, 1.0, 2.0);

        let screen = Barycentric {
            l0: 0.2,
            l1: 0.3,
            l2: 0.5,
        };
        let corrected = screen.perspective_correct(w0, w1, w2);

        let expected_s = 0.2 / w0 + 0.3 / w1 + 0.5 / w2;
        let expected_l2 = (0.5 / w2) / expected_s;
        assert_relative_eq!(corrected.l2, expected_l2, epsilon = 1e-6);

        let attr0 = Attribute::F32(0.0);
        let attr1 = Attribute::F32(0.0);
        let attr2 = Attribute::F32(1.0);
        let value = corrected
            .interpolate_attribute(&attr0, &attr1, &attr2)
            .as_f32();
        assert_relative_eq!(value, expected_l2, epsilon = 1e-4);
    }
}
