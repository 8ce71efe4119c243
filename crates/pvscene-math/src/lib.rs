#![warn(missing_docs)]

//! Affine transform math for the pvscene converter.
//!
//! Thin wrapper around nalgebra providing the 4x4 affine transform
//! attached to scene items, plus parsing helpers for the
//! comma-separated rotation and translation attributes found in PVS
//! structure files.

use nalgebra::Matrix4;

/// Row-major identity 3x3 rotation, the default when an instance
/// carries no `orientation` attribute.
pub const IDENTITY_ROTATION: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Zero translation, the default when an instance carries no
/// `translation` attribute.
pub const ZERO_TRANSLATION: [f64; 3] = [0.0, 0.0, 0.0];

/// Parse a comma-separated float list of exactly `N` entries.
///
/// Returns `default` when `value` is absent, has the wrong number of
/// entries, or contains anything that does not parse as a float.
pub fn floats_or<const N: usize>(default: [f64; N], value: Option<&str>) -> [f64; N] {
    let Some(raw) = value else { return default };
    let mut out = [0.0; N];
    let mut parts = raw.split(',');
    for slot in out.iter_mut() {
        match parts.next().map(|p| p.trim().parse::<f64>()) {
            Some(Ok(v)) => *slot = v,
            _ => return default,
        }
    }
    if parts.next().is_some() {
        return default;
    }
    out
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Build an affine transform from a row-major 3x3 rotation and a
    /// translation divided element-wise by `translation_scale`.
    ///
    /// The rotation lands in the upper-left 3x3 block, the scaled
    /// translation in the last column, and the last row is
    /// `[0, 0, 0, 1]`.
    pub fn from_parts(rotation: &[f64; 9], translation: &[f64; 3], translation_scale: f64) -> Self {
        let mut m = Matrix4::identity();
        for r in 0..3 {
            for c in 0..3 {
                m[(r, c)] = rotation[r * 3 + c];
            }
            m[(r, 3)] = translation[r] / translation_scale;
        }
        Self { matrix: m }
    }

    /// Build a transform from a row-major 16-element array.
    pub fn from_row_major(values: &[f64; 16]) -> Self {
        let mut m = Matrix4::identity();
        for r in 0..4 {
            for c in 0..4 {
                m[(r, c)] = values[r * 4 + c];
            }
        }
        Self { matrix: m }
    }

    /// Compose: `self` then `other` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Exact equality against the identity matrix, no tolerance.
    ///
    /// Used to decide whether a scene item's transform can be
    /// omitted, so a false negative only costs an explicit identity
    /// in the output, never correctness.
    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix4::identity()
    }

    /// Flatten to the row-major 16-element representation used in
    /// scene-item output.
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = self.matrix[(r, c)];
            }
        }
        out
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_floats_or_parses_csv() {
        assert_eq!(
            floats_or(ZERO_TRANSLATION, Some("1.5, -2,3e2")),
            [1.5, -2.0, 300.0]
        );
    }

    #[test]
    fn test_floats_or_falls_back() {
        // Absent value.
        assert_eq!(floats_or(IDENTITY_ROTATION, None), IDENTITY_ROTATION);
        // Garbage entry.
        assert_eq!(floats_or(ZERO_TRANSLATION, Some("1,x,3")), ZERO_TRANSLATION);
        // Too few entries.
        assert_eq!(floats_or(ZERO_TRANSLATION, Some("1,2")), ZERO_TRANSLATION);
        // Too many entries.
        assert_eq!(
            floats_or(ZERO_TRANSLATION, Some("1,2,3,4")),
            ZERO_TRANSLATION
        );
    }

    #[test]
    fn test_from_parts_layout() {
        let rotation = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let translation = [1000.0, 2000.0, 3000.0];
        let t = Transform::from_parts(&rotation, &translation, 1000.0);
        assert_eq!(
            t.to_row_major(),
            [
                1.0, 2.0, 3.0, 1.0, //
                4.0, 5.0, 6.0, 2.0, //
                7.0, 8.0, 9.0, 3.0, //
                0.0, 0.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn test_default_parts_give_identity() {
        let t = Transform::from_parts(&IDENTITY_ROTATION, &ZERO_TRANSLATION, 1000.0);
        assert!(t.is_identity());
    }

    #[test]
    fn test_is_identity_is_exact() {
        let mut nearly = Transform::identity();
        nearly.matrix[(0, 0)] = 1.0 + 1e-12;
        assert!(!nearly.is_identity());
    }

    #[test]
    fn test_then_composes_translations() {
        let a = Transform::from_parts(&IDENTITY_ROTATION, &[1000.0, 0.0, 0.0], 1000.0);
        let b = Transform::from_parts(&IDENTITY_ROTATION, &[0.0, 2000.0, 0.0], 1000.0);
        let c = a.then(&b);
        let m = c.to_row_major();
        assert_eq!(m[3], 1.0);
        assert_eq!(m[7], 2.0);
        assert_eq!(m[11], 0.0);
    }

    #[test]
    fn test_row_major_round_trip() {
        let values = [
            0.0, 1.0, 0.0, 0.5, //
            -1.0, 0.0, 0.0, 0.25, //
            0.0, 0.0, 1.0, -0.75, //
            0.0, 0.0, 0.0, 1.0,
        ];
        let t = Transform::from_row_major(&values);
        assert_eq!(t.to_row_major(), values);
    }

    fn approx_eq(a: &[f64; 16], b: &[f64; 16]) -> bool {
        a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() <= 1e-6 * (1.0 + x.abs().max(y.abs())))
    }

    proptest! {
        #[test]
        fn composition_is_associative(
            a in proptest::array::uniform16(-100.0f64..100.0),
            b in proptest::array::uniform16(-100.0f64..100.0),
            c in proptest::array::uniform16(-100.0f64..100.0),
        ) {
            let (ta, tb, tc) = (
                Transform::from_row_major(&a),
                Transform::from_row_major(&b),
                Transform::from_row_major(&c),
            );
            let left = ta.then(&tb).then(&tc).to_row_major();
            let right = ta.then(&tb.then(&tc)).to_row_major();
            prop_assert!(approx_eq(&left, &right));
        }
    }
}
