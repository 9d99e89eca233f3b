//! Vector algebra for distance-field math
//!
//! `Vec2` and `Vec3` are glam's `Copy` value types: every operation returns a
//! new vector and nothing is mutated in place. Addition, subtraction, scalar
//! multiplication, `length`, `normalize` and `abs` come straight from glam.
//!
//! `normalize` divides by the length without a guard, so a zero vector
//! produces NaN components. Callers must never normalize a zero vector.
//!
//! The `Vec2Swizzles` trait provides `xyy`, `yxy` and `yyx`, which build a
//! `Vec3` by replicating one component of a `Vec2`. They are used to lay out
//! finite-difference offsets such as `(eps, 0, 0)` from `Vec2::new(eps, 0.0)`.

pub use glam::{Vec2, Vec2Swizzles, Vec3};

/// 3-D dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 4.0);

        assert_eq!(a + b, Vec3::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, Vec3::new(0.5, 3.0, -1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        // Operands are untouched
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn length_is_euclidean() {
        assert_relative_eq!(Vec3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_relative_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let n = Vec3::new(0.0, 3.0, -4.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.z, -0.8, epsilon = 1e-6);
    }

    #[test]
    fn normalize_zero_vector_propagates_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn abs_mirrors_into_positive_octant() {
        assert_eq!(
            Vec3::new(-1.0, 2.0, -3.0).abs(),
            Vec3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(Vec2::new(-0.5, 0.25).abs(), Vec2::new(0.5, 0.25));
    }

    #[test]
    fn swizzles_replicate_components() {
        let h = Vec2::new(0.001, 0.0);
        assert_eq!(h.xyy(), Vec3::new(0.001, 0.0, 0.0));
        assert_eq!(h.yxy(), Vec3::new(0.0, 0.001, 0.0));
        assert_eq!(h.yyx(), Vec3::new(0.0, 0.0, 0.001));
    }

    #[test]
    fn dot_matches_glam() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(4.0, 3.0, -2.0);
        assert_relative_eq!(dot(a, b), -3.0);
        assert_relative_eq!(dot(a, b), a.dot(b));
        assert_relative_eq!(dot(Vec3::X, Vec3::Y), 0.0);
    }
}
