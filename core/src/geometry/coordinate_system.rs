//! 3-D Coordinate System

use super::Vector3;
use crate::base::abs;
use num_traits::Float;

/// Create an orthonormal basis around a single unit vector and return the
/// two new vectors.
///
/// A second vector is constructed from the first by zeroing one of the
/// coordinates, swapping the remaining two and negating one of them. The
/// third vector is the cross product of the first two.
///
/// * `v1` - The first unit vector to form part of the coordinate system.
pub fn coordinate_system<T: Float>(v1: &Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3::new(-v1.z, T::zero(), v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3::new(T::zero(), v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };

    let v3 = v1.cross(&v2);

    (v2, v3)
}

#[cfg(test)]
mod tests {
    use super::super::Dot;
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    prop_vector3!(
        vector3_f32,
        f32,
        -1.0..1.0f32,
        -1.0..1.0f32,
        -1.0..1.0f32
    );

    proptest! {
        #[test]
        fn basis_is_orthonormal(v in vector3_f32()) {
            prop_assume!(v.length() > 0.01);
            let v1 = v.normalize();
            let (v2, v3) = coordinate_system(&v1);
            prop_assert!(approx_eq!(f32, v1.dot(&v2), 0.0, epsilon = 0.0001));
            prop_assert!(approx_eq!(f32, v1.dot(&v3), 0.0, epsilon = 0.0001));
            prop_assert!(approx_eq!(f32, v2.dot(&v3), 0.0, epsilon = 0.0001));
            prop_assert!(approx_eq!(f32, v2.length(), 1.0, epsilon = 0.0001));
            prop_assert!(approx_eq!(f32, v3.length(), 1.0, epsilon = 0.0001));
        }
    }
}
