//! Common sampling functions.

use crate::base::*;
use crate::geometry::*;
use crate::rng::RNG;

/// A 2-D sample in `[0, 1)^2`.
pub type Sample2D = [Float; 2];

/// Draw a 2-D sample from the random number generator.
///
/// * `rng` - Random number generator.
pub fn sample_2d(rng: &mut RNG) -> Sample2D {
    [rng.uniform_float(), rng.uniform_float()]
}

/// Uniformly sample a direction from a sphere.
///
/// * `u` - The random sample point.
pub fn uniform_sample_sphere(u: &Sample2D) -> Vector3f {
    let z = 1.0 - 2.0 * u[0];
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u[1];
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Uniformly sample a point on a unit disk by mapping concentric squares to
/// concentric circles.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Sample2D) -> [Float; 2] {
    // Map uniform random numbers to [-1,1]^2.
    let (ux, uy) = (2.0 * u[0] - 1.0, 2.0 * u[1] - 1.0);

    // Handle degeneracy at the origin.
    if ux == 0.0 && uy == 0.0 {
        return [0.0, 0.0];
    }

    // Apply concentric mapping to point
    let (r, theta) = if abs(ux) > abs(uy) {
        (ux, PI_OVER_FOUR * (uy / ux))
    } else {
        (uy, PI_OVER_TWO - PI_OVER_FOUR * (ux / uy))
    };

    [r * theta.cos(), r * theta.sin()]
}

/// Cosine-weighted sample of the hemisphere about `(0, 0, 1)`.
///
/// * `u` - The random sample point.
pub fn cosine_sample_hemisphere(u: &Sample2D) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d[0] * d[0] - d[1] * d[1]).sqrt();
    Vector3f::new(d[0], d[1], z)
}

/// Cosine-weighted sample of the hemisphere about an arbitrary unit normal.
///
/// * `n` - Unit normal defining the hemisphere.
/// * `u` - The random sample point.
pub fn cosine_sample_about(n: &Normal3f, u: &Sample2D) -> Vector3f {
    let nv = Vector3f::from(*n);
    let (s, t) = coordinate_system(&nv);
    let w = cosine_sample_hemisphere(u);
    (s * w.x + t * w.y + nv * w.z).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn disk_origin_is_degenerate() {
        assert_eq!(concentric_sample_disk(&[0.5, 0.5]), [0.0, 0.0]);
    }

    proptest! {
        #[test]
        fn sphere_samples_are_unit(u0 in 0.0..1.0f32, u1 in 0.0..1.0f32) {
            let w = uniform_sample_sphere(&[u0, u1]);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 0.0001));
        }

        #[test]
        fn hemisphere_samples_face_normal(
            u0 in 0.0..1.0f32,
            u1 in 0.0..1.0f32,
            nx in -1.0..1.0f32,
            ny in -1.0..1.0f32,
            nz in -1.0..1.0f32,
        ) {
            let n = Normal3f::new(nx, ny, nz);
            prop_assume!(n.length() > 0.01);
            let n = n.normalize();
            let w = cosine_sample_about(&n, &[u0, u1]);
            prop_assert!(w.dot(&n) >= -0.0001);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 0.0001));
        }
    }
}
