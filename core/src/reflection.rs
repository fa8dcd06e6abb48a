//! Reflection and refraction helpers shared by the scattering routines.
//!
//! Directions follow the photon's travel: `d` points into the surface and
//! `n` is the unit normal facing the incoming photon (`n.dot(d) < 0`).

use crate::base::*;
use crate::geometry::*;
use std::mem::swap;

/// Mirror a direction about a normal.
///
/// * `d` - Incoming direction.
/// * `n` - Unit normal.
#[inline]
pub fn reflect(d: &Vector3f, n: &Normal3f) -> Vector3f {
    let n = Vector3f::from(*n);
    *d - 2.0 * d.dot(&n) * n
}

/// Bend a direction through a boundary using Snell's law. Returns `None` on
/// total internal reflection.
///
/// * `d`   - Incoming unit direction.
/// * `n`   - Unit normal facing the incoming photon.
/// * `eta` - Ratio of refractive indices, incident over transmitted.
pub fn refract(d: &Vector3f, n: &Normal3f, eta: Float) -> Option<Vector3f> {
    let cos_theta_i = -n.dot(d);
    let sin_2_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i);
    let sin_2_theta_t = eta * eta * sin_2_theta_i;

    // Handle total internal reflection for transmission.
    if sin_2_theta_t >= 1.0 {
        None
    } else {
        let cos_theta_t = (1.0 - sin_2_theta_t).sqrt();
        Some(eta * *d + (eta * cos_theta_i - cos_theta_t) * Vector3f::from(*n))
    }
}

/// Returns the fresnel reflection for dielectric materials and unpolarized light.
///
/// * `cos_theta_i` - Cosine of the angle between incident direction and
///                   normal; negative when arriving from the `eta_t` side.
/// * `eta_i`       - Index of refraction for medium that incident ray is in.
/// * `eta_t`       - Index of refraction for medium that incident ray is entering.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    // Potentially swap indices of refraction.
    let entering = cos_theta_i > 0.0;
    if !entering {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = abs(cos_theta_i);
    }

    // Compute cos_theta_t using Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Handle total internal reflection.
    if sin_theta_t >= 1.0 {
        1.0
    } else {
        let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
        let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
            / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
        let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
            / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
        (r_parl * r_parl + r_perp * r_perp) / 2.0
    }
}
