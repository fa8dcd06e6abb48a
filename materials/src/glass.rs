//! Glass

use super::*;
use pmap::base::*;
use pmap::error::*;
use pmap::geometry::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::photon_map::*;
use pmap::ray::*;
use pmap::reflection::*;
use pmap::rng::RNG;
use pmap::spectrum::*;

/// Refractive index of glass when none is given.
pub const DEFAULT_GLASS_IOR: Float = 1.52;

/// Photon scattering for `glass`: a thin slab with interreflection between
/// its two faces. Transmitted photons keep their direction. Arguments are
/// `r g b` (transmission) with an optional refractive index.
#[derive(Copy, Clone, Debug, Default)]
pub struct GlassScatter;

impl GlassScatter {
    /// Returns the slab reflectance and transmittance.
    ///
    /// * `transmission` - Transmission through one pass of the slab.
    /// * `ior`          - Refractive index.
    /// * `cos_theta`    - Cosine of the incident angle.
    pub fn slab(transmission: &Spectrum, ior: Float, cos_theta: Float) -> (Spectrum, Spectrum) {
        let r = fr_dielectric(cos_theta, 1.0, ior);
        let refl = transmission.map(|t| {
            let denom = max(1.0 - r * r * t * t, MACHINE_EPSILON);
            r + (1.0 - r) * (1.0 - r) * r * t * t / denom
        });
        let trans = transmission.map(|t| {
            let denom = max(1.0 - r * r * t * t, MACHINE_EPSILON);
            (1.0 - r) * (1.0 - r) * t / denom
        });
        (refl, trans)
    }
}

impl PhotonScatter for GlassScatter {
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus> {
        let m = &si.material;
        let args = m.checked_args(&[3, 4])?;
        let ior = if args.len() == 4 {
            args[3]
        } else {
            DEFAULT_GLASS_IOR
        };

        let d = ray.d.normalize();
        let n = si.facing_normal(&d);
        let (refl, trans) = Self::slab(&m.color(0), ior, -n.dot(&d));

        let lobes = [
            Lobe::new(ScatterType::SpecularReflect, refl),
            Lobe::new(ScatterType::SpecularTransmit, trans),
        ];

        let status = match choose_lobe(&lobes, rng) {
            Some((ScatterType::SpecularReflect, atten)) => ScatterStatus::Scattered(
                ray.photon_ray(ScatterType::SpecularReflect, &atten)
                    .with_direction(reflect(&d, &n)),
            ),
            Some((scatter, atten)) => ScatterStatus::Scattered(ray.photon_ray(scatter, &atten)),
            None => ScatterStatus::Absorbed,
        };
        Ok(status)
    }

    fn name(&self) -> &'static str {
        "glass"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn clear_slab_at_normal_incidence() {
        let (refl, trans) = GlassScatter::slab(&Spectrum::ONE, 1.5, 1.0);
        // Single surface reflects 4%; the lossless slab gives 2R / (1 + R).
        assert!(approx_eq!(f32, refl[0], 0.08 / 1.04, epsilon = 1e-4));
        assert!(approx_eq!(f32, refl[0] + trans[0], 1.0, epsilon = 1e-4));
    }

    #[test]
    fn transmission_keeps_direction() {
        let (si, ray) = hit_from_above(MaterialKind::Glass, vec![0.9, 0.9, 0.9]);
        let mut rng = RNG::new(6);
        let mut transmitted = 0;
        for _ in 0..100 {
            let status = GlassScatter.scatter(&si, &ray, &mut rng).unwrap();
            check_contract(&ray, &status);
            if let Some(child) = status.ray() {
                assert!(child.is_caustic_photon());
                if child.scatter_type() == Some(ScatterType::SpecularTransmit) {
                    assert!(child.d == ray.d);
                    transmitted += 1;
                } else {
                    assert!(child.d.z > 0.0);
                }
            }
        }
        assert!(transmitted > 50);
    }

    #[test]
    fn optional_index() {
        let (si, ray) = hit_from_above(MaterialKind::Glass, vec![0.9, 0.9, 0.9, 1.4]);
        let mut rng = RNG::new(0);
        assert!(GlassScatter.scatter(&si, &ray, &mut rng).is_ok());

        let (si, ray) = hit_from_above(MaterialKind::Glass, vec![0.9, 0.9]);
        assert!(GlassScatter.scatter(&si, &ray, &mut rng).is_err());
    }

    proptest! {
        #[test]
        fn slab_conserves_energy(t in 0.0..=1.0f32, ior in 1.0..2.5f32, c in 0.0..=1.0f32) {
            let (refl, trans) = GlassScatter::slab(&Spectrum::new(t), ior, c);
            prop_assert!(refl[0] >= 0.0 && trans[0] >= 0.0);
            prop_assert!(refl[0] + trans[0] <= 1.0 + 1e-4);
        }

        #[test]
        fn scattering_contract(seed in 0u64..10000, t in 0.0..=1.0f32) {
            let mut rng = RNG::new(seed);
            let (si, ray) = hit_from_below(MaterialKind::Glass, vec![t, t, 1.0]);
            check_contract(&ray, &GlassScatter.scatter(&si, &ray, &mut rng).unwrap());
        }
    }
}
