//! Dielectric and Interface

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

/// A homogeneous medium: transmission per unit distance and refractive index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Medium {
    /// Fraction of flux surviving one unit of distance.
    pub transmission: Spectrum,

    /// Refractive index.
    pub ior: Float,
}

impl Medium {
    /// Vacuum.
    pub const VACUUM: Medium = Medium {
        transmission: Spectrum::ONE,
        ior: 1.0,
    };

    /// Create a new `Medium`.
    ///
    /// * `transmission` - Transmission per unit distance.
    /// * `ior`          - Refractive index.
    pub fn new(transmission: Spectrum, ior: Float) -> Self {
        Self { transmission, ior }
    }
}

/// Photon scattering for `dielectric` and `interface`.
///
/// `dielectric` takes `r g b n hartmann` and bounds a medium surrounded by
/// vacuum. `interface` takes `r1 g1 b1 n1 r2 g2 b2 n2` for the media on the
/// inside and the outside of the surface normal. Photons leaving a medium
/// are attenuated by its transmission raised to the distance travelled.
#[derive(Copy, Clone, Debug, Default)]
pub struct DielectricScatter;

impl DielectricScatter {
    /// Returns the media inside and outside the surface.
    ///
    /// * `m` - The material.
    pub fn media(m: &MaterialRecord) -> Result<(Medium, Medium)> {
        match m.kind {
            MaterialKind::Interface => {
                let args = m.checked_args(&[8])?;
                Ok((
                    Medium::new(m.color(0), args[3]),
                    Medium::new(m.color(4), args[7]),
                ))
            }
            _ => {
                let args = m.checked_args(&[5])?;
                Ok((Medium::new(m.color(0), args[3]), Medium::VACUUM))
            }
        }
    }
}

impl PhotonScatter for DielectricScatter {
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus> {
        let (inside, outside) = Self::media(&si.material)?;

        let d = ray.d.normalize();
        let n = si.facing_normal(&d);
        let (from, to) = if si.is_front_face(&d) {
            (outside, inside)
        } else {
            (inside, outside)
        };

        // Absorption in the medium the photon is leaving.
        let absorb = from.transmission.pow(ray.t_max);

        let eta = from.ior / to.ior;
        let refracted = refract(&d, &n, eta);
        let r = match refracted {
            Some(_) => fr_dielectric(-n.dot(&d), from.ior, to.ior),
            None => 1.0,
        };

        let lobes = [
            Lobe::new(ScatterType::SpecularReflect, absorb * r),
            Lobe::new(ScatterType::Refract, absorb * (1.0 - r)),
        ];

        let status = match (choose_lobe(&lobes, rng), refracted) {
            (Some((ScatterType::Refract, atten)), Some(t)) => {
                ScatterStatus::Scattered(ray.photon_ray(ScatterType::Refract, &atten).with_direction(t))
            }
            (Some((_, atten)), _) => ScatterStatus::Scattered(
                ray.photon_ray(ScatterType::SpecularReflect, &atten)
                    .with_direction(reflect(&d, &n)),
            ),
            (None, _) => ScatterStatus::Absorbed,
        };
        Ok(status)
    }

    fn name(&self) -> &'static str {
        "dielectric"
    }
}
