//! Mirror

use super::*;
use pmap::error::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::photon_map::*;
use pmap::ray::*;
use pmap::reflection::*;
use pmap::rng::RNG;

/// Photon scattering for `mirror`, modeled with perfect specular reflection.
/// Arguments are `r g b`.
#[derive(Copy, Clone, Debug, Default)]
pub struct MirrorScatter;

impl PhotonScatter for MirrorScatter {
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus> {
        let m = &si.material;
        m.checked_args(&[3])?;

        let lobes = [Lobe::new(ScatterType::SpecularReflect, m.color(0))];
        match choose_lobe(&lobes, rng) {
            Some((scatter, atten)) => {
                let d = ray.d.normalize();
                let w = reflect(&d, &si.facing_normal(&d));
                Ok(ScatterStatus::Scattered(
                    ray.photon_ray(scatter, &atten).with_direction(w),
                ))
            }
            None => Ok(ScatterStatus::Absorbed),
        }
    }

    fn name(&self) -> &'static str {
        "mirror"
    }
}
