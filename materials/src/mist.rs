//! Mist

use pmap::error::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::photon_map::*;
use pmap::ray::*;
use pmap::rng::RNG;
use pmap::spectrum::*;

/// Photon scattering for `mist` boundaries. Participating media are not
/// simulated, so photons cross the boundary unchanged. Arguments are the
/// extinction `r g b`, optionally followed by the albedo `r g b` and the
/// scattering eccentricity.
#[derive(Copy, Clone, Debug, Default)]
pub struct MistScatter;

impl PhotonScatter for MistScatter {
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, _rng: &mut RNG) -> Result<ScatterStatus> {
        si.material.checked_args(&[3, 6, 7])?;
        Ok(ScatterStatus::Scattered(
            ray.photon_ray(ScatterType::Transfer, &Spectrum::ONE),
        ))
    }

    fn name(&self) -> &'static str {
        "mist"
    }
}
