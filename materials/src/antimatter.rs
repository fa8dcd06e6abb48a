//! Antimatter

use pmap::error::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::photon_map::*;
use pmap::ray::*;
use pmap::rng::RNG;
use pmap::spectrum::*;

/// Photon scattering for `antimatter`. Photons pass through unchanged; this
/// is also what makes antimatter usable as a photon sensor.
#[derive(Copy, Clone, Debug, Default)]
pub struct AntimatterScatter;

impl PhotonScatter for AntimatterScatter {
    fn scatter(&self, _si: &SurfaceInteraction, ray: &Ray, _rng: &mut RNG) -> Result<ScatterStatus> {
        Ok(ScatterStatus::Scattered(
            ray.photon_ray(ScatterType::Transfer, &Spectrum::ONE),
        ))
    }

    fn name(&self) -> &'static str {
        "antimatter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::*;

    #[test]
    fn transfers_unchanged() {
        let (si, ray) = hit_from_above(MaterialKind::Antimatter, vec![]);
        let mut rng = RNG::new(0);
        let status = AntimatterScatter.scatter(&si, &ray, &mut rng).unwrap();
        check_contract(&ray, &status);

        let child = status.ray().unwrap();
        assert_eq!(child.ray_type, RayType::TRANS);
        assert_eq!(child.flux, ray.flux);
        assert!(child.d == ray.d);
        assert!(!child.is_caustic_photon());
    }
}
