//! Light Sources

use pmap::error::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::ray::*;
use pmap::rng::RNG;

/// Photon scattering for light emitting materials (`light`, `illum`, `glow`
/// and `spot`). Photons hitting a light source are absorbed.
#[derive(Copy, Clone, Debug, Default)]
pub struct LightScatter;

impl PhotonScatter for LightScatter {
    fn scatter(&self, _si: &SurfaceInteraction, _ray: &Ray, _rng: &mut RNG) -> Result<ScatterStatus> {
        Ok(ScatterStatus::Absorbed)
    }

    fn name(&self) -> &'static str {
        "light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::*;

    #[test]
    fn always_absorbs() {
        let mut rng = RNG::new(0);
        for kind in [
            MaterialKind::Light,
            MaterialKind::Illum,
            MaterialKind::Glow,
            MaterialKind::Spot,
        ] {
            let (si, ray) = hit_from_above(kind, vec![100.0, 100.0, 100.0]);
            for _ in 0..10 {
                let status = LightScatter.scatter(&si, &ray, &mut rng).unwrap();
                assert!(status.ray().is_none());
            }
        }
    }
}
