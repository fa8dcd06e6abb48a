//! Plastic, Metal and Trans

use super::*;
use pmap::error::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::ray::*;
use pmap::rng::RNG;

/// Photon scattering for isotropic `plastic`, `metal` and `trans`.
///
/// Arguments are `r g b spec rough` and, for `trans`, additionally
/// `trans tspec`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NormalScatter;

impl NormalScatter {
    /// Split the material into scattering events.
    ///
    /// * `m` - The material.
    pub fn lobes(m: &MaterialRecord) -> Result<SurfaceLobes> {
        let (args, trans, tspec) = match m.kind {
            MaterialKind::Trans => {
                let args = m.checked_args(&[7])?;
                (args, args[5], args[6])
            }
            _ => (m.checked_args(&[5])?, 0.0, 0.0),
        };

        let rough = args[4];
        Ok(SurfaceLobes::new(
            m.kind,
            m.color(0),
            args[3],
            trans,
            tspec,
            (rough, rough),
            None,
        ))
    }
}

impl PhotonScatter for NormalScatter {
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus> {
        let lobes = Self::lobes(&si.material)?;
        Ok(lobes.scatter(si, ray, rng))
    }

    fn name(&self) -> &'static str {
        "normal"
    }
}
