//! Photon Scattering Dispatch Table

use super::*;
use pmap::error::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::ray::*;
use pmap::rng::RNG;
use std::collections::HashMap;
use std::sync::Arc;

/// ScatterTable maps material types to their photon scattering routines.
/// It is populated during setup and shared read-only by the photon tracing
/// workers afterwards.
#[derive(Clone, Default)]
pub struct ScatterTable {
    /// Registered routines.
    routines: HashMap<MaterialKind, ArcPhotonScatter>,

    /// Whether the built-in routines were registered.
    initialized: bool,
}

impl ScatterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in routines. Subsequent calls do nothing. Routines
    /// registered beforehand for the same material type are kept.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        let light: ArcPhotonScatter = Arc::new(LightScatter);
        let normal: ArcPhotonScatter = Arc::new(NormalScatter);
        let aniso: ArcPhotonScatter = Arc::new(AnisoScatter);
        let dielectric: ArcPhotonScatter = Arc::new(DielectricScatter);
        let mirror: ArcPhotonScatter = Arc::new(MirrorScatter);
        let glass: ArcPhotonScatter = Arc::new(GlassScatter);
        let antimatter: ArcPhotonScatter = Arc::new(AntimatterScatter);
        let mist: ArcPhotonScatter = Arc::new(MistScatter);

        let builtins: [(MaterialKind, ArcPhotonScatter); 16] = [
            (MaterialKind::Light, Arc::clone(&light)),
            (MaterialKind::Illum, Arc::clone(&light)),
            (MaterialKind::Glow, Arc::clone(&light)),
            (MaterialKind::Spot, light),
            (MaterialKind::Plastic, Arc::clone(&normal)),
            (MaterialKind::Metal, Arc::clone(&normal)),
            (MaterialKind::Trans, normal),
            (MaterialKind::Plastic2, Arc::clone(&aniso)),
            (MaterialKind::Metal2, Arc::clone(&aniso)),
            (MaterialKind::Trans2, aniso),
            (MaterialKind::Mirror, mirror),
            (MaterialKind::Dielectric, Arc::clone(&dielectric)),
            (MaterialKind::Interface, dielectric),
            (MaterialKind::Glass, glass),
            (MaterialKind::Antimatter, antimatter),
            (MaterialKind::Mist, mist),
        ];

        for (kind, func) in builtins {
            self.routines.entry(kind).or_insert(func);
        }
        self.initialized = true;

        debug!(
            "Photon scattering table initialized with {} material types",
            self.routines.len()
        );
    }

    /// Returns true once `initialize` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Register a routine for a material type, replacing and returning any
    /// previous one.
    ///
    /// * `kind` - Material type.
    /// * `func` - Scattering routine.
    pub fn register(&mut self, kind: MaterialKind, func: ArcPhotonScatter) -> Option<ArcPhotonScatter> {
        debug!("Registering '{}' photon scattering for {}", func.name(), kind);
        self.routines.insert(kind, func)
    }

    /// Returns the routine registered for a material type.
    ///
    /// * `kind` - Material type.
    pub fn lookup(&self, kind: MaterialKind) -> Option<&ArcPhotonScatter> {
        self.routines.get(&kind)
    }

    /// Returns the number of registered material types.
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Scatter a photon with the routine registered for the material at the
    /// interaction.
    ///
    /// * `si`  - The surface interaction.
    /// * `ray` - The incoming photon ray.
    /// * `rng` - Random number generator.
    pub fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus> {
        let m = &si.material;
        let func = self
            .lookup(m.kind)
            .ok_or_else(|| PhotonMapError::UnsupportedMaterial {
                name: m.name.clone(),
                kind: m.kind,
            })?;

        let status = func.scatter(si, ray, rng)?;
        trace!(
            "{} '{}' level {}: {:?}",
            func.name(),
            m.name,
            ray.level,
            status.ray().map(|r| r.ray_type)
        );
        Ok(status)
    }
}
