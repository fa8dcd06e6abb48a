//! Furnace Photon Walk

use materials::ScatterTable;
use pmap::base::*;
use pmap::geometry::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::photon_map::*;
use pmap::ray::*;
use pmap::rng::RNG;
use pmap::sampling::*;
use pmap::scene::ObjectId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::thread;

/// Photon counts of one furnace walk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Photons emitted.
    pub emitted: u64,

    /// Photons absorbed by the surface.
    pub absorbed: u64,

    /// Photons that escaped the sphere or hit a material that failed.
    pub lost: u64,

    /// Photons still travelling when the depth limit was reached.
    pub truncated: u64,

    /// Deposits stored in the caustic map.
    pub caustic_deposits: u64,

    /// Deposits stored in the global map.
    pub global_deposits: u64,

    /// Deposits stored in the contribution map.
    pub contrib_deposits: u64,

    /// Surface hits on sensor objects.
    pub sensor_hits: u64,
}

impl WalkStats {
    /// Returns true if every emitted photon was accounted for.
    pub fn is_conserved(&self) -> bool {
        self.absorbed + self.lost + self.truncated == self.emitted
    }
}

impl fmt::Display for WalkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "emitted {}, absorbed {}, lost {}, truncated {}, caustic deposits {}, global deposits {}, contrib deposits {}, sensor hits {}",
            self.emitted,
            self.absorbed,
            self.lost,
            self.truncated,
            self.caustic_deposits,
            self.global_deposits,
            self.contrib_deposits,
            self.sensor_hits
        )
    }
}

/// Counters shared by the walk workers.
#[derive(Default)]
struct Tally {
    absorbed: AtomicU64,
    lost: AtomicU64,
    truncated: AtomicU64,
    caustic_deposits: AtomicU64,
    global_deposits: AtomicU64,
    contrib_deposits: AtomicU64,
    sensor_hits: AtomicU64,
}

impl Tally {
    fn add(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn stats(&self, emitted: u64) -> WalkStats {
        WalkStats {
            emitted,
            absorbed: self.absorbed.load(Ordering::Relaxed),
            lost: self.lost.load(Ordering::Relaxed),
            truncated: self.truncated.load(Ordering::Relaxed),
            caustic_deposits: self.caustic_deposits.load(Ordering::Relaxed),
            global_deposits: self.global_deposits.load(Ordering::Relaxed),
            contrib_deposits: self.contrib_deposits.load(Ordering::Relaxed),
            sensor_hits: self.sensor_hits.load(Ordering::Relaxed),
        }
    }
}

/// Furnace test: photons are emitted isotropically from the centre of a
/// unit sphere surfaced with a single material and followed until they are
/// absorbed, escape or reach the depth limit.
pub struct Furnace<'a> {
    /// Scattering dispatch table.
    table: &'a ScatterTable,

    /// Active photon maps.
    config: &'a PhotonMapConfig,

    /// Sensor objects.
    sensors: &'a SensorSet,

    /// Maximum number of scattering events per photon.
    max_depth: u32,

    /// Seed for the per-photon random number sequences.
    seed: u64,

    /// Number of worker threads.
    n_threads: usize,
}

impl<'a> Furnace<'a> {
    /// Create a new `Furnace`.
    ///
    /// * `table`     - Scattering dispatch table.
    /// * `config`    - Active photon maps.
    /// * `sensors`   - Sensor objects.
    /// * `max_depth` - Maximum number of scattering events per photon.
    /// * `seed`      - Random number seed.
    /// * `n_threads` - Number of worker threads.
    pub fn new(
        table: &'a ScatterTable,
        config: &'a PhotonMapConfig,
        sensors: &'a SensorSet,
        max_depth: u32,
        seed: u64,
        n_threads: usize,
    ) -> Self {
        Self {
            table,
            config,
            sensors,
            max_depth,
            seed,
            n_threads: n_threads.max(1),
        }
    }

    /// Walk `photons` photons inside a sphere surfaced with `material`.
    ///
    /// * `object`   - Object id of the material.
    /// * `material` - Surface material.
    /// * `photons`  - Number of photons to emit.
    pub fn walk(&self, object: ObjectId, material: &ArcMaterialRecord, photons: usize) -> WalkStats {
        let tally = Tally::default();
        let failure: Mutex<Option<String>> = Mutex::new(None);

        thread::scope(|scope| {
            let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(8192);

            // Spawn worker threads.
            for _ in 0..self.n_threads {
                let rx_worker = rx_worker.clone();
                let tally = &tally;
                let failure = &failure;
                scope.spawn(move || {
                    for photon_index in rx_worker.iter() {
                        self.trace_photon(photon_index, object, material, tally, failure);
                    }
                });
            }
            drop(rx_worker); // Drop extra since we've cloned one for each worker.

            // Send work.
            for photon_index in 0..photons {
                if tx_worker.send(photon_index).is_err() {
                    break;
                }
            }
        });

        if let Ok(Some(err)) = failure.into_inner() {
            error!("'{}': {}", material.name, err);
        }

        tally.stats(photons as u64)
    }

    /// Trace a single photon and tally its fate.
    ///
    /// * `photon_index` - Index of the photon; seeds its random numbers.
    /// * `object`       - Object id of the material.
    /// * `material`     - Surface material.
    /// * `tally`        - Shared counters.
    /// * `failure`      - First scattering error.
    fn trace_photon(
        &self,
        photon_index: usize,
        object: ObjectId,
        material: &ArcMaterialRecord,
        tally: &Tally,
        failure: &Mutex<Option<String>>,
    ) {
        let mut rng = RNG::new(self.seed.wrapping_add(photon_index as u64));
        let d = uniform_sample_sphere(&sample_2d(&mut rng));
        let mut ray = Ray::new(Point3f::zero(), d);

        loop {
            if ray.level >= self.max_depth {
                Tally::add(&tally.truncated);
                return;
            }

            let t = match intersect_unit_sphere(&ray) {
                Some(t) => t,
                None => {
                    Tally::add(&tally.lost);
                    return;
                }
            };
            let ray_hit = ray.with_hit(t);
            let n = Normal3f::from(Vector3f::from(ray_hit.hit_point())).normalize();
            let si = SurfaceInteraction::new(n, object, material);

            if self.sensors.contains(object) {
                Tally::add(&tally.sensor_hits);
            }
            self.deposit(&ray_hit, material.kind, tally);

            match self.table.scatter(&si, &ray_hit, &mut rng) {
                Ok(ScatterStatus::Scattered(next)) => ray = next,
                Ok(ScatterStatus::Absorbed) => {
                    Tally::add(&tally.absorbed);
                    return;
                }
                Err(err) => {
                    if let Ok(mut first) = failure.lock() {
                        first.get_or_insert_with(|| err.to_string());
                    }
                    Tally::add(&tally.lost);
                    return;
                }
            }
        }
    }

    /// Store a photon arriving at a surface in the active maps. The global
    /// and contribution maps take every scattered photon; the caustic map
    /// also takes those spawned by a specular event. Photons leaving the
    /// source and photons arriving at surfaces without a diffuse component
    /// are not stored.
    ///
    /// * `ray`   - The photon ray at its intersection.
    /// * `kind`  - Material type of the surface.
    /// * `tally` - Shared counters.
    fn deposit(&self, ray: &Ray, kind: MaterialKind, tally: &Tally) {
        if ray.ray_type.is_primary() || !kind.stores_photons() {
            return;
        }

        if self.config.global {
            Tally::add(&tally.global_deposits);
        }
        if self.config.contrib {
            Tally::add(&tally.contrib_deposits);
        }
        if self.config.caustic && ray.is_caustic_photon() {
            Tally::add(&tally.caustic_deposits);
        }
    }
}

/// Returns the nearest intersection distance of a ray with the unit sphere
/// at the origin, ignoring hits closer than `RAY_EPSILON`.
///
/// * `ray` - The ray.
pub fn intersect_unit_sphere(ray: &Ray) -> Option<Float> {
    let o = Vector3f::from(ray.o);
    let a = ray.d.length_squared();
    let b = o.dot(&ray.d);
    let c = o.length_squared() - 1.0;

    let discrim = b * b - a * c;
    if discrim < 0.0 || a == 0.0 {
        return None;
    }

    let root = discrim.sqrt();
    [(-b - root) / a, (-b + root) / a]
        .into_iter()
        .find(|t| *t > RAY_EPSILON)
}

/// Log whether representative backward rays are already accounted for by
/// the active photon maps.
///
/// * `config` - Active photon maps.
pub fn log_classifier(config: &PhotonMapConfig) {
    let o = Point3f::zero();
    let d = Vector3f::new(0.0, 0.0, 1.0);
    let rays = [
        ("primary", Ray::new(o, d)),
        ("shadow", Ray::new(o, d).with_cumulative_type(RayType::SHADOW)),
        (
            "ambient, level 1",
            Ray::new(o, d)
                .with_cumulative_type(RayType::AMBIENT)
                .with_level(1),
        ),
        (
            "ambient, level 2",
            Ray::new(o, d)
                .with_cumulative_type(RayType::AMBIENT)
                .with_level(2),
        ),
        (
            "specular then ambient",
            Ray::new(o, d)
                .with_cumulative_type(RayType::SPECULAR | RayType::REFLECTED | RayType::AMBIENT)
                .with_level(2),
        ),
    ];

    info!("Photon maps: {:?}", config);
    for (label, ray) in rays.iter() {
        info!(
            "  {:<24} ambient {:<5} shadow {:<5} in map {}",
            label,
            amb_ray_in_pmap(config, ray),
            shadow_ray_in_pmap(config, ray),
            ray_in_pmap(config, ray)
        );
    }
}
