#[macro_use]
extern crate log;

mod scene_file;
mod walk;

use clap::Parser;
use materials::ScatterTable;
use pmap::app::*;
use pmap::error::*;
use pmap::photon_map::*;
use scene_file::read_scene;
use walk::*;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    let config = PhotonMapConfig::from(&options);

    // Register the photon scattering routines before any worker starts.
    let mut table = ScatterTable::new();
    table.initialize();

    log_classifier(&config);

    // Process scene descriptions.
    for path in options.paths.iter() {
        // In case of error report it and continue.
        if let Err(e) = run(path, &options, &config, &table) {
            error!("{e}");
        }
    }
}

/// Run the furnace walk for every material of a scene file.
///
/// * `path`    - Scene file path.
/// * `options` - Command line options.
/// * `config`  - Active photon maps.
/// * `table`   - Scattering dispatch table.
fn run(path: &str, options: &Options, config: &PhotonMapConfig, table: &ScatterTable) -> Result<()> {
    let registry = read_scene(path)?;
    let sensors = locate_sensors(&registry, &options.sensors)?;
    info!(
        "{}: {} objects, {} photon sensors",
        path,
        registry.len(),
        sensors.len()
    );

    if !config.is_active() {
        warn!("No photon map is active; deposits will not be stored");
    }

    let furnace = Furnace::new(
        table,
        config,
        &sensors,
        options.max_depth,
        options.seed,
        options.threads(),
    );

    for object in registry.objects() {
        let material = match registry.material(object.id) {
            Some(material) => material,
            None => continue,
        };

        if table.lookup(material.kind).is_none() {
            error!(
                "{}",
                PhotonMapError::UnsupportedMaterial {
                    name: material.name.clone(),
                    kind: material.kind,
                }
            );
            continue;
        }

        let stats = furnace.walk(object.id, material, options.photons);
        info!("{} '{}': {}", material.kind, material.name, stats);
        if !stats.is_conserved() {
            error!("{} '{}': photon count mismatch", material.kind, material.name);
        }
    }

    Ok(())
}
