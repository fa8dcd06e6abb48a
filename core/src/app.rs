//! Application related stuff

use crate::base::Int;
use clap::Parser;

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Number of threads to use for the photon walk.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        help = "Use specified number of threads for the photon walk."
    )]
    n_threads: usize,

    /// Global photon map is active.
    #[arg(long, help = "Activate the global photon map.")]
    pub global: bool,

    /// Caustic photon map is active.
    #[arg(long, help = "Activate the caustic photon map.")]
    pub caustic: bool,

    /// Contribution photon map is active.
    #[arg(long, help = "Activate the contribution photon map.")]
    pub contrib: bool,

    /// Ambient bounce limit.
    #[arg(
        long = "ambounce",
        short = 'a',
        value_name = "NUM",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Ambient bounce limit; negative disables ambient interreflection."
    )]
    pub ambient_bounces: Int,

    /// Photon sensor modifier names.
    #[arg(
        long = "sensor",
        short = 's',
        value_name = "NAME",
        help = "Use the named antimatter modifier as a photon sensor."
    )]
    pub sensors: Vec<String>,

    /// Photons emitted per material.
    #[arg(
        long = "photons",
        short = 'n',
        value_name = "NUM",
        default_value_t = 10000,
        help = "Number of photons emitted per material."
    )]
    pub photons: usize,

    /// Maximum photon path length.
    #[arg(
        long = "maxdepth",
        short = 'd',
        value_name = "NUM",
        default_value_t = 64,
        help = "Maximum number of scattering events per photon path."
    )]
    pub max_depth: u32,

    /// Seed for the per-photon random number sequences.
    #[arg(long, value_name = "NUM", default_value_t = 0, help = "Random number seed.")]
    pub seed: u64,

    /// Scene file paths.
    #[arg(required = true, help = "Scene files")]
    pub paths: Vec<String>,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["pmap-scatter", "scene.rad"]);
        assert!(!options.global && !options.caustic && !options.contrib);
        assert_eq!(options.ambient_bounces, 0);
        assert!(options.sensors.is_empty());
        assert_eq!(options.paths, vec!["scene.rad"]);
        assert_eq!(options.threads(), 1);
    }

    #[test]
    fn repeated_sensors_and_negative_bounces() {
        let options = Options::parse_from([
            "pmap-scatter",
            "-a",
            "-1",
            "-s",
            "sensorA",
            "--sensor",
            "sensorB",
            "a.rad",
            "b.rad",
        ]);
        assert_eq!(options.ambient_bounces, -1);
        assert_eq!(options.sensors, vec!["sensorA", "sensorB"]);
        assert_eq!(options.paths.len(), 2);
    }

    #[test]
    fn zero_threads_falls_back_to_one() {
        let options = Options::parse_from(["pmap-scatter", "-t", "0", "scene.rad"]);
        assert_eq!(options.threads(), 1);
    }

    #[test]
    fn scene_path_is_required() {
        assert!(Options::try_parse_from(["pmap-scatter"]).is_err());
    }
}
