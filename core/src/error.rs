//! Errors

use crate::material::MaterialKind;
use thiserror::Error;

/// Internal-consistency faults raised while setting up or scattering photons.
#[derive(Error, Debug)]
pub enum PhotonMapError {
    /// No scattering routine is registered for the material type.
    #[error("no photon scattering routine for {kind} material '{name}'")]
    UnsupportedMaterial { name: String, kind: MaterialKind },

    /// A material was declared with the wrong number of real arguments.
    #[error("bad number of arguments for {kind} material '{name}': expected {expected}, found {found}")]
    InvalidArguments {
        name: String,
        kind: MaterialKind,
        expected: String,
        found: usize,
    },

    /// The scene file names a type that is not a known material.
    #[error("unknown material type '{0}'")]
    UnknownMaterialKind(String),

    /// A sensor name refers to an object that is not antimatter.
    #[error("photon sensor modifier '{0}' is not antimatter")]
    SensorNotAntimatter(String),

    /// More sensor names were given than the sensor set can hold.
    #[error("too many photon sensor modifiers: {count} (max {max})")]
    TooManySensors { count: usize, max: usize },

    /// Malformed scene description.
    #[error("{path}:{line}: {message}")]
    SceneParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the photon map crates.
pub type Result<T> = std::result::Result<T, PhotonMapError>;
