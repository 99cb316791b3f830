//! Centralized configuration for modelpack.
//!
//! All defaults live here. Each can be overridden by environment variables,
//! enabling non-standard converter installs and relocated model roots
//! (and the stub converter used by the integration tests).

use std::path::PathBuf;

/// Default external mesh-to-URDF converter binary.
/// Override with `MODELPACK_CONVERTER` environment variable.
pub const DEFAULT_CONVERTER_BIN: &str = "collada_to_urdf";

/// Get the converter binary from env var or default.
pub fn converter_bin() -> String {
    std::env::var("MODELPACK_CONVERTER").unwrap_or_else(|_| DEFAULT_CONVERTER_BIN.to_string())
}

/// Get the models root from the `MODELPACK_MODELS_ROOT` env var, if set.
pub fn models_root_from_env() -> Option<PathBuf> {
    std::env::var_os("MODELPACK_MODELS_ROOT").map(PathBuf::from)
}

// === File Name Constants ===

/// Model registry manifest file name, kept at the models root.
pub const MANIFEST_XML: &str = "manifest.xml";

/// Package configuration file name inside each model directory.
pub const MODEL_CONFIG: &str = "model.config";

/// Kinematic description file name inside each model directory.
pub const MODEL_URDF: &str = "model.urdf";

/// Mesh output subdirectory name inside each model directory.
pub const MESHES_DIR: &str = "meshes";

// === Template Constants ===

/// Version stamped into every generated `model.config`.
pub const MODEL_VERSION: &str = "0.1.0";
