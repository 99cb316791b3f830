//! Common path utilities for the generated model package layout.
//!
//! Centralizes construction of the `<models-root>/<name>/...` tree so the
//! layout is defined in exactly one place.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use crate::config;

/// Get the default models root, `~/.gazebo/models` — the directory the
/// simulator scans for user models.
pub fn default_models_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".gazebo/models"))
        .ok_or_else(|| anyhow!("could not find home directory"))
}

/// Resolve the models root: explicit flag > `MODELPACK_MODELS_ROOT` env var
/// > `~/.gazebo/models`.
pub fn resolve_models_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let root = match flag {
        Some(path) => path,
        None => match config::models_root_from_env() {
            Some(path) => path,
            None => default_models_root()?,
        },
    };
    log::debug!("models root: {:?}", root);
    Ok(root)
}

/// Get `<models-root>/<name>` — the model package directory.
pub fn model_dir(models_root: &Path, name: &str) -> PathBuf {
    models_root.join(name)
}

/// Get `<models-root>/manifest.xml` — the model registry manifest.
pub fn manifest_path(models_root: &Path) -> PathBuf {
    models_root.join(config::MANIFEST_XML)
}

/// Get `<model-dir>/meshes` — the mesh output directory.
pub fn meshes_dir(model_dir: &Path) -> PathBuf {
    model_dir.join(config::MESHES_DIR)
}

/// Get `<model-dir>/model.config` — the package configuration file.
pub fn model_config_path(model_dir: &Path) -> PathBuf {
    model_dir.join(config::MODEL_CONFIG)
}

/// Get `<model-dir>/model.urdf` — the kinematic description file.
pub fn model_urdf_path(model_dir: &Path) -> PathBuf {
    model_dir.join(config::MODEL_URDF)
}
