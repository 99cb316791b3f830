//! `model.config` generation.
//!
//! Every generated package carries a fixed-template configuration document:
//! the model name, a static version and a pointer at the kinematic
//! description file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::PackResult;
use crate::paths;

/// Render the package configuration document for `name`.
pub fn render(name: &str) -> String {
    format!(
        r"<?xml version='1.0'?>
<model>
  <name>{name}</name>
  <version>{version}</version>
  <sdf>{sdf}</sdf>
  <description>
     This model was automatically generated by converting an existing mesh scene.
  </description>
</model>
",
        name = name,
        version = config::MODEL_VERSION,
        sdf = config::MODEL_URDF,
    )
}

/// Write `model.config` into the model directory, returning its path.
pub fn write(model_dir: &Path, name: &str) -> PackResult<PathBuf> {
    let path = paths::model_config_path(model_dir);
    fs::write(&path, render(name))?;
    Ok(path)
}
