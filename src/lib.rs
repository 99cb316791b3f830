//! modelpack library
//!
//! Converts an existing 3D mesh scene (COLLADA) into a simulator-ready
//! model package: a `model.config` manifest, a `meshes/` directory and a
//! patched `model.urdf` kinematic description, registered in the models
//! root's `manifest.xml`.

pub mod cli_output;
pub mod commands;
pub mod config;
pub mod converter;
pub mod error;
pub mod manifest;
pub mod model_config;
pub mod patch;
pub mod paths;
