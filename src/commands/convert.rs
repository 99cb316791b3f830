//! Mesh package conversion command.
//!
//! Orchestrates the one-shot pipeline: overwrite guard, directory creation,
//! manifest registration, `model.config` template, delegated mesh
//! conversion, and post-conversion URDF patching. The steps run in order
//! with no rollback: if a later step fails, earlier side effects remain on
//! disk.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PackError;
use crate::{cli_output, config, converter, manifest, model_config, patch, paths};

/// Conversion options.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Replace an existing package directory of the same name.
    pub overwrite: bool,
    /// Verbose output (list created files).
    pub verbose: bool,
    /// Suppress informational output.
    pub quiet: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            verbose: false,
            quiet: false,
        }
    }
}

/// Conversion result.
#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub model_dir: PathBuf,
    pub manifest_updated: bool,
    pub files_created: Vec<PathBuf>,
}

/// Validate a model package name: non-empty, a single path component.
fn validate_name(name: &str) -> Result<(), PackError> {
    if name.is_empty() {
        return Err(PackError::InvalidInput("model name is empty".to_string()));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(PackError::InvalidInput(format!(
            "model name '{}' is not a valid directory name",
            name
        )));
    }
    Ok(())
}

/// Run the conversion pipeline for `name` from `source` into `models_root`.
pub fn convert_model(
    name: &str,
    source: &Path,
    models_root: &Path,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    validate_name(name)?;

    if !source.is_file() {
        return Err(PackError::NotFound(format!(
            "source scene file not found: {}",
            source.display()
        ))
        .into());
    }

    let model_dir = paths::model_dir(models_root, name);

    if model_dir.exists() && !options.overwrite {
        return Err(PackError::AlreadyExists(format!(
            "a model named '{}' already exists at {}",
            name,
            model_dir.display()
        ))
        .into());
    }

    // Pre-flight: fail before any side effects when the converter is absent.
    let converter_bin = config::converter_bin();
    if !converter::converter_available(&converter_bin) {
        return Err(PackError::CommandFailed(format!(
            "converter '{}' is not available; install it or set MODELPACK_CONVERTER",
            converter_bin
        ))
        .into());
    }

    if model_dir.exists() {
        log::debug!("removing existing model directory {:?}", model_dir);
        fs::remove_dir_all(&model_dir)
            .with_context(|| format!("removing existing {}", model_dir.display()))?;
    }

    if !options.quiet {
        cli_output::step("creating model directory");
    }
    fs::create_dir_all(&model_dir)
        .with_context(|| format!("creating {}", model_dir.display()))?;

    if !options.quiet {
        cli_output::step("registering model in manifest.xml");
    }
    let manifest_path = paths::manifest_path(models_root);
    let manifest_updated = manifest::register_model_file(&manifest_path, name)
        .with_context(|| format!("updating {}", manifest_path.display()))?;

    if !options.quiet {
        cli_output::step("writing model.config");
    }
    let config_path = model_config::write(&model_dir, name)?;

    let meshes_dir = paths::meshes_dir(&model_dir);
    fs::create_dir_all(&meshes_dir)
        .with_context(|| format!("creating {}", meshes_dir.display()))?;

    if !options.quiet {
        cli_output::step("converting mesh scene to URDF");
    }
    let urdf_path = paths::model_urdf_path(&model_dir);
    converter::run_converter(
        &converter_bin,
        source,
        &meshes_dir,
        &converter::mesh_uri_prefix(name),
        &urdf_path,
    )?;

    if !options.quiet {
        cli_output::step("patching generated description");
    }
    patch::patch_urdf_file(&urdf_path, name)?;

    Ok(ConvertResult {
        model_dir,
        manifest_updated,
        files_created: vec![config_path, urdf_path],
    })
}

/// Run the convert command: resolve the models root, convert, report.
pub fn run(
    name: &str,
    source: &Path,
    models_root: Option<PathBuf>,
    options: &ConvertOptions,
) -> Result<()> {
    let models_root = paths::resolve_models_root(models_root)?;

    if !options.quiet {
        cli_output::header("Model Package Converter");
        println!("  {} {}", "Source:".cyan(), source.display());
        println!("  {} {}", "Models root:".cyan(), models_root.display());
        println!();
    }

    let result = convert_model(name, source, &models_root, options)?;

    if !options.quiet {
        println!();
        cli_output::success(&format!(
            "model '{}' written to {}",
            name,
            result.model_dir.display()
        ));
        if !result.manifest_updated {
            cli_output::hint("manifest entry already present, left unchanged");
        }
        if options.verbose {
            for file in &result.files_created {
                cli_output::hint(&format!("created {}", file.display()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_rejects_empty() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_validate_name_rejects_path_components() {
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("c\\d").is_err());
    }

    #[test]
    fn test_validate_name_accepts_identifiers() {
        assert!(validate_name("chair_01").is_ok());
        assert!(validate_name("table-2").is_ok());
    }

    #[test]
    fn test_convert_model_missing_source_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = convert_model(
            "chair_01",
            &tmp.path().join("missing.dae"),
            tmp.path(),
            &ConvertOptions {
                quiet: true,
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_convert_model_no_overwrite_guards_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("scene.dae");
        fs::write(&source, "<COLLADA/>").unwrap();

        let existing = tmp.path().join("chair_01");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("keep.txt"), "precious").unwrap();

        let options = ConvertOptions {
            overwrite: false,
            quiet: true,
            ..Default::default()
        };
        let err = convert_model("chair_01", &source, tmp.path(), &options).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        // Guarded directory is untouched.
        let kept = fs::read_to_string(existing.join("keep.txt")).unwrap();
        assert_eq!(kept, "precious");
    }
}
