//! External mesh-to-URDF converter invocation.
//!
//! The actual mesh and kinematics work is delegated to an external
//! command-line converter (by default `collada_to_urdf`). Its flag surface
//! is a collaborator contract, not owned by this tool.

use std::path::Path;
use std::process::Command;

use crate::error::{PackError, PackResult};

/// Mesh URI prefix embedded into the generated description, so the
/// simulator resolves meshes relative to the installed model package.
pub fn mesh_uri_prefix(name: &str) -> String {
    format!("model://{}/meshes", name)
}

/// Run a specific converter binary over `source`, writing meshes into
/// `meshes_dir` and the kinematic description to `urdf_path`.
pub fn run_converter(
    bin: &str,
    source: &Path,
    meshes_dir: &Path,
    mesh_prefix: &str,
    urdf_path: &Path,
) -> PackResult<()> {
    log::debug!("invoking converter: {} {:?}", bin, source);
    let output = Command::new(bin)
        .arg(source)
        .args(["-G", "-A"])
        .arg("--mesh_output_dir")
        .arg(meshes_dir)
        .arg("--mesh_prefix")
        .arg(mesh_prefix)
        .arg("-O")
        .arg(urdf_path)
        .output()
        .map_err(|e| PackError::CommandFailed(format!("could not launch '{}': {}", bin, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PackError::CommandFailed(format!(
            "'{}' exited with {}: {}",
            bin,
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Detect whether a converter binary can be launched at all.
///
/// Returns `true` if spawning `<bin> --help` succeeds, regardless of its
/// exit status (converters disagree on help exit codes).
pub fn converter_available(bin: &str) -> bool {
    Command::new(bin).arg("--help").output().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mesh_uri_prefix_format() {
        assert_eq!(mesh_uri_prefix("chair_01"), "model://chair_01/meshes");
    }

    #[test]
    fn test_run_converter_missing_binary_fails() {
        let err = run_converter(
            "definitely-not-a-real-converter-binary",
            &PathBuf::from("scene.dae"),
            &PathBuf::from("meshes"),
            "model://x/meshes",
            &PathBuf::from("model.urdf"),
        )
        .unwrap_err();
        assert!(matches!(err, PackError::CommandFailed(_)));
    }

    #[test]
    fn test_converter_available_false_for_missing_binary() {
        assert!(!converter_available("definitely-not-a-real-converter-binary"));
    }
}
