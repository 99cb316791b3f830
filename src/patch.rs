//! Post-conversion URDF patching.
//!
//! The external converter's output needs a handful of fixes before the
//! simulator will accept the model: joint type coercion, root element
//! renaming, a non-static wrapper, and replacement of numerically
//! degenerate placeholder inertia values. All substitutions run in process
//! over the loaded document text.

use std::fs;
use std::path::Path;

use regex::{Captures, NoExpand, Regex};

use crate::error::{PackError, PackResult};

/// The degenerate placeholder inertia tensor the converter emits when the
/// source carries no mass properties.
pub const DEGENERATE_INERTIA: &str =
    r#"<inertia ixx="1e-09" ixy="0" ixz="0" iyy="1e-09" iyz="0" izz="1e-09"/>"#;

/// A larger placeholder that keeps the physics solver stable.
pub const PLACEHOLDER_INERTIA: &str =
    r#"<inertia ixx="1e-03" ixy="0" ixz="0" iyy="1e-03" iyz="0" izz="1e-03"/>"#;

fn regex(pattern: &str) -> PackResult<Regex> {
    Regex::new(pattern).map_err(|e| PackError::Parse(format!("bad pattern: {}", e)))
}

/// Coerce every `continuous` joint token to `revolute`.
///
/// Whole-document token replacement: the simulator side has no continuous
/// joint support, and the converter only ever emits the token as a joint
/// type.
pub fn coerce_continuous_joints(content: &str) -> String {
    content.replace("continuous", "revolute")
}

/// Rewrite the root `<robot name="...">` attribute to `name`.
///
/// The converter stamps its own internal name (`inst_kinsystem`) on the
/// root element; the package must carry the model name instead.
pub fn rename_robot(content: &str, name: &str) -> PackResult<String> {
    let re = regex(r#"<robot\s+name="[^"]*""#)?;
    let replacement = format!(r#"<robot name="{}""#, name);
    Ok(re.replace(content, NoExpand(&replacement)).into_owned())
}

/// Insert a `<gazebo><static>false</static></gazebo>` wrapper before the
/// first `<link>` element, marking the model as non-static-by-default.
///
/// A document with no links is returned unchanged.
pub fn insert_static_wrapper(content: &str) -> PackResult<String> {
    let re = regex(r"(?m)^([ \t]*)<link\b")?;
    let patched = re.replace(content, |caps: &Captures| {
        let indent = &caps[1];
        format!(
            "{indent}<gazebo>\n{indent}  <static>false</static>\n{indent}</gazebo>\n{indent}<link",
            indent = indent
        )
    });
    Ok(patched.into_owned())
}

/// Replace every degenerate placeholder inertia tensor with the larger one.
pub fn relax_placeholder_inertia(content: &str) -> String {
    content.replace(DEGENERATE_INERTIA, PLACEHOLDER_INERTIA)
}

/// Apply all post-conversion substitutions, in order.
pub fn patch_urdf(content: &str, name: &str) -> PackResult<String> {
    let content = coerce_continuous_joints(content);
    let content = rename_robot(&content, name)?;
    let content = insert_static_wrapper(&content)?;
    Ok(relax_placeholder_inertia(&content))
}

/// Patch the description file at `path` in place.
pub fn patch_urdf_file(path: &Path, name: &str) -> PackResult<()> {
    let content = fs::read_to_string(path)?;
    let patched = patch_urdf(&content, name)?;
    fs::write(path, patched)?;
    Ok(())
}
