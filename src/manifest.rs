//! Model registry manifest handling.
//!
//! The models root keeps a `manifest.xml` whose `<models>` element lists one
//! `<uri>file://<name></uri>` entry per generated package. Registration is a
//! read-modify-write in process: existing entries are scanned first, so
//! registering the same model twice never produces a duplicate entry.

use std::fs;
use std::path::Path;

use crate::error::{PackError, PackResult};

/// A fresh manifest with an empty `<models>` element, written when no
/// manifest exists yet at the models root.
pub const EMPTY_MANIFEST: &str = "<?xml version='1.0'?>\n\
<manifest>\n\
  <models>\n\
  </models>\n\
</manifest>\n";

/// The registry URI for a model name.
pub fn model_uri(name: &str) -> String {
    format!("file://{}", name)
}

/// Scan the manifest content for registered model names.
///
/// Entries look like `<uri>file://chair_01</uri>`; anything not carrying the
/// `file://` scheme is ignored.
pub fn registered_models(content: &str) -> Vec<String> {
    let mut models = Vec::new();
    let mut search_from = 0;
    while let Some(start) = content[search_from..].find("<uri>") {
        let value_start = search_from + start + "<uri>".len();
        match content[value_start..].find("</uri>") {
            Some(end) => {
                let value = content[value_start..value_start + end].trim();
                if let Some(name) = value.strip_prefix("file://") {
                    models.push(name.to_string());
                }
                search_from = value_start + end + "</uri>".len();
            }
            None => break,
        }
    }
    models
}

/// Register `name` in the manifest content.
///
/// Returns `Ok(None)` if the model is already registered (idempotent skip),
/// or `Ok(Some(updated))` with the entry inserted just above the `</models>`
/// closing tag. A manifest without a `</models>` element is malformed.
pub fn register_model(content: &str, name: &str) -> PackResult<Option<String>> {
    if registered_models(content).iter().any(|m| m == name) {
        log::debug!("model '{}' already registered, skipping", name);
        return Ok(None);
    }

    let close_idx = content.find("</models>").ok_or_else(|| {
        PackError::Parse("manifest has no closing </models> element".to_string())
    })?;

    // Insert on its own line, directly above the closing tag. Falls back to
    // inserting right before the tag when it does not start its line.
    let line_start = content[..close_idx]
        .rfind('\n')
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let insert_at = if content[line_start..close_idx].trim().is_empty() {
        line_start
    } else {
        close_idx
    };

    let mut updated = String::with_capacity(content.len() + 48);
    updated.push_str(&content[..insert_at]);
    updated.push_str(&format!("    <uri>{}</uri>\n", model_uri(name)));
    updated.push_str(&content[insert_at..]);
    Ok(Some(updated))
}

/// Register `name` in the manifest file at `path`, creating a fresh manifest
/// if none exists. Returns `true` if an entry was added.
pub fn register_model_file(path: &Path, name: &str) -> PackResult<bool> {
    if !path.exists() {
        log::debug!("no manifest at {:?}, creating a fresh one", path);
        fs::write(path, EMPTY_MANIFEST)?;
    }

    let content = fs::read_to_string(path)?;
    match register_model(&content, name)? {
        Some(updated) => {
            fs::write(path, updated)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_inserts_uri_entry() {
        let updated = register_model(EMPTY_MANIFEST, "chair_01").unwrap().unwrap();
        assert!(updated.contains("<uri>file://chair_01</uri>"));
        // Entry sits inside the models element.
        let uri_idx = updated.find("<uri>").unwrap();
        let open_idx = updated.find("<models>").unwrap();
        let close_idx = updated.find("</models>").unwrap();
        assert!(open_idx < uri_idx && uri_idx < close_idx);
    }

    #[test]
    fn test_register_is_idempotent() {
        let once = register_model(EMPTY_MANIFEST, "chair_01").unwrap().unwrap();
        assert!(register_model(&once, "chair_01").unwrap().is_none());
        assert_eq!(once.matches("<uri>file://chair_01</uri>").count(), 1);
    }

    #[test]
    fn test_register_multiple_models() {
        let first = register_model(EMPTY_MANIFEST, "chair_01").unwrap().unwrap();
        let second = register_model(&first, "table_02").unwrap().unwrap();
        assert_eq!(
            registered_models(&second),
            vec!["chair_01".to_string(), "table_02".to_string()]
        );
    }

    #[test]
    fn test_register_missing_anchor_is_parse_error() {
        let err = register_model("<manifest></manifest>", "chair_01").unwrap_err();
        assert!(matches!(err, PackError::Parse(_)));
    }

    #[test]
    fn test_registered_models_ignores_non_file_uris() {
        let content = "<models>\n  <uri>http://example.com/x</uri>\n  \
                       <uri>file://lamp</uri>\n</models>";
        assert_eq!(registered_models(content), vec!["lamp".to_string()]);
    }

    #[test]
    fn test_register_file_creates_fresh_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("manifest.xml");

        assert!(register_model_file(&path, "chair_01").unwrap());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<uri>file://chair_01</uri>"));

        // Second registration is a no-op.
        assert!(!register_model_file(&path, "chair_01").unwrap());
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("chair_01").count(), 1);
    }
}
