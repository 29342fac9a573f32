use crate::core::{FileCheck, FileStatus, JsonCheck, KeyCheck, Result, SizeReport, StructureReport};
use std::path::Path;
use walkdir::WalkDir;

/// Top-level keys every Manifest V3 extension must declare.
pub const REQUIRED_MANIFEST_KEYS: [&str; 10] = [
    "manifest_version",
    "name",
    "version",
    "description",
    "permissions",
    "host_permissions",
    "background",
    "content_scripts",
    "action",
    "icons",
];

pub const MANIFEST_VERSION: i64 = 3;

/// Looks up one expected file under `root`. Absent files never fail the call;
/// they come back as Missing or, for advisory files, Optional with size 0.
pub fn file_presence_check(root: &Path, rel_path: &str, required: bool) -> FileCheck {
    match std::fs::metadata(root.join(rel_path)) {
        Ok(meta) => FileCheck {
            path: rel_path.to_string(),
            status: FileStatus::Ok,
            size_bytes: meta.len(),
        },
        Err(_) => FileCheck {
            path: rel_path.to_string(),
            status: if required {
                FileStatus::Missing
            } else {
                FileStatus::Optional
            },
            size_bytes: 0,
        },
    }
}

/// Parses the file as JSON. Read and parse failures both land in the
/// captured error message instead of propagating.
pub fn json_validity_check(root: &Path, rel_path: &str) -> JsonCheck {
    let error = match std::fs::read_to_string(root.join(rel_path)) {
        Ok(content) => match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        },
        Err(e) => Some(e.to_string()),
    };

    JsonCheck {
        path: rel_path.to_string(),
        error,
    }
}

/// Validates the manifest document against the required keys and the
/// expected manifest version. Unreadable or unparseable manifests surface
/// as an error for the caller to report.
pub fn manifest_structure_check(root: &Path, rel_path: &str) -> Result<StructureReport> {
    let content = std::fs::read_to_string(root.join(rel_path))?;
    let manifest: serde_json::Value = serde_json::from_str(&content)?;

    let keys = REQUIRED_MANIFEST_KEYS
        .iter()
        .map(|&key| KeyCheck {
            key: key.to_string(),
            present: manifest.get(key).is_some(),
        })
        .collect();

    let version = manifest.get("manifest_version").cloned();
    let version_ok = version
        .as_ref()
        .and_then(|v| v.as_i64())
        .map(|v| v == MANIFEST_VERSION)
        .unwrap_or(false);

    Ok(StructureReport {
        keys,
        version,
        version_ok,
    })
}

/// Walks the directory tree and sums the sizes of files whose extension is
/// on the allowlist. Directories whose name is on the ignore list are
/// skipped whole. Unreadable entries are skipped rather than failing the
/// scan.
pub fn collect_size_stats(root: &Path, ignore_dirs: &[String], extensions: &[String]) -> SizeReport {
    let mut report = SizeReport::default();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let ignored = entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| ignore_dirs.iter().any(|d| d == name))
                .unwrap_or(false);
        !ignored
    });

    for entry in walker.flatten() {
        if !entry.file_type().is_file() {
            continue;
        }

        let counted = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false);

        if counted {
            report.total_bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
            report.files_counted += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &[u8]) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_file_presence_check_present() {
        let dir = TempDir::new().unwrap();
        write(&dir, "background.js", b"console.log('hi');");

        let check = file_presence_check(dir.path(), "background.js", true);
        assert_eq!(check.status, FileStatus::Ok);
        assert_eq!(check.size_bytes, 18);
        assert!(check.present());
    }

    #[test]
    fn test_file_presence_check_missing_vs_optional() {
        let dir = TempDir::new().unwrap();

        let required = file_presence_check(dir.path(), "popup.js", true);
        assert_eq!(required.status, FileStatus::Missing);
        assert_eq!(required.size_bytes, 0);

        let advisory = file_presence_check(dir.path(), "README.md", false);
        assert_eq!(advisory.status, FileStatus::Optional);
        assert_eq!(advisory.size_bytes, 0);
    }

    #[test]
    fn test_present_optional_file_reports_ok() {
        let dir = TempDir::new().unwrap();
        write(&dir, "README.md", b"# readme");

        let check = file_presence_check(dir.path(), "README.md", false);
        assert_eq!(check.status, FileStatus::Ok);
        assert_eq!(check.size_bytes, 8);
    }

    #[test]
    fn test_file_presence_check_nested_path() {
        let dir = TempDir::new().unwrap();
        write(&dir, "utils/dom-selectors.js", b"x");

        let check = file_presence_check(dir.path(), "utils/dom-selectors.js", true);
        assert_eq!(check.status, FileStatus::Ok);
        assert_eq!(check.path, "utils/dom-selectors.js");
    }

    #[test]
    fn test_json_validity_check_valid() {
        let dir = TempDir::new().unwrap();
        write(&dir, "manifest.json", br#"{"manifest_version": 3}"#);

        let check = json_validity_check(dir.path(), "manifest.json");
        assert!(check.is_valid());
    }

    #[test]
    fn test_json_validity_check_invalid_captures_message() {
        let dir = TempDir::new().unwrap();
        write(&dir, "manifest.json", b"{ \"name\": ");

        let check = json_validity_check(dir.path(), "manifest.json");
        assert!(!check.is_valid());
        assert!(check.error.is_some());
    }

    #[test]
    fn test_json_validity_check_unreadable_file() {
        let dir = TempDir::new().unwrap();

        let check = json_validity_check(dir.path(), "manifest.json");
        assert!(!check.is_valid());
    }

    fn full_manifest() -> serde_json::Value {
        serde_json::json!({
            "manifest_version": 3,
            "name": "Demo",
            "version": "1.0.0",
            "description": "d",
            "permissions": [],
            "host_permissions": [],
            "background": {"service_worker": "background.js"},
            "content_scripts": [],
            "action": {},
            "icons": {}
        })
    }

    #[test]
    fn test_manifest_structure_check_complete() {
        let dir = TempDir::new().unwrap();
        write(&dir, "manifest.json", full_manifest().to_string().as_bytes());

        let report = manifest_structure_check(dir.path(), "manifest.json").unwrap();
        assert_eq!(report.keys.len(), 10);
        assert!(report.keys.iter().all(|k| k.present));
        assert!(report.version_ok);
        assert!(report.passed());
    }

    #[test]
    fn test_manifest_structure_check_missing_key() {
        let dir = TempDir::new().unwrap();
        let mut manifest = full_manifest();
        manifest.as_object_mut().unwrap().remove("icons");
        write(&dir, "manifest.json", manifest.to_string().as_bytes());

        let report = manifest_structure_check(dir.path(), "manifest.json").unwrap();
        let icons = report.keys.iter().find(|k| k.key == "icons").unwrap();
        assert!(!icons.present);
        assert!(!report.passed());
    }

    #[test]
    fn test_manifest_structure_check_wrong_version() {
        let dir = TempDir::new().unwrap();
        let mut manifest = full_manifest();
        manifest["manifest_version"] = serde_json::json!(2);
        write(&dir, "manifest.json", manifest.to_string().as_bytes());

        let report = manifest_structure_check(dir.path(), "manifest.json").unwrap();
        assert!(!report.version_ok);
        assert_eq!(report.version, Some(serde_json::json!(2)));
    }

    #[test]
    fn test_manifest_structure_check_string_version_rejected() {
        let dir = TempDir::new().unwrap();
        let mut manifest = full_manifest();
        manifest["manifest_version"] = serde_json::json!("3");
        write(&dir, "manifest.json", manifest.to_string().as_bytes());

        let report = manifest_structure_check(dir.path(), "manifest.json").unwrap();
        assert!(!report.version_ok);
    }

    #[test]
    fn test_manifest_structure_check_unreadable_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(manifest_structure_check(dir.path(), "manifest.json").is_err());
    }

    #[test]
    fn test_manifest_structure_check_invalid_json_is_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "manifest.json", b"not json at all");
        assert!(manifest_structure_check(dir.path(), "manifest.json").is_err());
    }

    fn default_scan() -> (Vec<String>, Vec<String>) {
        let layout = crate::config::LayoutConfig::default();
        (layout.scan.ignore.clone(), layout.scan.extensions.clone())
    }

    #[test]
    fn test_collect_size_stats_counts_allowlisted_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "background.js", b"12345");
        write(&dir, "popup.html", b"123");
        write(&dir, "notes.txt", b"not counted");

        let (ignore, extensions) = default_scan();
        let report = collect_size_stats(dir.path(), &ignore, &extensions);
        assert_eq!(report.total_bytes, 8);
        assert_eq!(report.files_counted, 2);
    }

    #[test]
    fn test_collect_size_stats_recurses_subdirs() {
        let dir = TempDir::new().unwrap();
        write(&dir, "utils/helper.js", b"1234");
        write(&dir, "icons/icon16.png", b"12");

        let (ignore, extensions) = default_scan();
        let report = collect_size_stats(dir.path(), &ignore, &extensions);
        assert_eq!(report.total_bytes, 6);
        assert_eq!(report.files_counted, 2);
    }

    #[test]
    fn test_collect_size_stats_skips_ignored_dirs() {
        let dir = TempDir::new().unwrap();
        write(&dir, "background.js", b"123");
        write(&dir, ".claude/settings.json", b"should not count");
        write(&dir, ".claude/nested/deep.js", b"nor this");

        let (ignore, extensions) = default_scan();
        let report = collect_size_stats(dir.path(), &ignore, &extensions);
        assert_eq!(report.total_bytes, 3);
        assert_eq!(report.files_counted, 1);
    }

    #[test]
    fn test_collect_size_stats_ignore_matches_name_not_substring() {
        let dir = TempDir::new().unwrap();
        // A directory merely containing the ignored name still counts.
        write(&dir, "my.claude-notes/file.js", b"1234");

        let (ignore, extensions) = default_scan();
        let report = collect_size_stats(dir.path(), &ignore, &extensions);
        assert_eq!(report.total_bytes, 4);
    }

    #[test]
    fn test_collect_size_stats_extension_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        write(&dir, "icon.PNG", b"1234");
        write(&dir, "icon.png", b"12");

        let (ignore, extensions) = default_scan();
        let report = collect_size_stats(dir.path(), &ignore, &extensions);
        assert_eq!(report.total_bytes, 2);
        assert_eq!(report.files_counted, 1);
    }

    #[test]
    fn test_collect_size_stats_empty_dir() {
        let dir = TempDir::new().unwrap();
        let (ignore, extensions) = default_scan();
        let report = collect_size_stats(dir.path(), &ignore, &extensions);
        assert_eq!(report.total_bytes, 0);
        assert_eq!(report.files_counted, 0);
    }
}
