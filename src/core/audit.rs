use crate::core::checks;
use crate::core::{FileCheck, GroupReport, HealthReport, LayoutProvider};
use crate::utils::format::thousands;
use std::path::{Path, PathBuf};

pub struct HealthAudit<L: LayoutProvider> {
    root: PathBuf,
    layout: L,
}

impl<L: LayoutProvider> HealthAudit<L> {
    pub fn new(root: impl Into<PathBuf>, layout: L) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Runs every check in report order. Individual findings never abort
    /// the run; they only flip the aggregate flag.
    pub fn run(&self) -> HealthReport {
        let root = &self.root;
        let mut all_ok = true;

        tracing::debug!("Auditing extension at {}", root.display());

        let manifest_file = self.layout.manifest_file();
        let manifest = checks::file_presence_check(root, manifest_file, true);
        let manifest_json = if manifest.present() {
            let json = checks::json_validity_check(root, manifest_file);
            if !json.is_valid() {
                all_ok = false;
            }
            Some(json)
        } else {
            all_ok = false;
            None
        };

        let mut groups = Vec::new();
        for group in self.layout.groups() {
            let mut files = Vec::new();
            for rel in &group.files {
                let check = checks::file_presence_check(root, rel, group.required);
                if group.required && !check.present() {
                    all_ok = false;
                }
                files.push(check);
            }
            groups.push(GroupReport {
                tag: group.tag.clone(),
                title: group.title.clone(),
                required: group.required,
                files,
            });
        }

        let (structure, structure_error) =
            match checks::manifest_structure_check(root, manifest_file) {
                Ok(structure) => {
                    if !structure.passed() {
                        all_ok = false;
                    }
                    (Some(structure), None)
                }
                Err(e) => {
                    all_ok = false;
                    (None, Some(e.to_string()))
                }
            };

        let stats = checks::collect_size_stats(
            root,
            self.layout.ignore_dirs(),
            self.layout.size_extensions(),
        );

        tracing::debug!(
            "Audit finished: all_ok={}, {} bytes counted",
            all_ok,
            stats.total_bytes
        );

        HealthReport {
            root: display_root(root),
            manifest,
            manifest_json,
            groups,
            structure,
            structure_error,
            stats,
            all_ok,
        }
    }
}

fn display_root(root: &Path) -> String {
    std::fs::canonicalize(root)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

fn file_line(check: &FileCheck) -> String {
    format!(
        "  [{}] {} ({} bytes)",
        check.status.tag(),
        check.path,
        check.size_bytes
    )
}

/// Renders the report in section order for stdout.
pub fn render_report(report: &HealthReport) -> String {
    let banner = "=".repeat(60);
    let mut lines: Vec<String> = Vec::new();

    lines.push(banner.clone());
    lines.push("Extension Health Check".to_string());
    lines.push(banner.clone());
    lines.push(String::new());

    lines.push(format!("[MANIFEST] Checking {}...", report.manifest.path));
    lines.push(file_line(&report.manifest));
    if let Some(json) = &report.manifest_json {
        match &json.error {
            None => lines.push(format!("  [OK] {} - Valid JSON", json.path)),
            Some(e) => lines.push(format!("  [ERROR] {} - Invalid JSON: {}", json.path, e)),
        }
    }
    lines.push(String::new());

    for group in &report.groups {
        lines.push(format!("[{}] {}", group.tag, group.title));
        for file in &group.files {
            lines.push(file_line(file));
        }
        lines.push(String::new());
    }

    lines.push("[VALIDATION] Validating manifest structure...".to_string());
    if let Some(structure) = &report.structure {
        for key in &structure.keys {
            if key.present {
                lines.push(format!("  [OK] {}: present", key.key));
            } else {
                lines.push(format!("  [ERROR] {}: MISSING", key.key));
            }
        }
        if structure.version_ok {
            lines.push("  [OK] Manifest V3 confirmed".to_string());
        } else {
            match &structure.version {
                Some(v) => lines.push(format!("  [ERROR] Wrong manifest version: {}", v)),
                None => lines.push("  [ERROR] Wrong manifest version: missing".to_string()),
            }
        }
    } else if let Some(error) = &report.structure_error {
        lines.push(format!("  [ERROR] Error reading manifest: {}", error));
    }
    lines.push(String::new());

    lines.push("[STATS] File Statistics...".to_string());
    lines.push(format!(
        "  Total extension size: {} bytes ({:.1} KB)",
        thousands(report.stats.total_bytes),
        report.stats.kilobytes()
    ));
    lines.push(String::new());

    lines.push(banner);
    if report.all_ok {
        lines.push("HEALTH CHECK PASSED - Extension Ready!".to_string());
        lines.push(String::new());
        lines.push("Extension is ready to load in Chrome!".to_string());
        lines.push(String::new());
        lines.push("Next steps:".to_string());
        lines.push("1. Open Chrome and go to: chrome://extensions/".to_string());
        lines.push("2. Enable 'Developer mode'".to_string());
        lines.push("3. Click 'Load unpacked'".to_string());
        lines.push(format!("4. Select this folder: {}", report.root));
    } else {
        lines.push("HEALTH CHECK FAILED".to_string());
        lines.push(String::new());
        lines.push("Please fix the issues above before loading the extension.".to_string());
    }
    lines.push(String::new());

    lines.join("\n")
}
