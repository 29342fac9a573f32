use serde::{Deserialize, Serialize};

/// Outcome of a single file lookup. Optional marks an absent file that is
/// allowed to be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Ok,
    Missing,
    Optional,
}

impl FileStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            FileStatus::Ok => "OK",
            FileStatus::Missing => "MISSING",
            FileStatus::Optional => "OPTIONAL",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileCheck {
    pub path: String,
    pub status: FileStatus,
    pub size_bytes: u64,
}

impl FileCheck {
    pub fn present(&self) -> bool {
        matches!(self.status, FileStatus::Ok)
    }
}

/// One section of the expected layout, e.g. the core scripts or the icons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileGroup {
    pub tag: String,
    pub title: String,
    #[serde(default = "required_default")]
    pub required: bool,
    pub files: Vec<String>,
}

fn required_default() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct JsonCheck {
    pub path: String,
    pub error: Option<String>,
}

impl JsonCheck {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct KeyCheck {
    pub key: String,
    pub present: bool,
}

/// Result of validating the manifest document against the required keys
/// and the expected manifest version.
#[derive(Debug, Clone)]
pub struct StructureReport {
    pub keys: Vec<KeyCheck>,
    pub version: Option<serde_json::Value>,
    pub version_ok: bool,
}

impl StructureReport {
    pub fn passed(&self) -> bool {
        self.version_ok && self.keys.iter().all(|k| k.present)
    }
}

#[derive(Debug, Clone)]
pub struct GroupReport {
    pub tag: String,
    pub title: String,
    pub required: bool,
    pub files: Vec<FileCheck>,
}

impl GroupReport {
    pub fn all_present(&self) -> bool {
        self.files.iter().all(|f| f.present())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SizeReport {
    pub total_bytes: u64,
    pub files_counted: usize,
}

impl SizeReport {
    pub fn kilobytes(&self) -> f64 {
        self.total_bytes as f64 / 1024.0
    }
}

/// Everything a single audit run observed. `all_ok` is threaded through the
/// checks and decides the process exit code.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub root: String,
    pub manifest: FileCheck,
    pub manifest_json: Option<JsonCheck>,
    pub groups: Vec<GroupReport>,
    pub structure: Option<StructureReport>,
    pub structure_error: Option<String>,
    pub stats: SizeReport,
    pub all_ok: bool,
}

impl HealthReport {
    pub fn passed(&self) -> bool {
        self.all_ok
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_ok {
            0
        } else {
            1
        }
    }
}
