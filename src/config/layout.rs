use crate::core::LayoutProvider;
use crate::domain::model::FileGroup;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Expected layout of an extension directory. The default value is the
/// canonical layout; a TOML file can override any section of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub manifest: ManifestSection,
    pub groups: Vec<FileGroup>,
    pub scan: ScanSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSection {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Directory names skipped during the size walk.
    pub ignore: Vec<String>,
    /// Bare extensions of files that count toward the total size.
    pub extensions: Vec<String>,
}

impl Default for ManifestSection {
    fn default() -> Self {
        Self {
            file: "manifest.json".to_string(),
        }
    }
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            ignore: vec![".claude".to_string()],
            extensions: vec![
                "js".to_string(),
                "json".to_string(),
                "html".to_string(),
                "css".to_string(),
                "md".to_string(),
                "png".to_string(),
            ],
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            manifest: ManifestSection::default(),
            groups: vec![
                group(
                    "CORE",
                    "Checking core JavaScript files...",
                    true,
                    &["background.js", "content.js", "popup.js"],
                ),
                group(
                    "UTILS",
                    "Checking utility files...",
                    true,
                    &[
                        "utils/dom-selectors.js",
                        "utils/title-versioner.js",
                        "utils/context-extractor.js",
                    ],
                ),
                group(
                    "UI",
                    "Checking UI files...",
                    true,
                    &["popup.html", "styles.css"],
                ),
                group(
                    "ICONS",
                    "Checking icon files...",
                    true,
                    &["icons/icon16.png", "icons/icon48.png", "icons/icon128.png"],
                ),
                group(
                    "DOCS",
                    "Checking documentation...",
                    false,
                    &["README.md", "INSTALL.md", "TESTING_GUIDE.md"],
                ),
            ],
            scan: ScanSection::default(),
        }
    }
}

fn group(tag: &str, title: &str, required: bool, files: &[&str]) -> FileGroup {
    FileGroup {
        tag: tag.to_string(),
        title: title.to_string(),
        required,
        files: files.iter().map(|f| f.to_string()).collect(),
    }
}

impl LayoutConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXT_ROOT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Loads the override file when the audited directory carries one,
    /// otherwise falls back to the canonical layout.
    pub fn load_or_default(root: &Path, file: &str) -> Result<Self> {
        let path = root.join(file);
        if path.exists() {
            tracing::debug!("Loading layout override from {}", path.display());
            let config = Self::from_file(&path)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 驗證配置的合理性
    pub fn validate_layout(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("manifest.file", &self.manifest.file)?;
        crate::utils::validation::validate_path("manifest.file", &self.manifest.file)?;

        if self.groups.is_empty() {
            return Err(ToolError::ConfigValidationError {
                field: "groups".to_string(),
                message: "At least one file group is required".to_string(),
            });
        }

        for group in &self.groups {
            crate::utils::validation::validate_non_empty_string("groups.tag", &group.tag)?;
            crate::utils::validation::validate_non_empty_string("groups.title", &group.title)?;
            for file in &group.files {
                crate::utils::validation::validate_path(
                    &format!("groups.{}.files", group.tag),
                    file,
                )?;
            }
        }

        crate::utils::validation::validate_extension_list(
            "scan.extensions",
            &self.scan.extensions,
        )?;

        Ok(())
    }
}

impl LayoutProvider for LayoutConfig {
    fn manifest_file(&self) -> &str {
        &self.manifest.file
    }

    fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    fn ignore_dirs(&self) -> &[String] {
        &self.scan.ignore
    }

    fn size_extensions(&self) -> &[String] {
        &self.scan.extensions
    }
}

impl Validate for LayoutConfig {
    fn validate(&self) -> Result<()> {
        self.validate_layout()
    }
}
