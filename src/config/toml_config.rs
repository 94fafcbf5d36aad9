use crate::core::generator::MarkdownGenerator;
use crate::domain::model::TemplateKind;
use crate::utils::error::{MdError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "md-creator.toml";

/// `md-creator.toml`：新專案的預設值與輸出檔名
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub template: Option<String>,
    pub license: Option<String>,
    pub username: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_dir: Option<String>,
    pub markdown_filename: Option<String>,
    pub template_filename: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MdError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 有指定路徑就必須存在；否則嘗試目前目錄的 md-creator.toml，沒有就用預設值
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) if !Path::new(path).is_file() => Err(MdError::MissingConfigError {
                field: path.to_string(),
            }),
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MdError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GITHUB_USER})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MdError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(template) = &self.defaults.template {
            let names: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.as_str()).collect();
            validate_one_of("defaults.template", template, &names)?;
        }

        if let Some(license) = &self.defaults.license {
            validate_non_empty_string("defaults.license", license)?;
        }

        if let Some(dir) = &self.output.output_dir {
            validate_path("output.output_dir", dir)?;
        }
        if let Some(name) = &self.output.markdown_filename {
            validate_path("output.markdown_filename", name)?;
        }
        if let Some(name) = &self.output.template_filename {
            validate_path("output.template_filename", name)?;
        }

        Ok(())
    }

    pub fn output_dir(&self) -> &str {
        self.output.output_dir.as_deref().unwrap_or(".")
    }

    pub fn markdown_filename(&self) -> &str {
        self.output.markdown_filename.as_deref().unwrap_or("README.md")
    }

    pub fn template_filename(&self) -> &str {
        self.output
            .template_filename
            .as_deref()
            .unwrap_or("template.json")
    }

    /// 將預設值寫入新專案
    pub fn apply_defaults(&self, generator: &mut MarkdownGenerator) {
        let defaults = [
            ("template", &self.defaults.template),
            ("license", &self.defaults.license),
            ("username", &self.defaults.username),
            ("contact", &self.defaults.contact),
        ];
        for (field, value) in defaults {
            if let Some(value) = value {
                generator.update_field(field, value.as_str());
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[defaults]
template = "Modern"
license = "Apache-2.0"

[output]
output_dir = "./docs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.defaults.template.as_deref(), Some("Modern"));
        assert_eq!(config.output_dir(), "./docs");
        assert_eq!(config.markdown_filename(), "README.md");
        assert_eq!(config.template_filename(), "template.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_dir(), ".");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MD_CREATOR_TEST_USER", "octocat");

        let toml_content = r#"
[defaults]
username = "${MD_CREATOR_TEST_USER}"
contact = "${MD_CREATOR_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.defaults.username.as_deref(), Some("octocat"));
        assert_eq!(
            config.defaults.contact.as_deref(),
            Some("${MD_CREATOR_TEST_UNSET_VAR}")
        );

        std::env::remove_var("MD_CREATOR_TEST_USER");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[defaults]\ntemplate = \"Fancy\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[output]\noutput_dir = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[defaults\n").unwrap_err();
        assert!(matches!(err, MdError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nlicense = \"GPL-3.0\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.defaults.license.as_deref(), Some("GPL-3.0"));
    }

    #[test]
    fn test_explicit_missing_config_file() {
        let err = TomlConfig::load(Some("/no/such/md-creator.toml")).unwrap_err();
        assert!(matches!(err, MdError::MissingConfigError { .. }));
    }

    #[test]
    fn test_apply_defaults() {
        let config =
            TomlConfig::from_toml_str("[defaults]\ntemplate = \"Corporate\"\nusername = \"acme\"\n")
                .unwrap();
        let mut generator = MarkdownGenerator::new();
        config.apply_defaults(&mut generator);
        assert_eq!(generator.template(), TemplateKind::Corporate);
        assert_eq!(generator.get_field("username"), FieldValue::from("acme"));
        assert_eq!(generator.get_field("license"), FieldValue::from("MIT"));
    }
}
