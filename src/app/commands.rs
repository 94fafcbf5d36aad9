use crate::adapters::sink::{ClipboardSink, FileSink, StdoutSink};
use crate::adapters::storage::LocalStorage;
use crate::config::TomlConfig;
use crate::core::generator::MarkdownGenerator;
use crate::core::persistence::ProjectStore;
use crate::core::DocumentSink;
use crate::domain::catalog;
use crate::domain::model::{Field, FieldKind, FieldValue, TemplateKind};
use crate::utils::error::{MdError, Result};
use crate::utils::validation::validate_one_of;
use serde_json::Value;

/// Where `render` sends the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    Stdout,
    /// `None` writes the configured README filename.
    File(Option<String>),
    Clipboard,
}

/// Runs the CLI operations against project template files.
pub struct CommandRunner {
    config: TomlConfig,
    project_root: LocalStorage,
    projects: ProjectStore<LocalStorage>,
    output: LocalStorage,
}

impl CommandRunner {
    pub fn new(config: TomlConfig) -> Self {
        Self::with_roots(config, ".")
    }

    /// Project files, including the ones `init` creates, resolve against
    /// `project_root`; rendered READMEs against the configured output directory.
    pub fn with_roots(config: TomlConfig, project_root: &str) -> Self {
        let project_root = LocalStorage::new(project_root);
        Self {
            projects: ProjectStore::new(project_root.clone()),
            project_root,
            output: LocalStorage::new(config.output_dir()),
            config,
        }
    }

    pub async fn open(&self, file: &str) -> Result<MarkdownGenerator> {
        let mut generator = MarkdownGenerator::new();
        self.projects.load_template(&mut generator, file).await?;
        Ok(generator)
    }

    async fn save(&self, generator: &MarkdownGenerator, file: &str) -> Result<()> {
        self.projects.save_template(generator, file).await
    }

    pub async fn init(
        &self,
        output: Option<&str>,
        template: Option<&str>,
        force: bool,
    ) -> Result<String> {
        let path = output.unwrap_or_else(|| self.config.template_filename());
        let full_path = self.project_root.resolve(path);
        if !force && tokio::fs::try_exists(&full_path).await? {
            return Err(MdError::ConfigError {
                message: format!("{} already exists (use --force to overwrite)", full_path.display()),
            });
        }

        let mut generator = MarkdownGenerator::new();
        self.config.apply_defaults(&mut generator);
        if let Some(template) = template {
            validate_template_name(template)?;
            generator.update_field("template", template);
        }

        self.save(&generator, path).await?;
        Ok(full_path.display().to_string())
    }

    /// Replaces a field. Unknown field names are ignored like any other
    /// update; the file is still rewritten.
    pub async fn set(&self, file: &str, field: &str, values: &[String]) -> Result<()> {
        let mut generator = self.open(file).await?;

        match field.parse::<Field>().map(|f| f.kind()) {
            Ok(FieldKind::Text) => {
                let value = values.join(" ");
                if field == Field::License.as_str() && !catalog::is_known_license(&value) {
                    tracing::warn!("⚠️ '{}' is not a common license identifier", value);
                }
                generator.update_field(field, value);
            }
            Ok(FieldKind::List) => generator.update_field(field, values.to_vec()),
            Ok(FieldKind::EnvVars) => {
                return Err(MdError::ConfigError {
                    message: "envvars cannot be set directly, use `add-env`".to_string(),
                })
            }
            Err(()) => tracing::warn!("⚠️ Unknown field '{}' ignored", field),
        }

        self.save(&generator, file).await
    }

    /// Appends to a list field. Returns `false` when the item was skipped
    /// (blank, or a technology already listed).
    pub async fn add(&self, file: &str, field: &str, item: &str) -> Result<bool> {
        let mut generator = self.open(file).await?;

        let added = match field.parse::<Field>() {
            Ok(Field::Features) => generator.add_feature(item),
            Ok(Field::Prerequisites) => generator.add_prerequisite(item),
            Ok(Field::Screenshots) => generator.add_screenshot(item),
            Ok(Field::Tech) => {
                generator.add_tech(catalog::canonical_technology(item).unwrap_or(item))
            }
            _ => {
                return Err(MdError::InvalidConfigValueError {
                    field: "field".to_string(),
                    value: field.to_string(),
                    reason: "Must be one of: features, Prerequisites, tech, screenshots"
                        .to_string(),
                })
            }
        };

        if added {
            self.save(&generator, file).await?;
        }
        Ok(added)
    }

    /// Removes a list item by 1-based position, or a technology by name.
    pub async fn remove(&self, file: &str, field: &str, item: &str) -> Result<bool> {
        let mut generator = self.open(file).await?;

        let field = field.parse::<Field>().map_err(|_| MdError::InvalidConfigValueError {
            field: "field".to_string(),
            value: field.to_string(),
            reason: "Unknown field".to_string(),
        })?;

        let removed = if field == Field::Tech && item.parse::<usize>().is_err() {
            generator.remove_tech(catalog::canonical_technology(item).unwrap_or(item))
        } else {
            let position = item.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                MdError::InvalidConfigValueError {
                    field: "item".to_string(),
                    value: item.to_string(),
                    reason: "Expected a position starting at 1".to_string(),
                }
            })?;
            let index = position - 1;
            match field {
                Field::Features => generator.remove_feature(index).is_some(),
                Field::Prerequisites => generator.remove_prerequisite(index).is_some(),
                Field::Screenshots => generator.remove_screenshot(index).is_some(),
                Field::EnvVars => generator.remove_env_var(index).is_some(),
                Field::Tech => {
                    let name = generator.document().tech.get(index).cloned();
                    name.is_some_and(|name| generator.remove_tech(&name))
                }
                other => {
                    return Err(MdError::InvalidConfigValueError {
                        field: "field".to_string(),
                        value: other.to_string(),
                        reason: "Not a list field".to_string(),
                    })
                }
            }
        };

        if removed {
            self.save(&generator, file).await?;
        }
        Ok(removed)
    }

    pub async fn add_env(&self, file: &str, name: &str, desc: &str, value: &str) -> Result<bool> {
        let mut generator = self.open(file).await?;
        let added = generator.add_env_var(name, desc, value);
        if added {
            self.save(&generator, file).await?;
        }
        Ok(added)
    }

    pub async fn show(&self, file: &str, field: Option<&str>) -> Result<String> {
        let generator = self.open(file).await?;
        let value = match field {
            Some(field) => match generator.get_field(field) {
                FieldValue::Text(text) => return Ok(text),
                other => other.to_json(),
            },
            None => Value::Object(generator.get_data()),
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Renders the project and delivers it. Returns where it went.
    pub async fn render(
        &self,
        file: &str,
        template: Option<&str>,
        target: RenderTarget,
    ) -> Result<String> {
        let mut generator = self.open(file).await?;
        if let Some(template) = template {
            validate_template_name(template)?;
            generator.update_field("template", template);
        }

        let sink: Box<dyn DocumentSink> = match target {
            RenderTarget::Stdout => Box::new(StdoutSink),
            RenderTarget::File(path) => {
                let path = path.unwrap_or_else(|| self.config.markdown_filename().to_string());
                Box::new(FileSink::new(self.output.clone(), path))
            }
            RenderTarget::Clipboard => Box::new(ClipboardSink::new()),
        };

        let markdown = generator.generate_markdown();
        tracing::info!("🧩 Rendering with the {} template", generator.template());
        sink.deliver(&markdown).await
    }
}

fn validate_template_name(name: &str) -> Result<()> {
    let names: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.as_str()).collect();
    validate_one_of("template", name, &names)
}

pub fn list_templates() -> String {
    TemplateKind::ALL
        .iter()
        .map(|kind| format!("{:<12}{}", kind.as_str(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list_catalog(category: Option<&str>) -> Result<String> {
    match category {
        Some(category) => catalog::technologies_in(category)
            .map(|techs| techs.join("\n"))
            .ok_or_else(|| MdError::InvalidConfigValueError {
                field: "category".to_string(),
                value: category.to_string(),
                reason: format!(
                    "Must be one of: {}",
                    catalog::TECH_CATEGORIES
                        .iter()
                        .map(|(name, _)| *name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }),
        None => Ok(catalog::TECH_CATEGORIES
            .iter()
            .map(|(name, techs)| format!("{}: {}", name, techs.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn list_licenses() -> String {
    catalog::LICENSE_OPTIONS.join("\n")
}
