use crate::core::render;
use crate::domain::model::{EnvVar, Field, FieldKind, FieldValue, ProjectDocument, TemplateKind};
use serde_json::{Map, Value};

/// Owns the project document and renders it with the selected template.
///
/// Unknown field names and values of the wrong shape are ignored rather than
/// reported, so templates saved by older or newer versions still load.
#[derive(Debug, Clone, Default)]
pub struct MarkdownGenerator {
    document: ProjectDocument,
}

impl MarkdownGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: ProjectDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &ProjectDocument {
        &self.document
    }

    pub fn update_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        let Ok(known) = field.parse::<Field>() else {
            tracing::debug!("Ignoring update of unknown field '{}'", field);
            return;
        };
        let value = value.into();
        let kind = value.kind();
        if !self.document.set(known, value) {
            tracing::warn!(
                "Ignoring {:?} value for field '{}' (expects {:?})",
                kind,
                field,
                known.kind()
            );
            return;
        }
        tracing::debug!("Updated field '{}'", field);
    }

    /// Current value, or empty text for an unknown name.
    pub fn get_field(&self, field: &str) -> FieldValue {
        match field.parse::<Field>() {
            Ok(known) => self.document.get(known),
            Err(()) => FieldValue::default_for(FieldKind::Text),
        }
    }

    pub fn get_data(&self) -> Map<String, Value> {
        self.document.to_map()
    }

    /// Merges `data` into the document. Keys that are missing keep their
    /// current value.
    pub fn set_data(&mut self, data: &Map<String, Value>) {
        for (key, value) in data {
            let Ok(field) = key.parse::<Field>() else {
                tracing::debug!("Ignoring unknown key '{}'", key);
                continue;
            };
            match FieldValue::from_json(field.kind(), value) {
                Some(parsed) => {
                    self.document.set(field, parsed);
                }
                None => tracing::warn!(
                    "Ignoring key '{}': expected {:?} value",
                    key,
                    field.kind()
                ),
            }
        }
    }

    pub fn reset(&mut self) {
        self.document = ProjectDocument::default();
    }

    pub fn template(&self) -> TemplateKind {
        self.document.template_kind()
    }

    pub fn generate_markdown(&self) -> String {
        render::render(self.template(), &self.document)
    }

    pub fn add_feature(&mut self, feature: &str) -> bool {
        push_trimmed(&mut self.document.features, feature, false)
    }

    pub fn remove_feature(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.document.features, index)
    }

    pub fn add_prerequisite(&mut self, prerequisite: &str) -> bool {
        push_trimmed(&mut self.document.prerequisites, prerequisite, false)
    }

    pub fn remove_prerequisite(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.document.prerequisites, index)
    }

    pub fn add_screenshot(&mut self, url: &str) -> bool {
        push_trimmed(&mut self.document.screenshots, url, false)
    }

    pub fn remove_screenshot(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.document.screenshots, index)
    }

    /// Appends a technology unless it is blank or already listed.
    pub fn add_tech(&mut self, tech: &str) -> bool {
        push_trimmed(&mut self.document.tech, tech, true)
    }

    pub fn remove_tech(&mut self, tech: &str) -> bool {
        let before = self.document.tech.len();
        self.document.tech.retain(|t| t != tech.trim());
        self.document.tech.len() != before
    }

    /// Adds an environment variable. Records without a name or description
    /// are dropped and `false` is returned.
    pub fn add_env_var(&mut self, name: &str, desc: &str, value: &str) -> bool {
        match EnvVar::new(name, desc, value) {
            Some(var) => {
                tracing::debug!("Added environment variable '{}'", var.name);
                self.document.envvars.push(var);
                true
            }
            None => {
                tracing::warn!("Rejected environment variable without name or description");
                false
            }
        }
    }

    pub fn remove_env_var(&mut self, index: usize) -> Option<EnvVar> {
        if index < self.document.envvars.len() {
            Some(self.document.envvars.remove(index))
        } else {
            None
        }
    }
}

fn push_trimmed(items: &mut Vec<String>, item: &str, unique: bool) -> bool {
    let item = item.trim();
    if item.is_empty() || (unique && items.iter().any(|existing| existing == item)) {
        return false;
    }
    items.push(item.to_string());
    true
}

fn remove_at(items: &mut Vec<String>, index: usize) -> Option<String> {
    (index < items.len()).then(|| items.remove(index))
}
