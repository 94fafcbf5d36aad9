use crate::core::generator::MarkdownGenerator;
use crate::core::Storage;
use crate::utils::error::{MdError, Result};
use serde_json::Value;

/// Saves and loads project templates and exports rendered documents through
/// a [`Storage`] backend.
pub struct ProjectStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ProjectStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the document fields as a JSON object with 2-space indentation.
    pub async fn save_template(&self, generator: &MarkdownGenerator, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&Value::Object(generator.get_data()))?;
        self.storage.write_file(path, json.as_bytes()).await?;
        tracing::info!("💾 Template saved to {}", path);
        Ok(())
    }

    /// Reads a template and merges it into `generator`. Nothing is changed
    /// when the file cannot be read or is not a JSON object.
    pub async fn load_template(&self, generator: &mut MarkdownGenerator, path: &str) -> Result<()> {
        let bytes = self.storage.read_file(path).await?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| MdError::MalformedTemplateError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let Value::Object(data) = value else {
            return Err(MdError::MalformedTemplateError {
                path: path.to_string(),
                message: "expected a JSON object at the top level".to_string(),
            });
        };

        tracing::debug!("Merging {} keys from {}", data.len(), path);
        generator.set_data(&data);
        tracing::info!("📂 Template loaded from {}", path);
        Ok(())
    }

    /// Renders the document and writes it verbatim. Returns the Markdown.
    pub async fn export_markdown(&self, generator: &MarkdownGenerator, path: &str) -> Result<String> {
        let markdown = generator.generate_markdown();
        self.storage.write_file(path, markdown.as_bytes()).await?;
        tracing::info!(
            "📝 {} README written to {} ({} bytes)",
            generator.template(),
            path,
            markdown.len()
        );
        Ok(markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldValue;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                MdError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_save_uses_two_space_indent() {
        let storage = MockStorage::default();
        let store = ProjectStore::new(storage.clone());
        let mut generator = MarkdownGenerator::new();
        generator.update_field("project_name", "Foo");

        store.save_template(&generator, "template.json").await.unwrap();

        let saved = storage.get("template.json").await.unwrap();
        assert!(saved.starts_with("{\n  \""));
        assert!(saved.contains("\"project_name\": \"Foo\""));
        assert!(saved.contains("\"DemoGif\": \"\""));
    }

    #[tokio::test]
    async fn test_load_merges_into_existing_document() {
        let storage = MockStorage::default();
        storage.put("t.json", r#"{"license": "Apache-2.0", "screenshot1": "x.png"}"#).await;
        let store = ProjectStore::new(storage);
        let mut generator = MarkdownGenerator::new();
        generator.update_field("features", vec!["A"]);

        store.load_template(&mut generator, "t.json").await.unwrap();

        assert_eq!(generator.get_field("features"), FieldValue::from(vec!["A"]));
        assert_eq!(generator.get_field("license"), FieldValue::from("Apache-2.0"));
    }

    #[tokio::test]
    async fn test_failed_load_leaves_document_untouched() {
        let storage = MockStorage::default();
        storage.put("broken.json", "{\"license\": ").await;
        storage.put("array.json", "[1, 2]").await;
        let store = ProjectStore::new(storage);
        let mut generator = MarkdownGenerator::new();
        generator.update_field("project_name", "Foo");
        let before = generator.get_data();

        for path in ["broken.json", "array.json", "missing.json"] {
            assert!(store.load_template(&mut generator, path).await.is_err());
            assert_eq!(generator.get_data(), before);
        }
    }

    #[tokio::test]
    async fn test_export_writes_rendered_markdown() {
        let storage = MockStorage::default();
        let store = ProjectStore::new(storage.clone());
        let mut generator = MarkdownGenerator::new();
        generator.update_field("template", "Minimalist");

        let markdown = store.export_markdown(&generator, "README.md").await.unwrap();

        assert_eq!(storage.get("README.md").await.unwrap(), markdown);
        assert_eq!(markdown, generator.generate_markdown());
    }
}
