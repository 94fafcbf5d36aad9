pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{
    sink::{ClipboardSink, FileSink, StdoutSink},
    storage::LocalStorage,
};
pub use app::commands::{CommandRunner, RenderTarget};
pub use crate::core::{generator::MarkdownGenerator, persistence::ProjectStore};
pub use domain::model::{EnvVar, Field, FieldValue, ProjectDocument, TemplateKind};
pub use utils::error::{MdError, Result};
