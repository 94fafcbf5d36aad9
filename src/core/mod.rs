pub mod generator;
pub mod persistence;
pub mod render;

pub use crate::domain::model::{EnvVar, Field, FieldValue, ProjectDocument, TemplateKind};
pub use crate::domain::ports::{DocumentSink, Storage};
pub use crate::utils::error::Result;
