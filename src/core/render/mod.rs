//! Markdown renderers, one module per template variant.
//!
//! Every renderer is a pure function of the document: no escaping is applied
//! to field values and rendering never fails.

pub mod builder;
pub mod corporate;
pub mod detailed;
pub mod minimalist;
pub mod modern;
pub mod shared;
pub mod standard;

use crate::domain::model::{ProjectDocument, TemplateKind};

pub use builder::LineBuilder;

pub fn render(kind: TemplateKind, doc: &ProjectDocument) -> String {
    match kind {
        TemplateKind::Standard => standard::render(doc),
        TemplateKind::Minimalist => minimalist::render(doc),
        TemplateKind::Detailed => detailed::render(doc),
        TemplateKind::Modern => modern::render(doc),
        TemplateKind::Corporate => corporate::render(doc),
    }
}
