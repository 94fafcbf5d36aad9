use super::builder::LineBuilder;
use super::shared::{clone_commands, entries, footer_markdown, license, or_placeholder, title};
use crate::domain::model::ProjectDocument;

/// Sections backed by an empty field are left out. No badges, no directory
/// structure and no contributing section.
pub fn render(doc: &ProjectDocument) -> String {
    let mut md = LineBuilder::new();

    md.line(format!("# {}", title(doc)));

    let concisedesc = doc.concisedesc.trim();
    if !concisedesc.is_empty() {
        md.paragraph(format!("> {}", concisedesc));
    }

    let overview = doc.overview.trim();
    if !overview.is_empty() {
        md.paragraph(overview);
    }

    let demo_gif = doc.demo_gif.trim();
    if !demo_gif.is_empty() {
        md.paragraph(format!("![Demo]({})", demo_gif));
    }

    let features = entries(&doc.features);
    if !features.is_empty() {
        md.heading("## Features");
        md.lines(features.iter().map(|f| format!("- {}", f)));
    }

    let screenshots = entries(&doc.screenshots);
    if !screenshots.is_empty() {
        md.heading("## Screenshots");
        for (i, url) in screenshots.iter().enumerate() {
            md.line(format!("![Screenshot {}]({})", i + 1, url));
        }
    }

    let username = or_placeholder(&doc.username, "username");
    let [clone, cd] = clone_commands(username, doc.project_name.trim(), ("username", "project"));
    md.heading("## Installation");
    md.line("```bash").line(clone).line(cd).line("```");

    let usage_code = doc.usage_code.trim();
    if !usage_code.is_empty() {
        md.heading("## Usage").blank();
        md.fenced("", usage_code);
    }

    md.heading("## License").line(license(doc));

    footer_markdown(&mut md);

    md.finish()
}
