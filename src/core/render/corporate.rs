use super::builder::LineBuilder;
use super::shared::{clone_commands, entries, or_placeholder, title, REPOSITORY_URL};
use crate::domain::model::ProjectDocument;

fn screenshot_caption(project_name: &str, index: usize) -> String {
    match index {
        0 => format!("{} Interface", project_name),
        1 => format!("{} Dashboard", project_name),
        n => format!("{} Screenshot {}", project_name, n + 1),
    }
}

/// Business-toned headings. Sections backed by an empty field are left out;
/// licensing and support contact always render.
pub fn render(doc: &ProjectDocument) -> String {
    let mut md = LineBuilder::new();
    let project_name = title(doc);

    md.line(format!("# {}", project_name));
    md.paragraph("---");

    let concisedesc = doc.concisedesc.trim();
    if !concisedesc.is_empty() {
        md.heading("## Executive Summary").paragraph(concisedesc);
    }

    let overview = doc.overview.trim();
    if !overview.is_empty() {
        md.heading("## Business Overview").paragraph(overview);
    }

    let features = entries(&doc.features);
    if !features.is_empty() {
        md.heading("## Product Capabilities");
        for (i, feature) in features.iter().enumerate() {
            md.heading(format!("### {}. {}", i + 1, feature));
        }
    }

    let screenshots = entries(&doc.screenshots);
    if !screenshots.is_empty() {
        md.heading("## Product Screenshots");
        for (i, url) in screenshots.iter().enumerate() {
            md.paragraph(format!("![{}]({})", screenshot_caption(project_name, i), url));
        }
    }

    let tech = entries(&doc.tech);
    let file_structure = doc.file_structure.trim();
    if !tech.is_empty() || !file_structure.is_empty() {
        md.heading("## Technical Implementation");

        if !tech.is_empty() {
            md.heading("### Technologies Utilized").blank();
            md.line("| Technology | Purpose |").line("|------------|---------|");
            md.lines(
                tech.iter()
                    .map(|t| format!("| {0} | Primary functionality for {0} |", t)),
            );
        }

        if !file_structure.is_empty() {
            md.heading("### Solution Architecture").blank();
            md.fenced("", file_structure);
        }
    }

    md.heading("## Implementation Guide");

    let username = or_placeholder(&doc.username, "organization");
    let [clone, cd] =
        clone_commands(username, doc.project_name.trim(), ("organization", "project"));
    md.heading("### Deployment Procedure").blank();
    md.line("```bash")
        .line(clone)
        .line(cd)
        .line("# Installation steps")
        .line("```");

    let usage_code = doc.usage_code.trim();
    if !usage_code.is_empty() {
        md.heading("### Operation Instructions").blank();
        md.fenced("", usage_code);
    }

    if !doc.envvars.is_empty() {
        md.heading("### Configuration Parameters").blank();
        md.line("| Parameter | Description | Default Value |")
            .line("|-----------|-------------|---------------|");
        md.lines(
            doc.envvars
                .iter()
                .map(|var| format!("| {} | {} | {} |", var.name, var.desc, var.value)),
        );
    }

    md.heading("## Licensing Information");
    md.paragraph(format!(
        "This software is provided under {} license agreement.",
        or_placeholder(&doc.license, "Commercial")
    ));

    md.heading("## Support Contact");
    md.paragraph(or_placeholder(
        &doc.contact,
        "For technical support, please contact our support team.",
    ));

    md.heading("---");
    md.paragraph("*This document is confidential and proprietary.*");
    md.paragraph(format!("Generated with [MdCreator]({})", REPOSITORY_URL));

    md.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EnvVar;

    #[test]
    fn test_empty_document_keeps_license_and_contact() {
        let out = render(&ProjectDocument::default());
        assert!(out.starts_with("# Project Title\n\n---"));
        assert!(out.contains("## Licensing Information\n\nThis software is provided under MIT license agreement."));
        assert!(out.contains("For technical support, please contact our support team."));
        assert!(out.contains("git clone https://github.com/organization/project.git"));
        for heading in [
            "## Executive Summary",
            "## Business Overview",
            "## Product Capabilities",
            "## Product Screenshots",
            "## Technical Implementation",
            "### Operation Instructions",
            "### Configuration Parameters",
        ] {
            assert!(!out.contains(heading), "unexpected {}", heading);
        }
    }

    #[test]
    fn test_blank_license_uses_commercial_wording() {
        let doc = ProjectDocument {
            license: "  ".to_string(),
            ..Default::default()
        };
        assert!(render(&doc).contains("provided under Commercial license agreement"));
    }

    #[test]
    fn test_business_sections() {
        let doc = ProjectDocument {
            project_name: "Ledger".to_string(),
            concisedesc: "Accounting for teams".to_string(),
            features: vec!["Reports".to_string(), "Audit".to_string()],
            screenshots: vec!["a.png".to_string(), "b.png".to_string(), "c.png".to_string()],
            file_structure: "ledger/".to_string(),
            envvars: vec![EnvVar {
                name: "DB_URL".to_string(),
                desc: "Database".to_string(),
                value: "sqlite://".to_string(),
            }],
            ..Default::default()
        };
        let out = render(&doc);
        assert!(out.contains("## Executive Summary\n\nAccounting for teams"));
        assert!(out.contains("### 1. Reports"));
        assert!(out.contains("### 2. Audit"));
        assert!(out.contains("![Ledger Interface](a.png)"));
        assert!(out.contains("![Ledger Dashboard](b.png)"));
        assert!(out.contains("![Ledger Screenshot 3](c.png)"));
        assert!(out.contains("### Solution Architecture\n\n```\nledger/\n```"));
        assert!(!out.contains("### Technologies Utilized"));
        assert!(out.contains("| DB_URL | Database | sqlite:// |"));
    }
}
