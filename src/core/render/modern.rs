use super::builder::LineBuilder;
use super::shared::{
    clone_commands, entries, env_var_table, footer_div, license, or_placeholder, shields_badge,
    title,
};
use crate::domain::model::ProjectDocument;

const EXAMPLE_USAGE: &str = "// Modern usage example with async/await
import { createApp } from 'project-name';

const app = createApp({
  theme: 'dark',
  plugins: ['auth', 'router']
});

async function start() {
  await app.initialize();
  app.render('#app');
}

start().catch(console.error);";

const EXAMPLE_STRUCTURE: &str = "project-name/
├── public/          # Static assets
├── src/             # Source code
│   ├── components/  # UI components
│   ├── hooks/       # Custom hooks
│   ├── pages/       # Page components
│   ├── utils/       # Utility functions
│   └── main.js      # Entry point
├── tests/           # Test suite
└── package.json     # Dependencies";

/// Centered header and emoji section markers. The header and the getting
/// started, usage, structure and license sections are always present; the
/// rest only when their field is filled in.
pub fn render(doc: &ProjectDocument) -> String {
    let mut md = LineBuilder::new();
    let project_name = title(doc);
    let username = or_placeholder(&doc.username, "username");

    md.line("<div align=\"center\">");

    let logo = doc.logo.trim();
    if !logo.is_empty() {
        md.paragraph(format!(
            "  <img src=\"{}\" alt=\"logo\" width=\"200\" height=\"auto\" />",
            logo
        ));
    }

    md.line(format!("  <h1>{}</h1>", project_name));

    md.line("  <p>")
        .line("    <img src=\"https://img.shields.io/badge/version-1.0.0-blue?style=for-the-badge\" alt=\"version\" />")
        .line(format!(
            "    <img src=\"https://img.shields.io/github/license/{}/{}?style=for-the-badge\" alt=\"license\" />",
            username, project_name
        ))
        .line("  </p>");

    let concisedesc = doc.concisedesc.trim();
    if !concisedesc.is_empty() {
        md.paragraph(format!("  <p><em>{}</em></p>", concisedesc));
    }

    md.paragraph("</div>");

    let demo_gif = doc.demo_gif.trim();
    if !demo_gif.is_empty() {
        md.blank()
            .line("<div align=\"center\">")
            .line(format!("  <img src=\"{}\" alt=\"demo\" />", demo_gif))
            .line("</div>");
    }

    let overview = doc.overview.trim();
    if !overview.is_empty() {
        md.heading("## 📋 Overview").paragraph(overview);
    }

    let features = entries(&doc.features);
    if !features.is_empty() {
        md.heading("## ✨ Features");
        for feature in features {
            md.paragraph(format!("- 🔸 **{}**", feature));
        }
    }

    let screenshots = entries(&doc.screenshots);
    if !screenshots.is_empty() {
        md.heading("## 📸 Screenshots");
        for (i, url) in screenshots.iter().enumerate() {
            md.paragraph(format!(
                "<img src=\"{}\" alt=\"Screenshot {}\" width=\"400\" />",
                url,
                i + 1
            ));
        }
    }

    md.heading("## 🚀 Getting Started");

    let prerequisites = entries(&doc.prerequisites);
    if !prerequisites.is_empty() {
        md.heading("### Prerequisites");
        md.lines(prerequisites.iter().map(|p| format!("- {}", p)));
    }

    let [clone, cd] = clone_commands(username, doc.project_name.trim(), ("username", "project"));
    md.heading("### Installation").blank();
    md.line("```bash")
        .line(clone)
        .line(cd)
        .line("# Install dependencies")
        .line("npm install  # or yarn install")
        .line("```");

    md.heading("## 📖 Usage").blank();
    let usage_code = doc.usage_code.trim();
    if usage_code.is_empty() {
        md.fenced("javascript", EXAMPLE_USAGE);
    } else {
        md.fenced("", usage_code);
    }

    md.heading("## 📁 Project Structure").blank();
    md.fenced("", or_placeholder(&doc.file_structure, EXAMPLE_STRUCTURE));

    if !doc.envvars.is_empty() {
        md.heading("## ⚙️ Configuration");
        md.heading("### Environment Variables").blank();
        env_var_table(&mut md, &doc.envvars);
    }

    let tech = entries(&doc.tech);
    if !tech.is_empty() {
        md.heading("## 🛠️ Technologies");
        md.paragraph("<div align=\"center\">");
        for technology in tech {
            md.paragraph(shields_badge(technology));
        }
        md.paragraph("</div>");
    }

    md.heading("## 📝 License");
    md.paragraph(format!(
        "This project is licensed under the {} License.",
        license(doc)
    ));

    let contact = doc.contact.trim();
    if !contact.is_empty() {
        md.heading("## 📬 Contact").paragraph(contact);
    }

    footer_div(&mut md);

    md.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_and_version_badge_always_shown() {
        let out = render(&ProjectDocument::default());
        assert!(out.starts_with("<div align=\"center\">\n  <h1>Project Title</h1>"));
        assert!(out.contains("badge/version-1.0.0-blue"));
        assert!(out.contains("## 🚀 Getting Started"));
        assert!(out.contains("git clone https://github.com/username/project.git"));
        assert!(out.contains("## 📝 License"));
    }

    #[test]
    fn test_empty_sub_sections_are_omitted() {
        let out = render(&ProjectDocument::default());
        for heading in [
            "## 📋 Overview",
            "## ✨ Features",
            "## 📸 Screenshots",
            "### Prerequisites",
            "## ⚙️ Configuration",
            "## 🛠️ Technologies",
            "## 📬 Contact",
        ] {
            assert!(!out.contains(heading), "unexpected {}", heading);
        }
    }

    #[test]
    fn test_filled_sections() {
        let doc = ProjectDocument {
            project_name: "Foo".to_string(),
            username: "bar".to_string(),
            logo: "logo.svg".to_string(),
            features: vec!["Fast".to_string()],
            tech: vec!["Rust".to_string()],
            contact: "bar@example.com".to_string(),
            ..Default::default()
        };
        let out = render(&doc);
        assert!(out.contains("<img src=\"logo.svg\" alt=\"logo\""));
        assert!(out.contains("github/license/bar/Foo?style=for-the-badge"));
        assert!(out.contains("## ✨ Features\n\n- 🔸 **Fast**"));
        assert!(out.contains("badge/Rust-%23007ACC.svg?style=for-the-badge&logo=Rust"));
        assert!(out.contains("## 📬 Contact\n\nbar@example.com"));
        assert!(out.ends_with("</div>"));
    }
}
