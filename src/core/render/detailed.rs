use super::builder::LineBuilder;
use super::shared::{clone_commands, entries, footer_markdown, license, or_placeholder, title};
use crate::domain::model::ProjectDocument;

const EXAMPLE_USAGE: &str = "// Step 1: Import the library
const { Client } = require('project-name');

// Step 2: Configure the client
const client = new Client({
  apiKey: process.env.API_KEY,
  timeout: 5000,
  debug: process.env.NODE_ENV === 'development'
});

// Step 3: Use the client
async function main() {
  try {
    const result = await client.getData();
    console.log('Success:', result);
  } catch (error) {
    console.error('Error:', error.message);
  }
}

main();";

const EXAMPLE_STRUCTURE: &str = "project-name/
├── bin/                       # Executable scripts
├── config/                    # Configuration files
│   ├── default.js             # Default configuration
│   └── production.js          # Production overrides
├── src/                       # Source code
│   ├── api/                   # API endpoints
│   ├── models/                # Data models
│   ├── services/              # Business logic
│   ├── utils/                 # Utility functions
│   └── index.js               # Entry point
├── tests/                     # Test files
│   ├── unit/                  # Unit tests
│   ├── integration/           # Integration tests
│   └── fixtures/              # Test fixtures
├── .dockerignore              # Docker ignore file
├── .env.example               # Example environment variables
├── .eslintrc.js               # ESLint configuration
├── .gitignore                 # Git ignore file
├── Dockerfile                 # Docker configuration
├── docker-compose.yml         # Docker Compose configuration
├── LICENSE                    # License file
├── package.json               # Dependencies and scripts
└── README.md                  # This documentation";

/// Sections in render order as (anchor, title). Screenshots is the only
/// section that can be absent.
fn table_of_contents(has_screenshots: bool) -> Vec<(&'static str, &'static str)> {
    let mut toc = vec![("about", "About"), ("features", "Features")];
    if has_screenshots {
        toc.push(("screenshots", "Screenshots"));
    }
    toc.extend([
        ("installation", "Installation"),
        ("usage", "Usage"),
        ("project-structure", "Project Structure"),
        ("configuration", "Configuration"),
        ("technologies", "Technologies"),
        ("license", "License"),
        ("contact", "Contact"),
    ]);
    toc
}

/// Every section is present; empty fields get generic filler text.
pub fn render(doc: &ProjectDocument) -> String {
    let mut md = LineBuilder::new();
    let project_name = title(doc);
    let username = or_placeholder(&doc.username, "username");
    let screenshots = entries(&doc.screenshots);

    md.line(format!("# {}", project_name));

    let repo = format!("https://github.com/{}/{}", username, project_name);
    let slug = format!("{}/{}", username, project_name);
    md.blank()
        .line(format!(
            "[![License](https://img.shields.io/github/license/{slug})]({repo}/blob/main/LICENSE)"
        ))
        .line(format!(
            "[![Issues](https://img.shields.io/github/issues/{slug})]({repo}/issues)"
        ))
        .line(format!(
            "[![Pull Requests](https://img.shields.io/github/issues-pr/{slug})]({repo}/pulls)"
        ));

    md.heading("## Table of Contents").blank();
    md.lines(
        table_of_contents(!screenshots.is_empty())
            .into_iter()
            .map(|(anchor, title)| format!("- [{}](#{})", title, anchor)),
    );

    md.heading("## About");
    let concisedesc = doc.concisedesc.trim();
    let overview = doc.overview.trim();
    if !concisedesc.is_empty() {
        md.paragraph(format!("**{}**", concisedesc));
    }
    if !overview.is_empty() {
        md.paragraph(overview);
    }
    if concisedesc.is_empty() && overview.is_empty() {
        md.paragraph("Detailed description of the project would go here.");
    }

    let demo_gif = doc.demo_gif.trim();
    if !demo_gif.is_empty() {
        md.heading("### Demo").paragraph(format!("![Demo]({})", demo_gif));
    }

    md.heading("## Features");
    let features = entries(&doc.features);
    if features.is_empty() {
        md.paragraph("Detailed description of the project features would go here.");
    }
    for feature in features {
        md.heading(format!("### {}", feature))
            .paragraph("Detailed description of this feature would go here.");
    }

    if !screenshots.is_empty() {
        md.heading("## Screenshots");
        for (i, url) in screenshots.iter().enumerate() {
            md.heading(format!("### Screenshot {}", i + 1))
                .paragraph(format!("![Screenshot {}]({})", i + 1, url))
                .paragraph("Description of what the screenshot shows.");
        }
    }

    md.heading("## Installation");
    md.heading("### Prerequisites");
    let prerequisites = entries(&doc.prerequisites);
    if prerequisites.is_empty() {
        md.line("- List prerequisite 1").line("- List prerequisite 2");
    } else {
        md.lines(prerequisites.iter().map(|p| format!("- {}", p)));
    }

    let [clone, cd] = clone_commands(username, doc.project_name.trim(), ("username", "project"));
    md.heading("### Step-by-step installation").blank();
    md.line("```bash")
        .line("# Clone the repository")
        .line(clone)
        .blank()
        .line("# Navigate to the project directory")
        .line(cd)
        .blank()
        .lines(["# Install dependencies", "npm install", "# or", "yarn install", "```"]);

    md.heading("## Usage").blank();
    let usage_code = doc.usage_code.trim();
    if usage_code.is_empty() {
        md.fenced("javascript", EXAMPLE_USAGE);
        md.paragraph("For more advanced usage, refer to the [documentation](#documentation).");
    } else {
        md.fenced("", usage_code);
    }

    md.heading("## Project Structure").blank();
    let file_structure = doc.file_structure.trim();
    if file_structure.is_empty() {
        md.fenced("", EXAMPLE_STRUCTURE);
        md.paragraph("This structure follows industry best practices and supports scalability, maintainability, and testing.");
    } else {
        md.fenced("", file_structure);
    }

    md.heading("## Configuration");
    md.heading("### Environment Variables");
    if doc.envvars.is_empty() {
        md.paragraph("List of environment variables would go here.");
    } else {
        md.blank()
            .line("| Variable | Description | Default | Required |")
            .line("|----------|-------------|---------|----------|");
        md.lines(doc.envvars.iter().map(|var| {
            format!(
                "| `{}` | {} | `{}` | Yes/No |",
                var.name, var.desc, var.value
            )
        }));
    }

    md.heading("## Technologies");
    let tech = entries(&doc.tech);
    if tech.is_empty() {
        md.paragraph("List of technologies used in the project would go here.");
    }
    for technology in tech {
        md.paragraph(format!(
            "- **{0}**: Description of how {0} is used in the project.",
            technology
        ));
    }

    md.heading("## License");
    md.paragraph(format!(
        "This project is licensed under the {} License - see the [LICENSE](LICENSE) file for details.",
        license(doc)
    ));

    md.heading("## Contact");
    md.paragraph(or_placeholder(
        &doc.contact,
        "Provide your contact information here.",
    ));

    footer_markdown(&mut md);

    md.finish()
}
