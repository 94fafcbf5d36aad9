use super::builder::LineBuilder;
use super::shared::{
    clone_commands, entries, env_var_table, footer_paragraph, github_badges, license,
    or_placeholder, skill_icon, title,
};
use crate::domain::model::ProjectDocument;

const NAV_LINKS: [(&str, &str); 12] = [
    ("features", "Features"),
    ("demo", "Demo"),
    ("installation", "Installation"),
    ("usage", "Usage"),
    ("configuration", "Configuration"),
    ("api-reference", "API Reference"),
    ("documentation", "Documentation"),
    ("roadmap", "Roadmap"),
    ("contributing", "Contributing"),
    ("license", "License"),
    ("contact", "Contact"),
    ("acknowledgments", "Acknowledgments"),
];

const EXAMPLE_USAGE: &str = "// Import the module
import { MyComponent } from 'my-library';

// Initialize
const instance = new MyComponent({
  name: 'Example',
  options: {
    debug: true,
    timeout: 1000
  }
});

// Use the functionality
instance.doSomething();
const result = instance.processData([1, 2, 3]);
console.log(result);";

const EXAMPLE_CONFIG: &str = "{
  \"port\": 3000,
  \"logLevel\": \"info\"
}";

const EXAMPLE_STRUCTURE: &str = "project-name/
├── .github/           # GitHub specific files (workflows, templates)
├── docs/              # Documentation files
├── src/               # Source code
│   ├── components/    # UI components (for frontend projects)
│   ├── utils/         # Utility functions
│   └── index.js       # Entry point
├── tests/             # Test files
├── .gitignore         # Git ignore file
├── LICENSE            # License file
├── package.json       # Project dependencies and scripts
└── README.md          # Project documentation (this file)";

/// Every section is rendered; empty fields get example content.
pub fn render(doc: &ProjectDocument) -> String {
    let mut md = LineBuilder::new();
    let project_name = doc.project_name.trim();
    let username = or_placeholder(&doc.username, "username");

    md.line(format!("# {}", title(doc)));

    md.blank()
        .line("<p align=\"center\">")
        .line(format!(
            "  <img src=\"{}\" alt=\"Project Logo\" width=\"200\" height=\"200\">",
            or_placeholder(&doc.logo, "path/to/logo.png")
        ))
        .line("</p>");

    if !project_name.is_empty() {
        github_badges(&mut md, username, project_name);
    }

    let concisedesc = doc.concisedesc.trim();
    if !concisedesc.is_empty() {
        md.blank()
            .line("<p align=\"center\">")
            .line(format!("  <b>{}</b>", concisedesc))
            .line("</p>");
    }

    md.blank().line("<p align=\"center\">");
    for (i, (anchor, label)) in NAV_LINKS.iter().enumerate() {
        let separator = if i + 1 < NAV_LINKS.len() { " •" } else { "" };
        md.line(format!("  <a href=\"#{}\">{}</a>{}", anchor, label, separator));
    }
    md.line("</p>");

    md.blank().heading("## Overview").blank();
    md.line(or_placeholder(&doc.overview, "Add your project overview here..."));

    md.heading("## Features").blank();
    let features = entries(&doc.features);
    if features.is_empty() {
        md.lines([
            "- **Feature 1**: Description",
            "- **Feature 2**: Description",
            "- **Feature 3**: Description",
        ]);
    } else {
        md.lines(features.iter().map(|f| format!("- **{}**", f)));
    }

    md.blank().heading("## Demo").blank();
    md.line("<p align=\"center\">")
        .line(format!(
            "  <img src=\"{}\" alt=\"Demo\" width=\"600\">",
            or_placeholder(&doc.demo_gif, "path/to/demo.gif")
        ))
        .line("</p>");

    md.heading("## Screenshot");
    let screenshots = entries(&doc.screenshots);
    if screenshots.is_empty() {
        md.line("![Screenshot 1](path/to/screenshot1.png)")
            .line("![Screenshot 2](path/to/screenshot2.png)");
    } else {
        for (i, url) in screenshots.iter().enumerate() {
            md.line(format!("![Screenshot {}]({})", i + 1, url));
        }
    }

    let [clone, cd] = clone_commands(username, project_name, ("username", "project-name"));
    md.heading("## Installation").line("```bash");
    md.line("# Clone the repository")
        .line(clone)
        .blank()
        .line("# Navigate to the project directory")
        .line(cd)
        .blank()
        .lines([
            "# Install dependencies",
            "npm install",
            "# or",
            "yarn install",
            "# or",
            "pip install -r requirements.txt",
            "```",
        ]);

    md.heading("### Prerequisites");
    let prerequisites = entries(&doc.prerequisites);
    if prerequisites.is_empty() {
        md.line("- **Node.js**: v14.0 or higher")
            .line("- **npm/yarn**: Latest version recommended");
    } else {
        md.lines(prerequisites.iter().map(|p| format!("- **{}**", p)));
    }

    md.heading("## Usage").blank();
    md.fenced("javascript", or_placeholder(&doc.usage_code, EXAMPLE_USAGE));

    md.heading("## Configuration").blank();
    md.line("### Configuration File").blank();
    md.line("Create a `config.json` file in the root directory with the following structure:")
        .blank();
    md.fenced("json", EXAMPLE_CONFIG);

    md.heading("### Environment Variables").blank();
    if doc.envvars.is_empty() {
        md.line("| Variable | Description | Default |")
            .line("|----------|-------------|---------|")
            .line("| `API_KEY` | Your API key | `null` |")
            .line("| `DEBUG` | Enable debug mode | `false` |");
    } else {
        env_var_table(&mut md, &doc.envvars);
    }

    md.heading("## Directory Structure").blank();
    md.fenced("", or_placeholder(&doc.file_structure, EXAMPLE_STRUCTURE));

    md.heading("## Technologies Used").blank();
    md.line("<p align=\"center\">");
    let tech = entries(&doc.tech);
    if tech.is_empty() {
        md.lines([
            "<img src=\"https://img.shields.io/badge/JavaScript-%23F7DF1E.svg?style=for-the-badge&logo=javascript&logoColor=black\" alt=\"JavaScript\">",
            "<img src=\"https://img.shields.io/badge/TypeScript-%23007ACC.svg?style=for-the-badge&logo=typescript&logoColor=white\" alt=\"TypeScript\">",
            "<img src=\"https://img.shields.io/badge/React-%2361DAFB.svg?style=for-the-badge&logo=react&logoColor=black\" alt=\"React\">",
        ]);
    } else {
        md.lines(tech.iter().map(|t| skill_icon(t)));
    }
    md.line("</p>");

    md.heading("## Contributing").blank();
    md.line("Contributions are what make the open source community such an amazing place to learn, inspire, and create. Any contributions you make are **greatly appreciated**.")
        .blank()
        .lines([
            "1. Fork the Project",
            "2. Create your Feature Branch (`git checkout -b feature/AmazingFeature`)",
            "3. Commit your Changes (`git commit -m 'Add some AmazingFeature'`)",
            "4. Push to the Branch (`git push origin feature/AmazingFeature`)",
            "5. Open a Pull Request",
        ])
        .blank()
        .line("Please make sure to update tests as appropriate and adhere to the [code of conduct](CODE_OF_CONDUCT.md).");

    md.heading("## License").blank();
    md.line(format!("This project is licensed under the {} License.", license(doc)));

    md.heading("## Contact").blank();
    md.line(or_placeholder(
        &doc.contact,
        "Your Name - [@your_twitter](https://twitter.com/your_twitter) - your_email@example.com",
    ));

    footer_paragraph(&mut md);

    md.finish()
}
