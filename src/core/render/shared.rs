use super::builder::LineBuilder;
use crate::domain::model::{EnvVar, ProjectDocument, DEFAULT_LICENSE};

pub const PROJECT_TITLE: &str = "Project Title";
pub const REPOSITORY_URL: &str = "https://github.com/kushal1o1/MDFileCreator";

pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Non-blank list entries, trimmed, in insertion order.
pub fn entries(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn title(doc: &ProjectDocument) -> &str {
    or_placeholder(&doc.project_name, PROJECT_TITLE)
}

pub fn license(doc: &ProjectDocument) -> &str {
    or_placeholder(&doc.license, DEFAULT_LICENSE)
}

/// `git clone` plus `cd` for the repository. Without a project name both
/// owner and repository come from `placeholder`, never a mix of the two.
pub fn clone_commands(
    username: &str,
    project_name: &str,
    placeholder: (&str, &str),
) -> [String; 2] {
    let (owner, repo) = if project_name.is_empty() {
        placeholder
    } else {
        (username, project_name)
    };
    [
        format!("git clone https://github.com/{}/{}.git", owner, repo),
        format!("cd {}", repo),
    ]
}

/// The five GitHub statistic badges of the Standard header.
pub fn github_badges(md: &mut LineBuilder, username: &str, project_name: &str) {
    let repo = format!("https://github.com/{}/{}", username, project_name);
    let slug = format!("{}/{}", username, project_name);
    md.blank().line("<p align=\"center\">").lines([
        format!(
            "  <a href=\"{repo}/stargazers\"><img src=\"https://img.shields.io/github/stars/{slug}\" alt=\"Stars Badge\"/></a>"
        ),
        format!(
            "  <a href=\"{repo}/network/members\"><img src=\"https://img.shields.io/github/forks/{slug}\" alt=\"Forks Badge\"/></a>"
        ),
        format!(
            "  <a href=\"{repo}/pulls\"><img src=\"https://img.shields.io/github/issues-pr/{slug}\" alt=\"Pull Requests Badge\"/></a>"
        ),
        format!(
            "  <a href=\"{repo}/issues\"><img src=\"https://img.shields.io/github/issues/{slug}\" alt=\"Issues Badge\"/></a>"
        ),
        format!(
            "  <a href=\"{repo}/graphs/contributors\"><img alt=\"GitHub contributors\" src=\"https://img.shields.io/github/contributors/{slug}?color=2b9348\"></a>"
        ),
    ]);
    md.line("</p>");
}

pub fn shields_badge(technology: &str) -> String {
    format!(
        "<img src=\"https://img.shields.io/badge/{tech}-%23007ACC.svg?style=for-the-badge&logo={tech}&logoColor=white\" alt=\"{tech}\" />",
        tech = technology
    )
}

pub fn skill_icon(technology: &str) -> String {
    format!(
        "<img src=\"https://skillicons.dev/icons?i={}\">",
        technology.to_lowercase()
    )
}

pub fn env_var_row(var: &EnvVar) -> String {
    format!("| `{}` | {} | `{}` |", var.name, var.desc, var.value)
}

pub fn env_var_table(md: &mut LineBuilder, vars: &[EnvVar]) {
    md.line("| Variable | Description | Default |")
        .line("|----------|-------------|---------|")
        .lines(vars.iter().map(env_var_row));
}

/// Centered `<p>` footer of the Standard template.
pub fn footer_paragraph(md: &mut LineBuilder) {
    md.blank()
        .line("---")
        .blank()
        .line("<p align=\"center\">")
        .line(format!(
            "  Made with ❤️ by <a href=\"{}\">MdCreator</a>",
            REPOSITORY_URL
        ))
        .line("</p>");
}

/// Centered `<div>` footer of the Modern template.
pub fn footer_div(md: &mut LineBuilder) {
    md.blank()
        .line("---")
        .blank()
        .line("<div align=\"center\">")
        .line(format!(
            "  <p>Made with ❤️ by <a href=\"{}\">MdCreator</a></p>",
            REPOSITORY_URL
        ))
        .line("</div>");
}

/// Plain Markdown footer.
pub fn footer_markdown(md: &mut LineBuilder) {
    md.blank()
        .line("---")
        .blank()
        .line(format!("Made with ❤️ by [MdCreator]({})", REPOSITORY_URL));
}
