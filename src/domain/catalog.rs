// 技術與授權選項，供 CLI 列出與快速加入

pub const TECH_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Languages",
        &[
            "Python", "JavaScript", "TypeScript", "Java", "C#", "C++", "Go", "Rust", "PHP",
            "Ruby", "Swift", "Kotlin",
        ],
    ),
    (
        "Frontend",
        &[
            "React", "Vue", "Angular", "HTML", "CSS", "Sass", "TailwindCSS", "Bootstrap",
            "Material-UI", "Chakra-UI",
        ],
    ),
    (
        "Backend",
        &[
            "Node", "Django", "Flask", "Express", "FastAPI", "Spring Boot", "ASP.NET",
            "Laravel",
        ],
    ),
    (
        "Database",
        &[
            "MongoDB", "MySQL", "PostgreSQL", "Redis", "SQLite", "Oracle", "SQL Server",
            "Firestore",
        ],
    ),
    (
        "DevOps",
        &[
            "Docker", "Kubernetes", "AWS", "Azure", "GCP", "Git", "GitHub", "GitLab", "Jenkins",
            "Travis CI", "CircleCI",
        ],
    ),
    (
        "Mobile",
        &["React Native", "Flutter", "Android", "iOS", "Xamarin", "Ionic"],
    ),
];

pub const LICENSE_OPTIONS: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "GPL-3.0",
    "BSD-3-Clause",
    "Unlicense",
    "MPL-2.0",
    "CC0-1.0",
    "LGPL-3.0",
    "AGPL-3.0",
    "BSL-1.0",
];

/// Case-insensitive lookup of a technology category.
pub fn technologies_in(category: &str) -> Option<&'static [&'static str]> {
    TECH_CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, techs)| *techs)
}

/// Returns the catalog spelling of `name`, so `rust` is stored as `Rust`.
pub fn canonical_technology(name: &str) -> Option<&'static str> {
    TECH_CATEGORIES
        .iter()
        .flat_map(|(_, techs)| techs.iter())
        .find(|tech| tech.eq_ignore_ascii_case(name.trim()))
        .copied()
}

pub fn is_known_license(license: &str) -> bool {
    LICENSE_OPTIONS.contains(&license)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup_ignores_case() {
        let langs = technologies_in("languages").unwrap();
        assert!(langs.contains(&"Rust"));
        assert!(technologies_in("Gaming").is_none());
    }

    #[test]
    fn test_canonical_technology() {
        assert_eq!(canonical_technology(" postgresql "), Some("PostgreSQL"));
        assert_eq!(canonical_technology("Bevy"), None);
    }

    #[test]
    fn test_license_options() {
        assert!(is_known_license("Apache-2.0"));
        assert!(!is_known_license("apache"));
    }
}
