use md_creator::{CommandRunner, FieldValue, MdError, RenderTarget, TomlConfig};
use tempfile::TempDir;

fn runner_in(temp_dir: &TempDir, settings: &str) -> CommandRunner {
    let mut config = TomlConfig::from_toml_str(settings).unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();
    config.output.output_dir = Some(root.clone());
    CommandRunner::with_roots(config, &root)
}

#[tokio::test]
async fn test_init_applies_configured_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(
        &temp_dir,
        "[defaults]\nlicense = \"Apache-2.0\"\nusername = \"bar\"\n",
    );

    let path = runner.init(None, Some("Detailed"), false).await?;
    assert!(path.ends_with("template.json"));

    let generator = runner.open("template.json").await?;
    assert_eq!(generator.get_field("license"), FieldValue::from("Apache-2.0"));
    assert_eq!(generator.get_field("username"), FieldValue::from("bar"));
    assert_eq!(generator.get_field("template"), FieldValue::from("Detailed"));
    Ok(())
}

#[tokio::test]
async fn test_init_refuses_to_overwrite_without_force() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "");

    runner.init(Some("p.json"), None, false).await?;
    runner.set("p.json", "project_name", &["Foo".to_string()]).await?;

    let err = runner.init(Some("p.json"), None, false).await.unwrap_err();
    assert!(matches!(err, MdError::ConfigError { .. }));
    assert_eq!(
        runner.open("p.json").await?.get_field("project_name"),
        FieldValue::from("Foo")
    );

    runner.init(Some("p.json"), None, true).await?;
    assert_eq!(
        runner.open("p.json").await?.get_field("project_name"),
        FieldValue::from("")
    );
    Ok(())
}

#[tokio::test]
async fn test_init_rejects_unknown_template() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "");

    let err = runner.init(None, Some("Fancy"), false).await.unwrap_err();
    assert!(matches!(err, MdError::InvalidConfigValueError { .. }));
    assert!(!temp_dir.path().join("template.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_set_text_and_list_fields() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "");
    runner.init(None, None, false).await?;

    let words: Vec<String> = ["A", "tiny", "tool"].iter().map(|s| s.to_string()).collect();
    runner.set("template.json", "concisedesc", &words).await?;
    runner.set("template.json", "features", &words).await?;
    runner.set("template.json", "screenshot1", &words).await?;

    let generator = runner.open("template.json").await?;
    assert_eq!(generator.get_field("concisedesc"), FieldValue::from("A tiny tool"));
    assert_eq!(
        generator.get_field("features"),
        FieldValue::from(vec!["A", "tiny", "tool"])
    );
    assert!(!generator.get_data().contains_key("screenshot1"));

    let err = runner.set("template.json", "envvars", &words).await.unwrap_err();
    assert!(matches!(err, MdError::ConfigError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_add_and_remove_list_items() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "");
    runner.init(None, None, false).await?;

    assert!(runner.add("template.json", "features", "Fast").await?);
    assert!(runner.add("template.json", "features", "Small").await?);
    assert!(!runner.add("template.json", "features", "  ").await?);
    assert!(runner.add("template.json", "tech", "rust").await?);
    assert!(!runner.add("template.json", "tech", "Rust").await?);

    let generator = runner.open("template.json").await?;
    assert_eq!(generator.get_field("tech"), FieldValue::from(vec!["Rust"]));

    assert!(runner.remove("template.json", "features", "1").await?);
    assert!(!runner.remove("template.json", "features", "5").await?);
    assert!(runner.remove("template.json", "tech", "rust").await?);

    let generator = runner.open("template.json").await?;
    assert_eq!(generator.get_field("features"), FieldValue::from(vec!["Small"]));
    assert_eq!(generator.get_field("tech"), FieldValue::List(vec![]));

    assert!(runner.add("template.json", "license", "MIT").await.is_err());
    assert!(runner.remove("template.json", "features", "0").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_add_env_rejects_incomplete_records() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "");
    runner.init(None, None, false).await?;

    assert!(runner.add_env("template.json", "API_KEY", "key", "").await?);
    assert!(!runner.add_env("template.json", "", "x", "").await?);

    let generator = runner.open("template.json").await?;
    assert_eq!(generator.document().envvars.len(), 1);

    assert!(runner.remove("template.json", "envvars", "1").await?);
    assert!(runner.open("template.json").await?.document().envvars.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_show_field_and_whole_project() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "");
    runner.init(None, None, false).await?;
    runner.add("template.json", "features", "Fast").await?;

    assert_eq!(runner.show("template.json", Some("license")).await?, "MIT");
    assert_eq!(
        runner.show("template.json", Some("features")).await?,
        "[\n  \"Fast\"\n]"
    );

    let whole: serde_json::Value =
        serde_json::from_str(&runner.show("template.json", None).await?)?;
    assert_eq!(whole["features"][0], "Fast");
    Ok(())
}

#[tokio::test]
async fn test_render_to_file_with_template_override() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let runner = runner_in(&temp_dir, "[output]\nmarkdown_filename = \"OUT.md\"\n");
    runner.init(None, None, false).await?;
    runner.set("template.json", "project_name", &["Foo".to_string()]).await?;

    let location = runner
        .render("template.json", Some("Minimalist"), RenderTarget::File(None))
        .await?;
    assert!(location.ends_with("OUT.md"));

    let written = std::fs::read_to_string(temp_dir.path().join("OUT.md"))?;
    assert!(written.starts_with("# Foo"));
    assert!(!written.contains("## Features"));

    // the override is not saved back
    let generator = runner.open("template.json").await?;
    assert_eq!(generator.get_field("template"), FieldValue::from("Standard"));

    let err = runner
        .render("template.json", Some("Fancy"), RenderTarget::Stdout)
        .await
        .unwrap_err();
    assert!(matches!(err, MdError::InvalidConfigValueError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_commands_on_missing_project_fail() {
    let temp_dir = TempDir::new().unwrap();
    let runner = runner_in(&temp_dir, "");

    let err = runner
        .add("nope.json", "features", "Fast")
        .await
        .unwrap_err();
    assert!(matches!(err, MdError::IoError(_)));
    assert!(!temp_dir.path().join("nope.json").exists());
}

#[tokio::test]
async fn test_init_writes_project_under_project_root_not_output_dir() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_str().unwrap().to_string();
    let docs = temp_dir.path().join("docs");
    let mut config = TomlConfig::default();
    config.output.output_dir = Some(docs.to_str().unwrap().to_string());
    let runner = CommandRunner::with_roots(config, &root);

    let created = runner.init(None, None, false).await?;
    assert_eq!(created, temp_dir.path().join("template.json").display().to_string());
    runner.init(Some("other.json"), None, false).await?;

    runner.set("template.json", "project_name", &["Foo".to_string()]).await?;
    runner.set("other.json", "project_name", &["Bar".to_string()]).await?;
    assert!(runner.init(None, None, false).await.is_err());

    let location = runner
        .render("template.json", None, RenderTarget::File(None))
        .await?;
    assert_eq!(location, docs.join("README.md").display().to_string());
    assert!(std::fs::read_to_string(docs.join("README.md"))?.starts_with("# Foo"));
    assert!(!docs.join("template.json").exists());
    Ok(())
}
