use clap::Parser;
use md_creator::app::commands::{list_catalog, list_licenses, list_templates};
use md_creator::utils::error::{ErrorSeverity, MdError};
use md_creator::utils::{logger, validation::Validate};
use md_creator::{CliConfig, Command, CommandRunner, RenderTarget, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> Result<(), MdError> {
    let config = TomlConfig::load(cli.config.as_deref())?;
    config.validate()?;
    let runner = CommandRunner::new(config);

    match cli.command {
        Command::Init {
            output,
            template,
            force,
        } => {
            let path = runner
                .init(output.as_deref(), template.as_deref(), force)
                .await?;
            println!("✅ Created {}", path);
        }
        Command::Set {
            file,
            field,
            values,
        } => {
            runner.set(&file, &field, &values).await?;
        }
        Command::Add { file, field, item } => {
            if !runner.add(&file, &field, &item).await? {
                tracing::warn!("⚠️ '{}' was not added to {} (blank or already listed)", item, field);
            }
        }
        Command::Remove { file, field, item } => {
            if !runner.remove(&file, &field, &item).await? {
                tracing::warn!("⚠️ Nothing to remove for '{}' in {}", item, field);
            }
        }
        Command::AddEnv {
            file,
            name,
            desc,
            value,
        } => {
            if !runner.add_env(&file, &name, &desc, &value).await? {
                tracing::warn!("⚠️ Environment variables need both a name and a description");
            }
        }
        Command::Show { file, field } => {
            println!("{}", runner.show(&file, field.as_deref()).await?);
        }
        Command::Render {
            file,
            template,
            output,
            clipboard,
        } => {
            let target = match (output, clipboard) {
                (Some(path), _) => RenderTarget::File(path),
                (None, true) => RenderTarget::Clipboard,
                (None, false) => RenderTarget::Stdout,
            };
            let to_stdout = target == RenderTarget::Stdout;
            let location = runner.render(&file, template.as_deref(), target).await?;
            if !to_stdout {
                println!("✅ README written to {}", location);
            }
        }
        Command::Templates => println!("{}", list_templates()),
        Command::Catalog { category } => println!("{}", list_catalog(category.as_deref())?),
        Command::Licenses => println!("{}", list_licenses()),
    }

    Ok(())
}
