use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "md-creator")]
#[command(about = "Generate README files from project metadata")]
pub struct CliConfig {
    /// Path to an md-creator.toml settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a new, empty project template
    Init {
        /// Project file to create, relative to the working directory (defaults to the configured template filename)
        #[arg(short, long)]
        output: Option<String>,

        /// Presentation template for the new project
        #[arg(short, long)]
        template: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Replace a field: scalar fields take the joined values, list fields take each value
    Set {
        file: String,
        field: String,
        #[arg(num_args = 0..)]
        values: Vec<String>,
    },

    /// Append an item to features, Prerequisites, tech or screenshots
    Add {
        file: String,
        field: String,
        item: String,
    },

    /// Remove an item from a list field by position (1-based) or a technology by name
    Remove {
        file: String,
        field: String,
        item: String,
    },

    /// Add an environment variable row
    AddEnv {
        file: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        desc: String,
        #[arg(long, default_value = "")]
        value: String,
    },

    /// Print the value of a field, or the whole project as JSON
    Show {
        file: String,
        field: Option<String>,
    },

    /// Render the README
    Render {
        file: String,

        /// Override the template stored in the project
        #[arg(short, long)]
        template: Option<String>,

        /// Write to a file instead of stdout (the configured README name when no path is given)
        #[arg(short, long, num_args = 0..=1, conflicts_with = "clipboard")]
        output: Option<Option<String>>,

        /// Copy the result to the system clipboard
        #[arg(long)]
        clipboard: bool,
    },

    /// List the available templates
    Templates,

    /// List technology suggestions
    Catalog {
        #[arg(long)]
        category: Option<String>,
    },

    /// List common licenses
    Licenses,
}
