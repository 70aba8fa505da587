use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prompt_companion::cli;
use prompt_companion::cli::compose::FieldArgs;

#[derive(Parser)]
#[command(name = "prompt-companion", version)]
#[command(about = "Build structured LLM prompts and lint their quality", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ./prompt-companion.toml or ~/.config/prompt-companion/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a prompt from the five template fields
    Compose {
        /// Who the model should be (e.g. "senior data analyst")
        #[arg(long)]
        role: Option<String>,

        /// What the model should do
        #[arg(long)]
        goal: Option<String>,

        /// Background the model needs
        #[arg(long)]
        context: Option<String>,

        /// Limits on the answer
        #[arg(long)]
        constraints: Option<String>,

        /// Shape of the answer
        #[arg(long)]
        output_format: Option<String>,

        /// Role preset supplying the default role text
        #[arg(long)]
        preset: Option<String>,

        /// Print fields and prompt as JSON
        #[arg(long)]
        json: bool,

        /// Do not remember the prompt as the last generated one
        #[arg(long)]
        no_save: bool,
    },

    /// Split a prompt back into its five fields
    Parse {
        /// Prompt file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        #[arg(long)]
        json: bool,
    },

    /// Check a prompt against the quality checklist
    Lint {
        /// Prompt file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        #[arg(long)]
        json: bool,
    },

    /// List role presets
    Presets {
        #[arg(long)]
        json: bool,
    },

    /// List prompt templates
    Templates {
        #[arg(long)]
        json: bool,
    },

    /// Load a template into the editor fields
    Template {
        /// Template title (case-insensitive)
        title: String,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        no_save: bool,
    },

    /// Show good vs bad prompt examples
    Examples {
        #[arg(long)]
        json: bool,
    },

    /// Show the last generated prompt
    Last {
        /// Forget the stored prompt instead
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so prompts on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Commands::Compose {
            role,
            goal,
            context,
            constraints,
            output_format,
            preset,
            json,
            no_save,
        } => {
            let fields = FieldArgs {
                role,
                goal,
                context,
                constraints,
                output_format,
            };
            cli::compose::run(fields, preset, json, no_save, config)?;
        }
        Commands::Parse { input, json } => cli::parse::run(&input, json)?,
        Commands::Lint { input, json } => cli::lint::run(&input, json, config)?,
        Commands::Presets { json } => cli::catalog::presets(json, config)?,
        Commands::Templates { json } => cli::catalog::templates(json, config)?,
        Commands::Template {
            title,
            json,
            no_save,
        } => cli::catalog::use_template(&title, json, no_save, config)?,
        Commands::Examples { json } => cli::catalog::examples(json, config)?,
        Commands::Last { clear } => cli::last::run(clear, config)?,
    }

    Ok(())
}
