//! pomforge CLI - assemble inheritable parent build descriptors.

mod assemble;
mod catalog;
mod colors;
mod gate;
mod plan;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pomforge_core::{AssemblyConfig, InvocationKind};

#[derive(Parser)]
#[command(name = "pomforge")]
#[command(about = "Assemble inheritable parent build descriptors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the parent descriptor for one module
    Assemble {
        /// Path to the plugin catalog (.json)
        #[arg(long)]
        catalog: String,

        /// Path to the module context (.json)
        #[arg(long)]
        module: String,

        /// Path to an assembly configuration file (.json)
        #[arg(long)]
        config: Option<String>,

        /// Leave the style checker out of the active plugins
        #[arg(long)]
        no_style_checker: bool,

        /// Write the descriptor here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the assembly steps in order
    Plan {
        /// Path to an assembly configuration file (.json)
        #[arg(long)]
        config: Option<String>,

        /// Leave the style checker out of the active plugins
        #[arg(long)]
        no_style_checker: bool,
    },

    /// List the entries of a plugin catalog
    Catalog {
        /// Path to the plugin catalog (.json)
        #[arg(long)]
        catalog: String,
    },

    /// Decide whether a publication may be published
    Gate {
        /// Publication identity being published
        #[arg(long)]
        publication: String,

        /// Target repository kind
        #[arg(long, value_enum, default_value = "local")]
        kind: Kind,

        /// Path to an assembly configuration file (.json)
        #[arg(long)]
        config: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Local,
    Remote,
}

impl From<Kind> for InvocationKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Local => InvocationKind::Local,
            Kind::Remote => InvocationKind::Remote,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Helper to format core errors with recovery hints
    let format_error = |err: anyhow::Error| -> anyhow::Error {
        if let Some(core_err) = err.downcast_ref::<pomforge_core::Error>() {
            anyhow::anyhow!("{}", core_err.with_hint())
        } else if let Some(pomforge_io::FileError::Core(core_err)) =
            err.downcast_ref::<pomforge_io::FileError>()
        {
            anyhow::anyhow!("{}", core_err.with_hint())
        } else {
            err
        }
    };

    match cli.command {
        Commands::Assemble {
            catalog,
            module,
            config,
            no_style_checker,
            output,
        } => {
            let config = resolve_config(config.as_deref(), no_style_checker)?;
            assemble::execute(&catalog, &module, &config, output.as_deref()).map_err(format_error)?;
        }

        Commands::Plan {
            config,
            no_style_checker,
        } => {
            let config = resolve_config(config.as_deref(), no_style_checker)?;
            plan::execute(&config);
        }

        Commands::Catalog { catalog } => {
            catalog::execute(&catalog).map_err(format_error)?;
        }

        Commands::Gate {
            publication,
            kind,
            config,
        } => {
            let config = resolve_config(config.as_deref(), false)?;
            if !gate::execute(&config, &publication, kind.into()) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the configuration file if given, then apply flag overrides.
fn resolve_config(path: Option<&str>, no_style_checker: bool) -> anyhow::Result<AssemblyConfig> {
    let mut config = match path {
        Some(path) => pomforge_io::load_config(path)?,
        None => AssemblyConfig::default(),
    };
    if no_style_checker {
        config.include_style_checker = false;
    }
    Ok(config)
}
