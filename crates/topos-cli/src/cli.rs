use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "topos",
    about = "Topos: apply, compose, and classify typed morphisms over five-valued truth",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How to boot the engine before running a command.
#[derive(Args, Debug, Clone, Default)]
pub struct BootArgs {
    /// Path to an engine config TOML file
    #[arg(long)]
    pub config: Option<String>,

    /// Seed the boot state's `text` value
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered morphisms with their types and metadata
    Spells {
        #[command(flatten)]
        boot: BootArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cast spells in order, reporting content before and after each
    Cast {
        /// Morphism names, applied left to right
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        boot: BootArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a sequence, then query the current truth
    Truth {
        /// Morphism to apply before querying (repeatable)
        #[arg(long)]
        apply: Vec<String>,

        /// Single tag to query: classical, flow, temporal, void, or false
        #[arg(long)]
        tag: Option<String>,

        #[command(flatten)]
        boot: BootArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose two registered morphisms and describe the composite
    Compose {
        /// Applied first
        first: String,

        /// Applied second
        second: String,

        #[command(flatten)]
        boot: BootArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a subset against a whole (comma-separated; `null` is undefined)
    Classify {
        /// Candidate subobject elements
        #[arg(long, value_delimiter = ',')]
        subset: Vec<String>,

        /// Containing set elements
        #[arg(long, value_delimiter = ',')]
        whole: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
