use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mmpbquiz
/// Beat the VLMs: answer image-grounded questions and see how you score
#[derive(Parser)]
#[command(
    name = "mmpbquiz",
    version = env!("CARGO_PKG_VERSION"),
    about = "Beat the VLMs: an image-grounded multiple-choice quiz with a score breakdown by category",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.mmpbquiz/mmpbquiz.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the question dataset (CSV)
    #[arg(global = true, long = "dataset", value_name = "FILE")]
    pub dataset: Option<String>,

    /// Override the image directory
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (configuration file is ignored)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Validate the dataset and report rows whose image cannot be resolved
    Check {
        #[arg(long = "show-dropped", help = "List every dropped row")]
        show_dropped: bool,
    },

    /// List the questions that passed validation
    List {
        #[arg(long, help = "Only questions of this category")]
        category: Option<String>,

        #[arg(long, help = "Show at most N questions")]
        limit: Option<usize>,
    },

    /// Play the quiz
    Play {
        #[arg(long, help = "Play only the first N questions")]
        limit: Option<usize>,

        #[arg(long = "open-images", help = "Open each image in the system viewer")]
        open_images: bool,

        #[arg(long = "no-probe", help = "Do not check images before showing them")]
        no_probe: bool,

        #[arg(long, value_name = "FILE", help = "Export the final report (absolute path)")]
        export: Option<String>,

        #[arg(
            long,
            value_enum,
            requires = "export",
            help = "Export format (default: from the file extension, else csv)"
        )]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', requires = "export", help = "Overwrite the export file")]
        force: bool,
    },
}
