use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use decksync_core::UpdateMode;

#[derive(Parser)]
#[command(name = "decksync")]
#[command(about = "Manage which Notion pages sync into which decks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit the page to deck table
    Pages {
        #[command(subcommand)]
        command: PagesCommands,
    },
    /// Show or change the auto sync interval
    AutoSync {
        #[command(subcommand)]
        command: AutoSyncCommands,
    },
    /// Set Notion integration credentials
    Notion {
        #[command(subcommand)]
        command: NotionCommands,
    },
    /// Validate the stored configuration without writing it
    Check,
    /// Save the configuration and request a sync now
    Sync,
    /// Log in or out of the sync account
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PagesCommands {
    /// List configured pages
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a page (recursive, incremental by default)
    Add {
        /// Notion page id, with or without '-'
        page_id: String,
        /// Target deck, levels separated by '::'
        deck: String,
    },
    /// Remove a page by row number
    Remove {
        /// Row number as shown by `pages list`
        row: Option<usize>,
    },
    /// Change the flags of one row
    Set {
        /// Row number as shown by `pages list`
        row: usize,
        /// Update mode for the row
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Include descendant pages
        #[arg(long)]
        recursive: Option<bool>,
    },
    /// Switch every row to one update mode
    SelectAll {
        #[arg(value_enum)]
        mode: ColumnArg,
    },
    /// Sort rows by target deck
    Sort,
}

#[derive(Subcommand)]
pub enum AutoSyncCommands {
    /// Show the auto sync state
    Status,
    /// Turn auto sync on
    Enable {
        /// Minutes between syncs (keeps the last value when omitted)
        #[arg(long, value_name = "MINUTES")]
        minutes: Option<String>,
    },
    /// Turn auto sync off
    Disable,
}

#[derive(Subcommand)]
pub enum NotionCommands {
    /// Update the integration token and/or namespace
    Set {
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
        #[arg(long, value_name = "NAMESPACE")]
        namespace: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password
    Login {
        #[arg(long, value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Log out and forget stored credentials
    Logout,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    Absolute,
    Incremental,
    None,
}

impl ModeArg {
    pub const fn update_mode(self) -> Option<UpdateMode> {
        match self {
            Self::Absolute => Some(UpdateMode::Absolute),
            Self::Incremental => Some(UpdateMode::Incremental),
            Self::None => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColumnArg {
    Absolute,
    Incremental,
}

impl From<ColumnArg> for UpdateMode {
    fn from(value: ColumnArg) -> Self {
        match value {
            ColumnArg::Absolute => Self::Absolute,
            ColumnArg::Incremental => Self::Incremental,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
