/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

const AFTER_HELP: &str = "\
Examples:
  $ sakari config set clientId <your-client-id>
  $ sakari config set clientSecret <your-client-secret>
  $ sakari config set accountId <your-account-id>
  $ sakari messages send --to \"+12345678900\" --from \"+10987654321\" --body \"Hello World\"
  $ sakari messages list --limit 50
  $ sakari contacts list --limit 50
  $ sakari accounts list

API Documentation:
  https://developers.sakari.io/

Get API Credentials:
  https://hub.sakari.io/";

/// sakari: send SMS and manage contacts through the Sakari API.
#[derive(Debug, Parser)]
#[command(
    name = "sakari",
    about = "Sakari API CLI - SMS messaging platform",
    version,
    disable_version_flag = true,
    arg_required_else_help = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Print API responses as pretty JSON instead of a table.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress logging, spinners and status lines.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file to use instead of the per-user default.
    #[arg(long, global = true, env = "SAKARI_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Manage SMS messages.
    #[command(subcommand)]
    Messages(MessagesCommand),
    /// Manage contacts.
    #[command(subcommand)]
    Contacts(ContactsCommand),
    /// Manage accounts.
    #[command(subcommand)]
    Accounts(AccountsCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set a configuration value.
    Set {
        /// Configuration key (clientId, clientSecret, accountId, baseUrl).
        key: String,
        /// Configuration value.
        value: String,
    },
    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },
    /// List all configuration.
    List,
    /// Clear all configuration.
    Clear,
    /// Remove one stored value, reverting it to its default.
    Delete {
        /// Configuration key.
        key: String,
    },
    /// Print the location of the settings file.
    Path,
}

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// Send an SMS message.
    Send(SendArgs),
    /// List messages.
    List(PageArgs),
    /// Get message by ID.
    Get {
        /// Message ID.
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContactsCommand {
    /// List contacts.
    List(PageArgs),
    /// Create a contact.
    Create(CreateContactArgs),
    /// Get contact by ID.
    Get {
        /// Contact ID.
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AccountsCommand {
    /// List accounts.
    List,
    /// Get account by ID.
    Get {
        /// Account ID.
        id: String,
    },
}

/// Arguments for `sakari messages send`.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Recipient phone number (E.164 format).
    #[arg(long, value_name = "NUMBER")]
    pub to: String,

    /// Sender phone number.
    #[arg(long, value_name = "NUMBER")]
    pub from: String,

    /// Message body.
    #[arg(long, value_name = "TEXT")]
    pub body: String,
}

/// Pagination for list commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Number of records to retrieve.
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub limit: u32,

    /// Offset for pagination.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub offset: u32,
}

/// Arguments for `sakari contacts create`.
#[derive(Debug, Args)]
pub struct CreateContactArgs {
    /// Mobile number (E.164 format).
    #[arg(long, value_name = "NUMBER")]
    pub mobile: String,

    /// First name.
    #[arg(long, value_name = "NAME")]
    pub first: Option<String>,

    /// Last name.
    #[arg(long, value_name = "NAME")]
    pub last: Option<String>,
}
