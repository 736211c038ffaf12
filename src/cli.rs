//! Clap argument types.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::form::FieldKey;

/// View and update one user of the booking admin service.
#[derive(Parser, Debug)]
#[command(name = "guestdesk", version)]
pub struct Cli {
    /// Config file (default: ~/.config/guestdesk/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the service base URL from config.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive update screen for a user.
    Edit {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        id: String,
    },

    /// Print one user.
    Show {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        id: String,

        /// Print the raw JSON record.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Update fields of a user without the interactive screen.
    Update {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        id: String,

        /// Field assignment, repeatable (e.g. --set roles=admin).
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(FieldKey, String)>,
    },
}

/// Parses `field=value`; the value may be empty and may contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(FieldKey, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", raw))?;
    let key = FieldKey::from_name(name.trim()).ok_or_else(|| {
        let known: Vec<_> = FieldKey::ALL.iter().map(|k| k.name()).collect();
        format!("unknown field '{}' (fields: {})", name, known.join(", "))
    })?;
    Ok((key, value.to_string()))
}
