//! CLI argument parsing for tagyaml.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tagyaml::ShapeKind;

/// tagyaml: inspect how record fields are keyed in YAML documents.
///
/// Keys come from the configured tag, then `yaml`, then `json`, then the
/// lower-cased field name. Record, sequence and map fields get the
/// configured prefix.
#[derive(Parser, Debug)]
#[command(name = "tagyaml")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Settings shared by every command.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML file with `tag` and `prefix` settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Tag consulted first when resolving keys (overrides the config file).
    #[arg(long, global = true)]
    pub tag: Option<String>,

    /// Prefix for record, sequence and map keys (overrides the config file).
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub prefix: Option<String>,
}

/// Available commands for tagyaml.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the key a field is emitted under.
    ///
    /// Prints `-` when the field is skipped.
    Resolve(ResolveArgs),

    /// Strip the configured prefix from a document key.
    Unwrap(UnwrapArgs),

    /// Rewrite a document's composite keys from one prefix to the configured one.
    ///
    /// Reads FILE, or stdin when omitted, and prints the result.
    Reprefix(ReprefixArgs),
}

/// Declared kind of a field.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeArg {
    #[default]
    Scalar,
    Record,
    Sequence,
    Map,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Scalar => ShapeKind::Scalar,
            ShapeArg::Record => ShapeKind::Record,
            ShapeArg::Sequence => ShapeKind::Sequence,
            ShapeArg::Map => ShapeKind::Map,
        }
    }
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Declared field name (e.g., FamilyName).
    pub name: String,

    /// Annotation on the field, as TAG=VALUE (repeatable).
    #[arg(short, long = "annotation", value_parser = parse_annotation)]
    pub annotations: Vec<(String, String)>,

    /// Declared kind of the field.
    #[arg(long, value_enum, default_value_t = ShapeArg::Scalar)]
    pub shape: ShapeArg,

    /// Wrap the field in an optional (repeat for nesting).
    #[arg(long, action = clap::ArgAction::Count)]
    pub optional: u8,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `unwrap` command.
#[derive(Parser, Debug)]
pub struct UnwrapArgs {
    /// Key as it appears in the document (already unquoted).
    #[arg(allow_hyphen_values = true)]
    pub key: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reprefix` command.
#[derive(Parser, Debug)]
pub struct ReprefixArgs {
    /// Document to rewrite. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Prefix the document was written with.
    #[arg(long, allow_hyphen_values = true)]
    pub from: String,
}

/// Parse a `TAG=VALUE` annotation. The value may be empty or contain `=`.
pub fn parse_annotation(s: &str) -> Result<(String, String), String> {
    let (tag, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid annotation '{}': expected TAG=VALUE", s))?;
    if tag.is_empty() {
        return Err(format!("invalid annotation '{}': tag must not be empty", s));
    }
    Ok((tag.to_string(), value.to_string()))
}
