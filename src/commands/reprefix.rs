//! `tagyaml reprefix`: move a document from one composite prefix to another.

use crate::cli::ReprefixArgs;
use std::io::Read;
use tagyaml::{KeyConfig, KeyError, PrefixPolicy, Result};

pub(crate) fn cmd_reprefix(config: &KeyConfig, args: ReprefixArgs) -> Result<()> {
    let input = read_input(&args)?;
    let output = reprefix_document(config, &input, &args.from)?;
    print!("{}", output);
    Ok(())
}

fn read_input(args: &ReprefixArgs) -> Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            KeyError::UserError(format!("failed to read '{}': {}", path.display(), e))
        }),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

pub(crate) fn reprefix_document(config: &KeyConfig, input: &str, from: &str) -> Result<String> {
    let document: serde_yaml::Value = serde_yaml::from_str(input)?;
    let rewritten = PrefixPolicy::new(config).reprefix(document, from)?;
    Ok(serde_yaml::to_string(&rewritten)?)
}
