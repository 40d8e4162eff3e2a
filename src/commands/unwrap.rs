//! `tagyaml unwrap`: strip the configured prefix from a key.

use crate::cli::UnwrapArgs;
use serde_json::json;
use tagyaml::{KeyConfig, PrefixPolicy, Result};

pub(crate) fn cmd_unwrap(config: &KeyConfig, args: UnwrapArgs) -> Result<()> {
    let (base, prefixed) = PrefixPolicy::new(config).unwrap(&args.key);

    if args.json {
        let output = json!({
            "key": args.key,
            "base_key": base,
            "prefixed": prefixed,
        });
        println!("{}", output);
    } else {
        println!("{}", base);
    }

    Ok(())
}
