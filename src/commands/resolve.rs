//! `tagyaml resolve`: key of a single described field.

use crate::cli::ResolveArgs;
use serde_json::json;
use tagyaml::{FieldDescriptor, KeyCodec, KeyConfig, Resolution, Result, Shape, ShapeKind};

pub(crate) fn cmd_resolve(config: &KeyConfig, args: ResolveArgs) -> Result<()> {
    let codec = KeyCodec::new(config.clone());
    let field = describe(&args);
    let resolution = codec.resolver().resolve(&field);
    let emitted = resolution
        .key()
        .map(|base| codec.prefix_policy().wrap(&field.shape, base));

    if args.json {
        let output = json!({
            "field": args.name,
            "shape": format!("{:?}", field.shape.kind()).to_lowercase(),
            "skip": resolution == Resolution::Skip,
            "base_key": resolution.key(),
            "key": emitted,
            "prefixed": emitted.as_deref() != resolution.key(),
            "omit_empty": resolution.omit_empty(),
        });
        println!("{}", output);
    } else {
        println!("{}", emitted.as_deref().unwrap_or("-"));
    }

    Ok(())
}

fn describe(args: &ResolveArgs) -> FieldDescriptor {
    let kind = ShapeKind::from(args.shape);
    let shape = Shape::from_kind(kind, usize::from(args.optional));
    args.annotations
        .iter()
        .fold(FieldDescriptor::new(args.name.clone(), shape), |field, (tag, value)| {
            field.tag(tag.clone(), value.clone())
        })
}
