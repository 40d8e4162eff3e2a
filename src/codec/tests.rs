//! Tests for marshal/unmarshal through the key codec.

use crate::codec::KeyCodec;
use crate::config::KeyConfig;
use crate::error::KeyError;
use crate::shape::{FieldDescriptor, HasShape, Record, RecordShape, Shape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PREFIX: &str = "*.*.*.*.";

fn pl_codec() -> KeyCodec {
    KeyCodec::new(KeyConfig::new().with_tag("pl"))
}

fn prefixed_codec() -> KeyCodec {
    KeyCodec::new(KeyConfig::new().with_tag("pl").with_prefix(PREFIX))
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct St {
    name: String,
}

crate::record!(St { name });

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Wrapping {
    a: Vec<String>,
    b: St,
    c: Option<St>,
    d: Option<i32>,
    e: i32,
    f: Option<Vec<i32>>,
}

crate::record!(Wrapping { a, b, c, d, e, f });

fn wrapping() -> Wrapping {
    Wrapping {
        f: Some(Vec::new()),
        d: Some(0),
        e: 100,
        ..Default::default()
    }
}

const WRAPPED: &str = "'*.*.*.*.a': []
'*.*.*.*.b':
  name: ''
'*.*.*.*.c': null
d: 0
e: 100
'*.*.*.*.f': []
";

#[test]
fn test_composite_fields_are_prefixed_in_declaration_order() {
    let yaml = prefixed_codec().to_string(&wrapping()).unwrap();
    assert_eq!(yaml, WRAPPED);
}

#[test]
fn test_prefixed_document_round_trips() {
    let codec = prefixed_codec();
    let mut value = wrapping();
    let yaml = codec.to_vec(&value).unwrap();

    value.e = 0;
    value.f = None;
    codec.decode_into(&yaml, &mut value).unwrap();

    assert_eq!(value.e, 100);
    assert_eq!(value.f, Some(Vec::new()));
    assert_eq!(value.d, Some(0));
    assert_eq!(value.c, None);
    assert_eq!(value, wrapping());
}

#[test]
fn test_missing_sequence_encodes_as_empty_and_missing_record_as_null() {
    let value = Wrapping {
        f: None,
        c: None,
        ..wrapping()
    };
    let tree = prefixed_codec().to_value(&value).unwrap();

    assert_eq!(tree["*.*.*.*.f"], serde_yaml::Value::Sequence(Vec::new()));
    assert!(tree["*.*.*.*.c"].is_null());

    let decoded: Wrapping = prefixed_codec().round_trip(&value);
    assert_eq!(decoded.f, Some(Vec::new()));
    assert_eq!(decoded.c, None);
}

#[test]
fn test_present_record_pointer_is_encoded_and_decoded() {
    let codec = prefixed_codec();
    let value = Wrapping {
        c: Some(St {
            name: "inner".to_string(),
        }),
        ..wrapping()
    };
    let yaml = codec.to_string(&value).unwrap();
    assert!(yaml.contains("'*.*.*.*.c':\n  name: inner\n"));

    let decoded: Wrapping = codec.from_str(&yaml).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_empty_prefix_disables_prefixing() {
    let yaml = pl_codec().to_string(&wrapping()).unwrap();
    assert_eq!(
        yaml,
        "a: []\nb:\n  name: ''\nc: null\nd: 0\ne: 100\nf: []\n"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: u32,
    alias: String,
    last_name: String,
    family_name: String,
}

crate::record!(Person {
    name(pl = "test"),
    age(pl = "age"),
    alias(pl = "alias123"),
    last_name(yaml = "last_name"),
    family_name(json = "family_name"),
});

#[test]
fn test_marshal_uses_tag_priority() {
    let person = Person {
        name: "test".to_string(),
        age: 18,
        alias: "alias123".to_string(),
        ..Default::default()
    };

    assert_eq!(
        pl_codec().to_string(&person).unwrap(),
        "test: test\nage: 18\nalias123: alias123\nlast_name: ''\nfamily_name: ''\n"
    );
}

#[test]
fn test_unmarshal_matches_resolved_keys() {
    let yaml = "test: Ada\nage: 36\nlast_name: Lovelace\nfamily_name: Byron\n";
    let person: Person = pl_codec().from_str(yaml).unwrap();

    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 36);
    assert_eq!(person.last_name, "Lovelace");
    assert_eq!(person.family_name, "Byron");
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct Pair {
    name: String,
    value: String,
}

crate::record!(Pair {
    name(pl = "k"),
    value(pl = "v"),
});

#[test]
fn test_top_level_sequence_of_records() {
    let pairs = vec![
        Pair {
            name: "test".to_string(),
            value: "test".to_string(),
        },
        Pair {
            name: "test2".to_string(),
            value: "test2".to_string(),
        },
    ];
    let codec = prefixed_codec();
    let yaml = codec.to_string(&pairs).unwrap();

    assert_eq!(yaml, "- k: test\n  v: test\n- k: test2\n  v: test2\n");

    let decoded: Vec<Pair> = codec.from_str(&yaml).unwrap();
    assert_eq!(decoded, pairs);
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Nested {
    name: String,
    pair: Pair,
}

crate::record!(Nested {
    name(pl = "test"),
    pair(pl = "pair"),
});

#[test]
fn test_nested_record_keys_are_resolved() {
    let nested = Nested {
        name: "test".to_string(),
        pair: Pair {
            name: "k".to_string(),
            value: "v".to_string(),
        },
    };

    assert_eq!(
        pl_codec().to_string(&nested).unwrap(),
        "test: test\npair:\n  k: k\n  v: v\n"
    );
    assert_eq!(
        prefixed_codec().to_string(&nested).unwrap(),
        "test: test\n'*.*.*.*.pair':\n  k: k\n  v: v\n"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Catalog {
    entries: BTreeMap<String, Pair>,
    groups: Vec<Vec<Pair>>,
    labels: BTreeMap<String, String>,
}

crate::record!(Catalog {
    entries,
    groups,
    labels,
});

#[test]
fn test_records_inside_maps_and_sequences_are_rekeyed() {
    let pair = Pair {
        name: "n".to_string(),
        value: "v".to_string(),
    };
    let catalog = Catalog {
        entries: BTreeMap::from([("first".to_string(), pair.clone())]),
        groups: vec![vec![pair.clone()]],
        labels: BTreeMap::from([("env".to_string(), "prod".to_string())]),
    };
    let codec = prefixed_codec();
    let yaml = codec.to_string(&catalog).unwrap();

    assert_eq!(
        yaml,
        "'*.*.*.*.entries':\n  first:\n    k: n\n    v: v\n\
         '*.*.*.*.groups':\n- - k: n\n    v: v\n\
         '*.*.*.*.labels':\n  env: prod\n"
    );

    let decoded: Catalog = codec.from_str(&yaml).unwrap();
    assert_eq!(decoded, catalog);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let yaml = "test: Ada\nnickname: Countess\n'*.*.*.*.extra':\n  a: 1\n";
    let person: Person = prefixed_codec().from_str(yaml).unwrap();

    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 0);
}

#[test]
fn test_declared_names_do_not_match_when_renamed() {
    let person: Person = pl_codec().from_str("name: Ada\n").unwrap();
    assert_eq!(person.name, "");
}

#[test]
fn test_partial_decode_keeps_existing_values() {
    let mut person = Person {
        name: "Ada".to_string(),
        age: 36,
        alias: "countess".to_string(),
        last_name: "Lovelace".to_string(),
        family_name: "Byron".to_string(),
    };
    pl_codec().decode_into(b"age: 37\n", &mut person).unwrap();

    assert_eq!(person.age, 37);
    assert_eq!(person.name, "Ada");
    assert_eq!(person.family_name, "Byron");
}

#[test]
fn test_partial_decode_reaches_nested_records() {
    let mut nested = Nested {
        name: "outer".to_string(),
        pair: Pair {
            name: "k0".to_string(),
            value: "v0".to_string(),
        },
    };
    prefixed_codec()
        .decode_into(b"'*.*.*.*.pair':\n  v: v1\n", &mut nested)
        .unwrap();

    assert_eq!(nested.name, "outer");
    assert_eq!(nested.pair.name, "k0");
    assert_eq!(nested.pair.value, "v1");
}

#[test]
fn test_empty_document_leaves_target_untouched() {
    let mut person = Person {
        name: "Ada".to_string(),
        ..Default::default()
    };
    pl_codec().decode_into(b"", &mut person).unwrap();

    assert_eq!(person.name, "Ada");
}

#[test]
fn test_codec_errors_propagate() {
    let err = pl_codec()
        .from_str::<Person>("age: [not, a, number]\n")
        .unwrap_err();
    assert!(matches!(err, KeyError::Codec(_)));

    let err = pl_codec().from_str::<Person>("test: [unclosed\n").unwrap_err();
    assert!(matches!(err, KeyError::Codec(_)));
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Clash {
    first: String,
    second: String,
}

crate::record!(Clash {
    first(pl = "same"),
    second(json = "same"),
});

#[test]
fn test_duplicate_keys_are_rejected_at_encode() {
    let err = pl_codec().to_string(&Clash::default()).unwrap_err();

    match err {
        KeyError::AmbiguousKey { key, first, second } => {
            assert_eq!(key, "same");
            assert_eq!(first, "first");
            assert_eq!(second, "second");
        }
        other => panic!("expected AmbiguousKey, got {other:?}"),
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct PrefixClash {
    items: Vec<u8>,
    prefixed_items: u8,
}

crate::record!(PrefixClash {
    items,
    prefixed_items(pl = "p_items"),
});

#[test]
fn test_prefixing_can_create_duplicates() {
    let codec = KeyCodec::new(KeyConfig::new().with_tag("pl").with_prefix("p_"));
    let err = codec.to_string(&PrefixClash::default()).unwrap_err();

    assert!(matches!(err, KeyError::AmbiguousKey { ref key, .. } if key == "p_items"));
    assert!(pl_codec().to_string(&PrefixClash::default()).is_ok());
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Options {
    id: u32,
    note: String,
    tags: Vec<String>,
    internal: String,
    secret: String,
}

crate::record!(Options {
    id(pl = "id,omitempty"),
    note(yaml = ",omitempty"),
    tags(json = "tags,omitempty"),
    internal(pl = "-"),
    secret(skip),
});

#[test]
fn test_omitempty_and_skip() {
    let codec = pl_codec();

    let empty = Options {
        internal: "x".to_string(),
        secret: "y".to_string(),
        ..Default::default()
    };
    assert_eq!(codec.to_string(&empty).unwrap(), "{}\n");

    let full = Options {
        id: 7,
        note: "hello".to_string(),
        tags: vec!["a".to_string()],
        internal: "x".to_string(),
        secret: "y".to_string(),
    };
    assert_eq!(
        codec.to_string(&full).unwrap(),
        "id: 7\nnote: hello\ntags:\n- a\n"
    );
}

#[test]
fn test_skipped_fields_are_not_decoded() {
    let mut options = Options {
        internal: "kept".to_string(),
        secret: "kept".to_string(),
        ..Default::default()
    };
    pl_codec()
        .decode_into(b"internal: lost\nsecret: lost\nid: 3\n", &mut options)
        .unwrap();

    assert_eq!(options.id, 3);
    assert_eq!(options.internal, "kept");
    assert_eq!(options.secret, "kept");
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Lookalike {
    star_count: u32,
}

crate::record!(Lookalike {
    star_count(pl = "*.*.*.*.count"),
});

#[test]
fn test_scalar_key_starting_with_prefix_still_matches() {
    let codec = prefixed_codec();
    let value = Lookalike { star_count: 5 };
    let yaml = codec.to_string(&value).unwrap();

    assert_eq!(yaml, "'*.*.*.*.count': 5\n");
    assert_eq!(codec.from_str::<Lookalike>(&yaml).unwrap(), value);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Level {
    #[default]
    Low,
    High,
}

crate::opaque!(Level);

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Leveled {
    level: Level,
    levels: Vec<Level>,
}

crate::record!(Leveled {
    level(yaml = "lvl"),
    levels,
});

#[test]
fn test_opaque_types_pass_through() {
    let codec = KeyCodec::new(KeyConfig::new().with_prefix("x_"));
    let value = Leveled {
        level: Level::High,
        levels: vec![Level::Low],
    };
    let yaml = codec.to_string(&value).unwrap();

    assert_eq!(yaml, "lvl: high\nx_levels:\n- low\n");
    assert_eq!(codec.from_str::<Leveled>(&yaml).unwrap(), value);
}

#[test]
fn test_manual_record_impl() {
    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Manual {
        #[serde(rename = "Count")]
        count: u8,
    }

    impl HasShape for Manual {
        fn shape() -> Shape {
            Shape::Record(RecordShape::new(<Manual as Record>::fields))
        }
    }

    impl Record for Manual {
        fn fields() -> Vec<FieldDescriptor> {
            vec![FieldDescriptor::of::<u8>("Count")]
        }
    }

    let codec = KeyCodec::default();
    assert_eq!(codec.to_string(&Manual { count: 2 }).unwrap(), "count: 2\n");
    assert_eq!(codec.from_str::<Manual>("count: 4\n").unwrap(), Manual { count: 4 });
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Optionals {
    count: Option<i32>,
    flag: Option<bool>,
    items: Option<Vec<u8>>,
}

crate::record!(Optionals {
    count(pl = "count,omitempty"),
    flag(pl = ",omitempty"),
    items(pl = "items,omitempty"),
});

#[test]
fn test_omitempty_keeps_present_optionals() {
    let codec = prefixed_codec();
    let value = Optionals {
        count: Some(0),
        flag: Some(false),
        items: Some(Vec::new()),
    };
    let yaml = codec.to_string(&value).unwrap();

    assert_eq!(yaml, "count: 0\nflag: false\n'*.*.*.*.items': []\n");
    assert_eq!(codec.from_str::<Optionals>(&yaml).unwrap(), value);
}

#[test]
fn test_omitempty_drops_absent_optionals() {
    let yaml = prefixed_codec().to_string(&Optionals::default()).unwrap();
    assert_eq!(yaml, "{}\n");
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct PartlyListed {
    listed: u32,
    unlisted: u32,
    nested: St,
}

crate::record!(PartlyListed { listed(pl = "l") });

#[test]
fn test_unlisted_fields_round_trip_under_serde_name() {
    let codec = prefixed_codec();
    let value = PartlyListed {
        listed: 1,
        unlisted: 2,
        nested: St {
            name: "x".to_string(),
        },
    };
    let yaml = codec.to_string(&value).unwrap();

    assert_eq!(yaml, "l: 1\nunlisted: 2\nnested:\n  name: x\n");
    assert_eq!(codec.from_str::<PartlyListed>(&yaml).unwrap(), value);
}

#[test]
fn test_unlisted_field_does_not_shadow_resolved_key() {
    let value: PartlyListed = pl_codec().from_str("listed: 5\nl: 1\n").unwrap();

    assert_eq!(value.listed, 1);
}

#[test]
fn test_new_records_start_from_zero_value() {
    let people: Vec<Person> = pl_codec().from_str("- test: Ada\n- age: 3\n").unwrap();

    assert_eq!(
        people,
        vec![
            Person {
                name: "Ada".to_string(),
                ..Default::default()
            },
            Person {
                age: 3,
                ..Default::default()
            },
        ]
    );
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Directory {
    owner: Option<Person>,
    people: BTreeMap<String, Person>,
}

crate::record!(Directory { owner, people });

#[test]
fn test_new_optional_and_map_records_start_from_zero_value() {
    let mut directory = Directory::default();
    prefixed_codec()
        .decode_into(
            b"'*.*.*.*.owner':\n  age: 40\n'*.*.*.*.people':\n  ada:\n    test: Ada\n",
            &mut directory,
        )
        .unwrap();

    assert_eq!(
        directory.owner,
        Some(Person {
            age: 40,
            ..Default::default()
        })
    );
    assert_eq!(directory.people["ada"].name, "Ada");
    assert_eq!(directory.people["ada"].age, 0);
}

#[test]
fn test_null_resets_record_to_zero_value() {
    let mut nested = Nested {
        name: "outer".to_string(),
        pair: Pair {
            name: "k".to_string(),
            value: "v".to_string(),
        },
    };
    pl_codec().decode_into(b"pair: null\n", &mut nested).unwrap();

    assert_eq!(nested.name, "outer");
    assert_eq!(nested.pair, Pair::default());
}

#[test]
fn test_to_writer_matches_to_string() {
    let codec = prefixed_codec();
    let mut out = Vec::new();
    codec.to_writer(&mut out, &wrapping()).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), WRAPPED);
}

#[test]
fn test_from_reader() {
    let decoded: Wrapping = prefixed_codec().from_reader(WRAPPED.as_bytes()).unwrap();
    assert_eq!(decoded, wrapping());
}

impl KeyCodec {
    /// Encode then decode into a default value.
    fn round_trip<T>(&self, value: &T) -> T
    where
        T: Serialize + serde::de::DeserializeOwned + HasShape + Default,
    {
        let yaml = self.to_string(value).unwrap();
        self.from_str(&yaml).unwrap()
    }
}
