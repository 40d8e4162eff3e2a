/// Derives [`Record`](crate::Record) and [`HasShape`](crate::HasShape) for a
/// struct from its field list.
///
/// Each field may carry options in parentheses: `tag = "value"` pairs
/// (any tag name, in priority-independent order) and `skip` to hide the
/// field from the codec. Every listed field must exist on the struct, and
/// the struct must implement `Serialize` and `Default`: its default is the
/// starting point of records created while decoding. Fields left out of the
/// list are still encoded and decoded under their serde name.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Person {
///     name: String,
///     family_name: String,
///     secret: String,
/// }
///
/// tagyaml::record!(Person {
///     name(pl = "n"),
///     family_name(json = "family_name"),
///     secret(skip),
/// });
///
/// let codec = tagyaml::KeyCodec::new(tagyaml::KeyConfig::new().with_tag("pl"));
/// let person = Person { name: "Ada".into(), ..Default::default() };
/// assert_eq!(codec.to_string(&person)?, "n: Ada\nfamily_name: ''\n");
/// # Ok::<(), tagyaml::KeyError>(())
/// ```
#[macro_export]
macro_rules! record {
    (@opts $fd:expr ;) => {
        $fd
    };
    (@opts $fd:expr ; skip $(, $($rest:tt)*)?) => {
        $crate::record!(@opts $fd.hidden() ; $($($rest)*)?)
    };
    (@opts $fd:expr ; $tag:ident = $value:literal $(, $($rest:tt)*)?) => {
        $crate::record!(@opts $fd.tag(::std::stringify!($tag), $value) ; $($($rest)*)?)
    };
    ($record:ty { $( $field:ident $( ( $($opts:tt)* ) )? ),* $(,)? }) => {
        impl $crate::Record for $record {
            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::record!(@opts
                            $crate::FieldDescriptor::new(
                                ::std::stringify!($field),
                                $crate::shape::shape_of::<$record, _, _>(|r| &r.$field),
                            ) ;
                            $( $($opts)* )?
                        )
                    ),*
                ]
            }
        }

        impl $crate::HasShape for $record {
            fn shape() -> $crate::Shape {
                $crate::Shape::Record(
                    $crate::shape::RecordShape::new(<$record as $crate::Record>::fields)
                        .with_zero($crate::shape::zero_of::<$record>),
                )
            }
        }
    };
}

/// Declares types whose serialized form is never walked, such as enums
/// or newtypes encoded as a single scalar.
///
/// ```
/// #[derive(serde::Serialize)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// tagyaml::opaque!(Level);
///
/// use tagyaml::HasShape;
/// assert!(!Level::shape().is_composite());
/// ```
#[macro_export]
macro_rules! opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::HasShape for $ty {
                fn shape() -> $crate::Shape {
                    $crate::Shape::Scalar
                }
            }
        )*
    };
}
