//! Static shape information for values that pass through the codec.
//!
//! Every type that can be encoded reports a [`Shape`] through [`HasShape`].
//! Record types additionally enumerate their fields through [`Record`]; the
//! [`record!`](crate::record) macro derives both from a field list, so the
//! descriptors are checked against the struct at compile time.

mod descriptor;
mod impls;
mod macros;


pub use descriptor::{FieldDescriptor, Tag};

use serde::Serialize;
use serde_yaml::Value;

/// Structural classification of a type, as far as key naming cares.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Anything encoded as a single YAML scalar.
    Scalar,
    /// A record with named fields.
    Record(RecordShape),
    /// An ordered collection of elements of the inner shape.
    Sequence(Box<Shape>),
    /// A keyed collection whose values have the inner shape.
    Map(Box<Shape>),
    /// An optional or indirect value (`Option`, `Box`, `Rc`, `Arc`).
    Pointer(Box<Shape>),
}

/// Field list and zero value of a record type.
///
/// Both are functions, only called when the record is visited, so
/// self-referential types are fine.
#[derive(Debug, Clone, Copy)]
pub struct RecordShape {
    fields: fn() -> Vec<FieldDescriptor>,
    zero: Option<fn() -> Value>,
}

impl RecordShape {
    /// A record without a zero value; records created while decoding start
    /// empty and rely on serde defaults.
    pub fn new(fields: fn() -> Vec<FieldDescriptor>) -> Self {
        Self { fields, zero: None }
    }

    /// Records created while decoding start from `zero`.
    pub fn with_zero(mut self, zero: fn() -> Value) -> Self {
        self.zero = Some(zero);
        self
    }

    pub fn fields(&self) -> Vec<FieldDescriptor> {
        (self.fields)()
    }

    /// Value tree of the record's default, or `Null` when it has none.
    pub fn zero(&self) -> Value {
        self.zero.map_or(Value::Null, |zero| zero())
    }
}

/// The effective classification of a [`Shape`], with indirection removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Scalar,
    Record,
    Sequence,
    Map,
}

impl Shape {
    /// Strips every level of pointer indirection.
    pub fn effective(&self) -> &Shape {
        match self {
            Shape::Pointer(inner) => inner.effective(),
            other => other,
        }
    }

    /// Classification of the effective shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Scalar => ShapeKind::Scalar,
            Shape::Record(_) => ShapeKind::Record,
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Map(_) => ShapeKind::Map,
            Shape::Pointer(inner) => inner.kind(),
        }
    }

    /// Whether the effective shape is a record, sequence or map.
    pub fn is_composite(&self) -> bool {
        self.kind() != ShapeKind::Scalar
    }

    /// Builds the shape a declared type would have: `kind` wrapped in
    /// `optional_depth` levels of indirection. Composite kinds get scalar
    /// contents and records have no fields.
    pub fn from_kind(kind: ShapeKind, optional_depth: usize) -> Shape {
        let mut shape = match kind {
            ShapeKind::Scalar => Shape::Scalar,
            ShapeKind::Record => Shape::Record(RecordShape::new(Vec::new)),
            ShapeKind::Sequence => Shape::Sequence(Box::new(Shape::Scalar)),
            ShapeKind::Map => Shape::Map(Box::new(Shape::Scalar)),
        };
        for _ in 0..optional_depth {
            shape = Shape::Pointer(Box::new(shape));
        }
        shape
    }
}

/// Implemented by every type the codec can walk.
pub trait HasShape {
    fn shape() -> Shape;
}

/// Implemented by record types; usually derived with [`record!`](crate::record).
///
/// `fields` lists fields in declaration order, named exactly as serde names
/// them when no `#[serde(rename)]` is in play.
pub trait Record: HasShape {
    fn fields() -> Vec<FieldDescriptor>;
}

/// Shape of the field selected by `project`. Used by [`record!`](crate::record)
/// to pick up a field's type without spelling it out.
#[doc(hidden)]
pub fn shape_of<R, T, F>(_project: F) -> Shape
where
    T: HasShape + ?Sized,
    F: Fn(&R) -> &T,
{
    T::shape()
}

/// Value tree of `T::default()`. Used by [`record!`](crate::record) as the
/// zero value of a record.
#[doc(hidden)]
pub fn zero_of<T: Serialize + Default>() -> Value {
    serde_yaml::to_value(T::default()).unwrap_or(Value::Null)
}
