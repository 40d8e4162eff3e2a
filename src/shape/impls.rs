//! `HasShape` for std types.

use super::{HasShape, Shape};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

macro_rules! scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasShape for $ty {
                fn shape() -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

scalar!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    (),
    str,
    String,
    std::path::Path,
    std::path::PathBuf,
);

// Dynamic documents are opaque: nothing inside them is renamed.
scalar!(serde_yaml::Value, serde_json::Value);

macro_rules! pointer {
    ($($wrapper:ident),*) => {
        $(
            impl<T: HasShape + ?Sized> HasShape for $wrapper<T> {
                fn shape() -> Shape {
                    Shape::Pointer(Box::new(T::shape()))
                }
            }
        )*
    };
}

pointer!(Box, Rc, Arc);

impl<T: HasShape> HasShape for Option<T> {
    fn shape() -> Shape {
        Shape::Pointer(Box::new(T::shape()))
    }
}

impl<T: HasShape + ?Sized> HasShape for &T {
    fn shape() -> Shape {
        Shape::Pointer(Box::new(T::shape()))
    }
}

macro_rules! sequence {
    ($($seq:ident),*) => {
        $(
            impl<T: HasShape> HasShape for $seq<T> {
                fn shape() -> Shape {
                    Shape::Sequence(Box::new(T::shape()))
                }
            }
        )*
    };
}

sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: HasShape, S> HasShape for HashSet<T, S> {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }
}

impl<T: HasShape> HasShape for [T] {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }
}

impl<T: HasShape, const N: usize> HasShape for [T; N] {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }
}

impl<K, V: HasShape> HasShape for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map(Box::new(V::shape()))
    }
}

impl<K, V: HasShape, S> HasShape for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Map(Box::new(V::shape()))
    }
}
