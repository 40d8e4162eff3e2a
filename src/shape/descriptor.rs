//! Field descriptors: one field of a record as the resolver sees it.

use super::{HasShape, Shape};
use std::borrow::Cow;

/// A naming annotation attached to a field, e.g. `json = "family_name"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: Cow<'static, str>,
    pub value: Cow<'static, str>,
}

/// One field of a record type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Declared field name; also the key serde uses for it.
    pub name: Cow<'static, str>,
    /// Annotations in declaration order.
    pub tags: Vec<Tag>,
    /// Declared type of the field.
    pub shape: Shape,
    /// Hidden fields are never emitted or matched.
    pub visible: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<Cow<'static, str>>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            shape,
            visible: true,
        }
    }

    /// Descriptor for a field of type `T`.
    pub fn of<T: HasShape + ?Sized>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, T::shape())
    }

    /// Attach an annotation under tag `name`.
    pub fn tag(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.tags.push(Tag {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Mark the field as invisible to the codec.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Value of the first annotation under tag `name`, if any.
    pub fn annotation(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_ref())
    }
}
