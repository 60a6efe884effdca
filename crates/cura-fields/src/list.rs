//! Ordered, id-unique list of form fields.
//!
//! [`FieldList`] is what the form-builder canvas renders. Every edit keeps
//! field ids unique; a list read from JSON is validated the same way.

use std::collections::HashSet;

use cura_merge::{reorder_by_key, union_by_value};
use cura_types::{FieldKind, FormField, SelectOption, PLACEHOLDER};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{FieldError, Result};

/// The fields of one form, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FormField>", into = "Vec<FormField>")]
pub struct FieldList {
    fields: Vec<FormField>,
}

impl FieldList {
    /// Create an empty field list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing fields, rejecting duplicate ids.
    pub fn from_fields(fields: Vec<FormField>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.as_str()) {
                return Err(FieldError::DuplicateId {
                    id: field.id.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormField> {
        self.fields.iter()
    }

    /// Field ids in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.id.as_str()).collect()
    }

    /// Position of the field with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Append a field at the end.
    pub fn push(&mut self, field: FormField) -> Result<()> {
        let len = self.len();
        self.insert(len, field)
    }

    /// Insert a field at `index`, shifting later fields down.
    pub fn insert(&mut self, index: usize, field: FormField) -> Result<()> {
        if index > self.len() {
            return Err(FieldError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        if self.get(&field.id).is_some() {
            return Err(FieldError::DuplicateId { id: field.id });
        }
        self.fields.insert(index, field);
        Ok(())
    }

    /// Drop a new field of `kind` from the palette at `index`.
    ///
    /// The field gets a fresh id and the kind's default label. An `index`
    /// past the end appends. Returns the new field's id.
    pub fn drop_new(&mut self, kind: FieldKind, index: usize) -> String {
        let id = Uuid::now_v7().to_string();
        let index = index.min(self.len());
        debug!(%kind, index, id = %id, "palette drop");
        self.fields.insert(index, FormField::new(id.clone(), kind));
        id
    }

    /// Drag the field at `from` so that it ends up at `to`.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.len();
        for index in [from, to] {
            if index >= len {
                return Err(FieldError::IndexOutOfBounds { index, len });
            }
        }
        if from != to {
            let field = self.fields.remove(from);
            self.fields.insert(to, field);
        }
        Ok(())
    }

    /// Drag the field with `id` so that it ends up at `to`.
    pub fn move_id(&mut self, id: &str, to: usize) -> Result<()> {
        let from = self.position(id).ok_or_else(|| FieldError::NotFound { id: id.into() })?;
        self.move_field(from, to)
    }

    /// Remove and return the field with `id`.
    pub fn remove(&mut self, id: &str) -> Result<FormField> {
        let index = self.position(id).ok_or_else(|| FieldError::NotFound { id: id.into() })?;
        Ok(self.fields.remove(index))
    }

    /// Reorder fields by a saved id order.
    ///
    /// Ids in `order` come first in that order; `"_"` entries and ids not in
    /// the list are ignored; fields not mentioned keep their relative order
    /// after them.
    pub fn apply_order<U: AsRef<str>>(&mut self, order: &[U]) {
        self.apply_order_with_placeholder(order, PLACEHOLDER);
    }

    /// [`apply_order`](Self::apply_order) with a custom placeholder token.
    pub fn apply_order_with_placeholder<U: AsRef<str>>(&mut self, order: &[U], placeholder: &str) {
        self.fields = reorder_by_key(&self.fields, order, placeholder, |f| f.id.as_str());
    }

    /// Merge `options` into a choice field's options by value; new ones win.
    pub fn merge_options(&mut self, id: &str, options: &[SelectOption]) -> Result<&FormField> {
        let field = self
            .get_mut(id)
            .ok_or_else(|| FieldError::NotFound { id: id.into() })?;
        if !field.kind.is_choice() {
            return Err(FieldError::NotChoiceField {
                id: field.id.clone(),
                kind: field.kind,
            });
        }
        field.options = union_by_value(&field.options, options);
        Ok(&*field)
    }

    pub fn into_vec(self) -> Vec<FormField> {
        self.fields
    }
}

impl TryFrom<Vec<FormField>> for FieldList {
    type Error = FieldError;

    fn try_from(fields: Vec<FormField>) -> Result<Self> {
        Self::from_fields(fields)
    }
}

impl From<FieldList> for Vec<FormField> {
    fn from(list: FieldList) -> Self {
        list.fields
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FormField;
    type IntoIter = std::slice::Iter<'a, FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
