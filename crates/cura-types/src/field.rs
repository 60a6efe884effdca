//! Form field descriptors placed on a form-builder canvas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::option::SelectOption;

/// The kind of input a form field renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// Numeric input.
    Number,
    /// Date picker.
    Date,
    /// Dropdown with a single selection.
    Select,
    /// Radio group.
    Radio,
    /// Checkbox set.
    Checkbox,
}

impl FieldKind {
    /// All kinds, in palette order.
    pub const ALL: [FieldKind; 7] = [
        Self::Text,
        Self::Textarea,
        Self::Number,
        Self::Date,
        Self::Select,
        Self::Radio,
        Self::Checkbox,
    ];

    /// Returns `true` if fields of this kind carry a list of options.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }

    /// Lowercase name used in serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    /// Label given to a freshly dropped field of this kind.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Textarea => "Paragraph",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Select => "Dropdown",
            Self::Radio => "Single choice",
            Self::Checkbox => "Multiple choice",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownFieldKind(s.to_string()))
    }
}

/// A single field of a form under construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Unique id within a form; the token the field list reorders by.
    pub id: String,
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    /// Choices for [`FieldKind::is_choice`] kinds; empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FormField {
    /// Create an optional field with the kind's default label and no options.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: kind.default_label().to_string(),
            required: false,
            options: Vec::new(),
        }
    }

    /// Builder-style label override.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Builder-style option list.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}
