use crate::value::Value;

///
/// ValueTag
///
/// Stable canonical value-variant tag used by ordering and diagnostics.
///
/// IMPORTANT:
/// Tag values are part of stable behavior and must remain fixed.
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Array = 1,
    Bool = 2,
    List = 3,
    Map = 4,
    Null = 5,
    Number = 6,
    Text = 7,
}

impl ValueTag {
    /// Stable byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Bool => "Bool",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Number => "Number",
            Self::Text => "Text",
        }
    }
}

/// Stable canonical variant tag.
#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Array(_) => ValueTag::Array,
        Value::Bool(_) => ValueTag::Bool,
        Value::List(_) => ValueTag::List,
        Value::Map(_) => ValueTag::Map,
        Value::Null => ValueTag::Null,
        Value::Number(_) => ValueTag::Number,
        Value::Text(_) => ValueTag::Text,
    }
}
