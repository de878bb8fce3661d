//! # Typed Fields
//!
//! Content and style records are plain structs, one per element type. Patches
//! and the property editor address them by their serialized (camelCase) key,
//! so every record also implements [`Record`] for key-based access.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single field value as it crosses the patch boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u32),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<u32> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Why a record refused a key/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Unknown,
    Mismatch,
}

/// Conversion between a record field and its [`FieldValue`]
pub trait FieldType: Sized {
    fn to_value(&self) -> FieldValue;
    fn from_value(value: FieldValue) -> Option<Self>;
}

impl FieldType for String {
    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl FieldType for u32 {
    fn to_value(&self) -> FieldValue {
        FieldValue::Number(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Number(n) => Some(n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Key-based view over a content or style record
pub trait Record {
    /// Registered keys, in schema order
    fn keys(&self) -> &'static [&'static str];

    fn get(&self, key: &str) -> Option<FieldValue>;

    fn set(&mut self, key: &str, value: FieldValue) -> Result<(), FieldError>;

    /// Snapshot of every field, keyed by name
    fn to_map(&self) -> BTreeMap<&'static str, FieldValue> {
        self.keys()
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

/// Declares a content/style record: the struct, its defaults and its
/// [`Record`] implementation.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident($key:literal): $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl $crate::fields::Record for $name {
            fn keys(&self) -> &'static [&'static str] {
                &[$($key),*]
            }

            fn get(&self, key: &str) -> Option<$crate::fields::FieldValue> {
                match key {
                    $( $key => Some($crate::fields::FieldType::to_value(&self.$field)), )*
                    _ => None,
                }
            }

            fn set(
                &mut self,
                key: &str,
                value: $crate::fields::FieldValue,
            ) -> Result<(), $crate::fields::FieldError> {
                match key {
                    $(
                        $key => {
                            self.$field = <$ty as $crate::fields::FieldType>::from_value(value)
                                .ok_or($crate::fields::FieldError::Mismatch)?;
                            Ok(())
                        }
                    )*
                    _ => {
                        drop(value);
                        Err($crate::fields::FieldError::Unknown)
                    }
                }
            }
        }
    };
}

/// Declares a closed set of string options stored in a record.
macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $tag:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $tag)] $variant, )+
        }

        impl $name {
            pub const OPTIONS: &'static [&'static str] = &[$($tag),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag, )+
                }
            }

            /// Case-insensitive lookup of an option tag
            pub fn parse(tag: &str) -> Option<Self> {
                let tag = tag.trim();
                $(
                    if tag.eq_ignore_ascii_case($tag) {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FieldType for $name {
            fn to_value(&self) -> FieldValue {
                FieldValue::Text(self.as_str().to_string())
            }

            fn from_value(value: FieldValue) -> Option<Self> {
                value.as_text().and_then($name::parse)
            }
        }
    };
}

choice! {
    /// Horizontal alignment of a block's content
    pub enum Align {
        Left => "left",
        Center => "center",
        Right => "right",
    }
    default Left
}

choice! {
    pub enum HeadingLevel {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
    }
    default H2
}

choice! {
    /// Line style of a divider
    pub enum DividerStyle {
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
    }
    default Solid
}

/// Partial update of one element's content and/or styles.
///
/// Keys absent from the patch are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, FieldValue>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, FieldValue>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.styles.is_empty()
    }
}
