//! # Elements
//!
//! One element is one block of the template. Its type is a closed enumeration
//! and its content/styles are the strongly typed records for that type,
//! carried together in [`ElementKind`].

use crate::blocks::*;
use crate::errors::DocumentError;
use crate::fields::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable element identifier, unique within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

macro_rules! element_kinds {
    ($( $variant:ident($tag:literal, $content:ident, $styles:ident) ),+ $(,)?) => {
        /// Element type tag
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum ElementType {
            $( $variant, )+
        }

        impl ElementType {
            /// Every type, in palette order
            pub const ALL: &'static [ElementType] = &[$( ElementType::$variant ),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( ElementType::$variant => $tag, )+
                }
            }
        }

        impl FromStr for ElementType {
            type Err = DocumentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $tag => Ok(ElementType::$variant), )+
                    other => Err(DocumentError::UnknownElementType(other.to_string())),
                }
            }
        }

        /// Type-tagged content and styles of one element
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "type", rename_all = "lowercase")]
        pub enum ElementKind {
            $(
                $variant {
                    #[serde(default)]
                    content: $content,
                    #[serde(default)]
                    styles: $styles,
                },
            )+
        }

        impl ElementKind {
            /// Registered defaults for a type
            pub fn with_defaults(element_type: ElementType) -> Self {
                match element_type {
                    $(
                        ElementType::$variant => ElementKind::$variant {
                            content: $content::default(),
                            styles: $styles::default(),
                        },
                    )+
                }
            }

            pub fn element_type(&self) -> ElementType {
                match self {
                    $( ElementKind::$variant { .. } => ElementType::$variant, )+
                }
            }

            pub fn content(&self) -> &dyn Record {
                match self {
                    $( ElementKind::$variant { content, .. } => content, )+
                }
            }

            pub fn content_mut(&mut self) -> &mut dyn Record {
                match self {
                    $( ElementKind::$variant { content, .. } => content, )+
                }
            }

            pub fn styles(&self) -> &dyn Record {
                match self {
                    $( ElementKind::$variant { styles, .. } => styles, )+
                }
            }

            pub fn styles_mut(&mut self) -> &mut dyn Record {
                match self {
                    $( ElementKind::$variant { styles, .. } => styles, )+
                }
            }
        }
    };
}

element_kinds! {
    Header("header", HeaderContent, HeaderStyles),
    Text("text", TextContent, TextStyles),
    Heading("heading", HeadingContent, HeadingStyles),
    Image("image", ImageContent, ImageStyles),
    Button("button", ButtonContent, ButtonStyles),
    Divider("divider", DividerContent, DividerStyles),
    Spacer("spacer", SpacerContent, SpacerStyles),
    Social("social", SocialContent, SocialStyles),
    Footer("footer", FooterContent, FooterStyles),
    Columns("columns", ColumnsContent, ColumnsStyles),
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One block of the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,

    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// New element of `element_type` filled with the registered defaults
    pub fn new(id: ElementId, element_type: ElementType) -> Self {
        Self {
            id,
            kind: ElementKind::with_defaults(element_type),
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldValue;

    #[test]
    fn test_parse_known_and_unknown_tags() {
        assert_eq!("button".parse::<ElementType>().unwrap(), ElementType::Button);
        let err = "carousel".parse::<ElementType>().unwrap_err();
        assert!(matches!(err, DocumentError::UnknownElementType(tag) if tag == "carousel"));
    }

    #[test]
    fn test_every_type_round_trips_through_its_tag() {
        for ty in ElementType::ALL {
            assert_eq!(ty.as_str().parse::<ElementType>().unwrap(), *ty);
            assert_eq!(ElementKind::with_defaults(*ty).element_type(), *ty);
        }
    }

    #[test]
    fn test_element_json_shape() {
        let element = Element::new(ElementId::new("spacer-1"), ElementType::Spacer);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "spacer-1",
                "type": "spacer",
                "content": { "height": 32 },
                "styles": {}
            })
        );
    }

    #[test]
    fn test_missing_keys_are_filled_from_defaults() {
        let json = r#"{"id": "button-7", "type": "button", "content": {"text": "Agende já"}}"#;
        let element: Element = serde_json::from_str(json).unwrap();

        assert_eq!(element.kind.content().get("text"), Some(FieldValue::from("Agende já")));
        assert_eq!(element.kind.content().get("url"), Some(FieldValue::from("#")));
        assert_eq!(element.kind.styles().get("borderRadius"), Some(FieldValue::Number(6)));
    }

    #[test]
    fn test_unknown_type_tag_is_rejected() {
        let json = r#"{"id": "x-1", "type": "carousel"}"#;
        assert!(serde_json::from_str::<Element>(json).is_err());
    }
}
