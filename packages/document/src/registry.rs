//! # Element Type Registry
//!
//! Static catalog of element types: display metadata for the palette and the
//! editable field schema for the property editor. Default values live with
//! the records in [`crate::blocks`] and are reached through
//! [`ElementKind::with_defaults`].
//!
//! Lookup is a total function over [`ElementType`]; unknown tags can only
//! appear at string/JSON boundaries and are rejected there.

use crate::element::{ElementKind, ElementType};
use crate::fields::{Align, DividerStyle, FieldValue, HeadingLevel};
use serde::Serialize;

/// Palette grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Content,
}

/// How a field is edited and which values it admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Multiline,
    Url,
    Color,
    Number { min: u32, max: u32 },
    Choice { options: &'static [&'static str] },
}

/// One editable field of a content or style record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }

    /// Bring a value into the field's declared domain.
    ///
    /// Numbers are clamped and colours normalized to lowercase `#rrggbb`.
    /// Returns `None` for a colour that is not a hex colour; other kinds pass
    /// through and are type-checked by the record.
    pub fn normalize(&self, value: FieldValue) -> Option<FieldValue> {
        match (self.kind, value) {
            (FieldKind::Number { min, max }, FieldValue::Number(n)) => {
                Some(FieldValue::Number(n.clamp(min, max)))
            }
            (FieldKind::Number { min, max }, FieldValue::Text(s)) => match s.trim().parse::<u32>() {
                Ok(n) => Some(FieldValue::Number(n.clamp(min, max))),
                Err(_) => Some(FieldValue::Text(s)),
            },
            (FieldKind::Color, FieldValue::Text(s)) => normalize_color(&s).map(FieldValue::Text),
            (FieldKind::Color, FieldValue::Number(_)) => None,
            (_, value) => Some(value),
        }
    }
}

/// `#rgb`, `rgb`, `#rrggbb` or `rrggbb` (any case) as lowercase `#rrggbb`
pub fn normalize_color(input: &str) -> Option<String> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let hex = hex.to_ascii_lowercase();
    match hex.len() {
        6 => Some(format!("#{}", hex)),
        3 => Some(hex.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        })),
        _ => None,
    }
}

/// Registry entry for one element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub element_type: ElementType,
    pub label: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub content_fields: &'static [FieldSpec],
    pub style_fields: &'static [FieldSpec],
}

impl TypeDescriptor {
    pub fn content_field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.content_fields.iter().find(|f| f.key == key)
    }

    pub fn style_field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.style_fields.iter().find(|f| f.key == key)
    }

    pub fn defaults(&self) -> ElementKind {
        ElementKind::with_defaults(self.element_type)
    }
}

const FONT_SIZE: FieldKind = FieldKind::Number { min: 10, max: 72 };
const PADDING: FieldKind = FieldKind::Number { min: 0, max: 96 };
const BORDER_RADIUS: FieldKind = FieldKind::Number { min: 0, max: 48 };
const ALIGN: FieldKind = FieldKind::Choice { options: Align::OPTIONS };

static HEADER: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Header,
    label: "Cabeçalho",
    icon: "layout-panel-top",
    category: Category::Layout,
    content_fields: &[
        FieldSpec::new("title", "Título", FieldKind::Text),
        FieldSpec::new("subtitle", "Subtítulo", FieldKind::Text),
    ],
    style_fields: &[
        FieldSpec::new("backgroundColor", "Cor de fundo", FieldKind::Color),
        FieldSpec::new("textColor", "Cor do texto", FieldKind::Color),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
        FieldSpec::new("textAlign", "Alinhamento", ALIGN),
    ],
};

static TEXT: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Text,
    label: "Texto",
    icon: "type",
    category: Category::Content,
    content_fields: &[FieldSpec::new("text", "Texto", FieldKind::Multiline)],
    style_fields: &[
        FieldSpec::new("fontSize", "Tamanho da fonte", FONT_SIZE),
        FieldSpec::new("color", "Cor do texto", FieldKind::Color),
        FieldSpec::new("textAlign", "Alinhamento", ALIGN),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

static HEADING: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Heading,
    label: "Título",
    icon: "heading",
    category: Category::Content,
    content_fields: &[
        FieldSpec::new("text", "Texto", FieldKind::Text),
        FieldSpec::new("level", "Nível", FieldKind::Choice { options: HeadingLevel::OPTIONS }),
    ],
    style_fields: &[
        FieldSpec::new("fontSize", "Tamanho da fonte", FONT_SIZE),
        FieldSpec::new("color", "Cor do texto", FieldKind::Color),
        FieldSpec::new("textAlign", "Alinhamento", ALIGN),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

static IMAGE: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Image,
    label: "Imagem",
    icon: "image",
    category: Category::Content,
    content_fields: &[
        FieldSpec::new("url", "URL da imagem", FieldKind::Url),
        FieldSpec::new("alt", "Texto alternativo", FieldKind::Text),
        FieldSpec::new("width", "Largura", FieldKind::Text),
    ],
    style_fields: &[
        FieldSpec::new("borderRadius", "Arredondamento", BORDER_RADIUS),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

static BUTTON: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Button,
    label: "Botão",
    icon: "mouse-pointer-click",
    category: Category::Content,
    content_fields: &[
        FieldSpec::new("text", "Texto do botão", FieldKind::Text),
        FieldSpec::new("url", "Link", FieldKind::Url),
    ],
    style_fields: &[
        FieldSpec::new("backgroundColor", "Cor de fundo", FieldKind::Color),
        FieldSpec::new("textColor", "Cor do texto", FieldKind::Color),
        FieldSpec::new("fontSize", "Tamanho da fonte", FONT_SIZE),
        FieldSpec::new("borderRadius", "Arredondamento", BORDER_RADIUS),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
        FieldSpec::new("textAlign", "Alinhamento", ALIGN),
    ],
};

static DIVIDER: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Divider,
    label: "Divisor",
    icon: "minus",
    category: Category::Layout,
    content_fields: &[FieldSpec::new(
        "style",
        "Estilo da linha",
        FieldKind::Choice { options: DividerStyle::OPTIONS },
    )],
    style_fields: &[
        FieldSpec::new("color", "Cor", FieldKind::Color),
        FieldSpec::new("thickness", "Espessura", FieldKind::Number { min: 1, max: 10 }),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

static SPACER: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Spacer,
    label: "Espaçador",
    icon: "move-vertical",
    category: Category::Layout,
    content_fields: &[FieldSpec::new("height", "Altura", FieldKind::Number { min: 8, max: 200 })],
    style_fields: &[],
};

static SOCIAL: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Social,
    label: "Redes sociais",
    icon: "share-2",
    category: Category::Content,
    content_fields: &[
        FieldSpec::new("facebook", "Facebook", FieldKind::Url),
        FieldSpec::new("instagram", "Instagram", FieldKind::Url),
        FieldSpec::new("linkedin", "LinkedIn", FieldKind::Url),
        FieldSpec::new("whatsapp", "WhatsApp", FieldKind::Url),
    ],
    style_fields: &[
        FieldSpec::new("textAlign", "Alinhamento", ALIGN),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

static FOOTER: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Footer,
    label: "Rodapé",
    icon: "panel-bottom",
    category: Category::Layout,
    content_fields: &[
        FieldSpec::new("text", "Texto", FieldKind::Multiline),
        FieldSpec::new("address", "Endereço", FieldKind::Text),
        FieldSpec::new("unsubscribeText", "Texto de descadastro", FieldKind::Text),
    ],
    style_fields: &[
        FieldSpec::new("backgroundColor", "Cor de fundo", FieldKind::Color),
        FieldSpec::new("textColor", "Cor do texto", FieldKind::Color),
        FieldSpec::new("fontSize", "Tamanho da fonte", FONT_SIZE),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

static COLUMNS: TypeDescriptor = TypeDescriptor {
    element_type: ElementType::Columns,
    label: "Colunas",
    icon: "columns-2",
    category: Category::Layout,
    content_fields: &[FieldSpec::new("count", "Número de colunas", FieldKind::Number { min: 2, max: 4 })],
    style_fields: &[
        FieldSpec::new("gap", "Espaço entre colunas", FieldKind::Number { min: 0, max: 64 }),
        FieldSpec::new("padding", "Espaçamento interno", PADDING),
    ],
};

/// Registry entry for a type
pub fn descriptor(element_type: ElementType) -> &'static TypeDescriptor {
    match element_type {
        ElementType::Header => &HEADER,
        ElementType::Text => &TEXT,
        ElementType::Heading => &HEADING,
        ElementType::Image => &IMAGE,
        ElementType::Button => &BUTTON,
        ElementType::Divider => &DIVIDER,
        ElementType::Spacer => &SPACER,
        ElementType::Social => &SOCIAL,
        ElementType::Footer => &FOOTER,
        ElementType::Columns => &COLUMNS,
    }
}

/// Palette entries of one category, in registry order
pub fn palette(category: Category) -> Vec<&'static TypeDescriptor> {
    ElementType::ALL
        .iter()
        .map(|ty| descriptor(*ty))
        .filter(|d| d.category == category)
        .collect()
}
