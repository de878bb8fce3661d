//! Content and style records for every element type, with their registered
//! defaults.

use crate::fields::{Align, DividerStyle, HeadingLevel};

record! {
    pub struct HeaderContent {
        title("title"): String = "Clínica Vida".into(),
        subtitle("subtitle"): String = "Cuidando de você e da sua família".into(),
    }
}

record! {
    pub struct HeaderStyles {
        background_color("backgroundColor"): String = "#0f766e".into(),
        text_color("textColor"): String = "#ffffff".into(),
        padding("padding"): u32 = 32,
        text_align("textAlign"): Align = Align::Center,
    }
}

record! {
    pub struct TextContent {
        text("text"): String = "Escreva seu texto aqui.".into(),
    }
}

record! {
    pub struct TextStyles {
        font_size("fontSize"): u32 = 16,
        color("color"): String = "#374151".into(),
        text_align("textAlign"): Align = Align::Left,
        padding("padding"): u32 = 16,
    }
}

record! {
    pub struct HeadingContent {
        text("text"): String = "Título da seção".into(),
        level("level"): HeadingLevel = HeadingLevel::H2,
    }
}

record! {
    pub struct HeadingStyles {
        font_size("fontSize"): u32 = 24,
        color("color"): String = "#111827".into(),
        text_align("textAlign"): Align = Align::Left,
        padding("padding"): u32 = 16,
    }
}

record! {
    pub struct ImageContent {
        url("url"): String = String::new(),
        alt("alt"): String = "Descrição da imagem".into(),
        /// CSS width, e.g. `100%` or `320px`
        width("width"): String = "100%".into(),
    }
}

record! {
    pub struct ImageStyles {
        border_radius("borderRadius"): u32 = 8,
        padding("padding"): u32 = 16,
    }
}

record! {
    pub struct ButtonContent {
        text("text"): String = "Agendar consulta".into(),
        url("url"): String = "#".into(),
    }
}

record! {
    pub struct ButtonStyles {
        background_color("backgroundColor"): String = "#0f766e".into(),
        text_color("textColor"): String = "#ffffff".into(),
        font_size("fontSize"): u32 = 16,
        border_radius("borderRadius"): u32 = 6,
        padding("padding"): u32 = 16,
        text_align("textAlign"): Align = Align::Center,
    }
}

record! {
    pub struct DividerContent {
        style("style"): DividerStyle = DividerStyle::Solid,
    }
}

record! {
    pub struct DividerStyles {
        color("color"): String = "#e5e7eb".into(),
        thickness("thickness"): u32 = 1,
        padding("padding"): u32 = 16,
    }
}

record! {
    pub struct SpacerContent {
        height("height"): u32 = 32,
    }
}

record! {
    pub struct SpacerStyles {}
}

record! {
    /// Profile links; empty entries are not rendered
    pub struct SocialContent {
        facebook("facebook"): String = String::new(),
        instagram("instagram"): String = String::new(),
        linkedin("linkedin"): String = String::new(),
        whatsapp("whatsapp"): String = String::new(),
    }
}

record! {
    pub struct SocialStyles {
        text_align("textAlign"): Align = Align::Center,
        padding("padding"): u32 = 16,
    }
}

record! {
    pub struct FooterContent {
        text("text"): String = "Clínica Vida · Todos os direitos reservados".into(),
        address("address"): String = String::new(),
        unsubscribe_text("unsubscribeText"): String = "Cancelar inscrição".into(),
    }
}

record! {
    pub struct FooterStyles {
        background_color("backgroundColor"): String = "#f3f4f6".into(),
        text_color("textColor"): String = "#6b7280".into(),
        font_size("fontSize"): u32 = 12,
        padding("padding"): u32 = 24,
    }
}

record! {
    /// Leaf placeholder; columns never hold child elements
    pub struct ColumnsContent {
        count("count"): u32 = 2,
    }
}

record! {
    pub struct ColumnsStyles {
        gap("gap"): u32 = 16,
        padding("padding"): u32 = 16,
    }
}

/// Social networks in render order, paired with their display name
pub const SOCIAL_NETWORKS: &[(&str, &str)] = &[
    ("facebook", "Facebook"),
    ("instagram", "Instagram"),
    ("linkedin", "LinkedIn"),
    ("whatsapp", "WhatsApp"),
];

impl SocialContent {
    /// Non-empty links as `(display name, url)` in render order
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let urls = [
            self.facebook.as_str(),
            self.instagram.as_str(),
            self.linkedin.as_str(),
            self.whatsapp.as_str(),
        ];
        SOCIAL_NETWORKS
            .iter()
            .zip(urls)
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|((_, name), url)| (*name, url))
            .collect()
    }
}
