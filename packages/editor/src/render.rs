//! # Rendering Pipeline
//!
//! Three views of the same document:
//!
//! - **Edit**: the interactive canvas. Every block is framed with a drag
//!   handle, hover actions (duplicate, delete) and, when selected, an outline.
//!   Hosts route clicks back through the `data-action` and `data-element-id`
//!   attributes.
//! - **Preview**: the same blocks inside a device-width frame, no affordances.
//! - **Code**: the exported email markup.
//!
//! Edit and preview share [`render_block`], so both show a block the same way.

use crate::selection::Interaction;
use crate::vdom::VNode;
use letterpress_compiler_html::{compile_to_html, CompileOptions, UNSUBSCRIBE_URL};
use letterpress_document::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const EMPTY_CANVAS_MESSAGE: &str = "Nenhum conteúdo ainda. Adicione elementos pela paleta.";

const ACCENT: &str = "#0f766e";
const MUTED: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Mobile,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        match self {
            Device::Desktop => 600,
            Device::Mobile => 375,
        }
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Device::Desktop),
            "mobile" => Ok(Device::Mobile),
            other => Err(format!("unknown device '{}'", other)),
        }
    }
}

/// Click targets on the edit canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasAction {
    Select,
    Duplicate,
    Delete,
    PickUp,
}

impl CanvasAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanvasAction::Select => "select",
            CanvasAction::Duplicate => "duplicate",
            CanvasAction::Delete => "delete",
            CanvasAction::PickUp => "pick-up",
        }
    }
}

impl FromStr for CanvasAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(CanvasAction::Select),
            "duplicate" => Ok(CanvasAction::Duplicate),
            "delete" => Ok(CanvasAction::Delete),
            "pick-up" => Ok(CanvasAction::PickUp),
            other => Err(format!("unknown canvas action '{}'", other)),
        }
    }
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Canvas(VNode),
    Preview(VNode),
    Code(String),
}

impl Rendered {
    pub fn to_html(&self) -> String {
        match self {
            Rendered::Canvas(node) | Rendered::Preview(node) => node.to_html(),
            Rendered::Code(markup) => markup.clone(),
        }
    }
}

pub fn render(doc: &Document, interaction: &Interaction, mode: ViewMode, device: Device) -> Rendered {
    match mode {
        ViewMode::Edit => Rendered::Canvas(render_edit(doc, interaction)),
        ViewMode::Preview => Rendered::Preview(render_preview(doc, device)),
        ViewMode::Code => Rendered::Code(render_code(doc)),
    }
}

/// Interactive canvas
pub fn render_edit(doc: &Document, interaction: &Interaction) -> VNode {
    let canvas = VNode::element("div")
        .with_attr("class", "canvas")
        .with_style("margin", "0 auto")
        .with_style("max-width", "600px");

    if doc.is_empty() {
        return canvas.with_child(
            VNode::element("div")
                .with_attr("class", "canvas-empty")
                .with_style("padding", "48px 16px")
                .with_style("text-align", "center")
                .with_style("color", MUTED)
                .with_child(VNode::element("p").with_child(VNode::text(EMPTY_CANVAS_MESSAGE))),
        );
    }

    canvas.with_children(
        doc.elements()
            .iter()
            .map(|element| edit_frame(element, interaction))
            .collect(),
    )
}

fn edit_frame(element: &Element, interaction: &Interaction) -> VNode {
    let selected = interaction.is_selected(&element.id);
    let dragging = interaction.is_dragging(&element.id);

    let mut class = String::from("canvas-block");
    if selected {
        class.push_str(" is-selected");
    }
    if dragging {
        class.push_str(" is-dragging");
    }

    let mut frame = VNode::element("div")
        .with_key(element.id.as_str())
        .with_attr("class", class)
        .with_attr("data-action", CanvasAction::Select.as_str())
        .with_attr("data-element-type", element.element_type().as_str())
        .with_style("position", "relative");
    if selected {
        frame = frame.with_style("outline", format!("2px solid {}", ACCENT));
    }
    if dragging {
        frame = frame.with_style("opacity", "0.5");
    }

    let label = descriptor(element.element_type()).label;
    frame
        .with_child(
            action_button(CanvasAction::PickUp, &element.id, "Arrastar")
                .with_attr("class", "block-handle")
                .with_child(VNode::text("⋮⋮")),
        )
        .with_child(
            VNode::element("div")
                .with_attr("class", "block-actions")
                .with_attr("data-reveal", "hover")
                .with_child(action_button(CanvasAction::Duplicate, &element.id, "Duplicar"))
                .with_child(action_button(CanvasAction::Delete, &element.id, "Excluir")),
        )
        .with_child(
            VNode::element("span")
                .with_attr("class", "block-label")
                .with_child(VNode::text(label)),
        )
        .with_child(render_block(element))
}

fn action_button(action: CanvasAction, id: &ElementId, title: &str) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_attr("data-action", action.as_str())
        .with_attr("data-element-id", id.as_str())
        .with_attr("title", title)
}

/// Read-only preview in a device-width frame
pub fn render_preview(doc: &Document, device: Device) -> VNode {
    VNode::element("div")
        .with_attr("class", "preview")
        .with_attr("data-device", device.as_str())
        .with_style("width", format!("{}px", device.width()))
        .with_style("max-width", "100%")
        .with_style("margin", "0 auto")
        .with_style("background-color", "#ffffff")
        .with_children(doc.elements().iter().map(render_block).collect())
}

/// Exported markup with default compile options
pub fn render_code(doc: &Document) -> String {
    compile_to_html(doc, CompileOptions::default())
}

fn px(n: u32) -> String {
    format!("{}px", n)
}

/// Text with line breaks as `<br>` nodes
fn multiline(text: &str) -> Vec<VNode> {
    let mut nodes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            nodes.push(VNode::element("br"));
        }
        nodes.push(VNode::text(line));
    }
    nodes
}

fn placeholder(message: &str) -> VNode {
    VNode::element("div")
        .with_attr("class", "block-placeholder")
        .with_style("border", "1px dashed #d1d5db")
        .with_style("padding", "24px")
        .with_style("color", MUTED)
        .with_style("text-align", "center")
        .with_child(VNode::text(message))
}

/// Visual mapping of one element, shared by edit and preview
pub fn render_block(element: &Element) -> VNode {
    match &element.kind {
        ElementKind::Header { content, styles } => {
            let mut block = VNode::element("div")
                .with_style("background-color", &styles.background_color)
                .with_style("color", &styles.text_color)
                .with_style("padding", px(styles.padding))
                .with_style("text-align", styles.text_align.as_str())
                .with_child(
                    VNode::element("h1")
                        .with_style("margin", "0")
                        .with_style("font-size", "28px")
                        .with_child(VNode::text(&content.title)),
                );
            if !content.subtitle.trim().is_empty() {
                block = block.with_child(
                    VNode::element("p")
                        .with_style("margin", "8px 0 0 0")
                        .with_child(VNode::text(&content.subtitle)),
                );
            }
            block
        }

        ElementKind::Text { content, styles } => VNode::element("div")
            .with_style("padding", px(styles.padding))
            .with_style("text-align", styles.text_align.as_str())
            .with_child(
                VNode::element("p")
                    .with_style("margin", "0")
                    .with_style("font-size", px(styles.font_size))
                    .with_style("line-height", "1.5")
                    .with_style("color", &styles.color)
                    .with_children(multiline(&content.text)),
            ),

        ElementKind::Heading { content, styles } => VNode::element("div")
            .with_style("padding", px(styles.padding))
            .with_style("text-align", styles.text_align.as_str())
            .with_child(
                VNode::element(content.level.as_str())
                    .with_style("margin", "0")
                    .with_style("font-size", px(styles.font_size))
                    .with_style("color", &styles.color)
                    .with_child(VNode::text(&content.text)),
            ),

        ElementKind::Image { content, styles } => {
            let block = VNode::element("div")
                .with_style("padding", px(styles.padding))
                .with_style("text-align", "center");
            if content.url.trim().is_empty() {
                return block.with_child(placeholder("Adicione a URL da imagem"));
            }
            block.with_child(
                VNode::element("img")
                    .with_attr("src", &content.url)
                    .with_attr("alt", &content.alt)
                    .with_style("width", &content.width)
                    .with_style("max-width", "100%")
                    .with_style("border-radius", px(styles.border_radius)),
            )
        }

        ElementKind::Button { content, styles } => VNode::element("div")
            .with_style("padding", px(styles.padding))
            .with_style("text-align", styles.text_align.as_str())
            .with_child(
                VNode::element("a")
                    .with_attr("href", &content.url)
                    .with_style("display", "inline-block")
                    .with_style("padding", "12px 24px")
                    .with_style("background-color", &styles.background_color)
                    .with_style("color", &styles.text_color)
                    .with_style("font-size", px(styles.font_size))
                    .with_style("font-weight", "bold")
                    .with_style("border-radius", px(styles.border_radius))
                    .with_style("text-decoration", "none")
                    .with_child(VNode::text(&content.text)),
            ),

        ElementKind::Divider { content, styles } => VNode::element("div")
            .with_style("padding", px(styles.padding))
            .with_child(VNode::element("hr").with_style("border", "0").with_style(
                "border-top",
                format!("{} {} {}", px(styles.thickness), content.style, styles.color),
            )),

        ElementKind::Spacer { content, .. } => {
            VNode::element("div").with_style("height", px(content.height))
        }

        ElementKind::Social { content, styles } => {
            let block = VNode::element("div")
                .with_style("padding", px(styles.padding))
                .with_style("text-align", styles.text_align.as_str());
            let links = content.links();
            if links.is_empty() {
                return block.with_child(placeholder("Adicione os links das redes sociais"));
            }
            block.with_children(
                links
                    .into_iter()
                    .map(|(name, url)| {
                        VNode::element("a")
                            .with_attr("href", url)
                            .with_style("margin", "0 8px")
                            .with_style("color", ACCENT)
                            .with_child(VNode::text(name))
                    })
                    .collect(),
            )
        }

        ElementKind::Footer { content, styles } => {
            let mut block = VNode::element("div")
                .with_style("background-color", &styles.background_color)
                .with_style("color", &styles.text_color)
                .with_style("font-size", px(styles.font_size))
                .with_style("padding", px(styles.padding))
                .with_style("text-align", "center")
                .with_child(
                    VNode::element("p")
                        .with_style("margin", "0")
                        .with_children(multiline(&content.text)),
                );
            if !content.address.trim().is_empty() {
                block = block.with_child(
                    VNode::element("p")
                        .with_style("margin", "8px 0 0 0")
                        .with_child(VNode::text(&content.address)),
                );
            }
            if !content.unsubscribe_text.trim().is_empty() {
                block = block.with_child(
                    VNode::element("a")
                        .with_attr("href", UNSUBSCRIBE_URL)
                        .with_style("color", &styles.text_color)
                        .with_child(VNode::text(&content.unsubscribe_text)),
                );
            }
            block
        }

        ElementKind::Columns { content, styles } => VNode::element("div")
            .with_style("display", "flex")
            .with_style("gap", px(styles.gap))
            .with_style("padding", px(styles.padding))
            .with_children(
                (1..=content.count)
                    .map(|n| {
                        VNode::element("div")
                            .with_style("flex", "1")
                            .with_style("border", "1px dashed #d1d5db")
                            .with_style("padding", "16px")
                            .with_style("color", MUTED)
                            .with_child(VNode::text(format!("Coluna {}", n)))
                    })
                    .collect(),
            ),
    }
}
