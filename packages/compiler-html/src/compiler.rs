use letterpress_document::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid template: {0}")]
    Template(#[from] DocumentError),
}

/// Options for HTML compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Maximum width of the content column, in pixels
    pub max_width: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            max_width: 600,
        }
    }
}

const PAGE_BACKGROUND: &str = "#f4f4f5";
const FONT_STACK: &str = "Arial, Helvetica, sans-serif";
const LINK_COLOR: &str = "#0f766e";

/// Merge tag the sending platform replaces with the recipient's opt-out link
pub const UNSUBSCRIBE_URL: &str = "{{unsubscribe_url}}";

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Write `open`, the body produced by `f` one level deeper, then `close`
    fn block(&mut self, open: &str, close: &str, f: impl FnOnce(&mut Self)) {
        self.add_line(open);
        self.indent();
        f(self);
        self.dedent();
        self.add_line(close);
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Inline `style` attribute value from ordered declarations, escaped for
/// use inside a double-quoted attribute
fn style(declarations: &[(&str, String)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{}: {};", property, escape_html(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn px(n: u32) -> String {
    format!("{}px", n)
}

/// Compile a template document to HTML
#[instrument(skip_all, fields(template = %document.name(), elements = document.len()))]
pub fn compile_to_html(document: &Document, options: CompileOptions) -> String {
    let max_width = options.max_width;
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"pt-BR\">");
    ctx.indent();

    compile_head(document, &mut ctx);

    ctx.add_line(&format!(
        "<body style=\"{}\">",
        style(&[
            ("margin", "0".into()),
            ("padding", "0".into()),
            ("background-color", PAGE_BACKGROUND.into()),
        ])
    ));
    ctx.indent();

    let outer = format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"{}\">",
        style(&[("background-color", PAGE_BACKGROUND.into())])
    );
    ctx.block(&outer, "</table>", |ctx| {
        ctx.block("<tr>", "</tr>", |ctx| {
            let cell = format!("<td align=\"center\" style=\"{}\">", style(&[("padding", "24px 0".into())]));
            ctx.block(&cell, "</td>", |ctx| {
                let container = format!(
                    "<table role=\"presentation\" width=\"{}\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"{}\">",
                    max_width,
                    style(&[
                        ("max-width", px(max_width)),
                        ("width", "100%".into()),
                        ("background-color", "#ffffff".into()),
                        ("font-family", FONT_STACK.into()),
                    ])
                );
                ctx.block(&container, "</table>", |ctx| {
                    for element in document.elements() {
                        compile_element(element, ctx);
                    }
                });
            });
        });
    });

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    debug!("HTML compilation complete");
    ctx.get_output()
}

/// Parse a serialized template and compile it.
///
/// Unknown element types and duplicate ids fail here rather than producing
/// partial output.
pub fn compile_template_json(json: &str, options: CompileOptions) -> Result<String, CompileError> {
    let template = Template::from_json(json)?;
    let document = Document::from_template(template)?;
    Ok(compile_to_html(&document, options))
}

fn compile_head(document: &Document, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">");

    let title = if document.name().trim().is_empty() {
        "Email"
    } else {
        document.name()
    };
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));

    ctx.dedent();
    ctx.add_line("</head>");
}

/// One element becomes one row of the container table
fn compile_element(element: &Element, ctx: &mut Context) {
    ctx.block("<tr>", "</tr>", |ctx| match &element.kind {
        ElementKind::Header { content, styles } => compile_header(content, styles, ctx),
        ElementKind::Text { content, styles } => compile_text(content, styles, ctx),
        ElementKind::Heading { content, styles } => compile_heading(content, styles, ctx),
        ElementKind::Image { content, styles } => compile_image(content, styles, ctx),
        ElementKind::Button { content, styles } => compile_button(content, styles, ctx),
        ElementKind::Divider { content, styles } => compile_divider(content, styles, ctx),
        ElementKind::Spacer { content, .. } => compile_spacer(content, ctx),
        ElementKind::Social { content, styles } => compile_social(content, styles, ctx),
        ElementKind::Footer { content, styles } => compile_footer(content, styles, ctx),
        ElementKind::Columns { content, styles } => compile_columns(content, styles, ctx),
    });
}

fn cell(declarations: &[(&str, String)]) -> String {
    format!("<td style=\"{}\">", style(declarations))
}

fn compile_header(content: &HeaderContent, styles: &HeaderStyles, ctx: &mut Context) {
    let open = cell(&[
        ("background-color", styles.background_color.clone()),
        ("color", styles.text_color.clone()),
        ("padding", px(styles.padding)),
        ("text-align", styles.text_align.to_string()),
    ]);
    ctx.block(&open, "</td>", |ctx| {
        ctx.add_line(&format!(
            "<h1 style=\"{}\">{}</h1>",
            style(&[
                ("margin", "0".into()),
                ("font-size", "28px".into()),
                ("color", styles.text_color.clone()),
            ]),
            escape_html(&content.title)
        ));
        if !content.subtitle.trim().is_empty() {
            ctx.add_line(&format!(
                "<p style=\"{}\">{}</p>",
                style(&[
                    ("margin", "8px 0 0 0".into()),
                    ("font-size", "16px".into()),
                    ("color", styles.text_color.clone()),
                ]),
                escape_html(&content.subtitle)
            ));
        }
    });
}

fn compile_text(content: &TextContent, styles: &TextStyles, ctx: &mut Context) {
    let open = cell(&[
        ("padding", px(styles.padding)),
        ("text-align", styles.text_align.to_string()),
    ]);
    ctx.block(&open, "</td>", |ctx| {
        ctx.add_line(&format!(
            "<p style=\"{}\">{}</p>",
            style(&[
                ("margin", "0".into()),
                ("font-size", px(styles.font_size)),
                ("line-height", "1.5".into()),
                ("color", styles.color.clone()),
            ]),
            escape_multiline(&content.text)
        ));
    });
}

fn compile_heading(content: &HeadingContent, styles: &HeadingStyles, ctx: &mut Context) {
    let open = cell(&[
        ("padding", px(styles.padding)),
        ("text-align", styles.text_align.to_string()),
    ]);
    let tag = content.level.as_str();
    ctx.block(&open, "</td>", |ctx| {
        ctx.add_line(&format!(
            "<{tag} style=\"{}\">{}</{tag}>",
            style(&[
                ("margin", "0".into()),
                ("font-size", px(styles.font_size)),
                ("color", styles.color.clone()),
            ]),
            escape_html(&content.text),
            tag = tag
        ));
    });
}

fn compile_image(content: &ImageContent, styles: &ImageStyles, ctx: &mut Context) {
    let open = format!(
        "<td align=\"center\" style=\"{}\">",
        style(&[("padding", px(styles.padding))])
    );
    ctx.block(&open, "</td>", |ctx| {
        if content.url.trim().is_empty() {
            ctx.add_line("<!-- image without source -->");
            return;
        }
        ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\" style=\"{}\" />",
            escape_html(&content.url),
            escape_html(&content.alt),
            style(&[
                ("display", "block".into()),
                ("width", content.width.clone()),
                ("max-width", "100%".into()),
                ("height", "auto".into()),
                ("border", "0".into()),
                ("border-radius", px(styles.border_radius)),
            ])
        ));
    });
}

fn compile_button(content: &ButtonContent, styles: &ButtonStyles, ctx: &mut Context) {
    let open = format!(
        "<td align=\"{}\" style=\"{}\">",
        styles.text_align,
        style(&[("padding", px(styles.padding))])
    );
    ctx.block(&open, "</td>", |ctx| {
        let table = format!(
            "<table role=\"presentation\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" align=\"{}\">",
            styles.text_align
        );
        ctx.block(&table, "</table>", |ctx| {
            ctx.block("<tr>", "</tr>", |ctx| {
                let inner = cell(&[
                    ("background-color", styles.background_color.clone()),
                    ("border-radius", px(styles.border_radius)),
                ]);
                ctx.block(&inner, "</td>", |ctx| {
                    ctx.add_line(&format!(
                        "<a href=\"{}\" target=\"_blank\" style=\"{}\">{}</a>",
                        escape_html(&content.url),
                        style(&[
                            ("display", "inline-block".into()),
                            ("padding", "12px 24px".into()),
                            ("font-size", px(styles.font_size)),
                            ("font-weight", "bold".into()),
                            ("color", styles.text_color.clone()),
                            ("text-decoration", "none".into()),
                            ("border-radius", px(styles.border_radius)),
                        ]),
                        escape_html(&content.text)
                    ));
                });
            });
        });
    });
}

fn compile_divider(content: &DividerContent, styles: &DividerStyles, ctx: &mut Context) {
    let open = cell(&[("padding", px(styles.padding))]);
    ctx.block(&open, "</td>", |ctx| {
        ctx.add_line(&format!(
            "<div style=\"{}\">&nbsp;</div>",
            style(&[
                (
                    "border-top",
                    format!("{} {} {}", px(styles.thickness), content.style, styles.color),
                ),
                ("font-size", "0".into()),
                ("line-height", "0".into()),
            ])
        ));
    });
}

fn compile_spacer(content: &SpacerContent, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<td style=\"{}\">&nbsp;</td>",
        style(&[
            ("height", px(content.height)),
            ("font-size", "0".into()),
            ("line-height", "0".into()),
        ])
    ));
}

fn compile_social(content: &SocialContent, styles: &SocialStyles, ctx: &mut Context) {
    let open = cell(&[
        ("padding", px(styles.padding)),
        ("text-align", styles.text_align.to_string()),
    ]);
    ctx.block(&open, "</td>", |ctx| {
        let links = content.links();
        if links.is_empty() {
            ctx.add_line("<!-- no social links -->");
            return;
        }
        for (name, url) in links {
            ctx.add_line(&format!(
                "<a href=\"{}\" target=\"_blank\" style=\"{}\">{}</a>",
                escape_html(url),
                style(&[
                    ("display", "inline-block".into()),
                    ("margin", "0 8px".into()),
                    ("font-size", "14px".into()),
                    ("color", LINK_COLOR.into()),
                    ("text-decoration", "none".into()),
                ]),
                name
            ));
        }
    });
}

fn compile_footer(content: &FooterContent, styles: &FooterStyles, ctx: &mut Context) {
    let open = cell(&[
        ("background-color", styles.background_color.clone()),
        ("color", styles.text_color.clone()),
        ("font-size", px(styles.font_size)),
        ("padding", px(styles.padding)),
        ("text-align", "center".into()),
    ]);
    ctx.block(&open, "</td>", |ctx| {
        let first = style(&[("margin", "0".into())]);
        let next = style(&[("margin", "8px 0 0 0".into())]);

        ctx.add_line(&format!("<p style=\"{}\">{}</p>", first, escape_multiline(&content.text)));
        if !content.address.trim().is_empty() {
            ctx.add_line(&format!("<p style=\"{}\">{}</p>", next, escape_html(&content.address)));
        }
        if !content.unsubscribe_text.trim().is_empty() {
            ctx.add_line(&format!(
                "<p style=\"{}\"><a href=\"{}\" style=\"{}\">{}</a></p>",
                next,
                UNSUBSCRIBE_URL,
                style(&[
                    ("color", styles.text_color.clone()),
                    ("text-decoration", "underline".into()),
                ]),
                escape_html(&content.unsubscribe_text)
            ));
        }
    });
}

fn compile_columns(content: &ColumnsContent, styles: &ColumnsStyles, ctx: &mut Context) {
    let open = cell(&[("padding", px(styles.padding))]);
    ctx.block(&open, "</td>", |ctx| {
        let table = "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">";
        ctx.block(table, "</table>", |ctx| {
            ctx.block("<tr>", "</tr>", |ctx| {
                let count = content.count.max(1);
                let width = 100 / count;
                let half_gap = styles.gap / 2;
                for column in 1..=count {
                    ctx.add_line(&format!(
                        "<td width=\"{}%\" valign=\"top\" style=\"{}\">Coluna {}</td>",
                        width,
                        style(&[
                            ("padding", format!("0 {}", px(half_gap))),
                            ("font-size", "14px".into()),
                            ("color", "#6b7280".into()),
                        ]),
                        column
                    ));
                }
            });
        });
    });
}

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape text and turn line breaks into `<br>`
fn escape_multiline(text: &str) -> String {
    text.lines().map(escape_html).collect::<Vec<_>>().join("<br>")
}
