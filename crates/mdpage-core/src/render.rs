//! Markdown rendering
//!
//! Converts the element model into Markdown text. Every renderer appends to a
//! caller-provided buffer; the public `render` methods allocate one.

use std::fmt;

use crate::ast::{Element, Header, InlineText, ListItem, MdList, Paragraph, Table};

const LIST_INDENT: &str = "  ";
const CELL_SEPARATOR: &str = " | ";

impl InlineText {
    /// Render as Markdown.
    ///
    /// Styling is applied inside out: bold or italics, then link, then the
    /// image marker, then code.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 8);
        render_inline(self, &mut out);
        out
    }
}

impl Header {
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_header(self, &mut out);
        out
    }
}

impl Paragraph {
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_paragraph(self, &mut out);
        out
    }
}

impl MdList {
    /// Render as a top-level list (depth 0)
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_list(self, 0, &mut out);
        out
    }
}

impl Table {
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_table(self, &mut out);
        out
    }
}

impl Element {
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_element(self, &mut out);
        out
    }
}

/// Render an element into `out`
pub fn render_element(element: &Element, out: &mut String) {
    match element {
        Element::Header(header) => render_header(header, out),
        Element::Paragraph(paragraph) => render_paragraph(paragraph, out),
        Element::List(list) => render_list(list, 0, out),
        Element::Table(table) => render_table(table, out),
    }
}

fn render_inline(inline: &InlineText, out: &mut String) {
    let mut text = if inline.bold {
        format!("**{}**", inline.text)
    } else if inline.italics {
        format!("*{}*", inline.text)
    } else {
        inline.text.clone()
    };

    if let Some(url) = &inline.url {
        text = format!("[{}]({})", text, url);
        if inline.image {
            text.insert(0, '!');
        }
    }

    if inline.code {
        out.push('`');
        out.push_str(&text);
        out.push('`');
    } else {
        out.push_str(&text);
    }
}

fn render_inlines(inlines: &[InlineText], separator: &str, out: &mut String) {
    for (i, inline) in inlines.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        render_inline(inline, out);
    }
}

fn render_header(header: &Header, out: &mut String) {
    for _ in 0..header.level() {
        out.push('#');
    }
    out.push(' ');
    render_inline(&header.text, out);
}

fn render_paragraph(paragraph: &Paragraph, out: &mut String) {
    if paragraph.code {
        out.push_str("```");
        out.push_str(&paragraph.lang);
        out.push('\n');
        render_inlines(&paragraph.content, " ", out);
        out.push_str("\n```");
    } else {
        if paragraph.quote {
            out.push_str("> ");
        }
        render_inlines(&paragraph.content, " ", out);
    }
}

fn render_list(list: &MdList, depth: usize, out: &mut String) {
    let indent = LIST_INDENT.repeat(depth);

    // The ordinal counts every item, nested lists included.
    for (i, item) in list.items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match item {
            ListItem::List(nested) => render_list(nested, depth + 1, out),
            ListItem::Text(text) => {
                out.push_str(&indent);
                if list.ordered {
                    out.push_str(&(i + 1).to_string());
                    out.push_str(". ");
                } else {
                    out.push_str("- ");
                }
                render_inline(text, out);
            }
        }
    }
}

fn render_table(table: &Table, out: &mut String) {
    let mut rows: Vec<String> = Vec::with_capacity(table.body.len() + 4);

    if let Some(header) = table.header.as_deref().filter(|h| !h.is_empty()) {
        rows.push(table_row(header));
        rows.push(separator_row(header.len()));
    }

    rows.extend(table.body.iter().map(|row| table_row(row)));

    if let Some(footer) = table.footer.as_deref().filter(|f| !f.is_empty()) {
        rows.push(separator_row(footer.len()));
        rows.push(table_row(footer));
    }

    out.push_str(&rows.join("\n"));
}

fn table_row(cells: &[InlineText]) -> String {
    let mut row = String::new();
    render_inlines(cells, CELL_SEPARATOR, &mut row);
    row
}

fn separator_row(width: usize) -> String {
    vec!["-"; width].join(CELL_SEPARATOR)
}

macro_rules! display_via_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.render())
                }
            }
        )*
    };
}

display_via_render!(InlineText, Header, Paragraph, MdList, Table, Element);
