//! Markdown element model
//!
//! This module defines the building blocks of a document: styled inline text
//! and the four block elements that own it. Rendering lives in `render`,
//! verification in `verify`.

use crate::{ElementError, Result};

/// Lowest (largest) header level
pub const MIN_HEADER_LEVEL: u8 = 1;

/// Highest (smallest) header level
pub const MAX_HEADER_LEVEL: u8 = 6;

/// Default language tag for fenced code paragraphs
pub const DEFAULT_CODE_LANG: &str = "generic";

/// The smallest styled unit of text.
///
/// Every element stores its text as `InlineText` rather than plain strings so
/// styling travels with the content. Fields are public; there is no
/// protection against mutation after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineText {
    /// Raw text
    pub text: String,

    /// Link target, also the image source when `image` is set
    pub url: Option<String>,

    /// Render as `**text**`
    pub bold: bool,

    /// Render as `*text*` (ignored when `bold` is set)
    pub italics: bool,

    /// Wrap the whole result in backticks
    pub code: bool,

    /// Render as an image; only has an effect together with `url`
    pub image: bool,
}

impl InlineText {
    /// Create plain, unstyled text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a link
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text).with_url(url)
    }

    /// Create an image with alt text
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            image: true,
            ..Self::link(alt, url)
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }
}

impl From<&str> for InlineText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for InlineText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A section title rendered with hash marks.
///
/// The level is kept inside `[1, 6]` at all times: construction rejects
/// anything else, and `promote`/`demote` stop at the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub text: InlineText,
    level: u8,
}

impl Header {
    /// Create a header, failing if `level` is outside `[1, 6]`
    pub fn new(text: impl Into<InlineText>, level: u8) -> Result<Self> {
        check_header_level(level)?;
        Ok(Self {
            text: text.into(),
            level,
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Move one level up (towards `#`). No-op at level 1.
    pub fn promote(&mut self) {
        if self.level > MIN_HEADER_LEVEL {
            self.level -= 1;
        }
    }

    /// Move one level down (towards `######`). No-op at level 6.
    pub fn demote(&mut self) {
        if self.level < MAX_HEADER_LEVEL {
            self.level += 1;
        }
    }
}

/// Validate a header level
pub fn check_header_level(level: u8) -> Result<()> {
    if (MIN_HEADER_LEVEL..=MAX_HEADER_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(ElementError::ConstraintViolation(format!(
            "header level must be between {} and {}, got {}",
            MIN_HEADER_LEVEL, MAX_HEADER_LEVEL, level
        )))
    }
}

/// A run of inline text, optionally fenced as code or quoted.
///
/// `code` takes priority over `quote` when both are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub content: Vec<InlineText>,
    pub code: bool,
    pub lang: String,
    pub quote: bool,
}

impl Paragraph {
    pub fn new(content: Vec<InlineText>) -> Self {
        Self {
            content,
            code: false,
            lang: DEFAULT_CODE_LANG.to_string(),
            quote: false,
        }
    }

    /// Create a fenced code paragraph tagged with `lang`
    pub fn code_block(code: impl Into<InlineText>, lang: impl Into<String>) -> Self {
        Self {
            code: true,
            lang: lang.into(),
            ..Self::new(vec![code.into()])
        }
    }

    /// Create a blockquote paragraph
    pub fn quote(text: impl Into<InlineText>) -> Self {
        Self {
            quote: true,
            ..Self::new(vec![text.into()])
        }
    }

    /// Append one piece of inline text
    pub fn add(&mut self, text: impl Into<InlineText>) -> &mut Self {
        self.content.push(text.into());
        self
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// An entry of a list: either text or a nested list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Text(InlineText),
    List(MdList),
}

impl From<InlineText> for ListItem {
    fn from(text: InlineText) -> Self {
        ListItem::Text(text)
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        ListItem::Text(text.into())
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        ListItem::Text(text.into())
    }
}

impl From<MdList> for ListItem {
    fn from(list: MdList) -> Self {
        ListItem::List(list)
    }
}

/// An ordered or unordered list.
///
/// Nesting depth is not stored: it is handed down from the parent while
/// rendering, so a list renders the same wherever it is placed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MdList {
    pub items: Vec<ListItem>,
    pub ordered: bool,
}

impl MdList {
    pub fn new<I, T>(items: I, ordered: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ordered,
        }
    }

    pub fn ordered<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        Self::new(items, true)
    }

    pub fn unordered<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        Self::new(items, false)
    }

    pub fn push(&mut self, item: impl Into<ListItem>) -> &mut Self {
        self.items.push(item.into());
        self
    }
}

/// A pipe table with optional header and footer rows.
///
/// Row widths are not checked on construction; call `verify` for that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Option<Vec<InlineText>>,
    pub body: Vec<Vec<InlineText>>,
    pub footer: Option<Vec<InlineText>>,
}

impl Table {
    pub fn new(
        header: Option<Vec<InlineText>>,
        body: Vec<Vec<InlineText>>,
        footer: Option<Vec<InlineText>>,
    ) -> Self {
        Self {
            header,
            body,
            footer,
        }
    }

    /// Build a table from plain strings
    pub fn from_strings<R, C>(
        header: Option<R>,
        body: impl IntoIterator<Item = R>,
        footer: Option<R>,
    ) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<InlineText>,
    {
        fn row<R, C>(cells: R) -> Vec<InlineText>
        where
            R: IntoIterator<Item = C>,
            C: Into<InlineText>,
        {
            cells.into_iter().map(Into::into).collect()
        }

        Self {
            header: header.map(row),
            body: body.into_iter().map(row).collect(),
            footer: footer.map(row),
        }
    }
}

/// A standalone block of a document, always separated from its neighbours by
/// a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Header(Header),
    Paragraph(Paragraph),
    List(MdList),
    Table(Table),
}

impl Element {
    /// Every piece of inline text owned by this element, in render order
    pub fn inline_texts(&self) -> Vec<&InlineText> {
        let mut texts = Vec::new();
        match self {
            Element::Header(header) => texts.push(&header.text),
            Element::Paragraph(paragraph) => texts.extend(paragraph.content.iter()),
            Element::List(list) => collect_list_texts(list, &mut texts),
            Element::Table(table) => {
                texts.extend(table.header.iter().flatten());
                texts.extend(table.body.iter().flatten());
                texts.extend(table.footer.iter().flatten());
            }
        }
        texts
    }
}

fn collect_list_texts<'a>(list: &'a MdList, out: &mut Vec<&'a InlineText>) {
    for item in &list.items {
        match item {
            ListItem::Text(text) => out.push(text),
            ListItem::List(nested) => collect_list_texts(nested, out),
        }
    }
}

impl From<Header> for Element {
    fn from(header: Header) -> Self {
        Element::Header(header)
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Element::Paragraph(paragraph)
    }
}

impl From<MdList> for Element {
    fn from(list: MdList) -> Self {
        Element::List(list)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_rejects_out_of_range_level() {
        assert!(Header::new("Title", 0).is_err());
        assert!(Header::new("Title", 7).is_err());
        assert!(Header::new("Title", 1).is_ok());
        assert!(Header::new("Title", 6).is_ok());
    }

    #[test]
    fn test_header_promote_stops_at_one() {
        let mut header = Header::new("Title", 2).unwrap();
        header.promote();
        assert_eq!(header.level(), 1);
        header.promote();
        assert_eq!(header.level(), 1);
    }

    #[test]
    fn test_header_demote_stops_at_six() {
        let mut header = Header::new("Title", 5).unwrap();
        header.demote();
        assert_eq!(header.level(), 6);
        header.demote();
        assert_eq!(header.level(), 6);
    }

    #[test]
    fn test_paragraph_add_preserves_order() {
        let mut paragraph = Paragraph::new(vec!["one".into()]);
        paragraph.add("two").add(InlineText::new("three").bold());
        let texts: Vec<&str> = paragraph.content.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(paragraph.lang, DEFAULT_CODE_LANG);
    }

    #[test]
    fn test_inline_texts_walks_nested_lists() {
        let list = MdList::unordered(vec![
            ListItem::from("a"),
            MdList::ordered(["b", "c"]).into(),
            ListItem::from("d"),
        ]);
        let element = Element::from(list);
        let texts: Vec<&str> = element
            .inline_texts()
            .into_iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_inline_texts_covers_all_table_rows() {
        let table = Table::from_strings(Some(vec!["H"]), vec![vec!["B"]], Some(vec!["F"]));
        let texts: Vec<String> = Element::from(table)
            .inline_texts()
            .into_iter()
            .map(|t| t.text.clone())
            .collect();
        assert_eq!(texts, vec!["H", "B", "F"]);
    }
}
