//! Document - the ordered container elements are appended to.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use mdpage_core::{
    Element, ElementError, Header, InlineText, LinkVerifier, MdList, Paragraph, Table,
    DEFAULT_CODE_LANG,
};
use tempfile::Builder;

use crate::utilities::hyphenate;
use crate::{MdpageError, Result};

/// Default extension of written documents
pub const DEFAULT_EXTENSION: &str = ".md";

/// A named Markdown document.
///
/// Elements are only ever appended; rendering joins them with a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    extension: String,
    contents: Vec<Element>,
}

impl Document {
    /// Create an empty document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            contents: Vec::new(),
        }
    }

    /// Use a different file extension when writing (e.g. `".markdown"`)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn elements(&self) -> &[Element] {
        &self.contents
    }

    /// Append any element
    pub fn add_element(&mut self, element: impl Into<Element>) -> &mut Self {
        self.contents.push(element.into());
        self
    }

    /// Append a plain header, failing if `level` is outside `[1, 6]`
    pub fn add_header(&mut self, text: impl Into<String>, level: u8) -> Result<&mut Self> {
        let header = Header::new(InlineText::new(text), level)?;
        Ok(self.add_element(header))
    }

    /// Append a paragraph of plain text
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_element(Paragraph::new(vec![InlineText::new(text)]))
    }

    /// Append a numbered list of plain items
    pub fn add_ordered_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_element(MdList::ordered(items.into_iter().map(InlineText::new)))
    }

    /// Append a bulleted list of plain items
    pub fn add_unordered_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_element(MdList::unordered(items.into_iter().map(InlineText::new)))
    }

    /// Append a table built from a grid of cells.
    ///
    /// With `header`, the first row becomes the header; with `footer`, the
    /// last row becomes the footer. The rows in between form the body, which
    /// may be empty. Asking for both on a grid of two rows or fewer fails, as
    /// does asking for either on an empty grid.
    pub fn add_table<I, R, C>(
        &mut self,
        grid: I,
        header: bool,
        footer: bool,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<InlineText>,
    {
        let mut rows: Vec<Vec<InlineText>> = grid
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        if header && footer && rows.len() <= 2 {
            return Err(ElementError::ConstraintViolation(format!(
                "table grid with header and footer needs at least 3 rows, got {}",
                rows.len()
            ))
            .into());
        }
        if (header || footer) && rows.is_empty() {
            return Err(ElementError::ConstraintViolation(
                "table grid is empty but a header or footer row was requested".to_string(),
            )
            .into());
        }

        let foot = if footer { rows.pop() } else { None };
        let head = if header { Some(rows.remove(0)) } else { None };

        Ok(self.add_element(Table::new(head, rows, foot)))
    }

    /// Append a fenced code block
    pub fn add_code(&mut self, code: impl Into<String>, lang: Option<&str>) -> &mut Self {
        let lang = lang.unwrap_or(DEFAULT_CODE_LANG);
        self.add_element(Paragraph::code_block(InlineText::new(code), lang))
    }

    /// Append a blockquote
    pub fn add_quote(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_element(Paragraph::quote(InlineText::new(text)))
    }

    /// Render the document body: every element, separated by a blank line
    pub fn render(&self) -> String {
        self.contents
            .iter()
            .map(Element::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// File name used by `write_to_file`: whitespace in the name becomes
    /// hyphens, followed by the extension.
    pub fn file_name(&self) -> String {
        format!("{}{}", hyphenate(&self.name), self.extension)
    }

    /// Write the rendered body into `directory`, creating it if needed.
    ///
    /// The body goes to a temporary file in the same directory which is then
    /// renamed over the target, so an existing file is either fully replaced
    /// or left untouched. A replaced file keeps its permissions; a new one
    /// gets the usual `0o666` minus the process umask.
    pub fn write_to_file(&self, directory: impl AsRef<Path>) -> Result<PathBuf> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory).map_err(|source| io_error(directory, source))?;

        let path = directory.join(self.file_name());
        let body = self.render();

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // open(2) applies the umask to this mode
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut file = builder
            .tempfile_in(directory)
            .map_err(|source| io_error(directory, source))?;
        file.write_all(body.as_bytes())
            .map_err(|source| io_error(file.path(), source))?;

        if let Ok(existing) = fs::metadata(&path) {
            fs::set_permissions(file.path(), existing.permissions())
                .map_err(|source| io_error(file.path(), source))?;
        }

        file.persist(&path).map_err(|err| io_error(&path, err.error))?;

        debug!("Wrote {} bytes to {}", body.len(), path.display());
        Ok(path)
    }

    /// Verify every element, stopping at the first failure
    pub fn verify(&self) -> Result<()> {
        for element in &self.contents {
            element.verify()?;
        }
        Ok(())
    }

    /// Check every link in document order and collect the failures.
    ///
    /// This never fails as a whole; an empty vector means every link passed.
    pub fn verify_links(&self, verifier: &dyn LinkVerifier) -> Vec<ElementError> {
        self.contents
            .iter()
            .flat_map(Element::inline_texts)
            .filter_map(|text| text.verify_link(verifier).err())
            .collect()
    }
}

/// Prints the document name on the first line, followed by the body
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        f.write_str(&self.render())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> MdpageError {
    MdpageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(Document::new("Empty").render(), "");
    }

    #[test]
    fn test_single_paragraph_has_no_blank_lines() {
        let mut doc = Document::new("Doc");
        doc.add_paragraph("Hello World");
        assert_eq!(doc.render(), "Hello World");
    }

    #[test]
    fn test_elements_separated_by_blank_line() {
        let mut doc = Document::new("Doc");
        doc.add_header("Title", 1)
            .unwrap()
            .add_paragraph("Body")
            .add_unordered_list(["a", "b"]);
        assert_eq!(doc.render(), "# Title\n\nBody\n\n- a\n- b");
    }

    #[test]
    fn test_add_header_rejects_bad_level() {
        let mut doc = Document::new("Doc");
        let err = doc.add_header("Title", 7).unwrap_err();
        assert!(matches!(
            err,
            MdpageError::Element(ElementError::ConstraintViolation(_))
        ));
        assert!(doc.elements().is_empty());
    }

    #[test]
    fn test_add_ordered_list() {
        let mut doc = Document::new("Doc");
        doc.add_ordered_list(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(doc.render(), "1. one\n2. two");
    }

    #[test]
    fn test_add_code_and_quote() {
        let mut doc = Document::new("Doc");
        doc.add_code("x = 1", Some("python"))
            .add_code("plain", None)
            .add_quote("wise words");
        assert_eq!(
            doc.render(),
            "```python\nx = 1\n```\n\n```generic\nplain\n```\n\n> wise words"
        );
    }

    #[test]
    fn test_add_table_header_only() {
        let mut doc = Document::new("Doc");
        doc.add_table(vec![vec!["A", "B"], vec!["1", "2"], vec!["3", "4"]], true, false)
            .unwrap();
        assert_eq!(doc.render(), "A | B\n- | -\n1 | 2\n3 | 4");
    }

    #[test]
    fn test_add_table_header_and_footer() {
        let mut doc = Document::new("Doc");
        doc.add_table(
            vec![vec!["A", "B"], vec!["1", "2"], vec!["T", "3"]],
            true,
            true,
        )
        .unwrap();
        assert_eq!(doc.render(), "A | B\n- | -\n1 | 2\n- | -\nT | 3");
    }

    #[test]
    fn test_add_table_body_only() {
        let mut doc = Document::new("Doc");
        doc.add_table(vec![vec!["1", "2"]], false, false).unwrap();
        assert_eq!(doc.render(), "1 | 2");
    }

    #[test]
    fn test_add_table_two_rows_with_header_and_footer_fails() {
        let mut doc = Document::new("Doc");
        let result = doc.add_table(vec![vec!["A"], vec!["Z"]], true, true);
        assert!(matches!(
            result,
            Err(MdpageError::Element(ElementError::ConstraintViolation(_)))
        ));
        assert!(doc.elements().is_empty());
    }

    #[test]
    fn test_add_table_header_only_single_row() {
        let mut doc = Document::new("Doc");
        doc.add_table(vec![vec!["A", "B"]], true, false).unwrap();
        assert_eq!(doc.render(), "A | B\n- | -");
        assert!(doc.verify().is_ok());
    }

    #[test]
    fn test_add_table_footer_only_single_row() {
        let mut doc = Document::new("Doc");
        doc.add_table(vec![vec!["x", "y"]], false, true).unwrap();
        assert_eq!(doc.render(), "- | -\nx | y");
    }

    #[test]
    fn test_add_table_empty_grid_without_flags() {
        let mut doc = Document::new("Doc");
        let grid: Vec<Vec<&str>> = Vec::new();
        doc.add_table(grid, false, false).unwrap();
        assert_eq!(doc.elements().len(), 1);
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_add_table_empty_grid_with_header_fails() {
        let mut doc = Document::new("Doc");
        let grid: Vec<Vec<&str>> = Vec::new();
        assert!(doc.add_table(grid, true, false).is_err());
        assert!(doc.elements().is_empty());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Document::new("My Report").file_name(), "My-Report.md");
        assert_eq!(
            Document::new("Release  notes 2").with_extension(".markdown").file_name(),
            "Release-notes-2.markdown"
        );
    }

    #[test]
    fn test_display_prefixes_name() {
        let mut doc = Document::new("Notes");
        doc.add_paragraph("body");
        assert_eq!(doc.to_string(), "Notes\nbody");
        assert_eq!(doc.render(), "body");
    }

    #[test]
    fn test_verify_reports_bad_table() {
        let mut doc = Document::new("Doc");
        doc.add_table(vec![vec!["A", "B"], vec!["1"]], true, false).unwrap();
        assert!(doc.verify().is_err());
    }

    #[test]
    fn test_verify_links_collects_failures_in_order() {
        let mut doc = Document::new("Doc");
        let mut paragraph = Paragraph::new(vec![InlineText::link("good", "https://ok.test")]);
        paragraph.add(InlineText::link("bad", "https://bad.test/1"));
        doc.add_element(paragraph);
        doc.add_element(MdList::unordered(vec![InlineText::link("worse", "https://bad.test/2")]));

        let verifier = |url: &str| -> mdpage_core::Result<()> {
            if url.contains("bad") {
                Err(ElementError::VerificationFailure {
                    url: url.to_string(),
                    reason: "404".to_string(),
                })
            } else {
                Ok(())
            }
        };

        let failures: Vec<String> = doc
            .verify_links(&verifier)
            .into_iter()
            .map(|err| match err {
                ElementError::VerificationFailure { url, .. } => url,
                other => other.to_string(),
            })
            .collect();
        assert_eq!(failures, vec!["https://bad.test/1", "https://bad.test/2"]);
    }
}
