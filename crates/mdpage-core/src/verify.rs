//! Structural and link verification
//!
//! Nothing here runs automatically. Callers opt in by calling `verify` on an
//! element or `verify_link` on inline text.

use crate::ast::{
    check_header_level, Element, Header, InlineText, ListItem, MdList, Paragraph, Table,
};
use crate::{ElementError, Result};

/// Checks whether a URL is reachable.
///
/// Implementations decide what "reachable" means; the core never performs
/// network access itself.
pub trait LinkVerifier {
    /// Return `Ok(())` if `url` resolves, or a `VerificationFailure` otherwise
    fn check(&self, url: &str) -> Result<()>;
}

impl<F> LinkVerifier for F
where
    F: Fn(&str) -> Result<()>,
{
    fn check(&self, url: &str) -> Result<()> {
        self(url)
    }
}

impl InlineText {
    /// Check the link target, if any
    pub fn verify_link(&self, verifier: &dyn LinkVerifier) -> Result<()> {
        match &self.url {
            Some(url) => verifier.check(url),
            None => Ok(()),
        }
    }
}

impl Header {
    pub fn verify(&self) -> Result<()> {
        check_header_level(self.level())
    }
}

impl Paragraph {
    pub fn verify(&self) -> Result<()> {
        Ok(())
    }
}

impl MdList {
    pub fn verify(&self) -> Result<()> {
        for item in &self.items {
            if let ListItem::List(nested) = item {
                nested.verify()?;
            }
        }
        Ok(())
    }
}

impl Table {
    /// Check that every row has the same number of cells
    pub fn verify(&self) -> Result<()> {
        let mut widths = self.body.iter().map(Vec::len);
        let width = widths.next();

        if widths.any(|w| Some(w) != width) {
            return Err(ElementError::ConstraintViolation(
                "table body rows have different lengths".to_string(),
            ));
        }

        // An empty header or footer renders as absent, so it is not checked.
        let header = self.header.as_deref().filter(|h| !h.is_empty());
        let footer = self.footer.as_deref().filter(|f| !f.is_empty());

        let expected = width
            .or_else(|| header.map(<[InlineText]>::len))
            .or_else(|| footer.map(<[InlineText]>::len));

        for (name, row) in [("header", header), ("footer", footer)] {
            if let (Some(row), Some(expected)) = (row, expected) {
                if row.len() != expected {
                    return Err(ElementError::ConstraintViolation(format!(
                        "table {} has {} cells, expected {}",
                        name,
                        row.len(),
                        expected
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Element {
    pub fn verify(&self) -> Result<()> {
        match self {
            Element::Header(header) => header.verify(),
            Element::Paragraph(paragraph) => paragraph.verify(),
            Element::List(list) => list.verify(),
            Element::Table(table) => table.verify(),
        }
    }
}
