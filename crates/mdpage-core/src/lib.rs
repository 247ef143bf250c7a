//! mdpage-core - Markdown element model and rendering
//!
//! This crate provides the element types a document is built from and the
//! rules that turn each of them into Markdown. It is used by `mdpage`, which
//! adds the document container and file output.
//!
//! # Architecture
//!
//! ```text
//! InlineText ──▶ Header | Paragraph | MdList | Table ──▶ Element ──▶ Markdown String
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdpage_core::{Element, Header, InlineText, Paragraph};
//!
//! let header = Header::new("Hello World", 1).unwrap();
//! let paragraph = Paragraph::new(vec![
//!     InlineText::new("This is"),
//!     InlineText::new("bold").bold(),
//!     InlineText::new("text."),
//! ]);
//!
//! assert_eq!(Element::from(header).render(), "# Hello World");
//! assert_eq!(paragraph.render(), "This is **bold** text.");
//! ```

mod ast;
mod render;
mod verify;

pub use ast::{
    check_header_level, Element, Header, InlineText, ListItem, MdList, Paragraph, Table,
    DEFAULT_CODE_LANG, MAX_HEADER_LEVEL, MIN_HEADER_LEVEL,
};
pub use render::render_element;
pub use verify::LinkVerifier;

/// Error type for element construction and verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Link verification failed for {url}: {reason}")]
    VerificationFailure { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ElementError>;
