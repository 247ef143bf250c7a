//! # mdpage
//!
//! Build Markdown documents from typed elements and write them to disk.
//!
//! ## Design
//!
//! A [`Document`] is an ordered list of elements (headers, paragraphs, lists
//! and tables) built from styled [`InlineText`]. Each element knows how to
//! render itself; the document joins them with blank lines. Link checking is
//! kept out of the render path behind the [`LinkVerifier`] trait:
//!
//! - **Offline rendering**: producing Markdown never touches the network
//! - **Injectable checks**: tests and callers can supply their own verifier
//! - **Optional HTTP**: the `http` feature adds a HEAD-request verifier
//!
//! ## Example
//!
//! ```rust
//! use mdpage::{Document, InlineText, Paragraph};
//!
//! let mut doc = Document::new("My Report");
//! doc.add_header("Summary", 1).unwrap();
//! doc.add_element(Paragraph::new(vec![
//!     InlineText::new("See"),
//!     InlineText::link("the docs", "https://example.com"),
//! ]));
//! doc.add_unordered_list(["fast", "small"]);
//!
//! assert_eq!(
//!     doc.render(),
//!     "# Summary\n\nSee [the docs](https://example.com)\n\n- fast\n- small"
//! );
//! assert_eq!(doc.file_name(), "My-Report.md");
//! ```

use std::path::PathBuf;

mod document;
#[cfg(feature = "http")]
pub mod http;
mod options;
mod utilities;

pub use document::{Document, DEFAULT_EXTENSION};
#[cfg(feature = "http")]
pub use http::HttpLinkVerifier;
pub use mdpage_core::{
    Element, ElementError, Header, InlineText, LinkVerifier, ListItem, MdList, Paragraph, Table,
    DEFAULT_CODE_LANG, MAX_HEADER_LEVEL, MIN_HEADER_LEVEL,
};
/// Result type of element construction and verification
pub use mdpage_core::Result as ElementResult;
pub use options::{VerifyOptions, DEFAULT_TIMEOUT};
pub use utilities::*;

/// Error type for document operations
#[derive(Debug, thiserror::Error)]
pub enum MdpageError {
    #[error(transparent)]
    Element(#[from] ElementError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MdpageError>;
