//! Front matter parsing for journey documents
//!
//! # Error Handling Strategy
//!
//! Unlike a lenient content pipeline, a journey document with broken metadata is fatal:
//!
//! - **Malformed front matter**: Unterminated delimiters and YAML/TOML/JSON syntax errors
//!   are returned as errors. The caller adds the document path.
//!
//! - **Missing metadata**: A document without front matter, or without a `title`, is valid.
//!   The title is empty and the slug is derived from the file name.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context describing which stage of
//!   parsing failed.

pub mod front_matter;

pub use front_matter::{
    Document, DocumentParser, FrontMatterParser, extract_front_matter, slug_from_path,
};
