//! Document model types.
//!
//! The source side is a list of [`ExtractedPage`]s; the output side is an
//! [`OutputDocument`] holding one [`Paragraph`] per page that had text.

mod document;
mod page;
mod paragraph;

pub use document::{CoreProperties, Metadata, OutputDocument};
pub use page::ExtractedPage;
pub use paragraph::{Paragraph, Segment};
