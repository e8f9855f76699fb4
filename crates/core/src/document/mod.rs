//! Printable budget documents.
//!
//! Rendering is a pure function from a budget and its issuing company to a
//! self-contained HTML page sized for A4 printing.

pub mod error;
pub mod render;

pub use error::DocumentError;
pub use render::{BudgetDocument, RenderedDocument, authentication_code, escape_html};
