//! # agentdoc-renderer
//!
//! Pure renderer that turns a [`RoleRecord`](agentdoc_core::RoleRecord) into a
//! markdown document. No template language: each section is a plain function
//! over its slice of the record, and [`Renderer`] concatenates them in a fixed
//! order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use agentdoc_core::catalog;
//! use agentdoc_renderer::{RenderContext, Renderer};
//!
//! fn render_builtin() {
//!     let renderer = Renderer::new(RenderContext::today());
//!     if let Ok(records) = catalog::builtin() {
//!         for doc in renderer.render_all(&records, Path::new("agents")) {
//!             println!("{}: {} bytes", doc.path.display(), doc.content.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod frontmatter;
pub mod sections;

pub use context::{RenderContext, BASE_LINK, METRICS_LINK};
pub use engine::{output_path, RenderedDoc, Renderer, Section, DOC_EXTENSION, SECTION_HEADINGS};
pub use frontmatter::{FrontMatter, FrontMatterValue};
