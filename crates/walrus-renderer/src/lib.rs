//! Article rendering for Walrus.
//!
//! Articles are plain text where lines starting with `#` are headings. This
//! crate turns such text into HTML with anchored headings and builds a
//! numbered table of contents from the headings it finds.
//!
//! The pieces are independent and pure:
//! - [`transform`]: heading lines to anchored HTML plus a flat [`Section`] list
//! - [`build_toc`]: flat sections to a [`TocItem`] tree
//! - [`render_toc`]: [`TocItem`] tree to markup
//!
//! [`render_article`] runs all three.
//!
//! # Example
//!
//! ```
//! use walrus_renderer::render_article;
//!
//! let article = render_article("# Groups\nbody\n### Axioms\nmore");
//! assert_eq!(article.toc[0].number, "1");
//! assert_eq!(article.toc[0].children[0].number, "1.1");
//! ```

mod html;
mod renderer;
mod sections;
mod toc;
mod util;

pub use html::render_toc;
pub use renderer::{RenderedArticle, render_article};
pub use sections::{Section, TransformResult, transform};
pub use toc::{TocItem, build_toc};
pub use util::{anchor_name, escape_html};
