//! Walrus reader: navigation and views.
//!
//! This crate ties the site model, the content sources and the article
//! renderer together into a reading session:
//!
//! - [`Reader`]: the router/navigator state machine
//! - [`View`] / [`HtmlView`]: what the reader draws on
//! - [`History`] / [`MemoryHistory`]: where page changes are recorded
//! - [`load_config`]: configuration from a path or URL
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use walrus_reader::{HtmlView, MemoryHistory, Reader, load_config};
//! use walrus_site::Site;
//! use walrus_storage::{HttpSource, MemoryPreferences};
//!
//! let config = load_config("https://example.com/notes/walrus.json", None)?;
//! let view = HtmlView::new(&config);
//! let url = config.page_url("Algebra/Groups");
//! let mut reader = Reader::new(
//!     Site::new(config),
//!     Arc::new(HttpSource::new()),
//!     Arc::new(MemoryPreferences::new()),
//!     view,
//!     MemoryHistory::starting_at(&url),
//! );
//!
//! reader.navigate(&url);
//! let document = reader.view().render();
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! URL ──► parse_route ──► Site lookup ──► ContentSource::fetch
//!                                              │
//!                      View::show ◄── render_article (sections + TOC)
//!                          │
//!                      History::push (page changed only)
//! ```

mod error;
mod history;
mod load;
mod mode;
mod reader;
mod view;

pub use error::LoadError;
pub use history::{History, HistoryEntry, MemoryHistory};
pub use load::{load_config, load_remote_config};
pub use mode::{DISPLAY_MODE_KEY, load_mode, save_mode};
pub use reader::{ArticleRequest, Outcome, Reader, Step, Ticket};
pub use view::{
    HtmlView, MATHJAX_URL, NOT_FOUND_TITLE, Screen, ScreenBody, View, document_title,
};
