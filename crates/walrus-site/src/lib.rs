//! Site structure for Walrus.
//!
//! This crate provides:
//! - [`Site`]: case-insensitive subject and article lookups returning [`Lookup`]
//! - [`parse_route`] / [`routes_differ`]: URL to `(subject, article, section)`
//! - menu and listing trees for the index and subject pages
//!
//! # Quick Start
//!
//! ```
//! use walrus_config::Config;
//! use walrus_site::{Lookup, Site, parse_route};
//!
//! let config = Config::from_json_str(r#"{
//!     "Title": "Notes",
//!     "BaseURL": "example.com",
//!     "Subjects": [{"Title": "Algebra", "Articles": [{"Title": "Groups"}]}]
//! }"#).unwrap();
//! let site = Site::new(config);
//!
//! let route = parse_route("http://example.com/algebra/groups#Axioms", "example.com").unwrap();
//! let Lookup::Found(found) = site.article_by_subject_and_slug(&route.subject, &route.article) else {
//!     panic!("expected article");
//! };
//! assert_eq!(found.article.file, "./Algebra/Groups.tex");
//! ```

mod menu;
mod route;
mod site;

pub use menu::{ListingItem, MenuItem, SubjectListing, build_index, build_menu};
pub use route::{Route, pages_differ, parse_route, routes_differ};
pub use site::{ArticleRef, Lookup, Site};
