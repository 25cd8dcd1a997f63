//! Output generators for the static site.
//!
//! - **Catalogue**: JSON export of the built catalogue (`catalogue.json`),
//!   consumed by the page templates of the front end.

pub mod catalogue;
