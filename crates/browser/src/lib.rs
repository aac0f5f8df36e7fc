//! Browser crate for the book catalogue.
//!
//! This crate contains the interaction handler that runs the
//! filter / sort / paginate / present pipeline for one session at a time.

pub mod browser;
pub mod session;

pub use browser::{BrowseView, CatalogueBrowser};
pub use session::{BrowseAction, BrowseRequest, BrowseSession};
