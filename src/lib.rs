//! # bgate
//!
//! A terminal interface to Bible Gateway.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Document → Extractor → Layout → View
//! ```
//!
//! - [`fetcher`]: HTTP retrieval of the passage page
//! - [`document`]: Queryable DOM over the fetched HTML
//! - [`extractor`]: Classifies text lines into sections, chapters and verses
//! - [`layout`]: Wraps the passage to the terminal width
//! - [`tui`]: Static printout or scrollable full-screen view
//!
//! ## Quick Start
//!
//! ```bash
//! # Print a passage
//! bgate "John 3:16"
//!
//! # Another translation, padded, in a scrollable view
//! bgate -t KJV -p 4 -i "Psalm 119"
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the fetcher to the
/// extractor.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration file and keybindings.
///
/// Loads from `~/.config/bgate/config.toml`.
pub mod config;

/// Queryable document trees and the html5ever adapter.
pub mod document;

/// Core domain models.
///
/// - [`ContentUnit`](domain::ContentUnit): one heading, chapter or verse fragment
/// - [`Passage`](domain::Passage): the ordered units of one lookup
pub mod domain;

/// Passage extraction from a parsed page.
pub mod extractor;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page retrieval
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Word wrapping into display rows.
pub mod layout;

/// Terminal output.
///
/// Keybindings: j/k scroll, Space/b page, g/G jump to top/bottom, q quits.
pub mod tui;
