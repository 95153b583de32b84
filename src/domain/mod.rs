pub mod content;

pub use content::{ContentKind, ContentUnit, Passage};
