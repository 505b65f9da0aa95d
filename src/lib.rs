//! Headless core of a slide-presentation editor.
//!
//! A deck of slides holds typed visual elements (text, code, image, chart)
//! manipulated through property-editor logic. The two subsystems doing the
//! real work are:
//!
//! - [`upload`] — resolving a user-supplied URL or local file into a
//!   validated image descriptor, with debouncing and a token-based staleness
//!   guard so no stale async result ever reaches the document.
//! - [`edit`] — the inline-editing state machine for text/code elements,
//!   including safe commit when selection moves away mid-edit.
//!
//! Both write into the observable [`deck::Deck`] store through single
//! atomic property patches. Rendering, persistence, and networking belong to
//! the embedding shell.

pub mod constants;
pub mod deck;
pub mod edit;
pub mod images;
pub mod menus;
pub mod notifications;
pub mod types;
pub mod upload;
