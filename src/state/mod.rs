//! Page state models.
//!
//! DESIGN
//! ======
//! State is split by page component (`theme`, `nav`, `overlay`, etc.) so the
//! browser bindings in `dom` only translate events into calls on these types
//! and render the result. Nothing here touches the DOM.

pub mod contact;
pub mod field;
pub mod filter;
pub mod nav;
pub mod overlay;
pub mod reveal;
pub mod theme;
pub mod ui;
