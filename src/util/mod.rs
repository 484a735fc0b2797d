//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small algorithms
//! (timers, focus wrapping, text extraction) from the component state so they
//! can be tested without a browser.

pub mod capability;
pub mod clipboard;
pub mod contact_info;
pub mod debounce;
pub mod focus_trap;
pub mod scheduler;
pub mod scroll;
pub mod signal;
