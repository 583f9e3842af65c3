//! # Report Module
//!
//! Renders the structured validation output as a static HTML document.
//! Markup stays strictly downstream of classification: nothing in here
//! probes files or decides validity.

pub mod html;

pub use html::{render_document, write_report};
