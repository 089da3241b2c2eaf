//! Markup, documents and page views

pub mod dom;
pub mod views;

pub use dom::{Document, El, Markup, NodeId, TextMatch};
pub use views::{RenderState, bills_ui, test_ids};
