//! Preview server exposing rendered pages over HTTP

pub mod preview;

pub use preview::{PreviewState, preview_router, serve};
