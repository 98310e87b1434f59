//! API Access
//!
//! Browser `fetch` implementation of the salon API traits.

pub mod client;

pub use client::GlooClient;
