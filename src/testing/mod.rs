//! Testing helpers: markup snapshots of element trees.
//!
//! Use [`markup`] and [`document_markup`] to capture constructed elements as
//! compact strings for snapshot-style assertions.

pub mod snapshot;

pub use snapshot::{document_markup, markup};
