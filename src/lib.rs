//! # ui-rewrite
//!
//! Write markup and stylesheets against a small semantic vocabulary (`ui-title`,
//! `ui-href`, `ui-icon`, ...) and render plain native elements carrying derived
//! CSS classes. The semantic names double as markup tags and stylesheet keys.
//!
//! ## Core Systems
//!
//! - **[`rewrite`]** — Classification tables, tag resolver, name transformer,
//!   attribute rewrite pipeline, element construction hook
//! - **[`css`]** — Selector tokenizer and rewriter, reset stylesheet, style compiler
//! - **[`dom`]** — Slotmap-backed element arena used as the construction primitive
//! - **[`router`]** — Routing capability consumed by the link rewrite
//! - **[`context`]** — Per-construction rendering context
//! - **[`host`]** — Host traits and the [`Document`](host::Document) reference host
//! - **[`activation`]** — Installs the engine into a host
//! - **[`testing`]** — Markup snapshot helpers
//!
//! ```
//! use std::sync::Arc;
//! use ui_rewrite::host::Document;
//! use ui_rewrite::rewrite::{ClassificationTables, Rewriter};
//!
//! let mut document = Document::new();
//! Arc::new(Rewriter::new(ClassificationTables::standard())).activate(&mut document);
//!
//! assert_eq!(document.stylesheets().len(), 1);
//! ```

// Foundation
pub mod context;
pub mod router;

// Core systems
pub mod css;
pub mod dom;
pub mod rewrite;

// Host integration
pub mod activation;
pub mod host;

pub mod testing;
