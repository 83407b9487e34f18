//! CSS side of the engine: selector tokenizer and rewriter, reset stylesheet,
//! style compiler with its selector hook.

pub mod compiler;
pub mod reset;
pub mod selector;
pub mod tokenizer;

pub use compiler::{PassThrough, SelectorTransform, StyleCompiler, StyleGroup};
pub use reset::RESET_DECLARATIONS;
