//! CLR codegen - structural code tree and renderer.
//!
//! Code generation describes its output as a `CodeNode` tree (line groups,
//! blocks, conditionals, concatenations, plain text) and renders it once.
//! The renderer writes through an `Emitter`, so the same tree can go to a
//! string or straight to a file.

mod emitter;
mod render;
mod stack;
mod tree;

pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use render::{render, render_to};
pub use tree::{CodeNode, PaddingNode, PlainNode};
