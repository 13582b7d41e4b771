//! Code tree renderer.
//!
//! Produces an indented tag dump of a `CodeNode` tree:
//!
//! ```text
//! <CodeNode.MultiLine>
//!     <PlainNode.Plain>x</PlainNode.Plain>
//!     <CodeNode.None />
//! </CodeNode.MultiLine>
//! ```
//!
//! # Design
//!
//! - One output line per leaf, two per container (open and close tag), and
//!   eight extra per conditional for its labelled sections
//! - Lines are separated by newlines; there is no trailing newline
//! - Recursion goes through `ensure_sufficient_stack`, so tree depth is not
//!   bounded by the thread's stack

use std::borrow::Cow;

use crate::emitter::{Emitter, StringEmitter};
use crate::stack::ensure_sufficient_stack;
use crate::tree::{CodeNode, PaddingNode, PlainNode};

/// Render `node` at depth 0 into a string.
pub fn render(node: &CodeNode) -> String {
    let mut emitter = StringEmitter::new();
    render_to(node, &mut emitter);
    emitter.output()
}

/// Render `node` at depth 0 into `emitter`.
pub fn render_to<E: Emitter>(node: &CodeNode, emitter: &mut E) {
    Renderer {
        emitter,
        at_start: true,
    }
    .code(node, 0);
}

struct Renderer<'e, E: Emitter> {
    emitter: &'e mut E,
    at_start: bool,
}

impl<E: Emitter> Renderer<'_, E> {
    /// Begin a new output line at `depth`.
    fn line(&mut self, depth: usize) {
        if self.at_start {
            self.at_start = false;
        } else {
            self.emitter.emit_newline();
        }
        self.emitter.emit_indent(depth);
    }

    fn open(&mut self, depth: usize, tag: &str) {
        self.line(depth);
        self.emitter.emit("<");
        self.emitter.emit(tag);
        self.emitter.emit(">");
    }

    fn close(&mut self, depth: usize, tag: &str) {
        self.line(depth);
        self.emitter.emit("</");
        self.emitter.emit(tag);
        self.emitter.emit(">");
    }

    fn code(&mut self, node: &CodeNode, depth: usize) {
        ensure_sufficient_stack(|| match node {
            CodeNode::None => {
                self.line(depth);
                self.emitter.emit("<CodeNode.None />");
            }
            CodeNode::SingleLineList(nodes)
            | CodeNode::MultiLineList(nodes)
            | CodeNode::SingleLine(nodes)
            | CodeNode::MultiLine(nodes)
            | CodeNode::StringConcatenation(nodes) => self.container(node.tag(), nodes, depth),
            CodeNode::Plain(plain) => self.plain(plain, depth),
            CodeNode::Padding(padding) => self.padding(padding, depth),
        });
    }

    fn container(&mut self, tag: &str, nodes: &[CodeNode], depth: usize) {
        self.open(depth, tag);
        for child in nodes {
            self.code(child, depth + 1);
        }
        self.close(depth, tag);
    }

    fn plain(&mut self, node: &PlainNode, depth: usize) {
        ensure_sufficient_stack(|| match node {
            PlainNode::Plain(text) => {
                self.line(depth);
                self.emitter.emit("<PlainNode.Plain>");
                self.emitter.emit(&escape(text));
                self.emitter.emit("</PlainNode.Plain>");
            }
            PlainNode::SingleLine(nodes) | PlainNode::MultiLine(nodes) => {
                self.open(depth, node.tag());
                for child in nodes {
                    self.plain(child, depth + 1);
                }
                self.close(depth, node.tag());
            }
        });
    }

    fn padding(&mut self, node: &PaddingNode, depth: usize) {
        match node {
            PaddingNode::If {
                condition,
                content,
                else_content,
            } => {
                self.open(depth, node.tag());
                self.section(depth + 1, "condition", "condition", condition);
                self.section(depth + 1, "content", "content", content);
                self.section(depth + 1, "else", "else", else_content);
                self.close(depth, node.tag());
            }
            PaddingNode::IfExp {
                condition,
                content,
                else_content,
                result_type,
            } => {
                let typed = |label: &str| format!("{label} type=\"{}\"", escape(result_type));
                self.open(depth, node.tag());
                self.section(depth + 1, "condition", "condition", condition);
                self.section(depth + 1, &typed("content"), "content", content);
                self.section(depth + 1, &typed("else"), "else", else_content);
                self.close(depth, node.tag());
            }
            PaddingNode::Block(nodes) => self.container(node.tag(), nodes, depth),
        }
    }

    /// A labelled sub-section of a conditional; its node sits one level deeper.
    fn section(&mut self, depth: usize, open: &str, close: &str, node: &CodeNode) {
        self.open(depth, open);
        self.code(node, depth + 1);
        self.close(depth, close);
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if text.contains(['<', '>']) {
        Cow::Owned(text.replace('<', "&lt;").replace('>', "&gt;"))
    } else {
        Cow::Borrowed(text)
    }
}
