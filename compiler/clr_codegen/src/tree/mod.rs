//! Code tree nodes.
//!
//! Generated output is described as a tree of formatting nodes and turned
//! into text by the renderer. Trees are built bottom-up and never mutated.

use serde::{Deserialize, Serialize};

/// A node of generated output.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum CodeNode {
    /// Placeholder that produces no code.
    None,
    SingleLineList(Vec<CodeNode>),
    MultiLineList(Vec<CodeNode>),
    /// Children joined onto one output line.
    SingleLine(Vec<CodeNode>),
    /// Each child on its own output line.
    MultiLine(Vec<CodeNode>),
    StringConcatenation(Vec<CodeNode>),
    Plain(PlainNode),
    Padding(PaddingNode),
}

/// Text-only nodes.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum PlainNode {
    Plain(String),
    SingleLine(Vec<PlainNode>),
    MultiLine(Vec<PlainNode>),
}

/// Nodes whose children are indented.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum PaddingNode {
    If {
        condition: Box<CodeNode>,
        content: Box<CodeNode>,
        else_content: Box<CodeNode>,
    },
    /// Conditional expression; both branches have `result_type`.
    IfExp {
        condition: Box<CodeNode>,
        content: Box<CodeNode>,
        else_content: Box<CodeNode>,
        result_type: String,
    },
    Block(Vec<CodeNode>),
}

impl CodeNode {
    pub fn plain(text: impl Into<String>) -> Self {
        CodeNode::Plain(PlainNode::Plain(text.into()))
    }

    pub fn block(nodes: Vec<CodeNode>) -> Self {
        CodeNode::Padding(PaddingNode::Block(nodes))
    }

    pub fn if_else(condition: CodeNode, content: CodeNode, else_content: CodeNode) -> Self {
        CodeNode::Padding(PaddingNode::If {
            condition: Box::new(condition),
            content: Box::new(content),
            else_content: Box::new(else_content),
        })
    }

    pub fn if_exp(
        condition: CodeNode,
        content: CodeNode,
        else_content: CodeNode,
        result_type: impl Into<String>,
    ) -> Self {
        CodeNode::Padding(PaddingNode::IfExp {
            condition: Box::new(condition),
            content: Box::new(content),
            else_content: Box::new(else_content),
            result_type: result_type.into(),
        })
    }

    /// Tag the renderer uses for this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            CodeNode::None => "CodeNode.None",
            CodeNode::SingleLineList(_) => "CodeNode.SingleLineList",
            CodeNode::MultiLineList(_) => "CodeNode.MultiLineList",
            CodeNode::SingleLine(_) => "CodeNode.SingleLine",
            CodeNode::MultiLine(_) => "CodeNode.MultiLine",
            CodeNode::StringConcatenation(_) => "CodeNode.StringConcatenation",
            CodeNode::Plain(plain) => plain.tag(),
            CodeNode::Padding(padding) => padding.tag(),
        }
    }
}

impl PlainNode {
    pub fn tag(&self) -> &'static str {
        match self {
            PlainNode::Plain(_) => "PlainNode.Plain",
            PlainNode::SingleLine(_) => "PlainNode.SingleLine",
            PlainNode::MultiLine(_) => "PlainNode.MultiLine",
        }
    }
}

impl PaddingNode {
    pub fn tag(&self) -> &'static str {
        match self {
            PaddingNode::If { .. } => "PaddingNode.If",
            PaddingNode::IfExp { .. } => "PaddingNode.IfExp",
            PaddingNode::Block(_) => "PaddingNode.Block",
        }
    }
}

impl From<PlainNode> for CodeNode {
    fn from(node: PlainNode) -> Self {
        CodeNode::Plain(node)
    }
}

impl From<PaddingNode> for CodeNode {
    fn from(node: PaddingNode) -> Self {
        CodeNode::Padding(node)
    }
}
