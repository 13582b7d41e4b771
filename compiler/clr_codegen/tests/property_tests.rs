//! Property-based tests for the code tree renderer.
//!
//! Every leaf renders to one line, every container to two tag lines around
//! its children, and every conditional to eight tag lines around its three
//! branches.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use clr_codegen::{render, CodeNode, PaddingNode, PlainNode};
use proptest::prelude::*;

fn plain_node() -> impl Strategy<Value = PlainNode> {
    let leaf = "[a-z<> ]{0,8}".prop_map(PlainNode::Plain);
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(PlainNode::SingleLine),
            prop::collection::vec(inner, 0..4).prop_map(PlainNode::MultiLine),
        ]
    })
}

fn code_node() -> impl Strategy<Value = CodeNode> {
    let leaf = prop_oneof![
        Just(CodeNode::None),
        "[a-z<> ]{0,8}".prop_map(CodeNode::plain),
        plain_node().prop_map(CodeNode::Plain),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        let children = prop::collection::vec(inner.clone(), 0..4);
        prop_oneof![
            children.clone().prop_map(CodeNode::SingleLineList),
            children.clone().prop_map(CodeNode::MultiLineList),
            children.clone().prop_map(CodeNode::SingleLine),
            children.clone().prop_map(CodeNode::MultiLine),
            children.clone().prop_map(CodeNode::StringConcatenation),
            children.prop_map(CodeNode::block),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| CodeNode::if_else(c, t, e)),
            (inner.clone(), inner.clone(), inner, "[A-Za-z]{1,6}")
                .prop_map(|(c, t, e, ty)| CodeNode::if_exp(c, t, e, ty)),
        ]
    })
}

#[derive(Default, Debug, PartialEq)]
struct Shape {
    leaves: usize,
    containers: usize,
    conditionals: usize,
}

impl Shape {
    fn lines(&self) -> usize {
        self.leaves + 2 * self.containers + 8 * self.conditionals
    }

    fn code(&mut self, node: &CodeNode) {
        match node {
            CodeNode::None => self.leaves += 1,
            CodeNode::SingleLineList(nodes)
            | CodeNode::MultiLineList(nodes)
            | CodeNode::SingleLine(nodes)
            | CodeNode::MultiLine(nodes)
            | CodeNode::StringConcatenation(nodes)
            | CodeNode::Padding(PaddingNode::Block(nodes)) => {
                self.containers += 1;
                nodes.iter().for_each(|child| self.code(child));
            }
            CodeNode::Plain(plain) => self.plain(plain),
            CodeNode::Padding(
                PaddingNode::If {
                    condition,
                    content,
                    else_content,
                }
                | PaddingNode::IfExp {
                    condition,
                    content,
                    else_content,
                    ..
                },
            ) => {
                self.conditionals += 1;
                self.code(condition);
                self.code(content);
                self.code(else_content);
            }
        }
    }

    fn plain(&mut self, node: &PlainNode) {
        match node {
            PlainNode::Plain(_) => self.leaves += 1,
            PlainNode::SingleLine(nodes) | PlainNode::MultiLine(nodes) => {
                self.containers += 1;
                nodes.iter().for_each(|child| self.plain(child));
            }
        }
    }
}

fn depth_of(line: &str) -> usize {
    (line.len() - line.trim_start_matches(' ').len()) / 4
}

proptest! {
    #[test]
    fn line_count_follows_tree_shape(node in code_node()) {
        let mut shape = Shape::default();
        shape.code(&node);
        prop_assert_eq!(render(&node).lines().count(), shape.lines());
    }

    #[test]
    fn indentation_steps_by_one_level(node in code_node()) {
        let output = render(&node);
        let mut previous = 0;
        for (i, line) in output.lines().enumerate() {
            let indent = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(indent % 4, 0);
            let depth = depth_of(line);
            if i == 0 {
                prop_assert_eq!(depth, 0);
            } else {
                // children open one level deeper; closers come back up any amount
                prop_assert!(depth <= previous + 1);
            }
            previous = depth;
        }
    }

    #[test]
    fn output_has_no_raw_angle_brackets_in_text(text in "[a-z<>]{0,16}") {
        let output = render(&CodeNode::plain(text.clone()));
        let inner = output
            .strip_prefix("<PlainNode.Plain>")
            .and_then(|rest| rest.strip_suffix("</PlainNode.Plain>"))
            .unwrap();
        prop_assert!(!inner.contains('<') && !inner.contains('>'));
        prop_assert_eq!(inner.replace("&lt;", "<").replace("&gt;", ">"), text);
    }
}
