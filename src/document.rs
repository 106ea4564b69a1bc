//! Document model: markdown source to a navigable comrak AST.
//!
//! Thin wrapper around comrak with the GFM table extension enabled, plus the
//! text-collection helpers the extractor needs. Nothing in this module knows
//! about webhook semantics; it is a generic document-to-tree layer.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse markdown source into an AST with pipe tables recognized.
///
/// Table syntax the grammar cannot represent simply produces no `Table` node;
/// that is not a parse error and callers treat it as "no table present".
pub fn parse<'a>(arena: &'a Arena<AstNode<'a>>, source: &str) -> &'a AstNode<'a> {
    parse_document(arena, source, &default_options())
}

fn default_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options
}

/// Concatenated literal text of every text run and code span in the subtree,
/// in document order.
///
/// A single word can be split across several sibling runs when it contains
/// emphasis delimiters ("pull_request" may parse as "pull_" + "request"), so
/// taking only the first run drops characters.
pub fn full_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for n in node.descendants() {
        match &n.data.borrow().value {
            NodeValue::Text(literal) => text.push_str(literal),
            NodeValue::Code(code) => text.push_str(&code.literal),
            _ => {}
        }
    }
    text
}

/// First link in the subtree by preorder document order, if any.
pub fn first_link<'a>(node: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    node.descendants()
        .find(|n| matches!(n.data.borrow().value, NodeValue::Link(_)))
}

/// Literal text of every inline code span in the subtree, in document order.
pub fn code_spans<'a>(node: &'a AstNode<'a>) -> Vec<String> {
    node.descendants()
        .filter_map(|n| match &n.data.borrow().value {
            NodeValue::Code(code) => Some(code.literal.clone()),
            _ => None,
        })
        .collect()
}
