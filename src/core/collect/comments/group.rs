//! Comment groups, as the Go parser forms them.
//!
//! A group is a run of comments with no other token and at most one line break
//! between neighbours. A comment trailing code on the same line starts a group
//! that does not extend to the following lines.

use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::Node;

use crate::core::parsers::go::{ParsedGo, kind, walk_preorder};

/// Toolchain directives written as `//line`, `//extern`, `//export` or
/// `//name:value` (e.g. `//go:generate`). They are not part of the comment text.
static TOOLCHAIN_DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:line |extern |export |[a-z0-9]+:[a-z0-9])").unwrap()
});

/// Adjacent comments, with their raw source text (markers included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<String>,
    /// 1-based line of the first comment.
    pub line: usize,
}

impl CommentGroup {
    /// Collect every comment group of a file, in source order.
    pub fn collect(parsed: &ParsedGo) -> Vec<CommentGroup> {
        let mut nodes = Vec::new();
        collect_comment_nodes(parsed.root(), &mut nodes);
        nodes.sort_by_key(|node| node.start_byte());

        let mut groups: Vec<CommentGroup> = Vec::new();
        let mut previous: Option<Node<'_>> = None;
        // Line breaks allowed between members of the current group.
        let mut allowed_breaks = 1;

        for node in nodes {
            let joins_previous = previous.is_some_and(|prev| {
                let gap = &parsed.source[prev.end_byte()..node.start_byte()];
                gap.trim().is_empty() && gap.matches('\n').count() <= allowed_breaks
            });

            match groups.last_mut() {
                Some(group) if joins_previous => {
                    group.comments.push(parsed.text(node).to_string());
                }
                _ => {
                    allowed_breaks = if trails_code(parsed, node) { 0 } else { 1 };
                    groups.push(CommentGroup {
                        comments: vec![parsed.text(node).to_string()],
                        line: node.start_position().row + 1,
                    });
                }
            }
            previous = Some(node);
        }

        groups
    }

    /// The text of the group with comment markers removed, rendered the way
    /// Go's `CommentGroup.Text` does.
    ///
    /// Toolchain directive lines are dropped, trailing whitespace is removed,
    /// leading blank lines are skipped and runs of blank lines collapse to
    /// one. A non-empty result ends with a newline.
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();

        for comment in &self.comments {
            let body = if let Some(rest) = comment.strip_prefix("//") {
                if let Some(rest) = rest.strip_prefix(' ') {
                    rest
                } else if TOOLCHAIN_DIRECTIVE_REGEX.is_match(rest) {
                    continue;
                } else {
                    rest
                }
            } else if let Some(rest) = comment.strip_prefix("/*") {
                rest.strip_suffix("*/").unwrap_or(rest)
            } else {
                comment.as_str()
            };

            lines.extend(body.split('\n').map(str::trim_end));
        }

        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines {
            let previous_blank = kept.last().is_none_or(|l| l.is_empty());
            if !line.is_empty() || !previous_blank {
                kept.push(line);
            }
        }
        while kept.last().is_some_and(|l| l.is_empty()) {
            kept.pop();
        }

        if kept.is_empty() {
            String::new()
        } else {
            let mut text = kept.join("\n");
            text.push('\n');
            text
        }
    }
}

fn collect_comment_nodes<'t>(root: Node<'t>, out: &mut Vec<Node<'t>>) {
    walk_preorder(root, |node| {
        if node.kind() == kind::COMMENT {
            out.push(node);
            return false;
        }
        true
    });
}

/// True when code precedes the comment on its line.
fn trails_code(parsed: &ParsedGo, node: Node<'_>) -> bool {
    let start = node.start_byte();
    let line_start = parsed.source[..start].rfind('\n').map_or(0, |pos| pos + 1);
    !parsed.source[line_start..start].trim().is_empty()
}
