//! Go source parsing: tree-sitter trees checked against the Go toolchain's rules.

use tree_sitter::{Node, Parser, Point, Tree};

use crate::core::error::{ScanError, SyntaxError};

/// Node kinds of the tree-sitter Go grammar that the extractors match on.
pub mod kind {
    pub const COMMENT: &str = "comment";
    pub const PACKAGE_CLAUSE: &str = "package_clause";
    pub const IMPORT_DECLARATION: &str = "import_declaration";
    pub const FUNCTION_DECLARATION: &str = "function_declaration";
    pub const METHOD_DECLARATION: &str = "method_declaration";
    pub const TYPE_DECLARATION: &str = "type_declaration";
    pub const VAR_DECLARATION: &str = "var_declaration";
    pub const VAR_SPEC: &str = "var_spec";
    pub const VAR_SPEC_LIST: &str = "var_spec_list";
    pub const CONST_DECLARATION: &str = "const_declaration";
    pub const CONST_SPEC: &str = "const_spec";

    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const CALL_EXPRESSION: &str = "call_expression";
    pub const SELECTOR_EXPRESSION: &str = "selector_expression";
    pub const COMPOSITE_LITERAL: &str = "composite_literal";
    pub const QUALIFIED_TYPE: &str = "qualified_type";
    pub const LITERAL_VALUE: &str = "literal_value";
    pub const KEYED_ELEMENT: &str = "keyed_element";
    pub const LITERAL_ELEMENT: &str = "literal_element";
    pub const IDENTIFIER: &str = "identifier";
    pub const FIELD_IDENTIFIER: &str = "field_identifier";

    /// Kinds the Go AST models as a basic literal.
    pub const BASIC_LITERALS: &[&str] = &[
        "interpreted_string_literal",
        "raw_string_literal",
        "rune_literal",
        "int_literal",
        "float_literal",
        "imaginary_literal",
    ];

    pub fn is_basic_literal(kind: &str) -> bool {
        BASIC_LITERALS.contains(&kind)
    }
}

/// A Go file parsed into a syntax tree.
#[derive(Debug)]
pub struct ParsedGo {
    pub tree: Tree,
    pub source: String,
    /// Path the source was read from; empty for in-memory sources.
    pub file_path: String,
}

impl ParsedGo {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Reject trees the Go toolchain would refuse: parse errors, a missing
    /// package clause, or statements at the top level.
    fn validate(&self) -> Result<(), SyntaxError> {
        let root = self.root();
        let top_level = named_children(root);
        let Some((first, rest)) = top_level.split_first() else {
            return Err(self.syntax_error(
                root.end_position(),
                "expected 'package', found 'EOF'".to_string(),
            ));
        };
        if first.kind() != kind::PACKAGE_CLAUSE {
            return Err(self.syntax_error(
                first.start_position(),
                format!("expected 'package', found {}", self.found(*first)),
            ));
        }

        if root.has_error() {
            let node = first_error(root).unwrap_or(root);
            let message = if node.is_missing() {
                format!("expected '{}'", node.kind())
            } else {
                format!("unexpected {}", self.found(node))
            };
            return Err(self.syntax_error(node.start_position(), message));
        }

        let mut imports_allowed = true;
        for node in rest {
            let allowed = match node.kind() {
                kind::IMPORT_DECLARATION => imports_allowed,
                kind::FUNCTION_DECLARATION
                | kind::METHOD_DECLARATION
                | kind::TYPE_DECLARATION
                | kind::VAR_DECLARATION
                | kind::CONST_DECLARATION => {
                    imports_allowed = false;
                    true
                }
                _ => false,
            };
            if !allowed {
                return Err(self.syntax_error(
                    node.start_position(),
                    format!("expected declaration, found {}", self.found(*node)),
                ));
            }
        }

        Ok(())
    }

    /// First token of `node`, used to describe what the parser stumbled on.
    fn found(&self, node: Node<'_>) -> String {
        match self.text(node).split_whitespace().next() {
            Some(token) => token.chars().take(32).collect(),
            None => "'EOF'".to_string(),
        }
    }

    fn syntax_error(&self, point: Point, message: String) -> SyntaxError {
        let source_line = self
            .source
            .lines()
            .nth(point.row)
            .unwrap_or_default()
            .trim_end_matches('\r')
            .to_string();
        SyntaxError {
            file: self.file_path.clone(),
            line: point.row + 1,
            column: point.column + 1,
            message,
            source_line,
        }
    }
}

/// Named children of `node`, skipping comments (they may appear anywhere).
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != kind::COMMENT)
        .collect()
}

/// Visit `root` and its descendants in pre-order with a tree cursor, so depth
/// is bounded by the heap rather than the call stack. The children of a node
/// are skipped when `visit` returns `false`.
pub fn walk_preorder<'t>(root: Node<'t>, mut visit: impl FnMut(Node<'t>) -> bool) {
    let mut cursor = root.walk();
    loop {
        if visit(cursor.node()) && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// First `ERROR` or `MISSING` node in pre-order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut found = None;
    walk_preorder(root, |node| {
        if found.is_some() {
            return false;
        }
        if node.is_error() || node.is_missing() {
            found = Some(node);
            return false;
        }
        node.has_error()
    });
    found
}

/// Parse raw bytes as a Go file. The bytes must be valid UTF-8.
pub fn parse_go_bytes(bytes: &[u8], file_path: &str) -> Result<ParsedGo, ScanError> {
    match std::str::from_utf8(bytes) {
        Ok(code) => parse_go_source(code.to_string(), file_path),
        Err(err) => Err(illegal_utf8(bytes, err.valid_up_to(), file_path).into()),
    }
}

/// Parse a Go source string into a validated syntax tree.
pub fn parse_go_source(code: String, file_path: &str) -> Result<ParsedGo, ScanError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

    let Some(tree) = parser.parse(&code, None) else {
        return Err(SyntaxError {
            file: file_path.to_string(),
            line: 1,
            column: 1,
            message: "parser produced no syntax tree".to_string(),
            source_line: code.lines().next().unwrap_or_default().to_string(),
        }
        .into());
    };

    let parsed = ParsedGo {
        tree,
        source: code,
        file_path: file_path.to_string(),
    };
    parsed.validate()?;
    Ok(parsed)
}

fn illegal_utf8(bytes: &[u8], offset: usize, file_path: &str) -> SyntaxError {
    let line_start = bytes[..offset]
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |pos| pos + 1);
    let line_end = bytes[offset..]
        .iter()
        .position(|b| *b == b'\n')
        .map_or(bytes.len(), |pos| offset + pos);
    SyntaxError {
        file: file_path.to_string(),
        line: bytes[..offset].iter().filter(|b| **b == b'\n').count() + 1,
        column: offset - line_start + 1,
        message: "illegal UTF-8 encoding".to_string(),
        source_line: String::from_utf8_lossy(&bytes[line_start..line_end])
            .trim_end_matches('\r')
            .to_string(),
    }
}
