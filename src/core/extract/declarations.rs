//! Top-level literal declarations of a single file.
//!
//! Built once per file before the call-pattern pass so identifier arguments
//! can be resolved without walking the declarations again:
//!
//! ```go
//! var assetsDir = "./public"          // assetsDir -> "./public"
//! const (
//!     webDir, apiDir = "./web", "./api" // positional
//!     port           = 8080             // any basic literal
//! )
//! var computed = filepath.Join("a", "b") // not a literal: unresolved
//! ```

use std::collections::HashMap;

use tree_sitter::Node;

use crate::core::parsers::go::{ParsedGo, kind, named_children};

/// Maps top-level `var`/`const` names to the source text of their literal
/// initializer (still quoted).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredLiterals {
    values: HashMap<String, String>,
}

impl DeclaredLiterals {
    pub fn collect(parsed: &ParsedGo) -> Self {
        let mut declared = Self::default();

        for node in named_children(parsed.root()) {
            if matches!(
                node.kind(),
                kind::VAR_DECLARATION | kind::CONST_DECLARATION
            ) {
                for spec in value_specs(node) {
                    declared.record(parsed, spec);
                }
            }
        }

        declared
    }

    /// Literal text declared for `name`, if its initializer is a literal.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    fn record(&mut self, parsed: &ParsedGo, spec: Node<'_>) {
        let mut cursor = spec.walk();
        let names: Vec<Node<'_>> = spec.children_by_field_name("name", &mut cursor).collect();
        let values = spec
            .child_by_field_name("value")
            .map(named_children)
            .unwrap_or_default();

        for (index, name) in names.into_iter().enumerate() {
            let name = parsed.text(name);
            if name == "_" {
                continue;
            }
            match values.get(index) {
                Some(value) if kind::is_basic_literal(value.kind()) => {
                    self.values
                        .insert(name.to_string(), parsed.text(*value).to_string());
                }
                // A later non-literal declaration hides an earlier literal one.
                _ => {
                    self.values.remove(name);
                }
            }
        }
    }
}

/// `var_spec`/`const_spec` nodes of a declaration, with or without parentheses.
fn value_specs(declaration: Node<'_>) -> Vec<Node<'_>> {
    named_children(declaration)
        .into_iter()
        .flat_map(|child| match child.kind() {
            kind::VAR_SPEC | kind::CONST_SPEC => vec![child],
            kind::VAR_SPEC_LIST => named_children(child),
            _ => Vec::new(),
        })
        .filter(|spec| matches!(spec.kind(), kind::VAR_SPEC | kind::CONST_SPEC))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::parsers::go::parse_go_source;

    fn declared(source: &str) -> DeclaredLiterals {
        let parsed = parse_go_source(source.to_string(), "main.go").unwrap();
        DeclaredLiterals::collect(&parsed)
    }

    #[test]
    fn test_single_var() {
        let declared = declared("package main\n\nvar assetsDir = \"./public\"\n");
        assert_eq!(declared.get("assetsDir"), Some("\"./public\""));
        assert_eq!(declared.len(), 1);
    }

    #[test]
    fn test_typed_var_and_raw_string() {
        let declared = declared("package main\n\nvar dir string = `./web`\n");
        assert_eq!(declared.get("dir"), Some("`./web`"));
    }

    #[test]
    fn test_grouped_declarations() {
        let source = r#"package main

var (
	webDir = "./web"
	apiDir = "./api"
)

const (
	staticDir = "./static"
	port      = 8080
)
"#;
        let declared = declared(source);
        assert_eq!(declared.get("webDir"), Some("\"./web\""));
        assert_eq!(declared.get("apiDir"), Some("\"./api\""));
        assert_eq!(declared.get("staticDir"), Some("\"./static\""));
        assert_eq!(declared.get("port"), Some("8080"));
    }

    #[test]
    fn test_multiple_names_are_positional() {
        let declared = declared("package main\n\nvar a, b = \"./a\", \"./b\"\n");
        assert_eq!(declared.get("a"), Some("\"./a\""));
        assert_eq!(declared.get("b"), Some("\"./b\""));
    }

    #[test]
    fn test_non_literal_initializers_are_not_recorded() {
        let source = r#"package main

import "path/filepath"

var joined = filepath.Join("a", "b")
var concat = "./a" + "/b"
var other = joined
var noValue string
"#;
        let declared = declared(source);
        assert_eq!(declared.len(), 0);
        assert_eq!(declared.get("joined"), None);
    }

    #[test]
    fn test_local_declarations_are_ignored() {
        let source = "package main\n\nfunc main() {\n\tvar local = \"./local\"\n\t_ = local\n}\n";
        assert_eq!(declared(source).len(), 0);
    }
}
