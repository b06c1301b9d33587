//! `HandleDir` call-pattern matching.
//!
//! Finds statement-level calls of a method named `HandleDir` with at least two
//! arguments. The second argument is the asset directory, the optional third
//! one tells whether the directory is served from a generated bundle:
//!
//! ```go
//! app.HandleDir("/static", "./assets")                                   // "./assets", false
//! app.HandleDir("/static", assetsDir)                                    // resolved through declarations
//! app.HandleDir("/", "./public", iris.DirOptions{Asset: Asset})          // "./public", true
//! app.HandleDir("/", "./public", iris.DirOptions{IndexName: "index.html"}) // "./public", false
//! ```

use tracing::debug;
use tree_sitter::Node;

use crate::core::data::AssetDir;
use crate::core::extract::declarations::DeclaredLiterals;
use crate::core::parsers::go::{ParsedGo, kind, named_children, walk_preorder};
use crate::core::utils::unquote;

/// Method name that registers a directory handler.
pub const HANDLE_DIR_METHOD: &str = "HandleDir";

/// Qualified options type whose `Asset: Asset` field marks a generated bundle.
pub const DIR_OPTIONS_TYPE: &str = "iris.DirOptions";

/// Field key and value identifier of the generated-bundle accessor.
pub const ASSET_ACCESSOR: &str = "Asset";

/// How the directory argument of a `HandleDir` call was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirArgument<'t> {
    /// A literal, still quoted: `"./assets"`
    Literal(&'t str),
    /// A plain identifier, looked up in the file's declarations: `assetsDir`
    Identifier(&'t str),
    /// Anything else (calls, concatenations, selectors, ...).
    Other,
}

impl<'t> DirArgument<'t> {
    pub fn classify(parsed: &'t ParsedGo, node: Node<'_>) -> Self {
        match node.kind() {
            k if kind::is_basic_literal(k) => Self::Literal(parsed.text(node)),
            kind::IDENTIFIER => Self::Identifier(parsed.text(node)),
            _ => Self::Other,
        }
    }

    /// Literal source text this argument stands for, or `""` when unknown.
    pub fn literal_text<'d>(self, declared: &'d DeclaredLiterals) -> &'d str
    where
        't: 'd,
    {
        match self {
            Self::Literal(text) => text,
            Self::Identifier(name) => declared.get(name).unwrap_or_default(),
            Self::Other => "",
        }
    }
}

/// A matched `HandleDir(...)` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleDirCall<'t> {
    pub directory: DirArgument<'t>,
    pub uses_generated_bundle: bool,
    /// 1-based line of the call.
    pub line: usize,
}

/// Walks a file and turns every `HandleDir` call into an [`AssetDir`].
pub struct CallPatternExtractor<'a> {
    parsed: &'a ParsedGo,
    declared: &'a DeclaredLiterals,
}

impl<'a> CallPatternExtractor<'a> {
    pub fn new(parsed: &'a ParsedGo, declared: &'a DeclaredLiterals) -> Self {
        Self { parsed, declared }
    }

    /// Asset directories in pre-order traversal order of their calls.
    pub fn extract(&self) -> Vec<AssetDir> {
        self.calls()
            .into_iter()
            .map(|call| self.to_asset_dir(call))
            .collect()
    }

    pub fn calls(&self) -> Vec<HandleDirCall<'a>> {
        let mut calls = Vec::new();
        walk_preorder(self.parsed.root(), |node| {
            if node.kind() == kind::EXPRESSION_STATEMENT
                && let Some(call) = self.match_statement(node)
            {
                calls.push(call);
            }
            true
        });
        calls
    }

    fn match_statement(&self, statement: Node<'a>) -> Option<HandleDirCall<'a>> {
        let call = named_children(statement).into_iter().next()?;
        if call.kind() != kind::CALL_EXPRESSION {
            return None;
        }

        let callee = call.child_by_field_name("function")?;
        if callee.kind() != kind::SELECTOR_EXPRESSION {
            return None;
        }
        let method = callee.child_by_field_name("field")?;
        if self.parsed.text(method) != HANDLE_DIR_METHOD {
            return None;
        }

        let args = named_children(call.child_by_field_name("arguments")?);
        if args.len() < 2 {
            return None;
        }

        Some(HandleDirCall {
            directory: DirArgument::classify(self.parsed, args[1]),
            uses_generated_bundle: args
                .get(2)
                .is_some_and(|options| self.is_generated_bundle_options(*options)),
            line: call.start_position().row + 1,
        })
    }

    /// True for `iris.DirOptions{..., Asset: Asset, ...}`.
    fn is_generated_bundle_options(&self, node: Node<'_>) -> bool {
        if node.kind() != kind::COMPOSITE_LITERAL {
            return false;
        }
        let Some(type_node) = node.child_by_field_name("type") else {
            return false;
        };
        if type_node.kind() != kind::QUALIFIED_TYPE {
            return false;
        }
        let (Some(package), Some(name)) = (
            type_node.child_by_field_name("package"),
            type_node.child_by_field_name("name"),
        ) else {
            return false;
        };
        let type_name = format!("{}.{}", self.parsed.text(package), self.parsed.text(name));
        if type_name != DIR_OPTIONS_TYPE {
            return false;
        }

        node.child_by_field_name("body").is_some_and(|body| {
            named_children(body)
                .into_iter()
                .filter(|element| element.kind() == kind::KEYED_ELEMENT)
                .any(|element| self.is_asset_pair(element))
        })
    }

    fn is_asset_pair(&self, element: Node<'_>) -> bool {
        let parts: Vec<Node<'_>> = named_children(element)
            .into_iter()
            .filter_map(unwrap_literal_element)
            .collect();
        let [key, value] = parts.as_slice() else {
            return false;
        };

        matches!(key.kind(), kind::IDENTIFIER | kind::FIELD_IDENTIFIER)
            && self.parsed.text(*key) == ASSET_ACCESSOR
            && value.kind() == kind::IDENTIFIER
            && self.parsed.text(*value) == ASSET_ACCESSOR
    }

    fn to_asset_dir(&self, call: HandleDirCall<'_>) -> AssetDir {
        let raw = call.directory.literal_text(self.declared);
        let dir = match unquote(raw) {
            Ok(dir) => dir,
            Err(err) => {
                if !raw.is_empty() {
                    debug!(
                        file = %self.parsed.file_path,
                        line = call.line,
                        literal = raw,
                        error = %err,
                        "keeping directory literal as written"
                    );
                }
                raw.to_string()
            }
        };

        AssetDir {
            dir,
            should_generated: call.uses_generated_bundle,
        }
    }
}

/// Keyed-element halves may be wrapped in a `literal_element` node.
fn unwrap_literal_element(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() == kind::LITERAL_ELEMENT {
        named_children(node).into_iter().next()
    } else {
        Some(node)
    }
}
