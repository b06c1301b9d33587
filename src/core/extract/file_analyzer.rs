//! Per-file analysis: comment directives plus `HandleDir` call patterns.
//!
//! Declarations are indexed first so the call-pattern pass can resolve
//! identifier arguments in a single traversal.

use tracing::debug;

use crate::core::collect::CommentCollector;
use crate::core::data::ScanResult;
use crate::core::extract::call_pattern::CallPatternExtractor;
use crate::core::extract::declarations::DeclaredLiterals;
use crate::core::parsers::go::ParsedGo;

/// Runs both extraction passes over one parsed file.
pub struct FileAnalyzer<'a> {
    parsed: &'a ParsedGo,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(parsed: &'a ParsedGo) -> Self {
        Self { parsed }
    }

    /// Asset directories and commands of the file, each in source order.
    pub fn analyze(&self) -> ScanResult {
        let commands = CommentCollector::collect(self.parsed);
        let declared = DeclaredLiterals::collect(self.parsed);
        let asset_dirs = CallPatternExtractor::new(self.parsed, &declared).extract();

        debug!(
            file = %self.parsed.file_path,
            declarations = declared.len(),
            asset_dirs = asset_dirs.len(),
            commands = commands.len(),
            "analyzed file"
        );

        ScanResult {
            asset_dirs,
            commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::{AssetDir, SourceCommand};
    use crate::core::parsers::go::parse_go_source;

    fn analyze(source: &str, file_path: &str) -> ScanResult {
        let parsed = parse_go_source(source.to_string(), file_path).unwrap();
        FileAnalyzer::new(&parsed).analyze()
    }

    #[test]
    fn test_analyze_web_server() {
        let source = r#"// $ npm install $ npm run build
package main

import "github.com/kataras/iris/v12"

var publicDir = "./public"

func main() {
	app := iris.New()
	// $ go-bindata -fs -prefix "assets" ./assets/...
	app.HandleDir("/static", "./assets", iris.DirOptions{Asset: Asset, AssetInfo: AssetInfo})
	app.HandleDir("/", publicDir)
	app.Listen(":8080")
}
"#;
        let result = analyze(source, "cmd/web/main.go");
        assert_eq!(
            result.asset_dirs,
            vec![
                AssetDir {
                    dir: "./assets".to_string(),
                    should_generated: true,
                },
                AssetDir {
                    dir: "./public".to_string(),
                    should_generated: false,
                },
            ]
        );
        let lines: Vec<String> = result
            .commands
            .iter()
            .map(SourceCommand::command_line)
            .collect();
        assert_eq!(
            lines,
            vec![
                "npm install",
                "npm run build",
                "go-bindata -fs -prefix \"assets\" ./assets/...",
            ]
        );
        assert!(result.commands.iter().all(|c| c.dir == "cmd/web"));
    }

    #[test]
    fn test_analyze_plain_file() {
        let result = analyze("package util\n\nfunc Add(a, b int) int { return a + b }\n", "util.go");
        assert!(result.is_empty());
    }
}
