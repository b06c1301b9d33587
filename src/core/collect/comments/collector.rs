//! Comment-directive pass.
//!
//! Every comment group of a file is rendered to text and parsed as a `$`
//! directive. Each command of a directive becomes a [`SourceCommand`] whose
//! working directory is the directory of the annotated file:
//!
//! ```go
//! // $ go generate
//! // $ npm install
//! package main
//! ```
//!
//! yields `go generate` then `npm install`, in that order.

use tracing::trace;

use crate::core::collect::comments::directive::Directive;
use crate::core::collect::comments::group::CommentGroup;
use crate::core::data::SourceCommand;
use crate::core::parsers::go::ParsedGo;
use crate::core::utils::dir_of;

/// Collects `$` command directives from a file's comments.
pub struct CommentCollector;

impl CommentCollector {
    /// Collect all commands of a file, in comment order.
    pub fn collect(parsed: &ParsedGo) -> Vec<SourceCommand> {
        let dir = dir_of(&parsed.file_path);
        let mut commands = Vec::new();

        for group in CommentGroup::collect(parsed) {
            let Some(directive) = Directive::parse(&group.text()) else {
                continue;
            };
            for command in directive.commands {
                trace!(
                    file = %parsed.file_path,
                    line = group.line,
                    name = %command.name,
                    "found command directive"
                );
                commands.push(SourceCommand {
                    dir: dir.clone(),
                    name: command.name,
                    args: command.args,
                });
            }
        }

        commands
    }
}
