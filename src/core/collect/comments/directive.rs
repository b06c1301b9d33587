//! `$` command directive parsing.
//!
//! A comment whose text starts with `$` embeds one or more shell-style
//! commands, each introduced by `$`:
//!
//! ```go
//! // $ go generate $ npm install
//! ```

/// The sentinel that opens a command directive and separates its commands.
pub const DIRECTIVE_SENTINEL: char = '$';

/// A single command of a directive: program name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Command directive parsed from a comment group's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub commands: Vec<CommandLine>,
}

impl Directive {
    /// Parse directive from rendered comment text (markers already removed).
    ///
    /// Returns `None` for ordinary comments, i.e. text that does not start
    /// with `$` once trimmed. A directive made only of sentinels has no
    /// commands.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.strip_suffix('\n').unwrap_or(text).trim();
        if !text.starts_with(DIRECTIVE_SENTINEL) {
            return None;
        }

        let commands = text
            .split(DIRECTIVE_SENTINEL)
            .filter_map(parse_command)
            .collect();
        Some(Self { commands })
    }
}

fn parse_command(segment: &str) -> Option<CommandLine> {
    let mut tokens = segment.split_whitespace().map(String::from);
    let name = tokens.next()?;
    Some(CommandLine {
        name,
        args: tokens.collect(),
    })
}
