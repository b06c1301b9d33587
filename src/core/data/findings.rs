use serde::Serialize;

/// A directory of static assets registered through `HandleDir`.
///
/// Created once per matching call site and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDir {
    /// Best-effort resolved directory. Empty when the argument could not be
    /// resolved to a literal.
    pub dir: String,
    /// The call site serves the directory from a generated asset bundle, so a
    /// bundling step has to run before the assets are usable.
    pub should_generated: bool,
}

/// A shell-style command embedded in a `$` comment directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCommand {
    /// Working directory: the directory of the annotated file.
    pub dir: String,
    pub name: String,
    pub args: Vec<String>,
}

impl SourceCommand {
    /// The command line as written, `name` followed by its arguments.
    pub fn command_line(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything a scan found, in file order and then discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub asset_dirs: Vec<AssetDir>,
    pub commands: Vec<SourceCommand>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.asset_dirs.is_empty() && self.commands.is_empty()
    }

    /// Append the findings of a later file.
    pub fn merge(&mut self, other: ScanResult) {
        self.asset_dirs.extend(other.asset_dirs);
        self.commands.extend(other.commands);
    }
}
