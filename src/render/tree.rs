//! Indented two-section text output.

use std::fmt::Write as _;
use std::io::Write;

use crate::core::{ModTreeError, ModuleIdentity};
use crate::resolver::WalkStrategy;
use crate::version::strip_inline_comment;

const DIRECT_BANNER: &str = "--------------------\nDirect dependencies:\n--------------------";
const TRANSIENT_BANNER: &str = "-----------------------------------------------------\n\
Transient (not local / not compiled in) dependencies:\n\
-----------------------------------------------------";

/// Indentation added per level of nesting.
pub const INDENT: &str = "  ";

/// Writes one line per reached module.
///
/// The first buffer receives located modules (and depth-cutoff leaves) in
/// traversal order, so a module shows up once per path that reaches it
/// before the visited check prunes it. The second buffer receives modules
/// that could not be located.
#[derive(Debug, Default)]
pub struct TreeWriter {
    direct: String,
    unknown: String,
}

impl TreeWriter {
    /// Create a writer with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to the direct section so far.
    pub fn direct_lines(&self) -> impl Iterator<Item = &str> {
        self.direct.lines()
    }

    /// Lines written to the transient section so far.
    pub fn unknown_lines(&self) -> impl Iterator<Item = &str> {
        self.unknown.lines()
    }

    fn write_line(&mut self, level: usize, identity: &ModuleIdentity) {
        let label = identity.key();
        // Writing to a String cannot fail.
        let _ = writeln!(self.direct, "{}{}", INDENT.repeat(level), strip_inline_comment(&label));
    }

    /// Render both sections with their banners.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{DIRECT_BANNER}");
        let _ = writeln!(out, "{}", self.direct);
        let _ = writeln!(out, "{TRANSIENT_BANNER}");
        let _ = writeln!(out, "{}", self.unknown);
        out
    }

    /// Write the rendered text.
    pub fn flush(&self, writer: &mut impl Write) -> Result<(), ModTreeError> {
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

impl WalkStrategy for TreeWriter {
    fn on_leaf(&mut self, identity: &ModuleIdentity, level: usize) {
        self.write_line(level, identity);
    }

    fn on_found(&mut self, identity: &ModuleIdentity, level: usize) {
        self.write_line(level, identity);
    }

    fn on_unknown(&mut self, identity: &ModuleIdentity) {
        let label = identity.key();
        let _ = writeln!(self.unknown, "{}", strip_inline_comment(&label));
    }

    fn on_edge(&mut self, _from: &ModuleIdentity, _to: &ModuleIdentity) {}
}
