//! Global constants used throughout the gomod-tree codebase.

/// Nesting level past which the walker stops expanding, whatever the depth
/// budget says.
///
/// Each level is one stack frame of the recursive walk. Real module graphs are
/// far shallower than this.
pub const MAX_WALK_DEPTH: usize = 256;

/// Environment variable naming the Go workspace / module cache root.
pub const GOPATH_ENV: &str = "GOPATH";

/// Directory under the home directory used when `GOPATH` is unset.
pub const DEFAULT_GOPATH_DIR: &str = "go";

/// Depth flag value meaning "no limit".
pub const UNLIMITED_DEPTH_FLAG: i64 = -1;
