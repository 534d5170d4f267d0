//! Small helpers that do not belong to a specific stage of the walk.

pub mod paths;

pub use paths::{normalize_path, resolve_from_current_dir, resolve_project_dir};
