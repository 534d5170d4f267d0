//! Core types shared by every stage of the walk.
//!
//! - [`error`] - [`ModTreeError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`identity`] - [`ModuleIdentity`] node keys and the [`DepthLimit`] budget

pub mod error;
pub mod identity;

pub use error::{ErrorContext, ModTreeError, user_friendly_error};
pub use identity::{DepthLimit, ModuleIdentity};
