//! Fetch Call Fixer: repairs a malformed `fetch` call in generated tool pages
//!
//! A code-generation pass left `` await fetch`${BACKEND_URL}/api/chat`, { ``
//! in every `app/tools/*/page.tsx`, turning the call into a tagged template.
//! This crate rewrites each occurrence to
//! `` await fetch(`${BACKEND_URL}/api/chat`, { ``.
//!
//! # Behavior
//!
//! - Matches are enumerated once, shallowly, before any file is touched
//! - Literal (non-regex) global replacement
//! - Every matched file is rewritten, even when nothing matched
//! - Files are truncated and rewritten in place through one write handle
//! - The first I/O error aborts the run; nothing is rolled back
//!
//! # Example
//!
//! ```no_run
//! use fetch_call_fixer::Patcher;
//!
//! let report = Patcher::new(".").run(|outcome| {
//!     println!("Fixed: {}", outcome.display.display());
//!     Ok(())
//! })?;
//! println!("{report}");
//! # Ok::<(), fetch_call_fixer::PatchError>(())
//! ```

pub mod discover;
pub mod edit;
pub mod error;
pub mod patcher;
pub mod rule;

// Re-exports
pub use discover::{display_path, matching_files};
pub use edit::{rewrite_file, RewriteResult, WriteMode};
pub use error::PatchError;
pub use patcher::{FileOutcome, Patcher, RunReport};
pub use rule::{FixRule, Rewrite};
