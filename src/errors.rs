//! Unified error type for the explorer's hard failure modes.
//!
//! Only document-level problems are errors here: unreadable files, malformed
//! JSON, and documents with no AST at all. Unrecognized node kinds and
//! unrenderable expressions are handled by degrading inside the extraction
//! engine and never surface as errors.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A hard error from loading or batch-building. Every variant carries the
/// offending path; any one of them aborts the whole registry build.
#[derive(Debug, Error, Diagnostic)]
pub enum ExplorerError {
    #[error("failed to read contract document {}", .path.display())]
    #[diagnostic(
        code(solscope::io),
        help("check that the file exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in contract document {}", .path.display())]
    #[diagnostic(
        code(solscope::decode),
        help("the file is not a valid compiler output document")
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no AST nodes in contract document {}", .path.display())]
    #[diagnostic(
        code(solscope::missing_ast),
        help("recompile the contract with AST output enabled")
    )]
    MissingAst { path: PathBuf },

    #[error("failed to walk contract folder {}", .path.display())]
    #[diagnostic(code(solscope::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ExplorerError {
    /// The path of the document or folder the error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            ExplorerError::Io { path, .. }
            | ExplorerError::Decode { path, .. }
            | ExplorerError::MissingAst { path }
            | ExplorerError::Walk { path, .. } => path,
        }
    }
}
