//! Document loader: reads one JSON document and hands it to the extraction
//! engine.

use std::fs;
use std::path::Path;

use crate::ast::SourceDocument;
use crate::errors::ExplorerError;
use crate::extract::extract;
use crate::model::Contract;

/// Loads a single contract document from disk.
///
/// I/O and decode failures are reported with the offending path attached
/// and propagate unchanged; there is no retry and no partial recovery.
pub fn load_document(path: &Path) -> Result<Contract, ExplorerError> {
    let bytes = fs::read(path).map_err(|source| ExplorerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: SourceDocument =
        serde_json::from_slice(&bytes).map_err(|source| ExplorerError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    extract(&doc, path)
}
