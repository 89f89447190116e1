//! Domain registry: a name-keyed collection of contracts built from a
//! folder of compiler output documents.
//!
//! The registry is rebuilt wholesale on every call; there is no incremental
//! update and no caching across runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::ExplorerError;
use crate::loader::load_document;
use crate::model::Contract;

/// Read-only, name-keyed view over the contracts extracted from one folder.
#[derive(Debug, Default)]
pub struct ContractRegistry {
    contracts: HashMap<String, Contract>,
}

impl ContractRegistry {
    /// Contract names in sorted order, for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contracts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, name: &str) -> Option<&Contract> {
        self.contracts.get(name)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

/// Builds a registry from every `.json` document under `folder`.
///
/// The batch is all-or-nothing: the first hard error aborts the build and
/// no partial registry is returned. Contracts that end up with an empty
/// name are silently dropped, and when two documents yield the same name
/// the later one (in sorted file order) wins.
pub fn build_registry(folder: &Path) -> Result<ContractRegistry, ExplorerError> {
    let mut contracts = HashMap::new();
    for path in discover_documents(folder)? {
        let contract = load_document(&path)?;
        if contract.name.is_empty() {
            continue;
        }
        contracts.insert(contract.name.clone(), contract);
    }
    Ok(ContractRegistry { contracts })
}

/// Recursively collects the document files under `folder`.
///
/// The returned list is sorted so the registry's collision-overwrite order
/// is deterministic rather than an accident of directory iteration.
fn discover_documents(folder: &Path) -> Result<Vec<PathBuf>, ExplorerError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(folder) {
        let entry = entry.map_err(|source| ExplorerError::Walk {
            path: folder.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_document(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Returns true if the given path has the recognized document extension.
fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
