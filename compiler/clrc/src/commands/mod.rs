//! Driver commands.
//!
//! Each command takes its arguments (without the command name) and the
//! stream it prints to, so tests can run it against a buffer.

mod check;
mod render;
mod symbols;

pub use check::{check, collect_sources, CheckSummary, SYMBOLS_FILE};
pub use render::render;
pub use symbols::symbols;

use std::fs;
use std::path::{Path, PathBuf};

use clr_ir::NodeAssembly;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

use crate::error::DriverError;

/// Read one JSON assembly description.
pub fn load_assembly(path: &Path) -> Result<NodeAssembly, DriverError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DriverError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Key an assembly by its declared name, falling back to the file stem.
fn assembly_key(path: &Path, assembly: &NodeAssembly) -> String {
    assembly.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    })
}

/// Load every description, failing on the first bad one.
fn load_assemblies(paths: &[PathBuf]) -> Result<FxHashMap<String, NodeAssembly>, DriverError> {
    let mut assemblies = FxHashMap::default();
    for path in paths {
        let assembly = load_assembly(path)?;
        assemblies.insert(assembly_key(path, &assembly), assembly);
    }
    Ok(assemblies)
}
