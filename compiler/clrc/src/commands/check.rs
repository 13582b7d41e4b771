//! `clrc check`: validate inputs and resolve symbols for a module.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clr_ir::{FqName, StringInterner};
use clr_symbols::{
    render_symbols, AssemblySymbolProvider, BuiltinSymbolProvider, ProviderChain, SymbolProvider,
};
use rustc_hash::FxHashMap;
use tracing::{debug, info_span};

use super::{assembly_key, load_assembly};
use crate::config::{CompilerConfig, DEFAULT_IMPORTS, SOURCE_EXTENSION};
use crate::diagnostic::{DiagnosticCollector, ErrorCode};
use crate::error::DriverError;

/// Name of the symbol listing written to the output directory.
pub const SYMBOLS_FILE: &str = "symbols.txt";

/// What a successful `check` saw.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckSummary {
    pub sources: usize,
    pub assemblies: usize,
    pub classes: usize,
    /// Default imports no provider knows about.
    pub unresolved_imports: Vec<String>,
}

/// Run the checks, reporting input problems into `diagnostics`.
///
/// Returns `None` when a reported error stops the run before symbols are
/// built.
pub fn check(
    config: &CompilerConfig,
    diagnostics: &mut DiagnosticCollector,
    out: &mut impl Write,
) -> Result<Option<CheckSummary>, DriverError> {
    let _span = info_span!("check", module = %config.module_name).entered();

    let mut roots = Vec::new();
    for root in &config.source_roots {
        if root.is_dir() {
            roots.push(root.as_path());
        } else {
            diagnostics.error(
                ErrorCode::E0002,
                format!("source root `{}` does not exist", root.display()),
            );
        }
    }
    let sources = collect_sources(&roots)?;
    if sources.is_empty() {
        diagnostics.error(ErrorCode::E0001, "no source files");
    }

    let mut assemblies = FxHashMap::default();
    for path in &config.assemblies {
        match load_assembly(path) {
            Ok(assembly) => {
                assemblies.insert(assembly_key(path, &assembly), assembly);
            }
            Err(error) => diagnostics.error(ErrorCode::E0003, error.to_string()),
        }
    }
    if diagnostics.has_errors() {
        return Ok(None);
    }

    let interner = StringInterner::shared();
    let library = Arc::new(AssemblySymbolProvider::new(
        interner.clone(),
        &assemblies,
        &config.provider,
    ));
    let chain = ProviderChain::new()
        .with(Arc::new(BuiltinSymbolProvider::new()))
        .with(library.clone());

    let unresolved_imports: Vec<String> = DEFAULT_IMPORTS
        .iter()
        .filter(|package| !chain.has_package(FqName::parse(&interner, package)))
        .map(|package| (*package).to_owned())
        .collect();
    debug!(unresolved = unresolved_imports.len(), "resolved default imports");

    if let Some(dir) = &config.output_dir {
        write_symbols(dir, &render_symbols(library.registry(), &interner))?;
    }

    let summary = CheckSummary {
        sources: sources.len(),
        assemblies: assemblies.len(),
        classes: library.registry().class_count(),
        unresolved_imports,
    };
    writeln!(
        out,
        "checked {} source file(s) against {} assembly description(s): {} class(es)",
        summary.sources, summary.assemblies, summary.classes
    )?;
    Ok(Some(summary))
}

/// Source files under `roots`, recursively, sorted by path.
pub fn collect_sources(roots: &[&Path]) -> Result<Vec<PathBuf>, DriverError> {
    let mut sources = Vec::new();
    let mut pending: Vec<PathBuf> = roots.iter().map(|root| root.to_path_buf()).collect();
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|source| DriverError::Read {
            path: dir.clone(),
            source,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|source| DriverError::Read {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
                sources.push(path);
            }
        }
    }
    sources.sort();
    Ok(sources)
}

fn write_symbols(dir: &Path, listing: &str) -> Result<(), DriverError> {
    let wrap = |source| DriverError::Write {
        path: dir.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(wrap)?;
    fs::write(dir.join(SYMBOLS_FILE), listing).map_err(wrap)
}
