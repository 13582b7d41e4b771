//! Symbol registry: the single owner of symbol lookup tables.
//!
//! Builders never touch the registry; they return a `BuiltType` and the
//! provider hands it to `apply`. Registration happens in two steps so that
//! every class name is visible to the type resolver before any member
//! signature is resolved:
//!
//! 1. `declare` publishes the names of everything about to be built
//! 2. `apply` stores the finished symbols
//!
//! # Design
//!
//! - `FxHashMap` by id for O(1) lookup
//! - `BTreeMap` by package for deterministic enumeration
//! - Overload buckets keyed by `CallableId`

use std::collections::BTreeMap;
use std::sync::Arc;

use clr_ir::{CallableId, ClassId, FqName, Name};
use rustc_hash::FxHashMap;

use crate::index::{NameIndex, Registration};
use crate::symbol::{ClassSymbol, FunctionSymbol};

/// Output of one symbol builder: the symbols plus the names they publish.
#[derive(Clone, Debug)]
pub struct BuiltType {
    pub symbols: Vec<ClassSymbol>,
    pub registration: Registration,
}

#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    index: NameIndex,
    classes_by_id: FxHashMap<ClassId, ClassSymbol>,
    classes_by_package: BTreeMap<FqName, Vec<ClassId>>,
    callables_by_id: FxHashMap<CallableId, Vec<Arc<FunctionSymbol>>>,
    callables_by_package: BTreeMap<FqName, Vec<CallableId>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish names ahead of construction.
    pub fn declare(&mut self, registration: &Registration) {
        self.index.record(registration);
    }

    /// Store built symbols and publish their names.
    ///
    /// A class id already present keeps its first symbol. The duplicate's
    /// free functions are still filed under the package, so every published
    /// callable name stays backed by a symbol; its members are dropped.
    pub fn apply(&mut self, built: BuiltType) {
        self.index.record(&built.registration);

        for symbol in built.symbols {
            let class_id = symbol.id;
            if self.classes_by_id.contains_key(&class_id) {
                tracing::debug!(?class_id, "duplicate class id, keeping first symbol");
                for function in symbol.functions.iter().filter(|f| f.id.is_top_level()) {
                    self.file_callable(function);
                }
                continue;
            }

            for function in &symbol.functions {
                self.file_callable(function);
            }

            self.classes_by_package
                .entry(class_id.package())
                .or_default()
                .push(class_id);
            self.classes_by_id.insert(class_id, symbol);
        }
    }

    fn file_callable(&mut self, function: &Arc<FunctionSymbol>) {
        let bucket = self.callables_by_id.entry(function.id).or_default();
        if bucket.is_empty() {
            self.callables_by_package
                .entry(function.id.package())
                .or_default()
                .push(function.id);
        }
        bucket.push(Arc::clone(function));
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    pub fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol> {
        self.classes_by_id.get(&class_id)
    }

    pub fn contains_class(&self, class_id: ClassId) -> bool {
        self.classes_by_id.contains_key(&class_id)
    }

    /// Overload bucket for one callable id.
    pub fn callables(&self, callable_id: CallableId) -> &[Arc<FunctionSymbol>] {
        self.callables_by_id
            .get(&callable_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Free functions named `name` in `package`.
    pub fn collect_callables(&self, package: FqName, name: Name) -> Vec<&FunctionSymbol> {
        self.callables(CallableId::top_level(package, name))
            .iter()
            .map(Arc::as_ref)
            .collect()
    }

    /// Member functions of `class_id` named `name`.
    pub fn callables_in_class(&self, class_id: ClassId, name: Name) -> Vec<&FunctionSymbol> {
        self.callables(CallableId::member(class_id, name))
            .iter()
            .map(Arc::as_ref)
            .collect()
    }

    /// Class ids registered in `package`, in registration order.
    pub fn classes_in_package(&self, package: FqName) -> &[ClassId] {
        self.classes_by_package
            .get(&package)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Callable ids registered in `package`, in registration order.
    pub fn callables_in_package(&self, package: FqName) -> &[CallableId] {
        self.callables_by_package
            .get(&package)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All classes, grouped by package.
    pub fn classes(&self) -> impl Iterator<Item = &ClassSymbol> + '_ {
        self.classes_by_package
            .values()
            .flatten()
            .filter_map(|class_id| self.classes_by_id.get(class_id))
    }

    pub fn class_count(&self) -> usize {
        self.classes_by_id.len()
    }

    pub fn callable_count(&self) -> usize {
        self.callables_by_id.values().map(Vec::len).sum()
    }
}
