//! Namespace index: which packages exist and which top-level class and
//! callable names they contain.
//!
//! The index is only ever fed `Registration` records, so building symbols
//! and publishing their names stay separate steps.
//!
//! # Design
//!
//! - `BTreeSet` name sets for deterministic enumeration
//! - Short-name index (first registration wins) for namespace fallback in
//!   the type resolver, replacing a scan over every registered class

use std::collections::{BTreeMap, BTreeSet};

use clr_ir::{CallableId, ClassId, FqName, Name};
use rustc_hash::FxHashMap;

static EMPTY: BTreeSet<Name> = BTreeSet::new();

/// Names a builder wants published.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Registration {
    pub package: FqName,
    /// Every class the builder produced, companions included.
    pub classes: Vec<ClassId>,
    /// Every function the builder produced, members included.
    pub callables: Vec<CallableId>,
}

impl Registration {
    pub fn new(package: FqName) -> Self {
        Registration {
            package,
            classes: Vec::new(),
            callables: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    packages: BTreeSet<FqName>,
    class_names: BTreeMap<FqName, BTreeSet<Name>>,
    callable_names: BTreeMap<FqName, BTreeSet<Name>>,
    /// Short class name -> package of its first registration.
    short_names: FxHashMap<Name, FqName>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a registration. Recording the same names twice is a no-op.
    ///
    /// Only top-level classes and callables enter the per-package name
    /// sets; nested classes (companions) are reachable through their owner.
    pub fn record(&mut self, registration: &Registration) {
        self.packages.insert(registration.package);
        for class_id in &registration.classes {
            self.short_names
                .entry(class_id.short_name())
                .or_insert(class_id.package());
            if !class_id.is_nested() {
                self.class_names
                    .entry(class_id.package())
                    .or_default()
                    .insert(class_id.short_name());
            }
        }
        for callable_id in &registration.callables {
            if callable_id.is_top_level() {
                self.callable_names
                    .entry(callable_id.package())
                    .or_default()
                    .insert(callable_id.name());
            }
        }
    }

    /// Union `other` into `self`. Existing short-name entries win.
    pub fn extend(&mut self, other: &NameIndex) {
        self.packages.extend(other.packages.iter().copied());
        for (package, names) in &other.class_names {
            self.class_names
                .entry(*package)
                .or_default()
                .extend(names.iter().copied());
        }
        for (package, names) in &other.callable_names {
            self.callable_names
                .entry(*package)
                .or_default()
                .extend(names.iter().copied());
        }
        for (name, package) in &other.short_names {
            self.short_names.entry(*name).or_insert(*package);
        }
    }

    pub fn has_package(&self, package: FqName) -> bool {
        self.packages.contains(&package)
    }

    pub fn package_names(&self) -> impl Iterator<Item = FqName> + '_ {
        self.packages.iter().copied()
    }

    pub fn top_level_class_names(&self, package: FqName) -> &BTreeSet<Name> {
        self.class_names.get(&package).unwrap_or(&EMPTY)
    }

    pub fn top_level_callable_names(&self, package: FqName) -> &BTreeSet<Name> {
        self.callable_names.get(&package).unwrap_or(&EMPTY)
    }

    pub fn has_top_level_class(&self, package: FqName, name: Name) -> bool {
        self.top_level_class_names(package).contains(&name)
    }

    /// Package of the first registered class with this short name.
    pub fn namespace_for_short_name(&self, name: Name) -> Option<FqName> {
        self.short_names.get(&name).copied()
    }
}
