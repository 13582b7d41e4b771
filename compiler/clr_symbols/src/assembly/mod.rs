//! Symbol provider backed by assembly metadata.
//!
//! Every type of every assembly is turned into symbols once, eagerly, when
//! the provider is created. Construction runs in two passes: first every
//! class name is declared so that signatures can refer to any type in the
//! assembly set, then the symbols are built and applied.

mod build;

use std::collections::BTreeSet;

use clr_ir::{ClassId, FqName, Name, NodeAssembly, NodeType, SharedInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::provider::SymbolProvider;
use crate::registry::SymbolRegistry;
use crate::resolver::TypeResolver;
use crate::symbol::{ClassSymbol, FunctionSymbol};

pub use build::{class_id_of, declaration_of, TypeBuilder, TypeShape};

/// Configuration for `AssemblySymbolProvider`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ProviderConfig {
    /// Packages that always exist, even when no type declares them.
    pub implicit_packages: Vec<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            implicit_packages: vec!["System".to_owned(), "System.Console".to_owned()],
        }
    }
}

pub struct AssemblySymbolProvider {
    interner: SharedInterner,
    registry: SymbolRegistry,
    implicit_packages: FxHashSet<FqName>,
}

impl AssemblySymbolProvider {
    /// Build symbols for every type in `assemblies`.
    ///
    /// Assemblies are processed in name order so the result does not depend
    /// on map iteration order.
    #[tracing::instrument(level = "debug", skip_all, fields(assemblies = assemblies.len()))]
    pub fn new(
        interner: SharedInterner,
        assemblies: &FxHashMap<String, NodeAssembly>,
        config: &ProviderConfig,
    ) -> Self {
        let mut names: Vec<&String> = assemblies.keys().collect();
        names.sort();
        let nodes: Vec<&NodeType> = names
            .into_iter()
            .filter_map(|name| assemblies.get(name))
            .flat_map(|assembly| assembly.types.iter())
            .collect();

        let mut registry = SymbolRegistry::new();
        for node in &nodes {
            registry.declare(&declaration_of(&interner, node));
        }

        let built: Vec<_> = {
            let resolver = TypeResolver::new(&interner, registry.index());
            let builder = TypeBuilder::new(&interner, resolver);
            nodes.iter().map(|node| builder.build(node)).collect()
        };
        for built_type in built {
            registry.apply(built_type);
        }

        let implicit_packages = config
            .implicit_packages
            .iter()
            .map(|package| FqName::parse(&interner, package))
            .collect();

        tracing::debug!(
            types = nodes.len(),
            classes = registry.class_count(),
            callables = registry.callable_count(),
            "assembly symbols built"
        );

        AssemblySymbolProvider {
            interner,
            registry,
            implicit_packages,
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    pub fn has_class(&self, class_id: ClassId) -> bool {
        self.registry.contains_class(class_id)
    }
}

impl SymbolProvider for AssemblySymbolProvider {
    fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol> {
        self.registry.classifier(class_id)
    }

    fn has_package(&self, package: FqName) -> bool {
        self.implicit_packages.contains(&package) || self.registry.index().has_package(package)
    }

    fn collect_callables(&self, package: FqName, name: Name) -> Vec<&FunctionSymbol> {
        self.registry.collect_callables(package, name)
    }

    fn callables_in_class(&self, class_id: ClassId, name: Name) -> Vec<&FunctionSymbol> {
        self.registry.callables_in_class(class_id, name)
    }

    fn package_names(&self) -> BTreeSet<FqName> {
        self.registry.index().package_names().collect()
    }

    fn top_level_class_names(&self, package: FqName) -> BTreeSet<Name> {
        self.registry.index().top_level_class_names(package).clone()
    }

    fn top_level_callable_names(&self, package: FqName) -> BTreeSet<Name> {
        self.registry.index().top_level_callable_names(package).clone()
    }
}

#[cfg(test)]
mod tests;
