//! Provider interface and the ordered provider chain.
//!
//! The front end sees one `ProviderChain`. Precedence is the order in which
//! providers were pushed: the first provider that knows a class wins,
//! callable overloads are concatenated in chain order, and name sets are
//! merged.

use std::collections::BTreeSet;
use std::sync::Arc;

use clr_ir::{ClassId, FqName, Name, SharedInterner};

use crate::builtins::BuiltinSymbolProvider;
use crate::registry::SymbolRegistry;
use crate::symbol::{ClassSymbol, FunctionSymbol};

/// Lookup interface shared by every symbol source.
pub trait SymbolProvider: Send + Sync {
    /// Direct lookup; never resolves anything on a miss.
    fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol>;

    fn has_package(&self, package: FqName) -> bool;

    /// Free functions named `name` in `package`, all overloads.
    fn collect_callables(&self, package: FqName, name: Name) -> Vec<&FunctionSymbol>;

    /// Member functions of `class_id` named `name`.
    fn callables_in_class(&self, class_id: ClassId, name: Name) -> Vec<&FunctionSymbol>;

    fn package_names(&self) -> BTreeSet<FqName>;

    fn top_level_class_names(&self, package: FqName) -> BTreeSet<Name>;

    fn top_level_callable_names(&self, package: FqName) -> BTreeSet<Name>;
}

/// Providers consulted in priority order.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn SymbolProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider with lower priority than every existing one.
    pub fn push(&mut self, provider: Arc<dyn SymbolProvider>) {
        self.providers.push(provider);
    }

    #[must_use]
    pub fn with(mut self, provider: Arc<dyn SymbolProvider>) -> Self {
        self.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl SymbolProvider for ProviderChain {
    fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol> {
        self.providers
            .iter()
            .find_map(|provider| provider.classifier(class_id))
    }

    fn has_package(&self, package: FqName) -> bool {
        self.providers
            .iter()
            .any(|provider| provider.has_package(package))
    }

    fn collect_callables(&self, package: FqName, name: Name) -> Vec<&FunctionSymbol> {
        self.providers
            .iter()
            .flat_map(|provider| provider.collect_callables(package, name))
            .collect()
    }

    fn callables_in_class(&self, class_id: ClassId, name: Name) -> Vec<&FunctionSymbol> {
        self.providers
            .iter()
            .flat_map(|provider| provider.callables_in_class(class_id, name))
            .collect()
    }

    fn package_names(&self) -> BTreeSet<FqName> {
        self.providers
            .iter()
            .flat_map(|provider| provider.package_names())
            .collect()
    }

    fn top_level_class_names(&self, package: FqName) -> BTreeSet<Name> {
        self.providers
            .iter()
            .flat_map(|provider| provider.top_level_class_names(package))
            .collect()
    }

    fn top_level_callable_names(&self, package: FqName) -> BTreeSet<Name> {
        self.providers
            .iter()
            .flat_map(|provider| provider.top_level_callable_names(package))
            .collect()
    }
}

/// Serves built-in symbols for classes the sources mark with
/// `@ActualizeByClrBuiltinProvider`.
///
/// A source declaration carrying the marker, on itself or on an enclosing
/// class, is replaced by the built-in symbol of the same id. Contributes no
/// callables.
pub struct ActualizingProvider {
    interner: SharedInterner,
    builtins: Arc<BuiltinSymbolProvider>,
    sources: Vec<Arc<dyn SymbolProvider>>,
}

impl ActualizingProvider {
    pub fn new(
        interner: SharedInterner,
        builtins: Arc<BuiltinSymbolProvider>,
        sources: Vec<Arc<dyn SymbolProvider>>,
    ) -> Self {
        ActualizingProvider {
            interner,
            builtins,
            sources,
        }
    }

    /// Whether `source` declares `class_id` with the marker on the class or
    /// on one of its enclosing classes.
    fn is_marked_in(&self, source: &dyn SymbolProvider, class_id: ClassId) -> bool {
        if source.classifier(class_id).is_none() {
            return false;
        }
        let mut current = Some(class_id);
        while let Some(id) = current {
            let marked = source.classifier(id).is_some_and(|symbol| {
                symbol.has_annotation(clr_ir::standard::ACTUALIZE_BY_CLR_BUILTIN_PROVIDER)
            });
            if marked {
                return true;
            }
            current = id.outer(&self.interner);
        }
        false
    }
}

impl SymbolProvider for ActualizingProvider {
    fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol> {
        let marked = self
            .sources
            .iter()
            .any(|source| self.is_marked_in(source.as_ref(), class_id));
        if marked {
            self.builtins.classifier(class_id)
        } else {
            None
        }
    }

    fn has_package(&self, package: FqName) -> bool {
        self.builtins.has_package(package)
    }

    fn collect_callables(&self, _package: FqName, _name: Name) -> Vec<&FunctionSymbol> {
        Vec::new()
    }

    fn callables_in_class(&self, _class_id: ClassId, _name: Name) -> Vec<&FunctionSymbol> {
        Vec::new()
    }

    fn package_names(&self) -> BTreeSet<FqName> {
        self.builtins.package_names()
    }

    fn top_level_class_names(&self, package: FqName) -> BTreeSet<Name> {
        self.builtins.top_level_class_names(package)
    }

    fn top_level_callable_names(&self, package: FqName) -> BTreeSet<Name> {
        self.builtins.top_level_callable_names(package)
    }
}

/// A bare registry serves symbols declared in sources.
impl SymbolProvider for SymbolRegistry {
    fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol> {
        SymbolRegistry::classifier(self, class_id)
    }

    fn has_package(&self, package: FqName) -> bool {
        self.index().has_package(package)
    }

    fn collect_callables(&self, package: FqName, name: Name) -> Vec<&FunctionSymbol> {
        SymbolRegistry::collect_callables(self, package, name)
    }

    fn callables_in_class(&self, class_id: ClassId, name: Name) -> Vec<&FunctionSymbol> {
        SymbolRegistry::callables_in_class(self, class_id, name)
    }

    fn package_names(&self) -> BTreeSet<FqName> {
        self.index().package_names().collect()
    }

    fn top_level_class_names(&self, package: FqName) -> BTreeSet<Name> {
        self.index().top_level_class_names(package).clone()
    }

    fn top_level_callable_names(&self, package: FqName) -> BTreeSet<Name> {
        self.index().top_level_callable_names(package).clone()
    }
}
