//! Built-in symbol table: the foundational types every program needs,
//! independent of any assembly.
//!
//! The table is built once, eagerly, at construction. It is placed before
//! the assembly provider in a `ProviderChain`, so built-in entries win.

use std::collections::BTreeSet;

use clr_ir::{
    standard, CallableId, ClassId, ClassKind, DeclFlags, DeclStatus, FqName, Modality, Name,
    TypeRef, Visibility,
};

use crate::index::Registration;
use crate::provider::SymbolProvider;
use crate::registry::{BuiltType, SymbolRegistry};
use crate::symbol::{ClassSymbol, ConstructorSymbol, FunctionSymbol, ParameterSymbol, SymbolOrigin};

/// Classes without members: (id, kind, modality).
const PLAIN_CLASSES: &[(ClassId, ClassKind, Modality)] = &[
    (standard::ANNOTATION, ClassKind::Interface, Modality::Open),
    (standard::ARRAY, ClassKind::Class, Modality::Final),
    (standard::BYTE_ARRAY, ClassKind::Class, Modality::Final),
    (standard::CHAR_ARRAY, ClassKind::Class, Modality::Final),
    (standard::SHORT_ARRAY, ClassKind::Class, Modality::Final),
    (standard::INT_ARRAY, ClassKind::Class, Modality::Final),
    (standard::LONG_ARRAY, ClassKind::Class, Modality::Final),
    (standard::FLOAT_ARRAY, ClassKind::Class, Modality::Final),
    (standard::DOUBLE_ARRAY, ClassKind::Class, Modality::Final),
    (standard::BOOLEAN_ARRAY, ClassKind::Class, Modality::Final),
    (standard::BOOLEAN, ClassKind::Class, Modality::Final),
    (standard::CHAR, ClassKind::Class, Modality::Final),
    (standard::CHAR_SEQUENCE, ClassKind::Interface, Modality::Open),
    (standard::COMPARABLE, ClassKind::Interface, Modality::Open),
    (standard::ENUM, ClassKind::Class, Modality::Abstract),
    (standard::NUMBER, ClassKind::Class, Modality::Abstract),
    (standard::BYTE, ClassKind::Class, Modality::Final),
    (standard::SHORT, ClassKind::Class, Modality::Final),
    (standard::LONG, ClassKind::Class, Modality::Final),
    (standard::FLOAT, ClassKind::Class, Modality::Final),
    (standard::DOUBLE, ClassKind::Class, Modality::Final),
    (standard::STRING, ClassKind::Class, Modality::Final),
    (standard::THROWABLE, ClassKind::Class, Modality::Open),
    (standard::ITERABLE, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_ITERABLE, ClassKind::Interface, Modality::Open),
    (standard::COLLECTION, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_COLLECTION, ClassKind::Interface, Modality::Open),
    (standard::LIST, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_LIST, ClassKind::Interface, Modality::Open),
    (standard::SET, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_SET, ClassKind::Interface, Modality::Open),
    (standard::MAP, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_MAP, ClassKind::Interface, Modality::Open),
    (standard::ITERATOR, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_ITERATOR, ClassKind::Interface, Modality::Open),
    (standard::LIST_ITERATOR, ClassKind::Interface, Modality::Open),
    (standard::MUTABLE_LIST_ITERATOR, ClassKind::Interface, Modality::Open),
];

pub struct BuiltinSymbolProvider {
    registry: SymbolRegistry,
}

impl BuiltinSymbolProvider {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new() -> Self {
        let mut symbols = vec![any_class(), nothing_class(), int_class()];
        symbols.extend(
            PLAIN_CLASSES
                .iter()
                .map(|&(id, kind, modality)| builtin_class(id, kind, modality)),
        );

        let mut registry = SymbolRegistry::new();
        for symbol in symbols {
            let mut registration = Registration::new(symbol.id.package());
            registration.classes.push(symbol.id);
            registration
                .callables
                .extend(symbol.functions.iter().map(|function| function.id));
            registry.apply(BuiltType {
                symbols: vec![symbol],
                registration,
            });
        }

        tracing::debug!(classes = registry.class_count(), "built-in symbols built");
        BuiltinSymbolProvider { registry }
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.class_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BuiltinSymbolProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolProvider for BuiltinSymbolProvider {
    fn classifier(&self, class_id: ClassId) -> Option<&ClassSymbol> {
        self.registry.classifier(class_id)
    }

    fn has_package(&self, package: FqName) -> bool {
        self.registry.index().has_package(package)
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

fn builtin_class(id: ClassId, kind: ClassKind, modality: Modality) -> ClassSymbol {
    ClassSymbol::public(id, kind, modality, SymbolOrigin::BuiltIns)
}

fn member(
    owner: ClassId,
    name: Name,
    status: DeclStatus,
    parameters: Vec<ParameterSymbol>,
    return_type: TypeRef,
) -> FunctionSymbol {
    FunctionSymbol {
        id: CallableId::member(owner, name),
        owner: Some(owner),
        status,
        parameters,
        return_type,
        dispatch_receiver: Some(TypeRef::non_null(owner)),
        annotations: Vec::new(),
        origin: SymbolOrigin::BuiltIns,
    }
}

/// `Any`: open root with a constructor and the three universal members.
fn any_class() -> ClassSymbol {
    let id = standard::ANY;
    let open = DeclStatus::new(Visibility::Public, Modality::Open);
    let constructor = ConstructorSymbol::new(
        id,
        DeclStatus::PUBLIC_FINAL.with_flags(DeclFlags::PRIMARY),
        SymbolOrigin::BuiltIns,
    );

    builtin_class(id, ClassKind::Class, Modality::Open)
        .with_constructor(constructor)
        .with_function(member(
            id,
            Name::EQUALS,
            open,
            vec![ParameterSymbol::new(Name::OTHER, TypeRef::nullable_any())],
            TypeRef::non_null(standard::BOOLEAN),
        ))
        .with_function(member(
            id,
            Name::HASH_CODE,
            open,
            Vec::new(),
            TypeRef::non_null(standard::INT),
        ))
        .with_function(member(
            id,
            Name::TO_STRING,
            open,
            Vec::new(),
            TypeRef::non_null(standard::STRING),
        ))
}

/// `Nothing`: cannot be instantiated.
fn nothing_class() -> ClassSymbol {
    let id = standard::NOTHING;
    let constructor = ConstructorSymbol::new(
        id,
        DeclStatus::new(Visibility::Private, Modality::Final).with_flags(DeclFlags::PRIMARY),
        SymbolOrigin::BuiltIns,
    );
    builtin_class(id, ClassKind::Class, Modality::Final).with_constructor(constructor)
}

/// `Int`, carrying `operator fun plus(other: Int): Int`.
fn int_class() -> ClassSymbol {
    let id = standard::INT;
    let int = TypeRef::non_null(id);
    builtin_class(id, ClassKind::Class, Modality::Final).with_function(member(
        id,
        Name::PLUS,
        DeclStatus::PUBLIC_FINAL.with_flags(DeclFlags::OPERATOR),
        vec![ParameterSymbol::new(Name::OTHER, int.clone())],
        int,
    ))
}
