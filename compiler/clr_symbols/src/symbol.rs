//! Compiler-internal symbols.
//!
//! Symbols are plain immutable values. A class owns its constructors and
//! member functions; functions are reference counted because the registry
//! also files them into overload buckets by `CallableId`.

use std::sync::Arc;

use clr_ir::{CallableId, ClassId, ClassKind, DeclFlags, DeclStatus, Modality, Name, TypeRef};

/// Where a symbol came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolOrigin {
    /// Built from assembly metadata.
    Library,
    /// Part of the fixed built-in table.
    BuiltIns,
    /// Declared in the sources being compiled.
    Source,
}

/// A value parameter of a function or constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParameterSymbol {
    pub name: Name,
    pub ty: TypeRef,
}

impl ParameterSymbol {
    pub fn new(name: Name, ty: TypeRef) -> Self {
        ParameterSymbol { name, ty }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstructorSymbol {
    pub id: CallableId,
    pub owner: ClassId,
    pub status: DeclStatus,
    pub parameters: Vec<ParameterSymbol>,
    /// Always the owning class, non-null.
    pub return_type: TypeRef,
    /// The owning class for instance constructors; `None` for static ones.
    pub dispatch_receiver: Option<TypeRef>,
    pub origin: SymbolOrigin,
}

impl ConstructorSymbol {
    pub fn new(owner: ClassId, status: DeclStatus, origin: SymbolOrigin) -> Self {
        ConstructorSymbol {
            id: CallableId::constructor(owner),
            owner,
            status,
            parameters: Vec::new(),
            return_type: TypeRef::non_null(owner),
            dispatch_receiver: Some(TypeRef::non_null(owner)),
            origin,
        }
    }

    pub fn is_static(&self) -> bool {
        self.dispatch_receiver.is_none()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSymbol {
    /// Callable namespace: the package for free functions, the owning class
    /// for members.
    pub id: CallableId,
    /// Class the function was declared in, even when `id` is package-level.
    pub owner: Option<ClassId>,
    pub status: DeclStatus,
    pub parameters: Vec<ParameterSymbol>,
    pub return_type: TypeRef,
    pub dispatch_receiver: Option<TypeRef>,
    pub annotations: Vec<ClassId>,
    pub origin: SymbolOrigin,
}

impl FunctionSymbol {
    pub fn name(&self) -> Name {
        self.id.name()
    }

    pub fn has_annotation(&self, annotation: ClassId) -> bool {
        self.annotations.contains(&annotation)
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassSymbol {
    pub id: ClassId,
    pub kind: ClassKind,
    pub status: DeclStatus,
    /// Synthetic nested class holding the static members, if any.
    pub companion: Option<ClassId>,
    pub constructors: Vec<ConstructorSymbol>,
    pub functions: Vec<Arc<FunctionSymbol>>,
    pub annotations: Vec<ClassId>,
    pub origin: SymbolOrigin,
}

impl ClassSymbol {
    pub fn new(id: ClassId, kind: ClassKind, status: DeclStatus, origin: SymbolOrigin) -> Self {
        ClassSymbol {
            id,
            kind,
            status,
            companion: None,
            constructors: Vec::new(),
            functions: Vec::new(),
            annotations: Vec::new(),
            origin,
        }
    }

    /// Public class with the given modality.
    pub fn public(id: ClassId, kind: ClassKind, modality: Modality, origin: SymbolOrigin) -> Self {
        let status = DeclStatus::new(clr_ir::Visibility::Public, modality);
        Self::new(id, kind, status, origin)
    }

    pub fn is_companion(&self) -> bool {
        self.status.flags.contains(DeclFlags::COMPANION)
    }

    pub fn has_annotation(&self, annotation: ClassId) -> bool {
        self.annotations.contains(&annotation)
    }

    /// Member functions named `name`, in declaration order.
    pub fn functions_named(&self, name: Name) -> impl Iterator<Item = &FunctionSymbol> {
        self.functions
            .iter()
            .map(Arc::as_ref)
            .filter(move |function| function.name() == name)
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorSymbol) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn with_function(mut self, function: FunctionSymbol) -> Self {
        self.functions.push(Arc::new(function));
        self
    }
}
