//! Builds class, constructor and function symbols for one `NodeType`.
//!
//! Builders are pure: they read metadata and the resolver and return a
//! `BuiltType`. Nothing here touches a registry.

use clr_ir::metadata::{FILE_CLASS_ATTRIBUTE, OBJECT_ATTRIBUTE};
use clr_ir::{
    standard, CallableId, ClassId, ClassKind, DeclFlags, DeclStatus, FqName, Name, NodeConstructor,
    NodeMethod, NodeParameter, NodeType, StringInterner, TypeRef,
};

use crate::index::Registration;
use crate::registry::BuiltType;
use crate::resolver::TypeResolver;
use crate::symbol::{ClassSymbol, ConstructorSymbol, FunctionSymbol, ParameterSymbol, SymbolOrigin};

/// How a metadata type is turned into symbols, selected by attribute tag.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TypeShape {
    /// Singleton; its static methods become free functions of the package.
    Object,
    /// Container of namespace-level functions, plus a companion.
    FileClass,
    /// Ordinary class; static members move into a companion.
    Class,
}

impl TypeShape {
    pub fn of(node: &NodeType) -> Self {
        if node.has_attribute(OBJECT_ATTRIBUTE) {
            TypeShape::Object
        } else if node.has_attribute(FILE_CLASS_ATTRIBUTE) {
            TypeShape::FileClass
        } else {
            TypeShape::Class
        }
    }

    pub fn has_companion(self) -> bool {
        !matches!(self, TypeShape::Object)
    }
}

/// Id of the class a metadata type declares.
pub fn class_id_of(interner: &StringInterner, node: &NodeType) -> ClassId {
    let package = FqName::parse(interner, node.namespace_or_root());
    ClassId::top_level(package, interner.intern(&node.name))
}

/// Names a metadata type will publish, known before any signature is resolved.
pub fn declaration_of(interner: &StringInterner, node: &NodeType) -> Registration {
    let class_id = class_id_of(interner, node);
    let mut registration = Registration::new(class_id.package());
    registration.classes.push(class_id);
    if TypeShape::of(node).has_companion() {
        registration
            .classes
            .push(class_id.nested(interner, Name::COMPANION));
    }
    registration
}

pub struct TypeBuilder<'a> {
    interner: &'a StringInterner,
    resolver: TypeResolver<'a>,
}

impl<'a> TypeBuilder<'a> {
    pub fn new(interner: &'a StringInterner, resolver: TypeResolver<'a>) -> Self {
        TypeBuilder { interner, resolver }
    }

    pub fn build(&self, node: &NodeType) -> BuiltType {
        let class_id = class_id_of(self.interner, node);
        let shape = TypeShape::of(node);

        let mut primary = match shape {
            TypeShape::Object => self.build_object(class_id, node),
            TypeShape::FileClass => self.build_file_class(class_id, node),
            TypeShape::Class => self.build_class(class_id, node),
        };

        let mut symbols = Vec::with_capacity(2);
        if shape.has_companion() {
            let companion = self.build_companion(class_id, node);
            primary.companion = Some(companion.id);
            symbols.push(primary);
            symbols.push(companion);
        } else {
            symbols.push(primary);
        }

        let mut registration = Registration::new(class_id.package());
        for symbol in &symbols {
            registration.classes.push(symbol.id);
            registration
                .callables
                .extend(symbol.functions.iter().map(|function| function.id));
        }

        BuiltType {
            symbols,
            registration,
        }
    }

    fn build_object(&self, class_id: ClassId, node: &NodeType) -> ClassSymbol {
        let mut symbol = library_class(class_id, ClassKind::Object, DeclStatus::PUBLIC_FINAL);
        for method in node.methods.iter().filter(|method| method.is_static) {
            let id = CallableId::top_level(class_id.package(), self.interner.intern(&method.name));
            symbol = symbol.with_function(self.build_function(id, class_id, method, false));
        }
        symbol
    }

    fn build_file_class(&self, class_id: ClassId, node: &NodeType) -> ClassSymbol {
        let mut symbol = library_class(class_id, ClassKind::Class, DeclStatus::PUBLIC_FINAL);
        for method in &node.methods {
            let id = CallableId::member(class_id, self.interner.intern(&method.name));
            symbol = symbol.with_function(self.build_function(id, class_id, method, false));
        }
        symbol
    }

    fn build_class(&self, class_id: ClassId, node: &NodeType) -> ClassSymbol {
        let mut symbol = library_class(class_id, ClassKind::Class, DeclStatus::PUBLIC_FINAL);
        for constructor in node.constructors.iter().filter(|ctor| !ctor.is_static) {
            symbol = symbol.with_constructor(self.build_constructor(class_id, constructor));
        }
        for method in node.methods.iter().filter(|method| !method.is_static) {
            let id = CallableId::member(class_id, self.interner.intern(&method.name));
            symbol = symbol.with_function(self.build_function(id, class_id, method, false));
        }
        symbol
    }

    fn build_companion(&self, owner: ClassId, node: &NodeType) -> ClassSymbol {
        let companion_id = owner.nested(self.interner, Name::COMPANION);
        let status = DeclStatus::PUBLIC_FINAL.with_flags(DeclFlags::COMPANION);
        let mut symbol = library_class(companion_id, ClassKind::Object, status);
        for constructor in node.constructors.iter().filter(|ctor| ctor.is_static) {
            symbol = symbol.with_constructor(self.build_constructor(companion_id, constructor));
        }
        for method in node.methods.iter().filter(|method| method.is_static) {
            let id = CallableId::member(companion_id, self.interner.intern(&method.name));
            symbol = symbol.with_function(self.build_function(id, companion_id, method, true));
        }
        symbol
    }

    fn build_constructor(&self, owner: ClassId, node: &NodeConstructor) -> ConstructorSymbol {
        let mut symbol = ConstructorSymbol::new(owner, DeclStatus::PUBLIC_FINAL, SymbolOrigin::Library);
        if node.is_static {
            symbol.dispatch_receiver = None;
        }
        symbol.parameters = self.build_parameters(&node.parameters);
        symbol
    }

    fn build_function(
        &self,
        id: CallableId,
        owner: ClassId,
        node: &NodeMethod,
        platform_static: bool,
    ) -> FunctionSymbol {
        let mut status = DeclStatus::PUBLIC_FINAL;
        if node.is_static {
            status = status.with_flags(DeclFlags::STATIC);
        }
        let return_type = match &node.return_type {
            Some(name) => self.resolver.resolve(name, true),
            None => TypeRef::nullable_any(),
        };
        let annotations = if platform_static {
            vec![standard::CLR_STATIC]
        } else {
            Vec::new()
        };

        FunctionSymbol {
            id,
            owner: Some(owner),
            status,
            parameters: self.build_parameters(&node.parameters),
            return_type,
            dispatch_receiver: Some(TypeRef::non_null(owner)),
            annotations,
            origin: SymbolOrigin::Library,
        }
    }

    fn build_parameters(&self, parameters: &[NodeParameter]) -> Vec<ParameterSymbol> {
        parameters
            .iter()
            .enumerate()
            .map(|(index, parameter)| {
                let name = match &parameter.name {
                    Some(name) if !name.is_empty() => self.interner.intern(name),
                    _ => self.interner.intern(&format!("p{index}")),
                };
                // parameters take the return-position rule, so `Void` is non-null `Unit`
                let ty = match &parameter.ty {
                    Some(type_name) => self.resolver.resolve(type_name, true),
                    None => TypeRef::nullable_any(),
                };
                ParameterSymbol::new(name, ty)
            })
            .collect()
    }
}

fn library_class(id: ClassId, kind: ClassKind, status: DeclStatus) -> ClassSymbol {
    ClassSymbol::new(id, kind, status, SymbolOrigin::Library)
}
