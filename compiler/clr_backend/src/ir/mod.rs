//! Declaration arena for the backend.
//!
//! Declarations live in flat vectors owned by `IrModule` and refer to each
//! other by typed index (`ClassRef`, `FunctionRef`, ...). Lowerings mutate
//! the arena in place; derived state is kept in side tables keyed by these
//! references, never on the declarations themselves.

use clr_ir::{
    ClassId, ClassKind, DeclFlags, DeclStatus, FqName, Name, SharedInterner, TypeRef, Visibility,
};

macro_rules! decl_ref {
    ($($(#[$meta:meta])* $name:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Index into the owning arena vector.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    )*};
}

decl_ref! {
    /// Index of an `IrClass` in its module.
    ClassRef;
    /// Index of an `IrFunction` in its module.
    FunctionRef;
    /// Index of an `IrField` in its module.
    FieldRef;
    /// Index of an `IrEnumEntry` in its module.
    EnumEntryRef;
    /// Index of an `IrProperty` in its module.
    PropertyRef;
}

/// Where a declaration sits in the output tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclParent {
    Package(FqName),
    Class(ClassRef),
    Function(FunctionRef),
}

impl DeclParent {
    pub fn as_class(self) -> Option<ClassRef> {
        match self {
            DeclParent::Class(class) => Some(class),
            DeclParent::Package(_) | DeclParent::Function(_) => None,
        }
    }
}

/// A member entry in a class body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decl {
    Class(ClassRef),
    Function(FunctionRef),
    Field(FieldRef),
    Property(PropertyRef),
    EnumEntry(EnumEntryRef),
}

/// Why a declaration exists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DeclOrigin {
    /// Written in source or loaded from metadata.
    #[default]
    Defined,
    FieldForEnumEntry,
    FieldForObjectInstance,
    InterfaceCompanionPrivateInstance,
    /// Forwarder between a companion member and its static counterpart.
    StaticWrapper,
    DefaultImpls,
    /// Concrete stub for an inherited interface member.
    SuperInterfaceMethodBridge,
    GeneratedMain,
}

#[derive(Clone, Debug)]
pub struct IrClass {
    pub id: ClassId,
    pub kind: ClassKind,
    pub status: DeclStatus,
    pub parent: DeclParent,
    pub origin: DeclOrigin,
    pub type_parameters: Vec<Name>,
    pub annotations: Vec<ClassId>,
    pub declarations: Vec<Decl>,
}

impl IrClass {
    pub fn new(id: ClassId, kind: ClassKind, parent: DeclParent) -> Self {
        IrClass {
            id,
            kind,
            status: DeclStatus::PUBLIC_FINAL,
            parent,
            origin: DeclOrigin::Defined,
            type_parameters: Vec::new(),
            annotations: Vec::new(),
            declarations: Vec::new(),
        }
    }

    pub fn name(&self) -> Name {
        self.id.short_name()
    }

    pub fn is_companion(&self) -> bool {
        self.status.is_companion()
    }

    pub fn is_file_class(&self) -> bool {
        self.status.flags.contains(DeclFlags::FILE_CLASS)
    }

    pub fn default_type(&self) -> TypeRef {
        TypeRef::non_null(self.id)
    }

    pub fn functions(&self) -> impl Iterator<Item = FunctionRef> + '_ {
        self.declarations.iter().filter_map(|decl| match decl {
            Decl::Function(function) => Some(*function),
            _ => None,
        })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamKind {
    DispatchReceiver,
    ExtensionReceiver,
    Regular,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IrParam {
    pub name: Name,
    pub ty: TypeRef,
    pub kind: ParamKind,
}

impl IrParam {
    pub fn regular(name: Name, ty: TypeRef) -> Self {
        IrParam {
            name,
            ty,
            kind: ParamKind::Regular,
        }
    }

    pub fn dispatch_receiver(name: Name, ty: TypeRef) -> Self {
        IrParam {
            name,
            ty,
            kind: ParamKind::DispatchReceiver,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum IrExpr {
    Call {
        target: FunctionRef,
        type_arguments: Vec<Name>,
        arguments: Vec<IrExpr>,
    },
    /// Read of a static field.
    GetField(FieldRef),
    /// Read of a parameter of `function` by position.
    GetValue { function: FunctionRef, index: usize },
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum IrBody {
    Expression(IrExpr),
    Block(Vec<IrExpr>),
}

#[derive(Clone, Debug)]
pub struct IrFunction {
    pub name: Name,
    pub parent: DeclParent,
    pub status: DeclStatus,
    pub origin: DeclOrigin,
    pub return_type: TypeRef,
    pub type_parameters: Vec<Name>,
    pub params: Vec<IrParam>,
    pub annotations: Vec<ClassId>,
    pub overridden: Vec<FunctionRef>,
    /// Property this function is an accessor of.
    pub property: Option<PropertyRef>,
    /// Function whose derived state this one shares.
    pub attribute_owner: Option<FunctionRef>,
    pub body: Option<IrBody>,
}

impl IrFunction {
    pub fn new(name: Name, parent: DeclParent, return_type: TypeRef) -> Self {
        IrFunction {
            name,
            parent,
            status: DeclStatus::PUBLIC_FINAL,
            origin: DeclOrigin::Defined,
            return_type,
            type_parameters: Vec::new(),
            params: Vec::new(),
            annotations: Vec::new(),
            overridden: Vec::new(),
            property: None,
            attribute_owner: None,
            body: None,
        }
    }

    pub fn dispatch_receiver(&self) -> Option<&IrParam> {
        self.params
            .iter()
            .find(|param| param.kind == ParamKind::DispatchReceiver)
    }

    pub fn extension_receiver(&self) -> Option<&IrParam> {
        self.params
            .iter()
            .find(|param| param.kind == ParamKind::ExtensionReceiver)
    }

    pub fn non_dispatch_params(&self) -> impl Iterator<Item = &IrParam> {
        self.params
            .iter()
            .filter(|param| param.kind != ParamKind::DispatchReceiver)
    }

    pub fn regular_params(&self) -> impl Iterator<Item = &IrParam> {
        self.params
            .iter()
            .filter(|param| param.kind == ParamKind::Regular)
    }

    pub fn has_flag(&self, flag: DeclFlags) -> bool {
        self.status.flags.contains(flag)
    }

    pub fn is_external(&self) -> bool {
        self.has_flag(DeclFlags::EXTERNAL)
    }

    pub fn is_fake_override(&self) -> bool {
        self.has_flag(DeclFlags::FAKE_OVERRIDE)
    }

    pub fn is_suspend(&self) -> bool {
        self.has_flag(DeclFlags::SUSPEND)
    }
}

#[derive(Clone, Debug)]
pub struct IrField {
    pub name: Name,
    pub ty: TypeRef,
    pub parent: DeclParent,
    pub status: DeclStatus,
    pub origin: DeclOrigin,
}

impl IrField {
    pub fn is_static(&self) -> bool {
        self.status.is_static()
    }

    pub fn is_final(&self) -> bool {
        self.status.flags.contains(DeclFlags::FINAL)
    }

    pub fn visibility(&self) -> Visibility {
        self.status.visibility
    }
}

#[derive(Clone, Debug)]
pub struct IrEnumEntry {
    pub name: Name,
    /// The enum class declaring the entry.
    pub parent: ClassRef,
}

#[derive(Clone, Debug)]
pub struct IrProperty {
    pub name: Name,
    pub parent: DeclParent,
    pub getter: Option<FunctionRef>,
    pub setter: Option<FunctionRef>,
}

/// One compilation unit's declarations.
pub struct IrModule {
    pub name: Name,
    interner: SharedInterner,
    classes: Vec<IrClass>,
    functions: Vec<IrFunction>,
    fields: Vec<IrField>,
    enum_entries: Vec<IrEnumEntry>,
    properties: Vec<IrProperty>,
    /// Classes declared directly in a package, in insertion order.
    top_level: Vec<ClassRef>,
}

fn next_index<T>(arena: &[T]) -> u32 {
    u32::try_from(arena.len())
        .unwrap_or_else(|_| panic!("declaration arena exceeded {} entries", u32::MAX))
}

impl IrModule {
    pub fn new(interner: SharedInterner, name: Name) -> Self {
        IrModule {
            name,
            interner,
            classes: Vec::new(),
            functions: Vec::new(),
            fields: Vec::new(),
            enum_entries: Vec::new(),
            properties: Vec::new(),
            top_level: Vec::new(),
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Allocate a class. Package-level classes are also listed as top-level;
    /// attaching a nested class to its parent is `add_declaration`'s job.
    pub fn alloc_class(&mut self, class: IrClass) -> ClassRef {
        let class_ref = ClassRef::new(next_index(&self.classes));
        if matches!(class.parent, DeclParent::Package(_)) {
            self.top_level.push(class_ref);
        }
        self.classes.push(class);
        class_ref
    }

    pub fn alloc_function(&mut self, function: IrFunction) -> FunctionRef {
        let function_ref = FunctionRef::new(next_index(&self.functions));
        self.functions.push(function);
        function_ref
    }

    pub fn alloc_field(&mut self, field: IrField) -> FieldRef {
        let field_ref = FieldRef::new(next_index(&self.fields));
        self.fields.push(field);
        field_ref
    }

    pub fn alloc_enum_entry(&mut self, entry: IrEnumEntry) -> EnumEntryRef {
        let entry_ref = EnumEntryRef::new(next_index(&self.enum_entries));
        self.enum_entries.push(entry);
        entry_ref
    }

    pub fn alloc_property(&mut self, property: IrProperty) -> PropertyRef {
        let property_ref = PropertyRef::new(next_index(&self.properties));
        self.properties.push(property);
        property_ref
    }

    /// Append `decl` to the body of `class`.
    pub fn add_declaration(&mut self, class: ClassRef, decl: Decl) {
        self.classes[class.index()].declarations.push(decl);
    }

    pub fn class(&self, class: ClassRef) -> &IrClass {
        &self.classes[class.index()]
    }

    pub fn class_mut(&mut self, class: ClassRef) -> &mut IrClass {
        &mut self.classes[class.index()]
    }

    pub fn function(&self, function: FunctionRef) -> &IrFunction {
        &self.functions[function.index()]
    }

    pub fn function_mut(&mut self, function: FunctionRef) -> &mut IrFunction {
        &mut self.functions[function.index()]
    }

    pub fn field(&self, field: FieldRef) -> &IrField {
        &self.fields[field.index()]
    }

    pub fn enum_entry(&self, entry: EnumEntryRef) -> &IrEnumEntry {
        &self.enum_entries[entry.index()]
    }

    pub fn property(&self, property: PropertyRef) -> &IrProperty {
        &self.properties[property.index()]
    }

    pub fn property_mut(&mut self, property: PropertyRef) -> &mut IrProperty {
        &mut self.properties[property.index()]
    }

    pub fn top_level_classes(&self) -> &[ClassRef] {
        &self.top_level
    }

    /// Every class in allocation order.
    pub fn class_refs(&self) -> impl Iterator<Item = ClassRef> {
        (0..next_index(&self.classes)).map(ClassRef::new)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The class directly containing `function`.
    ///
    /// # Panics
    /// If the function is not a class member; callers only ask this of
    /// members.
    pub fn parent_class_of_function(&self, function: FunctionRef) -> ClassRef {
        let parent = self.function(function).parent;
        parent
            .as_class()
            .unwrap_or_else(|| panic!("function {function:?} is not declared in a class: {parent:?}"))
    }

    /// The class directly containing `class`, if it is nested.
    pub fn outer_class(&self, class: ClassRef) -> Option<ClassRef> {
        self.class(class).parent.as_class()
    }

    /// Platform name of a function: accessors are named after their property.
    pub fn mapped_function_name(&self, function: FunctionRef) -> Name {
        let ir_function = self.function(function);
        let Some(property_ref) = ir_function.property else {
            return ir_function.name;
        };
        let property = self.property(property_ref);
        let prefix = if property.getter == Some(function) {
            "get_"
        } else if property.setter == Some(function) {
            "set_"
        } else {
            return ir_function.name;
        };
        let property_name = self.interner.lookup(property.name);
        self.interner.intern(&format!("{prefix}{property_name}"))
    }
}
