use super::*;
use crate::ir::{Decl, IrEnumEntry, IrProperty};
use clr_ir::{standard, ClassId, FqName, StringInterner, TypeRef};
use pretty_assertions::assert_eq;

struct Fixture {
    module: IrModule,
    cache: DeclarationCache,
}

impl Fixture {
    fn new() -> Self {
        Self::with_settings(LanguageSettings::default())
    }

    fn with_settings(settings: LanguageSettings) -> Self {
        let interner = StringInterner::shared();
        let name = interner.intern("test");
        Fixture {
            module: IrModule::new(interner, name),
            cache: DeclarationCache::new(settings),
        }
    }

    fn name(&self, text: &str) -> Name {
        self.module.interner().intern(text)
    }

    fn text(&self, name: Name) -> &'static str {
        self.module.interner().lookup(name)
    }

    fn top_level(&mut self, text: &str, kind: ClassKind) -> ClassRef {
        let id = ClassId::top_level(FqName::KOTLIN, self.name(text));
        self.module
            .alloc_class(IrClass::new(id, kind, DeclParent::Package(FqName::KOTLIN)))
    }

    fn companion_of(&mut self, owner: ClassRef, visibility: Visibility) -> ClassRef {
        let id = self
            .module
            .class(owner)
            .id
            .nested(self.module.interner(), Name::COMPANION);
        let mut class = IrClass::new(id, ClassKind::Object, DeclParent::Class(owner));
        class.status = DeclStatus::new(visibility, Modality::Final).with_flags(DeclFlags::COMPANION);
        let companion = self.module.alloc_class(class);
        self.module.add_declaration(owner, Decl::Class(companion));
        companion
    }

    /// Member `fun name(x: Int): String` of `class`, with a dispatch receiver.
    fn member(&mut self, class: ClassRef, text: &str, status: DeclStatus) -> FunctionRef {
        let mut function = IrFunction::new(
            self.name(text),
            DeclParent::Class(class),
            TypeRef::non_null(standard::STRING),
        );
        function.status = status;
        function.params.push(IrParam::dispatch_receiver(
            self.name("<this>"),
            self.module.class(class).default_type(),
        ));
        function
            .params
            .push(IrParam::regular(self.name("x"), TypeRef::non_null(standard::INT)));
        let function = self.module.alloc_function(function);
        self.module.add_declaration(class, Decl::Function(function));
        function
    }
}

#[test]
fn enum_entry_field_is_static_final_and_cached() {
    let mut f = Fixture::new();
    let color = f.top_level("Color", ClassKind::EnumClass);
    let red = f.module.alloc_enum_entry(IrEnumEntry {
        name: f.name("RED"),
        parent: color,
    });

    let field = f.cache.field_for_enum_entry(&mut f.module, red);
    let ir_field = f.module.field(field);
    assert_eq!(f.text(ir_field.name), "RED");
    assert_eq!(ir_field.ty, f.module.class(color).default_type());
    assert_eq!(ir_field.parent, DeclParent::Class(color));
    assert!(ir_field.is_static() && ir_field.is_final());
    assert_eq!(ir_field.origin, DeclOrigin::FieldForEnumEntry);

    let fields_before = f.module.field_count();
    assert_eq!(f.cache.field_for_enum_entry(&mut f.module, red), field);
    assert_eq!(f.module.field_count(), fields_before);
    assert_eq!(f.cache.len(), 1);
}

#[test]
fn plain_object_gets_public_instance_field() {
    let mut f = Fixture::new();
    let logger = f.top_level("Logger", ClassKind::Object);

    let field = f.cache.field_for_object_instance(&mut f.module, logger);
    let ir_field = f.module.field(field);
    assert_eq!(ir_field.name, Name::INSTANCE);
    assert_eq!(ir_field.parent, DeclParent::Class(logger));
    assert_eq!(ir_field.visibility(), Visibility::Public);
    assert_eq!(ir_field.ty, TypeRef::non_null(f.module.class(logger).id));
    assert_eq!(f.cache.field_for_object_instance(&mut f.module, logger), field);
}

#[test]
fn companion_field_is_hoisted_into_owner() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Protected);

    let field = f.cache.field_for_object_instance(&mut f.module, companion);
    let ir_field = f.module.field(field);
    assert_eq!(ir_field.name, Name::COMPANION);
    assert_eq!(ir_field.parent, DeclParent::Class(widget));
    assert_eq!(ir_field.visibility(), Visibility::ProtectedStatic);
}

#[test]
fn companion_field_keeps_other_visibilities() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Private);
    let field = f.cache.field_for_object_instance(&mut f.module, companion);
    assert_eq!(f.module.field(field).visibility(), Visibility::Private);
}

#[test]
fn companion_field_is_public_when_setting_is_off() {
    let mut f = Fixture::with_settings(LanguageSettings {
        proper_visibility_for_companion_instance_field: false,
    });
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Private);
    let field = f.cache.field_for_object_instance(&mut f.module, companion);
    assert_eq!(f.module.field(field).visibility(), Visibility::Public);
}

#[test]
fn interface_companion_field_is_public() {
    let mut f = Fixture::new();
    let shape = f.top_level("Shape", ClassKind::Interface);
    let companion = f.companion_of(shape, Visibility::Private);
    let field = f.cache.field_for_object_instance(&mut f.module, companion);
    assert_eq!(f.module.field(field).visibility(), Visibility::Public);
    assert_eq!(f.module.field(field).parent, DeclParent::Class(shape));
}

#[test]
fn mapped_builtin_companion_keeps_instance_field() {
    let mut f = Fixture::new();
    let int = f.module.alloc_class(IrClass::new(
        standard::INT,
        ClassKind::Class,
        DeclParent::Package(FqName::KOTLIN),
    ));
    let companion = f.companion_of(int, Visibility::Public);

    let field = f.cache.field_for_object_instance(&mut f.module, companion);
    let ir_field = f.module.field(field);
    assert_eq!(ir_field.name, Name::INSTANCE);
    assert_eq!(ir_field.parent, DeclParent::Class(companion));
}

#[test]
fn private_field_for_interface_companion() {
    let mut f = Fixture::new();
    let shape = f.top_level("Shape", ClassKind::Interface);
    let companion = f.companion_of(shape, Visibility::Public);

    let private = f.cache.private_field_for_object_instance(&mut f.module, companion);
    let ir_field = f.module.field(private);
    assert_eq!(ir_field.name, Name::INTERFACE_COMPANION_INSTANCE);
    assert_eq!(ir_field.visibility(), Visibility::PackagePrivate);
    assert_eq!(ir_field.parent, DeclParent::Class(companion));
    assert_eq!(ir_field.origin, DeclOrigin::InterfaceCompanionPrivateInstance);

    // cached separately from the general field
    let general = f.cache.field_for_object_instance(&mut f.module, companion);
    assert_ne!(general, private);
    assert_eq!(f.cache.private_field_for_object_instance(&mut f.module, companion), private);
}

#[test]
fn private_field_falls_back_to_general_field() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Public);
    let private = f.cache.private_field_for_object_instance(&mut f.module, companion);
    assert_eq!(f.cache.field_for_object_instance(&mut f.module, companion), private);
}

#[test]
fn companion_member_gets_static_forwarder_in_owner() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Public);
    let status = DeclStatus::new(Visibility::Internal, Modality::Final);
    let create = f.member(companion, "create", status);

    let pair = f.cache.static_and_companion_declaration(&mut f.module, create);
    assert_eq!(pair.companion_function, create);

    let proxy = f.module.function(pair.static_function);
    assert_eq!(proxy.parent, DeclParent::Class(widget));
    assert_eq!(proxy.status.visibility, Visibility::Public);
    assert!(proxy.status.is_static());
    assert!(proxy.dispatch_receiver().is_none());
    assert_eq!(proxy.params.len(), 1);
    assert_eq!(proxy.origin, DeclOrigin::StaticWrapper);
    assert_eq!(proxy.attribute_owner, Some(create));

    let instance = f.cache.field_for_object_instance(&mut f.module, companion);
    let proxy = f.module.function(pair.static_function);
    assert_eq!(
        proxy.body,
        Some(IrBody::Expression(IrExpr::Call {
            target: create,
            type_arguments: Vec::new(),
            arguments: vec![
                IrExpr::GetField(instance),
                IrExpr::GetValue {
                    function: pair.static_function,
                    index: 0,
                },
            ],
        }))
    );

    let functions = f.module.function_count();
    assert_eq!(f.cache.static_and_companion_declaration(&mut f.module, create), pair);
    assert_eq!(f.module.function_count(), functions);
}

#[test]
fn protected_static_forwarder_becomes_protected_static() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Public);
    let status = DeclStatus::new(Visibility::Protected, Modality::Open);
    let create = f.member(companion, "create", status);

    let pair = f.cache.static_and_companion_declaration(&mut f.module, create);
    let proxy = f.module.function(pair.static_function);
    assert_eq!(proxy.status.visibility, Visibility::ProtectedStatic);
    assert_eq!(proxy.status.modality, Modality::Open);
}

#[test]
fn external_companion_member_gets_static_sibling() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Public);
    let status = DeclStatus::new(Visibility::Protected, Modality::Final).with_flags(DeclFlags::EXTERNAL);
    let native = f.member(companion, "native", status);

    let pair = f.cache.static_and_companion_declaration(&mut f.module, native);
    let sibling = f.module.function(pair.static_function);
    assert_eq!(sibling.parent, DeclParent::Class(widget));
    assert!(sibling.is_external());
    assert!(sibling.dispatch_receiver().is_none());
    assert_eq!(sibling.params.len(), 1);
    assert_eq!(sibling.attribute_owner, Some(native));

    // the companion side forwards to the sibling and keeps a receiver
    let forwarder = f.module.function(pair.companion_function);
    assert_eq!(forwarder.parent, DeclParent::Class(companion));
    assert_eq!(forwarder.status.visibility, Visibility::Protected);
    assert!(!forwarder.status.is_static());
    assert_eq!(
        forwarder.dispatch_receiver().map(|param| param.ty.clone()),
        Some(f.module.class(companion).default_type())
    );
    assert_eq!(
        forwarder.body,
        Some(IrBody::Expression(IrExpr::Call {
            target: pair.static_function,
            type_arguments: Vec::new(),
            arguments: vec![IrExpr::GetValue {
                function: pair.companion_function,
                index: 1,
            }],
        }))
    );
}

#[test]
fn forwarder_in_interface_is_open() {
    let mut f = Fixture::new();
    let shape = f.top_level("Shape", ClassKind::Interface);
    let companion = f.companion_of(shape, Visibility::Public);
    let create = f.member(companion, "create", DeclStatus::PUBLIC_FINAL);
    let pair = f.cache.static_and_companion_declaration(&mut f.module, create);
    assert_eq!(f.module.function(pair.static_function).status.modality, Modality::Open);
}

#[test]
fn forwarder_uses_accessor_platform_name() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let companion = f.companion_of(widget, Visibility::Public);
    let getter = f.member(companion, "<get-count>", DeclStatus::PUBLIC_FINAL);
    let property = f.module.alloc_property(IrProperty {
        name: f.name("count"),
        parent: DeclParent::Class(companion),
        getter: Some(getter),
        setter: None,
    });
    f.module.function_mut(getter).property = Some(property);

    let pair = f.cache.static_and_companion_declaration(&mut f.module, getter);
    assert_eq!(f.text(f.module.function(pair.static_function).name), "get_count");
}

#[test]
#[should_panic(expected = "not a companion member")]
fn static_pair_requires_companion_member() {
    let mut f = Fixture::new();
    let widget = f.top_level("Widget", ClassKind::Class);
    let draw = f.member(widget, "draw", DeclStatus::PUBLIC_FINAL);
    f.cache.static_and_companion_declaration(&mut f.module, draw);
}

#[test]
fn default_impls_class_is_nested_and_cached() {
    let mut f = Fixture::new();
    let shape = f.top_level("Shape", ClassKind::Interface);
    let impls = f.cache.default_impls_class(&mut f.module, shape);

    let class = f.module.class(impls);
    assert_eq!(class.name(), Name::DEFAULT_IMPLS);
    assert_eq!(class.parent, DeclParent::Class(shape));
    assert_eq!(class.origin, DeclOrigin::DefaultImpls);
    assert_eq!(class.id.as_string(f.module.interner()), "kotlin/Shape.DefaultImpls");

    let classes = f.module.class_count();
    assert_eq!(f.cache.default_impls_class(&mut f.module, shape), impls);
    assert_eq!(f.module.class_count(), classes);
}

#[test]
fn redirection_copies_signature_into_class() {
    let mut f = Fixture::new();
    let shape = f.top_level("Shape", ClassKind::Interface);
    let square = f.top_level("Square", ClassKind::Class);
    let area = f.member(shape, "area", DeclStatus::new(Visibility::Public, Modality::Open));

    let status = DeclStatus::new(Visibility::Public, Modality::Open).with_flags(
        DeclFlags::FAKE_OVERRIDE | DeclFlags::OPERATOR | DeclFlags::EXTERNAL | DeclFlags::TAILREC,
    );
    let inherited = f.member(square, "area", status);
    f.module.function_mut(inherited).overridden.push(area);
    // receiver still typed as the interface
    f.module.function_mut(inherited).params[0].ty = f.module.class(shape).default_type();

    let bridge = f.cache.default_impls_redirection(&mut f.module, inherited);
    let ir_bridge = f.module.function(bridge);
    assert_eq!(f.text(ir_bridge.name), "area");
    assert_eq!(ir_bridge.parent, DeclParent::Class(square));
    assert_eq!(ir_bridge.status.flags, DeclFlags::OPERATOR);
    assert_eq!(ir_bridge.status.modality, Modality::Open);
    assert_eq!(ir_bridge.overridden, vec![area]);
    assert_eq!(ir_bridge.origin, DeclOrigin::SuperInterfaceMethodBridge);
    assert_eq!(
        ir_bridge.dispatch_receiver().map(|param| param.ty.clone()),
        Some(f.module.class(square).default_type())
    );
    assert_eq!(ir_bridge.params.len(), 2);
    assert_eq!(f.cache.default_impls_redirection(&mut f.module, inherited), bridge);
}

#[test]
#[should_panic(expected = "not a fake override")]
fn redirection_requires_fake_override() {
    let mut f = Fixture::new();
    let square = f.top_level("Square", ClassKind::Class);
    let area = f.member(square, "area", DeclStatus::PUBLIC_FINAL);
    f.cache.default_impls_redirection(&mut f.module, area);
}
