use super::*;
use clr_ir::metadata::{FILE_CLASS_ATTRIBUTE, OBJECT_ATTRIBUTE};
use clr_ir::{
    standard, ClassKind, DeclFlags, NodeConstructor, NodeMethod, NodeParameter, StringInterner,
    TypeRef,
};
use pretty_assertions::assert_eq;

fn method(name: &str, return_type: Option<&str>, is_static: bool) -> NodeMethod {
    NodeMethod {
        name: name.to_owned(),
        return_type: return_type.map(str::to_owned),
        parameters: Vec::new(),
        is_static,
    }
}

fn node_type(namespace: &str, name: &str, attributes: &[&str], methods: Vec<NodeMethod>) -> NodeType {
    NodeType {
        namespace: Some(namespace.to_owned()),
        name: name.to_owned(),
        attributes: attributes.iter().map(|a| (*a).to_owned()).collect(),
        methods,
        constructors: Vec::new(),
    }
}

fn provider_for(interner: &SharedInterner, types: Vec<NodeType>) -> AssemblySymbolProvider {
    let mut assemblies = FxHashMap::default();
    assemblies.insert(
        "Demo".to_owned(),
        NodeAssembly {
            name: Some("Demo".to_owned()),
            types,
        },
    );
    AssemblySymbolProvider::new(interner.clone(), &assemblies, &ProviderConfig::default())
}

fn class_id(interner: &StringInterner, package: &str, name: &str) -> ClassId {
    ClassId::top_level(FqName::parse(interner, package), interner.intern(name))
}

#[test]
fn object_shape_has_static_members_and_no_companion() {
    let interner = StringInterner::shared();
    let provider = provider_for(
        &interner,
        vec![node_type(
            "Demo",
            "Tools",
            &[OBJECT_ATTRIBUTE],
            vec![
                method("Alpha", Some("System.Int32"), true),
                method("Beta", None, true),
                method("Ignored", None, false),
            ],
        )],
    );

    let id = class_id(&interner, "Demo", "Tools");
    let symbol = provider.classifier(id).unwrap();
    assert_eq!(symbol.kind, ClassKind::Object);
    assert_eq!(symbol.companion, None);
    let names: Vec<_> = symbol
        .functions
        .iter()
        .map(|function| interner.lookup(function.name()))
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert!(provider
        .classifier(id.nested(&interner, Name::COMPANION))
        .is_none());
}

#[test]
fn object_functions_are_free_functions_of_the_package() {
    let interner = StringInterner::shared();
    let provider = provider_for(
        &interner,
        vec![node_type(
            "Demo",
            "Tools",
            &[OBJECT_ATTRIBUTE],
            vec![method("Run", Some("System.Void"), true), method("Run", None, true)],
        )],
    );

    let demo = FqName::parse(&interner, "Demo");
    let run = interner.intern("Run");
    let overloads = provider.collect_callables(demo, run);
    assert_eq!(overloads.len(), 2);
    assert!(overloads[0].id.is_top_level());
    assert_eq!(overloads[0].return_type, TypeRef::unit());
    assert_eq!(overloads[1].return_type, TypeRef::nullable_any());
    assert!(provider.top_level_callable_names(demo).contains(&run));
}

#[test]
fn class_shape_splits_static_members_into_companion() {
    let interner = StringInterner::shared();
    let mut node = node_type(
        "Demo",
        "Widget",
        &[],
        vec![method("Create", None, true), method("Draw", None, false)],
    );
    node.constructors = vec![
        NodeConstructor {
            parameters: Vec::new(),
            is_static: false,
        },
        NodeConstructor {
            parameters: Vec::new(),
            is_static: true,
        },
    ];
    let provider = provider_for(&interner, vec![node]);

    let id = class_id(&interner, "Demo", "Widget");
    let primary = provider.classifier(id).unwrap();
    assert_eq!(primary.kind, ClassKind::Class);
    assert_eq!(primary.functions.len(), 1);
    assert_eq!(interner.lookup(primary.functions[0].name()), "Draw");
    assert!(!primary.functions[0].has_annotation(standard::CLR_STATIC));
    assert_eq!(primary.constructors.len(), 1);
    assert_eq!(
        primary.constructors[0].dispatch_receiver,
        Some(TypeRef::non_null(id))
    );

    let companion_id = primary.companion.unwrap();
    assert_eq!(companion_id, id.nested(&interner, Name::COMPANION));
    let companion = provider.classifier(companion_id).unwrap();
    assert!(companion.is_companion());
    assert_eq!(companion.kind, ClassKind::Object);
    assert_eq!(companion.functions.len(), 1);
    assert_eq!(interner.lookup(companion.functions[0].name()), "Create");
    assert!(companion.functions[0].has_annotation(standard::CLR_STATIC));
    assert!(companion.functions[0].status.flags.contains(DeclFlags::STATIC));
    assert_eq!(companion.constructors.len(), 1);
    assert!(companion.constructors[0].is_static());
}

#[test]
fn member_functions_use_class_callable_namespace() {
    let interner = StringInterner::shared();
    let provider = provider_for(
        &interner,
        vec![node_type("Demo", "Widget", &[], vec![method("Draw", None, false)])],
    );

    let demo = FqName::parse(&interner, "Demo");
    let draw = interner.intern("Draw");
    assert!(provider.collect_callables(demo, draw).is_empty());
    assert!(provider.top_level_callable_names(demo).is_empty());

    let id = class_id(&interner, "Demo", "Widget");
    let members = provider.callables_in_class(id, draw);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id.class_id(), Some(id));
}

#[test]
fn file_class_keeps_functions_and_gets_companion() {
    let interner = StringInterner::shared();
    let provider = provider_for(
        &interner,
        vec![node_type(
            "Demo",
            "MainKt",
            &[FILE_CLASS_ATTRIBUTE],
            vec![method("main", Some("System.Void"), true)],
        )],
    );

    let id = class_id(&interner, "Demo", "MainKt");
    let symbol = provider.classifier(id).unwrap();
    assert_eq!(symbol.kind, ClassKind::Class);
    assert_eq!(symbol.functions.len(), 1);
    assert_eq!(symbol.functions[0].id.class_id(), Some(id));

    let companion = provider.classifier(symbol.companion.unwrap()).unwrap();
    assert_eq!(companion.functions.len(), 1);
    assert!(companion.functions[0].has_annotation(standard::CLR_STATIC));
}

#[test]
fn companion_is_not_a_top_level_name() {
    let interner = StringInterner::shared();
    let provider = provider_for(&interner, vec![node_type("Demo", "Widget", &[], Vec::new())]);

    let demo = FqName::parse(&interner, "Demo");
    let names: Vec<_> = provider
        .top_level_class_names(demo)
        .into_iter()
        .map(|name| interner.lookup(name))
        .collect();
    assert_eq!(names, vec!["Widget"]);
    assert_eq!(provider.registry().classes_in_package(demo).len(), 2);
}

#[test]
fn signatures_resolve_through_the_type_table() {
    let interner = StringInterner::shared();
    let mut draw = method("Draw", Some("System.Boolean"), false);
    draw.parameters = vec![
        NodeParameter {
            name: Some("count".to_owned()),
            ty: Some("System.Int32".to_owned()),
        },
        NodeParameter {
            name: None,
            ty: Some("System.String".to_owned()),
        },
        NodeParameter {
            name: Some("extra".to_owned()),
            ty: None,
        },
    ];
    let provider = provider_for(&interner, vec![node_type("Demo", "Widget", &[], vec![draw])]);

    let id = class_id(&interner, "Demo", "Widget");
    let function = provider.callables_in_class(id, interner.intern("Draw"))[0];
    assert_eq!(function.return_type, TypeRef::non_null(standard::BOOLEAN));
    let params: Vec<_> = function
        .parameters
        .iter()
        .map(|param| (interner.lookup(param.name), param.ty.clone()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("count", TypeRef::non_null(standard::INT)),
            ("p1", TypeRef::nullable(standard::STRING)),
            ("extra", TypeRef::nullable_any()),
        ]
    );
}

#[test]
fn signatures_see_types_declared_later() {
    let interner = StringInterner::shared();
    let provider = provider_for(
        &interner,
        vec![
            NodeType {
                namespace: None,
                name: "First".to_owned(),
                methods: vec![method("Next", Some("Second"), false)],
                ..NodeType::default()
            },
            NodeType {
                namespace: None,
                name: "Second".to_owned(),
                ..NodeType::default()
            },
        ],
    );

    let first = ClassId::top_level(FqName::ROOT, interner.intern("First"));
    let next = provider.callables_in_class(first, interner.intern("Next"))[0];
    assert_eq!(
        next.return_type,
        TypeRef::nullable(ClassId::top_level(FqName::ROOT, interner.intern("Second")))
    );
}

#[test]
fn implicit_packages_always_exist() {
    let interner = StringInterner::shared();
    let provider = provider_for(&interner, Vec::new());
    assert!(provider.has_package(FqName::SYSTEM));
    assert!(provider.has_package(FqName::SYSTEM_CONSOLE));
    assert!(!provider.has_package(FqName::parse(&interner, "Demo")));

    let bare = AssemblySymbolProvider::new(
        interner.clone(),
        &FxHashMap::default(),
        &ProviderConfig {
            implicit_packages: Vec::new(),
        },
    );
    assert!(!bare.has_package(FqName::SYSTEM));
}

#[test]
fn declared_packages_exist() {
    let interner = StringInterner::shared();
    let provider = provider_for(&interner, vec![node_type("Demo.Util", "Widget", &[], Vec::new())]);
    assert!(provider.has_package(FqName::parse(&interner, "Demo.Util")));
    assert!(provider.has_class(class_id(&interner, "Demo.Util", "Widget")));
}

#[test]
fn shape_selection() {
    let object = node_type("", "A", &[OBJECT_ATTRIBUTE, FILE_CLASS_ATTRIBUTE], Vec::new());
    let file_class = node_type("", "B", &["Other", FILE_CLASS_ATTRIBUTE], Vec::new());
    let class = node_type("", "C", &["Other"], Vec::new());
    assert_eq!(TypeShape::of(&object), TypeShape::Object);
    assert_eq!(TypeShape::of(&file_class), TypeShape::FileClass);
    assert_eq!(TypeShape::of(&class), TypeShape::Class);
}

#[test]
fn duplicate_object_across_assemblies_keeps_every_free_function() {
    let interner = StringInterner::shared();
    let mut assemblies = FxHashMap::default();
    for (assembly, function) in [("First", "Foo"), ("Second", "Bar")] {
        assemblies.insert(
            assembly.to_owned(),
            NodeAssembly {
                name: Some(assembly.to_owned()),
                types: vec![node_type(
                    "Demo",
                    "Tools",
                    &[OBJECT_ATTRIBUTE],
                    vec![method(function, None, true)],
                )],
            },
        );
    }
    let provider =
        AssemblySymbolProvider::new(interner.clone(), &assemblies, &ProviderConfig::default());

    let package = FqName::parse(&interner, "Demo");
    let advertised = provider.top_level_callable_names(package);
    for function in ["Foo", "Bar"] {
        let name = interner.intern(function);
        assert!(advertised.contains(&name));
        assert_eq!(provider.collect_callables(package, name).len(), 1);
    }
    // the first assembly by name owns the class symbol
    let symbol = provider.classifier(class_id(&interner, "Demo", "Tools")).unwrap();
    assert_eq!(symbol.functions.len(), 1);
    assert_eq!(interner.lookup(symbol.functions[0].name()), "Foo");
}

#[test]
fn void_parameter_is_non_null_unit() {
    let interner = StringInterner::shared();
    let mut accept = method("Accept", Some("System.Void"), false);
    accept.parameters = vec![NodeParameter {
        name: Some("nothing".to_owned()),
        ty: Some("System.Void".to_owned()),
    }];
    let provider = provider_for(&interner, vec![node_type("Demo", "Sink", &[], vec![accept])]);

    let id = class_id(&interner, "Demo", "Sink");
    let function = provider.callables_in_class(id, interner.intern("Accept"))[0];
    assert_eq!(function.parameters[0].ty, TypeRef::unit());
    assert_eq!(function.return_type, TypeRef::unit());
}
