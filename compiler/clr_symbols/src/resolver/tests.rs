use super::*;
use crate::index::Registration;
use clr_ir::Name;
use pretty_assertions::assert_eq;

fn index_with(interner: &StringInterner, classes: &[(&str, &str)]) -> NameIndex {
    let mut index = NameIndex::new();
    for (package, class) in classes {
        let package = FqName::parse(interner, package);
        let mut registration = Registration::new(package);
        registration
            .classes
            .push(ClassId::top_level(package, interner.intern(class)));
        index.record(&registration);
    }
    index
}

#[test]
fn value_types_are_non_null() {
    let interner = StringInterner::new();
    let index = NameIndex::new();
    let resolver = TypeResolver::new(&interner, &index);

    assert_eq!(resolver.resolve("System.Int32", false), TypeRef::non_null(standard::INT));
    assert_eq!(resolver.resolve("System.Boolean", false), TypeRef::non_null(standard::BOOLEAN));
    assert_eq!(resolver.resolve("System.Double", true), TypeRef::non_null(standard::DOUBLE));
    assert_eq!(resolver.resolve("System.UInt64", false), TypeRef::non_null(standard::ULONG));
}

#[test]
fn both_byte_flavours_map_to_byte() {
    let interner = StringInterner::new();
    let index = NameIndex::new();
    let resolver = TypeResolver::new(&interner, &index);

    assert_eq!(resolver.resolve("System.SByte", false), TypeRef::non_null(standard::BYTE));
    assert_eq!(resolver.resolve("System.Byte", false), TypeRef::non_null(standard::BYTE));
    assert_eq!(resolver.resolve("System.UInt16", false).class_id, standard::USHORT);
}

#[test]
fn reference_types_are_nullable() {
    let interner = StringInterner::new();
    let index = NameIndex::new();
    let resolver = TypeResolver::new(&interner, &index);

    assert_eq!(resolver.resolve("System.String", false), TypeRef::nullable(standard::STRING));
    assert_eq!(resolver.resolve("System.Object", true), TypeRef::nullable(standard::ANY));
}

#[test]
fn void_is_non_null_only_in_return_position() {
    let interner = StringInterner::new();
    let index = NameIndex::new();
    let resolver = TypeResolver::new(&interner, &index);

    assert_eq!(resolver.resolve("System.Void", true), TypeRef::unit());
    assert_eq!(resolver.resolve("System.Void", false), TypeRef::nullable(standard::UNIT));
}

#[test]
fn dotted_and_nested_names_split_into_namespace() {
    let interner = StringInterner::new();
    let index = NameIndex::new();
    let resolver = TypeResolver::new(&interner, &index);

    let resolved = resolver.resolve("System.Collections.Generic.List", false);
    assert!(resolved.nullable);
    assert_eq!(
        resolved.class_id.as_string(&interner),
        "System.Collections.Generic/List"
    );

    let nested = resolver.resolve("Demo.Outer+Inner", false);
    assert_eq!(nested.class_id.as_string(&interner), "Demo.Outer/Inner");
}

#[test]
fn bare_name_registered_in_root_resolves_to_its_namespace() {
    let interner = StringInterner::new();
    let index = index_with(&interner, &[("", "Foo")]);
    let resolver = TypeResolver::new(&interner, &index);

    let resolved = resolver.resolve("Foo", false);
    assert_eq!(resolved.class_id, ClassId::top_level(FqName::ROOT, interner.intern("Foo")));
    assert!(resolved.nullable);
}

#[test]
fn bare_name_fallback_uses_first_registered_namespace() {
    let interner = StringInterner::new();
    let index = index_with(&interner, &[("Vendor", "Foo"), ("", "Foo")]);
    let resolver = TypeResolver::new(&interner, &index);

    let resolved = resolver.resolve("Foo", false);
    assert_eq!(resolved.class_id.package(), FqName::parse(&interner, "Vendor"));
}

#[test]
fn bare_name_without_root_registration_stays_in_root() {
    let interner = StringInterner::new();
    let index = index_with(&interner, &[("Vendor", "Foo")]);
    let resolver = TypeResolver::new(&interner, &index);

    let resolved = resolver.resolve("Foo", false);
    assert_eq!(resolved.class_id.package(), FqName::ROOT);
}

#[test]
fn malformed_names_degrade_to_nullable_any() {
    let interner = StringInterner::new();
    let index = NameIndex::new();
    let resolver = TypeResolver::new(&interner, &index);

    assert_eq!(resolver.resolve("", false), TypeRef::nullable_any());
    assert_eq!(resolver.resolve("System..Int32", false), TypeRef::nullable_any());
    assert_eq!(resolver.resolve("Demo.", true), TypeRef::nullable_any());
    assert_eq!(resolver.resolve("", true).class_id.short_name(), Name::ANY);
}
