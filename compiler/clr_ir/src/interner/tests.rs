use super::*;

#[test]
fn intern_returns_same_name_for_same_text() {
    let interner = StringInterner::new();
    let a = interner.intern("System.Collections");
    let b = interner.intern("System.Collections");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "System.Collections");
}

#[test]
fn distinct_texts_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("Foo");
    let b = interner.intern("Bar");
    assert_ne!(a, b);
}

#[test]
fn predefined_names_resolve_without_interning() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.intern("kotlin"), Name::KOTLIN);
    assert_eq!(interner.intern("Companion"), Name::COMPANION);
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::HASH_CODE), "hashCode");
    assert_eq!(interner.len(), before);
}

#[test]
fn get_does_not_insert() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("NeverSeen"), None);
    assert_eq!(interner.len(), before);
    let name = interner.intern("NeverSeen");
    assert_eq!(interner.get("NeverSeen"), Some(name));
}

#[test]
fn shared_interner_is_usable_across_threads() {
    let interner = StringInterner::shared();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let interner = Arc::clone(&interner);
            std::thread::spawn(move || interner.intern(&format!("T{}", i % 2)))
        })
        .collect();
    let names: Vec<Name> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names[0], names[2]);
    assert_eq!(names[1], names[3]);
}

#[test]
fn intern_error_display() {
    let err = InternError::Overflow { count: 7 };
    assert!(err.to_string().contains("7 strings"));
}
