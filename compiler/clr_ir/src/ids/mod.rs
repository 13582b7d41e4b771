//! Qualified identifiers.
//!
//! - `FqName`: a dotted package name (`System.Collections.Generic`)
//! - `ClassId`: package + class path relative to it (`Outer.Inner`)
//! - `CallableId`: package + optional owning class + callable name
//!
//! All three are `Copy`; their text lives in the `StringInterner`.

use crate::{Name, StringInterner};

/// Fully qualified package name.
///
/// The root (empty) package is `FqName::ROOT`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct FqName(Name);

impl FqName {
    pub const ROOT: FqName = FqName(Name::EMPTY);
    pub const KOTLIN: FqName = FqName(Name::KOTLIN);
    pub const KOTLIN_COLLECTIONS: FqName = FqName(Name::KOTLIN_COLLECTIONS);
    pub const KOTLIN_CLR: FqName = FqName(Name::KOTLIN_CLR);
    pub const KOTLIN_INTERNAL: FqName = FqName(Name::KOTLIN_INTERNAL);
    pub const SYSTEM: FqName = FqName(Name::SYSTEM);
    pub const SYSTEM_CONSOLE: FqName = FqName(Name::SYSTEM_CONSOLE);

    /// Wrap an interned dotted name.
    #[inline]
    pub const fn new(name: Name) -> Self {
        FqName(name)
    }

    /// Intern a dotted package name.
    pub fn parse(interner: &StringInterner, text: &str) -> Self {
        FqName(interner.intern(text))
    }

    /// Join segments with `.` and intern the result.
    pub fn from_segments(interner: &StringInterner, segments: &[&str]) -> Self {
        FqName(interner.intern(&segments.join(".")))
    }

    #[inline]
    pub const fn name(self) -> Name {
        self.0
    }

    #[inline]
    pub const fn is_root(self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(self, interner: &StringInterner) -> &'static str {
        interner.lookup(self.0)
    }
}

/// Identity of a classifier.
///
/// `relative` is the dotted path inside the package (`Outer.Inner`), and
/// `short` its last component. For top-level classes both are the same name.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ClassId {
    package: FqName,
    relative: Name,
    short: Name,
}

impl ClassId {
    /// Id of a class declared directly in `package`.
    #[inline]
    pub const fn top_level(package: FqName, name: Name) -> Self {
        ClassId {
            package,
            relative: name,
            short: name,
        }
    }

    /// Id of a class nested in `self`.
    pub fn nested(self, interner: &StringInterner, name: Name) -> Self {
        let relative = format!("{}.{}", interner.lookup(self.relative), interner.lookup(name));
        ClassId {
            package: self.package,
            relative: interner.intern(&relative),
            short: name,
        }
    }

    #[inline]
    pub const fn package(self) -> FqName {
        self.package
    }

    #[inline]
    pub const fn relative_name(self) -> Name {
        self.relative
    }

    #[inline]
    pub const fn short_name(self) -> Name {
        self.short
    }

    #[inline]
    pub fn is_nested(self) -> bool {
        self.relative != self.short
    }

    /// Id of the directly enclosing class, `None` for top-level classes.
    pub fn outer(self, interner: &StringInterner) -> Option<Self> {
        if !self.is_nested() {
            return None;
        }
        let (outer, _) = interner.lookup(self.relative).rsplit_once('.')?;
        let short = outer.rsplit_once('.').map_or(outer, |(_, last)| last);
        Some(ClassId {
            package: self.package,
            relative: interner.intern(outer),
            short: interner.intern(short),
        })
    }

    /// Render as `package/Relative.Path` (or just the path in the root package).
    pub fn as_string(self, interner: &StringInterner) -> String {
        let relative = interner.lookup(self.relative);
        if self.package.is_root() {
            relative.to_owned()
        } else {
            format!("{}/{}", self.package.as_str(interner), relative)
        }
    }
}

/// Identity of a function or constructor.
///
/// Member callables record their owning class; top-level (free) callables
/// only have a package.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct CallableId {
    package: FqName,
    class_id: Option<ClassId>,
    name: Name,
}

impl CallableId {
    #[inline]
    pub const fn top_level(package: FqName, name: Name) -> Self {
        CallableId {
            package,
            class_id: None,
            name,
        }
    }

    #[inline]
    pub const fn member(class_id: ClassId, name: Name) -> Self {
        CallableId {
            package: class_id.package(),
            class_id: Some(class_id),
            name,
        }
    }

    #[inline]
    pub const fn constructor(class_id: ClassId) -> Self {
        Self::member(class_id, Name::INIT)
    }

    #[inline]
    pub const fn package(self) -> FqName {
        self.package
    }

    #[inline]
    pub const fn class_id(self) -> Option<ClassId> {
        self.class_id
    }

    #[inline]
    pub const fn name(self) -> Name {
        self.name
    }

    #[inline]
    pub const fn is_top_level(self) -> bool {
        self.class_id.is_none()
    }

    /// Render as `package/Class.name` or `package/name`.
    pub fn as_string(self, interner: &StringInterner) -> String {
        let name = interner.lookup(self.name);
        match self.class_id {
            Some(class_id) => format!("{}.{name}", class_id.as_string(interner)),
            None if self.package.is_root() => name.to_owned(),
            None => format!("{}/{name}", self.package.as_str(interner)),
        }
    }
}

/// Well-known class ids.
pub mod standard {
    use super::{ClassId, FqName};
    use crate::Name;

    const fn kotlin(name: Name) -> ClassId {
        ClassId::top_level(FqName::KOTLIN, name)
    }

    const fn collections(name: Name) -> ClassId {
        ClassId::top_level(FqName::KOTLIN_COLLECTIONS, name)
    }

    pub const ANY: ClassId = kotlin(Name::ANY);
    pub const UNIT: ClassId = kotlin(Name::UNIT);
    pub const NOTHING: ClassId = kotlin(Name::NOTHING);
    pub const STRING: ClassId = kotlin(Name::STRING);
    pub const BOOLEAN: ClassId = kotlin(Name::BOOLEAN);
    pub const CHAR: ClassId = kotlin(Name::CHAR);
    pub const BYTE: ClassId = kotlin(Name::BYTE);
    pub const SHORT: ClassId = kotlin(Name::SHORT);
    pub const INT: ClassId = kotlin(Name::INT);
    pub const LONG: ClassId = kotlin(Name::LONG);
    pub const FLOAT: ClassId = kotlin(Name::FLOAT);
    pub const DOUBLE: ClassId = kotlin(Name::DOUBLE);
    pub const UBYTE: ClassId = kotlin(Name::UBYTE);
    pub const USHORT: ClassId = kotlin(Name::USHORT);
    pub const UINT: ClassId = kotlin(Name::UINT);
    pub const ULONG: ClassId = kotlin(Name::ULONG);
    pub const NUMBER: ClassId = kotlin(Name::NUMBER);
    pub const CHAR_SEQUENCE: ClassId = kotlin(Name::CHAR_SEQUENCE);
    pub const COMPARABLE: ClassId = kotlin(Name::COMPARABLE);
    pub const ENUM: ClassId = kotlin(Name::ENUM);
    pub const THROWABLE: ClassId = kotlin(Name::THROWABLE);
    pub const ANNOTATION: ClassId = kotlin(Name::ANNOTATION);

    pub const ARRAY: ClassId = kotlin(Name::ARRAY);
    pub const BYTE_ARRAY: ClassId = kotlin(Name::BYTE_ARRAY);
    pub const CHAR_ARRAY: ClassId = kotlin(Name::CHAR_ARRAY);
    pub const SHORT_ARRAY: ClassId = kotlin(Name::SHORT_ARRAY);
    pub const INT_ARRAY: ClassId = kotlin(Name::INT_ARRAY);
    pub const LONG_ARRAY: ClassId = kotlin(Name::LONG_ARRAY);
    pub const FLOAT_ARRAY: ClassId = kotlin(Name::FLOAT_ARRAY);
    pub const DOUBLE_ARRAY: ClassId = kotlin(Name::DOUBLE_ARRAY);
    pub const BOOLEAN_ARRAY: ClassId = kotlin(Name::BOOLEAN_ARRAY);

    pub const ITERABLE: ClassId = collections(Name::ITERABLE);
    pub const MUTABLE_ITERABLE: ClassId = collections(Name::MUTABLE_ITERABLE);
    pub const COLLECTION: ClassId = collections(Name::COLLECTION);
    pub const MUTABLE_COLLECTION: ClassId = collections(Name::MUTABLE_COLLECTION);
    pub const LIST: ClassId = collections(Name::LIST);
    pub const MUTABLE_LIST: ClassId = collections(Name::MUTABLE_LIST);
    pub const SET: ClassId = collections(Name::SET);
    pub const MUTABLE_SET: ClassId = collections(Name::MUTABLE_SET);
    pub const MAP: ClassId = collections(Name::MAP);
    pub const MUTABLE_MAP: ClassId = collections(Name::MUTABLE_MAP);
    pub const ITERATOR: ClassId = collections(Name::ITERATOR);
    pub const MUTABLE_ITERATOR: ClassId = collections(Name::MUTABLE_ITERATOR);
    pub const LIST_ITERATOR: ClassId = collections(Name::LIST_ITERATOR);
    pub const MUTABLE_LIST_ITERATOR: ClassId = collections(Name::MUTABLE_LIST_ITERATOR);

    /// Marks companion members that dispatch as platform statics.
    pub const CLR_STATIC: ClassId = ClassId::top_level(FqName::KOTLIN_CLR, Name::CLR_STATIC);

    /// Marks source classes whose symbol is supplied by the built-in table.
    pub const ACTUALIZE_BY_CLR_BUILTIN_PROVIDER: ClassId =
        ClassId::top_level(FqName::KOTLIN_INTERNAL, Name::ACTUALIZE_BY_CLR_BUILTIN_PROVIDER);
}
