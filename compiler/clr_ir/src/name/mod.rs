//! Interned string identifier.
//!
//! Provides compact 32-bit interned identifiers. The first indices are
//! reserved for a table of well-known names that every `StringInterner`
//! pre-interns in order, so those names are usable as constants.

use std::fmt;

/// Interned string identifier.
///
/// The value is an index into the owning `StringInterner`. Two names are
/// equal exactly when their text is equal within the same interner.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the pre-interned empty string.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

/// Declares the well-known names.
///
/// Generates one `Name` constant per entry and the `PREDEFINED` text table
/// the interner seeds itself with. Constant values are the entry positions,
/// so the table order is the index order.
macro_rules! predefined_names {
    ($($konst:ident => $text:literal,)*) => {
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[repr(u32)]
        enum Predefined {
            $($konst,)*
        }

        impl Name {
            $(
                #[doc = concat!("Pre-interned `", $text, "`.")]
                pub const $konst: Name = Name(Predefined::$konst as u32);
            )*
        }

        /// Texts pre-interned by every interner, in index order.
        pub(crate) const PREDEFINED: &[&str] = &[$($text,)*];
    };
}

predefined_names! {
    EMPTY => "",

    // Packages
    KOTLIN => "kotlin",
    KOTLIN_COLLECTIONS => "kotlin.collections",
    KOTLIN_CLR => "kotlin.clr",
    KOTLIN_INTERNAL => "kotlin.internal",
    SYSTEM => "System",
    SYSTEM_CONSOLE => "System.Console",

    // Foundational classifiers
    ANY => "Any",
    UNIT => "Unit",
    NOTHING => "Nothing",
    STRING => "String",
    BOOLEAN => "Boolean",
    CHAR => "Char",
    BYTE => "Byte",
    SHORT => "Short",
    INT => "Int",
    LONG => "Long",
    FLOAT => "Float",
    DOUBLE => "Double",
    UBYTE => "UByte",
    USHORT => "UShort",
    UINT => "UInt",
    ULONG => "ULong",
    NUMBER => "Number",
    CHAR_SEQUENCE => "CharSequence",
    COMPARABLE => "Comparable",
    ENUM => "Enum",
    THROWABLE => "Throwable",
    ANNOTATION => "Annotation",
    ARRAY => "Array",
    BYTE_ARRAY => "ByteArray",
    CHAR_ARRAY => "CharArray",
    SHORT_ARRAY => "ShortArray",
    INT_ARRAY => "IntArray",
    LONG_ARRAY => "LongArray",
    FLOAT_ARRAY => "FloatArray",
    DOUBLE_ARRAY => "DoubleArray",
    BOOLEAN_ARRAY => "BooleanArray",

    // Collections
    ITERABLE => "Iterable",
    MUTABLE_ITERABLE => "MutableIterable",
    COLLECTION => "Collection",
    MUTABLE_COLLECTION => "MutableCollection",
    LIST => "List",
    MUTABLE_LIST => "MutableList",
    SET => "Set",
    MUTABLE_SET => "MutableSet",
    MAP => "Map",
    MUTABLE_MAP => "MutableMap",
    ITERATOR => "Iterator",
    MUTABLE_ITERATOR => "MutableIterator",
    LIST_ITERATOR => "ListIterator",
    MUTABLE_LIST_ITERATOR => "MutableListIterator",

    // Platform annotations
    CLR_STATIC => "ClrStatic",
    ACTUALIZE_BY_CLR_BUILTIN_PROVIDER => "ActualizeByClrBuiltinProvider",

    // Members
    INIT => "<init>",
    EQUALS => "equals",
    HASH_CODE => "hashCode",
    TO_STRING => "toString",
    PLUS => "plus",
    OTHER => "other",
    MAIN => "main",
    MAIN_ENTRY => "Main",
    ARGS => "args",

    // Synthetic declarations
    COMPANION => "Companion",
    DEFAULT_IMPLS => "DefaultImpls",
    INSTANCE => "INSTANCE",
    INTERFACE_COMPANION_INSTANCE => "$$INSTANCE",
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
