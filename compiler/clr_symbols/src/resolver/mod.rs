//! Type-name resolution for assembly metadata.
//!
//! Maps a platform type name (`System.Int32`, `Demo.Util+Inner`, `Foo`) to
//! a `TypeRef`. Resolution is best-effort and never fails: anything that
//! cannot be parsed degrades to `Any?`.

use clr_ir::{standard, ClassId, FqName, StringInterner, TypeRef};
use smallvec::SmallVec;

use crate::index::NameIndex;

/// Platform name -> (standard id, is value type).
///
/// `Void` is not tagged: it is only non-null as a return type.
fn well_known(type_name: &str) -> Option<(ClassId, bool)> {
    let entry = match type_name {
        "System.Void" => (standard::UNIT, false),
        "System.String" => (standard::STRING, false),
        "System.Boolean" => (standard::BOOLEAN, true),
        "System.Char" => (standard::CHAR, true),
        "System.Byte" | "System.SByte" => (standard::BYTE, true),
        "System.Int16" => (standard::SHORT, true),
        "System.UInt16" => (standard::USHORT, true),
        "System.Int32" => (standard::INT, true),
        "System.UInt32" => (standard::UINT, true),
        "System.Int64" => (standard::LONG, true),
        "System.UInt64" => (standard::ULONG, true),
        "System.Single" => (standard::FLOAT, true),
        "System.Double" => (standard::DOUBLE, true),
        "System.Object" => (standard::ANY, false),
        _ => return None,
    };
    Some(entry)
}

/// Resolves type names against the classes published so far.
#[derive(Copy, Clone)]
pub struct TypeResolver<'a> {
    interner: &'a StringInterner,
    index: &'a NameIndex,
}

impl<'a> TypeResolver<'a> {
    pub fn new(interner: &'a StringInterner, index: &'a NameIndex) -> Self {
        TypeResolver { interner, index }
    }

    /// Resolve `type_name`.
    ///
    /// The result is non-null for value types and for `Unit` in return
    /// position; every other reference type is assumed nullable.
    pub fn resolve(&self, type_name: &str, is_return_position: bool) -> TypeRef {
        let Some((class_id, is_value_type)) = well_known(type_name)
            .or_else(|| self.resolve_class_id(type_name).map(|id| (id, false)))
        else {
            return TypeRef::nullable_any();
        };

        let non_null = (is_return_position && class_id == standard::UNIT) || is_value_type;
        TypeRef::new(class_id, !non_null)
    }

    fn resolve_class_id(&self, type_name: &str) -> Option<ClassId> {
        let segments: SmallVec<[&str; 8]> = type_name.split(['.', '+']).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }
        let (short, namespace) = segments.split_last()?;
        let short = self.interner.intern(short);

        let package = if namespace.is_empty() && self.index.has_top_level_class(FqName::ROOT, short) {
            self.index
                .namespace_for_short_name(short)
                .unwrap_or(FqName::ROOT)
        } else {
            FqName::from_segments(self.interner, namespace)
        };

        Some(ClassId::top_level(package, short))
    }
}

#[cfg(test)]
mod tests;
