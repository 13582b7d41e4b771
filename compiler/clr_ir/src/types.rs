//! Resolved type references.

use crate::{standard, ClassId, StringInterner};

/// A reference to a classifier type with nullability and type arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeRef {
    pub class_id: ClassId,
    pub nullable: bool,
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(class_id: ClassId, nullable: bool) -> Self {
        TypeRef {
            class_id,
            nullable,
            arguments: Vec::new(),
        }
    }

    pub fn non_null(class_id: ClassId) -> Self {
        Self::new(class_id, false)
    }

    pub fn nullable(class_id: ClassId) -> Self {
        Self::new(class_id, true)
    }

    /// `Any?`, the universal top type every unresolved name degrades to.
    pub fn nullable_any() -> Self {
        Self::nullable(standard::ANY)
    }

    pub fn unit() -> Self {
        Self::non_null(standard::UNIT)
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn is_unit(&self) -> bool {
        self.class_id == standard::UNIT && !self.nullable
    }

    /// Render as `package/Class<Args>?`.
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut out = self.class_id.as_string(interner);
        if !self.arguments.is_empty() {
            out.push('<');
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&arg.display(interner));
            }
            out.push('>');
        }
        if self.nullable {
            out.push('?');
        }
        out
    }
}
