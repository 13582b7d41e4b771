//! Declaration status: kind, modality, visibility and boolean modifiers.

use bitflags::bitflags;

/// The kind of a classifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    AnnotationClass,
    /// Singleton declaration; companions are objects too.
    Object,
}

impl ClassKind {
    pub fn is_interface(self) -> bool {
        matches!(self, ClassKind::Interface | ClassKind::AnnotationClass)
    }

    pub fn is_object(self) -> bool {
        matches!(self, ClassKind::Object)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::EnumClass => "enum class",
            ClassKind::AnnotationClass => "annotation class",
            ClassKind::Object => "object",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Modality {
    #[default]
    Final,
    Sealed,
    Open,
    Abstract,
}

impl Modality {
    pub fn keyword(self) -> &'static str {
        match self {
            Modality::Final => "final",
            Modality::Sealed => "sealed",
            Modality::Open => "open",
            Modality::Abstract => "abstract",
        }
    }
}

/// Visibility of a declaration.
///
/// `ProtectedStatic` and `PackagePrivate` only appear on declarations the
/// backend synthesizes; source and metadata declarations use the first four.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
    /// Protected member reachable through the declaring class without an
    /// instance.
    ProtectedStatic,
    /// Visible within the declaring package only.
    PackagePrivate,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
            Visibility::ProtectedStatic => "protected/*static*/",
            Visibility::PackagePrivate => "package-private",
        }
    }
}

bitflags! {
    /// Boolean declaration modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DeclFlags: u16 {
        const STATIC = 1 << 0;
        const COMPANION = 1 << 1;
        const EXTERNAL = 1 << 2;
        const OPERATOR = 1 << 3;
        const INFIX = 1 << 4;
        const INLINE = 1 << 5;
        const SUSPEND = 1 << 6;
        const TAILREC = 1 << 7;
        const EXPECT = 1 << 8;
        const FAKE_OVERRIDE = 1 << 9;
        const FINAL = 1 << 10;
        const PRIMARY = 1 << 11;
        /// Class holding a source file's top-level declarations.
        const FILE_CLASS = 1 << 12;
    }
}

/// Resolved status of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclStatus {
    pub visibility: Visibility,
    pub modality: Modality,
    pub flags: DeclFlags,
}

impl DeclStatus {
    pub const fn new(visibility: Visibility, modality: Modality) -> Self {
        DeclStatus {
            visibility,
            modality,
            flags: DeclFlags::empty(),
        }
    }

    /// Public and final: the status of every metadata declaration.
    pub const PUBLIC_FINAL: DeclStatus = DeclStatus::new(Visibility::Public, Modality::Final);

    #[must_use]
    pub fn with_flags(mut self, flags: DeclFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(DeclFlags::STATIC)
    }

    pub fn is_companion(&self) -> bool {
        self.flags.contains(DeclFlags::COMPANION)
    }
}
