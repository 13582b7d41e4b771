//! CLR IR - shared vocabulary of the CLR compiler core.
//!
//! This crate contains the data structures every other crate speaks:
//! - Interned names (`Name`) and the interner that owns their text
//! - Qualified ids for packages, classes and callables
//! - Type references with nullability
//! - Declaration status (kind, modality, visibility, flags)
//! - The assembly metadata handed over by the assembly resolver
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, ids are `Copy`
//! - **Well-known names are constants**: the interner pre-interns a fixed
//!   table so `Name::KOTLIN` and friends need no lookup
//! - **Metadata is read-only**: `Node*` types are plain serde data

mod ids;
mod interner;
pub mod metadata;
mod name;
mod status;
mod types;

pub use ids::{standard, CallableId, ClassId, FqName};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use metadata::{NodeAssembly, NodeConstructor, NodeMethod, NodeParameter, NodeType};
pub use name::Name;
pub use status::{ClassKind, DeclFlags, DeclStatus, Modality, Visibility};
pub use types::TypeRef;
