//! CLR symbols - metadata-driven symbol providers.
//!
//! Turns assembly descriptions into compiler-internal symbols the front end
//! can look up:
//! - `TypeResolver` maps platform type names to `TypeRef`s
//! - `NameIndex` answers "does this package exist" and "what names does it
//!   contain"
//! - `AssemblySymbolProvider` builds class, constructor and function symbols,
//!   with synthetic companions holding static members
//! - `BuiltinSymbolProvider` serves the fixed table of foundational types
//! - `ProviderChain` consults providers in priority order
//!
//! All providers are built eagerly and are read-only afterwards.

mod assembly;
mod builtins;
mod dump;
mod index;
mod provider;
mod registry;
mod resolver;
mod symbol;

pub use assembly::{
    class_id_of, declaration_of, AssemblySymbolProvider, ProviderConfig, TypeBuilder, TypeShape,
};
pub use builtins::BuiltinSymbolProvider;
pub use dump::render_symbols;
pub use index::{NameIndex, Registration};
pub use provider::{ActualizingProvider, ProviderChain, SymbolProvider};
pub use registry::{BuiltType, SymbolRegistry};
pub use resolver::TypeResolver;
pub use symbol::{
    ClassSymbol, ConstructorSymbol, FunctionSymbol, ParameterSymbol, SymbolOrigin,
};
