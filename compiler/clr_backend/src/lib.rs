//! CLR backend - declaration lowering support.
//!
//! Lowerings turn front-end declarations into shapes the platform can load:
//! singleton instances become static fields, companion members gain static
//! forwarders, interface members inherited by classes get concrete bridges,
//! and file classes get a platform entry point.
//!
//! - `ir` holds the declaration arena the lowerings rewrite
//! - `DeclarationCache` builds each derived declaration exactly once
//! - `lower` runs the passes

pub mod cache;
pub mod ir;
pub mod lower;
mod settings;

pub use cache::{DeclarationCache, StaticCompanionPair};
pub use ir::IrModule;
pub use lower::{run_lowerings, LoweringPass, MainMethodLowering};
pub use settings::LanguageSettings;
