//! Lowering passes over an `IrModule`.
//!
//! Each pass rewrites the module in place and may ask the shared
//! `DeclarationCache` for derived declarations. Passes run in the order
//! given; none of them re-runs.

mod main_method;

pub use main_method::MainMethodLowering;

use tracing::debug_span;

use crate::cache::DeclarationCache;
use crate::ir::IrModule;

/// A single module-wide rewrite.
pub trait LoweringPass {
    fn name(&self) -> &'static str;

    fn lower(&self, module: &mut IrModule, cache: &mut DeclarationCache);
}

/// Run `passes` in order over `module`.
pub fn run_lowerings(
    module: &mut IrModule,
    cache: &mut DeclarationCache,
    passes: &[&dyn LoweringPass],
) {
    for pass in passes {
        let _span = debug_span!("lowering", pass = pass.name()).entered();
        pass.lower(module, cache);
    }
}
