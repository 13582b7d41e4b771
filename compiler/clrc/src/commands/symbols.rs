use std::io::Write;
use std::path::PathBuf;

use clr_ir::StringInterner;
use clr_symbols::{render_symbols, AssemblySymbolProvider, ProviderConfig};

use super::load_assemblies;
use crate::error::DriverError;

/// `clrc symbols <assembly.json>...`: print the symbols built from the
/// given assembly descriptions.
pub fn symbols(args: &[String], out: &mut impl Write) -> Result<(), DriverError> {
    if args.is_empty() {
        return Err(DriverError::usage("usage: clrc symbols <assembly.json>..."));
    }
    if let Some(flag) = args.iter().find(|arg| arg.starts_with('-')) {
        return Err(DriverError::usage(format!("unknown option `{flag}`")));
    }

    let paths: Vec<PathBuf> = args.iter().map(PathBuf::from).collect();
    let assemblies = load_assemblies(&paths)?;
    let interner = StringInterner::shared();
    let provider =
        AssemblySymbolProvider::new(interner.clone(), &assemblies, &ProviderConfig::default());

    out.write_all(render_symbols(provider.registry(), &interner).as_bytes())?;
    Ok(())
}
