//! Deterministic text listing of a registry, for debugging and snapshots.
//!
//! ```text
//! class Demo/Widget [public final] companion=Demo/Widget.Companion
//!     constructor(count: kotlin/Int)
//!     fun Draw(): kotlin/Unit
//! ```

use std::fmt::Write as _;

use clr_ir::StringInterner;

use crate::registry::SymbolRegistry;
use crate::symbol::{ClassSymbol, ParameterSymbol};

/// Render every class in `registry`, sorted by qualified name.
pub fn render_symbols(registry: &SymbolRegistry, interner: &StringInterner) -> String {
    let mut classes: Vec<(String, &ClassSymbol)> = registry
        .classes()
        .map(|symbol| (symbol.id.as_string(interner), symbol))
        .collect();
    classes.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    for (name, symbol) in classes {
        render_class(&mut out, &name, symbol, interner);
    }
    out
}

fn render_class(out: &mut String, name: &str, symbol: &ClassSymbol, interner: &StringInterner) {
    let _ = write!(
        out,
        "{} {name} [{} {}]",
        symbol.kind.keyword(),
        symbol.status.visibility.keyword(),
        symbol.status.modality.keyword()
    );
    if let Some(companion) = symbol.companion {
        let _ = write!(out, " companion={}", companion.as_string(interner));
    }
    out.push('\n');

    for constructor in &symbol.constructors {
        let _ = writeln!(
            out,
            "    constructor({}){}",
            parameters(&constructor.parameters, interner),
            if constructor.is_static() { " static" } else { "" }
        );
    }
    for function in &symbol.functions {
        let annotations: String = function
            .annotations
            .iter()
            .map(|annotation| format!("@{} ", annotation.as_string(interner)))
            .collect();
        let _ = writeln!(
            out,
            "    {annotations}fun {}({}): {}",
            interner.lookup(function.name()),
            parameters(&function.parameters, interner),
            function.return_type.display(interner)
        );
    }
}

fn parameters(parameters: &[ParameterSymbol], interner: &StringInterner) -> String {
    parameters
        .iter()
        .map(|parameter| {
            format!(
                "{}: {}",
                interner.lookup(parameter.name),
                parameter.ty.display(interner)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
