//! Entry point generation for file classes.
//!
//! The platform looks for `Main(string[])`. A file that only declares a
//! parameterless `main()` gets a generated `Main(args: Array<String>)` that
//! calls it.

use clr_ir::{standard, DeclStatus, Modality, Name, TypeRef, Visibility};
use tracing::{debug, warn};

use crate::cache::DeclarationCache;
use crate::ir::{
    ClassRef, Decl, DeclOrigin, DeclParent, FunctionRef, IrBody, IrExpr, IrFunction, IrModule,
    IrParam,
};

use super::LoweringPass;

pub struct MainMethodLowering;

fn string_array() -> TypeRef {
    TypeRef::non_null(standard::ARRAY).with_arguments(vec![TypeRef::non_null(standard::STRING)])
}

impl LoweringPass for MainMethodLowering {
    fn name(&self) -> &'static str {
        "main-method"
    }

    fn lower(&self, module: &mut IrModule, _cache: &mut DeclarationCache) {
        let file_classes: Vec<ClassRef> = module
            .class_refs()
            .filter(|&class| module.class(class).is_file_class())
            .collect();
        for class in file_classes {
            lower_file_class(module, class);
        }
    }
}

fn lower_file_class(module: &mut IrModule, class: ClassRef) {
    let functions: Vec<FunctionRef> = module.class(class).functions().collect();

    if let Some(&main) = functions.iter().find(|&&f| is_main_with_args(module.function(f))) {
        if module.function(main).is_suspend() {
            warn!(?class, "suspend main is not supported");
        }
        return;
    }

    let Some(&main) = functions
        .iter()
        .find(|&&f| is_parameterless_main(module.function(f)))
    else {
        return;
    };
    if module.function(main).is_suspend() {
        warn!(?class, "suspend main is not supported");
        return;
    }

    let mut entry = IrFunction::new(Name::MAIN_ENTRY, DeclParent::Class(class), TypeRef::unit());
    entry.status = DeclStatus::new(Visibility::Public, Modality::Open);
    entry.origin = DeclOrigin::GeneratedMain;
    entry.params.push(IrParam::regular(Name::ARGS, string_array()));
    entry.body = Some(IrBody::Block(vec![IrExpr::Call {
        target: main,
        type_arguments: Vec::new(),
        arguments: Vec::new(),
    }]));
    let entry = module.alloc_function(entry);
    module.add_declaration(class, Decl::Function(entry));
    debug!(?class, ?entry, "generated Main entry point");
}

fn is_main_with_args(function: &IrFunction) -> bool {
    if function.name != Name::MAIN || !function.return_type.is_unit() {
        return false;
    }
    let mut regular = function.regular_params();
    matches!(
        (regular.next(), regular.next()),
        (Some(param), None) if param.ty.class_id == standard::ARRAY
            && param.ty.arguments.len() == 1
            && param.ty.arguments[0].class_id == standard::STRING
    )
}

fn is_parameterless_main(function: &IrFunction) -> bool {
    function.name == Name::MAIN
        && function.return_type.is_unit()
        && function.type_parameters.is_empty()
        && function.extension_receiver().is_none()
        && function.regular_params().next().is_none()
}
