//! Declaration cache for lowerings.
//!
//! Lowerings ask for derived declarations (instance fields, static
//! forwarders, `DefaultImpls` stubs) by the declaration they derive from.
//! Each request builds its result once and hands back the same reference on
//! every later call.
//!
//! # Design
//!
//! - **Side tables**: results are keyed by arena reference; declarations
//!   never point back at the cache
//! - **No placement**: created declarations are allocated but not attached
//!   to a class body; the lowering that asked decides where they go
//! - **Invariants panic**: asking for a forwarder of a non-companion member
//!   or a bridge for a real override is a lowering bug, not user error

mod object_fields;

use clr_ir::{ClassKind, DeclFlags, DeclStatus, Modality, Name, Visibility};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ir::{
    ClassRef, DeclOrigin, DeclParent, EnumEntryRef, FieldRef, FunctionRef, IrBody, IrClass, IrExpr,
    IrField, IrFunction, IrModule, IrParam, ParamKind,
};
use crate::settings::LanguageSettings;

use object_fields::ObjectInstanceFields;

/// A companion member's static counterpart and the function callers of the
/// companion use. Exactly one of the two is a generated forwarder.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StaticCompanionPair {
    pub static_function: FunctionRef,
    pub companion_function: FunctionRef,
}

/// Memoized factory for lowering-generated declarations.
#[derive(Default)]
pub struct DeclarationCache {
    settings: LanguageSettings,
    enum_entry_fields: FxHashMap<EnumEntryRef, FieldRef>,
    object_fields: ObjectInstanceFields,
    static_companion: FxHashMap<FunctionRef, StaticCompanionPair>,
    default_impls_classes: FxHashMap<ClassRef, ClassRef>,
    default_impls_redirections: FxHashMap<FunctionRef, FunctionRef>,
}

impl DeclarationCache {
    pub fn new(settings: LanguageSettings) -> Self {
        DeclarationCache {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> LanguageSettings {
        self.settings
    }

    /// Number of memoized results across every table.
    pub fn len(&self) -> usize {
        self.enum_entry_fields.len()
            + self.object_fields.len()
            + self.static_companion.len()
            + self.default_impls_classes.len()
            + self.default_impls_redirections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Static final field named after `entry`, typed as its enum class.
    pub fn field_for_enum_entry(&mut self, module: &mut IrModule, entry: EnumEntryRef) -> FieldRef {
        if let Some(&field) = self.enum_entry_fields.get(&entry) {
            trace!(?entry, "enum entry field cache hit");
            return field;
        }
        let ir_entry = module.enum_entry(entry);
        let enum_class = ir_entry.parent;
        let field = IrField {
            name: ir_entry.name,
            ty: module.class(enum_class).default_type(),
            parent: DeclParent::Class(enum_class),
            status: DeclStatus::PUBLIC_FINAL.with_flags(DeclFlags::STATIC | DeclFlags::FINAL),
            origin: DeclOrigin::FieldForEnumEntry,
        };
        let field = module.alloc_field(field);
        debug!(?entry, ?field, "created enum entry field");
        self.enum_entry_fields.insert(entry, field);
        field
    }

    /// Static field holding the instance of the singleton `object`.
    ///
    /// A companion's field is hoisted into its owner and named after the
    /// companion, unless the owner is a primitive-mapped builtin.
    pub fn field_for_object_instance(&mut self, module: &mut IrModule, object: ClassRef) -> FieldRef {
        self.object_fields
            .instance_field(module, self.settings, object)
    }

    /// Like `field_for_object_instance`, but companions of interfaces get a
    /// package-private `$$INSTANCE` field on the companion itself.
    pub fn private_field_for_object_instance(
        &mut self,
        module: &mut IrModule,
        object: ClassRef,
    ) -> FieldRef {
        self.object_fields
            .private_instance_field(module, self.settings, object)
    }

    /// Pair a companion member with a static counterpart in the owner.
    ///
    /// External members get a real static sibling in the owner and a
    /// forwarder in the companion; everything else gets a static forwarder
    /// in the owner that calls the companion member on its instance.
    ///
    /// # Panics
    /// If `function` is not declared in a companion object.
    #[tracing::instrument(level = "debug", skip_all, fields(function = function.raw()))]
    pub fn static_and_companion_declaration(
        &mut self,
        module: &mut IrModule,
        function: FunctionRef,
    ) -> StaticCompanionPair {
        if let Some(&pair) = self.static_companion.get(&function) {
            trace!("static/companion cache hit");
            return pair;
        }

        let companion = module.parent_class_of_function(function);
        assert!(
            module.class(companion).is_companion(),
            "static counterpart requested for {function:?}, which is not a companion member"
        );
        let owner = module.class(companion).parent;

        let pair = if module.function(function).is_external() {
            let static_function = self.static_sibling(module, function, owner);
            let forwarder = self.make_proxy(module, companion, static_function, false);
            StaticCompanionPair {
                static_function,
                companion_function: forwarder,
            }
        } else {
            let owner = owner.as_class().unwrap_or_else(|| {
                panic!("companion {companion:?} is not nested in a class: {owner:?}")
            });
            StaticCompanionPair {
                static_function: self.make_proxy(module, owner, function, true),
                companion_function: function,
            }
        };
        debug!(?pair, "created static/companion pair");
        self.static_companion.insert(function, pair);
        pair
    }

    /// Nested `DefaultImpls` class of `interface`.
    pub fn default_impls_class(&mut self, module: &mut IrModule, interface: ClassRef) -> ClassRef {
        if let Some(&class) = self.default_impls_classes.get(&interface) {
            trace!(?interface, "DefaultImpls cache hit");
            return class;
        }
        let id = module
            .class(interface)
            .id
            .nested(module.interner(), Name::DEFAULT_IMPLS);
        let mut class = IrClass::new(id, ClassKind::Class, DeclParent::Class(interface));
        class.origin = DeclOrigin::DefaultImpls;
        let class = module.alloc_class(class);
        debug!(?interface, ?class, "created DefaultImpls class");
        self.default_impls_classes.insert(interface, class);
        class
    }

    /// Concrete stub in a class for an inherited interface member.
    ///
    /// # Panics
    /// If `fake_override` is not a fake override or not a class member.
    #[tracing::instrument(level = "debug", skip_all, fields(function = fake_override.raw()))]
    pub fn default_impls_redirection(
        &mut self,
        module: &mut IrModule,
        fake_override: FunctionRef,
    ) -> FunctionRef {
        if let Some(&bridge) = self.default_impls_redirections.get(&fake_override) {
            trace!("DefaultImpls redirection cache hit");
            return bridge;
        }

        let source = module.function(fake_override);
        assert!(
            source.is_fake_override(),
            "DefaultImpls redirection requested for {fake_override:?}, which is not a fake override"
        );
        let class = module.parent_class_of_function(fake_override);
        let class_type = module.class(class).default_type();

        let kept = DeclFlags::INLINE | DeclFlags::SUSPEND | DeclFlags::OPERATOR | DeclFlags::INFIX;
        let mut bridge = IrFunction::new(source.name, DeclParent::Class(class), source.return_type.clone());
        bridge.status = DeclStatus::new(source.status.visibility, source.status.modality)
            .with_flags(source.status.flags & kept);
        bridge.origin = DeclOrigin::SuperInterfaceMethodBridge;
        bridge.type_parameters = source.type_parameters.clone();
        bridge.annotations = source.annotations.clone();
        bridge.overridden = source.overridden.clone();
        bridge.property = source.property;
        bridge.params = source
            .params
            .iter()
            .map(|param| match param.kind {
                ParamKind::DispatchReceiver => IrParam {
                    ty: class_type.clone(),
                    ..param.clone()
                },
                ParamKind::ExtensionReceiver | ParamKind::Regular => param.clone(),
            })
            .collect();

        let bridge = module.alloc_function(bridge);
        debug!(?bridge, ?class, "created DefaultImpls redirection");
        self.default_impls_redirections.insert(fake_override, bridge);
        bridge
    }

    /// Receiver-less copy of an external companion member, placed in `owner`.
    fn static_sibling(
        &mut self,
        module: &mut IrModule,
        function: FunctionRef,
        owner: DeclParent,
    ) -> FunctionRef {
        let source = module.function(function);
        let mut sibling = IrFunction::new(source.name, owner, source.return_type.clone());
        sibling.status = source.status.with_flags(DeclFlags::STATIC);
        sibling.type_parameters = source.type_parameters.clone();
        sibling.annotations = source.annotations.clone();
        sibling.property = source.property;
        sibling.attribute_owner = Some(function);
        sibling.params = source.non_dispatch_params().cloned().collect();
        module.alloc_function(sibling)
    }

    /// Forwarder in `owner` whose body calls `target`.
    fn make_proxy(
        &mut self,
        module: &mut IrModule,
        owner: ClassRef,
        target: FunctionRef,
        is_static: bool,
    ) -> FunctionRef {
        let owner_class = module.class(owner);
        let source = module.function(target);

        let modality = if owner_class.kind.is_interface() {
            Modality::Open
        } else {
            source.status.modality
        };
        let visibility = match source.status.visibility {
            Visibility::Internal => Visibility::Public,
            Visibility::Protected if is_static => Visibility::ProtectedStatic,
            other => other,
        };
        let mut flags = source.status.flags & DeclFlags::SUSPEND;
        if is_static {
            flags |= DeclFlags::STATIC;
        }

        let mut proxy = IrFunction::new(
            module.mapped_function_name(target),
            DeclParent::Class(owner),
            source.return_type.clone(),
        );
        proxy.status = DeclStatus::new(visibility, modality).with_flags(flags);
        proxy.origin = DeclOrigin::StaticWrapper;
        proxy.attribute_owner = Some(target);
        proxy.type_parameters = source.type_parameters.clone();
        proxy.annotations = source.annotations.clone();
        if !is_static {
            let this = module.interner().intern("<this>");
            proxy
                .params
                .push(IrParam::dispatch_receiver(this, owner_class.default_type()));
        }
        proxy.params.extend(source.non_dispatch_params().cloned());
        let target_has_receiver = source.dispatch_receiver().is_some();

        let proxy_ref = module.alloc_function(proxy);

        let mut arguments = Vec::new();
        if target_has_receiver {
            let instance_owner = module.parent_class_of_function(target);
            arguments.push(IrExpr::GetField(
                self.field_for_object_instance(module, instance_owner),
            ));
        }
        let proxy = module.function(proxy_ref);
        arguments.extend(
            proxy
                .params
                .iter()
                .enumerate()
                .filter(|(_, param)| param.kind != ParamKind::DispatchReceiver)
                .map(|(index, _)| IrExpr::GetValue {
                    function: proxy_ref,
                    index,
                }),
        );
        let type_arguments = proxy.type_parameters.clone();
        module.function_mut(proxy_ref).body = Some(IrBody::Expression(IrExpr::Call {
            target,
            type_arguments,
            arguments,
        }));
        proxy_ref
    }
}

#[cfg(test)]
mod tests;
