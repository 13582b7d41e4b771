//! Static fields holding singleton instances.

use clr_ir::{standard, ClassId, DeclFlags, DeclStatus, Modality, Name, Visibility};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ir::{ClassRef, DeclOrigin, DeclParent, FieldRef, IrField, IrModule};
use crate::settings::LanguageSettings;

/// Companions whose owners map to platform primitives; their instance field
/// stays on the companion itself.
const MAPPED_INTRINSIC_OWNERS: [ClassId; 9] = [
    standard::CHAR,
    standard::BYTE,
    standard::SHORT,
    standard::INT,
    standard::FLOAT,
    standard::LONG,
    standard::DOUBLE,
    standard::STRING,
    standard::ENUM,
];

#[derive(Default)]
pub(crate) struct ObjectInstanceFields {
    instance_fields: FxHashMap<ClassRef, FieldRef>,
    interface_companion_fields: FxHashMap<ClassRef, FieldRef>,
}

impl ObjectInstanceFields {
    pub(crate) fn len(&self) -> usize {
        self.instance_fields.len() + self.interface_companion_fields.len()
    }

    pub(crate) fn instance_field(
        &mut self,
        module: &mut IrModule,
        settings: LanguageSettings,
        singleton: ClassRef,
    ) -> FieldRef {
        if let Some(&field) = self.instance_fields.get(&singleton) {
            trace!(?singleton, "instance field cache hit");
            return field;
        }

        let class = module.class(singleton);
        let is_companion = class.is_companion();
        let outer = module.outer_class(singleton);
        let outer_is_interface = outer.is_some_and(|outer| module.class(outer).kind.is_interface());
        let hoisted = is_companion && !is_mapped_intrinsic_companion(module, singleton);

        let visibility = if settings.proper_visibility_for_companion_instance_field
            && is_companion
            && !outer_is_interface
        {
            match class.status.visibility {
                Visibility::Protected => Visibility::ProtectedStatic,
                other => other,
            }
        } else {
            Visibility::Public
        };

        let field = IrField {
            name: if hoisted { class.name() } else { Name::INSTANCE },
            ty: class.default_type(),
            parent: if hoisted {
                class.parent
            } else {
                DeclParent::Class(singleton)
            },
            status: DeclStatus::new(visibility, Modality::Final)
                .with_flags(DeclFlags::STATIC | DeclFlags::FINAL),
            origin: DeclOrigin::FieldForObjectInstance,
        };
        let field = module.alloc_field(field);
        debug!(?singleton, ?field, ?visibility, hoisted, "created instance field");
        self.instance_fields.insert(singleton, field);
        field
    }

    pub(crate) fn private_instance_field(
        &mut self,
        module: &mut IrModule,
        settings: LanguageSettings,
        singleton: ClassRef,
    ) -> FieldRef {
        let class = module.class(singleton);
        let in_interface = class.is_companion()
            && module
                .outer_class(singleton)
                .is_some_and(|outer| module.class(outer).kind.is_interface());
        if !in_interface {
            return self.instance_field(module, settings, singleton);
        }

        if let Some(&field) = self.interface_companion_fields.get(&singleton) {
            trace!(?singleton, "private instance field cache hit");
            return field;
        }
        let field = IrField {
            name: Name::INTERFACE_COMPANION_INSTANCE,
            ty: class.default_type(),
            parent: DeclParent::Class(singleton),
            status: DeclStatus::new(Visibility::PackagePrivate, Modality::Final)
                .with_flags(DeclFlags::STATIC | DeclFlags::FINAL),
            origin: DeclOrigin::InterfaceCompanionPrivateInstance,
        };
        let field = module.alloc_field(field);
        debug!(?singleton, ?field, "created interface companion instance field");
        self.interface_companion_fields.insert(singleton, field);
        field
    }
}

fn is_mapped_intrinsic_companion(module: &IrModule, singleton: ClassRef) -> bool {
    module.class(singleton).is_companion()
        && module
            .outer_class(singleton)
            .is_some_and(|outer| MAPPED_INTRINSIC_OWNERS.contains(&module.class(outer).id))
}
