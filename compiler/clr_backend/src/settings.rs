//! Language feature switches the backend consults.

/// Feature settings for one compilation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LanguageSettings {
    /// Companion instance fields take the companion's own visibility
    /// instead of always being public.
    pub proper_visibility_for_companion_instance_field: bool,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        LanguageSettings {
            proper_visibility_for_companion_instance_field: true,
        }
    }
}
