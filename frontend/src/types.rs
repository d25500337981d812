//! Types describing the hero's call-to-action buttons.

/// Visual weight of a call-to-action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionVariant {
    /// Solid accent background
    Primary,
    /// Accent outline on white
    Secondary,
}

impl ActionVariant {
    /// Get the utility classes for this variant.
    pub fn css_class(&self) -> &'static str {
        match self {
            ActionVariant::Primary => crate::styles::BUTTON_PRIMARY,
            ActionVariant::Secondary => crate::styles::BUTTON_SECONDARY,
        }
    }
}

/// A button in the hero's action row.
///
/// Carries no handler: the buttons are inert placeholders until a
/// navigation or submission capability is passed in from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroAction {
    /// Button label
    pub label: &'static str,
    /// Visual style
    pub variant: ActionVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_solid_with_shadow() {
        let class = ActionVariant::Primary.css_class();
        assert!(class.contains("bg-indigo-600"));
        assert!(class.contains("hover:bg-indigo-700"));
        assert!(class.contains("text-white"));
        assert!(class.contains("shadow-lg"));
    }

    #[test]
    fn secondary_is_outlined_without_shadow() {
        let class = ActionVariant::Secondary.css_class();
        assert!(class.contains("border-indigo-600"));
        assert!(class.contains("hover:bg-gray-100"));
        assert!(class.contains("text-indigo-600"));
        assert!(!class.contains("shadow"));
    }
}
