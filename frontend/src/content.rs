//! Literal copy shown by the hero section.
//!
//! Fixed at authoring time and identical on every render.

use crate::types::{ActionVariant, HeroAction};

/// Heading text preceding the emphasized term.
pub const HEADING_PREFIX: &str = "Welcome to";

/// Emphasized heading term, rendered in the accent color.
pub const HEADING_ACCENT: &str = "Template";

/// Paragraph under the heading.
pub const SUBTEXT: &str = "A modern starter template built with React, Vite, and Tailwind CSS v4. \
                           Perfect for your next web project.";

pub const PRIMARY_LABEL: &str = "Get Started";
pub const SECONDARY_LABEL: &str = "Learn More";

/// Action row contents, in display order.
pub const HERO_ACTIONS: [HeroAction; 2] = [
    HeroAction {
        label: PRIMARY_LABEL,
        variant: ActionVariant::Primary,
    },
    HeroAction {
        label: SECONDARY_LABEL,
        variant: ActionVariant::Secondary,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subtext_names_the_stack() {
        assert!(SUBTEXT.contains("React"));
        assert!(SUBTEXT.contains("Vite"));
        assert!(SUBTEXT.contains("Tailwind CSS"));
        assert!(SUBTEXT.ends_with("Perfect for your next web project."));
    }

    #[test]
    fn actions_are_primary_then_secondary() {
        let labels: Vec<_> = HERO_ACTIONS.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Get Started", "Learn More"]);
        assert_eq!(HERO_ACTIONS[0].variant, ActionVariant::Primary);
        assert_eq!(HERO_ACTIONS[1].variant, ActionVariant::Secondary);
    }
}
