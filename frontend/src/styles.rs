//! Utility class tokens for the hero section.
//!
//! Only class names live here, never raw style values. Tailwind CSS resolves
//! them at bundle time (see `style/tailwind.css`), and it is responsible for
//! the indigo accent, the spacing scale and the breakpoints referenced below.

/// Full-width banner: vertical indigo-to-white gradient, generous padding.
pub const HERO_SECTION: &str = "bg-gradient-to-b from-indigo-50 to-white py-20 px-4";

/// Centered content block, constrained to a reading width.
pub const HERO_CONTENT: &str = "container mx-auto max-w-4xl text-center";

pub const HEADING: &str = "text-5xl font-bold text-gray-900 mb-6";

/// Accent applied to the emphasized heading term.
pub const HEADING_ACCENT: &str = "text-indigo-600";

pub const SUBTEXT: &str = "text-xl text-gray-600 mb-10 max-w-2xl mx-auto";

/// Button row; wraps on narrow viewports.
pub const ACTION_ROW: &str = "flex flex-wrap justify-center gap-4";

/// Solid accent button, darkens on hover.
pub const BUTTON_PRIMARY: &str =
    "bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-3 rounded-lg font-medium shadow-lg transition-colors";

/// Outlined button on a white background, grays on hover.
pub const BUTTON_SECONDARY: &str =
    "bg-white hover:bg-gray-100 text-indigo-600 border border-indigo-600 px-6 py-3 rounded-lg font-medium transition-colors";
