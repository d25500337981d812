//! Template - Frontend Rust/Leptos Application
//!
//! A WebAssembly starter frontend whose landing page is a single static
//! hero section. Styling comes from Tailwind CSS utility classes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Router  "/"                                                 │
//! │  └── HomePage                                                │
//! │      └── Hero (heading, subtext, two buttons)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`content`] - Literal copy rendered by the hero
//! - [`types`] - Call-to-action types
//! - [`styles`] - Utility class tokens
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod content;
pub mod styles;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ActionVariant, HeroAction};

// Components
pub use components::*;

// =============================================================================
// Application
// =============================================================================

/// Root component mounted by the entry point.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn home_page_mounts_a_single_hero() {
        let html = leptos::ssr::render_to_string(|| view! { <HomePage/> }).to_string();

        assert!(html.contains("<main"));
        assert_eq!(html.matches("</main>").count(), 1);
        assert_eq!(html.matches("</section>").count(), 1);
        assert!(html.contains("Get Started"));
        assert!(html.contains("Learn More"));
    }
}
