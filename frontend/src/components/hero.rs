//! Hero section component

use leptos::*;

use crate::content::{HEADING_ACCENT, HEADING_PREFIX, HERO_ACTIONS, SUBTEXT};
use crate::styles;

/// Landing banner: heading, subtext and two call-to-action buttons.
///
/// Takes no props and holds no state, so every render yields the same tree.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class=styles::HERO_SECTION>
            <div class=styles::HERO_CONTENT>
                <h1 class=styles::HEADING>
                    {HEADING_PREFIX} " " <span class=styles::HEADING_ACCENT>{HEADING_ACCENT}</span>
                </h1>
                <p class=styles::SUBTEXT>{SUBTEXT}</p>
                <div class=styles::ACTION_ROW>
                    {HERO_ACTIONS
                        .iter()
                        .map(|action| view! {
                            <button type="button" class={action.variant.css_class()}>
                                {action.label}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
