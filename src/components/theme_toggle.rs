use leptos::prelude::*;

use crate::app::PageContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let is_dark = move || ctx.state.with(|s| s.ui.theme.is_dark());

    view! {
        <button
            class="btn btn-icon theme-toggle"
            title="Changer de thème"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || if is_dark() { "\u{2600}" } else { "\u{263E}" }}
        </button>
    }
}
