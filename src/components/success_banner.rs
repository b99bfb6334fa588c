use leptos::prelude::*;

use crate::app::PageContext;

#[component]
pub fn SuccessBanner() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <Show when=move || ctx.state.with(|s| s.ui.success_banner)>
            <div class="success-banner" role="status">
                <span class="success-icon">"\u{2713}"</span>
                <div>
                    <p class="success-title">"Message envoyé avec succès !"</p>
                    <p class="success-detail">"Nous avons bien reçu votre message."</p>
                </div>
            </div>
        </Show>
    }
}
