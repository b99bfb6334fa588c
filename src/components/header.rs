use leptos::prelude::*;

use crate::app::PageContext;
use crate::components::theme_toggle::ThemeToggle;
use crate::nav::Section;

/// One button per section; shared by the top bar and the mobile panel.
#[component]
fn NavLinks(#[prop(into)] link_class: String) -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class=link_class.clone()
                    on:click=move |_| ctx.scroll_to_section(section.id())
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let site = ctx.site.get_value();
    let quote_label = site.quote_label.clone();
    let menu_open = move || ctx.state.with(|s| s.ui.mobile_menu_open);

    view! {
        <header class="site-header">
            <div class="container header-bar">
                <div class="brand">
                    <div class="brand-badge">{site.initials.clone()}</div>
                    <div class="brand-text">
                        <div class="brand-name">{site.company_name.clone()}</div>
                        <div class="brand-tagline">{site.tagline.clone()}</div>
                    </div>
                </div>

                <nav class="nav-desktop">
                    <NavLinks link_class="nav-link" />
                </nav>

                <div class="header-actions">
                    <ThemeToggle />
                    <button
                        class="btn btn-primary btn-quote"
                        on:click=move |_| ctx.scroll_to_section(Section::Contact.id())
                    >
                        {site.quote_label.clone()}
                        " \u{2192}"
                    </button>
                    <button
                        class="btn btn-icon menu-button"
                        title="Menu"
                        on:click=move |_| ctx.toggle_mobile_menu()
                    >
                        {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <nav class="container nav-mobile">
                    <NavLinks link_class="nav-link nav-link-mobile" />
                    <button
                        class="btn btn-primary btn-block"
                        on:click=move |_| ctx.scroll_to_section(Section::Contact.id())
                    >
                        {quote_label.clone()}
                    </button>
                </nav>
            </Show>
        </header>
    }
}
