use leptos::prelude::*;

use crate::app::PageContext;
use crate::components::contact_form::ContactForm;
use crate::components::header::SiteHeader;
use crate::components::success_banner::SuccessBanner;
use crate::nav::Section;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let site = ctx.site.get_value();

    let features = site
        .features
        .iter()
        .map(|f| {
            view! {
                <div class="card feature-card">
                    <span class="feature-icon">{f.icon.glyph()}</span>
                    <h3>{f.title.clone()}</h3>
                    <p>{f.body.clone()}</p>
                </div>
            }
        })
        .collect_view();

    let products = site
        .products
        .iter()
        .map(|p| {
            view! {
                <div class="card product-card">
                    <h3>{p.name.clone()}</h3>
                    <p>{p.summary.clone()}</p>
                    <ul class="product-highlights">
                        {p.highlights.iter().map(|h| view! {
                            <li>"\u{2714} "{h.clone()}</li>
                        }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page landing-page">
            <SuccessBanner />
            <SiteHeader />

            <section id=Section::Home.id() class="hero">
                <div class="container hero-inner">
                    <img class="hero-logo" src=site.logo_url.clone() alt=site.logo_alt.clone() />
                    <h1>
                        {site.hero.title.clone()}
                        <span class="accent">{site.hero.highlight.clone()}</span>
                    </h1>
                    <p class="hero-lead">{site.hero.lead.clone()}</p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-primary btn-lg"
                            on:click=move |_| ctx.scroll_to_section(Section::Products.id())
                        >
                            {site.hero.products_label.clone()}
                            " \u{2192}"
                        </button>
                        <button
                            class="btn btn-outline btn-lg"
                            on:click=move |_| ctx.scroll_to_section(Section::Contact.id())
                        >
                            {site.hero.contact_label.clone()}
                        </button>
                    </div>
                </div>
            </section>

            <section id=Section::About.id() class="section">
                <div class="container">
                    <h2>{Section::About.label()}</h2>
                    <div class="card-grid">{features}</div>
                </div>
            </section>

            <section id=Section::Products.id() class="section section-alt">
                <div class="container">
                    <h2>{Section::Products.label()}</h2>
                    <div class="card-grid">{products}</div>
                </div>
            </section>

            <section id=Section::Contact.id() class="section">
                <div class="container contact-layout">
                    <div class="contact-details">
                        <h2>{Section::Contact.label()}</h2>
                        <p>"Parlez-nous de votre projet et recevez une soumission rapidement."</p>
                        <p class="contact-line">"\u{2709} "{site.contact.email.clone()}</p>
                        <p class="contact-line">"\u{1F4CD} "{site.contact.address.clone()}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="site-footer">
                <div class="container">
                    {format!("\u{00A9} {}", site.company_name)}
                </div>
            </footer>
        </div>
    }
}
