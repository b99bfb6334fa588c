use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::browser;
use crate::config::SiteConfig;
use crate::contact::{BannerTicket, ContactTransport, NoopTransport};
use crate::error::SubmitError;
use crate::nav;
use crate::pages::landing::LandingPage;
use crate::state::{FormField, PageState};
use crate::storage::BrowserStorage;
use crate::theme::{apply_theme, Theme};

/// Page state plus the browser-side handles that go with it.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: RwSignal<PageState>,
    pub site: StoredValue<SiteConfig>,
    banner_timeout: StoredValue<Option<i32>>,
}

impl PageContext {
    pub fn toggle_theme(self) {
        self.state.update(|s| {
            s.toggle_theme(&BrowserStorage);
        });
    }

    pub fn toggle_mobile_menu(self) {
        self.state.update(|s| {
            s.toggle_mobile_menu();
        });
    }

    pub fn scroll_to_section(self, id: &str) {
        if !nav::scroll_to_element(id) {
            log!("No section with id '{}'", id);
        }
        self.state.update(|s| {
            s.navigate(id);
        });
    }

    pub fn set_field(self, field: FormField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    pub fn field(self, field: FormField) -> String {
        self.state.with(|s| s.form.get(field).to_string())
    }

    /// Validate synchronously, then settle on the next tick.
    pub fn submit(self) {
        let snapshot = match self.state.try_update(|s| s.begin_submit()) {
            Some(Ok(form)) => form,
            Some(Err(e)) => return report(&e),
            None => return,
        };
        spawn_local(async move {
            let outcome = NoopTransport.send(&snapshot);
            match self
                .state
                .try_update(|s| s.finish_submit(outcome, browser::now_ms()))
            {
                Some(Ok(ticket)) => self.restart_banner_timer(ticket),
                Some(Err(e)) => report(&e),
                None => {}
            }
        });
    }

    /// Keep a single pending dismissal: drop the old timer, arm a new one.
    fn restart_banner_timer(self, ticket: BannerTicket) {
        let state = self.state;
        let mut slot = self.banner_timeout.get_value();
        browser::rearm(&mut slot, browser::clear_timeout, || {
            browser::set_timeout(ticket.delay_ms, move || {
                state.update(|s| {
                    s.expire_banner(ticket.deadline_ms);
                });
            })
        });
        self.banner_timeout.set_value(slot);
    }
}

fn report(error: &SubmitError) {
    match error.alert_text() {
        Some(text) => browser::alert(text),
        None => log!("Ignoring submission: {}", error),
    }
}

#[component]
pub fn App() -> impl IntoView {
    if !BrowserStorage::is_available() {
        warn!("localStorage unavailable, theme preference will not persist");
    }
    let site = SiteConfig::embedded();
    let state = RwSignal::new(
        PageState::load(&BrowserStorage).with_banner_duration(site.banner_duration_ms),
    );
    let ctx = PageContext {
        state,
        site: StoredValue::new(site),
        banner_timeout: StoredValue::new(None),
    };
    provide_context(ctx);

    let theme = Memo::new(move |_| state.with(|s| s.ui.theme));
    log!("Theme on load: {}", theme.get_untracked().as_str());

    // Apply theme to DOM whenever it changes
    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    view! {
        <Router>
            <div class="site" class:dark=move || theme.get() == Theme::Dark>
                <Routes fallback=|| view! { <p class="not-found">"Page introuvable"</p> }>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </div>
        </Router>
    }
}
