use extrusion_directes::config::SiteConfig;
use extrusion_directes::contact::{ContactTransport, NoopTransport, BANNER_DURATION_MS};
use extrusion_directes::error::{StorageError, SubmitError, TransportError, ValidationError};
use extrusion_directes::state::{FormField, FormState, PageState};
use extrusion_directes::storage::{MemoryStore, PreferenceStore};
use extrusion_directes::theme::{Theme, THEME_KEY};

struct FailingTransport;

impl ContactTransport for FailingTransport {
    fn send(&self, _form: &FormState) -> Result<(), TransportError> {
        Err(TransportError::Unavailable("offline".into()))
    }
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }
}

fn form(name: &str, email: &str, company: &str, message: &str) -> FormState {
    FormState {
        name: name.into(),
        email: email.into(),
        company: company.into(),
        message: message.into(),
    }
}

fn state_with(form: FormState) -> PageState {
    let mut state = PageState::new(Theme::Light);
    state.form = form;
    state
}

const BANNER: f64 = BANNER_DURATION_MS as f64;

#[test]
fn test_load_defaults_to_light_when_absent() {
    let store = MemoryStore::new();
    let state = PageState::load(&store);
    assert_eq!(state.ui.theme, Theme::Light);
    assert!(!state.ui.mobile_menu_open);
    assert!(!state.ui.submitting);
    assert!(!state.ui.success_banner);
    assert!(state.form.is_empty());
}

#[test]
fn test_load_reads_dark_preference() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "dark").unwrap();
    assert_eq!(PageState::load(&store).ui.theme, Theme::Dark);

    store.set(THEME_KEY, "purple").unwrap();
    assert_eq!(PageState::load(&store).ui.theme, Theme::Light);
}

#[test]
fn test_toggle_sequences_alternate_and_persist() {
    for n in 0..8 {
        let store = MemoryStore::new();
        let mut state = PageState::load(&store);
        for _ in 0..n {
            state.toggle_theme(&store);
        }

        let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(state.ui.theme, expected, "after {} toggles", n);
        if n > 0 {
            assert_eq!(
                store.get(THEME_KEY).as_deref(),
                Some(expected.as_str()),
                "persisted value should match displayed theme after {} toggles",
                n
            );
            assert_eq!(PageState::load(&store).ui.theme, expected);
        }
    }
}

#[test]
fn test_toggle_survives_storage_failure() {
    let mut state = PageState::new(Theme::Light);
    assert_eq!(state.toggle_theme(&BrokenStore), Theme::Dark);
    assert_eq!(state.ui.theme, Theme::Dark);
}

#[test]
fn test_mobile_menu_toggles() {
    let mut state = PageState::default();
    assert!(state.toggle_mobile_menu());
    assert!(!state.toggle_mobile_menu());
}

#[test]
fn test_navigate_to_contact_closes_open_menu() {
    let mut state = PageState::default();
    state.toggle_mobile_menu();
    assert!(state.ui.mobile_menu_open);

    let section = state.navigate("contact");
    assert_eq!(section.map(|s| s.id()), Some("contact"));
    assert!(!state.ui.mobile_menu_open);
}

#[test]
fn test_missing_email_keeps_fields_and_hides_banner() {
    let mut state = state_with(form("Jean", "", "", "Bonjour"));
    let before = state.form.clone();

    let err = state.submit(&NoopTransport, 0.0).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Validation(ValidationError::MissingRequiredField(FormField::Email))
    );
    assert!(err.alert_text().is_some());
    assert_eq!(state.form, before);
    assert!(!state.ui.success_banner);
    assert!(!state.ui.submitting);
}

#[test]
fn test_any_missing_required_field_never_clears_form() {
    let cases = [
        form("", "j@x.com", "Acme", "Bonjour"),
        form("Jean", "", "Acme", "Bonjour"),
        form("Jean", "j@x.com", "Acme", ""),
        form("   ", "j@x.com", "", "Bonjour"),
    ];
    for case in cases {
        let mut state = state_with(case.clone());
        assert!(state.submit(&NoopTransport, 0.0).is_err());
        assert_eq!(state.form, case);
        assert!(!state.ui.success_banner);
    }
}

#[test]
fn test_valid_submission_clears_form_and_shows_banner() {
    let mut state = state_with(form("Jean", "j@x.com", "", "Bonjour"));

    let ticket = state.submit(&NoopTransport, 0.0).expect("valid form should submit");
    assert!(state.form.is_empty());
    assert_eq!(state.form, FormState::default());
    assert!(state.ui.success_banner);
    assert!(!state.ui.submitting);
    assert_eq!(ticket.delay_ms, BANNER_DURATION_MS);
    assert_eq!(state.banner_deadline(), Some(BANNER));
}

#[test]
fn test_banner_hides_after_exactly_five_seconds() {
    let mut state = state_with(form("Jean", "j@x.com", "", "Bonjour"));
    state.submit(&NoopTransport, 0.0).unwrap();

    assert!(!state.expire_banner(BANNER - 1.0));
    assert!(state.ui.success_banner);

    assert!(state.expire_banner(BANNER));
    assert!(!state.ui.success_banner);
}

#[test]
fn test_second_submission_restarts_banner_timer() {
    let mut state = state_with(form("Jean", "j@x.com", "", "Bonjour"));
    let first = state.submit(&NoopTransport, 0.0).unwrap();

    state.form = form("Marie", "m@x.com", "Clôtures Inc.", "Une autre demande");
    let second = state.submit(&NoopTransport, 2_000.0).unwrap();

    // The first timer fires and must not dismiss the newer banner
    assert!(!state.expire_banner(first.deadline_ms));
    assert!(state.ui.success_banner);

    assert!(!state.expire_banner(2_000.0 + BANNER - 1.0));
    assert!(state.ui.success_banner);

    assert!(state.expire_banner(second.deadline_ms));
    assert!(!state.ui.success_banner);
}

#[test]
fn test_transport_failure_keeps_form_and_hides_banner() {
    let original = form("Jean", "j@x.com", "", "Bonjour");
    let mut state = state_with(original.clone());

    let err = state.submit(&FailingTransport, 0.0).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(err.alert_text(), Some("Erreur lors de l'envoi du message."));
    assert_eq!(state.form, original);
    assert!(!state.ui.success_banner);
    assert!(!state.ui.submitting);
    assert_eq!(state.banner_deadline(), None);
}

#[test]
fn test_submission_is_rejected_while_pending() {
    let mut state = state_with(form("Jean", "j@x.com", "", "Bonjour"));
    let snapshot = state.begin_submit().unwrap();
    assert_eq!(snapshot.name, "Jean");

    let err = state.submit(&NoopTransport, 0.0).unwrap_err();
    assert_eq!(err, SubmitError::InFlight);
    assert_eq!(err.alert_text(), None);
    assert_eq!(state.form.name, "Jean");

    state.finish_submit(Ok(()), 0.0).unwrap();
    assert!(state.form.is_empty());
}

#[test]
fn test_configured_banner_duration_drives_dismissal() {
    let json = r#"{
        "company_name": "ExtrusionDirectes",
        "initials": "ED",
        "tagline": "t",
        "logo_url": "https://example.com/logo.png",
        "logo_alt": "logo",
        "hero": {
            "title": "a",
            "highlight": "b",
            "lead": "c",
            "products_label": "Voir les produits",
            "contact_label": "Contactez-nous"
        },
        "quote_label": "Demande de soumission",
        "contact": { "email": "a@b.c", "address": "Québec" },
        "banner_duration_ms": 1000
    }"#;
    let site = SiteConfig::from_json(json).expect("config should parse");

    let store = MemoryStore::new();
    let mut state = PageState::load(&store).with_banner_duration(site.banner_duration_ms);
    state.form = form("Jean", "j@x.com", "", "Bonjour");

    let ticket = state.submit(&NoopTransport, 0.0).unwrap();
    assert_eq!(ticket.delay_ms, 1_000);
    assert_eq!(state.banner_deadline(), Some(1_000.0));
    assert!(state.expire_banner(1_000.0));
    assert!(!state.ui.success_banner);
}

#[test]
fn test_embedded_config_keeps_five_second_banner() {
    let site = SiteConfig::embedded();
    let state = PageState::new(Theme::Light).with_banner_duration(site.banner_duration_ms);
    assert_eq!(state.banner_duration_ms(), BANNER_DURATION_MS);
    assert_eq!(BANNER_DURATION_MS, 5_000);
}
