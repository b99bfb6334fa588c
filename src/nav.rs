//! In-page section anchors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Products,
    Contact,
}

impl Section {
    /// Navigation order, shared by the top bar and the mobile panel.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Products,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Products => "products",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Accueil",
            Section::About => "À propos",
            Section::Products => "Produits",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Smooth-scroll to the element with the given id. Returns `false` when no
/// such element exists.
pub fn scroll_to_element(id: &str) -> bool {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
