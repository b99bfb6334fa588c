//! Site content loaded from `config/site.json`.
//!
//! The JSON is embedded at compile time so the page ships as a single
//! wasm bundle with no runtime fetch.

use serde::Deserialize;

use crate::contact::BANNER_DURATION_MS;
use crate::error::ConfigError;

const SITE_JSON: &str = include_str!("../config/site.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub company_name: String,
    pub initials: String,
    pub tagline: String,
    pub logo_url: String,
    pub logo_alt: String,
    pub hero: Hero,
    pub quote_label: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub products: Vec<Product>,
    pub contact: ContactDetails,
    /// How long the success banner stays up, in milliseconds.
    #[serde(default = "default_banner_duration_ms")]
    pub banner_duration_ms: u32,
}

fn default_banner_duration_ms() -> u32 {
    BANNER_DURATION_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub title: String,
    pub highlight: String,
    pub lead: String,
    pub products_label: String,
    pub contact_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Shield,
    Palette,
    Support,
}

impl FeatureIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Shield => "\u{1F6E1}",
            FeatureIcon::Palette => "\u{1F3A8}",
            FeatureIcon::Support => "\u{1F3A7}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub address: String,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration compiled into the binary.
    ///
    /// # Panics
    /// Panics if the embedded JSON is invalid (a build-time bug).
    pub fn embedded() -> Self {
        Self::from_json(SITE_JSON).expect("embedded config/site.json must be valid")
    }
}
