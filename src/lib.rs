//! ExtrusionDirectes landing page.
//!
//! The state modules (`state`, `contact`, `theme`, `storage`, `nav`,
//! `config`) have no rendering dependency and are tested natively; `app`,
//! `components` and `pages` render them with Leptos.

pub mod app;
mod browser;
mod components;
pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
mod pages;
pub mod state;
pub mod storage;
pub mod theme;
