pub mod contact_form;
pub mod header;
pub mod success_banner;
pub mod theme_toggle;
