//! Human-readable denial notices.
//!
//! [`NoticeFormatter`] merges the titles of unmet requirements and renders
//! the template matching the dependency. A configured custom notice
//! replaces all generated text.

pub mod templates;
pub mod titles;

pub use templates::{render_notice, NoticeRequest};
pub use titles::{
    display_name, escape_html, format_product_title, merge_titles, quote, quote_title,
    render_title,
};

use crate::config::{EngineSettings, Relationship, TitleStyle};
use crate::evaluator::RequiredEntity;

/// Builds notice strings according to engine settings.
#[derive(Debug, Clone, Default)]
pub struct NoticeFormatter {
    style: TitleStyle,
    rtl: bool,
    login_url: Option<String>,
}

impl NoticeFormatter {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            style: settings.title_style,
            rtl: settings.rtl,
            login_url: settings.login_url.clone(),
        }
    }

    /// Merge entity titles using the configured style and direction.
    pub fn merge_titles(
        &self,
        entities: &[RequiredEntity],
        relationship: Relationship,
    ) -> String {
        merge_titles(entities, relationship, self.style, self.rtl)
    }

    /// Final notice text: the custom override when present, else the template.
    pub fn notice(&self, req: &NoticeRequest<'_>, custom: Option<&str>) -> String {
        match custom {
            Some(text) => text.to_string(),
            None => render_notice(req, self.style, self.login_url.as_deref()),
        }
    }
}
