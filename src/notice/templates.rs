//! Denial notice templates.
//!
//! A template is picked by dependency kind, relationship, whether the
//! shopper is identified, whether more than one entity is listed, and the
//! selection mode.

use super::titles::{escape_html, quote_title};
use crate::config::{DependencyKind, Relationship, SelectionMode, TitleStyle};

/// Inputs for one denial notice.
#[derive(Debug, Clone)]
pub struct NoticeRequest<'a> {
    /// Title of the product being denied.
    pub product_title: &'a str,
    pub kind: DependencyKind,
    pub relationship: Relationship,
    pub selection_mode: SelectionMode,
    pub identified: bool,
    /// More than one entity is listed in `merged_titles`.
    pub has_multiple: bool,
    /// Already merged titles of the entities still required.
    pub merged_titles: &'a str,
}

/// Phrase naming what must be owned.
fn ownership_phrase(req: &NoticeRequest<'_>) -> String {
    match req.selection_mode {
        SelectionMode::ProductIds => req.merged_titles.to_string(),
        SelectionMode::CategoryIds => category_phrase(req),
    }
}

/// Phrase naming what must be added to the cart.
fn cart_phrase(req: &NoticeRequest<'_>) -> String {
    match (req.selection_mode, req.relationship) {
        (SelectionMode::ProductIds, Relationship::Any) => {
            format!("a {}", req.merged_titles)
        }
        (SelectionMode::ProductIds, Relationship::All) => req.merged_titles.to_string(),
        (SelectionMode::CategoryIds, _) => category_phrase(req),
    }
}

fn category_phrase(req: &NoticeRequest<'_>) -> String {
    match (req.has_multiple, req.relationship) {
        (false, _) => format!("a product from the {} category", req.merged_titles),
        (true, Relationship::Any) => {
            format!("a product from the {} categories", req.merged_titles)
        }
        (true, Relationship::All) => {
            format!("a product from each of the {} categories", req.merged_titles)
        }
    }
}

fn login_phrase(text: &str, style: TitleStyle, login_url: Option<&str>) -> String {
    match (style, login_url) {
        (TitleStyle::Linked, Some(url)) => {
            format!("<a href=\"{}\">{}</a>", escape_html(url), text)
        }
        _ => text.to_string(),
    }
}

/// Render the notice text for a denial.
pub fn render_notice(
    req: &NoticeRequest<'_>,
    style: TitleStyle,
    login_url: Option<&str>,
) -> String {
    let product = quote_title(req.product_title, style);
    let own = ownership_phrase(req);
    let add = cart_phrase(req);

    match (req.kind, req.identified) {
        (DependencyKind::Ownership, true) => format!(
            "Access to {} is restricted only to verified owners of {}.",
            product, own
        ),
        (DependencyKind::Ownership, false) => format!(
            "Access to {} is restricted only to verified owners of {}. \
             The verification is automatic and simply requires you to be {}.",
            product,
            own,
            login_phrase("logged in", style, login_url)
        ),
        (DependencyKind::Purchase, _) => format!(
            "{} can be purchased only in combination with {}. \
             Access to this item will be granted after adding {} to the cart.",
            product, own, add
        ),
        (DependencyKind::Either, true) => format!(
            "Access to {} is restricted only to verified owners of {}. \
             Alternatively, access to this item will be granted after adding {} to the cart.",
            product, own, add
        ),
        (DependencyKind::Either, false) => format!(
            "{} requires the purchase of {}. Ownership can be verified by simply {}. \
             Alternatively, access to this item will be granted after adding {} to the cart.",
            product,
            own,
            login_phrase("logging in", style, login_url),
            add
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(
        kind: DependencyKind,
        relationship: Relationship,
        identified: bool,
        merged_titles: &'a str,
    ) -> NoticeRequest<'a> {
        NoticeRequest {
            product_title: "Expansion",
            kind,
            relationship,
            selection_mode: SelectionMode::ProductIds,
            identified,
            has_multiple: false,
            merged_titles,
        }
    }

    #[test]
    fn ownership_identified() {
        let req = request(DependencyKind::Ownership, Relationship::Any, true, "\"Base\"");
        assert_eq!(
            render_notice(&req, TitleStyle::Quoted, None),
            "Access to \"Expansion\" is restricted only to verified owners of \"Base\"."
        );
    }

    #[test]
    fn ownership_anonymous_mentions_login() {
        let req = request(DependencyKind::Ownership, Relationship::Any, false, "\"Base\"");
        let text = render_notice(&req, TitleStyle::Quoted, None);
        assert!(text.ends_with("simply requires you to be logged in."));
    }

    #[test]
    fn login_is_linked_in_linked_style() {
        let req = request(DependencyKind::Either, Relationship::Any, false, "\"Base\"");
        let text = render_notice(&req, TitleStyle::Linked, Some("https://shop.test/login"));
        assert!(text.contains("simply <a href=\"https://shop.test/login\">logging in</a>."));
    }

    #[test]
    fn linked_style_escapes_product_title() {
        let mut req = request(
            DependencyKind::Ownership,
            Relationship::Any,
            true,
            "\"Base &amp; Core\"",
        );
        req.product_title = "Tips & Tricks";
        assert_eq!(
            render_notice(&req, TitleStyle::Linked, None),
            "Access to \"Tips &amp; Tricks\" is restricted only to verified owners of \
             \"Base &amp; Core\"."
        );
        assert!(render_notice(&req, TitleStyle::Quoted, None)
            .starts_with("Access to \"Tips & Tricks\""));
    }

    #[test]
    fn purchase_any_uses_indefinite_article() {
        let req = request(
            DependencyKind::Purchase,
            Relationship::Any,
            true,
            "\"A\" or \"B\"",
        );
        assert_eq!(
            render_notice(&req, TitleStyle::Quoted, None),
            "\"Expansion\" can be purchased only in combination with \"A\" or \"B\". \
             Access to this item will be granted after adding a \"A\" or \"B\" to the cart."
        );
    }

    #[test]
    fn purchase_all_lists_titles_plainly() {
        let req = request(
            DependencyKind::Purchase,
            Relationship::All,
            true,
            "\"A\" and \"B\"",
        );
        let text = render_notice(&req, TitleStyle::Quoted, None);
        assert!(text.contains("after adding \"A\" and \"B\" to the cart."));
    }

    #[test]
    fn either_identified_offers_cart_alternative() {
        let req = request(DependencyKind::Either, Relationship::Any, true, "\"Base\"");
        assert_eq!(
            render_notice(&req, TitleStyle::Quoted, None),
            "Access to \"Expansion\" is restricted only to verified owners of \"Base\". \
             Alternatively, access to this item will be granted \
             after adding a \"Base\" to the cart."
        );
    }

    #[test]
    fn either_anonymous_asks_for_purchase() {
        let req = request(DependencyKind::Either, Relationship::Any, false, "\"Base\"");
        let text = render_notice(&req, TitleStyle::Quoted, None);
        assert!(text.starts_with("\"Expansion\" requires the purchase of \"Base\"."));
        assert!(text.contains("Ownership can be verified by simply logging in."));
    }

    #[test]
    fn category_wording() {
        let mut req = request(DependencyKind::Ownership, Relationship::Any, true, "\"Books\"");
        req.selection_mode = SelectionMode::CategoryIds;
        assert!(render_notice(&req, TitleStyle::Quoted, None)
            .contains("owners of a product from the \"Books\" category."));

        req.has_multiple = true;
        req.merged_titles = "\"Books\" or \"Comics\"";
        assert!(render_notice(&req, TitleStyle::Quoted, None)
            .contains("a product from the \"Books\" or \"Comics\" categories."));

        req.relationship = Relationship::All;
        req.merged_titles = "\"Books\" and \"Comics\"";
        assert!(render_notice(&req, TitleStyle::Quoted, None)
            .contains("a product from each of the \"Books\" and \"Comics\" categories."));
    }
}
