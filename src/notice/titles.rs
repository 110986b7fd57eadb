//! Title rendering and merging.

use crate::catalog::Product;
use crate::config::{Relationship, TitleStyle};
use crate::evaluator::RequiredEntity;

/// Wrap a title in double quotes.
pub fn quote(title: &str) -> String {
    format!("\"{}\"", title)
}

/// Quote a title, escaping it when notices are rendered as HTML.
pub fn quote_title(title: &str, style: TitleStyle) -> String {
    match style {
        TitleStyle::Quoted => quote(title),
        TitleStyle::Linked => quote(&escape_html(title)),
    }
}

/// Render one entity title in the given style.
pub fn render_title(entity: &RequiredEntity, style: TitleStyle) -> String {
    match (style, entity.permalink.as_deref()) {
        (TitleStyle::Linked, Some(url)) => format!(
            "<a href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(&entity.title)
        ),
        _ => quote_title(&entity.title, style),
    }
}

/// Merge rendered titles into one readable list.
///
/// `["A", "B", "C"]` becomes `"A", "B" or "C"` for [`Relationship::Any`] and
/// `"A", "B" and "C"` for [`Relationship::All`]. Right-to-left locales get the
/// list reversed with the same separators.
pub fn merge_titles(
    entities: &[RequiredEntity],
    relationship: Relationship,
    style: TitleStyle,
    rtl: bool,
) -> String {
    let mut titles: Vec<String> = entities
        .iter()
        .map(|e| render_title(e, style))
        .collect();
    if rtl {
        titles.reverse();
    }

    match titles.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!(
            "{} {} {}",
            rest.join(", "),
            relationship.conjunction(),
            last
        ),
    }
}

/// Format a product title with an identifier (SKU or `#id`) and optional meta.
///
/// With `paren`, the title leads (`Title (SKU)`); otherwise the identifier
/// leads (`SKU – Title`).
pub fn format_product_title(title: &str, identifier: &str, meta: &str, paren: bool) -> String {
    match (identifier.is_empty(), meta.is_empty(), paren) {
        (false, false, true) => format!("{} – {} ({})", title, meta, identifier),
        (false, false, false) => format!("{} – {} – {}", identifier, title, meta),
        (false, true, true) => format!("{} ({})", title, identifier),
        (false, true, false) => format!("{} – {}", identifier, title),
        (true, false, true) => format!("{} ({})", title, meta),
        (true, false, false) => format!("{} – {}", title, meta),
        (true, true, _) => title.to_string(),
    }
}

/// Admin-style display name: `Title (SKU)`, or `Title (#id)` without a SKU.
pub fn display_name(product: &Product) -> String {
    let identifier = match product.sku.as_deref().filter(|s| !s.is_empty()) {
        Some(sku) => sku.to_string(),
        None => format!("#{}", product.id),
    };
    format_product_title(&product.title, &identifier, "", true)
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::evaluator::EntityRef;

    fn entity(id: u64, title: &str) -> RequiredEntity {
        RequiredEntity {
            entity: EntityRef::Product(ProductId(id)),
            title: title.to_string(),
            permalink: None,
        }
    }

    #[test]
    fn singleton_has_no_separators() {
        let merged = merge_titles(
            &[entity(1, "Base Game")],
            Relationship::All,
            TitleStyle::Quoted,
            false,
        );
        assert_eq!(merged, "\"Base Game\"");
    }

    #[test]
    fn two_titles_use_conjunction_only() {
        let entities = [entity(1, "A"), entity(2, "B")];
        assert_eq!(
            merge_titles(&entities, Relationship::Any, TitleStyle::Quoted, false),
            "\"A\" or \"B\""
        );
        assert_eq!(
            merge_titles(&entities, Relationship::All, TitleStyle::Quoted, false),
            "\"A\" and \"B\""
        );
    }

    #[test]
    fn three_titles_use_commas_then_conjunction() {
        let entities = [entity(1, "A"), entity(2, "B"), entity(3, "C")];
        assert_eq!(
            merge_titles(&entities, Relationship::Any, TitleStyle::Quoted, false),
            "\"A\", \"B\" or \"C\""
        );
    }

    #[test]
    fn rtl_reverses_order_keeping_separators() {
        let entities = [entity(1, "A"), entity(2, "B"), entity(3, "C")];
        assert_eq!(
            merge_titles(&entities, Relationship::All, TitleStyle::Quoted, true),
            "\"C\", \"B\" and \"A\""
        );
    }

    #[test]
    fn empty_list_merges_to_empty_string() {
        assert_eq!(
            merge_titles(&[], Relationship::Any, TitleStyle::Quoted, false),
            ""
        );
    }

    #[test]
    fn linked_style_uses_permalink_when_present() {
        let mut linked = entity(1, "Tools & Dies");
        linked.permalink = Some("https://shop.test/tools".to_string());
        assert_eq!(
            render_title(&linked, TitleStyle::Linked),
            "<a href=\"https://shop.test/tools\">Tools &amp; Dies</a>"
        );
        assert_eq!(
            render_title(&entity(2, "Plain"), TitleStyle::Linked),
            "\"Plain\""
        );
    }

    #[test]
    fn linked_style_escapes_unlinked_titles() {
        assert_eq!(
            render_title(&entity(2, "Fish & <Chips>"), TitleStyle::Linked),
            "\"Fish &amp; &lt;Chips&gt;\""
        );
        assert_eq!(
            render_title(&entity(2, "Fish & Chips"), TitleStyle::Quoted),
            "\"Fish & Chips\""
        );
        assert_eq!(quote_title("R&D", TitleStyle::Linked), "\"R&amp;D\"");
    }

    #[test]
    fn product_title_formats() {
        assert_eq!(format_product_title("Mug", "MUG-1", "", true), "Mug (MUG-1)");
        assert_eq!(format_product_title("Mug", "MUG-1", "", false), "MUG-1 – Mug");
        assert_eq!(
            format_product_title("Mug", "MUG-1", "Blue", true),
            "Mug – Blue (MUG-1)"
        );
        assert_eq!(
            format_product_title("Mug", "MUG-1", "Blue", false),
            "MUG-1 – Mug – Blue"
        );
        assert_eq!(format_product_title("Mug", "", "Blue", true), "Mug (Blue)");
        assert_eq!(format_product_title("Mug", "", "", false), "Mug");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let with_sku = Product::new(4, "Mug").with_sku("MUG-1");
        assert_eq!(display_name(&with_sku), "Mug (MUG-1)");
        assert_eq!(display_name(&Product::new(4, "Mug")), "Mug (#4)");
    }
}
