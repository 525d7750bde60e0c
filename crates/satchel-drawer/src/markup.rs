//! # Row Markup
//!
//! Escaping and item-row construction for the items container.
//!
//! All user-supplied text (titles, variant titles, image URLs) passes
//! through [`escape`] before insertion, so a product titled `<b>X</b>`
//! renders as literal text instead of markup.

use satchel_core::{format, LineItem};

/// Variant-title placeholder the platform sends for single-variant products.
/// Rendering it would just repeat the product title.
const DEFAULT_VARIANT_TITLE: &str = "Default Title";

// =============================================================================
// Escaping
// =============================================================================

/// Escapes text for safe insertion into markup (element content or a
/// double-quoted attribute value).
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// =============================================================================
// Item Rows
// =============================================================================

/// Builds the inner markup of one item row.
///
/// Layout mirrors the drawer's stylesheet contract: image (or a placeholder
/// block), title, optional variant sub-line, then the quantity input, remove
/// button, and formatted line price.
pub fn item_row(item: &LineItem, currency: &str) -> String {
    let title = escape(&item.title);

    let image = match item.image.as_deref() {
        Some(src) => std::format!(r#"<img src="{}" alt="{}"/>"#, escape(src), title),
        None => r#"<div class="item-image-placeholder"></div>"#.to_string(),
    };

    let variant_line = match item.variant_title.as_deref() {
        Some(vt) if vt != DEFAULT_VARIANT_TITLE => {
            std::format!(r#"<div class="item-meta">{}</div>"#, escape(vt))
        }
        _ => String::new(),
    };

    let price = format(item.line_total(), currency);

    std::format!(
        concat!(
            "{image}",
            r#"<div class="item-info">"#,
            r#"<div class="item-title">{title}</div>"#,
            "{variant_line}",
            r#"<div class="item-actions">"#,
            r#"<input class="qty-input" type="number" min="0" value="{quantity}" aria-label="Quantity for {title}"/>"#,
            r#"<button class="btn-small remove-item" data-variant-id="{variant_id}" aria-label="Remove {title}">Remove</button>"#,
            r#"<div class="item-price" aria-hidden="true">{price}</div>"#,
            "</div></div>",
        ),
        image = image,
        title = title,
        variant_line = variant_line,
        quantity = item.quantity,
        variant_id = item.variant_id,
        price = price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::{Money, VariantId};

    fn item() -> LineItem {
        LineItem {
            variant_id: VariantId(42),
            key: None,
            quantity: 2,
            price: Money::from_minor(500),
            line_price: None,
            title: "Plain Shirt".to_string(),
            variant_title: None,
            image: None,
        }
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(escape("<b>X</b>"), "&lt;b&gt;X&lt;/b&gt;");
        assert_eq!(escape(r#"a & "b" & 'c'"#), "a &amp; &quot;b&quot; &amp; &#39;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_row_escapes_title() {
        let mut evil = item();
        evil.title = "<b>X</b>".to_string();

        let markup = item_row(&evil, "USD");
        assert!(markup.contains("&lt;b&gt;X&lt;/b&gt;"));
        assert!(!markup.contains("<b>X</b>"));
    }

    #[test]
    fn test_row_derives_line_price() {
        let markup = item_row(&item(), "USD");
        assert!(markup.contains("$10.00")); // 2 × 500 minor units
    }

    #[test]
    fn test_row_uses_placeholder_without_image() {
        let markup = item_row(&item(), "USD");
        assert!(markup.contains("item-image-placeholder"));
        assert!(!markup.contains("<img"));
    }

    #[test]
    fn test_row_includes_image_when_present() {
        let mut with_image = item();
        with_image.image = Some("https://cdn.example/a.jpg".to_string());

        let markup = item_row(&with_image, "USD");
        assert!(markup.contains(r#"<img src="https://cdn.example/a.jpg""#));
        assert!(!markup.contains("item-image-placeholder"));
    }

    #[test]
    fn test_default_variant_title_is_suppressed() {
        let mut default_variant = item();
        default_variant.variant_title = Some(DEFAULT_VARIANT_TITLE.to_string());
        assert!(!item_row(&default_variant, "USD").contains("item-meta"));

        let mut named_variant = item();
        named_variant.variant_title = Some("Medium".to_string());
        let markup = item_row(&named_variant, "USD");
        assert!(markup.contains(r#"<div class="item-meta">Medium</div>"#));
    }

    #[test]
    fn test_quantity_bound_to_input() {
        let markup = item_row(&item(), "USD");
        assert!(markup.contains(r#"value="2""#));
    }
}
