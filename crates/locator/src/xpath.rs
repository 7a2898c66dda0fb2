//! XPath construction for tag + visible-text locators.

/// Embed `text` as an XPath 1.0 string literal.
///
/// XPath 1.0 has no character escaping inside string literals, so the quote
/// style is chosen from the content: double quotes when the text carries
/// none, single quotes when it carries no single quote, and a `concat()`
/// expression when both kinds are present.
pub fn string_literal(text: &str) -> String {
    if !text.contains('"') {
        return format!("\"{text}\"");
    }
    if !text.contains('\'') {
        return format!("'{text}'");
    }

    // Both quote kinds present: stitch the pieces back with concat(),
    // emitting each double quote as a single-quoted fragment.
    let mut parts = Vec::new();
    for (idx, piece) in text.split('"').enumerate() {
        if idx > 0 {
            parts.push("'\"'".to_string());
        }
        if !piece.is_empty() {
            parts.push(format!("\"{piece}\""));
        }
    }
    format!("concat({})", parts.join(", "))
}

/// Build the XPath query for a tag matched by its normalized visible text.
pub fn visible_text(tag: &str, text: &str, contains: bool) -> String {
    let literal = string_literal(text);
    if contains {
        format!("//{tag}[contains(normalize-space(.), {literal})]")
    } else {
        format!("//{tag}[normalize-space(.)={literal}]")
    }
}
