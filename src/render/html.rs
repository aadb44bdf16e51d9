//! Small HTML building blocks shared by the page and editor renderers.
//!
//! Markup is assembled as plain strings. All document text passes through
//! [`esc`] on the way out; values are never validated before render, an
//! empty field simply renders empty.

/// Escape text for HTML element and attribute positions.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<input type="hidden">` with an escaped value.
pub fn write_hidden(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        esc(name),
        esc(value)
    ));
}

/// A one-button POST form. The idiom every page action uses.
pub fn write_action_button(out: &mut String, action: &str, class: &str, label: &str) {
    out.push_str(&format!(
        r#"<form method="post" action="{action}"><button class="{class}" type="submit">{label}</button></form>"#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esc_replaces_special_characters() {
        assert_eq!(esc(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(esc("it's"), "it&#39;s");
        assert_eq!(esc("plain"), "plain");
    }

    #[test]
    fn test_hidden_input_escapes_value() {
        let mut out = String::new();
        write_hidden(&mut out, "key", r#"a"b"#);
        assert_eq!(out, r#"<input type="hidden" name="key" value="a&quot;b">"#);
    }

    #[test]
    fn test_action_button_shape() {
        let mut out = String::new();
        write_action_button(&mut out, "/cart/add", "buy", "Select Options");
        assert!(out.starts_with(r#"<form method="post" action="/cart/add">"#));
        assert!(out.contains(r#"<button class="buy" type="submit">Select Options</button>"#));
    }
}
