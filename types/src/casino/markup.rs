/// Escapes the five HTML metacharacters (`& < > " '`) so user-supplied text can be embedded in
/// markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len().saturating_add(raw.len() / 4));
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
