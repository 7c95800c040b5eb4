//! Conversions between stylesheet spellings (`border-radius`,
//! `-webkit-transform`) and style declaration spellings (`borderRadius`,
//! `WebkitTransform`).

/// `border-radius` → `borderRadius`.
///
/// Every hyphen followed by an ASCII word character is dropped and the
/// character upper-cased; other hyphens are kept.
pub fn camel_case(css_name: &str) -> String {
    let mut out = String::with_capacity(css_name.len());
    let mut chars = css_name.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && is_word_char(next) => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// `WebkitTransform` → `-webkit-transform`, `msTransform` → `-ms-transform`.
///
/// Every ASCII upper-case letter becomes `-` plus its lower-case form.
/// Microsoft's lower-case prefix gets its leading hyphen restored.
pub fn css_name(dom_name: &str) -> String {
    let mut out = String::with_capacity(dom_name.len() + 4);
    for c in dom_name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
