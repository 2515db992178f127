use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").unwrap();
}

/// Parses the leading numeric prefix of `text`, stopping at the first
/// non-numeric character: "123.45 USD" -> 123.45, "abc" -> None.
/// Locale-insensitive ('.' decimal point only); never yields NaN.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let m = LEADING_NUMBER.find(trimmed)?;
    m.as_str().parse::<f64>().ok()
}

/// Compiles a lookup for the first element whose class attribute contains
/// `css_class`, capturing its text content. Equivalent of a single
/// querySelector(".<class>") against the host page markup.
pub fn class_selector(css_class: &str) -> Result<Regex, regex::Error> {
    let class = regex::escape(css_class);
    // Class tokens are whitespace-separated; "-wrap" suffixed classes must not match.
    Regex::new(&format!(
        r#"<[^>]*class\s*=\s*"(?:[^"]*\s)?{}(?:\s[^"]*)?"[^>]*>([^<]*)<"#,
        class
    ))
}

/// Text content of the first matching element, trimmed.
/// None when the element is absent from the document.
pub fn select_text(selector: &Regex, html: &str) -> Option<String> {
    selector
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}
