//! Number and text formatting shared by every element serializer.

/// Format a float the way JavaScript's number-to-string does: shortest
/// round-trippable decimal, whole numbers without a `.0` suffix, `-0`
/// normalized to `0`. Non-finite input formats as `0`.
pub fn fmt_f64(v: f64) -> String {
    let mut out = String::new();
    fmt_f64_into(&mut out, v);
    out
}

pub fn fmt_f64_into(out: &mut String, mut v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    if v == -0.0 {
        v = 0.0;
    }
    let mut buf = ryu_js::Buffer::new();
    out.push_str(buf.format_finite(v));
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => Some("&amp;"),
            b'<' => Some("&lt;"),
            b'"' => Some("&quot;"),
            b'\'' => Some("&#39;"),
            _ => None,
        };
        let Some(esc) = esc else {
            continue;
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(fmt_f64(5.0), "5");
        assert_eq!(fmt_f64(-3.0), "-3");
    }

    #[test]
    fn negative_zero_normalizes() {
        assert_eq!(fmt_f64(-0.0), "0");
    }

    #[test]
    fn shortest_decimal() {
        assert_eq!(fmt_f64(0.1), "0.1");
        assert_eq!(fmt_f64(2.5), "2.5");
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
