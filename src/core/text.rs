use std::fmt::Write as _;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
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

/// Same character set as JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        let keep = b.is_ascii_alphanumeric()
            || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if keep {
            out.push(b as char);
        } else {
            _ = write!(out, "%{b:02X}");
        }
    }
    out
}

/// Escaped HTML with `**bold**` spans as `<strong>` and newlines as `<br>`.
/// An unmatched `**` is kept literally.
pub fn rich_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 16);
    let mut rest = s;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        push_lines(&mut out, &rest[..open]);
        out.push_str("<strong>");
        push_lines(&mut out, &after[..close]);
        out.push_str("</strong>");
        rest = &after[close + 2..];
    }
    push_lines(&mut out, rest);
    out
}

fn push_lines(out: &mut String, s: &str) {
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        out.push_str(&escape_html(line));
    }
}

#[inline]
pub fn is_design_doc(name: &str) -> bool {
    matches!(name, "gdd" | "conceptGdd" | "gameGdd")
}

/// Button label for a named project link.
pub fn link_label(name: &str) -> String {
    match name {
        "gdd" => "View Full Game Design Document".to_string(),
        "conceptGdd" => "View Concept & Research GDD".to_string(),
        "gameGdd" => "View Game Systems GDD".to_string(),
        _ => {
            let mut out = String::with_capacity(name.len() + 4);
            for (i, c) in name.chars().enumerate() {
                if i == 0 {
                    out.extend(c.to_uppercase());
                } else if c.is_uppercase() {
                    out.push(' ');
                    out.push(c);
                } else {
                    out.push(c);
                }
            }
            out
        }
    }
}

/// Placeholder image used when a real image fails to load.
///
/// The URL is dropped into a single-quoted `onerror` script, so `'` is
/// percent-encoded as well.
pub fn placeholder_url(width: u32, height: u32, text: &str) -> String {
    format!(
        "https://via.placeholder.com/{width}x{height}/1a1a2e/ff7849?text={}",
        encode_uri_component(text).replace('\'', "%27")
    )
}

#[inline]
pub fn is_absolute_url(path: &str) -> bool {
    path.contains("://") || path.starts_with("//") || path.starts_with('/')
}

/// Resolve a catalog-relative path against the site base (which ends in `/`).
pub fn resolve_asset(base: &str, path: &str) -> String {
    if path.is_empty() || is_absolute_url(path) {
        path.to_string()
    } else {
        format!("{base}{path}")
    }
}

#[inline]
pub fn is_embedded_video(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}
