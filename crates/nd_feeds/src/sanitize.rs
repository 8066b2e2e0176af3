//! Text hygiene for fields sourced from rich content. Feed descriptions
//! usually arrive as entity-encoded HTML fragments, so decoding runs before
//! tag stripping.

/// Decode, strip markup, and collapse whitespace. An empty result is `None`,
/// never an empty string.
pub fn clean_text(input: &str) -> Option<String> {
    let decoded = decode_entities(input);
    let stripped = strip_tags(&decoded);
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// `clean_text` plus removal of a trailing bracketed annotation, the
/// `[+N chars]` truncation marker style that APIs append to body text.
pub fn clean_body_text(input: &str) -> Option<String> {
    clean_text(strip_trailing_marker(input))
}

pub fn strip_trailing_marker(input: &str) -> &str {
    let trimmed = input.trim_end();
    if trimmed.ends_with(']') {
        if let Some(open) = trimmed.rfind('[') {
            return input[..open].trim_end();
        }
    }
    input
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        // An entity reference is short; anything longer is a bare ampersand.
        match tail.find(';') {
            Some(end) if end <= 10 => {
                if let Some(decoded) = decode_entity(&tail[1..end]) {
                    out.push(decoded);
                    rest = &tail[end + 1..];
                    continue;
                }
                out.push('&');
                rest = &tail[1..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ldquo" => Some('\u{201C}'),
        "rdquo" => Some('\u{201D}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "hellip" => Some('\u{2026}'),
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_entities() {
        assert_eq!(
            clean_text("<p>Ministers &amp; members</p>").as_deref(),
            Some("Ministers & members")
        );
        assert_eq!(
            clean_text("&lt;p&gt;Encoded fragment&lt;/p&gt;").as_deref(),
            Some("Encoded fragment")
        );
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(clean_text("It&#39;s done").as_deref(), Some("It's done"));
        assert_eq!(clean_text("It&#x27;s done").as_deref(), Some("It's done"));
        assert_eq!(
            clean_text("Heat &#8211; and light").as_deref(),
            Some("Heat \u{2013} and light")
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            clean_text("  spread \n\t across   lines ").as_deref(),
            Some("spread across lines")
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        // Sanitization is idempotent on already-plain text.
        let plain = "Local elections update: counting continues";
        assert_eq!(clean_text(plain).as_deref(), Some(plain));
        let once = clean_text(plain).unwrap();
        assert_eq!(clean_text(&once).as_deref(), Some(plain));
    }

    #[test]
    fn test_bare_ampersand_kept() {
        assert_eq!(clean_text("law & order").as_deref(), Some("law & order"));
        assert_eq!(clean_text("AT&T results").as_deref(), Some("AT&T results"));
    }

    #[test]
    fn test_empty_after_strip_is_none() {
        assert_eq!(clean_text("<div><img src='x'/></div>"), None);
        assert_eq!(clean_text("   "), None);
        assert_eq!(clean_text(""), None);
    }

    #[test]
    fn test_trailing_marker_removed() {
        assert_eq!(
            clean_body_text("The session closed on Friday… [+2100 chars]").as_deref(),
            Some("The session closed on Friday\u{2026}")
        );
        assert_eq!(
            strip_trailing_marker("Plain body with no marker"),
            "Plain body with no marker"
        );
        // Brackets mid-text are content, not a marker
        assert_eq!(
            strip_trailing_marker("A [sic] quote and more"),
            "A [sic] quote and more"
        );
    }
}
