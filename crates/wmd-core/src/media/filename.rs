//! Listing titles into safe local filenames.

/// Characters stripped from filenames: illegal on at least one supported
/// filesystem, and `/`/`\` would escape the output directory.
const ILLEGAL: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Fallback when sanitization leaves nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Turn a raw `title` attribute value into a safe local filename.
///
/// - strips a leading `File:` namespace prefix
/// - decodes numeric (`&#78;`) and named (`&amp;`) HTML entities
/// - removes the illegal character set and control characters
/// - trims leading/trailing dots and spaces, caps at 255 bytes (NAME_MAX)
/// - falls back to a fixed name if nothing survives
pub fn sanitize_title(raw: &str) -> String {
    const NAME_MAX: usize = 255;

    let name = raw.strip_prefix("File:").unwrap_or(raw);
    let decoded = html_escape::decode_html_entities(name);

    let mut out = String::with_capacity(decoded.len());
    for c in decoded.chars() {
        if ILLEGAL.contains(&c) || c.is_control() {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');

    let capped = if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        &trimmed[..take]
    } else {
        trimmed
    };

    if capped.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        capped.to_string()
    }
}
