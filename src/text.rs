//! Sanitizing extracted page text for the output container.
//!
//! WordprocessingML is XML 1.0, which cannot carry most C0 control
//! characters. Text extraction happily returns them (broken ToUnicode maps,
//! form feeds between text objects), so every page goes through
//! [`sanitize`] before it becomes a paragraph.

use unicode_normalization::UnicodeNormalization;

/// Clean extracted page text.
///
/// - Unicode NFC normalization
/// - CRLF / CR / form feed become `\n`
/// - characters illegal in XML 1.0 are dropped
/// - trailing whitespace is trimmed on every line, and the whole text is trimmed
///
/// Returns an empty string when nothing visible remains.
pub fn sanitize(raw: &str) -> String {
    let normalized: String = raw
        .replace("\r\n", "\n")
        .nfc()
        .filter_map(|c| match c {
            '\r' | '\u{0C}' => Some('\n'),
            c if is_xml_char(c) => Some(c),
            _ => None,
        })
        .collect();

    normalized
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Check if a character is allowed in XML 1.0 content.
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
