//! Message text sanitation.
//!
//! Chat messages arrive with markup spans (`<@12345>` mentions, `<:emote:99>`
//! custom emoji, stray HTML) and arbitrary whitespace. The vocabulary was
//! built from plain lowercase words, so everything bracketed is stripped
//! before tokenization.

/// Strip angle-bracketed spans and normalize whitespace.
///
/// Removes every `<...>` span (from a `<` up to the next `>`; an unmatched
/// `<` and the text after it are kept as-is), then collapses any run of
/// whitespace to a single space and trims both ends.
///
/// Idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('<') {
        stripped.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // Unmatched bracket: keep the tail verbatim.
                stripped.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    stripped.push_str(rest);

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        assert_eq!(sanitize("  <b>hello</b>   world  "), "hello world");
    }

    #[test]
    fn strips_mentions_and_emoji() {
        assert_eq!(
            sanitize("<@138495> what pokemon is <:rotom:551> this"),
            "what pokemon is this"
        );
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(sanitize("electric mouse"), "electric mouse");
    }

    #[test]
    fn collapses_tabs_and_newlines() {
        assert_eq!(sanitize("a\t\tb\n\nc"), "a b c");
    }

    #[test]
    fn unmatched_bracket_kept() {
        assert_eq!(sanitize("1 < 2 stats"), "1 < 2 stats");
    }

    #[test]
    fn empty_and_tag_only_inputs() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("<i></i>"), "");
    }

    #[test]
    fn idempotent() {
        for raw in [
            "  <b>hello</b>   world  ",
            "1 < 2 stats",
            "plain",
            "<a><b>nested <c> spans</b>",
            "",
        ] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
