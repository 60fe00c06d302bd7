//! Prompt texts and the rules that turn answers into choices.

use core_playback::{PlayerFeature, RendererKind, SourceKind};

pub const SOURCE_PROMPT: &str = "Enter media source (local/stream/api): ";
pub const NAME_PROMPT: &str = "Enter media name: ";
pub const HARDWARE_PROMPT: &str = "Use hardware rendering? (yes/no): ";

/// Prompt offering `feature`.
pub fn feature_prompt(feature: PlayerFeature) -> &'static str {
    match feature {
        PlayerFeature::Subtitles => "Enable subtitles? (yes/no): ",
        PlayerFeature::Equalizer => "Enable equalizer? (yes/no): ",
        PlayerFeature::Watermark => "Enable watermark? (yes/no): ",
    }
}

/// Only an exact, case-insensitive `yes` counts. Surrounding whitespace is
/// kept, so `" yes"` is a no.
pub fn is_affirmative(answer: &str) -> bool {
    eq_ignore_case(answer, "yes")
}

/// Picks the adapter variant by lower-casing the whole answer.
pub fn source_choice(answer: &str) -> SourceKind {
    SourceKind::from_input(answer)
}

/// Whether the proxy demo runs.
///
/// Checked on the raw answer, independently of [`source_choice`]: the two
/// rules disagree on a few non-ASCII spellings such as `"apı"` (dotless i),
/// which selects the local source but still runs the proxy.
pub fn requests_proxy(answer: &str) -> bool {
    eq_ignore_case(answer, "api")
}

/// Char-by-char case-insensitive comparison.
///
/// Two chars match when they are equal, when their upper-case forms are
/// equal, or when the lower-case forms of those are equal. Only single-char
/// case mappings apply, so `'ſ'` matches `'s'` and `'ı'` matches `'i'`.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (simple_upper(x), simple_upper(y));
            ux == uy || simple_lower(ux) == simple_lower(uy)
        })
}

fn simple_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub fn renderer_choice(answer: &str) -> RendererKind {
    RendererKind::from_hardware_choice(is_affirmative(answer))
}

/// Remove the line terminator (`\n` or `\r\n`) and nothing else.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_is_exact_and_case_insensitive() {
        for yes in ["yes", "YES", "Yes", "yEs"] {
            assert!(is_affirmative(yes), "{yes:?} should be affirmative");
        }
        for no in ["no", "y", "yes ", " yes", "yess", "", "true"] {
            assert!(!is_affirmative(no), "{no:?} should not be affirmative");
        }
    }

    #[test]
    fn test_case_folding_beyond_ascii() {
        assert!(is_affirmative("yeſ"));
        assert!(is_affirmative("YEſ"));
        assert!(eq_ignore_case("apı", "api"));
        assert!(!eq_ignore_case("straße", "STRASSE"));
        assert!(!eq_ignore_case("ap", "api"));
    }

    #[test]
    fn test_proxy_rule_is_separate_from_source_choice() {
        assert!(requests_proxy("api"));
        assert!(requests_proxy("API"));
        assert!(!requests_proxy(" api"));
        assert!(!requests_proxy("stream"));

        assert!(requests_proxy("apı"));
        assert_eq!(source_choice("apı"), SourceKind::Local);
    }

    #[test]
    fn test_source_choice_falls_back_to_local() {
        assert_eq!(source_choice("API"), SourceKind::Api);
        assert_eq!(source_choice("Stream"), SourceKind::Stream);
        assert_eq!(source_choice("local"), SourceKind::Local);
        assert_eq!(source_choice("ftp"), SourceKind::Local);
        assert_eq!(source_choice(" api"), SourceKind::Local);
        assert_eq!(source_choice(""), SourceKind::Local);
    }

    #[test]
    fn test_renderer_choice() {
        assert_eq!(renderer_choice("yes"), RendererKind::Hardware);
        assert_eq!(renderer_choice("no"), RendererKind::Software);
        assert_eq!(renderer_choice("maybe"), RendererKind::Software);
    }

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator("song.mp3\n"), "song.mp3");
        assert_eq!(strip_line_terminator("song.mp3\r\n"), "song.mp3");
        assert_eq!(strip_line_terminator("  my song  \n"), "  my song  ");
        assert_eq!(strip_line_terminator("last"), "last");
        assert_eq!(strip_line_terminator("\n"), "");
    }

    #[test]
    fn test_feature_prompts_follow_offer_order() {
        let prompts: Vec<_> = PlayerFeature::ALL.into_iter().map(feature_prompt).collect();
        assert_eq!(
            prompts,
            [
                "Enable subtitles? (yes/no): ",
                "Enable equalizer? (yes/no): ",
                "Enable watermark? (yes/no): ",
            ]
        );
    }
}
