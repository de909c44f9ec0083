//! Turn-management directives embedded in generated output.
//!
//! The judge's generated text may contain a machine-readable line of
//! the form `TURN_MANAGEMENT: <role>` naming the next speaker. Parsing
//! is best-effort and never fails: matching lines are always stripped
//! from the stored content, and an unrecognized role token simply
//! yields no override.

use crate::role::CourtRole;
use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*TURN_MANAGEMENT:[ \t]*(\S+)[ \t]*$").unwrap());

/// Result of scanning generated content for a turn directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDirective {
    /// Content with all directive lines removed.
    pub content: String,
    /// The directed role, when the first directive line carried a
    /// recognized role token.
    pub directed: Option<CourtRole>,
}

/// Scans `content` for `TURN_MANAGEMENT` lines.
///
/// The first directive line determines the directed role; every line
/// matching the generic pattern is stripped regardless of whether its
/// token was recognized. Nothing else is touched: content without a
/// directive passes through byte-identical.
pub fn parse(content: &str) -> ParsedDirective {
    if !DIRECTIVE_RE.is_match(content) {
        return ParsedDirective {
            content: content.to_string(),
            directed: None,
        };
    }

    let directed = DIRECTIVE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|token| CourtRole::parse(token.as_str()).ok());

    let content = content
        .lines()
        .filter(|line| !DIRECTIVE_RE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n");

    ParsedDirective { content, directed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_content_passes_through() {
        let parsed = parse("Objection sustained. Counsel, move on.");
        assert_eq!(parsed.content, "Objection sustained. Counsel, move on.");
        assert_eq!(parsed.directed, None);
    }

    #[test]
    fn directive_is_parsed_and_stripped() {
        let parsed = parse("The court calls the witness.\nTURN_MANAGEMENT: witness");
        assert_eq!(parsed.content, "The court calls the witness.");
        assert_eq!(parsed.directed, Some(CourtRole::Witness));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let parsed = parse("Proceed.\nturn_management: Defense");
        assert_eq!(parsed.content, "Proceed.");
        assert_eq!(parsed.directed, Some(CourtRole::Defense));
    }

    #[test]
    fn unrecognized_token_is_stripped_without_an_override() {
        let parsed = parse("Order in the court.\nTURN_MANAGEMENT: bailiff");
        assert_eq!(parsed.content, "Order in the court.");
        assert_eq!(parsed.directed, None);
    }

    #[test]
    fn directive_in_the_middle_of_the_text_is_removed() {
        let parsed = parse("Counsel may proceed.\nTURN_MANAGEMENT: prosecutor\nThank you.");
        assert_eq!(parsed.content, "Counsel may proceed.\nThank you.");
        assert_eq!(parsed.directed, Some(CourtRole::Prosecutor));
    }

    #[test]
    fn blank_lines_survive_when_no_directive_is_present() {
        let text = "First paragraph.\n\nSecond paragraph.";
        let parsed = parse(text);
        assert_eq!(parsed.content, text);
        assert_eq!(parsed.directed, None);
    }

    #[test]
    fn stripping_a_directive_preserves_paragraph_structure() {
        let parsed = parse("Ruling follows.\n\nObjection overruled.\nTURN_MANAGEMENT: jury");
        assert_eq!(parsed.content, "Ruling follows.\n\nObjection overruled.");
        assert_eq!(parsed.directed, Some(CourtRole::Jury));
    }

    #[test]
    fn inline_mention_is_not_a_directive() {
        let parsed = parse("I noted TURN_MANAGEMENT: jury in the margin earlier.");
        assert_eq!(
            parsed.content,
            "I noted TURN_MANAGEMENT: jury in the margin earlier."
        );
        assert_eq!(parsed.directed, None);
    }
}
