//! Best-effort repair and structural checking of model-emitted diagram text.
//!
//! The model output is unreliable free text, not a trusted grammar. This is a
//! heuristic patch layer, not a parser: it quotes labels, canonicalizes
//! arrows, and drops dangling edges, and it will fail on valid-but-unusual
//! Mermaid syntax.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Unquoted bracketed node label, e.g. A[Start]. Already-quoted labels keep
// their quotes out of the character class and are left alone.
static UNQUOTED_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\[([^\[\]"]+)\]"#).expect("label pattern is valid"));

// Arrow spacing variants: ->, -- >, --->, and friends.
static ARROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+\s*>").expect("arrow pattern is valid"));

// An edge fragment left hanging at the end of a line.
static DANGLING_EDGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(-{2,}>?|->)\s*$").expect("dangling pattern is valid"));

/// A structural defect found by [`validate`], tied to a 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramIssue {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for DiagramIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Applies the repair transformations in order: HTML-entity escaping of
/// `(){}`, quoting of bracketed labels, arrow canonicalization, and removal
/// of dangling trailing edges. Idempotent on already-sanitized input.
pub fn sanitize(source: &str) -> String {
    let escaped = source
        .replace('(', "&#40;")
        .replace(')', "&#41;")
        .replace('{', "&#123;")
        .replace('}', "&#125;");

    let quoted = UNQUOTED_LABEL_RE.replace_all(&escaped, "[\"$1\"]");
    let arrows = ARROW_RE.replace_all(&quoted, "-->");

    arrows
        .lines()
        .map(|line| DANGLING_EDGE_RE.replace(line, "").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Line-by-line structural scan, independent of [`sanitize`]. Flags arrows
/// with no destination and unclosed node-label brackets.
pub fn validate(source: &str) -> Vec<DiagramIssue> {
    let mut issues = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim_end();

        if let Some(pos) = trimmed.rfind("-->") {
            let mut rest = trimmed[pos + 3..].trim_start();
            // Skip an edge label like -->|Yes| before looking for the target.
            if let Some(after_pipe) = rest.strip_prefix('|') {
                rest = after_pipe
                    .split_once('|')
                    .map(|(_, tail)| tail)
                    .unwrap_or("");
            }
            if rest.trim().is_empty() {
                issues.push(DiagramIssue {
                    line: line_no,
                    message: "arrow has no destination".to_string(),
                });
            }
        }

        let opens = line.matches('[').count();
        let closes = line.matches(']').count();
        if opens != closes {
            issues.push(DiagramIssue {
                line: line_no,
                message: "unclosed node label bracket".to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_parens_and_braces_to_entities() {
        let sanitized = sanitize("A[Process(input)] --> B{Decision}");
        assert!(!sanitized.contains('('));
        assert!(!sanitized.contains('{'));
        assert!(sanitized.contains("&#40;input&#41;"));
        assert!(sanitized.contains("&#123;"));
    }

    #[test]
    fn quotes_unquoted_labels_only() {
        let sanitized = sanitize("graph TD\n    A[Start] --> B[\"Done\"]");
        assert!(sanitized.contains("A[\"Start\"]"));
        assert!(sanitized.contains("B[\"Done\"]"));
        assert!(!sanitized.contains("[\"\"Done\"\"]"));
    }

    #[test]
    fn canonicalizes_arrow_variants() {
        assert_eq!(sanitize("A -- > B"), "A --> B");
        assert_eq!(sanitize("A ---> B"), "A --> B");
        assert_eq!(sanitize("A -> B"), "A --> B");
    }

    #[test]
    fn strips_dangling_trailing_edges() {
        let sanitized = sanitize("graph TD\n    A[Start] -->\n    B[End] --");
        assert!(sanitized.contains("A[\"Start\"]"));
        assert!(!sanitized.contains("-->\n"));
        assert!(!sanitized.ends_with("--"));
    }

    #[test]
    fn sanitize_is_idempotent_on_well_formed_input() {
        let well_formed = "graph TD\n    A[\"Start\"] --> B[\"Process&#40;input&#41;\"]\n    B -->|Yes| C[\"Done\"]";
        let once = sanitize(well_formed);
        assert_eq!(once, well_formed);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_converges_after_one_pass() {
        let messy = "graph TD\n    A[Start(x)] -- > B{Choice}\n    B -->";
        let once = sanitize(messy);
        let twice = sanitize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn validate_flags_arrow_without_destination() {
        let issues = validate("graph TD\n    A[\"Start\"] -->");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
        assert_eq!(issues[0].to_string(), "line 2: arrow has no destination");
    }

    #[test]
    fn validate_accepts_labeled_edges() {
        let issues = validate("A -->|Yes| B");
        assert!(issues.is_empty());

        let issues = validate("A -->|Yes|");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn validate_flags_unclosed_brackets() {
        let issues = validate("graph TD\n    X[Unclosed label --> Y");
        assert!(issues
            .iter()
            .any(|i| i.line == 2 && i.message.contains("unclosed node label bracket")));
    }

    #[test]
    fn validate_passes_well_formed_diagrams() {
        let source = "graph TD\n    A[\"Start\"] --> B[\"End\"]\n    B -->|No| A";
        assert!(validate(source).is_empty());
    }
}
