//! Plain-text rendering of issues and their discussion threads.
//!
//! Only issue number and title are emitted verbatim; bodies are normalized
//! (`\r\n` to `\n`, trailing whitespace trimmed).

use std::fmt::Write as _;
use std::io;

use crate::ports::{Author, Comment, Issue};

/// Opens and closes the issue header.
pub const ISSUE_RULE: &str =
    "================================================================================";
/// Precedes each comment.
pub const COMMENT_RULE: &str =
    "--------------------------------------------------------------------------------";
/// Shown when an issue or comment has no author.
pub const UNKNOWN_AUTHOR: &str = "unknown";
/// Shown when an issue body is missing or blank.
pub const NO_DESCRIPTION: &str = "(No description provided)";
/// Shown when a comment body is missing or blank.
pub const NO_CONTENT: &str = "(No content)";
/// Shown under the discussion header when there are no comments.
pub const NO_COMMENTS: &str = "(No comments)";

/// Renders one issue block, ending with a blank line.
///
/// Number and title are emitted verbatim. Bodies have `\r\n` folded to `\n`
/// and trailing whitespace trimmed; blank bodies get a placeholder.
#[must_use]
pub fn render_issue(issue: &Issue, comments: &[Comment]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{ISSUE_RULE}");
    let _ = writeln!(out, "ISSUE #{}: {}", issue.number, issue.title);
    let _ = writeln!(out, "{ISSUE_RULE}");
    let _ = writeln!(out, "State: {}", issue.state);
    let _ = writeln!(out, "Author: {}", author_name(issue.author.as_ref()));
    let _ = writeln!(out, "Created: {}", issue.created_at);
    let _ = writeln!(out, "URL: {}", issue.url);
    out.push('\n');

    let _ = writeln!(out, "DESCRIPTION:");
    let _ = writeln!(out, "{}", text_or(issue.body.as_deref(), NO_DESCRIPTION));
    out.push('\n');

    let _ = writeln!(out, "DISCUSSION ({}):", comment_count(comments.len()));
    if comments.is_empty() {
        let _ = writeln!(out, "{NO_COMMENTS}");
    }
    for comment in comments {
        let _ = writeln!(out, "{COMMENT_RULE}");
        let _ = writeln!(
            out,
            "Comment by {} on {}:",
            author_name(comment.author.as_ref()),
            comment.created_at
        );
        let _ = writeln!(out, "{}", text_or(comment.body.as_deref(), NO_CONTENT));
    }
    out.push('\n');

    out
}

/// Writes one rendered issue block to `out`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_issue<W: io::Write>(
    out: &mut W,
    issue: &Issue,
    comments: &[Comment],
) -> io::Result<()> {
    out.write_all(render_issue(issue, comments).as_bytes())
}

fn author_name(author: Option<&Author>) -> &str {
    author.map(|a| a.login.as_str()).filter(|login| !login.is_empty()).unwrap_or(UNKNOWN_AUTHOR)
}

fn text_or(body: Option<&str>, placeholder: &str) -> String {
    match body {
        Some(text) if !text.trim().is_empty() => text.replace("\r\n", "\n").trim_end().to_string(),
        _ => placeholder.to_string(),
    }
}

fn comment_count(n: usize) -> String {
    if n == 1 {
        "1 comment".to_string()
    } else {
        format!("{n} comments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(body: Option<&str>, author: Option<&str>) -> Issue {
        Issue {
            number: 42,
            title: "Parser drops: trailing \"quotes\"".into(),
            state: "OPEN".into(),
            author: author.map(|login| Author { login: login.into() }),
            created_at: "2024-03-01T12:00:00Z".into(),
            url: "https://github.com/acme/widgets/issues/42".into(),
            body: body.map(Into::into),
        }
    }

    fn comment(author: Option<&str>, body: Option<&str>) -> Comment {
        Comment {
            author: author.map(|login| Author { login: login.into() }),
            created_at: "2024-03-02T08:30:00Z".into(),
            body: body.map(Into::into),
        }
    }

    #[test]
    fn renders_full_block() {
        let rendered = render_issue(
            &issue(Some("Steps:\r\n1. parse\r\n"), Some("alice")),
            &[comment(Some("bob"), Some("Confirmed.")), comment(None, Some("  "))],
        );

        let expected = format!(
            "{ISSUE_RULE}\n\
             ISSUE #42: Parser drops: trailing \"quotes\"\n\
             {ISSUE_RULE}\n\
             State: OPEN\n\
             Author: alice\n\
             Created: 2024-03-01T12:00:00Z\n\
             URL: https://github.com/acme/widgets/issues/42\n\
             \n\
             DESCRIPTION:\n\
             Steps:\n\
             1. parse\n\
             \n\
             DISCUSSION (2 comments):\n\
             {COMMENT_RULE}\n\
             Comment by bob on 2024-03-02T08:30:00Z:\n\
             Confirmed.\n\
             {COMMENT_RULE}\n\
             Comment by unknown on 2024-03-02T08:30:00Z:\n\
             (No content)\n\
             \n"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn issue_placeholders_are_independent_of_comments() {
        let rendered = render_issue(&issue(None, None), &[comment(Some("bob"), Some("hi"))]);
        assert!(rendered.contains("Author: unknown\n"));
        assert!(rendered.contains(&format!("DESCRIPTION:\n{NO_DESCRIPTION}\n")));
        assert!(rendered.contains("Comment by bob on"));
        assert!(rendered.contains("\nhi\n"));
    }

    #[test]
    fn blank_issue_body_uses_placeholder() {
        let rendered = render_issue(&issue(Some(" \r\n"), Some("alice")), &[]);
        assert!(rendered.contains(NO_DESCRIPTION));
    }

    #[test]
    fn empty_login_counts_as_missing_author() {
        let rendered = render_issue(&issue(Some("x"), Some("")), &[]);
        assert!(rendered.contains("Author: unknown\n"));
    }

    #[test]
    fn no_comments_gets_explicit_marker() {
        let rendered = render_issue(&issue(Some("x"), Some("alice")), &[]);
        assert!(rendered.contains(&format!("DISCUSSION (0 comments):\n{NO_COMMENTS}\n")));
        assert!(!rendered.contains(COMMENT_RULE));
    }

    #[test]
    fn reported_count_matches_emitted_comments() {
        for n in 0..4 {
            let comments: Vec<Comment> =
                (0..n).map(|i| comment(Some("bob"), Some(&format!("c{i}")))).collect();
            let rendered = render_issue(&issue(Some("x"), Some("alice")), &comments);
            assert_eq!(rendered.matches("Comment by ").count(), n);
            assert_eq!(rendered.matches(COMMENT_RULE).count(), n);
            let label = if n == 1 { "1 comment".to_string() } else { format!("{n} comments") };
            assert!(rendered.contains(&format!("DISCUSSION ({label}):")));
        }
    }

    #[test]
    fn write_issue_emits_rendered_block() {
        let mut buf = Vec::new();
        let issue = issue(Some("x"), Some("alice"));
        write_issue(&mut buf, &issue, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_issue(&issue, &[]));
    }
}
