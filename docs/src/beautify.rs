//! Whitespace normalization for generated HTML.
//!
//! Every line is trimmed, blank lines are dropped, and lines are re-indented
//! two spaces per open element. Content of `<pre>`, `<script>`, `<style>`
//! and `<textarea>` is copied verbatim. Running the beautifier on its own
//! output returns the same text.

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose content must not be re-indented.
const VERBATIM_ELEMENTS: &[&str] = &["pre", "script", "style", "textarea"];

const INDENT: &str = "  ";

/// Re-indents `html` and returns it with a trailing newline.
#[must_use]
pub fn beautify(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut depth: usize = 0;
    let mut verbatim_until: Option<String> = None;

    for line in html.lines() {
        if let Some(close) = &verbatim_until {
            out.push_str(line);
            out.push('\n');
            if let Some(at) = line.find(close.as_str()) {
                let after = &line[at..];
                let tail = after.find('>').map_or("", |end| &after[end + 1..]);
                let (opens, closes) = count_tags(tail);
                depth = (depth + opens).saturating_sub(closes);
                verbatim_until = None;
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let print_depth = if trimmed.starts_with("</") {
            depth.saturating_sub(1)
        } else {
            depth
        };
        for _ in 0..print_depth {
            out.push_str(INDENT);
        }
        out.push_str(trimmed);
        out.push('\n');

        let (opens, closes) = count_tags(trimmed);
        depth = (depth + opens).saturating_sub(closes);
        if let Some(name) = opens_verbatim(trimmed) {
            // The element closes on a verbatim line, where tags are not counted.
            depth = depth.saturating_sub(1);
            verbatim_until = Some(format!("</{name}"));
        }
    }

    out
}

/// Returns the verbatim element still open at the end of `line`, wherever
/// on the line its start tag sits.
fn opens_verbatim(line: &str) -> Option<&'static str> {
    let mut open: Option<&'static str> = None;
    let mut rest = line;

    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        match (open, rest.strip_prefix('/')) {
            (Some(name), Some(end_tag)) if name.eq_ignore_ascii_case(tag_name(end_tag)) => {
                open = None;
            }
            (None, None) => {
                let name = tag_name(rest);
                open = VERBATIM_ELEMENTS
                    .iter()
                    .copied()
                    .find(|v| v.eq_ignore_ascii_case(name));
            }
            _ => {}
        }
    }

    open
}

/// Reads the tag name at the start of `s` (just after `<` or `</`).
fn tag_name(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(s.len());
    &s[..end]
}

/// Counts non-void start tags and end tags on one line.
fn count_tags(line: &str) -> (usize, usize) {
    let mut opens = 0;
    let mut closes = 0;
    let mut rest = line;

    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        let end = rest.find('>').unwrap_or(rest.len());
        let tag = &rest[..end];
        rest = &rest[end..];

        if tag.starts_with('!') || tag.starts_with('?') {
            continue;
        }
        if let Some(name) = tag.strip_prefix('/') {
            if !tag_name(name).is_empty() {
                closes += 1;
            }
            continue;
        }
        let name = tag_name(tag);
        if name.is_empty() || tag.ends_with('/') {
            continue;
        }
        if !VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name)) {
            opens += 1;
        }
    }

    (opens, closes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reindents_nested_elements() {
        let html = "<html>\n<body>\n\n   <p>text</p>\n<br>\n</body>\n</html>";
        assert_eq!(
            beautify(html),
            "<html>\n  <body>\n    <p>text</p>\n    <br>\n  </body>\n</html>\n"
        );
    }

    #[test]
    fn doctype_and_void_elements_do_not_indent() {
        let html = "<!DOCTYPE html>\n<head>\n<meta charset=\"utf-8\">\n<link rel=\"x\"/>\n</head>";
        assert_eq!(
            beautify(html),
            "<!DOCTYPE html>\n<head>\n  <meta charset=\"utf-8\">\n  <link rel=\"x\"/>\n</head>\n"
        );
    }

    #[test]
    fn preformatted_content_is_verbatim() {
        let html = "<div>\n<pre>\n  keep   this\n</pre>\n</div>";
        assert_eq!(
            beautify(html),
            "<div>\n  <pre>\n  keep   this\n</pre>\n</div>\n"
        );
    }

    #[test]
    fn verbatim_element_may_open_mid_line() {
        let html = "<div>\n<p>Example: <pre>\n  a   b\n</pre></p>\n<p>after</p>\n</div>";
        let expected = "<div>\n  <p>Example: <pre>\n  a   b\n</pre></p>\n  <p>after</p>\n</div>\n";
        assert_eq!(beautify(html), expected);
        assert_eq!(beautify(expected), expected);
    }

    #[test]
    fn verbatim_element_closed_on_its_line_is_ignored() {
        assert_eq!(opens_verbatim("<p><code>x</code> <pre>y</pre></p>"), None);
        assert_eq!(opens_verbatim("<td><script src=\"a.js\">"), Some("script"));
        assert_eq!(opens_verbatim("<p>text</p>"), None);
    }

    #[test]
    fn beautify_is_idempotent() {
        let html = "<table>\n<tr><td>a</td>\n<td>b</td></tr>\n</table>\n<style>\n p { x: y; }\n</style>";
        let once = beautify(html);
        assert_eq!(beautify(&once), once);
    }

    #[test]
    fn counts_tags() {
        assert_eq!(count_tags("<tr><td>a</td>"), (2, 1));
        assert_eq!(count_tags("<!-- note --><br><img src=\"x\"/>"), (0, 0));
    }
}
