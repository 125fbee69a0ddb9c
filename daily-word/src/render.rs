use std::fmt;

const UNDERLINE: &str = "\u{1b}[4m";
const RESET: &str = "\u{1b}[0m";

/// A labeled line of screen text, e.g. ("Definition:", "a fortunate stroke...").
/// The label is underlined when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled {
    pub label: &'static str,
    pub body: String,
}

impl Labeled {
    pub fn new(label: &'static str, body: &str) -> Self {
        Self {
            label,
            body: strip_markup(body),
        }
    }
}

impl fmt::Display for Labeled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{UNDERLINE}{}{RESET} {}", self.label, self.body)
    }
}

/// Drops embedded markup tags from api-supplied text and decodes the handful
/// of entities that show up in it.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                // unbalanced '<', keep it as-is
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_their_text() {
        assert_eq!(
            strip_markup("an <i>unsought</i>, unexpected discovery"),
            "an unsought, unexpected discovery"
        );
        assert_eq!(strip_markup("<xref>chance</xref> finding"), "chance finding");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(strip_markup("salt &amp; light"), "salt & light");
        assert_eq!(strip_markup("&quot;quay&quot;"), "\"quay\"");
    }

    #[test]
    fn keeps_an_unbalanced_angle_bracket() {
        assert_eq!(strip_markup("n < m"), "n < m");
    }

    #[test]
    fn plain_text_passes_through() {
        let text = "the occurrence of events by chance in a happy way";
        assert_eq!(strip_markup(text), text);
    }

    #[test]
    fn labeled_display_underlines_the_label() {
        let line = Labeled::new("Definition:", "a <b>fortunate</b> stroke");
        let rendered = line.to_string();
        assert!(rendered.contains("\u{1b}[4mDefinition:\u{1b}[0m"));
        assert!(rendered.ends_with("a fortunate stroke"));
    }
}
