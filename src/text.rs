//! String helpers for turning flag tokens into prose.

/// `ancient-egypt` -> `ancient egypt`
pub fn words(token: &str) -> String {
    token.replace('-', " ")
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `pythagorean-theorem` -> `Pythagorean Theorem`
pub fn title_case(token: &str) -> String {
    words(token)
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Ancient-Egypt` -> `ancient egypt`
pub fn prose(token: &str) -> String {
    words(token).to_lowercase()
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// True when the token can be used as a single path component.
pub fn is_path_safe(token: &str) -> bool {
    !token.is_empty()
        && token != "."
        && token != ".."
        && !token.contains('/')
        && !token.contains('\\')
        && !token.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ancient-egypt"), "Ancient Egypt");
        assert_eq!(title_case("circles"), "Circles");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_prose_is_lower_case() {
        assert_eq!(prose("Islamic-Golden-Age"), "islamic golden age");
    }

    #[test]
    fn test_capitalize_only_first() {
        assert_eq!(capitalize("hexagon"), "Hexagon");
        assert_eq!(capitalize("3d shapes"), "3d shapes");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_path_safe() {
        assert!(is_path_safe("ancient-egypt"));
        assert!(!is_path_safe("../etc"));
        assert!(!is_path_safe(".."));
        assert!(!is_path_safe("a\\b"));
        assert!(!is_path_safe(""));
    }

    #[test]
    fn test_path_safe_rejects_control_characters() {
        assert!(!is_path_safe("x\nalert(document.cookie);"));
        assert!(!is_path_safe("hexagon\r"));
        assert!(!is_path_safe("tab\there"));
    }
}
