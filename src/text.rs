// Whitespace as browsers define it for `\s`, `String.prototype.trim` and
// `parseInt`: the ECMAScript WhiteSpace and LineTerminator sets. This
// differs from `char::is_whitespace`, which includes U+0085 and omits U+FEFF.

pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

pub fn trim_start(value: &str) -> &str {
    value.trim_start_matches(is_js_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert!(is_js_whitespace('\u{FEFF}'));
        assert_eq!(trim("\u{FEFF} hi \u{FEFF}"), "hi");
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert!(!is_js_whitespace('\u{0085}'));
        assert_eq!(trim("\u{0085}hi"), "\u{0085}hi");
    }

    #[test]
    fn space_separators_and_line_terminators() {
        for c in &['\t', '\n', '\r', ' ', '\u{00A0}', '\u{2003}', '\u{2028}', '\u{3000}'] {
            assert!(is_js_whitespace(*c), "{:?}", c);
        }
        for c in &['a', '\u{200B}', '\u{180E}', '_'] {
            assert!(!is_js_whitespace(*c), "{:?}", c);
        }
    }

    #[test]
    fn trim_start_keeps_trailing() {
        assert_eq!(trim_start("\u{3000} 42 "), "42 ");
    }
}
