//! Reserved keyword resolution.
//!
//! Every reserved word is always a keyword; there are no context-sensitive
//! identifiers. The lookup uses the identifier's length as a first-pass
//! filter (keywords range from 2-6 chars), then matches against the specific
//! keywords of that length. Longest-match concerns do not arise: the scanner
//! has already consumed the maximal identifier run before calling in.

use hearth_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a reserved keyword,
/// `None` if it's a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 2-6 chars
    if !(2..=6).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keywords_resolve() {
        let table = [
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("for", TokenKind::For),
            ("fun", TokenKind::Fun),
            ("if", TokenKind::If),
            ("nil", TokenKind::Nil),
            ("or", TokenKind::Or),
            ("print", TokenKind::Print),
            ("return", TokenKind::Return),
            ("super", TokenKind::Super),
            ("this", TokenKind::This),
            ("true", TokenKind::True),
            ("var", TokenKind::Var),
            ("while", TokenKind::While),
        ];
        for (text, kind) in table {
            assert_eq!(lookup(text), Some(kind), "{text}");
        }
    }

    #[test]
    fn prefixes_and_extensions_are_identifiers() {
        for text in ["f", "fo", "form", "classy", "variable", "printer", "nils"] {
            assert_eq!(lookup(text), None, "{text}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("Var"), None);
        assert_eq!(lookup("TRUE"), None);
    }
}
