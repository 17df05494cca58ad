//! Token definitions for the extended DRT surface syntax.
//!
//! The base logic tokens plus `{` and `}` for feature lists. Identifiers may
//! carry a leading `?`, marking grammar binding placeholders.

use crate::parser::ParseError;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("\\")]
    Backslash,
    #[token("->")]
    Imp,
    #[token("|")]
    Or,
    #[token("-")]
    Not,
    #[token("+")]
    Plus,
    #[token("=")]
    Eq,
    #[regex(r"\??[A-Za-z_][A-Za-z0-9_']*")]
    Ident,
}

/// Tokenize the input, keeping the source slice of every token.
pub fn tokenize(input: &str) -> Result<Vec<(Token, &str)>, ParseError> {
    let mut lex = Token::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lex.next() {
        match result {
            Ok(token) => tokens.push((token, lex.slice())),
            Err(()) => {
                return Err(ParseError {
                    message: format!("unexpected character {:?}", lex.slice()),
                    position: tokens.len(),
                })
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brace_tokens() {
        let tokens = tokenize("x{masc,sg}").unwrap();
        let kinds: Vec<Token> = tokens.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Ident,
                Token::OpenBrace,
                Token::Ident,
                Token::Comma,
                Token::Ident,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn arrow_is_not_minus() {
        let tokens = tokenize("a -> -b").unwrap();
        let kinds: Vec<Token> = tokens.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            kinds,
            vec![Token::Ident, Token::Imp, Token::Not, Token::Ident]
        );
    }

    #[test]
    fn placeholder_identifiers() {
        let tokens = tokenize("?n").unwrap();
        assert_eq!(tokens, vec![(Token::Ident, "?n")]);
    }

    #[test]
    fn bad_character_is_reported() {
        let err = tokenize("x & y").unwrap_err();
        assert!(err.message.contains('&'));
    }
}
