//! Recursive descent parser for the extended DRT surface syntax.
//!
//! Grammar:
//!
//!   expression  → implication
//!   implication → or ('->' implication)?          (right-assoc)
//!   or          → concat ('|' concat)*
//!   concat      → equality ('+' equality)*
//!   equality    → unary ('=' unary)?
//!   unary       → '-' unary | applied
//!   applied     → atom ('(' expression (',' expression)* ')')*
//!   atom        → drs | '(' expression ')' | lambda | name features?
//!   lambda      → '\' name+ '.' expression
//!   drs         → '(' '[' ref (','? ref)* ']' ','? '[' conds ']' ')'
//!   ref         → name features?
//!   features    → '{' name (',' name)* '}'
//!
//! Names that fit the variable convention (see [`crate::symbols`]) or carry
//! a `?` prefix parse as variables; everything else is a constant. A brace
//! list after a constant gives placeholder variables (a
//! [`DrtExpression::FeatureConstant`]); after a referent inside a DRS box it
//! gives literal feature values, making the box a featured DRS.

use crate::drs::{Drs, FeatureMap};
use crate::expr::{Application, DrtExpression};
use crate::lexer::{tokenize, Token};
use crate::symbols::{intern, Variable};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at token {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

/// Parse a complete expression in the extended surface syntax.
pub fn parse(input: &str) -> Result<DrtExpression, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    let expression = parser.parse_expression()?;
    if !parser.at_end() {
        return Err(parser.error("unconsumed input after expression"));
    }
    Ok(expression)
}

struct Parser<'a> {
    tokens: &'a [(Token, &'a str)],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [(Token, &'a str)]) -> Self {
        Self { tokens, pos: 0 }
    }

    // ─── Token inspection ─────────────────────────────────────

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn peek_ahead(&self, offset: usize) -> Option<Token> {
        self.tokens.get(self.pos + offset).map(|(t, _)| *t)
    }

    fn peek_is(&self, token: Token) -> bool {
        self.peek() == Some(token)
    }

    fn advance(&mut self) -> Option<(Token, &'a str)> {
        let t = self.tokens.get(self.pos).copied();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn eat(&mut self, token: Token) -> bool {
        if self.peek_is(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, what: &str) -> Result<(), ParseError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(&format!("expected {what}")))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<&'a str, ParseError> {
        match self.peek() {
            Some(Token::Ident) => {
                let (_, slice) = self.advance().unwrap_or((Token::Ident, ""));
                Ok(slice)
            }
            _ => Err(self.error(&format!("expected {what}"))),
        }
    }

    fn error(&self, message: &str) -> ParseError {
        let message = match self.tokens.get(self.pos) {
            Some((_, slice)) => format!("{message}, found {slice:?}"),
            None => format!("{message}, found end of input"),
        };
        ParseError {
            message,
            position: self.pos,
        }
    }

    // ─── Expression grammar ───────────────────────────────────

    fn parse_expression(&mut self) -> Result<DrtExpression, ParseError> {
        self.parse_implication()
    }

    fn parse_implication(&mut self) -> Result<DrtExpression, ParseError> {
        let left = self.parse_or()?;
        if self.eat(Token::Imp) {
            let right = self.parse_implication()?;
            Ok(DrtExpression::Implication(Box::new(left), Box::new(right)))
        } else {
            Ok(left)
        }
    }

    fn parse_or(&mut self) -> Result<DrtExpression, ParseError> {
        let mut left = self.parse_concatenation()?;
        while self.eat(Token::Or) {
            let right = self.parse_concatenation()?;
            left = DrtExpression::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_concatenation(&mut self) -> Result<DrtExpression, ParseError> {
        let mut left = self.parse_equality()?;
        while self.eat(Token::Plus) {
            let right = self.parse_equality()?;
            left = DrtExpression::Concatenation(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<DrtExpression, ParseError> {
        let left = self.parse_unary()?;
        if self.eat(Token::Eq) {
            let right = self.parse_unary()?;
            Ok(DrtExpression::Equality(Box::new(left), Box::new(right)))
        } else {
            Ok(left)
        }
    }

    fn parse_unary(&mut self) -> Result<DrtExpression, ParseError> {
        if self.eat(Token::Not) {
            let term = self.parse_unary()?;
            Ok(DrtExpression::Negation(Box::new(term)))
        } else {
            self.parse_applied()
        }
    }

    /// An atom followed by any number of argument lists. Multi-argument
    /// lists curry left: `F(a,b)` is `(F(a))(b)`, which is what role
    /// applications rely on.
    fn parse_applied(&mut self) -> Result<DrtExpression, ParseError> {
        let mut expression = self.parse_atom()?;
        while self.peek_is(Token::OpenParen) && self.peek_ahead(1) != Some(Token::OpenBracket) {
            self.advance();
            loop {
                let argument = self.parse_expression()?;
                expression = DrtExpression::Application(Application::new(expression, argument));
                if !self.eat(Token::Comma) {
                    break;
                }
            }
            self.expect(Token::CloseParen, "')' after application arguments")?;
        }
        Ok(expression)
    }

    fn parse_atom(&mut self) -> Result<DrtExpression, ParseError> {
        match self.peek() {
            Some(Token::OpenParen) => {
                if self.peek_ahead(1) == Some(Token::OpenBracket) {
                    self.parse_drs()
                } else {
                    self.advance();
                    let expression = self.parse_expression()?;
                    self.expect(Token::CloseParen, "')'")?;
                    Ok(expression)
                }
            }
            Some(Token::Backslash) => self.parse_lambda(),
            Some(Token::Ident) => {
                let name = self.expect_ident("a name")?;
                let variable = Variable::new(name);
                if variable.kind().is_some() || name.starts_with('?') {
                    Ok(DrtExpression::Variable(variable))
                } else if self.peek_is(Token::OpenBrace) {
                    let placeholders = self
                        .parse_brace_list("feature placeholder")?
                        .into_iter()
                        .map(Variable::new)
                        .collect();
                    Ok(DrtExpression::FeatureConstant {
                        expression: Box::new(DrtExpression::Constant(intern(name))),
                        placeholders,
                    })
                } else {
                    Ok(DrtExpression::Constant(intern(name)))
                }
            }
            _ => Err(self.error("expected an expression")),
        }
    }

    fn parse_lambda(&mut self) -> Result<DrtExpression, ParseError> {
        self.expect(Token::Backslash, "'\\'")?;
        let mut binders = Vec::new();
        while self.peek_is(Token::Ident) {
            let name = self.expect_ident("a bound variable")?;
            binders.push(Variable::new(name));
        }
        if binders.is_empty() {
            return Err(self.error("expected a bound variable after '\\'"));
        }
        self.expect(Token::Dot, "'.' after lambda binders")?;
        let mut body = self.parse_expression()?;
        for binder in binders.into_iter().rev() {
            body = DrtExpression::Lambda(binder, Box::new(body));
        }
        Ok(body)
    }

    /// A DRS box `([refs],[conds])`. A referent may carry a literal feature
    /// list; any feature present makes the box a featured DRS.
    fn parse_drs(&mut self) -> Result<DrtExpression, ParseError> {
        self.expect(Token::OpenParen, "'('")?;
        self.expect(Token::OpenBracket, "'[' opening the referent list")?;
        let mut refs = Vec::new();
        let mut features = FeatureMap::default();
        while !self.peek_is(Token::CloseBracket) {
            // commas between referents are optional
            if !refs.is_empty() {
                self.eat(Token::Comma);
            }
            let name = self.expect_ident("a discourse referent")?;
            let variable = Variable::new(name);
            if self.peek_is(Token::OpenBrace) {
                let values = self.parse_brace_list("feature value")?;
                features.insert(variable, values.iter().map(|v| intern(v)).collect());
            }
            refs.push(variable);
        }
        self.expect(Token::CloseBracket, "']' closing the referent list")?;
        self.eat(Token::Comma);
        self.expect(Token::OpenBracket, "'[' opening the condition list")?;
        let mut conds = Vec::new();
        while !self.peek_is(Token::CloseBracket) {
            if !conds.is_empty() {
                self.eat(Token::Comma);
            }
            conds.push(self.parse_expression()?);
        }
        self.expect(Token::CloseBracket, "']' closing the condition list")?;
        self.expect(Token::CloseParen, "')' closing the DRS")?;
        Ok(DrtExpression::Drs(Drs::with_features(refs, conds, features)))
    }

    /// A `{a,b,c}` list of bare identifiers. The opening brace must already
    /// be next; a missing closing brace is a syntax error.
    fn parse_brace_list(&mut self, what: &str) -> Result<Vec<&'a str>, ParseError> {
        self.expect(Token::OpenBrace, "'{'")?;
        let mut items = Vec::new();
        while !self.peek_is(Token::CloseBrace) {
            if !items.is_empty() {
                self.eat(Token::Comma);
            }
            items.push(self.expect_ident(what)?);
        }
        self.expect(Token::CloseBrace, "'}' closing the feature list")?;
        Ok(items)
    }
}
