// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive-descent parser for type-name strings.
//!
//! ```text
//! TypeName      := Primary '?'*
//! Primary       := '[' TypeName (':' TypeName)? ']'
//!                | QualifiedName ('<' TypeArgList '>')?
//! QualifiedName := (Identifier '.')* Identifier
//! TypeArgList   := TypeName (',' TypeName)*
//! ```
//!
//! Whitespace between tokens is skipped. The bracket and `?` forms are the
//! shorthand the renderer emits, so rendered output parses back.

use thiserror::Error;

/// Parsed type-name expression. Borrows identifiers from the input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TypeExpr<'a> {
    /// `a.b.Name` or `a.b.Name<args>`.
    Named {
        path: Vec<&'a str>,
        args: Option<GenericArgs<'a>>,
    },
    /// `[T]`.
    ArrayShorthand(Box<TypeExpr<'a>>),
    /// `[K: V]`.
    DictionaryShorthand(Box<TypeExpr<'a>>, Box<TypeExpr<'a>>),
    /// `T?`.
    OptionalShorthand(Box<TypeExpr<'a>>),
}

impl<'a> TypeExpr<'a> {
    /// Last path segment of a named expression.
    pub(crate) fn ident(&self) -> Option<&'a str> {
        match self {
            Self::Named { path, .. } => path.last().copied(),
            _ => None,
        }
    }
}

/// Generic argument list between `<` and `>`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GenericArgs<'a> {
    pub(crate) items: Vec<TypeExpr<'a>>,
}

/// Why a type name failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected {found:?} at byte {pos}")]
    Unexpected { pos: usize, found: char },

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error("trailing input at byte {0}")]
    TrailingInput(usize),
}

/// Characters with structural meaning; never part of an identifier.
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(c, '<' | '>' | ',' | '[' | ']' | '?' | ':' | '.')
}

/// Non-empty run of identifier characters.
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| !is_delimiter(c) && !c.is_whitespace())
}

/// Parse a complete type name.
pub(crate) fn parse(input: &str, max_depth: usize) -> Result<TypeExpr<'_>, ParseError> {
    let mut parser = Parser {
        input,
        pos: 0,
        depth: 0,
        max_depth,
    };
    let expr = parser.parse_type()?;
    parser.skip_whitespace();
    if parser.pos != input.len() {
        return Err(ParseError::TrailingInput(parser.pos));
    }
    Ok(expr)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn expect(&mut self, want: char) -> Result<(), ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == want => {
                self.bump(c);
                Ok(())
            }
            Some(found) => Err(ParseError::Unexpected {
                pos: self.pos,
                found,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_type(&mut self) -> Result<TypeExpr<'a>, ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep(self.max_depth));
        }

        let mut expr = self.parse_primary()?;
        // every `?` is one more nesting level
        let mut suffixes = 0;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('?') => {
                    self.bump('?');
                    suffixes += 1;
                    if self.depth + suffixes > self.max_depth {
                        return Err(ParseError::TooDeep(self.max_depth));
                    }
                    expr = TypeExpr::OptionalShorthand(Box::new(expr));
                }
                _ => break,
            }
        }

        self.depth -= 1;
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<TypeExpr<'a>, ParseError> {
        self.skip_whitespace();
        if self.peek() == Some('[') {
            self.bump('[');
            let element = self.parse_type()?;
            self.skip_whitespace();
            if self.peek() == Some(':') {
                self.bump(':');
                let value = self.parse_type()?;
                self.expect(']')?;
                return Ok(TypeExpr::DictionaryShorthand(
                    Box::new(element),
                    Box::new(value),
                ));
            }
            self.expect(']')?;
            return Ok(TypeExpr::ArrayShorthand(Box::new(element)));
        }

        let path = self.parse_qualified_name()?;
        self.skip_whitespace();
        if self.peek() != Some('<') {
            return Ok(TypeExpr::Named { path, args: None });
        }

        self.bump('<');
        let mut items = vec![self.parse_type()?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump(',');
                    items.push(self.parse_type()?);
                }
                Some('>') => {
                    self.bump('>');
                    break;
                }
                Some(found) => {
                    return Err(ParseError::Unexpected {
                        pos: self.pos,
                        found,
                    })
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }

        Ok(TypeExpr::Named {
            path,
            args: Some(GenericArgs { items }),
        })
    }

    fn parse_qualified_name(&mut self) -> Result<Vec<&'a str>, ParseError> {
        let mut path = vec![self.parse_identifier()?];
        while self.peek() == Some('.') {
            self.bump('.');
            path.push(self.parse_identifier()?);
        }
        Ok(path)
    }

    fn parse_identifier(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_delimiter(c) || c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
        if start == self.pos {
            return match self.peek() {
                Some(found) => Err(ParseError::Unexpected {
                    pos: self.pos,
                    found,
                }),
                None => Err(ParseError::UnexpectedEnd),
            };
        }
        Ok(&self.input[start..self.pos])
    }
}
