//! Attribute annotation sub-rule
//!
//! Grammar: `{` then zero or more of `#id`, `.class`, `%option`,
//! `key=value` interleaved with whitespace, then `}`. A repeated `#id` keeps
//! the last occurrence; a repeated key overwrites. A token matching none of
//! the alternatives is reported and skipped, so one stray character does not
//! abort the rest of the annotation.

use super::parser::Parser;
use crate::blocks::ast::attributes::Attributes;
use crate::blocks::ast::error::ParseError;
use crate::blocks::token::Token;

impl<'src> Parser<'src> {
    /// Parse an attribute annotation starting at the opening brace.
    pub(super) fn parse_attributes(&mut self) -> Attributes {
        self.bump(); // {

        let mut attributes = Attributes::new();
        loop {
            match self.peek().cloned() {
                // A newline or the end of input inside braces ends the
                // annotation; the brace is the unclosed construct here.
                None | Some(Token::Newline) => {
                    let position = self.cursor_position();
                    self.push_error(ParseError::InvalidAttributeSyntax { position });
                    break;
                }
                Some(Token::RBrace) => {
                    self.bump();
                    break;
                }
                Some(Token::Whitespace) => {
                    self.bump();
                }
                Some(Token::Hash) => {
                    if let Some(Token::Identifier(id)) = self.peek_at(1).cloned() {
                        self.bump();
                        self.bump();
                        attributes.id = Some(id);
                    } else {
                        self.report_and_skip();
                    }
                }
                Some(Token::Dot) => {
                    if let Some(Token::Identifier(class)) = self.peek_at(1).cloned() {
                        self.bump();
                        self.bump();
                        attributes.classes.push(class);
                    } else {
                        self.report_and_skip();
                    }
                }
                Some(Token::Percent) => {
                    if let Some(Token::Identifier(option)) = self.peek_at(1).cloned() {
                        self.bump();
                        self.bump();
                        attributes.options.push(option);
                    } else {
                        self.report_and_skip();
                    }
                }
                Some(Token::Identifier(key)) => {
                    let value = if matches!(self.peek_at(1), Some(Token::Equals)) {
                        match self.peek_at(2).cloned() {
                            Some(Token::Identifier(value)) | Some(Token::StringValue(value)) => {
                                Some(value)
                            }
                            _ => None,
                        }
                    } else {
                        None
                    };

                    match value {
                        Some(value) => {
                            self.bump();
                            self.bump();
                            self.bump();
                            attributes.key_values.insert(key, value);
                        }
                        None => self.report_and_skip(),
                    }
                }
                Some(_) => self.report_and_skip(),
            }
        }

        attributes
    }

    fn report_and_skip(&mut self) {
        let position = self.cursor_position();
        self.push_error(ParseError::InvalidAttributeSyntax { position });
        self.bump();
    }
}
