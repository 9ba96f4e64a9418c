//! The `Parser` type that threads a [`Scanner`] through every production.
//!
//! Grammar methods live in `expr.rs`, `decl.rs`, `stmt.rs` and `unit.rs` as
//! separate `impl<'a> Parser<'a>` blocks; this file only owns the struct and
//! the handful of entry points consumers call.

use crate::ast::{Declaration, Expression, Statement, TranslationUnit};
use crate::error::{ParseError, PResult};
use crate::scanner::Scanner;

pub struct Parser<'a> {
    pub(crate) sc: Scanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Parser { sc: Scanner::new(input) }
    }

    fn finish<T>(&mut self, value: T) -> PResult<T> {
        if self.sc.at_clean_end() {
            Ok(value)
        } else {
            Err(ParseError::TrailingInput)
        }
    }

    pub fn parse_expression(input: &'a [u8]) -> PResult<Expression<'a>> {
        log::debug!("parse_expression: {} bytes", input.len());
        let mut p = Parser::new(input);
        let e = p.expression()?;
        let result = p.finish(e);
        log::debug!("parse_expression: {}", if result.is_ok() { "ok" } else { "failed" });
        result
    }

    pub fn parse_statement(input: &'a [u8]) -> PResult<Statement<'a>> {
        log::debug!("parse_statement: {} bytes", input.len());
        let mut p = Parser::new(input);
        let s = p.statement()?;
        let result = p.finish(s);
        log::debug!("parse_statement: {}", if result.is_ok() { "ok" } else { "failed" });
        result
    }

    pub fn parse_declaration(input: &'a [u8]) -> PResult<Declaration<'a>> {
        log::debug!("parse_declaration: {} bytes", input.len());
        let mut p = Parser::new(input);
        let d = p.declaration()?;
        let result = p.finish(d);
        log::debug!("parse_declaration: {}", if result.is_ok() { "ok" } else { "failed" });
        result
    }

    pub fn parse_translation_unit(input: &'a [u8]) -> PResult<TranslationUnit<'a>> {
        log::debug!("parse_translation_unit: {} bytes", input.len());
        let mut p = Parser::new(input);
        let tu = p.translation_unit()?;
        let result = p.finish(tu);
        log::debug!(
            "parse_translation_unit: {}",
            if result.is_ok() { "ok" } else { "failed" }
        );
        result
    }
}
