//! External declarations and the translation unit.

use crate::ast::{ExternalDeclaration, FunctionDefinition, TranslationUnit};
use crate::error::{ParseError, PResult};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    fn function_definition(&mut self) -> PResult<FunctionDefinition<'a>> {
        let pos = self.sc.pos();
        let specifiers = self.declaration_specifiers()?;
        let declarator = match self.declarator() {
            Ok(d) if !d.is_abstract() => d,
            _ => {
                self.sc.set_pos(pos);
                return Err(ParseError::WrongDeclaratorShape("concrete"));
            }
        };

        let mut knr_declarations = Vec::new();
        while let Ok(d) = self.declaration() {
            knr_declarations.push(d);
        }

        if !self.sc.punctuation("{") {
            self.sc.set_pos(pos);
            return Err(ParseError::Expected("{"));
        }
        let body = self.block_item_list()?;

        Ok(FunctionDefinition { specifiers, declarator, knr_declarations, body })
    }

    fn external_declaration(&mut self) -> PResult<ExternalDeclaration<'a>> {
        let pos = self.sc.pos();
        if let Ok(def) = self.function_definition() {
            return Ok(ExternalDeclaration::FunctionDefinition(def));
        }
        self.sc.set_pos(pos);
        let decl = self.declaration()?;
        Ok(ExternalDeclaration::Declaration(decl))
    }

    pub fn translation_unit(&mut self) -> PResult<TranslationUnit<'a>> {
        let mut items = vec![self.external_declaration()?];
        loop {
            self.sc.skip_whitespace();
            if self.sc.at_clean_end() {
                break;
            }
            items.push(self.external_declaration()?);
        }
        Ok(TranslationUnit { items })
    }
}
