//! Statement grammar.
//!
//! Dispatch order: labeled, compound, expression, selection, iteration,
//! jump, null. Dangling-else is resolved for free by the recursive-descent
//! shape: the inner `if`'s own call to this function greedily consumes any
//! `else` before control returns to the outer `if`.

use crate::ast::{ForInit, ForStatement, Statement};
use crate::error::{ParseError, PResult};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn statement(&mut self) -> PResult<Statement<'a>> {
        let pos = self.sc.pos();

        if let Ok(s) = self.labeled_statement() {
            return Ok(s);
        }
        self.sc.set_pos(pos);

        if self.sc.punctuation("{") {
            return self.compound_statement_body();
        }

        if self.sc.punctuation(";") {
            return Ok(Statement::Null);
        }

        if let Ok(s) = self.selection_statement() {
            return Ok(s);
        }
        self.sc.set_pos(pos);

        if let Ok(s) = self.iteration_statement() {
            return Ok(s);
        }
        self.sc.set_pos(pos);

        if let Ok(s) = self.jump_statement() {
            return Ok(s);
        }
        self.sc.set_pos(pos);

        let e = self.expression()?;
        if !self.sc.punctuation(";") {
            self.sc.set_pos(pos);
            return Err(ParseError::Expected(";"));
        }
        Ok(Statement::Expression(e))
    }

    fn labeled_statement(&mut self) -> PResult<Statement<'a>> {
        let pos = self.sc.pos();

        if self.sc.keyword("case") {
            let value = self.constant_expr()?;
            if !self.sc.punctuation(":") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(":"));
            }
            let inner = self.statement()?;
            return Ok(Statement::Case(value, Box::new(inner)));
        }

        if self.sc.keyword("default") {
            if !self.sc.punctuation(":") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(":"));
            }
            let inner = self.statement()?;
            return Ok(Statement::Default(Box::new(inner)));
        }

        if let Some(id) = self.sc.identifier() {
            if self.sc.punctuation(":") {
                let inner = self.statement()?;
                return Ok(Statement::Label(id, Box::new(inner)));
            }
        }

        self.sc.set_pos(pos);
        Err(ParseError::Expected("labeled statement"))
    }

    /// A compound statement's body is a (possibly empty) sequence of
    /// statements. Caller has already consumed `{`.
    fn compound_statement_body(&mut self) -> PResult<Statement<'a>> {
        Ok(Statement::Block(self.block_item_list()?))
    }

    pub(crate) fn block_item_list(&mut self) -> PResult<Vec<Statement<'a>>> {
        let mut items = Vec::new();
        loop {
            if self.sc.punctuation("}") {
                return Ok(items);
            }
            items.push(self.statement()?);
        }
    }

    fn selection_statement(&mut self) -> PResult<Statement<'a>> {
        let pos = self.sc.pos();

        if self.sc.keyword("if") {
            if !self.sc.punctuation("(") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("("));
            }
            let cond = self.expression()?;
            if !self.sc.punctuation(")") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(")"));
            }
            let then_branch = self.statement()?;
            let else_branch = if self.sc.keyword("else") {
                Some(Box::new(self.statement()?))
            } else {
                None
            };
            return Ok(Statement::If(cond, Box::new(then_branch), else_branch));
        }

        if self.sc.keyword("switch") {
            if !self.sc.punctuation("(") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("("));
            }
            let expr = self.expression()?;
            if !self.sc.punctuation(")") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(")"));
            }
            let inner = self.statement()?;
            return Ok(Statement::Switch(expr, Box::new(inner)));
        }

        self.sc.set_pos(pos);
        Err(ParseError::Expected("selection statement"))
    }

    fn iteration_statement(&mut self) -> PResult<Statement<'a>> {
        let pos = self.sc.pos();

        if self.sc.keyword("while") {
            if !self.sc.punctuation("(") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("("));
            }
            let expr = self.expression()?;
            if !self.sc.punctuation(")") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(")"));
            }
            let inner = self.statement()?;
            return Ok(Statement::While(expr, Box::new(inner)));
        }

        if self.sc.keyword("do") {
            let inner = self.statement()?;
            if !self.sc.keyword("while") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("while"));
            }
            if !self.sc.punctuation("(") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("("));
            }
            let expr = self.expression()?;
            if !self.sc.punctuation(")") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(")"));
            }
            if !self.sc.punctuation(";") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(";"));
            }
            return Ok(Statement::DoWhile(Box::new(inner), expr));
        }

        if self.sc.keyword("for") {
            if !self.sc.punctuation("(") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("("));
            }

            let init = self.for_init()?;

            let test = if self.sc.punctuation(";") {
                None
            } else {
                let e = self.expression()?;
                if !self.sc.punctuation(";") {
                    self.sc.set_pos(pos);
                    return Err(ParseError::Expected(";"));
                }
                Some(e)
            };

            let post = if self.sc.punctuation(")") {
                None
            } else {
                let e = self.expression()?;
                if !self.sc.punctuation(")") {
                    self.sc.set_pos(pos);
                    return Err(ParseError::Expected(")"));
                }
                Some(e)
            };

            let body = self.statement()?;
            return Ok(Statement::For(ForStatement {
                init,
                test,
                post,
                body: Box::new(body),
            }));
        }

        self.sc.set_pos(pos);
        Err(ParseError::Expected("iteration statement"))
    }

    /// At most one of (declaration, expression) is present. The
    /// declaration form consumes its own trailing `;`; the expression
    /// form's `;` is consumed by the caller (`iteration_statement`).
    fn for_init(&mut self) -> PResult<Option<ForInit<'a>>> {
        if self.sc.punctuation(";") {
            return Ok(None);
        }
        let pos = self.sc.pos();
        if let Ok(decl) = self.declaration() {
            return Ok(Some(ForInit::Declaration(decl)));
        }
        self.sc.set_pos(pos);
        let e = self.expression()?;
        if !self.sc.punctuation(";") {
            self.sc.set_pos(pos);
            return Err(ParseError::ForInitConflict);
        }
        Ok(Some(ForInit::Expression(e)))
    }

    fn jump_statement(&mut self) -> PResult<Statement<'a>> {
        let pos = self.sc.pos();

        if self.sc.keyword("goto") {
            let id = self.sc.identifier().ok_or(ParseError::Expected("label name"))?;
            if !self.sc.punctuation(";") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(";"));
            }
            return Ok(Statement::Goto(id));
        }

        if self.sc.keyword("continue") {
            if !self.sc.punctuation(";") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(";"));
            }
            return Ok(Statement::Continue);
        }

        if self.sc.keyword("break") {
            if !self.sc.punctuation(";") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(";"));
            }
            return Ok(Statement::Break);
        }

        if self.sc.keyword("return") {
            let expr = if self.sc.punctuation(";") {
                return Ok(Statement::Return(None));
            } else {
                Some(self.expression()?)
            };
            if !self.sc.punctuation(";") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(";"));
            }
            return Ok(Statement::Return(expr));
        }

        self.sc.set_pos(pos);
        Err(ParseError::Expected("jump statement"))
    }
}
