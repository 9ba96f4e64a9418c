//! Expression grammar.
//!
//! Precedence climbing covers the ten binary levels; postfix and the
//! left-recursive productions are iterative seed + suffix extension, per
//! left-recursive productions into loops.

use crate::ast::{ArgumentList, AssignOp, BinaryOp, Expression, TypeName, UnaryOp};
use crate::error::{ParseError, PResult};
use crate::literal;
use crate::parser::Parser;

/// Binary level → (byte-count of punctuator, spelling, op), in the table
/// precedence order (level 1 = highest precedence).
fn level_ops(level: u8) -> &'static [(&'static str, BinaryOp)] {
    match level {
        1 => &[("*", BinaryOp::Mul), ("/", BinaryOp::Div), ("%", BinaryOp::Mod)],
        2 => &[("+", BinaryOp::Add), ("-", BinaryOp::Sub)],
        3 => &[("<<", BinaryOp::Shl), (">>", BinaryOp::Shr)],
        4 => &[("<=", BinaryOp::Le), (">=", BinaryOp::Ge), ("<", BinaryOp::Lt), (">", BinaryOp::Gt)],
        5 => &[("==", BinaryOp::Eq), ("!=", BinaryOp::Neq)],
        6 => &[("&", BinaryOp::BitAnd)],
        7 => &[("^", BinaryOp::BitXor)],
        8 => &[("|", BinaryOp::BitOr)],
        9 => &[("&&", BinaryOp::LogicalAnd)],
        10 => &[("||", BinaryOp::LogicalOr)],
        _ => &[],
    }
}

impl<'a> Parser<'a> {
    /// `identifier | constant | '(' expression ')'`.
    fn primary_expr(&mut self) -> PResult<Expression<'a>> {
        if let Some(id) = self.sc.identifier() {
            return Ok(Expression::Identifier(id));
        }
        if let Some(c) = literal::constant(&mut self.sc)? {
            return Ok(Expression::Constant(c));
        }
        if self.sc.punctuation("(") {
            let e = self.expression()?;
            if self.sc.punctuation(")") {
                return Ok(e);
            }
        }
        Err(ParseError::Expected("primary expression"))
    }

    fn argument_list(&mut self) -> PResult<ArgumentList<'a>> {
        let mut args = vec![self.assignment_expr()?];
        while self.sc.punctuation(",") {
            args.push(self.assignment_expr()?);
        }
        Ok(ArgumentList { args })
    }

    /// Primary, or a compound literal `( type-name ) { ... }`, extended by
    /// repeated postfix suffixes.
    fn postfix_expr(&mut self) -> PResult<Expression<'a>> {
        let start = self.sc.pos();
        let mut seed = if self.sc.punctuation("(") {
            let tn_start = self.sc.pos();
            match self.type_name() {
                Ok(tn) if self.sc.punctuation(")") && self.sc.punctuation("{") => {
                    let list = self.initializer_list()?;
                    self.sc.punctuation(",");
                    if !self.sc.punctuation("}") {
                        self.sc.set_pos(start);
                        return self.postfix_expr_from_primary();
                    }
                    Expression::CompoundLiteral(Box::new(tn), list)
                }
                _ => {
                    self.sc.set_pos(tn_start);
                    self.sc.set_pos(start);
                    return self.postfix_expr_from_primary();
                }
            }
        } else {
            return self.postfix_expr_from_primary();
        };
        loop {
            seed = match self.try_postfix_suffix(seed)? {
                Ok(next) => next,
                Err(back) => return Ok(back),
            };
        }
    }

    fn postfix_expr_from_primary(&mut self) -> PResult<Expression<'a>> {
        let mut seed = self.primary_expr()?;
        loop {
            seed = match self.try_postfix_suffix(seed)? {
                Ok(next) => next,
                Err(back) => return Ok(back),
            };
        }
    }

    fn try_postfix_suffix(&mut self, e: Expression<'a>) -> PResult<Result<Expression<'a>, Expression<'a>>> {
        if self.sc.punctuation("[") {
            let index = self.expression()?;
            if !self.sc.punctuation("]") {
                return Err(ParseError::Expected("]"));
            }
            return Ok(Ok(Expression::Subscript(Box::new(e), Box::new(index))));
        }
        if self.sc.punctuation("(") {
            let args = if self.sc.punctuation(")") {
                None
            } else {
                let args = self.argument_list()?;
                if !self.sc.punctuation(")") {
                    return Err(ParseError::Expected(")"));
                }
                Some(args)
            };
            return Ok(Ok(Expression::Call(Box::new(e), args)));
        }
        if self.sc.punctuation(".") {
            let id = self.sc.identifier().ok_or(ParseError::Expected("member name"))?;
            return Ok(Ok(Expression::Member(Box::new(e), id)));
        }
        if self.sc.punctuation("->") {
            let id = self.sc.identifier().ok_or(ParseError::Expected("member name"))?;
            return Ok(Ok(Expression::MemberDeref(Box::new(e), id)));
        }
        if self.sc.punctuation("++") {
            return Ok(Ok(Expression::Unary(UnaryOp::PostInc, Box::new(e))));
        }
        if self.sc.punctuation("--") {
            return Ok(Ok(Expression::Unary(UnaryOp::PostDec, Box::new(e))));
        }
        Ok(Err(e))
    }

    /// Prefix operators tried highest-to-lowest, then `sizeof`, then a
    /// fall-through to postfix.
    fn unary_expr(&mut self) -> PResult<Expression<'a>> {
        const PREFIX: &[(&str, UnaryOp)] = &[
            ("++", UnaryOp::PreInc),
            ("--", UnaryOp::PreDec),
            ("&", UnaryOp::Address),
            ("*", UnaryOp::Indirection),
            ("+", UnaryOp::Plus),
            ("-", UnaryOp::Minus),
            ("~", UnaryOp::BitNot),
            ("!", UnaryOp::LogicalNot),
        ];
        for (punct, op) in PREFIX {
            if self.sc.punctuation(punct) {
                let inner = self.unary_expr()?;
                return Ok(Expression::Unary(*op, Box::new(inner)));
            }
        }
        if self.sc.keyword("sizeof") {
            let pos = self.sc.pos();
            if self.sc.punctuation("(") {
                if let Ok(tn) = self.type_name() {
                    if self.sc.punctuation(")") {
                        return Ok(Expression::SizeofType(Box::new(tn)));
                    }
                }
                self.sc.set_pos(pos);
            }
            let inner = self.unary_expr()?;
            return Ok(Expression::SizeofExpr(Box::new(inner)));
        }
        self.postfix_expr()
    }

    /// Tries unary before cast, a deliberate simplification preserved from
    /// the algorithm this was ported from (can misparse `(T)-x`).
    fn cast_expr(&mut self) -> PResult<Expression<'a>> {
        let pos = self.sc.pos();
        if let Ok(e) = self.unary_expr() {
            return Ok(e);
        }
        self.sc.set_pos(pos);
        if self.sc.punctuation("(") {
            if let Ok(tn) = self.type_name() {
                if self.sc.punctuation(")") {
                    let inner = self.cast_expr()?;
                    return Ok(Expression::Cast(Box::new(tn), Box::new(inner)));
                }
            }
        }
        self.sc.set_pos(pos);
        Err(ParseError::Expected("cast or unary expression"))
    }

    fn binary_expr(&mut self, level: u8) -> PResult<Expression<'a>> {
        if level == 0 {
            return self.cast_expr();
        }
        let mut lhs = self.binary_expr(level - 1)?;
        loop {
            let ops = level_ops(level);
            let mut matched = false;
            for (punct, op) in ops {
                if self.sc.punctuation(punct) {
                    let rhs = self.binary_expr(level - 1)?;
                    lhs = Expression::Binary(*op, Box::new(lhs), Box::new(rhs));
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Ok(lhs);
            }
        }
    }

    pub fn conditional_expr(&mut self) -> PResult<Expression<'a>> {
        let pos = self.sc.pos();
        match self.conditional_expr_inner() {
            Ok(e) => Ok(e),
            Err(e) => {
                self.sc.set_pos(pos);
                Err(e)
            }
        }
    }

    fn conditional_expr_inner(&mut self) -> PResult<Expression<'a>> {
        let cond = self.binary_expr(10)?;
        if self.sc.punctuation("?") {
            let then_branch = self.expression()?;
            if !self.sc.punctuation(":") {
                return Err(ParseError::Expected(":"));
            }
            let else_branch = self.conditional_expr()?;
            return Ok(Expression::Conditional(Box::new(cond), Box::new(then_branch), Box::new(else_branch)));
        }
        Ok(cond)
    }

    pub fn assignment_expr(&mut self) -> PResult<Expression<'a>> {
        let pos = self.sc.pos();
        const ASSIGN_OPS: &[(&str, AssignOp)] = &[
            ("=", AssignOp::Assign),
            ("*=", AssignOp::Mul),
            ("/=", AssignOp::Div),
            ("%=", AssignOp::Mod),
            ("+=", AssignOp::Add),
            ("-=", AssignOp::Sub),
            ("<<=", AssignOp::Shl),
            (">>=", AssignOp::Shr),
            ("&=", AssignOp::BitAnd),
            ("^=", AssignOp::BitXor),
            ("|=", AssignOp::BitOr),
        ];
        if let Ok(lhs) = self.unary_expr() {
            for (punct, op) in ASSIGN_OPS {
                if self.sc.punctuation(punct) {
                    return match self.assignment_expr() {
                        Ok(rhs) => Ok(Expression::Assignment(*op, Box::new(lhs), Box::new(rhs))),
                        Err(e) => {
                            self.sc.set_pos(pos);
                            Err(e)
                        }
                    };
                }
            }
        }
        self.sc.set_pos(pos);
        self.conditional_expr()
    }

    /// `assignment-expression (',' expression)?`, right-folded.
    pub fn expression(&mut self) -> PResult<Expression<'a>> {
        let pos = self.sc.pos();
        let lhs = self.assignment_expr()?;
        if self.sc.punctuation(",") {
            return match self.expression() {
                Ok(rhs) => Ok(Expression::Binary(BinaryOp::Comma, Box::new(lhs), Box::new(rhs))),
                Err(e) => {
                    self.sc.set_pos(pos);
                    Err(e)
                }
            };
        }
        Ok(lhs)
    }

    pub fn constant_expr(&mut self) -> PResult<Expression<'a>> {
        self.conditional_expr()
    }
}
