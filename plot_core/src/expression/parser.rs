//! Recursive-descent parser from tokens to [`Expr`].
//!
//! One method per grammar rule; see the module docs of
//! [`crate::expression`] for the grammar.

use super::lexer::{Token, TokenKind};
use super::{BinaryOp, Expr, ExpressionError};

/// Deepest bracket, sign or exponent nesting the parser follows
pub const MAX_NESTING: usize = 256;

/// Deepest tree the parser builds (long `+`/`*` chains count one level per operator)
pub const MAX_DEPTH: usize = 1024;

/// A parsed subtree and its depth
type Parsed = (Expr, usize);

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, nesting: 0 }
    }

    /// Parse the whole token stream; leftover tokens are an error.
    pub fn parse(mut self) -> Result<Expr, ExpressionError> {
        let (expr, _) = self.expr()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(unexpected(token)),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it matches `kind`
    fn eat(&mut self, kind: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if &token.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Step one level into a nested rule
    fn enter(&mut self) -> Result<(), ExpressionError> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            return Err(ExpressionError::TooDeep { limit: MAX_NESTING });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<Parsed, ExpressionError> {
        let (mut lhs, mut depth) = self.term()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let (rhs, rhs_depth) = self.term()?;
            depth = grow(depth.max(rhs_depth))?;
            lhs = binary(op, lhs, rhs);
        }
        Ok((lhs, depth))
    }

    // term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<Parsed, ExpressionError> {
        let (mut lhs, mut depth) = self.unary()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let (rhs, rhs_depth) = self.unary()?;
            depth = grow(depth.max(rhs_depth))?;
            lhs = binary(op, lhs, rhs);
        }
        Ok((lhs, depth))
    }

    // unary := ('+' | '-') unary | power
    fn unary(&mut self) -> Result<Parsed, ExpressionError> {
        if self.eat(&TokenKind::Minus) {
            self.enter()?;
            let (inner, depth) = self.unary()?;
            self.leave();
            return Ok((Expr::Negate(Box::new(inner)), grow(depth)?));
        }
        if self.eat(&TokenKind::Plus) {
            self.enter()?;
            let parsed = self.unary()?;
            self.leave();
            return Ok(parsed);
        }
        self.power()
    }

    // power := primary ('**' unary)?
    fn power(&mut self) -> Result<Parsed, ExpressionError> {
        let (base, base_depth) = self.primary()?;
        if self.eat(&TokenKind::Power) {
            // Right operand goes back through `unary`, which makes `**` right-associative
            self.enter()?;
            let (exponent, exponent_depth) = self.unary()?;
            self.leave();
            let depth = grow(base_depth.max(exponent_depth))?;
            return Ok((binary(BinaryOp::Pow, base, exponent), depth));
        }
        Ok((base, base_depth))
    }

    // primary := NUMBER | 'x' | '(' expr ')'
    fn primary(&mut self) -> Result<Parsed, ExpressionError> {
        let token = self.advance().ok_or(ExpressionError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) => Ok((Expr::Number(n), 1)),
            TokenKind::Variable => Ok((Expr::Variable, 1)),
            TokenKind::LParen => {
                self.enter()?;
                let inner = self.expr()?;
                self.leave();
                match self.advance() {
                    Some(Token { kind: TokenKind::RParen, .. }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

/// Depth of a node whose deepest child is `child_depth` levels deep
fn grow(child_depth: usize) -> Result<usize, ExpressionError> {
    let depth = child_depth + 1;
    if depth > MAX_DEPTH {
        return Err(ExpressionError::TooDeep { limit: MAX_DEPTH });
    }
    Ok(depth)
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(token: &Token) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        found: token.kind.to_string(),
        position: token.position,
    }
}
