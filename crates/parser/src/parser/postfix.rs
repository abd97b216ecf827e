use super::*;
use ast::expr::Expr;
use ast::op::PostfixOp;

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    pub(crate) fn parse_postfix(&mut self) -> ParseResult<Spanned<Expr>> {
        let expr = self.parse_primary()?;
        self.continue_postfix(expr)
    }

    /// Continue parsing postfix operations on an already-parsed expr:
    /// attribute access, `.static.` calls, subscription, argument lists,
    /// and the postfix `++`/`--`.
    pub(crate) fn continue_postfix(&mut self, mut expr: Spanned<Expr>) -> ParseResult<Spanned<Expr>> {
        let start = expr.span.start;
        loop {
            match self.peek_token() {
                Token::Dot => {
                    self.advance(); // consume `.`
                    if self.peek_kw("static") {
                        self.advance();
                        self.expect(Token::Dot)?;
                        let call = self.parse_plain_call()?;
                        let end = self.current_span.end;
                        expr = Spanned::new(
                            Expr::StaticCall {
                                target: Some(Box::new(expr)),
                                call: Box::new(call),
                            },
                            start..end,
                        );
                        continue;
                    }
                    let attr = self.expect_ident()?;
                    let end = self.current_span.end;
                    expr = Spanned::new(
                        Expr::Attribute {
                            value: Box::new(expr),
                            attr,
                        },
                        start..end,
                    );
                }
                Token::LBracket => {
                    self.advance(); // consume `[`
                    let index = self.parse_expr()?;
                    self.expect(Token::RBracket)?;
                    let end = self.current_span.end;
                    expr = Spanned::new(
                        Expr::Subscript {
                            value: Box::new(expr),
                            index: Box::new(index),
                        },
                        start..end,
                    );
                }
                Token::LParen => {
                    // Only identifier, attribute, and class-type callees
                    // take argument lists.
                    if !matches!(
                        expr.node,
                        Expr::Ident(_) | Expr::Attribute { .. } | Expr::ClassType(_)
                    ) {
                        break;
                    }
                    self.advance(); // consume `(`
                    let args = self.parse_call_args()?;
                    self.expect(Token::RParen)?;
                    let end = self.current_span.end;
                    expr = Spanned::new(
                        Expr::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        start..end,
                    );
                }
                Token::PlusPlus => {
                    self.advance();
                    let end = self.current_span.end;
                    expr = Spanned::new(
                        Expr::Postfix {
                            op: PostfixOp::Inc,
                            operand: Box::new(expr),
                        },
                        start..end,
                    );
                }
                Token::MinusMinus => {
                    self.advance();
                    let end = self.current_span.end;
                    expr = Spanned::new(
                        Expr::Postfix {
                            op: PostfixOp::Dec,
                            operand: Box::new(expr),
                        },
                        start..end,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    /// Parse a comma-separated argument list up to (not including) the
    /// closing `)`. A position may be empty — the language's way of
    /// skipping an optional argument — and each empty slot is `None`:
    /// `f(a,,b)` is `[Some, None, Some]`.
    pub(crate) fn parse_call_args(&mut self) -> ParseResult<Vec<Option<Spanned<Expr>>>> {
        let mut args = Vec::new();
        if self.peek_token() == Token::RParen {
            return Ok(args);
        }
        loop {
            if self.peek_token() == Token::Comma || self.peek_token() == Token::RParen {
                args.push(None);
            } else {
                args.push(Some(self.parse_expr()?));
            }
            if !self.eat(Token::Comma) {
                break;
            }
        }
        Ok(args)
    }
}
