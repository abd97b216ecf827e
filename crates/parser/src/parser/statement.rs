use super::*;
use ast::expr::Expr;
use ast::op::AssignOp;
use ast::stmt::{CaseLabel, Stmt, SwitchCase};

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Spanned<Stmt>> {
        let start = self.peek_span();
        let stmt = if self.peek_kw("if") {
            self.parse_if()?
        } else if self.peek_kw("for") {
            self.parse_for()?
        } else if self.peek_kw("foreach") {
            self.parse_foreach()?
        } else if self.peek_kw("while") {
            self.parse_while()?
        } else if self.peek_kw("do") {
            self.parse_do_until()?
        } else if self.peek_kw("switch") {
            self.parse_switch()?
        } else if self.peek_kw("const") {
            Stmt::Const(self.parse_const()?.node)
        } else if self.peek_kw("local") {
            return Err(self.error("local declarations must precede the first statement"));
        } else {
            let stmt = self.parse_simple_stmt()?;
            self.expect(Token::Semicolon)?;
            stmt
        };
        let end = self.current_span.end;
        Ok(Spanned::new(stmt, start.start..end))
    }

    /// A simple statement, no trailing `;`: `return [expr]`, `break`,
    /// `continue`, an assignment, or a bare expression. Also used for the
    /// clauses of a `for` header.
    fn parse_simple_stmt(&mut self) -> ParseResult<Stmt> {
        if self.eat_kw("break") {
            return Ok(Stmt::Break);
        }
        if self.eat_kw("continue") {
            return Ok(Stmt::Continue);
        }
        if self.eat_kw("return") {
            let value = if matches!(self.peek_token(), Token::Semicolon | Token::RParen) {
                None
            } else {
                Some(self.parse_expr()?)
            };
            return Ok(Stmt::Return(value));
        }
        let expr = self.parse_expr()?;
        self.finish_simple_stmt(expr)
    }

    /// Finish an expression-led simple statement: either an assignment to
    /// a valid target, or the bare expression.
    fn finish_simple_stmt(&mut self, expr: Spanned<Expr>) -> ParseResult<Stmt> {
        let op = match self.peek_token() {
            Token::Assign => Some(AssignOp::Assign),
            Token::DollarAssign => Some(AssignOp::ConcatAssign),
            Token::AtAssign => Some(AssignOp::ConcatSpaceAssign),
            _ => None,
        };
        let Some(op) = op else {
            return Ok(Stmt::Expr(expr));
        };
        if !matches!(
            expr.node,
            Expr::Ident(_) | Expr::Attribute { .. } | Expr::DefaultAccess(_) | Expr::Subscript { .. }
        ) {
            return Err(ParseError {
                message: "invalid assignment target".into(),
                span: expr.span.clone(),
            });
        }
        self.advance(); // consume the operator
        let value = self.parse_expr()?;
        Ok(Stmt::Assign {
            target: expr,
            op,
            value,
        })
    }

    /// A statement body: one statement, or a braced list. When a `{`
    /// follows, the braced form wins.
    fn parse_body(&mut self) -> ParseResult<Vec<Spanned<Stmt>>> {
        if self.eat(Token::LBrace) {
            let mut stmts = Vec::new();
            while self.peek_token() != Token::RBrace {
                if self.peek_token() == Token::Eof {
                    return Err(self.error("expected '}' to close block"));
                }
                stmts.push(self.parse_stmt()?);
            }
            self.advance(); // consume `}`
            Ok(stmts)
        } else {
            Ok(vec![self.parse_stmt()?])
        }
    }

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `if`
        self.expect(Token::LParen)?;
        let test = self.parse_expr()?;
        self.expect(Token::RParen)?;
        let body = self.parse_body()?;

        let mut elif_clauses = Vec::new();
        let mut else_body = None;
        while self.peek_kw("else") {
            self.advance(); // consume `else`
            if self.peek_kw("if") {
                self.advance();
                self.expect(Token::LParen)?;
                let elif_test = self.parse_expr()?;
                self.expect(Token::RParen)?;
                elif_clauses.push((elif_test, self.parse_body()?));
            } else {
                else_body = Some(self.parse_body()?);
                break;
            }
        }

        Ok(Stmt::If {
            test,
            body,
            elif_clauses,
            else_body,
        })
    }

    fn parse_for(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `for`
        self.expect(Token::LParen)?;

        let mut init = Vec::new();
        if self.peek_token() != Token::Semicolon {
            loop {
                let start = self.peek_span();
                let stmt = self.parse_simple_stmt()?;
                let end = self.current_span.end;
                init.push(Spanned::new(stmt, start.start..end));
                if !self.eat(Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::Semicolon)?;

        let test = if self.peek_token() != Token::Semicolon {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(Token::Semicolon)?;

        let update_start = self.peek_span();
        let update = self.parse_simple_stmt()?;
        let update_end = self.current_span.end;
        self.expect(Token::RParen)?;

        let body = self.parse_body()?;
        Ok(Stmt::For {
            init,
            test,
            update: Box::new(Spanned::new(update, update_start.start..update_end)),
            body,
        })
    }

    fn parse_foreach(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `foreach`
        let iterator = self.parse_postfix()?; // the iterator call
        let body = self.parse_body()?;
        Ok(Stmt::ForEach { iterator, body })
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `while`
        self.expect(Token::LParen)?;
        let test = self.parse_expr()?;
        self.expect(Token::RParen)?;
        let body = self.parse_body()?;
        Ok(Stmt::While { test, body })
    }

    /// `do { … } until(test);` — braces required, the until clause and its
    /// trailing `;` both optional.
    fn parse_do_until(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `do`
        self.expect(Token::LBrace)?;
        let mut body = Vec::new();
        while self.peek_token() != Token::RBrace {
            if self.peek_token() == Token::Eof {
                return Err(self.error("expected '}' to close do block"));
            }
            body.push(self.parse_stmt()?);
        }
        self.advance(); // consume `}`

        let test = if self.eat_kw("until") {
            self.expect(Token::LParen)?;
            let test = self.parse_expr()?;
            self.expect(Token::RParen)?;
            self.eat(Token::Semicolon);
            Some(test)
        } else {
            None
        };
        Ok(Stmt::DoUntil { body, test })
    }

    fn parse_switch(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `switch`
        self.expect(Token::LParen)?;
        let subject = self.parse_expr()?;
        self.expect(Token::RParen)?;
        self.expect(Token::LBrace)?;

        let mut cases: Vec<SwitchCase> = Vec::new();
        loop {
            match self.peek_token() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.error("expected '}' to close switch")),
                _ => {}
            }

            if self.eat_kw("case") {
                let atom = self.parse_atom()?;
                self.expect(Token::Colon)?;
                cases.push(SwitchCase {
                    label: CaseLabel::Case(atom),
                    body: Vec::new(),
                });
                continue;
            }

            if self.peek_kw("default") {
                // `default :` is the default case label; `default . X` is a
                // property-access statement. One token past `default`
                // decides, so consume it first.
                self.advance();
                if self.eat(Token::Colon) {
                    cases.push(SwitchCase {
                        label: CaseLabel::Default,
                        body: Vec::new(),
                    });
                    continue;
                }
                let start = self.current_span.clone();
                self.expect(Token::Dot)?;
                let field = self.expect_ident()?;
                let end = self.current_span.end;
                let access = Spanned::new(Expr::DefaultAccess(field), start.start..end);
                let expr = self.continue_postfix(access)?;
                let expr = self.continue_binary(expr)?;
                let stmt = self.finish_simple_stmt(expr)?;
                self.expect(Token::Semicolon)?;
                let stmt_end = self.current_span.end;
                let Some(case) = cases.last_mut() else {
                    return Err(self.error("statement before the first case label"));
                };
                case.body.push(Spanned::new(stmt, start.start..stmt_end));
                continue;
            }

            let stmt = self.parse_stmt()?;
            let Some(case) = cases.last_mut() else {
                return Err(ParseError {
                    message: "statement before the first case label".into(),
                    span: stmt.span.clone(),
                });
            };
            case.body.push(stmt);
        }

        Ok(Stmt::Switch { subject, cases })
    }
}
