use super::*;
use ast::expr::{Expr, Literal, VectorLiteral};
use ast::op::{BinOp, PrefixOp};

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    /// Entry point for expression parsing.
    ///
    /// The grammar defines no operator precedence or associativity: every
    /// binary operator binds at one undifferentiated level, folded left to
    /// right. `a + b * c` is `(a + b) * c` here; re-association, if any, is
    /// a later pass's concern (see DESIGN.md).
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Spanned<Expr>> {
        let left = self.parse_unary()?;
        self.continue_binary(left)
    }

    /// Fold binary operators onto an already-parsed left operand.
    pub(crate) fn continue_binary(&mut self, left: Spanned<Expr>) -> ParseResult<Spanned<Expr>> {
        let start = left.span.start;
        let mut result = left;
        while let Some(op) = self.peek_binary_op() {
            self.advance();
            let right = self.parse_unary()?;
            let end = self.current_span.end;
            result = Spanned::new(
                Expr::Binary {
                    left: Box::new(result),
                    op,
                    right: Box::new(right),
                },
                start..end,
            );
        }
        Ok(result)
    }

    /// The single binary operator table. `dot` and `cross` are identifier
    /// tokens matched by text like every other keyword.
    fn peek_binary_op(&mut self) -> Option<BinOp> {
        match self.peek_token() {
            Token::EqEq => Some(BinOp::Eq),
            Token::NotEq => Some(BinOp::NotEq),
            Token::Le => Some(BinOp::Le),
            Token::Ge => Some(BinOp::Ge),
            Token::ApproxEq => Some(BinOp::ApproxEq),
            Token::Percent => Some(BinOp::Mod),
            Token::Star => Some(BinOp::Mul),
            Token::Slash => Some(BinOp::Div),
            Token::Plus => Some(BinOp::Add),
            Token::Minus => Some(BinOp::Sub),
            Token::Lt => Some(BinOp::Lt),
            Token::Gt => Some(BinOp::Gt),
            Token::Dollar => Some(BinOp::Concat),
            Token::At => Some(BinOp::ConcatSpace),
            Token::OrOr => Some(BinOp::Or),
            Token::PlusAssign => Some(BinOp::AddAssign),
            Token::MinusAssign => Some(BinOp::SubAssign),
            Token::StarAssign => Some(BinOp::MulAssign),
            Token::SlashAssign => Some(BinOp::DivAssign),
            Token::AndAnd => Some(BinOp::And),
            Token::Shr => Some(BinOp::Shr),
            Token::Shl => Some(BinOp::Shl),
            Token::UnsignedShl => Some(BinOp::UnsignedShl),
            Token::UnsignedShr => Some(BinOp::UnsignedShr),
            Token::Pow => Some(BinOp::Pow),
            Token::Amp => Some(BinOp::BitAnd),
            Token::Pipe => Some(BinOp::BitOr),
            Token::Caret => Some(BinOp::BitXor),
            Token::XorXor => Some(BinOp::Xor),
            Token::Ident => {
                let span = self.peek_span();
                let word = self.text(&span);
                if word.eq_ignore_ascii_case("dot") {
                    Some(BinOp::Dot)
                } else if word.eq_ignore_ascii_case("cross") {
                    Some(BinOp::Cross)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Prefix operators: `- ! ++ -- ^`, right-nesting.
    fn parse_unary(&mut self) -> ParseResult<Spanned<Expr>> {
        let start = self.peek_span();
        let op = match self.peek_token() {
            Token::Minus => Some(PrefixOp::Neg),
            Token::Bang => Some(PrefixOp::Not),
            Token::PlusPlus => Some(PrefixOp::Inc),
            Token::MinusMinus => Some(PrefixOp::Dec),
            Token::Caret => Some(PrefixOp::BitNot),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(
                Expr::Prefix {
                    op,
                    operand: Box::new(operand),
                },
                start.start..end,
            ));
        }
        self.parse_postfix()
    }

    pub(crate) fn parse_primary(&mut self) -> ParseResult<Spanned<Expr>> {
        let start = self.peek_span();
        match self.peek_token() {
            Token::LParen => {
                self.advance(); // consume `(`
                let expr = self.parse_expr()?;
                self.expect(Token::RParen)?;
                // parentheses are grouping only, not a node
                Ok(expr)
            }
            Token::Number | Token::String | Token::Name => {
                let lit = self.parse_literal()?;
                let end = self.current_span.end;
                Ok(Spanned::new(Expr::Literal(lit.node), start.start..end))
            }
            Token::Ident => self.parse_ident_primary(start),
            Token::Error => Err(self.error("unrecognized character sequence")),
            tok => Err(self.error(format!("expected expression, found {:?}", tok))),
        }
    }

    /// Primaries led by an identifier token: keyword forms first, then a
    /// plain identifier or `Identifier'Name'` reference.
    fn parse_ident_primary(&mut self, start: Span) -> ParseResult<Spanned<Expr>> {
        if self.peek_kw("true")
            || self.peek_kw("false")
            || self.peek_kw("none")
            || self.peek_kw("vect")
        {
            let lit = self.parse_literal()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(Expr::Literal(lit.node), start.start..end));
        }

        if self.peek_kw("new") {
            self.advance();
            let reference = self.parse_reference()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(
                Expr::New(Box::new(reference)),
                start.start..end,
            ));
        }

        if self.peek_kw("super") {
            self.advance();
            let parent = if self.eat(Token::LParen) {
                let name = self.expect_ident()?;
                self.expect(Token::RParen)?;
                Some(name)
            } else {
                None
            };
            self.expect(Token::Dot)?;
            let call = self.parse_plain_call()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(
                Expr::SuperCall {
                    parent,
                    call: Box::new(call),
                },
                start.start..end,
            ));
        }

        if self.peek_kw("static") {
            self.advance();
            self.expect(Token::Dot)?;
            let call = self.parse_plain_call()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(
                Expr::StaticCall {
                    target: None,
                    call: Box::new(call),
                },
                start.start..end,
            ));
        }

        if self.peek_kw("global") {
            self.advance();
            self.expect(Token::Dot)?;
            let call = self.parse_plain_call()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(
                Expr::GlobalCall {
                    call: Box::new(call),
                },
                start.start..end,
            ));
        }

        if self.peek_kw("default") {
            self.advance();
            self.expect(Token::Dot)?;
            let field = self.expect_ident()?;
            let end = self.current_span.end;
            return Ok(Spanned::new(Expr::DefaultAccess(field), start.start..end));
        }

        if self.peek_kw("class") {
            self.advance();
            if self.eat(Token::Lt) {
                let name = self.expect_ident()?;
                self.expect_type_gt()?;
                let end = self.current_span.end;
                return Ok(Spanned::new(Expr::ClassType(name), start.start..end));
            }
            if self.peek_token() == Token::Name {
                let name = self.name_literal();
                let end = self.current_span.end;
                return Ok(Spanned::new(
                    Expr::Reference {
                        outer: "class".to_string(),
                        name,
                    },
                    start.start..end,
                ));
            }
            return Err(self.error("expected '<' or name literal after 'class'"));
        }

        let name = self.expect_ident()?;
        if self.peek_token() == Token::Name {
            let lit = self.name_literal();
            let end = self.current_span.end;
            return Ok(Spanned::new(
                Expr::Reference {
                    outer: name,
                    name: lit,
                },
                start.start..end,
            ));
        }
        let end = self.current_span.end;
        Ok(Spanned::new(Expr::Ident(name), start.start..end))
    }

    /// The restricted atom grammar used by `case` labels: a literal, an
    /// identifier, or a quoted-name reference. No calls, no operators.
    pub(crate) fn parse_atom(&mut self) -> ParseResult<Spanned<Expr>> {
        let start = self.peek_span();
        match self.peek_token() {
            Token::Number | Token::String | Token::Name | Token::Minus => {
                let lit = self.parse_literal()?;
                let end = self.current_span.end;
                Ok(Spanned::new(Expr::Literal(lit.node), start.start..end))
            }
            Token::Ident => {
                if self.peek_kw("true")
                    || self.peek_kw("false")
                    || self.peek_kw("none")
                    || self.peek_kw("vect")
                {
                    let lit = self.parse_literal()?;
                    let end = self.current_span.end;
                    return Ok(Spanned::new(Expr::Literal(lit.node), start.start..end));
                }
                if self.peek_kw("class") {
                    return self.parse_reference();
                }
                let name = self.expect_ident()?;
                if self.peek_token() == Token::Name {
                    let lit = self.name_literal();
                    let end = self.current_span.end;
                    return Ok(Spanned::new(
                        Expr::Reference {
                            outer: name,
                            name: lit,
                        },
                        start.start..end,
                    ));
                }
                let end = self.current_span.end;
                Ok(Spanned::new(Expr::Ident(name), start.start..end))
            }
            tok => Err(self.error(format!(
                "expected literal, identifier, or reference, found {:?}",
                tok
            ))),
        }
    }

    /// `Identifier'Name'` or `class'Name'`.
    pub(crate) fn parse_reference(&mut self) -> ParseResult<Spanned<Expr>> {
        let start = self.peek_span();
        let outer = if self.peek_kw("class") {
            self.advance();
            "class".to_string()
        } else {
            self.expect_ident()?
        };
        if self.peek_token() != Token::Name {
            return Err(self.error("expected name literal in reference"));
        }
        let name = self.name_literal();
        let end = self.current_span.end;
        Ok(Spanned::new(
            Expr::Reference { outer, name },
            start.start..end,
        ))
    }

    /// An `Identifier(Args)` call, as required after `super.`, `static.`
    /// and `global.`.
    pub(crate) fn parse_plain_call(&mut self) -> ParseResult<Spanned<Expr>> {
        let start = self.peek_span();
        let name = self.expect_ident()?;
        let callee = Spanned::new(Expr::Ident(name), start.clone());
        self.expect(Token::LParen)?;
        let args = self.parse_call_args()?;
        self.expect(Token::RParen)?;
        let end = self.current_span.end;
        Ok(Spanned::new(
            Expr::Call {
                callee: Box::new(callee),
                args,
            },
            start.start..end,
        ))
    }

    // --- Literals ---

    /// A literal: number, string, name, bool, `none`, or `vect(x,y,z)`.
    pub(crate) fn parse_literal(&mut self) -> ParseResult<Spanned<Literal>> {
        let start = self.peek_span();
        let lit = match self.peek_token() {
            Token::Number | Token::Minus => self.parse_number_literal()?,
            Token::String => {
                self.advance();
                let text = self.last_text();
                Literal::String(text[1..text.len() - 1].to_string())
            }
            Token::Name => Literal::Name(self.name_literal()),
            Token::Ident => {
                if self.eat_kw("true") {
                    Literal::Bool(true)
                } else if self.eat_kw("false") {
                    Literal::Bool(false)
                } else if self.eat_kw("none") {
                    Literal::None
                } else if self.peek_kw("vect") {
                    self.parse_vector_literal()?
                } else {
                    let span = self.peek_span();
                    let text = self.text(&span).to_string();
                    return Err(ParseError {
                        message: format!("expected literal, found '{}'", text),
                        span,
                    });
                }
            }
            tok => return Err(self.error(format!("expected literal, found {:?}", tok))),
        };
        let end = self.current_span.end;
        Ok(Spanned::new(lit, start.start..end))
    }

    /// Numbers default to 32-bit signed integers and single-precision
    /// floats; `0x` prefixes take the hex path. A leading `-` is accepted
    /// in literal contexts.
    fn parse_number_literal(&mut self) -> ParseResult<Literal> {
        let negative = self.eat(Token::Minus);
        let tok = self.peek_token();
        let span = self.peek_span();
        if tok != Token::Number {
            return Err(ParseError {
                message: format!("expected number, found {:?}", tok),
                span,
            });
        }
        self.advance();
        let text = self.last_text().to_string();

        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            let value = u32::from_str_radix(hex, 16).map_err(|_| ParseError {
                message: format!("hex literal out of range: {}", text),
                span: span.clone(),
            })? as i32;
            return Ok(Literal::Int(if negative { value.wrapping_neg() } else { value }));
        }

        if text.contains('.') {
            let value = text.parse::<f32>().map_err(|_| ParseError {
                message: format!("malformed number: {}", text),
                span: span.clone(),
            })?;
            return Ok(Literal::Float(if negative { -value } else { value }));
        }

        let value = text.parse::<i32>().map_err(|_| ParseError {
            message: format!("integer literal out of range: {}", text),
            span: span.clone(),
        })?;
        Ok(Literal::Int(if negative { -value } else { value }))
    }

    /// `vect(x,y,z)` — exactly three single-precision components.
    fn parse_vector_literal(&mut self) -> ParseResult<Literal> {
        self.advance(); // consume `vect`
        self.expect(Token::LParen)?;
        let x = self.vector_component()?;
        self.expect(Token::Comma)?;
        let y = self.vector_component()?;
        self.expect(Token::Comma)?;
        let z = self.vector_component()?;
        self.expect(Token::RParen)?;
        Ok(Literal::Vector(VectorLiteral { x, y, z }))
    }

    fn vector_component(&mut self) -> ParseResult<f32> {
        let negative = self.eat(Token::Minus);
        let tok = self.peek_token();
        let span = self.peek_span();
        if tok != Token::Number {
            return Err(ParseError {
                message: format!("expected number, found {:?}", tok),
                span,
            });
        }
        self.advance();
        let text = self.last_text();
        let value = text.parse::<f32>().map_err(|_| ParseError {
            message: format!("malformed number: {}", text),
            span: span.clone(),
        })?;
        Ok(if negative { -value } else { value })
    }

    /// Consume a name-literal token and return its text without the quotes.
    /// Only call with `Token::Name` peeked.
    pub(crate) fn name_literal(&mut self) -> String {
        self.advance();
        let text = self.last_text();
        text[1..text.len() - 1].to_string()
    }
}
