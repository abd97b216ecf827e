use super::*;
use ast::defaults::{
    DefaultProperties, DefaultPropertiesAssignment, DefaultPropertiesDecl, DefaultPropertiesKey,
    DefaultPropertiesObject, DefaultPropertiesValue,
};

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    /// `defaultproperties { … }` — an ordered list of assignments and
    /// nested `Begin Object … End Object` blocks. Order is preserved
    /// verbatim; later assignments to the same key are a downstream
    /// concern (last-write-wins there).
    pub(crate) fn parse_default_properties(&mut self) -> ParseResult<Spanned<DefaultProperties>> {
        let start = self.peek_span();
        self.advance(); // consume `defaultproperties`
        self.expect(Token::LBrace)?;
        let mut declarations = Vec::new();
        while self.peek_token() != Token::RBrace {
            if self.peek_token() == Token::Eof {
                return Err(self.error("expected '}' to close defaultproperties"));
            }
            declarations.push(self.parse_dp_declaration()?);
        }
        self.advance(); // consume `}`
        let end = self.current_span.end;
        Ok(Spanned::new(
            DefaultProperties { declarations },
            start.start..end,
        ))
    }

    fn parse_dp_declaration(&mut self) -> ParseResult<Spanned<DefaultPropertiesDecl>> {
        let start = self.peek_span();
        let decl = if self.peek_kw("begin") {
            DefaultPropertiesDecl::Object(self.parse_dp_object()?)
        } else {
            DefaultPropertiesDecl::Assignment(self.parse_dp_assignment()?)
        };
        let end = self.current_span.end;
        Ok(Spanned::new(decl, start.start..end))
    }

    /// `Begin Object … End Object`. Bodies recurse through the same
    /// declaration production, so objects nest and may mix assignments
    /// with further objects.
    fn parse_dp_object(&mut self) -> ParseResult<DefaultPropertiesObject> {
        self.advance(); // consume `Begin`
        self.expect_kw("object")?;
        let mut declarations = Vec::new();
        while !self.peek_kw("end") {
            if matches!(self.peek_token(), Token::Eof | Token::RBrace) {
                return Err(self.error("expected 'End Object'"));
            }
            declarations.push(self.parse_dp_declaration()?);
        }
        self.advance(); // consume `End`
        self.expect_kw("object")?;
        Ok(DefaultPropertiesObject { declarations })
    }

    /// `Key = Value` or `Key(2) = Value`.
    fn parse_dp_assignment(&mut self) -> ParseResult<DefaultPropertiesAssignment> {
        let name = self.expect_ident()?;
        let index = if self.eat(Token::LParen) {
            let index = self.expect_integer()?;
            self.expect(Token::RParen)?;
            Some(index)
        } else {
            None
        };
        self.expect(Token::Assign)?;
        let value = self.parse_dp_value()?;
        Ok(DefaultPropertiesAssignment {
            key: DefaultPropertiesKey { name, index },
            value,
        })
    }

    /// A value: literal, reference, bare identifier, `(K=V,…)` tuple, or
    /// `((…),(…))` array of tuples. One token of lookahead after `(`
    /// separates the last two.
    fn parse_dp_value(&mut self) -> ParseResult<Spanned<DefaultPropertiesValue>> {
        let start = self.peek_span();
        let value = match self.peek_token() {
            Token::LParen => {
                self.advance(); // consume `(`
                if self.peek_token() == Token::LParen {
                    let mut items = vec![self.parse_dp_tuple()?];
                    while self.eat(Token::Comma) {
                        items.push(self.parse_dp_tuple()?);
                    }
                    self.expect(Token::RParen)?;
                    DefaultPropertiesValue::Array(items)
                } else {
                    DefaultPropertiesValue::Tuple(self.parse_dp_tuple_body()?)
                }
            }
            Token::Number | Token::String | Token::Name | Token::Minus => {
                DefaultPropertiesValue::Literal(self.parse_literal()?.node)
            }
            Token::Ident => {
                if self.peek_kw("true")
                    || self.peek_kw("false")
                    || self.peek_kw("none")
                    || self.peek_kw("vect")
                {
                    DefaultPropertiesValue::Literal(self.parse_literal()?.node)
                } else if self.peek_kw("class") {
                    self.advance();
                    if self.peek_token() != Token::Name {
                        return Err(self.error("expected name literal after 'class'"));
                    }
                    DefaultPropertiesValue::Reference {
                        outer: "class".to_string(),
                        name: self.name_literal(),
                    }
                } else {
                    let ident = self.expect_ident()?;
                    if self.peek_token() == Token::Name {
                        DefaultPropertiesValue::Reference {
                            outer: ident,
                            name: self.name_literal(),
                        }
                    } else {
                        DefaultPropertiesValue::Ident(ident)
                    }
                }
            }
            tok => {
                return Err(self.error(format!(
                    "expected default-properties value, found {:?}",
                    tok
                )))
            }
        };
        let end = self.current_span.end;
        Ok(Spanned::new(value, start.start..end))
    }

    /// One `(K=V, …)` tuple whose `(` has not been consumed yet.
    fn parse_dp_tuple(&mut self) -> ParseResult<Vec<Spanned<DefaultPropertiesAssignment>>> {
        self.expect(Token::LParen)?;
        self.parse_dp_tuple_body()
    }

    /// Tuple assignments up to and including the closing `)`.
    fn parse_dp_tuple_body(&mut self) -> ParseResult<Vec<Spanned<DefaultPropertiesAssignment>>> {
        let mut assignments = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                let start = self.peek_span();
                let assignment = self.parse_dp_assignment()?;
                let end = self.current_span.end;
                assignments.push(Spanned::new(assignment, start.start..end));
                if !self.eat(Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::RParen)?;
        Ok(assignments)
    }
}
