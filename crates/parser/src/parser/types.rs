/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use super::*;
use ast::types::{Primitive, Type};

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    /// Parse a type reference: a primitive keyword, `array<T>`,
    /// `class<Identifier>`, or a bare identifier naming a user type.
    pub(crate) fn parse_type(&mut self) -> ParseResult<Type> {
        if self.eat_kw("array") {
            self.expect(Token::Lt)?;
            let element = self.parse_type()?;
            self.expect_type_gt()?;
            return Ok(Type::Array(Box::new(element)));
        }

        if self.peek_kw("class") {
            self.advance();
            self.expect(Token::Lt)?;
            let name = self.expect_ident()?;
            self.expect_type_gt()?;
            return Ok(Type::Class(name));
        }

        let tok = self.peek_token();
        if tok != Token::Ident {
            return Err(self.error(format!("expected type, found {:?}", tok)));
        }
        let name = self.expect_ident()?;
        let ty = match name.to_ascii_lowercase().as_str() {
            "byte" => Type::Primitive(Primitive::Byte),
            "int" => Type::Primitive(Primitive::Int),
            "bool" => Type::Primitive(Primitive::Bool),
            "float" => Type::Primitive(Primitive::Float),
            "string" => Type::Primitive(Primitive::String),
            "name" => Type::Primitive(Primitive::Name),
            _ => Type::Named(name),
        };
        Ok(ty)
    }

    /// Close a type argument list. `>>`/`>>>` tokens get split so nested
    /// `array<array<int>>` parses; the closers still owed are counted in
    /// `pending_gt`.
    pub(crate) fn expect_type_gt(&mut self) -> ParseResult<()> {
        if self.pending_gt > 0 {
            self.pending_gt -= 1;
            return Ok(());
        }
        let tok = self.peek_token();
        match tok {
            Token::Gt => {
                self.advance();
                Ok(())
            }
            Token::Shr => {
                self.advance();
                self.pending_gt += 1;
                Ok(())
            }
            Token::UnsignedShr => {
                self.advance();
                self.pending_gt += 2;
                Ok(())
            }
            _ => Err(self.error(format!("expected '>', found {:?}", tok))),
        }
    }

    /// Does an identifier in type position spell one of the type keywords?
    pub(crate) fn peek_type_keyword(&mut self) -> bool {
        const TYPE_KEYWORDS: &[&str] = &[
            "byte", "int", "bool", "float", "string", "name", "array", "class",
        ];
        if self.peek_token() != Token::Ident {
            return false;
        }
        let span = self.peek_span();
        let text = self.text(&span);
        TYPE_KEYWORDS.iter().any(|kw| text.eq_ignore_ascii_case(kw))
    }
}
