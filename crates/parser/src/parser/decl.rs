use super::*;
use ast::decl::{
    BodyDecl, ClassDeclaration, ClassModifier, Const, Enum, FunctionArgument, FunctionBody,
    FunctionDeclaration, FunctionKind, Local, MemberDecl, State, StateDecl, Struct, VarType,
    Variable,
};
use ast::types::Type;
use ast::{ArraySize, Modifier, VariableName};

/// Variable modifier keywords.
const VAR_MODIFIERS: &[&str] = &[
    "config",
    "const",
    "editconst",
    "editconstarray",
    "editinline",
    "export",
    "noexport",
    "globalconfig",
    "input",
    "localized",
    "native",
    "private",
    "protected",
    "transient",
    "travel",
];

/// Function modifier keywords, legal before and after `function`/`event`.
const FUNCTION_MODIFIERS: &[&str] = &[
    "exec",
    "final",
    "iterator",
    "latent",
    "native",
    "simulated",
    "singular",
    "static",
    "private",
    "protected",
];

/// Argument modifier keywords.
const ARGUMENT_MODIFIERS: &[&str] = &["coerce", "optional", "out"];

/// Class modifiers without arguments.
const CLASS_MODIFIERS: &[&str] = &[
    "abstract",
    "cacheexempt",
    "instanced",
    "parseconfig",
    "perobjectconfig",
    "safereplace",
    "transient",
    "editinline",
    "noteditinline",
    "hidedropdown",
    "placeable",
    "notplaceable",
    "exportstructs",
    "native",
    "nativereplication",
    "noexport",
];

/// Class modifiers that take a parenthesized identifier list.
const CLASS_MODIFIERS_WITH_ARGS: &[&str] = &[
    "config",
    "dependson",
    "collapsecategories",
    "dontcollapsecategories",
    "hidecategories",
    "showcategories",
];

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    /// If the next token is one of `keywords` (case-insensitive), consume
    /// it and return its canonical lowercase spelling.
    fn eat_modifier(&mut self, keywords: &[&str]) -> Option<String> {
        if self.peek_token() != Token::Ident {
            return None;
        }
        let span = self.peek_span();
        let text = self.text(&span);
        let keyword = keywords.iter().find(|kw| text.eq_ignore_ascii_case(kw))?;
        self.advance();
        Some((*keyword).to_string())
    }

    /// `class Name extends Super <modifiers>;` — the `extends` clause is
    /// absent only on the root class.
    pub(crate) fn parse_class_declaration(&mut self) -> ParseResult<Spanned<ClassDeclaration>> {
        let start = self.peek_span();
        self.expect_kw("class")?;
        let name = self.expect_ident()?;
        let superclass = if self.eat_kw("extends") {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let mut modifiers = Vec::new();
        while self.peek_token() == Token::Ident {
            modifiers.push(self.parse_class_modifier()?);
        }
        self.expect(Token::Semicolon)?;
        let end = self.current_span.end;
        Ok(Spanned::new(
            ClassDeclaration {
                name,
                superclass,
                modifiers,
            },
            start.start..end,
        ))
    }

    fn parse_class_modifier(&mut self) -> ParseResult<ClassModifier> {
        if let Some(keyword) = self.eat_modifier(CLASS_MODIFIERS) {
            return Ok(ClassModifier {
                keyword,
                arguments: Vec::new(),
            });
        }
        if let Some(keyword) = self.eat_modifier(CLASS_MODIFIERS_WITH_ARGS) {
            self.expect(Token::LParen)?;
            let mut arguments = vec![self.expect_ident()?];
            while self.eat(Token::Comma) {
                arguments.push(self.expect_ident()?);
            }
            self.expect(Token::RParen)?;
            return Ok(ClassModifier { keyword, arguments });
        }
        let span = self.peek_span();
        let text = self.text(&span).to_string();
        Err(ParseError {
            message: format!("unknown class modifier '{}'", text),
            span,
        })
    }

    /// `const NAME = literal;`
    pub(crate) fn parse_const(&mut self) -> ParseResult<Spanned<Const>> {
        let start = self.peek_span();
        self.expect_kw("const")?;
        let name = self.expect_ident()?;
        self.expect(Token::Assign)?;
        let value = self.parse_literal()?;
        self.expect(Token::Semicolon)?;
        let end = self.current_span.end;
        Ok(Spanned::new(Const { name, value }, start.start..end))
    }

    // --- The var/struct/enum/const section ---

    pub(crate) fn try_parse_member_decl(&mut self) -> ParseResult<Option<Spanned<MemberDecl>>> {
        let start = self.peek_span();
        let decl = if self.peek_kw("var") {
            MemberDecl::Var(self.parse_variable()?)
        } else if self.peek_kw("struct") {
            let decl = self.parse_struct()?;
            self.expect(Token::Semicolon)?;
            MemberDecl::Struct(decl)
        } else if self.peek_kw("enum") {
            let decl = self.parse_enum()?;
            self.expect(Token::Semicolon)?;
            MemberDecl::Enum(decl)
        } else if self.peek_kw("const") {
            MemberDecl::Const(self.parse_const()?.node)
        } else {
            return Ok(None);
        };
        let end = self.current_span.end;
        Ok(Some(Spanned::new(decl, start.start..end)))
    }

    /// One `var` declaration:
    /// `var(Category) <modifiers> Type Name[2], Other;`
    pub(crate) fn parse_variable(&mut self) -> ParseResult<Variable> {
        self.advance(); // consume `var`

        let mut editable = false;
        let mut category = None;
        if self.eat(Token::LParen) {
            editable = true;
            if self.peek_token() == Token::Ident {
                category = Some(self.expect_ident()?);
            }
            self.expect(Token::RParen)?;
        }

        let mut modifiers = Vec::new();
        while let Some(keyword) = self.eat_modifier(VAR_MODIFIERS) {
            modifiers.push(Modifier { keyword });
        }

        let ty = if self.peek_kw("struct") {
            VarType::Struct(self.parse_struct()?)
        } else if self.peek_kw("enum") {
            VarType::Enum(self.parse_enum()?)
        } else {
            VarType::Type(self.parse_type()?)
        };

        let names = self.parse_variable_names()?;
        self.expect(Token::Semicolon)?;
        Ok(Variable {
            editable,
            category,
            modifiers,
            ty,
            names,
        })
    }

    fn parse_variable_names(&mut self) -> ParseResult<Vec<VariableName>> {
        let mut names = vec![self.parse_variable_name()?];
        while self.eat(Token::Comma) {
            names.push(self.parse_variable_name()?);
        }
        Ok(names)
    }

    /// A declared name with an optional fixed-size suffix: `X`, `X[3]`,
    /// or `X[MAX_ITEMS]`.
    fn parse_variable_name(&mut self) -> ParseResult<VariableName> {
        let name = self.expect_ident()?;
        let size = if self.eat(Token::LBracket) {
            let size = match self.peek_token() {
                Token::Number => ArraySize::Fixed(self.expect_integer()?),
                Token::Ident => ArraySize::Named(self.expect_ident()?),
                tok => return Err(self.error(format!("expected array size, found {:?}", tok))),
            };
            self.expect(Token::RBracket)?;
            size
        } else {
            ArraySize::Scalar
        };
        Ok(VariableName { name, size })
    }

    /// `struct Name { var … }` — at least one typed member variable. The
    /// trailing `;` belongs to the caller (a struct can also stand in the
    /// type position of a `var`).
    pub(crate) fn parse_struct(&mut self) -> ParseResult<Struct> {
        self.advance(); // consume `struct`
        let name = self.expect_ident()?;
        self.expect(Token::LBrace)?;
        let mut members = Vec::new();
        while self.peek_kw("var") {
            let start = self.peek_span();
            let var = self.parse_variable()?;
            let end = self.current_span.end;
            members.push(Spanned::new(var, start.start..end));
        }
        if members.is_empty() {
            return Err(self.error("struct body must declare at least one variable"));
        }
        self.expect(Token::RBrace)?;
        Ok(Struct { name, members })
    }

    /// `enum Name { A, B, C }` — declaration order is the ordinal order.
    pub(crate) fn parse_enum(&mut self) -> ParseResult<Enum> {
        self.advance(); // consume `enum`
        let name = self.expect_ident()?;
        self.expect(Token::LBrace)?;
        let mut values = vec![self.expect_ident()?];
        while self.eat(Token::Comma) {
            // Allow trailing comma before `}`
            if self.peek_token() == Token::RBrace {
                break;
            }
            values.push(self.expect_ident()?);
        }
        self.expect(Token::RBrace)?;
        Ok(Enum { name, values })
    }

    // --- The function/state/const section ---

    pub(crate) fn try_parse_body_decl(&mut self) -> ParseResult<Option<Spanned<BodyDecl>>> {
        let start = self.peek_span();
        let decl = if self.peek_kw("const") {
            BodyDecl::Const(self.parse_const()?.node)
        } else if self.peek_kw("state") {
            BodyDecl::State(self.parse_state()?)
        } else if self.peek_function_start() {
            BodyDecl::Function(self.parse_function()?)
        } else {
            return Ok(None);
        };
        let end = self.current_span.end;
        Ok(Some(Spanned::new(decl, start.start..end)))
    }

    /// Does a function declaration start here? Either its keyword or one
    /// of its modifiers.
    fn peek_function_start(&mut self) -> bool {
        if self.peek_token() != Token::Ident {
            return false;
        }
        let span = self.peek_span();
        let text = self.text(&span);
        text.eq_ignore_ascii_case("function")
            || text.eq_ignore_ascii_case("event")
            || FUNCTION_MODIFIERS.iter().any(|kw| text.eq_ignore_ascii_case(kw))
    }

    /// A function or event declaration. Modifiers are legal both before
    /// and after the `function`/`event` keyword and merge in source order.
    /// A `;` ends a prototype; a braced body holds all `local` declarations
    /// strictly before the statement list.
    pub(crate) fn parse_function(&mut self) -> ParseResult<FunctionDeclaration> {
        let mut modifiers = Vec::new();
        while let Some(keyword) = self.eat_modifier(FUNCTION_MODIFIERS) {
            modifiers.push(Modifier { keyword });
        }

        let kind = if self.eat_kw("function") {
            FunctionKind::Function
        } else if self.eat_kw("event") {
            FunctionKind::Event
        } else {
            let tok = self.peek_token();
            return Err(self.error(format!("expected 'function' or 'event', found {:?}", tok)));
        };

        while let Some(keyword) = self.eat_modifier(FUNCTION_MODIFIERS) {
            modifiers.push(Modifier { keyword });
        }

        // `function int Foo(` declares a return type, `function Foo(` does
        // not. A bare identifier is the name exactly when `(` follows it.
        let (return_type, name);
        if self.peek_token() == Token::Ident && !self.peek_type_keyword() {
            let first = self.expect_ident()?;
            if self.peek_token() == Token::LParen {
                return_type = None;
                name = first;
            } else {
                return_type = Some(Type::Named(first));
                name = self.expect_ident()?;
            }
        } else {
            return_type = Some(self.parse_type()?);
            name = self.expect_ident()?;
        }

        self.expect(Token::LParen)?;
        let mut arguments = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                arguments.push(self.parse_function_argument()?);
                if !self.eat(Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::RParen)?;

        let body = if self.eat(Token::Semicolon) {
            // forward/native prototype
            None
        } else {
            self.expect(Token::LBrace)?;
            let mut locals = Vec::new();
            while self.peek_kw("local") {
                locals.push(self.parse_local()?);
            }
            let mut statements = Vec::new();
            while self.peek_token() != Token::RBrace {
                if self.peek_token() == Token::Eof {
                    return Err(self.error("expected '}' to close function body"));
                }
                statements.push(self.parse_stmt()?);
            }
            self.advance(); // consume `}`
            Some(FunctionBody { locals, statements })
        };

        Ok(FunctionDeclaration {
            modifiers,
            kind,
            return_type,
            name,
            arguments,
            body,
        })
    }

    fn parse_function_argument(&mut self) -> ParseResult<FunctionArgument> {
        let mut modifiers = Vec::new();
        while let Some(keyword) = self.eat_modifier(ARGUMENT_MODIFIERS) {
            modifiers.push(Modifier { keyword });
        }
        let ty = self.parse_type()?;
        let name = self.parse_variable_name()?;
        Ok(FunctionArgument {
            modifiers,
            ty,
            name,
        })
    }

    fn parse_local(&mut self) -> ParseResult<Spanned<Local>> {
        let start = self.peek_span();
        self.advance(); // consume `local`
        let ty = self.parse_type()?;
        let names = self.parse_variable_names()?;
        self.expect(Token::Semicolon)?;
        let end = self.current_span.end;
        Ok(Spanned::new(Local { ty, names }, start.start..end))
    }

    /// `state Name { [ignores A, B;] consts and functions }` — no nested
    /// states.
    fn parse_state(&mut self) -> ParseResult<State> {
        self.advance(); // consume `state`
        let name = self.expect_ident()?;
        self.expect(Token::LBrace)?;

        let mut ignores = Vec::new();
        if self.eat_kw("ignores") {
            ignores.push(self.expect_ident()?);
            while self.eat(Token::Comma) {
                ignores.push(self.expect_ident()?);
            }
            self.eat(Token::Semicolon);
        }

        let mut declarations = Vec::new();
        loop {
            let start = self.peek_span();
            let decl = if self.peek_kw("const") {
                StateDecl::Const(self.parse_const()?.node)
            } else if self.peek_function_start() {
                StateDecl::Function(self.parse_function()?)
            } else {
                break;
            };
            let end = self.current_span.end;
            declarations.push(Spanned::new(decl, start.start..end));
        }

        self.expect(Token::RBrace)?;
        Ok(State {
            name,
            ignores,
            declarations,
        })
    }
}
