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

pub mod decl;
pub mod defaults;
pub mod expr;
pub mod op;
pub mod stmt;
pub mod types;

use std::fmt;

use logos::Span;

use decl::{BodyDecl, ClassDeclaration, Const, MemberDecl, Variable};
use defaults::DefaultProperties;

/// Every AST node carries a source span for error reporting.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A whole compilation unit: one class body.
///
/// The sections appear in the language's fixed order: constants declared
/// before the class header, the class declaration itself, the
/// var/struct/enum/const section, the function/state/const section, and the
/// defaultproperties block (present even when the source omits it).
#[derive(Debug, Clone)]
pub struct Program {
    pub constants: Vec<Spanned<Const>>,
    pub class: Spanned<ClassDeclaration>,
    pub members: Vec<Spanned<MemberDecl>>,
    pub body: Vec<Spanned<BodyDecl>>,
    pub default_properties: Spanned<DefaultProperties>,
}

impl Program {
    /// Variables of the var section, in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.members.iter().filter_map(|member| match &member.node {
            MemberDecl::Var(var) => Some(var),
            _ => None,
        })
    }
}

/// One declared name inside a `var`/`local` statement or a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableName {
    pub name: String,
    pub size: ArraySize,
}

/// The optional fixed-size suffix on a declared name: none, `[8]`, or a
/// named constant such as `[MAX_ITEMS]`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArraySize {
    Scalar,
    Fixed(u32),
    Named(String),
}

impl VariableName {
    pub fn is_array(&self) -> bool {
        !matches!(self.size, ArraySize::Scalar)
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match &self.size {
            ArraySize::Scalar => Ok(()),
            ArraySize::Fixed(size) => write!(f, "[{}]", size),
            ArraySize::Named(name) => write!(f, "[{}]", name),
        }
    }
}

/// A single keyword modifier on a variable, function, or argument,
/// e.g. `native`, `const`, `optional`. Stored in its canonical lowercase
/// spelling; the keyword sets live in the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub keyword: String,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)
    }
}
