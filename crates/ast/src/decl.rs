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

use std::fmt;

use crate::expr::Literal;
use crate::stmt::Stmt;
use crate::types::Type;
use crate::{Modifier, Spanned, VariableName};

/// `class Name extends Super <modifiers>;`
///
/// The `extends` clause is absent only on the language's root class.
#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub name: String,
    pub superclass: Option<String>,
    pub modifiers: Vec<ClassModifier>,
}

/// One class-level attribute, e.g. `abstract` or `hidecategories(A,B)`.
/// Arguments are present only for the modifiers that take a parenthesized
/// identifier list.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModifier {
    pub keyword: String,
    pub arguments: Vec<String>,
}

impl fmt::Display for ClassModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)?;
        if !self.arguments.is_empty() {
            write!(f, "({})", self.arguments.join(","))?;
        }
        Ok(())
    }
}

/// `const NAME = literal;`
#[derive(Debug, Clone)]
pub struct Const {
    pub name: String,
    pub value: Spanned<Literal>,
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const {} = {}", self.name, self.value.node)
    }
}

/// `enum Name { A, B, C };` — declaration order is the ordinal order.
#[derive(Debug, Clone)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

/// `struct Name { var … };` — members are full typed `var` declarations.
#[derive(Debug, Clone)]
pub struct Struct {
    pub name: String,
    pub members: Vec<Spanned<Variable>>,
}

/// One `var` declaration statement:
/// `var(Category) <modifiers> Type Name[2], Other;`
#[derive(Debug, Clone)]
pub struct Variable {
    /// True when the declaration carries an edit clause, `var(…)`.
    pub editable: bool,
    /// The edit category, if the clause names one; `var()` leaves it empty.
    pub category: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub ty: VarType,
    pub names: Vec<VariableName>,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("var")?;
        for modifier in &self.modifiers {
            write!(f, " {}", modifier)?;
        }
        write!(f, " {}", self.ty)?;
        let names: Vec<String> = self.names.iter().map(ToString::to_string).collect();
        write!(f, " {}", names.join(", "))
    }
}

/// The type position of a `var`: a type reference, or an inline
/// struct/enum declaration doubling as the type.
#[derive(Debug, Clone)]
pub enum VarType {
    Type(Type),
    Struct(Struct),
    Enum(Enum),
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarType::Type(ty) => ty.fmt(f),
            VarType::Struct(decl) => write!(f, "struct {}", decl.name),
            VarType::Enum(decl) => write!(f, "enum {}", decl.name),
        }
    }
}

/// Whether a declaration used the `function` or the `event` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    Event,
}

impl FunctionKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Event => "event",
        }
    }
}

/// A function or event signature plus optional body.
///
/// `body: None` means the declaration is a forward/native prototype,
/// terminated by `;` instead of a braced body. A missing return type
/// means void.
#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    /// Modifiers from both legal positions (before and after the
    /// function/event keyword), merged in source order.
    pub modifiers: Vec<Modifier>,
    pub kind: FunctionKind,
    pub return_type: Option<Type>,
    pub name: String,
    pub arguments: Vec<FunctionArgument>,
    pub body: Option<FunctionBody>,
}

impl FunctionDeclaration {
    pub fn is_prototype(&self) -> bool {
        self.body.is_none()
    }
}

/// One parameter: `<coerce|optional|out> Type Name[Size]`
#[derive(Debug, Clone)]
pub struct FunctionArgument {
    pub modifiers: Vec<Modifier>,
    pub ty: Type,
    pub name: VariableName,
}

/// A braced function body: all `local` declarations come strictly before
/// the statement list.
#[derive(Debug, Clone)]
pub struct FunctionBody {
    pub locals: Vec<Spanned<Local>>,
    pub statements: Vec<Spanned<Stmt>>,
}

/// `local Type Name, Other;` inside a function body.
#[derive(Debug, Clone)]
pub struct Local {
    pub ty: Type,
    pub names: Vec<VariableName>,
}

impl fmt::Display for Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.names.iter().map(ToString::to_string).collect();
        write!(f, "local {} {}", self.ty, names.join(", "))
    }
}

/// `state Name { ignores A, B; consts and functions }` — no nested states.
#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub ignores: Vec<String>,
    pub declarations: Vec<Spanned<StateDecl>>,
}

/// A declaration legal inside a state body.
#[derive(Debug, Clone)]
pub enum StateDecl {
    Const(Const),
    Function(FunctionDeclaration),
}

/// A declaration of the var/struct/enum/const section, between the class
/// header and the first function.
#[derive(Debug, Clone)]
pub enum MemberDecl {
    Var(Variable),
    Struct(Struct),
    Enum(Enum),
    Const(Const),
}

/// A declaration of the function/state/const section.
#[derive(Debug, Clone)]
pub enum BodyDecl {
    Function(FunctionDeclaration),
    State(State),
    Const(Const),
}
