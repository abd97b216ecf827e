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

/// Binary operators, in the grammar's own listing order. The grammar
/// assigns them no relative precedence; the parser folds them left to
/// right at a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    NotEq,
    Le,
    Ge,
    ApproxEq,
    Mod,
    Mul,
    Div,
    Add,
    Sub,
    Lt,
    Gt,
    Concat,
    ConcatSpace,
    Or,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Dot,
    And,
    Shr,
    Shl,
    UnsignedShl,
    UnsignedShr,
    Pow,
    Cross,
    BitAnd,
    BitOr,
    BitXor,
    Xor,
}

impl BinOp {
    /// The operator's source spelling.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::ApproxEq => "~=",
            BinOp::Mod => "%",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Concat => "$",
            BinOp::ConcatSpace => "@",
            BinOp::Or => "||",
            BinOp::AddAssign => "+=",
            BinOp::SubAssign => "-=",
            BinOp::MulAssign => "*=",
            BinOp::DivAssign => "/=",
            BinOp::Dot => "dot",
            BinOp::And => "&&",
            BinOp::Shr => ">>",
            BinOp::Shl => "<<",
            BinOp::UnsignedShl => "<<<",
            BinOp::UnsignedShr => ">>>",
            BinOp::Pow => "**",
            BinOp::Cross => "cross",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Xor => "^^",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix unary operators: `-x`, `!x`, `++x`, `--x`, `^x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Neg,
    Not,
    Inc,
    Dec,
    BitNot,
}

impl PrefixOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOp::Neg => "-",
            PrefixOp::Not => "!",
            PrefixOp::Inc => "++",
            PrefixOp::Dec => "--",
            PrefixOp::BitNot => "^",
        }
    }
}

/// Postfix unary operators: `x++`, `x--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            PostfixOp::Inc => "++",
            PostfixOp::Dec => "--",
        }
    }
}

/// Assignment operators: `=`, `$=`, `@=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    ConcatAssign,
    ConcatSpaceAssign,
}

impl AssignOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::ConcatAssign => "$=",
            AssignOp::ConcatSpaceAssign => "@=",
        }
    }
}
