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

use crate::decl::Const;
use crate::expr::Expr;
use crate::op::AssignOp;
use crate::Spanned;

#[derive(Debug, Clone)]
pub enum Stmt {
    /// `return` / `return expr`
    Return(Option<Spanned<Expr>>),

    /// `break`
    Break,

    /// `continue`
    Continue,

    /// `target = value`, `target $= value`, `target @= value`
    Assign {
        target: Spanned<Expr>,
        op: AssignOp,
        value: Spanned<Expr>,
    },

    /// Expression used as a statement (a call, usually)
    Expr(Spanned<Expr>),

    /// `const` re-declaration inside a body
    Const(Const),

    /// ```text
    /// if (test) { body }
    /// else if (test2) { … }
    /// else { … }
    /// ```
    /// Bodies are single statements or braced lists, normalized to lists.
    If {
        test: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
        elif_clauses: Vec<(Spanned<Expr>, Vec<Spanned<Stmt>>)>,
        else_body: Option<Vec<Spanned<Stmt>>>,
    },

    /// `for (init; test; update) body` — init is a possibly-empty
    /// comma-separated list of simple statements, test is optional, the
    /// update statement is required.
    For {
        init: Vec<Spanned<Stmt>>,
        test: Option<Spanned<Expr>>,
        update: Box<Spanned<Stmt>>,
        body: Vec<Spanned<Stmt>>,
    },

    /// `foreach AllActors(class'Pawn', P) body`
    ForEach {
        iterator: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
    },

    /// `while (test) body`
    While {
        test: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
    },

    /// `do { body } until(test);` — the until clause may be absent
    DoUntil {
        body: Vec<Spanned<Stmt>>,
        test: Option<Spanned<Expr>>,
    },

    /// `switch (subject) { case …: … default: … }`
    Switch {
        subject: Spanned<Expr>,
        cases: Vec<SwitchCase>,
    },
}

/// One labelled arm of a `switch`, in source order.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub label: CaseLabel,
    pub body: Vec<Spanned<Stmt>>,
}

/// `case Atom:` or `default:`. Case labels use the atom grammar (literal,
/// identifier, or reference), not full expressions.
#[derive(Debug, Clone)]
pub enum CaseLabel {
    Case(Spanned<Expr>),
    Default,
}
