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
use crate::Spanned;

/// The `defaultproperties { … }` block: an ordered list of assignments and
/// nested object declarations. Order matters to consumers (later
/// assignments to the same key override earlier ones); this core only
/// preserves it. A class that omits the block still gets an empty one.
#[derive(Debug, Clone, Default)]
pub struct DefaultProperties {
    pub declarations: Vec<Spanned<DefaultPropertiesDecl>>,
}

impl DefaultProperties {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum DefaultPropertiesDecl {
    Assignment(DefaultPropertiesAssignment),
    Object(DefaultPropertiesObject),
}

/// `Begin Object … End Object` — an inline sub-object. Bodies recurse
/// through the same declaration production, so objects nest arbitrarily
/// and may mix assignments with further objects.
#[derive(Debug, Clone)]
pub struct DefaultPropertiesObject {
    pub declarations: Vec<Spanned<DefaultPropertiesDecl>>,
}

/// One `Key = Value` pair.
#[derive(Debug, Clone)]
pub struct DefaultPropertiesAssignment {
    pub key: DefaultPropertiesKey,
    pub value: Spanned<DefaultPropertiesValue>,
}

/// Left-hand side of an assignment: `Foo`, or `Foo(2)` targeting one
/// element of a fixed-size array property.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPropertiesKey {
    pub name: String,
    pub index: Option<u32>,
}

impl fmt::Display for DefaultPropertiesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(index) = self.index {
            write!(f, "({})", index)?;
        }
        Ok(())
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone)]
pub enum DefaultPropertiesValue {
    Literal(Literal),

    /// `Texture'Sprite'` / `class'Pawn'`
    Reference { outer: String, name: String },

    /// A bare identifier, e.g. an enum value name
    Ident(String),

    /// `(X=1,Y=2)` — a constructor-call style object literal
    Tuple(Vec<Spanned<DefaultPropertiesAssignment>>),

    /// `((X=1),(X=2))` — an array of object literals
    Array(Vec<Vec<Spanned<DefaultPropertiesAssignment>>>),
}
