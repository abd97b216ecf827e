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

pub mod lexer;
pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::{ParseError, Parser};

use ast::{Program, Spanned};

/// Parse one class body into a `Program` AST.
///
/// This is the main entry point: it lexes `source`, runs the recursive
/// descent parser over the token stream, and returns the typed tree, or
/// the first lexical/syntax error with its source span. Parsing is a pure
/// function of `source` — no I/O, no shared state — so distinct calls are
/// free to run concurrently.
pub fn parse(source: &str) -> Result<Spanned<Program>, ParseError> {
    let tokens = lexer::tokenize(source);
    let mut parser = Parser::new(source, tokens);
    parser.parse_program()
}
