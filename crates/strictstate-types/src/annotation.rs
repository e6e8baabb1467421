//! Parser for doc-comment type annotations.
//!
//! Grammar:
//!
//! ```text
//! union := atom ('|' atom)*
//! atom  := '?' atom | '(' union ')' suffix* | name suffix*
//! suffix := '[]'
//! ```
//!
//! Keywords are case-insensitive. `self` and `static` resolve to the
//! declaring class, `parent` to its parent.

use logos::Logos;
use strictstate_core::types::ClassName;

use crate::descriptor::TypeDescriptor;

/// Class names used to resolve relative keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeContext<'a> {
    pub declaring_class: Option<&'a ClassName>,
    pub parent: Option<&'a ClassName>,
}

/// Errors produced while parsing a type annotation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    #[error("Empty type expression")]
    Empty,

    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("Unexpected '{found}' at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("Unexpected end of type expression")]
    UnexpectedEnd,

    #[error("'{name}' used outside of a class context")]
    UnresolvedRelative { name: String },
}

/// Extract and parse the type of a property annotation.
///
/// Accepts either a doc block carrying an `@var` tag or a bare type
/// expression. A doc block without `@var` yields an empty set.
pub fn parse_annotation(
    text: &str,
    ctx: &TypeContext<'_>,
) -> Result<Vec<TypeDescriptor>, AnnotationError> {
    match extract_type_expression(text) {
        Some(expr) => parse_type(expr, ctx),
        None => Ok(vec![]),
    }
}

/// Parse a bare type expression such as `?int`, `Foo[]|null`.
pub fn parse_type(
    expr: &str,
    ctx: &TypeContext<'_>,
) -> Result<Vec<TypeDescriptor>, AnnotationError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(AnnotationError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        ctx,
    };
    let types = parser.union()?;
    match parser.peek() {
        None => Ok(types),
        Some(tok) => Err(tok.unexpected()),
    }
}

/// Locate the type expression inside an annotation.
fn extract_type_expression(text: &str) -> Option<&str> {
    let is_type_char =
        |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '\\' | '$' | '|' | '?' | '(' | ')' | '[' | ']');

    if let Some(idx) = text.find("@var") {
        let rest = text[idx + "@var".len()..].trim_start();
        let end = rest.find(|c: char| !is_type_char(c)).unwrap_or(rest.len());
        let expr = &rest[..end];
        return if expr.is_empty() { None } else { Some(expr) };
    }
    if text.contains('@') {
        return None;
    }

    let body = text
        .trim()
        .trim_start_matches("/**")
        .trim_end_matches("*/")
        .trim()
        .trim_matches('*')
        .trim();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum TokenKind {
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[]")]
    Brackets,
    #[regex(r"[A-Za-z_\\$][A-Za-z0-9_\\]*", |lex| lex.slice().to_string())]
    Name(String),
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    offset: usize,
}

impl Token {
    fn unexpected(&self) -> AnnotationError {
        let found = match &self.kind {
            TokenKind::Pipe => "|".to_string(),
            TokenKind::Question => "?".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Brackets => "[]".to_string(),
            TokenKind::Name(n) => n.clone(),
        };
        AnnotationError::UnexpectedToken {
            found,
            offset: self.offset,
        }
    }
}

fn tokenize(expr: &str) -> Result<Vec<Token>, AnnotationError> {
    let mut lexer = TokenKind::lexer(expr);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let offset = lexer.span().start;
        match result {
            Ok(kind) => tokens.push(Token { kind, offset }),
            Err(()) => {
                return Err(match lexer.slice().chars().next() {
                    Some(ch) => AnnotationError::UnexpectedChar { ch, offset },
                    None => AnnotationError::UnexpectedEnd,
                })
            }
        }
    }
    Ok(tokens)
}

struct Parser<'c, 'a> {
    tokens: Vec<Token>,
    pos: usize,
    ctx: &'c TypeContext<'a>,
}

impl Parser<'_, '_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn union(&mut self) -> Result<Vec<TypeDescriptor>, AnnotationError> {
        let mut members = vec![self.atom()?];
        while matches!(self.peek(), Some(Token { kind: TokenKind::Pipe, .. })) {
            self.pos += 1;
            members.push(self.atom()?);
        }
        Ok(members)
    }

    fn atom(&mut self) -> Result<TypeDescriptor, AnnotationError> {
        let tok = self.next().ok_or(AnnotationError::UnexpectedEnd)?;
        let base = match &tok.kind {
            TokenKind::Question => return Ok(TypeDescriptor::nullable(self.atom()?)),
            TokenKind::LParen => {
                let mut members = self.union()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => {}
                    Some(other) => return Err(other.unexpected()),
                    None => return Err(AnnotationError::UnexpectedEnd),
                }
                if members.len() == 1 {
                    members.remove(0)
                } else {
                    TypeDescriptor::Union(members)
                }
            }
            TokenKind::Name(name) => self.named(name, tok.offset)?,
            _ => return Err(tok.unexpected()),
        };
        Ok(self.suffixes(base))
    }

    fn suffixes(&mut self, mut base: TypeDescriptor) -> TypeDescriptor {
        while matches!(self.peek(), Some(Token { kind: TokenKind::Brackets, .. })) {
            self.pos += 1;
            base = TypeDescriptor::collection_of(base);
        }
        base
    }

    fn named(&self, name: &str, offset: usize) -> Result<TypeDescriptor, AnnotationError> {
        let resolved = match name.to_ascii_lowercase().as_str() {
            "mixed" => TypeDescriptor::Mixed,
            "null" | "void" => TypeDescriptor::Null,
            "bool" | "boolean" | "true" | "false" => TypeDescriptor::Bool,
            "int" | "integer" => TypeDescriptor::Int,
            "float" | "double" => TypeDescriptor::Float,
            "string" => TypeDescriptor::String,
            "array" | "iterable" => TypeDescriptor::Array,
            "object" => TypeDescriptor::Object,
            "callable" => TypeDescriptor::Callable,
            "self" | "static" | "$this" => TypeDescriptor::Class(
                self.ctx
                    .declaring_class
                    .cloned()
                    .ok_or_else(|| AnnotationError::UnresolvedRelative { name: name.to_string() })?,
            ),
            "parent" => TypeDescriptor::Class(
                self.ctx
                    .parent
                    .cloned()
                    .ok_or_else(|| AnnotationError::UnresolvedRelative { name: name.to_string() })?,
            ),
            _ if name.starts_with('$') => {
                return Err(AnnotationError::UnexpectedToken {
                    found: name.to_string(),
                    offset,
                })
            }
            _ => TypeDescriptor::class(name),
        };
        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "annotation_tests.rs"]
mod tests;
