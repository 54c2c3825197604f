//! Reading instances from text: `n m` followed by `m` triples `u v w`, all whitespace separated.
use std::io::Read;
use log::warn;
use miette::{Diagnostic, IntoDiagnostic, NamedSource, Result as MResult, SourceSpan, WrapErr};
use thiserror::Error;
use crate::constraint::{Constraint, Instance, Vertex};

/// Largest accepted `n` or `m`, the bound of the problem statement.
pub const MAX_COUNT: usize = 200_000;

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("input ended early, expected {expected}")]
    #[diagnostic(
        code(rankperm::input::unexpected_end),
        help("the input is `n m` followed by `m` lines of `u v w`")
    )]
    UnexpectedEnd {
        expected: String,
        #[source_code]
        src: NamedSource,
        #[label("input ends here")]
        at: SourceSpan,
    },

    #[error("`{token}` is not a valid {expected}")]
    #[diagnostic(code(rankperm::input::invalid_integer))]
    InvalidInteger {
        token: String,
        expected: String,
        #[source_code]
        src: NamedSource,
        #[label("expected a 64-bit integer")]
        at: SourceSpan,
    },

    #[error("{what} must not be negative, got {value}")]
    #[diagnostic(code(rankperm::input::negative_count))]
    NegativeCount {
        what: &'static str,
        value: i64,
        #[source_code]
        src: NamedSource,
        #[label("negative count")]
        at: SourceSpan,
    },

    #[error("{what} is {value}, more than the limit of {limit}")]
    #[diagnostic(code(rankperm::input::count_too_large))]
    CountTooLarge {
        what: &'static str,
        value: i64,
        limit: usize,
        #[source_code]
        src: NamedSource,
        #[label("too large")]
        at: SourceSpan,
    },

    #[error("constraint #{index} references vertex {value}, but vertices are numbered 1..={vertices}")]
    #[diagnostic(code(rankperm::input::vertex_out_of_range))]
    VertexOutOfRange {
        index: usize,
        value: i64,
        vertices: usize,
        #[source_code]
        src: NamedSource,
        #[label("out of range")]
        at: SourceSpan,
    },
}

/// Whitespace-separated tokens with their byte offsets.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        let start = self.pos + skipped;
        if start >= self.text.len() {
            self.pos = self.text.len();
            return None;
        }
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some((start, &self.text[start..start + len]))
    }
}

struct Reader<'a> {
    name: &'a str,
    text: &'a str,
    tokens: Tokens<'a>,
}

impl<'a> Reader<'a> {
    fn src(&self) -> NamedSource {
        NamedSource::new(self.name, self.text.to_string())
    }

    fn int(&mut self, expected: &str) -> Result<(i64, SourceSpan), InputError> {
        let (offset, token) = match self.tokens.next() {
            Some(t) => t,
            None => {
                return Err(InputError::UnexpectedEnd {
                    expected: expected.to_string(),
                    src: self.src(),
                    at: (self.text.len(), 0).into(),
                })
            },
        };
        let at: SourceSpan = (offset, token.len()).into();
        match token.parse::<i64>() {
            Ok(value) => Ok((value, at)),
            Err(_) => Err(InputError::InvalidInteger {
                token: token.to_string(),
                expected: expected.to_string(),
                src: self.src(),
                at,
            }),
        }
    }

    fn count(&mut self, what: &'static str) -> Result<usize, InputError> {
        let (value, at) = self.int(what)?;
        if value < 0 {
            return Err(InputError::NegativeCount { what, value, src: self.src(), at });
        }
        if value as u64 > MAX_COUNT as u64 {
            return Err(InputError::CountTooLarge {
                what,
                value,
                limit: MAX_COUNT,
                src: self.src(),
                at,
            });
        }
        Ok(value as usize)
    }

    fn vertex(&mut self, index: usize, vertices: usize, expected: &str) -> Result<Vertex, InputError> {
        let (value, at) = self.int(expected)?;
        Vertex::checked(value, vertices).ok_or_else(|| InputError::VertexOutOfRange {
            index,
            value,
            vertices,
            src: self.src(),
            at,
        })
    }
}

/// Parse an instance from `text`. `name` is only used to label diagnostics.
pub fn parse(name: &str, text: &str) -> Result<Instance, InputError> {
    let mut reader = Reader { name, text, tokens: Tokens::new(text) };

    let vertices = reader.count("vertex count `n`")?;
    let count = reader.count("constraint count `m`")?;

    let mut constraints = Vec::new();
    for index in 1..=count {
        let from = reader.vertex(index, vertices, "vertex `u`")?;
        let to = reader.vertex(index, vertices, "vertex `v`")?;
        let (weight, _) = reader.int("weight `w`")?;
        constraints.push(Constraint { from, to, weight });
    }

    let trailing = reader.tokens.count();
    if trailing > 0 {
        warn!("ignoring {} trailing token(s) after constraint #{}", trailing, count);
    }

    Ok(Instance { vertices, constraints })
}

/// Read and parse all of standard input.
pub fn read_stdin() -> MResult<Instance> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .into_diagnostic()
        .wrap_err("failed to read standard input")?;
    Ok(parse("<stdin>", &text)?)
}
