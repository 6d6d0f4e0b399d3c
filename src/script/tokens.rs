//! Whitespace token stream

use std::iter::Peekable;
use std::str::SplitWhitespace;

use crate::script::error::ScriptError;

pub struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().peekable(),
        }
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    pub fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    /// Next token as a name
    pub fn word(&mut self, expected: &'static str) -> Result<&'a str, ScriptError> {
        self.next_token()
            .ok_or(ScriptError::MissingToken { expected })
    }

    /// Next token as a base-10 integer
    pub fn int(&mut self, field: &'static str) -> Result<i32, ScriptError> {
        let token = self.word(field)?;
        token.parse().map_err(|_| ScriptError::InvalidInteger {
            field,
            token: token.to_string(),
        })
    }

    /// Token after the next one, without consuming either
    pub fn peek_second(&self) -> Option<&'a str> {
        let mut ahead = self.inner.clone();
        ahead.next();
        ahead.next()
    }

    /// Consume up to `limit` integer tokens
    ///
    /// Stops early at an integer followed by a token for which `is_keyword`
    /// holds, since that integer names the actor of the next command.
    pub fn skip_integers(&mut self, limit: usize, is_keyword: impl Fn(&str) -> bool) -> usize {
        let mut skipped = 0;
        while skipped < limit && self.peek().is_some_and(|t| t.parse::<i32>().is_ok()) {
            if self.peek_second().is_some_and(&is_keyword) {
                break;
            }
            self.inner.next();
            skipped += 1;
        }
        skipped
    }
}
