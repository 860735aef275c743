use crate::token::Token;

/// A cursor over a token slice for recursive-descent walking.
///
/// Each handler consumes exactly the tokens of its own block, so the
/// cursor position after a handler returns is where the caller resumes.
#[derive(Clone)]
pub struct TokenCursor<'a> {
    /// The tokens being walked.
    pub tokens: &'a [Token],
    /// Index of the next token to consume.
    pub i: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, i: 0 }
    }

    /// Returns true once every token has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.tokens.len()
    }

    /// Peeks at the next token without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.i)
    }

    /// Consumes and returns the next token.
    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.i)?;
        self.i += 1;
        Some(token)
    }

    /// Consumes the rest of a block whose opening token was just bumped,
    /// including its matching close.
    pub fn skip_block(&mut self) {
        let mut depth = 1usize;
        while let Some(token) = self.bump() {
            if token.is_open() {
                depth += 1;
            } else if token.is_close() {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
    }
}
