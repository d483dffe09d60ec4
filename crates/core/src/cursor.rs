//! One-token lookahead over the input.

/// Read position over a borrowed token list. Peeking never consumes.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a, S> {
    tokens: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> TokenCursor<'a, S> {
    pub fn new(tokens: &'a [S]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).map(|token| token.as_ref())
    }

    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
