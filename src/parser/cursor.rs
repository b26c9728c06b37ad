//! # Token Cursor
//!
//! A read position over a borrowed token slice. The cursor only moves
//! forward; every token is handed out at most once.
use crate::parser::SyntaxError;
use crate::tokenizer::Token;

/// Forward-only cursor over a token sequence, tracking how deeply nested the
/// parser currently is.
#[derive(Debug)]
pub struct Cursor<'a> {
    /// The full token sequence
    tokens: &'a [Token],
    /// Index of the next token to hand out
    position: usize,
    /// Number of currently open objects and arrays
    depth: usize,
    /// Nesting limit, if any
    max_depth: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `tokens` with no nesting limit.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth: None,
        }
    }

    /// Sets the nesting limit enforced by [`Cursor::enter`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Index of the next token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Consumes the next token, returning it along with its index.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnexpectedEndOfInput`] if the cursor is
    /// exhausted.
    pub fn advance(&mut self) -> Result<(usize, &'a Token), SyntaxError> {
        let position = self.position;
        let token = self
            .tokens
            .get(position)
            .ok_or(SyntaxError::UnexpectedEndOfInput)?;
        self.position += 1;
        Ok((position, token))
    }

    /// Records entry into an object or array.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::DepthLimitExceeded`] if this would nest deeper
    /// than the configured limit.
    pub fn enter(&mut self) -> Result<(), SyntaxError> {
        self.depth += 1;
        if let Some(limit) = self.max_depth
            && self.depth > limit
        {
            return Err(SyntaxError::DepthLimitExceeded { limit });
        }
        Ok(())
    }

    /// Records exit from an object or array.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_monotonically() {
        let tokens = vec![Token::LBracket, Token::Null, Token::RBracket];
        let mut cursor = Cursor::new(&tokens);

        assert_eq!(cursor.peek(), Some(&Token::LBracket));
        assert_eq!(cursor.advance().unwrap(), (0, &Token::LBracket));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.advance().unwrap(), (1, &Token::Null));
        assert_eq!(cursor.advance().unwrap(), (2, &Token::RBracket));
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn exhausted_cursor_reports_end_of_input() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(cursor.advance(), Err(SyntaxError::UnexpectedEndOfInput));
        // still exhausted, position unchanged
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn depth_limit() {
        let mut cursor = Cursor::new(&[]).with_max_depth(Some(2));
        assert!(cursor.enter().is_ok());
        assert!(cursor.enter().is_ok());
        assert_eq!(
            cursor.enter(),
            Err(SyntaxError::DepthLimitExceeded { limit: 2 })
        );
    }

    #[test]
    fn leaving_frees_a_level() {
        let mut cursor = Cursor::new(&[]).with_max_depth(Some(1));
        assert!(cursor.enter().is_ok());
        cursor.leave();
        assert!(cursor.enter().is_ok());
    }

    #[test]
    fn unlimited_depth() {
        let mut cursor = Cursor::new(&[]);
        for _ in 0..10_000 {
            assert!(cursor.enter().is_ok());
        }
    }
}
