//! # Tokenizer/ Lexer
//!
//! Scans JSON text into an ordered sequence of typed tokens.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{LexError, tokenize, tokenize_with};
pub use token::{Number, Token};
