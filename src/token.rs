// src/token.rs

//! Random alphabetic tokens handed to every launched process.
//!
//! A token is `TOKEN_LEN` characters drawn uniformly, with replacement,
//! from [`ALPHABET`]. Tokens from different draws are independent and may
//! collide.

use std::fmt;

use rand::Rng;

/// The 52 ASCII letters, lowercase first.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in every token.
pub const TOKEN_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Draw a fresh token from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..TOKEN_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Token(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if `s` has the shape of a generated token.
pub fn is_valid_token(s: &str) -> bool {
    s.len() == TOKEN_LEN && s.bytes().all(|b| ALPHABET.contains(&b))
}
