//! Ticket identifier parsing.
//!
//! Identifiers look like `TK-2026-0042`: a letter prefix, a four digit year
//! and a numeric sequence. Only the sequence feeds synthesis.

use std::fmt;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)-(\d{4})-(\d+)$").unwrap());

/// Prefix of identifiers built by the manager listing.
pub const DEFAULT_PREFIX: &str = "TK";

/// Seed extracted from an identifier's numeric sequence.
pub type Seed = u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Malformed ticket identifier: {0}")]
    Malformed(String),

    #[error("Ticket sequence out of range: {0}")]
    SequenceOverflow(String),
}

/// A validated ticket identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketIdentifier {
    pub prefix: String,
    pub year: u16,
    pub sequence: Seed,
}

impl TicketIdentifier {
    pub fn new(prefix: &str, year: u16, sequence: Seed) -> Self {
        Self {
            prefix: prefix.to_string(),
            year,
            sequence,
        }
    }

    /// Parse and validate an identifier string.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let captures = IDENTIFIER_PATTERN
            .captures(input)
            .ok_or_else(|| IdentifierError::Malformed(input.to_string()))?;

        let year = captures[2]
            .parse::<u16>()
            .map_err(|_| IdentifierError::Malformed(input.to_string()))?;
        let sequence = captures[3]
            .parse::<Seed>()
            .map_err(|_| IdentifierError::SequenceOverflow(input.to_string()))?;

        Ok(Self {
            prefix: captures[1].to_string(),
            year,
            sequence,
        })
    }

    /// The seed driving synthesis for this identifier.
    pub fn seed(&self) -> Seed {
        self.sequence
    }
}

impl fmt::Display for TicketIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}-{:04}", self.prefix, self.year, self.sequence)
    }
}

/// Parse an identifier straight into its seed.
pub fn parse_seed(input: &str) -> Result<Seed, IdentifierError> {
    TicketIdentifier::parse(input).map(|id| id.seed())
}
