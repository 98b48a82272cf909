//! Attribute synthesis: maps seeded draws onto the catalogs.

use tracing::trace;

use super::catalog::{self, ADDRESSES, ASSIGNEES, PRIORITIES, PROBLEM_TYPES, STATUSES, ZONES};
use super::generator::{DrawMode, SeedStream};
use super::identifier::Seed;
use super::types::{Priority, ProblemType, TicketStatus};

/// Upper bound (inclusive) of synthesized days open.
pub const MAX_DAYS_OPEN: u32 = 20;

/// Attributes derived from a seed, before the timeline is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketAttributes {
    pub seed: Seed,
    pub address: &'static str,
    pub problem: &'static ProblemType,
    pub status: TicketStatus,
    pub zone: &'static str,
    pub priority: Priority,
    pub assignee: Option<&'static str>,
    /// In `1..=MAX_DAYS_OPEN`.
    pub days_open: u32,
}

impl TicketAttributes {
    pub fn reference(&self) -> String {
        catalog::reference(self.zone, self.seed)
    }
}

/// Derives ticket attributes from a seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeSynthesizer {
    mode: DrawMode,
}

impl AttributeSynthesizer {
    pub fn new(mode: DrawMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Open a fresh draw stream for a seed.
    pub fn stream(&self, seed: Seed) -> SeedStream {
        SeedStream::new(seed, self.mode)
    }

    /// Draw every attribute from `stream`, in catalog order.
    ///
    /// The stream is left positioned for the timeline draws.
    pub fn synthesize(&self, stream: &mut SeedStream) -> TicketAttributes {
        let address = ADDRESSES[stream.index(ADDRESSES.len())];
        let problem = &PROBLEM_TYPES[stream.index(PROBLEM_TYPES.len())];
        let status = STATUSES[stream.index(STATUSES.len())];
        let zone = ZONES[stream.index(ZONES.len())];
        let priority = PRIORITIES[stream.index(PRIORITIES.len())];
        let assignee = ASSIGNEES[stream.index(ASSIGNEES.len())];
        let days_open = stream.draw(MAX_DAYS_OPEN) + 1;

        trace!(
            seed = stream.seed(),
            mode = self.mode.as_str(),
            status = status.as_str(),
            days_open,
            "Synthesized ticket attributes"
        );

        TicketAttributes {
            seed: stream.seed(),
            address,
            problem,
            status,
            zone,
            priority,
            assignee,
            days_open,
        }
    }
}
