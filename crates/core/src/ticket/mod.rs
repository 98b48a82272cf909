//! Ticket state and timeline synthesis.

pub mod catalog;
mod curated;
mod generator;
mod identifier;
mod listing;
mod repository;
mod synthesizer;
mod timeline;
mod types;

pub use curated::{curated_tickets, find_curated};
pub use generator::{draw, DrawMode, SeedStream};
pub use identifier::{parse_seed, IdentifierError, Seed, TicketIdentifier, DEFAULT_PREFIX};
pub use listing::{
    sort_tickets, ListingError, ListingStats, SequenceRange, SortField, SortOrder, TicketFilter,
    TicketQuery, MAX_LISTING_SPAN,
};
pub use repository::{TicketError, TicketRepository};
pub use synthesizer::{AttributeSynthesizer, TicketAttributes, MAX_DAYS_OPEN};
pub use timeline::{TimelineBuilder, MAX_FOLLOW_UP_DAYS, PLACEHOLDER_IMAGE};
pub use types::{
    EventType, Priority, ProblemKind, ProblemType, RecordOrigin, RiskLevel, TicketRecord,
    TicketStatus, TimelineEvent, OVERDUE_AFTER_DAYS,
};
