//! Ticket lookup: curated overrides first, synthesis otherwise.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::config::EngineConfig;

use super::curated::{curated_tickets, find_curated};
use super::identifier::{IdentifierError, TicketIdentifier, DEFAULT_PREFIX};
use super::listing::{sort_tickets, TicketQuery};
use super::synthesizer::{AttributeSynthesizer, TicketAttributes};
use super::timeline::TimelineBuilder;
use super::types::{RecordOrigin, TicketRecord, TicketStatus, TimelineEvent};

/// Error type for ticket lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    /// No curated ticket and the identifier cannot be synthesized.
    #[error("Ticket not found: {0}")]
    NotFound(String),
}

impl From<IdentifierError> for TicketError {
    fn from(err: IdentifierError) -> Self {
        match err {
            IdentifierError::Malformed(id) | IdentifierError::SequenceOverflow(id) => {
                TicketError::NotFound(id)
            }
        }
    }
}

/// Read-only ticket repository.
///
/// Holds no mutable state; a single instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    synthesizer: AttributeSynthesizer,
    timeline: TimelineBuilder,
}

impl TicketRepository {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            synthesizer: AttributeSynthesizer::new(config.draw_mode),
            timeline: TimelineBuilder::new(config.reference_date),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.timeline.reference_date()
    }

    /// Look up a ticket by identifier.
    pub fn lookup(&self, identifier: &str) -> Result<TicketRecord, TicketError> {
        if let Some(record) = find_curated(identifier) {
            debug!(identifier, "Returning curated ticket");
            return Ok(record.clone());
        }

        self.synthesize(identifier, None)
    }

    /// Look up a ticket with an explicitly assigned status.
    ///
    /// The timeline is rebuilt for `status`. Curated tickets are returned
    /// unchanged.
    pub fn lookup_with_status(
        &self,
        identifier: &str,
        status: TicketStatus,
    ) -> Result<TicketRecord, TicketError> {
        if let Some(record) = find_curated(identifier) {
            debug!(identifier, "Ignoring status assignment for curated ticket");
            return Ok(record.clone());
        }

        self.synthesize(identifier, Some(status))
    }

    /// Curated tickets shown in the recent tickets list.
    pub fn curated_tickets(&self) -> &'static [TicketRecord] {
        curated_tickets()
    }

    /// Look up every identifier in the query's range, then filter and sort.
    ///
    /// Curated tickets inside the range are listed in place of synthesis.
    pub fn list(&self, query: &TicketQuery) -> Vec<TicketRecord> {
        let mut records: Vec<TicketRecord> = query
            .range
            .sequences()
            .filter_map(|sequence| {
                let identifier = TicketIdentifier::new(DEFAULT_PREFIX, query.year, sequence);
                self.lookup(&identifier.to_string()).ok()
            })
            .filter(|record| query.filter.matches(record))
            .collect();

        sort_tickets(&mut records, query.sort, query.order);

        debug!(
            start = query.range.start(),
            end = query.range.end(),
            matched = records.len(),
            "Listed tickets"
        );

        records
    }

    fn synthesize(
        &self,
        identifier: &str,
        status_override: Option<TicketStatus>,
    ) -> Result<TicketRecord, TicketError> {
        let parsed = TicketIdentifier::parse(identifier).map_err(|e| {
            debug!(identifier, error = %e, "Identifier rejected");
            TicketError::from(e)
        })?;

        let mut stream = self.synthesizer.stream(parsed.seed());
        let attributes = self.synthesizer.synthesize(&mut stream);
        let status = status_override.unwrap_or(attributes.status);
        let events = self.timeline.build(
            status,
            attributes.problem.description,
            attributes.days_open,
            &mut stream,
        );

        debug!(
            identifier,
            status = status.as_str(),
            events = events.len(),
            "Synthesized ticket"
        );

        Ok(assemble(identifier, attributes, status, events))
    }
}

fn assemble(
    identifier: &str,
    attributes: TicketAttributes,
    status: TicketStatus,
    events: Vec<TimelineEvent>,
) -> TicketRecord {
    TicketRecord {
        identifier: identifier.to_string(),
        origin: RecordOrigin::Synthesized,
        reference: attributes.reference(),
        address: attributes.address.to_string(),
        problem_type: attributes.problem.id,
        status,
        zone: attributes.zone.to_string(),
        priority: attributes.priority,
        assignee: attributes.assignee.map(str::to_string),
        days_open: attributes.days_open,
        events,
    }
}
