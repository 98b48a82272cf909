//! Manager ticket listing over a range of sequences.
//!
//! A listing looks up every identifier in a bounded sequence range, then
//! filters and sorts the records the way the manager ticket board does.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Priority, ProblemKind, TicketRecord, TicketStatus};

/// Widest sequence range a single listing may cover.
pub const MAX_LISTING_SPAN: u64 = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Invalid sequence range: {start} > {end}")]
    InvalidRange { start: u64, end: u64 },

    #[error("Sequence range too large: {span} tickets (max {max})")]
    RangeTooLarge { span: u64, max: u64 },
}

/// Inclusive, bounded range of ticket sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceRange {
    start: u64,
    end: u64,
}

impl SequenceRange {
    pub fn new(start: u64, end: u64) -> Result<Self, ListingError> {
        if start > end {
            return Err(ListingError::InvalidRange { start, end });
        }

        let span = (end - start).saturating_add(1);
        if span > MAX_LISTING_SPAN {
            return Err(ListingError::RangeTooLarge {
                span,
                max: MAX_LISTING_SPAN,
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn sequences(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// Record filters. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Case-insensitive text matched against id, address, reference and problem label.
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub problem_type: Option<ProblemKind>,
    pub zone: Option<String>,
}

impl TicketFilter {
    pub fn matches(&self, record: &TicketRecord) -> bool {
        self.status.is_none_or(|s| record.status == s)
            && self.priority.is_none_or(|p| record.priority == p)
            && self.problem_type.is_none_or(|k| record.problem_type == k)
            && self.zone.as_deref().is_none_or(|z| record.zone == z)
            && self.matches_search(record)
    }

    fn matches_search(&self, record: &TicketRecord) -> bool {
        let query = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        [
            record.identifier.as_str(),
            record.address.as_str(),
            record.reference.as_str(),
            record.problem().label,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Field a listing is sorted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    DaysOpen,
    Priority,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Everything needed to produce a listing.
#[derive(Debug, Clone)]
pub struct TicketQuery {
    pub year: u16,
    pub range: SequenceRange,
    pub filter: TicketFilter,
    pub sort: SortField,
    pub order: SortOrder,
}

// Status weight on the board: most in need of attention first.
fn status_rank(status: TicketStatus) -> u8 {
    match status {
        TicketStatus::ActionRequired => 5,
        TicketStatus::Signaled => 4,
        TicketStatus::InProgress => 3,
        TicketStatus::Pending => 2,
        TicketStatus::Resolved => 1,
    }
}

fn compare(a: &TicketRecord, b: &TicketRecord, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_on().cmp(&b.created_on()),
        SortField::DaysOpen => a.days_open.cmp(&b.days_open),
        SortField::Priority => a.priority.cmp(&b.priority),
        SortField::Status => status_rank(a.status).cmp(&status_rank(b.status)),
    }
}

/// Sort records in place. Ties keep their sequence order.
pub fn sort_tickets(records: &mut [TicketRecord], field: SortField, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Counters shown above the manager board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    pub total: usize,
    pub urgent: usize,
    pub overdue: usize,
}

impl ListingStats {
    pub fn of(records: &[TicketRecord]) -> Self {
        Self {
            total: records.len(),
            urgent: records
                .iter()
                .filter(|r| r.priority == Priority::Urgent)
                .count(),
            overdue: records.iter().filter(|r| r.is_overdue()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::types::{EventType, RecordOrigin, TimelineEvent};
    use chrono::{NaiveDate, NaiveTime};

    fn record(seq: u32, status: TicketStatus, priority: Priority, days_open: u32) -> TicketRecord {
        TicketRecord {
            identifier: format!("TK-2026-{:04}", seq),
            origin: RecordOrigin::Synthesized,
            address: "7 Rue de Rome".to_string(),
            reference: format!("BAL-75002-{:04}", seq),
            problem_type: ProblemKind::Damaged,
            status,
            zone: "75002".to_string(),
            priority,
            assignee: None,
            days_open,
            events: vec![TimelineEvent {
                id: "e1".to_string(),
                event_type: EventType::Declaration,
                title: "Déclaration créée".to_string(),
                description: None,
                date: NaiveDate::from_ymd_opt(2026, 1, 21 - days_open).unwrap(),
                time: NaiveTime::MIN,
                image_ref: None,
            }],
        }
    }

    fn ids(records: &[TicketRecord]) -> Vec<&str> {
        records.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn test_range_bounds() {
        assert!(SequenceRange::new(1, 1).is_ok());
        assert!(SequenceRange::new(0, MAX_LISTING_SPAN - 1).is_ok());
        assert_eq!(
            SequenceRange::new(5, 4),
            Err(ListingError::InvalidRange { start: 5, end: 4 })
        );
        assert!(matches!(
            SequenceRange::new(0, MAX_LISTING_SPAN),
            Err(ListingError::RangeTooLarge { .. })
        ));
        assert!(matches!(
            SequenceRange::new(0, u64::MAX),
            Err(ListingError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TicketFilter::default();
        assert!(filter.matches(&record(1, TicketStatus::Pending, Priority::Low, 3)));
    }

    #[test]
    fn test_filter_by_fields() {
        let ticket = record(1, TicketStatus::Pending, Priority::High, 3);

        let by_status = TicketFilter {
            status: Some(TicketStatus::Pending),
            ..Default::default()
        };
        assert!(by_status.matches(&ticket));

        let wrong_zone = TicketFilter {
            zone: Some("75016".to_string()),
            ..Default::default()
        };
        assert!(!wrong_zone.matches(&ticket));

        let combined = TicketFilter {
            priority: Some(Priority::High),
            problem_type: Some(ProblemKind::Dog),
            ..Default::default()
        };
        assert!(!combined.matches(&ticket));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let ticket = record(12, TicketStatus::Signaled, Priority::Low, 2);
        for query in ["rue de rome", "bal-75002-0012", "tk-2026-0012", "DÉTÉRIORÉE"] {
            let filter = TicketFilter {
                search: Some(query.to_string()),
                ..Default::default()
            };
            assert!(filter.matches(&ticket), "query {query:?}");
        }

        let miss = TicketFilter {
            search: Some("Kléber".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&ticket));

        let blank = TicketFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank.matches(&ticket));
    }

    #[test]
    fn test_sort_by_days_open() {
        let mut records = vec![
            record(1, TicketStatus::Pending, Priority::Low, 3),
            record(2, TicketStatus::Pending, Priority::Low, 12),
            record(3, TicketStatus::Pending, Priority::Low, 8),
        ];

        sort_tickets(&mut records, SortField::DaysOpen, SortOrder::Desc);
        assert_eq!(ids(&records), vec!["TK-2026-0002", "TK-2026-0003", "TK-2026-0001"]);

        sort_tickets(&mut records, SortField::DaysOpen, SortOrder::Asc);
        assert_eq!(ids(&records), vec!["TK-2026-0001", "TK-2026-0003", "TK-2026-0002"]);
    }

    #[test]
    fn test_sort_created_at_desc_is_newest_first() {
        let mut records = vec![
            record(1, TicketStatus::Pending, Priority::Low, 3),
            record(2, TicketStatus::Pending, Priority::Low, 12),
        ];
        sort_tickets(&mut records, SortField::CreatedAt, SortOrder::Desc);
        assert_eq!(ids(&records), vec!["TK-2026-0001", "TK-2026-0002"]);
    }

    #[test]
    fn test_sort_by_status_rank_keeps_ties_in_order() {
        let mut records = vec![
            record(1, TicketStatus::Resolved, Priority::Low, 3),
            record(2, TicketStatus::Signaled, Priority::Low, 3),
            record(3, TicketStatus::ActionRequired, Priority::Low, 3),
            record(4, TicketStatus::Signaled, Priority::Low, 3),
        ];
        sort_tickets(&mut records, SortField::Status, SortOrder::Desc);
        assert_eq!(
            ids(&records),
            vec!["TK-2026-0003", "TK-2026-0002", "TK-2026-0004", "TK-2026-0001"]
        );
    }

    #[test]
    fn test_sort_by_priority() {
        let mut records = vec![
            record(1, TicketStatus::Pending, Priority::Medium, 3),
            record(2, TicketStatus::Pending, Priority::Urgent, 3),
            record(3, TicketStatus::Pending, Priority::Low, 3),
        ];
        sort_tickets(&mut records, SortField::Priority, SortOrder::Desc);
        assert_eq!(ids(&records), vec!["TK-2026-0002", "TK-2026-0001", "TK-2026-0003"]);
    }

    #[test]
    fn test_stats() {
        let records = vec![
            record(1, TicketStatus::Pending, Priority::Urgent, 9),
            record(2, TicketStatus::Resolved, Priority::Urgent, 15),
            record(3, TicketStatus::Signaled, Priority::Low, 2),
        ];
        assert_eq!(
            ListingStats::of(&records),
            ListingStats {
                total: 3,
                urgent: 2,
                overdue: 1,
            }
        );
    }
}
