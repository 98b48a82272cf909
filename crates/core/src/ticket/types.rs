//! Core ticket data types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status & Priority
// ============================================================================

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    /// Reported, nothing done yet.
    Signaled,
    /// Owner contacted and answered, field check scheduled.
    InProgress,
    /// A field action is required. Never synthesized from a seed.
    ActionRequired,
    /// Formal letter sent, waiting on the owner.
    Pending,
    /// Verified and closed.
    Resolved,
}

impl TicketStatus {
    /// Statuses reachable through synthesis, in catalog order.
    pub const SYNTHESIZED: [TicketStatus; 4] = [
        TicketStatus::Signaled,
        TicketStatus::InProgress,
        TicketStatus::Pending,
        TicketStatus::Resolved,
    ];

    /// Returns the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Signaled => "signaled",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::ActionRequired => "action-required",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
        }
    }

    /// Display label shown to field workers and managers.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Signaled => "Signalé",
            TicketStatus::InProgress => "En cours",
            TicketStatus::ActionRequired => "Action requise",
            TicketStatus::Pending => "En attente",
            TicketStatus::Resolved => "Résolu",
        }
    }

    /// Parse a wire string (as produced by [`TicketStatus::as_str`]).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "signaled" => Some(TicketStatus::Signaled),
            "in-progress" => Some(TicketStatus::InProgress),
            "action-required" => Some(TicketStatus::ActionRequired),
            "pending" => Some(TicketStatus::Pending),
            "resolved" => Some(TicketStatus::Resolved),
            _ => None,
        }
    }
}

/// Handling priority of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Basse",
            Priority::Medium => "Moyenne",
            Priority::High => "Haute",
            Priority::Urgent => "URGENT",
        }
    }
}

// ============================================================================
// Problem Types
// ============================================================================

/// Kind of non-conformity reported on a mailbox.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    /// Dog on the premises.
    Dog,
    /// Mailbox mounted too low.
    TooLow,
    /// Mailbox too far from the public road.
    TooFar,
    /// Stairs, slope or traffic on the way to the mailbox.
    DangerousAccess,
    /// Broken or rusted mailbox.
    Damaged,
}

/// Risk level of a problem type for the carrier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Risque faible",
            RiskLevel::Medium => "Risque modéré",
            RiskLevel::High => "Risque élevé",
        }
    }
}

/// Catalog entry describing a problem type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProblemType {
    pub id: ProblemKind,
    pub label: &'static str,
    pub short_label: &'static str,
    /// Description used for the declaration event of synthesized tickets.
    pub description: &'static str,
    /// What the hazard means for the carrier.
    pub hazard: &'static str,
    pub risk_level: RiskLevel,
}

// ============================================================================
// Timeline
// ============================================================================

/// Type of a timeline event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Declaration,
    Email,
    Response,
    /// Phone call. Only used by curated tickets.
    Call,
    Letter,
    /// Manager note. Only used by curated tickets.
    Manager,
    Action,
    Photo,
    Resolved,
}

/// A single lifecycle event in a ticket's timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Position-based id ("e1", "e2", ...).
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl TimelineEvent {
    /// Date as displayed in the timeline (`dd/mm/YYYY`).
    pub fn date_label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Time as displayed in the timeline (`HH:MM`).
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

// ============================================================================
// Ticket Record
// ============================================================================

/// Where a ticket record came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    /// Hand-authored example ticket.
    Curated,
    /// Derived from the identifier's seed.
    Synthesized,
}

impl RecordOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordOrigin::Curated => "curated",
            RecordOrigin::Synthesized => "synthesized",
        }
    }
}

/// Open tickets older than this many days are overdue.
pub const OVERDUE_AFTER_DAYS: u32 = 7;

/// A complete ticket as seen by the history and manager views.
///
/// Records are computed per lookup and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketRecord {
    /// Identifier the record was looked up with (e.g. "TK-2026-0042").
    pub identifier: String,
    pub origin: RecordOrigin,
    pub address: String,
    /// Mailbox reference (e.g. "BAL-75008-0038").
    pub reference: String,
    pub problem_type: ProblemKind,
    pub status: TicketStatus,
    /// Postal zone code.
    pub zone: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub days_open: u32,
    pub events: Vec<TimelineEvent>,
}

impl TicketRecord {
    /// Catalog entry for this record's problem type.
    pub fn problem(&self) -> &'static ProblemType {
        crate::ticket::catalog::problem_type(self.problem_type)
    }

    /// Type of the last event in the timeline.
    pub fn last_event_type(&self) -> Option<EventType> {
        self.events.last().map(|e| e.event_type)
    }

    /// Day of the declaration event.
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.events.first().map(|e| e.date)
    }

    /// Open for more than a week and not yet resolved.
    pub fn is_overdue(&self) -> bool {
        self.days_open > OVERDUE_AFTER_DAYS && self.status != TicketStatus::Resolved
    }

    /// Whether the timeline opens with a declaration and its dates never go backwards.
    pub fn is_consistent(&self) -> bool {
        let opens_with_declaration = self
            .events
            .first()
            .is_some_and(|e| e.event_type == EventType::Declaration);

        opens_with_declaration && self.events.windows(2).all(|w| w[0].date <= w[1].date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: EventType, day: u32) -> TimelineEvent {
        TimelineEvent {
            id: "e1".to_string(),
            event_type,
            title: "t".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            image_ref: None,
        }
    }

    fn record(events: Vec<TimelineEvent>) -> TicketRecord {
        TicketRecord {
            identifier: "TK-2026-0001".to_string(),
            origin: RecordOrigin::Synthesized,
            address: "7 Rue de Rome".to_string(),
            reference: "BAL-75001-0001".to_string(),
            problem_type: ProblemKind::Dog,
            status: TicketStatus::Signaled,
            zone: "75001".to_string(),
            priority: Priority::Low,
            assignee: None,
            days_open: 1,
            events,
        }
    }

    #[test]
    fn test_status_wire_names() {
        for status in [
            TicketStatus::Signaled,
            TicketStatus::InProgress,
            TicketStatus::ActionRequired,
            TicketStatus::Pending,
            TicketStatus::Resolved,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(TicketStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TicketStatus::parse("closed"), None);
    }

    #[test]
    fn test_synthesized_statuses_exclude_action_required() {
        assert!(!TicketStatus::SYNTHESIZED.contains(&TicketStatus::ActionRequired));
    }

    #[test]
    fn test_problem_kind_serialization() {
        let json = serde_json::to_string(&ProblemKind::DangerousAccess).unwrap();
        assert_eq!(json, "\"dangerous-access\"");
    }

    #[test]
    fn test_event_labels() {
        let e = event(EventType::Email, 9);
        assert_eq!(e.date_label(), "09/01/2026");
        assert_eq!(e.time_label(), "09:05");
    }

    #[test]
    fn test_event_type_serialized_as_type() {
        let json = serde_json::to_value(event(EventType::Photo, 3)).unwrap();
        assert_eq!(json["type"], "photo");
        assert!(json.get("description").is_none());
        assert!(json.get("image_ref").is_none());
    }

    #[test]
    fn test_is_overdue() {
        let mut ticket = record(vec![event(EventType::Declaration, 3)]);
        ticket.days_open = 7;
        assert!(!ticket.is_overdue());

        ticket.days_open = 8;
        assert!(ticket.is_overdue());

        ticket.status = TicketStatus::Resolved;
        assert!(!ticket.is_overdue());

        ticket.status = TicketStatus::ActionRequired;
        assert!(ticket.is_overdue());
    }

    #[test]
    fn test_created_on_is_declaration_day() {
        let ticket = record(vec![
            event(EventType::Declaration, 3),
            event(EventType::Email, 4),
        ]);
        assert_eq!(ticket.created_on(), NaiveDate::from_ymd_opt(2026, 1, 3));
        assert_eq!(record(vec![]).created_on(), None);
    }

    #[test]
    fn test_is_consistent() {
        assert!(record(vec![event(EventType::Declaration, 3)]).is_consistent());
        assert!(record(vec![
            event(EventType::Declaration, 3),
            event(EventType::Email, 3),
            event(EventType::Response, 5),
        ])
        .is_consistent());
    }

    #[test]
    fn test_is_consistent_rejects_bad_timelines() {
        assert!(!record(vec![]).is_consistent());
        assert!(!record(vec![event(EventType::Email, 3)]).is_consistent());
        assert!(!record(vec![
            event(EventType::Declaration, 5),
            event(EventType::Email, 4),
        ])
        .is_consistent());
    }
}
