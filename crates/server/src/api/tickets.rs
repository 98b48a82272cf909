//! Ticket API handlers.
//!
//! The history (field worker) and manager views share the same repository
//! lookup and differ only in how much of the record they expose.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use courrier_core::{
    EventType, ListingStats, Priority, ProblemKind, RecordOrigin, RiskLevel, SequenceRange,
    SortField, SortOrder, TicketError, TicketFilter, TicketQuery, TicketRecord, TicketStatus,
    TimelineEvent,
};

use crate::metrics::TICKET_LOOKUPS_TOTAL;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the manager ticket view
#[derive(Debug, Deserialize)]
pub struct ManagerTicketParams {
    /// Explicitly assigned status (e.g. "action-required")
    pub status: Option<String>,
}

/// Query parameters for the manager ticket board
#[derive(Debug, Deserialize)]
pub struct ManagerListParams {
    /// First sequence of the range (default 1)
    pub from: Option<u64>,
    /// Last sequence of the range, inclusive (default 100)
    pub to: Option<u64>,
    /// Identifier year (defaults to the reference date's year)
    pub year: Option<u16>,
    /// Free-text search over id, address, reference and problem label
    pub q: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub problem_type: Option<ProblemKind>,
    pub zone: Option<String>,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

const DEFAULT_LIST_FROM: u64 = 1;
const DEFAULT_LIST_TO: u64 = 100;

/// Problem type as shown to clients
#[derive(Debug, Serialize)]
pub struct ProblemTypeResponse {
    pub id: ProblemKind,
    pub label: String,
    pub short_label: String,
    pub description: String,
    pub hazard: String,
    pub risk_level: RiskLevel,
    pub risk_label: String,
}

impl From<ProblemKind> for ProblemTypeResponse {
    fn from(kind: ProblemKind) -> Self {
        let problem = courrier_core::ticket::catalog::problem_type(kind);
        Self {
            id: problem.id,
            label: problem.label.to_string(),
            short_label: problem.short_label.to_string(),
            description: problem.description.to_string(),
            hazard: problem.hazard.to_string(),
            risk_level: problem.risk_level,
            risk_label: problem.risk_level.label().to_string(),
        }
    }
}

/// Timeline event with display-formatted date and time
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `dd/mm/YYYY`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&TimelineEvent> for EventResponse {
    fn from(event: &TimelineEvent) -> Self {
        Self {
            id: event.id.clone(),
            event_type: event.event_type,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date_label(),
            time: event.time_label(),
            image_url: event.image_ref.clone(),
        }
    }
}

/// Field worker history view
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub id: String,
    pub address: String,
    pub reference: String,
    pub problem_type: String,
    pub status: TicketStatus,
    pub status_label: String,
    pub events: Vec<EventResponse>,
}

impl From<TicketRecord> for HistoryResponse {
    fn from(record: TicketRecord) -> Self {
        Self {
            problem_type: record.problem().label.to_string(),
            status_label: record.status.label().to_string(),
            events: record.events.iter().map(EventResponse::from).collect(),
            id: record.identifier,
            address: record.address,
            reference: record.reference,
            status: record.status,
        }
    }
}

/// Manager ticket detail view
#[derive(Debug, Serialize)]
pub struct ManagerTicketResponse {
    pub id: String,
    pub origin: RecordOrigin,
    pub address: String,
    pub reference: String,
    pub problem_type: ProblemTypeResponse,
    pub status: TicketStatus,
    pub status_label: String,
    pub zone: String,
    pub priority: Priority,
    pub priority_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub days_open: u32,
    pub overdue: bool,
    pub events: Vec<EventResponse>,
}

impl From<TicketRecord> for ManagerTicketResponse {
    fn from(record: TicketRecord) -> Self {
        Self {
            problem_type: ProblemTypeResponse::from(record.problem_type),
            status_label: record.status.label().to_string(),
            priority_label: record.priority.label().to_string(),
            overdue: record.is_overdue(),
            events: record.events.iter().map(EventResponse::from).collect(),
            id: record.identifier,
            origin: record.origin,
            address: record.address,
            reference: record.reference,
            status: record.status,
            zone: record.zone,
            priority: record.priority,
            assignee: record.assignee,
            days_open: record.days_open,
        }
    }
}

/// Entry of the recent tickets list
#[derive(Debug, Serialize)]
pub struct TicketSummary {
    pub id: String,
    pub address: String,
    pub problem_type: String,
    pub status: TicketStatus,
    pub status_label: String,
    pub event_count: usize,
}

impl From<&TicketRecord> for TicketSummary {
    fn from(record: &TicketRecord) -> Self {
        Self {
            id: record.identifier.clone(),
            address: record.address.clone(),
            problem_type: record.problem().label.to_string(),
            status: record.status,
            status_label: record.status.label().to_string(),
            event_count: record.events.len(),
        }
    }
}

/// Entry of the manager ticket board
#[derive(Debug, Serialize)]
pub struct ManagerTicketSummary {
    pub id: String,
    pub origin: RecordOrigin,
    pub address: String,
    pub reference: String,
    pub zone: String,
    pub problem_type: ProblemKind,
    pub problem_label: String,
    pub status: TicketStatus,
    pub status_label: String,
    pub priority: Priority,
    pub priority_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub days_open: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    pub overdue: bool,
    pub event_count: usize,
}

impl From<&TicketRecord> for ManagerTicketSummary {
    fn from(record: &TicketRecord) -> Self {
        Self {
            id: record.identifier.clone(),
            origin: record.origin,
            address: record.address.clone(),
            reference: record.reference.clone(),
            zone: record.zone.clone(),
            problem_type: record.problem_type,
            problem_label: record.problem().label.to_string(),
            status: record.status,
            status_label: record.status.label().to_string(),
            priority: record.priority,
            priority_label: record.priority.label().to_string(),
            assignee: record.assignee.clone(),
            days_open: record.days_open,
            created_at: record.created_on(),
            overdue: record.is_overdue(),
            event_count: record.events.len(),
        }
    }
}

/// Response for the manager ticket board
#[derive(Debug, Serialize)]
pub struct ManagerListResponse {
    pub tickets: Vec<ManagerTicketSummary>,
    #[serde(flatten)]
    pub stats: ListingStats,
    pub from: u64,
    pub to: u64,
}

/// Response for listing tickets
#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub tickets: Vec<TicketSummary>,
    pub total: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct TicketErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<TicketErrorResponse>);

fn not_found(err: TicketError) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(TicketErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn record_lookup(view: &str, result: &Result<TicketRecord, TicketError>) {
    let outcome = match result {
        Ok(record) => record.origin.as_str(),
        Err(TicketError::NotFound(_)) => "not_found",
    };
    TICKET_LOOKUPS_TOTAL
        .with_label_values(&[view, outcome])
        .inc();
}

// ============================================================================
// Handlers
// ============================================================================

/// List curated tickets for the recent tickets screen
pub async fn list_tickets(State(state): State<Arc<AppState>>) -> Json<ListTicketsResponse> {
    let tickets: Vec<TicketSummary> = state
        .tickets()
        .curated_tickets()
        .iter()
        .map(TicketSummary::from)
        .collect();

    Json(ListTicketsResponse {
        total: tickets.len(),
        tickets,
    })
}

/// List tickets over a sequence range for the manager board
pub async fn list_manager_tickets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ManagerListParams>,
) -> Result<Json<ManagerListResponse>, ApiError> {
    let from = params.from.unwrap_or(DEFAULT_LIST_FROM);
    let to = params.to.unwrap_or(DEFAULT_LIST_TO);
    let range = SequenceRange::new(from, to).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(TicketErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let reference_year = state.tickets().reference_date().year();
    let year = params
        .year
        .or_else(|| u16::try_from(reference_year).ok())
        .unwrap_or_default();

    let query = TicketQuery {
        year,
        range,
        filter: TicketFilter {
            search: params.q,
            status: params.status,
            priority: params.priority,
            problem_type: params.problem_type,
            zone: params.zone,
        },
        sort: params.sort,
        order: params.order,
    };

    let records = state.tickets().list(&query);
    let stats = ListingStats::of(&records);

    Ok(Json(ManagerListResponse {
        tickets: records.iter().map(ManagerTicketSummary::from).collect(),
        stats,
        from,
        to,
    }))
}

/// Get a ticket for the field worker history view
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let result = state.tickets().lookup(&id);
    record_lookup("history", &result);

    result
        .map(|record| Json(HistoryResponse::from(record)))
        .map_err(not_found)
}

/// Get a ticket for the manager detail view
pub async fn get_manager_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ManagerTicketParams>,
) -> Result<Json<ManagerTicketResponse>, ApiError> {
    let result = match params.status.as_deref() {
        Some(raw) => {
            let status = TicketStatus::parse(raw).ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(TicketErrorResponse {
                        error: format!("Unknown status: {}", raw),
                    }),
                )
            })?;
            debug!(ticket_id = %id, status = status.as_str(), "Explicit status assignment");
            state.tickets().lookup_with_status(&id, status)
        }
        None => state.tickets().lookup(&id),
    };
    record_lookup("manager", &result);

    result
        .map(|record| Json(ManagerTicketResponse::from(record)))
        .map_err(not_found)
}
