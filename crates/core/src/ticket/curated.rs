//! Hand-authored example tickets.
//!
//! These records are returned as-is by identifier and are never touched by
//! synthesis. Problem labels come from the catalog through `problem_type`.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;

use super::timeline::PLACEHOLDER_IMAGE;
use super::types::{
    EventType, Priority, ProblemKind, RecordOrigin, TicketRecord, TicketStatus, TimelineEvent,
};

static CURATED: Lazy<Vec<TicketRecord>> = Lazy::new(build_curated);

/// All curated tickets, in authored order.
pub fn curated_tickets() -> &'static [TicketRecord] {
    &CURATED
}

/// Curated ticket for an identifier, if any.
pub fn find_curated(identifier: &str) -> Option<&'static TicketRecord> {
    CURATED.iter().find(|t| t.identifier == identifier)
}

struct Entry {
    event_type: EventType,
    title: &'static str,
    description: &'static str,
    day: u32,
    hour: u32,
    minute: u32,
}

const fn entry(
    event_type: EventType,
    title: &'static str,
    description: &'static str,
    day: u32,
    hour: u32,
    minute: u32,
) -> Entry {
    Entry {
        event_type,
        title,
        description,
        day,
        hour,
        minute,
    }
}

fn events(entries: &[Entry]) -> Vec<TimelineEvent> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| TimelineEvent {
            id: format!("e{}", i + 1),
            event_type: e.event_type,
            title: e.title.to_string(),
            description: Some(e.description.to_string()),
            date: NaiveDate::from_ymd_opt(2026, 1, e.day).unwrap(),
            time: NaiveTime::from_hms_opt(e.hour, e.minute, 0).unwrap(),
            image_ref: (e.event_type == EventType::Declaration)
                .then(|| PLACEHOLDER_IMAGE.to_string()),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    identifier: &str,
    address: &str,
    reference: &str,
    problem_type: ProblemKind,
    status: TicketStatus,
    zone: &str,
    priority: Priority,
    assignee: Option<&str>,
    days_open: u32,
    entries: &[Entry],
) -> TicketRecord {
    TicketRecord {
        identifier: identifier.to_string(),
        origin: RecordOrigin::Curated,
        address: address.to_string(),
        reference: reference.to_string(),
        problem_type,
        status,
        zone: zone.to_string(),
        priority,
        assignee: assignee.map(str::to_string),
        days_open,
        events: events(entries),
    }
}

fn build_curated() -> Vec<TicketRecord> {
    use EventType::*;

    vec![
        ticket(
            "TK-2026-0042",
            "12 Rue de la République",
            "BAL-75001-0042",
            ProblemKind::Dog,
            TicketStatus::Signaled,
            "75001",
            Priority::High,
            Some("Marie Dupont"),
            2,
            &[
                entry(
                    Declaration,
                    "Déclaration créée",
                    "Chien agressif non attaché dans la propriété - Distribution impossible",
                    21, 9, 15,
                ),
                entry(
                    Action,
                    "Action assignée",
                    "Dépôt flyer de sensibilisation prévu",
                    21, 10, 0,
                ),
            ],
        ),
        ticket(
            "TK-2026-0038",
            "45 Avenue des Champs",
            "BAL-75008-0038",
            ProblemKind::TooLow,
            TicketStatus::InProgress,
            "75008",
            Priority::Medium,
            Some("Jean Martin"),
            5,
            &[
                entry(
                    Declaration,
                    "Déclaration créée",
                    "Boîte installée à 40cm du sol - Non conforme",
                    18, 14, 30,
                ),
                entry(
                    Email,
                    "Mail envoyé au propriétaire",
                    "Demande de mise aux normes de la boîte aux lettres",
                    19, 10, 0,
                ),
                entry(
                    Response,
                    "Réponse reçue",
                    "Le propriétaire indique avoir rehaussé la boîte",
                    22, 16, 45,
                ),
                entry(
                    Action,
                    "Action assignée",
                    "Vérification terrain nécessaire - Reprendre photo",
                    22, 17, 0,
                ),
            ],
        ),
        ticket(
            "TK-2026-0089",
            "8 Place du Marché",
            "BAL-75001-0089",
            ProblemKind::Dog,
            TicketStatus::Signaled,
            "75001",
            Priority::Urgent,
            None,
            1,
            &[
                entry(
                    Declaration,
                    "Déclaration créée",
                    "Chien non attaché - Morsure évitée de justesse",
                    21, 8, 30,
                ),
                entry(
                    Action,
                    "Action urgente assignée",
                    "Contact immédiat du propriétaire requis",
                    21, 9, 0,
                ),
            ],
        ),
        ticket(
            "TK-2026-0088",
            "45 Avenue des Champs",
            "BAL-75008-0156",
            ProblemKind::TooLow,
            TicketStatus::InProgress,
            "75008",
            Priority::Medium,
            Some("Sophie Bernard"),
            1,
            &[
                entry(
                    Declaration,
                    "Déclaration créée",
                    "Hauteur mesurée: 35cm - Non conforme (minimum 100cm)",
                    21, 10, 15,
                ),
                entry(
                    Email,
                    "Mail envoyé",
                    "Notification de non-conformité envoyée",
                    21, 14, 0,
                ),
                entry(
                    Response,
                    "Réponse propriétaire",
                    "Travaux prévus la semaine prochaine",
                    22, 11, 30,
                ),
            ],
        ),
        ticket(
            "TK-2026-0087",
            "15 Rue de Rivoli",
            "BAL-75004-0234",
            ProblemKind::DangerousAccess,
            TicketStatus::Signaled,
            "75004",
            Priority::High,
            None,
            1,
            &[entry(
                Declaration,
                "Déclaration créée",
                "Marches cassées à l'entrée - Risque de chute",
                21, 7, 45,
            )],
        ),
        ticket(
            "TK-2026-0086",
            "92 Avenue Montaigne",
            "BAL-75009-0312",
            ProblemKind::Damaged,
            TicketStatus::Pending,
            "75009",
            Priority::Medium,
            Some("Pierre Moreau"),
            4,
            &[
                entry(
                    Declaration,
                    "Déclaration créée",
                    "Porte de boîte arrachée - Courrier exposé",
                    18, 9, 20,
                ),
                entry(
                    Letter,
                    "Courrier envoyé",
                    "Mise en demeure de réparation sous 15 jours",
                    19, 9, 0,
                ),
            ],
        ),
        ticket(
            "TK-2026-0085",
            "67 Rue Saint-Honoré",
            "BAL-75001-0178",
            ProblemKind::TooFar,
            TicketStatus::InProgress,
            "75001",
            Priority::Low,
            Some("Claire Petit"),
            6,
            &[
                entry(
                    Declaration,
                    "Déclaration créée",
                    "Distance mesurée: 150m de la voie publique",
                    16, 11, 0,
                ),
                entry(
                    Email,
                    "Mail envoyé",
                    "Rappel de la réglementation sur la distance maximale",
                    17, 10, 0,
                ),
                entry(
                    Call,
                    "Appel effectué",
                    "Discussion avec le propriétaire sur les solutions possibles",
                    19, 14, 30,
                ),
            ],
        ),
    ]
}
