//! Fixed, read-only catalogs that synthesis draws from.
//!
//! Order matters: indices produced by the seed generator select entries
//! positionally, so reordering a catalog changes every synthesized ticket.

use super::types::{Priority, ProblemKind, ProblemType, RiskLevel, TicketStatus};

/// Mailbox addresses.
pub static ADDRESSES: [&str; 15] = [
    "12 Rue de la République",
    "45 Avenue des Champs",
    "8 Place du Marché",
    "23 Boulevard Haussmann",
    "67 Rue Saint-Honoré",
    "15 Rue de Rivoli",
    "92 Avenue Montaigne",
    "3 Place de la Concorde",
    "28 Rue du Faubourg",
    "55 Rue de Passy",
    "18 Avenue Victor Hugo",
    "7 Rue de Rome",
    "34 Boulevard Saint-Germain",
    "11 Rue de Sèvres",
    "89 Avenue Kléber",
];

/// Problem types.
pub static PROBLEM_TYPES: [ProblemType; 5] = [
    ProblemType {
        id: ProblemKind::Dog,
        label: "Présence de chien",
        short_label: "Chien",
        description: "Chien agressif non attaché dans la propriété",
        hazard: "Animal potentiellement dangereux - Risque de morsure",
        risk_level: RiskLevel::High,
    },
    ProblemType {
        id: ProblemKind::TooLow,
        label: "Boîte trop basse",
        short_label: "Trop basse",
        description: "Boîte installée à 40cm du sol - Non conforme",
        hazard: "Risque de TMS pour le facteur - Position penchée répétée",
        risk_level: RiskLevel::Medium,
    },
    ProblemType {
        id: ProblemKind::TooFar,
        label: "Boîte trop éloignée",
        short_label: "Trop éloignée",
        description: "Boîte aux lettres située à plus de 100m de la voie publique",
        hazard: "Distance excessive depuis la voie publique",
        risk_level: RiskLevel::Low,
    },
    ProblemType {
        id: ProblemKind::DangerousAccess,
        label: "Accès dangereux",
        short_label: "Accès dangereux",
        description: "Escaliers glissants signalés - Risque de chute",
        hazard: "Escaliers, pente, circulation - Risque d'accident",
        risk_level: RiskLevel::High,
    },
    ProblemType {
        id: ProblemKind::Damaged,
        label: "Boîte détériorée",
        short_label: "Détériorée",
        description: "Boîte aux lettres cassée - Serrure défectueuse",
        hazard: "Boîte en mauvais état - Courrier non protégé",
        risk_level: RiskLevel::Medium,
    },
];

/// Postal zones.
pub static ZONES: [&str; 7] = [
    "75001", "75002", "75003", "75004", "75008", "75009", "75016",
];

/// Priorities, lowest first.
pub static PRIORITIES: [Priority; 4] = [
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Urgent,
];

/// Assignees. The last slot is "unassigned".
pub static ASSIGNEES: [Option<&str>; 6] = [
    Some("Marie Dupont"),
    Some("Jean Martin"),
    Some("Sophie Bernard"),
    Some("Pierre Moreau"),
    Some("Claire Petit"),
    None,
];

/// Statuses a synthesized ticket can take.
pub static STATUSES: [TicketStatus; 4] = TicketStatus::SYNTHESIZED;

/// Look up the catalog entry for a problem kind.
pub fn problem_type(kind: ProblemKind) -> &'static ProblemType {
    match kind {
        ProblemKind::Dog => &PROBLEM_TYPES[0],
        ProblemKind::TooLow => &PROBLEM_TYPES[1],
        ProblemKind::TooFar => &PROBLEM_TYPES[2],
        ProblemKind::DangerousAccess => &PROBLEM_TYPES[3],
        ProblemKind::Damaged => &PROBLEM_TYPES[4],
    }
}

/// Mailbox reference for a zone and ticket sequence number.
pub fn reference(zone: &str, sequence: u64) -> String {
    format!("BAL-{}-{:04}", zone, sequence)
}
