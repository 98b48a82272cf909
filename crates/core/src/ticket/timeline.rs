//! Timeline construction for synthesized tickets.
//!
//! Every timeline opens with a declaration on the creation day
//! (`reference_date - days_open`). The status then selects which follow-up
//! events are appended, each at a fixed day offset from the creation day:
//!
//! | status          | follow-ups                                             |
//! |-----------------|--------------------------------------------------------|
//! | signaled        | none                                                   |
//! | in-progress     | email +1, response +4, action +5                       |
//! | pending         | letter +1                                              |
//! | resolved        | email +1, response +4, action +5, photo +6, resolved +7 |
//! | action-required | action +1                                              |

use chrono::{Days, NaiveDate, NaiveTime};

use super::generator::SeedStream;
use super::types::{EventType, TicketStatus, TimelineEvent};

/// Image attached to declaration and verification photo events.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Largest follow-up offset, in days after creation.
pub const MAX_FOLLOW_UP_DAYS: u64 = 7;

/// A follow-up event template.
#[derive(Debug, Clone, Copy)]
struct Step {
    event_type: EventType,
    offset_days: u64,
    title: &'static str,
    description: &'static str,
    with_image: bool,
}

const EMAIL: Step = Step {
    event_type: EventType::Email,
    offset_days: 1,
    title: "Mail envoyé au propriétaire",
    description: "Demande de mise en conformité de l'installation",
    with_image: false,
};

const RESPONSE: Step = Step {
    event_type: EventType::Response,
    offset_days: 4,
    title: "Réponse reçue",
    description: "Le propriétaire s'engage à effectuer les modifications",
    with_image: false,
};

const ACTION: Step = Step {
    event_type: EventType::Action,
    offset_days: 5,
    title: "Action assignée",
    description: "Vérification terrain prévue",
    with_image: false,
};

const PHOTO: Step = Step {
    event_type: EventType::Photo,
    offset_days: 6,
    title: "Photo de vérification",
    description: "Photo prise confirmant la mise en conformité",
    with_image: true,
};

const RESOLVED: Step = Step {
    event_type: EventType::Resolved,
    offset_days: 7,
    title: "Problème résolu",
    description: "Installation conforme aux normes",
    with_image: false,
};

const LETTER: Step = Step {
    event_type: EventType::Letter,
    offset_days: 1,
    title: "Courrier envoyé",
    description: "Mise en demeure envoyée au propriétaire",
    with_image: false,
};

const URGENT_ACTION: Step = Step {
    event_type: EventType::Action,
    offset_days: 1,
    title: "Action urgente assignée",
    description: "Intervention terrain requise",
    with_image: false,
};

fn follow_ups(status: TicketStatus) -> &'static [Step] {
    match status {
        TicketStatus::Signaled => &[],
        TicketStatus::InProgress => &[EMAIL, RESPONSE, ACTION],
        TicketStatus::Pending => &[LETTER],
        TicketStatus::Resolved => &[EMAIL, RESPONSE, ACTION, PHOTO, RESOLVED],
        TicketStatus::ActionRequired => &[URGENT_ACTION],
    }
}

/// Builds status-consistent timelines relative to a fixed reference day.
#[derive(Debug, Clone, Copy)]
pub struct TimelineBuilder {
    reference_date: NaiveDate,
}

impl TimelineBuilder {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Day the ticket was declared.
    ///
    /// Clamped to the earliest representable date.
    pub fn creation_date(&self, days_open: u32) -> NaiveDate {
        self.reference_date
            .checked_sub_days(Days::new(u64::from(days_open)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Build the ordered event list for `status`.
    ///
    /// Event times are drawn from `stream`, hour then minute, one pair per event.
    pub fn build(
        &self,
        status: TicketStatus,
        declaration_description: &str,
        days_open: u32,
        stream: &mut SeedStream,
    ) -> Vec<TimelineEvent> {
        let created = self.creation_date(days_open);
        let steps = follow_ups(status);
        let mut events = Vec::with_capacity(steps.len() + 1);

        events.push(TimelineEvent {
            id: "e1".to_string(),
            event_type: EventType::Declaration,
            title: "Déclaration créée".to_string(),
            description: Some(declaration_description.to_string()),
            date: created,
            time: draw_time(stream),
            image_ref: Some(PLACEHOLDER_IMAGE.to_string()),
        });

        for (i, step) in steps.iter().enumerate() {
            events.push(TimelineEvent {
                id: format!("e{}", i + 2),
                event_type: step.event_type,
                title: step.title.to_string(),
                description: Some(step.description.to_string()),
                date: created
                    .checked_add_days(Days::new(step.offset_days))
                    .unwrap_or(NaiveDate::MAX),
                time: draw_time(stream),
                image_ref: step.with_image.then(|| PLACEHOLDER_IMAGE.to_string()),
            });
        }

        events
    }
}

fn draw_time(stream: &mut SeedStream) -> NaiveTime {
    let hour = stream.draw(24);
    let minute = stream.draw(60);
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
