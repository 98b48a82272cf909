pub mod config;
pub mod sync;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, EngineConfig,
    SanitizedConfig, ServerConfig, SyncBackend, SyncConfig,
};
pub use sync::{
    create_pending_sync, MemoryPendingSync, PendingSyncStore, SqlitePendingSync, SyncError,
};
pub use ticket::{
    DrawMode, EventType, ListingError, ListingStats, Priority, ProblemKind, ProblemType,
    RecordOrigin, RiskLevel, SequenceRange, SortField, SortOrder, TicketError, TicketFilter,
    TicketQuery, TicketRecord, TicketRepository, TicketStatus, TimelineEvent,
};
