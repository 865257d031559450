// Service exports
pub mod cache;
pub mod postgres;
pub mod supabase;

pub use cache::ProfileCache;
pub use postgres::{EventStats, EventType, MatchEventStore, PostgresError};
pub use supabase::{SupabaseClient, SupabaseError};
