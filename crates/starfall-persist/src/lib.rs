//! Filesystem persistence and the remote leaderboard protocol.
//!
//! Everything here is synchronous and transport-free: the leaderboard
//! and meta stores read and write JSON files under a caller-provided
//! directory, and the remote module only builds payloads and parses
//! responses. Load paths fail soft so a corrupt file never blocks
//! startup.

pub mod leaderboard;
pub mod meta_store;
pub mod remote;

pub use leaderboard::{record_score, LeaderboardEntry};
pub use meta_store::{load_meta, save_meta};
pub use remote::{RemoteEntry, RemoteError, SubmitPayload};
