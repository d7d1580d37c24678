//! Remote leaderboard protocol: payload building, name sanitization,
//! and response parsing. Transport-free; the caller owns the HTTP
//! client and feeds status + body into the parsers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-side name limits, mirrored here so invalid names never leave
/// the client.
pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 20;

/// Why a remote call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Transport never produced a response (DNS, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status without a usable error body.
    #[error("HTTP {status}")]
    Http { status: u16 },
    /// The server answered but refused the request.
    #[error("rejected by server: {0}")]
    Rejected(String),
    /// Body was not the expected ok-envelope.
    #[error("malformed response body")]
    Malformed,
}

/// One global leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEntry {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub play_time_seconds: u64,
}

/// Score submission body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub player_name: String,
    pub score: u32,
    pub play_time_seconds: u64,
}

impl SubmitPayload {
    /// Build a payload the server will accept: sanitized name, floored
    /// play time.
    pub fn new(player_name: &str, score: u32, play_time_seconds: f64) -> Self {
        Self {
            player_name: sanitize_player_name(player_name),
            score,
            play_time_seconds: play_time_seconds.max(0.0).floor() as u64,
        }
    }
}

/// Collapse runs of whitespace, strip dangerous and control characters,
/// and cap the length. The server applies the same rules.
pub fn sanitize_player_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '`' | '"' | '\'' | '\\'))
        .filter(|c| !c.is_control())
        .take(NAME_MAX)
        .collect()
}

pub fn is_valid_player_name(name: &str) -> bool {
    let len = sanitize_player_name(name).chars().count();
    (NAME_MIN..=NAME_MAX).contains(&len)
}

/// Render a play time as `m:ss`, or `h:mm:ss` past an hour.
pub fn format_time_mmss(total_seconds: f64) -> String {
    let t = if total_seconds.is_finite() {
        total_seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let hours = t / 3600;
    let minutes = (t % 3600) / 60;
    let seconds = t % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

fn add_query(base: &str, params: &[(&str, &str)]) -> String {
    let qs = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    if base.contains('?') {
        format!("{base}&{qs}")
    } else {
        format!("{base}?{qs}")
    }
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// URL for fetching the top scores.
pub fn build_top_url(base: &str) -> String {
    add_query(base.trim(), &[("action", "top")])
}

/// URL for the GET submission fallback.
pub fn build_submit_url(base: &str, payload: &SubmitPayload) -> String {
    add_query(
        base.trim(),
        &[
            ("action", "submit"),
            ("playerName", &payload.player_name),
            ("score", &payload.score.to_string()),
            ("playTimeSeconds", &payload.play_time_seconds.to_string()),
        ],
    )
}

#[derive(Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<Vec<RemoteEntry>>,
}

fn parse_envelope(status: u16, body: &str) -> Result<Envelope, RemoteError> {
    let envelope: Option<Envelope> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        // Prefer the server's own error text when the body carries one.
        if let Some(env) = envelope {
            if let Some(error) = env.error {
                return Err(RemoteError::Rejected(error));
            }
        }
        return Err(RemoteError::Http { status });
    }

    let Some(env) = envelope else {
        return Err(RemoteError::Malformed);
    };
    if !env.ok {
        return Err(RemoteError::Rejected(
            env.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(env)
}

/// Parse a top-scores response into entries.
pub fn parse_top_response(status: u16, body: &str) -> Result<Vec<RemoteEntry>, RemoteError> {
    let env = parse_envelope(status, body)?;
    env.data.ok_or(RemoteError::Malformed)
}

/// Parse a submission response; success carries no data.
pub fn parse_submit_response(status: u16, body: &str) -> Result<(), RemoteError> {
    parse_envelope(status, body).map(|_| ())
}

/// Display order: score descending, play time ascending, older entry
/// first. The server stores entries this way too.
pub fn sort_entries(entries: &mut [RemoteEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.play_time_seconds.cmp(&b.play_time_seconds))
            .then(a.created_at.cmp(&b.created_at))
    });
}
