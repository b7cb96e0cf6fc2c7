//! Stateless pagination token encoding, parsing, and validation.
//!
//! Button and modal custom IDs carry the whole pagination state, so no
//! session store is needed: the token names the command, the action, the
//! zero-based target page index, the page count it was built against, the
//! owning user, and an expiry timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

const TOKEN_PREFIX: &str = "pv";

/// Navigation action carried by a pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Jump,
    Next,
}

impl NavAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Jump => "jump",
            Self::Next => "next",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "prev" => Some(Self::Prev),
            "jump" => Some(Self::Jump),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Parsed pagination token data from a button custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationToken {
    /// Logical command name (e.g. `warnings`).
    pub command: String,
    /// Button action.
    pub action: NavAction,
    /// Zero-based target page index.
    pub target_index: usize,
    /// Page count at token-build time.
    pub page_count: usize,
    /// User ID that owns this pagination session.
    pub user_id: u64,
    /// Expiry timestamp (unix seconds).
    pub expires_at: u64,
}

/// Validation outcome for pagination button presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValidationError {
    Invalid,
    WrongCommand,
    WrongUser,
    Expired,
    OutOfRange,
}

/// Build a compact custom ID carrying stateless pagination state.
pub fn build_custom_id(
    command: &str,
    action: NavAction,
    target_index: usize,
    page_count: usize,
    user_id: u64,
    expires_at: u64,
) -> String {
    let action = action.as_str();
    format!("{TOKEN_PREFIX}:{command}:{action}:{target_index}:{page_count}:{user_id}:{expires_at}")
}

/// Parse a pagination custom ID.
pub fn parse_custom_id(custom_id: &str) -> Option<PaginationToken> {
    let mut parts = custom_id.split(':');

    if parts.next()? != TOKEN_PREFIX {
        return None;
    }

    let command = parts.next()?.to_owned();
    let action = NavAction::parse(parts.next()?)?;
    let target_index = parts.next()?.parse::<usize>().ok()?;
    let page_count = parts.next()?.parse::<usize>().ok()?;
    let user_id = parts.next()?.parse::<u64>().ok()?;
    let expires_at = parts.next()?.parse::<u64>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(PaginationToken {
        command,
        action,
        target_index,
        page_count,
        user_id,
        expires_at,
    })
}

/// Validate a pagination token for command, user, expiry, and index bounds.
pub fn validate_custom_id(
    custom_id: &str,
    expected_command: &str,
    actor_user_id: u64,
) -> Result<PaginationToken, TokenValidationError> {
    let token = parse_custom_id(custom_id).ok_or(TokenValidationError::Invalid)?;

    if token.command != expected_command {
        trace!(command = %token.command, expected_command, "pagination token for another command");
        return Err(TokenValidationError::WrongCommand);
    }

    if token.user_id != actor_user_id {
        return Err(TokenValidationError::WrongUser);
    }

    if now_unix_secs() > token.expires_at {
        return Err(TokenValidationError::Expired);
    }

    if token.target_index >= token.page_count {
        return Err(TokenValidationError::OutOfRange);
    }

    Ok(token)
}

pub(crate) fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
