//! Curated view of a conversation: only the turns that are safe to resend.
//!
//! History is split into maximal runs of one role. A `user` run together with
//! the `model` run that answers it forms one turn; a run with no partner (an
//! unanswered trailing `user` run, or a `model` run at the very start) is a
//! turn on its own. Each turn is kept whole or dropped whole, and the fate of
//! one turn never depends on its neighbours.

use super::validate::is_valid_content;
use crate::ai::gemini::types::{Content, Role};
use crate::{Error, Result};

pub fn extract_curated_history(history: &[Content]) -> Result<Vec<Content>> {
    let roles = history
        .iter()
        .map(|content| {
            content
                .role
                .as_deref()
                .and_then(Role::from_wire)
                .ok_or_else(|| Error::MalformedRole(content.role.clone().unwrap_or_default()))
        })
        .collect::<Result<Vec<Role>>>()?;

    let mut curated = Vec::with_capacity(history.len());
    let mut start = 0;
    while start < history.len() {
        let mut end = run_end(&roles, start);
        if roles[start] == Role::User && end < history.len() {
            end = run_end(&roles, end);
        }

        let turn = &history[start..end];
        if turn.iter().all(|content| is_valid_content(Some(content))) {
            curated.extend_from_slice(turn);
        } else {
            tracing::debug!(
                start,
                len = turn.len(),
                "Dropping invalid turn from curated history"
            );
        }
        start = end;
    }

    Ok(curated)
}

/// Index one past the run of equal roles beginning at `start`.
fn run_end(roles: &[Role], start: usize) -> usize {
    let role = roles[start];
    start + roles[start..].iter().take_while(|r| **r == role).count()
}
