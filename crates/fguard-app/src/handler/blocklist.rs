//! Blocklist view handlers: list, add, remove, preset bulk-add
//!
//! Every successful mutation is followed by an unconditional re-fetch of the
//! full list; there is no optimistic update to roll back.

use tracing::warn;

use fguard_core::{BlockedSite, SiteCategory};

use crate::state::{AppState, Notice};

use super::{UpdateAction, UpdateResult};

/// Submit the url field. A blank (or whitespace-only) input is a no-op, per
/// the form's contract: no network call happens at all.
pub(crate) fn handle_submit_url(state: &mut AppState) -> UpdateResult {
    let list = &mut state.blocklist;

    let url = list.url_buffer.trim().to_string();
    if url.is_empty() {
        return UpdateResult::none();
    }
    if list.busy {
        return UpdateResult::none();
    }

    list.busy = true;
    list.notice = None;
    UpdateResult::action(UpdateAction::AddSite {
        generation: list.generation,
        url,
        category: SiteCategory::Custom,
    })
}

pub(crate) fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    let list = &mut state.blocklist;
    let Some(site) = list.selected_site() else {
        return UpdateResult::none();
    };
    UpdateResult::action(UpdateAction::RemoveSite {
        generation: list.generation,
        site_id: site.id,
    })
}

pub(crate) fn handle_add_preset(state: &mut AppState, category: SiteCategory) -> UpdateResult {
    let list = &mut state.blocklist;
    if list.busy {
        return UpdateResult::none();
    }
    list.busy = true;
    list.notice = None;
    UpdateResult::action(UpdateAction::AddPreset {
        generation: list.generation,
        category,
    })
}

pub(crate) fn handle_reload(state: &mut AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::FetchBlocklist {
        generation: state.blocklist.generation,
    })
}

/// Fetch landed. On failure the stale snapshot stays on screen; the error is
/// log-only.
pub(crate) fn handle_fetched(
    state: &mut AppState,
    generation: u64,
    outcome: Result<Vec<BlockedSite>, String>,
) -> UpdateResult {
    if generation != state.blocklist.generation {
        return UpdateResult::none();
    }
    match outcome {
        Ok(sites) => state.blocklist.set_sites(sites),
        Err(reason) => warn!("blocklist fetch failed: {reason}"),
    }
    UpdateResult::none()
}

/// Add finished. Success clears the input and re-fetches; failure surfaces
/// the server's message verbatim (or a generic fallback).
pub(crate) fn handle_site_added(
    state: &mut AppState,
    generation: u64,
    outcome: Result<(), String>,
) -> UpdateResult {
    if generation != state.blocklist.generation {
        return UpdateResult::none();
    }

    let list = &mut state.blocklist;
    list.busy = false;
    match outcome {
        Ok(()) => {
            // The input stays focused so several sites can be added in a row.
            list.url_buffer.clear();
            UpdateResult::action(UpdateAction::FetchBlocklist {
                generation: list.generation,
            })
        }
        Err(reason) => {
            warn!("add site failed: {reason}");
            list.notice = Some(Notice::error(reason));
            UpdateResult::none()
        }
    }
}

/// Remove finished. Failures are log-only; the following re-fetch (on
/// success) is what updates the count.
pub(crate) fn handle_site_removed(
    state: &mut AppState,
    generation: u64,
    outcome: Result<(), String>,
) -> UpdateResult {
    if generation != state.blocklist.generation {
        return UpdateResult::none();
    }
    match outcome {
        Ok(()) => UpdateResult::action(UpdateAction::FetchBlocklist {
            generation: state.blocklist.generation,
        }),
        Err(reason) => {
            warn!("remove site failed: {reason}");
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_preset_added(
    state: &mut AppState,
    generation: u64,
    category: SiteCategory,
    outcome: Result<u32, String>,
) -> UpdateResult {
    if generation != state.blocklist.generation {
        return UpdateResult::none();
    }

    let list = &mut state.blocklist;
    list.busy = false;
    match outcome {
        Ok(added_count) => {
            list.notice = Some(Notice::info(format!(
                "Added {added_count} sites from {}",
                category.label()
            )));
            UpdateResult::action(UpdateAction::FetchBlocklist {
                generation: list.generation,
            })
        }
        Err(reason) => {
            warn!("preset add failed: {reason}");
            list.notice = Some(Notice::error("Failed to add preset category"));
            UpdateResult::none()
        }
    }
}
