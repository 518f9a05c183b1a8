// ============================================================================
// ACTIONS - Async glue between views, view-models and the API
// ============================================================================
// Each action flips the view-model synchronously, schedules the request with
// `spawn_local`, and notifies subscribers on both edges. No `RefCell` borrow
// is held across an `.await`.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::dom::{alert, confirm, set_location_hash};
use crate::error::ApiError;
use crate::models::RecordFilter;
use crate::services::{save_bytes, CSV_MIME};
use crate::state::{AppState, Route};
use crate::utils::format::{export_filename_at, local_today};
use crate::viewmodels::{SaveOutcome, SessionViewModel};

/// Enters `requested` (after the auth guard) and loads its data when needed
pub fn navigate(state: &AppState, requested: Route) {
    let (route, load) = state.navigate(requested, local_today());
    if route != requested {
        set_location_hash(route.hash());
    }
    if load {
        reload(state);
    }
    state.notify_subscribers();
}

/// Fetches the record list and the stats panel for the active filter.
/// The two requests run concurrently and resolve independently.
pub fn reload(state: &AppState) {
    let filter = state.records.borrow().filter();
    let list_ticket = state.records.borrow_mut().begin_load();
    state.notify_subscribers();

    let list_state = state.clone();
    spawn_local(async move {
        let result = list_state.api_client().list_receipts(&filter).await;
        let applied = list_state.records.borrow_mut().apply_list(list_ticket, result);
        if applied {
            list_state.notify_subscribers();
        }
    });

    refresh_stats(state, filter);
}

fn refresh_stats(state: &AppState, filter: RecordFilter) {
    let ticket = state.stats.borrow_mut().begin();
    let stats_state = state.clone();
    spawn_local(async move {
        let result = stats_state.api_client().fetch_stats(&filter).await;
        let applied = stats_state.stats.borrow_mut().apply(ticket, result);
        if applied {
            stats_state.notify_subscribers();
        }
    });
}

pub fn change_filter(state: &AppState, filter: RecordFilter) {
    let changed = state.records.borrow_mut().set_filter(filter);
    if changed {
        reload(state);
    }
}

pub fn scan(state: &AppState, file: File) {
    if !state.draft.borrow_mut().begin_scan() {
        return;
    }
    state.notify_subscribers();

    let state = state.clone();
    spawn_local(async move {
        match state.api_client().scan_receipt(&file).await {
            Ok(draft) => state.draft.borrow_mut().scan_succeeded(draft),
            Err(e) => state.draft.borrow_mut().scan_failed(&e),
        }
        state.notify_subscribers();
    });
}

pub fn save_draft(state: &AppState) {
    let Some(payload) = state.draft.borrow_mut().begin_save() else {
        return;
    };
    state.notify_subscribers();

    let state = state.clone();
    spawn_local(async move {
        match state.api_client().save_receipt(&payload).await {
            Ok(_) => {
                let outcome = state.draft.borrow_mut().save_succeeded();
                if outcome == SaveOutcome::RefetchHistory {
                    reload(&state);
                }
            }
            Err(e) => state.draft.borrow_mut().save_failed(&e),
        }
        state.notify_subscribers();
    });
}

pub fn cancel_draft(state: &AppState) {
    state.draft.borrow_mut().cancel();
    state.notify_subscribers();
}

pub fn toggle_selection(state: &AppState, id: i64) {
    state.records.borrow_mut().toggle(id);
    state.notify_subscribers();
}

/// Deletes after a blocking confirmation; failures raise an alert
pub fn delete_record(state: &AppState, id: i64) {
    if !confirm("Are you sure you want to delete this receipt?") {
        return;
    }

    let state = state.clone();
    spawn_local(async move {
        match state.api_client().delete_receipt(id).await {
            Ok(()) => {
                state.records.borrow_mut().remove_record(id);
                let filter = state.records.borrow().filter();
                refresh_stats(&state, filter);
            }
            Err(e) => {
                let message = state.records.borrow().delete_failed(id, &e);
                alert(&message);
            }
        }
        state.notify_subscribers();
    });
}

/// Downloads the selected records as CSV. An empty selection sends nothing.
pub fn export_selection(state: &AppState) {
    let Some(ids) = state.records.borrow_mut().begin_export() else {
        log::debug!("[RECORDS] Export skipped, nothing selected");
        return;
    };
    state.notify_subscribers();

    let state = state.clone();
    spawn_local(async move {
        let result = state.api_client().export_csv(&ids).await;
        let saved = result.and_then(|bytes| {
            let filename = export_filename_at(&chrono::Utc::now());
            save_bytes(&bytes, &filename, CSV_MIME)
                .map_err(|e| ApiError::Network(format!("{:?}", e)))
        });

        if let Err(e) = saved {
            log::error!("❌ [RECORDS] Export failed: {}", e);
            alert(&ApiError::Export(0).user_message());
        }

        state.records.borrow_mut().finish_export();
        state.notify_subscribers();
    });
}

pub fn login(state: &AppState) {
    let Some((username, password)) = state.login.borrow_mut().begin_submit() else {
        return;
    };
    state.notify_subscribers();

    let state = state.clone();
    spawn_local(async move {
        let result = SessionViewModel::new(state.session.clone())
            .login(&username, &password)
            .await;
        let success = result.is_ok();
        state.login.borrow_mut().finish(result.map(|_| ()));

        if success {
            set_location_hash(Route::Dashboard.hash());
            navigate(&state, Route::Dashboard);
        } else {
            state.notify_subscribers();
        }
    });
}

pub fn logout(state: &AppState) {
    SessionViewModel::new(state.session.clone()).logout();
    state.reset_user_state();
    set_location_hash(Route::Login.hash());
    state.notify_subscribers();
}

pub fn toggle_theme(state: &AppState) {
    let theme = state.theme.toggle();
    log::info!("🎨 [THEME] {}", theme.as_str());
    state.notify_subscribers();
}
