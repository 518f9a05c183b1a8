// ============================================================================
// APP STATE - Global application state
// ============================================================================
// Every field is a shared handle, so clones of `AppState` see the same data.
// Mutations go through the view-models; `notify_subscribers` schedules a
// re-render.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::models::RecordFilter;
use crate::services::ApiClient;
use crate::state::{Route, SessionState, ThemeState};
use crate::utils::storage::{BrowserStorage, KeyValueStore};
use crate::viewmodels::{DraftWorkflow, LoginViewModel, RecordsViewModel, StatsViewModel};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub theme: ThemeState,
    pub route: Rc<RefCell<Route>>,

    // Screen state, reset on navigation
    pub records: Rc<RefCell<RecordsViewModel>>,
    pub stats: Rc<RefCell<StatsViewModel>>,

    pub draft: Rc<RefCell<DraftWorkflow>>,
    pub login: Rc<RefCell<LoginViewModel>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let session = SessionState::new(store.clone());
        session.hydrate();

        Self {
            session,
            theme: ThemeState::load(store),
            route: Rc::new(RefCell::new(Route::Login)),
            records: Rc::new(RefCell::new(RecordsViewModel::new(RecordFilter::All))),
            stats: Rc::new(RefCell::new(StatsViewModel::new())),
            draft: Rc::new(RefCell::new(DraftWorkflow::new())),
            login: Rc::new(RefCell::new(LoginViewModel::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// State backed by `window.localStorage`
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage::new()))
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.session.clone())
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    /// Moves to `requested` after the auth guard. Entering a record screen
    /// resets its list and stats to the screen's default filter.
    /// Returns the route actually shown and whether its data must be loaded.
    pub fn navigate(&self, requested: Route, today: NaiveDate) -> (Route, bool) {
        let route = requested.guard(self.session.is_authenticated());
        let changed = route != self.current_route();

        if changed {
            log::info!("🧭 [ROUTE] {:?} -> {:?}", self.current_route(), route);
            *self.route.borrow_mut() = route;
            self.records.borrow_mut().reset(route.default_filter(today));
            self.stats.borrow_mut().reset();
            if !route.is_dashboard() {
                self.draft.borrow_mut().cancel();
            }
        }

        (route, changed && route != Route::Login)
    }

    /// Drops everything tied to the signed-in user
    pub fn reset_user_state(&self) {
        self.records.borrow_mut().reset(RecordFilter::All);
        self.stats.borrow_mut().reset();
        *self.draft.borrow_mut() = DraftWorkflow::new();
        *self.login.borrow_mut() = LoginViewModel::new();
        *self.route.borrow_mut() = Route::Login;
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        // Cloned so a callback may subscribe without a double borrow
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginResponse, ReceiptRecord, StatsSummary};
    use crate::utils::constants::ACCESS_TOKEN_KEY;
    use crate::utils::storage::MemoryStorage;
    use std::cell::Cell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    fn signed_in() -> AppState {
        let state = AppState::new(Rc::new(MemoryStorage::new()));
        let response = LoginResponse {
            access: "tok".into(),
            refresh: "ref".into(),
            user: None,
        };
        state.session.establish(&response, "dave").unwrap();
        state
    }

    #[test]
    fn anonymous_navigation_lands_on_login() {
        let state = AppState::new(Rc::new(MemoryStorage::new()));
        assert_eq!(state.navigate(Route::Month, today()), (Route::Login, false));
    }

    #[test]
    fn persisted_token_restores_the_session() {
        let store = MemoryStorage::new();
        store.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        let state = AppState::new(Rc::new(store));
        assert_eq!(state.navigate(Route::Today, today()), (Route::Today, true));
    }

    #[test]
    fn entering_a_screen_applies_its_default_filter() {
        let state = signed_in();
        let (route, load) = state.navigate(Route::Month, today());

        assert_eq!(route, Route::Month);
        assert!(load);
        assert_eq!(
            state.records.borrow().filter(),
            RecordFilter::Month { year: 2026, month: 1 }
        );
    }

    #[test]
    fn same_route_does_not_reload() {
        let state = signed_in();
        state.navigate(Route::Year, today());
        assert_eq!(state.navigate(Route::Year, today()), (Route::Year, false));
    }

    #[test]
    fn leaving_the_dashboard_discards_the_draft() {
        let state = signed_in();
        state.navigate(Route::Dashboard, today());
        state.draft.borrow_mut().begin_scan();
        state.draft.borrow_mut().scan_succeeded(Default::default());

        state.navigate(Route::Today, today());
        assert!(state.draft.borrow().is_idle());
    }

    fn record(id: i64) -> ReceiptRecord {
        ReceiptRecord {
            id,
            store_name: "Shop".into(),
            total_amount: 5.0,
            date: "2026-01-12".into(),
            category: "food".into(),
        }
    }

    fn spending(total: f64) -> StatsSummary {
        StatsSummary {
            labels: vec!["food".into()],
            data: vec![total],
            total_spent: total,
            filter: String::new(),
        }
    }

    #[test]
    fn late_dashboard_responses_do_not_land_on_the_next_screen() {
        let state = signed_in();
        state.navigate(Route::Dashboard, today());
        let dashboard_list = state.records.borrow_mut().begin_load();
        let dashboard_stats = state.stats.borrow_mut().begin();

        state.navigate(Route::Today, today());
        let today_list = state.records.borrow_mut().begin_load();
        let today_stats = state.stats.borrow_mut().begin();

        assert!(state.records.borrow_mut().apply_list(today_list, Ok(vec![record(1)])));
        assert!(!state
            .records
            .borrow_mut()
            .apply_list(dashboard_list, Ok(vec![record(1), record(2), record(3)])));
        assert!(state.stats.borrow_mut().apply(today_stats, Ok(spending(5.0))));
        assert!(!state.stats.borrow_mut().apply(dashboard_stats, Ok(spending(90.0))));

        assert_eq!(state.records.borrow().items().len(), 1);
        assert_eq!(state.records.borrow().filter(), RecordFilter::Today);
        assert_eq!(state.stats.borrow().summary().unwrap().total_spent, 5.0);
    }

    #[test]
    fn previous_user_responses_are_dropped_after_logout() {
        let state = signed_in();
        state.navigate(Route::Dashboard, today());
        let old_list = state.records.borrow_mut().begin_load();
        let old_stats = state.stats.borrow_mut().begin();

        state.session.teardown().unwrap();
        state.reset_user_state();
        state
            .session
            .establish(
                &LoginResponse {
                    access: "tok2".into(),
                    refresh: String::new(),
                    user: None,
                },
                "erin",
            )
            .unwrap();
        let (_, load) = state.navigate(Route::Dashboard, today());
        assert!(load);
        let new_list = state.records.borrow_mut().begin_load();

        assert!(!state.records.borrow_mut().apply_list(old_list, Ok(vec![record(7)])));
        assert!(!state.stats.borrow_mut().apply(old_stats, Ok(spending(7.0))));
        assert!(state.records.borrow().items().is_empty());
        assert!(state.stats.borrow().summary().is_none());

        assert!(state.records.borrow_mut().apply_list(new_list, Ok(vec![record(8)])));
        assert_eq!(state.records.borrow().items()[0].id, 8);
    }

    #[test]
    fn subscribers_are_notified() {
        let state = AppState::new(Rc::new(MemoryStorage::new()));
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        state.notify_subscribers();
        state.clone().notify_subscribers();
        assert_eq!(calls.get(), 2);
    }
}
