// ============================================================================
// RECORDS VIEWMODEL - One filtered record list for every screen
// ============================================================================
// Holds the active filter, the loaded records and (dashboard only) the
// export selection. Responses carry the generation they were requested
// with; anything older than the latest request is dropped.
// ============================================================================

use crate::error::ApiError;
use crate::models::{ReceiptRecord, RecordFilter};

/// Ids marked for export, in the order they were picked
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Selection {
    ids: Vec<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it otherwise
    pub fn toggle(&mut self, id: i64) {
        match self.ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn remove(&mut self, id: i64) {
        self.ids.retain(|selected| *selected != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Request generation handed out by `begin_load`
pub type LoadTicket = u64;

#[derive(Clone, Debug)]
pub struct RecordsViewModel {
    filter: RecordFilter,
    items: Vec<ReceiptRecord>,
    selection: Selection,
    error: Option<String>,
    loading: bool,
    exporting: bool,
    generation: u64,
}

impl RecordsViewModel {
    pub fn new(filter: RecordFilter) -> Self {
        Self {
            filter,
            items: Vec::new(),
            selection: Selection::new(),
            error: None,
            loading: false,
            exporting: false,
            generation: 0,
        }
    }

    /// Starts over with `filter`. The generation moves on, so responses to
    /// requests issued before the reset are dropped.
    pub fn reset(&mut self, filter: RecordFilter) {
        let generation = self.generation + 1;
        *self = Self::new(filter);
        self.generation = generation;
    }

    pub fn filter(&self) -> RecordFilter {
        self.filter
    }

    pub fn items(&self) -> &[ReceiptRecord] {
        &self.items
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// True once a load finished with nothing to show
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    /// Switches the filter. Returns false when nothing changed.
    pub fn set_filter(&mut self, filter: RecordFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        log::info!("🔎 [RECORDS] Filter -> '{}'", filter.query_string());
        self.filter = filter;
        true
    }

    /// Starts a list request and returns its ticket
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a list response. Returns false when the ticket is stale.
    pub fn apply_list(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ReceiptRecord>, ApiError>,
    ) -> bool {
        if ticket != self.generation {
            log::debug!("[RECORDS] Stale list response #{} dropped", ticket);
            return false;
        }

        self.loading = false;
        match result {
            Ok(records) => {
                self.selection
                    .ids
                    .retain(|id| records.iter().any(|record| record.id == *id));
                self.items = records;
                self.error = None;
            }
            Err(e) => {
                log::error!("❌ [RECORDS] Load failed: {}", e);
                self.items.clear();
                self.selection.clear();
                self.error = Some(e.user_message());
            }
        }
        true
    }

    pub fn toggle(&mut self, id: i64) {
        self.selection.toggle(id);
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(id)
    }

    /// Drops a deleted record from the list and the selection
    pub fn remove_record(&mut self, id: i64) {
        self.items.retain(|record| record.id != id);
        self.selection.remove(id);
    }

    /// Alert text for a failed delete. The list is left untouched.
    pub fn delete_failed(&self, id: i64, error: &ApiError) -> String {
        log::error!("❌ [RECORDS] Delete #{} failed: {}", id, error);
        ApiError::Delete(0).user_message()
    }

    /// Ids to export, or `None` when the selection is empty or an export
    /// is already running
    pub fn begin_export(&mut self) -> Option<Vec<i64>> {
        if self.selection.is_empty() || self.exporting {
            return None;
        }
        self.exporting = true;
        Some(self.selection.ids().to_vec())
    }

    pub fn finish_export(&mut self) {
        self.exporting = false;
    }

    /// Label of the export button
    pub fn export_label(&self) -> String {
        if self.exporting {
            "Downloading...".to_string()
        } else {
            format!("Export ({})", self.selection.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, store: &str) -> ReceiptRecord {
        ReceiptRecord {
            id,
            store_name: store.to_string(),
            total_amount: 10.0,
            date: "2026-01-12".to_string(),
            category: "food".to_string(),
        }
    }

    fn loaded(ids: &[i64]) -> RecordsViewModel {
        let mut vm = RecordsViewModel::new(RecordFilter::All);
        let ticket = vm.begin_load();
        let records = ids.iter().map(|id| record(*id, "Shop")).collect();
        assert!(vm.apply_list(ticket, Ok(records)));
        vm
    }

    #[test]
    fn selection_toggles_and_keeps_pick_order() {
        let mut selection = Selection::new();
        selection.toggle(7);
        selection.toggle(3);
        selection.toggle(9);
        selection.toggle(7);
        assert_eq!(selection.ids(), &[3, 9]);
        assert!(!selection.contains(7));
    }

    #[test]
    fn deleting_a_selected_record_drops_it_everywhere() {
        let mut vm = loaded(&[1, 2, 3]);
        vm.toggle(2);
        vm.toggle(3);

        vm.remove_record(2);

        assert_eq!(vm.items().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(vm.selection().ids(), &[3]);
    }

    #[test]
    fn deleting_an_unselected_record_keeps_the_selection() {
        let mut vm = loaded(&[1, 2, 3]);
        vm.toggle(3);

        vm.remove_record(1);

        assert_eq!(vm.selection().ids(), &[3]);
        assert_eq!(vm.items().len(), 2);
    }

    #[test]
    fn delete_failures_always_report_the_delete() {
        let vm = loaded(&[4]);
        for error in [
            ApiError::Delete(500),
            ApiError::Network("connection refused".into()),
            ApiError::Parse("eof".into()),
        ] {
            assert_eq!(vm.delete_failed(4, &error), "Failed to delete receipt.");
        }
        assert_eq!(vm.items().len(), 1);
    }

    #[test]
    fn export_needs_a_selection() {
        let mut vm = loaded(&[1, 2]);
        assert_eq!(vm.begin_export(), None);
        assert!(!vm.is_exporting());
    }

    #[test]
    fn export_hands_out_selected_ids_once() {
        let mut vm = loaded(&[3, 5, 7]);
        vm.toggle(3);
        vm.toggle(7);

        assert_eq!(vm.begin_export(), Some(vec![3, 7]));
        assert_eq!(vm.export_label(), "Downloading...");
        assert_eq!(vm.begin_export(), None);

        vm.finish_export();
        assert_eq!(vm.export_label(), "Export (2)");
    }

    #[test]
    fn stale_list_responses_are_dropped() {
        let mut vm = RecordsViewModel::new(RecordFilter::Today);
        let first = vm.begin_load();
        let second = vm.begin_load();

        assert!(vm.apply_list(second, Ok(vec![record(2, "New")])));
        assert!(!vm.apply_list(first, Ok(vec![record(1, "Old")])));

        assert_eq!(vm.items()[0].store_name, "New");
        assert!(!vm.is_loading());
    }

    #[test]
    fn load_error_clears_items_and_shows_message() {
        let mut vm = loaded(&[1]);
        vm.toggle(1);
        let ticket = vm.begin_load();
        vm.apply_list(ticket, Err(ApiError::Request("bad month".into())));

        assert!(vm.items().is_empty());
        assert!(vm.selection().is_empty());
        assert_eq!(vm.error(), Some("bad month"));
        assert!(!vm.is_empty());
    }

    #[test]
    fn reload_prunes_selection_to_present_records() {
        let mut vm = loaded(&[1, 2]);
        vm.toggle(1);
        vm.toggle(2);
        let ticket = vm.begin_load();
        vm.apply_list(ticket, Ok(vec![record(2, "Shop")]));
        assert_eq!(vm.selection().ids(), &[2]);
    }

    #[test]
    fn empty_result_reports_empty() {
        let vm = loaded(&[]);
        assert!(vm.is_empty());
    }

    #[test]
    fn reset_drops_responses_to_earlier_requests() {
        let mut vm = loaded(&[1]);
        vm.toggle(1);
        let before = vm.begin_load();

        vm.reset(RecordFilter::Today);
        let after = vm.begin_load();

        assert_ne!(before, after);
        assert!(!vm.apply_list(before, Ok(vec![record(9, "Old")])));
        assert!(vm.items().is_empty());
        assert!(vm.selection().is_empty());
        assert!(vm.apply_list(after, Ok(vec![record(2, "New")])));
        assert_eq!(vm.filter(), RecordFilter::Today);
    }

    #[test]
    fn same_filter_is_not_a_change() {
        let mut vm = RecordsViewModel::new(RecordFilter::Year(2026));
        assert!(!vm.set_filter(RecordFilter::Year(2026)));
        assert!(vm.set_filter(RecordFilter::Year(2025)));
        assert_eq!(vm.filter(), RecordFilter::Year(2025));
    }
}
