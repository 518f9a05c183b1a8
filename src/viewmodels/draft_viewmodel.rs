// ============================================================================
// DRAFT VIEWMODEL - Scan -> verify -> save workflow
// ============================================================================
// Single slot: at most one unconfirmed receipt exists at a time.
//
//   Idle --begin_scan--> Scanning --scan_succeeded--> Verifying
//   Scanning --scan_failed--> Idle (+ banner)
//   Verifying --cancel--> Idle
//   Verifying --save_succeeded--> Idle (history re-fetch)
//   Verifying --save_failed--> Verifying (+ inline error)
// ============================================================================

use crate::error::ApiError;
use crate::models::ReceiptDraft;

#[derive(Clone, PartialEq, Debug)]
pub enum DraftPhase {
    Idle,
    Scanning,
    Verifying {
        draft: ReceiptDraft,
        saving: bool,
        error: Option<String>,
    },
}

/// Editable fields of the verification form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DraftField {
    StoreName,
    Date,
    TotalAmount,
    Category,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::StoreName => "store_name",
            DraftField::Date => "date",
            DraftField::TotalAmount => "total_amount",
            DraftField::Category => "category",
        }
    }
}

/// What the view must do after a save completes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SaveOutcome {
    RefetchHistory,
    Ignored,
}

#[derive(Clone, Debug)]
pub struct DraftWorkflow {
    phase: DraftPhase,
    banner: Option<String>,
}

impl DraftWorkflow {
    pub fn new() -> Self {
        Self {
            phase: DraftPhase::Idle,
            banner: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DraftPhase::Idle)
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, DraftPhase::Scanning)
    }

    pub fn draft(&self) -> Option<&ReceiptDraft> {
        match &self.phase {
            DraftPhase::Verifying { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Transient scan error shown above the dashboard
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn inline_error(&self) -> Option<&str> {
        match &self.phase {
            DraftPhase::Verifying { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.phase, DraftPhase::Verifying { saving: true, .. })
    }

    /// Only reachable from `Idle`; returns false otherwise
    pub fn begin_scan(&mut self) -> bool {
        if !self.is_idle() {
            log::warn!("⚠️ [DRAFT] Scan ignored, workflow busy: {:?}", self.phase);
            return false;
        }
        self.banner = None;
        self.phase = DraftPhase::Scanning;
        log::info!("📸 [DRAFT] Scanning");
        true
    }

    pub fn scan_succeeded(&mut self, draft: ReceiptDraft) {
        if !self.is_scanning() {
            log::warn!("⚠️ [DRAFT] Late scan result dropped");
            return;
        }
        log::info!("✅ [DRAFT] Draft ready: {}", draft.store_name);
        self.phase = DraftPhase::Verifying {
            draft: draft.normalized(),
            saving: false,
            error: None,
        };
    }

    pub fn scan_failed(&mut self, error: &ApiError) {
        log::error!("❌ [DRAFT] Scan failed: {}", error);
        self.phase = DraftPhase::Idle;
        self.banner = Some(ApiError::Scan(0).user_message());
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Applies one form edit. An unparsable amount keeps the previous value
    /// and sets the inline error.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        let DraftPhase::Verifying { draft, error, .. } = &mut self.phase else {
            return;
        };

        match field {
            DraftField::StoreName => draft.store_name = value.to_string(),
            DraftField::Date => draft.date = value.to_string(),
            DraftField::Category => draft.category = value.to_string(),
            DraftField::TotalAmount => match value.trim().parse::<f64>() {
                Ok(amount) if amount.is_finite() => {
                    draft.total_amount = amount;
                    *error = None;
                }
                _ => *error = Some("Total must be a number.".to_string()),
            },
        }
    }

    pub fn cancel(&mut self) {
        if let DraftPhase::Verifying { saving: true, .. } = self.phase {
            return;
        }
        if self.draft().is_some() {
            log::info!("[DRAFT] Draft discarded");
        }
        self.phase = DraftPhase::Idle;
    }

    /// Marks the draft as saving and hands out the payload to submit.
    /// `None` when there is no draft or a save is already in flight.
    pub fn begin_save(&mut self) -> Option<ReceiptDraft> {
        match &mut self.phase {
            DraftPhase::Verifying { draft, saving, error } if !*saving => {
                *saving = true;
                *error = None;
                Some(draft.clone())
            }
            _ => None,
        }
    }

    pub fn save_succeeded(&mut self) -> SaveOutcome {
        if !self.is_saving() {
            return SaveOutcome::Ignored;
        }
        log::info!("✅ [DRAFT] Receipt saved, draft cleared");
        self.phase = DraftPhase::Idle;
        SaveOutcome::RefetchHistory
    }

    pub fn save_failed(&mut self, failure: &ApiError) {
        log::error!("❌ [DRAFT] Save failed: {}", failure);
        if let DraftPhase::Verifying { saving, error, .. } = &mut self.phase {
            *saving = false;
            *error = Some(ApiError::Save(0).user_message());
        }
    }
}

impl Default for DraftWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned() -> ReceiptDraft {
        ReceiptDraft {
            store_name: "Lidl".to_string(),
            date: "2026-01-12".to_string(),
            total_amount: 12.5,
            category: "food".to_string(),
            items: None,
        }
    }

    fn verifying() -> DraftWorkflow {
        let mut workflow = DraftWorkflow::new();
        assert!(workflow.begin_scan());
        workflow.scan_succeeded(scanned());
        workflow
    }

    #[test]
    fn successful_scan_moves_to_verifying() {
        let workflow = verifying();
        assert_eq!(workflow.draft(), Some(&scanned()));
        assert!(workflow.banner().is_none());
    }

    #[test]
    fn scan_failure_returns_to_idle_with_banner() {
        let mut workflow = DraftWorkflow::new();
        workflow.begin_scan();
        workflow.scan_failed(&ApiError::Scan(500));

        assert!(workflow.is_idle());
        assert!(workflow.draft().is_none());
        assert_eq!(workflow.banner(), Some("Failed to scan receipt."));
    }

    #[test]
    fn scan_cannot_start_while_a_draft_exists() {
        let mut workflow = verifying();
        assert!(!workflow.begin_scan());
        assert!(workflow.draft().is_some());

        let mut scanning = DraftWorkflow::new();
        scanning.begin_scan();
        assert!(!scanning.begin_scan());
    }

    #[test]
    fn new_scan_clears_previous_banner() {
        let mut workflow = DraftWorkflow::new();
        workflow.begin_scan();
        workflow.scan_failed(&ApiError::Network("offline".into()));
        workflow.begin_scan();
        assert!(workflow.banner().is_none());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut workflow = verifying();
        workflow.cancel();
        assert!(workflow.is_idle());
        assert!(workflow.draft().is_none());
    }

    #[test]
    fn field_edits_update_the_draft() {
        let mut workflow = verifying();
        workflow.update_field(DraftField::StoreName, "Aldi");
        workflow.update_field(DraftField::TotalAmount, " 19.99 ");
        workflow.update_field(DraftField::Category, "shopping");

        let draft = workflow.draft().unwrap();
        assert_eq!(draft.store_name, "Aldi");
        assert_eq!(draft.total_amount, 19.99);
        assert_eq!(draft.category, "shopping");
    }

    #[test]
    fn bad_amount_keeps_previous_value() {
        let mut workflow = verifying();
        workflow.update_field(DraftField::TotalAmount, "twelve");

        assert_eq!(workflow.draft().unwrap().total_amount, 12.5);
        assert_eq!(workflow.inline_error(), Some("Total must be a number."));
    }

    #[test]
    fn save_failure_keeps_draft_and_shows_inline_error() {
        let mut workflow = verifying();
        let payload = workflow.begin_save().unwrap();
        assert_eq!(payload, scanned());
        assert!(workflow.is_saving());

        workflow.save_failed(&ApiError::Save(400));

        assert_eq!(workflow.draft(), Some(&scanned()));
        assert!(!workflow.is_saving());
        assert_eq!(workflow.inline_error(), Some("Failed to save receipt. Try again."));
    }

    #[test]
    fn save_success_clears_draft_and_refetches_once() {
        let mut workflow = verifying();
        workflow.begin_save().unwrap();

        assert_eq!(workflow.save_succeeded(), SaveOutcome::RefetchHistory);
        assert!(workflow.is_idle());
        assert!(workflow.draft().is_none());
        assert_eq!(workflow.save_succeeded(), SaveOutcome::Ignored);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut workflow = verifying();
        assert!(workflow.begin_save().is_some());
        assert!(workflow.begin_save().is_none());
    }

    #[test]
    fn cancel_is_ignored_while_saving() {
        let mut workflow = verifying();
        workflow.begin_save();
        workflow.cancel();
        assert!(workflow.is_saving());
    }
}
