//! Cookie consent: the persisted record, its storage, and the banner state machine.

use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::window;
use yew::Reducible;

use crate::config::CONSENT_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentCategory {
    Necessary,
    Marketing,
    Statistics,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCategories {
    pub necessary: bool,
    pub marketing: bool,
    pub statistics: bool,
}

impl ConsentCategories {
    pub const DENIED: Self = Self {
        necessary: true,
        marketing: false,
        statistics: false,
    };

    pub const ALL: Self = Self {
        necessary: true,
        marketing: true,
        statistics: true,
    };

    /// Flips an optional category. `Necessary` is always on and ignores toggles.
    pub fn toggled(self, category: ConsentCategory) -> Self {
        match category {
            ConsentCategory::Necessary => self,
            ConsentCategory::Marketing => Self {
                marketing: !self.marketing,
                ..self
            },
            ConsentCategory::Statistics => Self {
                statistics: !self.statistics,
                ..self
            },
        }
    }

    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Statistics => self.statistics,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub consent: bool,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub categories: ConsentCategories,
}

impl ConsentRecord {
    pub fn new(categories: ConsentCategories, at: DateTime<Utc>) -> Self {
        Self {
            consent: true,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            categories: ConsentCategories {
                necessary: true,
                ..categories
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage call failed: {0}")]
    Access(String),
    #[error("stored consent record is invalid: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Raw key/value persistence for the consent record.
pub trait ConsentStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, raw: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` under a fixed key.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStore {
    key: &'static str,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self {
            key: CONSENT_STORAGE_KEY,
        }
    }
}

impl BrowserStore {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ConsentStore for BrowserStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(self.key, raw)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

fn read_record(store: &impl ConsentStore) -> Result<Option<ConsentRecord>, StorageError> {
    match store.read()? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Reads the stored decision. Any failure counts as a first visit.
pub fn load_consent(store: &impl ConsentStore) -> Option<ConsentRecord> {
    match read_record(store) {
        Ok(record) => record,
        Err(e) => {
            warn!("Ignoring stored consent: {}", e);
            None
        }
    }
}

/// Overwrites the stored decision with `categories`.
pub fn save_consent(
    store: &impl ConsentStore,
    categories: ConsentCategories,
    at: DateTime<Utc>,
) -> Result<ConsentRecord, StorageError> {
    let record = ConsentRecord::new(categories, at);
    store.write(&serde_json::to_string(&record)?)?;
    debug!("Consent saved: {:?}", record.categories);
    Ok(record)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentView {
    Hidden,
    Banner,
    Preferences,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentAction {
    AcceptAll,
    Deny,
    OpenPreferences,
    ClosePreferences,
    Toggle(ConsentCategory),
    Save,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentPanel {
    pub view: ConsentView,
    pub toggles: ConsentCategories,
}

/// Result of one user action: the next panel state and, when the user made
/// a decision, the categories that must be persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub panel: ConsentPanel,
    pub decision: Option<ConsentCategories>,
}

impl ConsentPanel {
    /// Initial state for a fresh mount. The toggles always start denied,
    /// even when a stored record exists.
    pub fn mount(stored: Option<&ConsentRecord>) -> Self {
        Self {
            view: if stored.is_some() {
                ConsentView::Hidden
            } else {
                ConsentView::Banner
            },
            toggles: ConsentCategories::DENIED,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.view != ConsentView::Hidden
    }

    fn decide(categories: ConsentCategories) -> Transition {
        Transition {
            panel: ConsentPanel {
                view: ConsentView::Hidden,
                toggles: categories,
            },
            decision: Some(categories),
        }
    }

    fn stay(self) -> Transition {
        Transition {
            panel: self,
            decision: None,
        }
    }

    pub fn apply(self, action: ConsentAction) -> Transition {
        use ConsentAction::*;
        use ConsentView::*;

        match (self.view, action) {
            (Hidden, _) => self.stay(),
            (_, AcceptAll) => Self::decide(ConsentCategories::ALL),
            (_, Deny) => Self::decide(ConsentCategories::DENIED),
            (Banner, OpenPreferences) => ConsentPanel {
                view: Preferences,
                ..self
            }
            .stay(),
            (Preferences, ClosePreferences) => ConsentPanel {
                view: Banner,
                ..self
            }
            .stay(),
            (Preferences, Toggle(category)) => ConsentPanel {
                toggles: self.toggles.toggled(category),
                ..self
            }
            .stay(),
            (Preferences, Save) => Self::decide(self.toggles),
            _ => self.stay(),
        }
    }
}

/// Reducer state behind the banner. `decision` is set by the first action
/// that decides and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentFlow {
    pub panel: ConsentPanel,
    pub decision: Option<ConsentCategories>,
}

impl ConsentFlow {
    pub fn mount(stored: Option<&ConsentRecord>) -> Self {
        Self {
            panel: ConsentPanel::mount(stored),
            decision: None,
        }
    }
}

impl Reducible for ConsentFlow {
    type Action = ConsentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let transition = self.panel.apply(action);
        Rc::new(ConsentFlow {
            panel: transition.panel,
            decision: self.decision.or(transition.decision),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::*;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        writes: RefCell<usize>,
        broken: bool,
    }

    impl ConsentStore for MemoryStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.value.borrow().clone())
        }

        fn write(&self, raw: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            *self.writes.borrow_mut() += 1;
            *self.value.borrow_mut() = Some(raw.to_string());
            Ok(())
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 9, 14, 30, 0).unwrap()
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        fixed_time()
    }

    /// Runs actions against a panel the way the banner component does.
    fn drive(store: &MemoryStore, actions: &[ConsentAction], at: DateTime<Utc>) -> ConsentPanel {
        let mut panel = ConsentPanel::mount(load_consent(store).as_ref());
        for action in actions {
            let transition = panel.apply(*action);
            if let Some(categories) = transition.decision {
                save_consent(store, categories, at).unwrap();
            }
            panel = transition.panel;
        }
        panel
    }

    fn stored(store: &MemoryStore) -> ConsentRecord {
        serde_json::from_str(store.value.borrow().as_deref().unwrap()).unwrap()
    }

    #[rstest]
    fn test_record_json_shape(now: DateTime<Utc>) {
        let record = ConsentRecord::new(ConsentCategories::ALL, now);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "consent": true,
                "timestamp": "2026-01-09T14:30:00.000Z",
                "categories": { "necessary": true, "marketing": true, "statistics": true }
            })
        );
    }

    #[rstest]
    fn test_record_forces_necessary(now: DateTime<Utc>) {
        let categories = ConsentCategories {
            necessary: false,
            marketing: true,
            statistics: false,
        };
        assert!(ConsentRecord::new(categories, now).categories.necessary);
    }

    #[rstest]
    #[case(&[ConsentAction::AcceptAll], ConsentCategories::ALL)]
    #[case(&[ConsentAction::Deny], ConsentCategories::DENIED)]
    #[case(
        &[
            ConsentAction::OpenPreferences,
            ConsentAction::Toggle(ConsentCategory::Statistics),
            ConsentAction::Save,
        ],
        ConsentCategories { necessary: true, marketing: false, statistics: true }
    )]
    #[case(
        &[
            ConsentAction::OpenPreferences,
            ConsentAction::Toggle(ConsentCategory::Marketing),
            ConsentAction::Deny,
        ],
        ConsentCategories::DENIED
    )]
    fn test_decisions_persist_one_record(
        now: DateTime<Utc>,
        #[case] actions: &[ConsentAction],
        #[case] expected: ConsentCategories,
    ) {
        let store = MemoryStore::default();
        let panel = drive(&store, actions, now);
        assert_eq!(panel.view, ConsentView::Hidden);
        assert_eq!(*store.writes.borrow(), 1);
        assert_eq!(stored(&store).categories, expected);
    }

    #[test]
    fn test_first_visit_shows_banner() {
        let store = MemoryStore::default();
        let panel = ConsentPanel::mount(load_consent(&store).as_ref());
        assert_eq!(panel.view, ConsentView::Banner);
    }

    #[rstest]
    fn test_stored_record_keeps_banner_hidden(now: DateTime<Utc>) {
        let store = MemoryStore::default();
        save_consent(&store, ConsentCategories::ALL, now).unwrap();
        let panel = ConsentPanel::mount(load_consent(&store).as_ref());
        assert!(!panel.is_visible());
        // Toggles are not rehydrated from the stored record.
        assert_eq!(panel.toggles, ConsentCategories::DENIED);
    }

    #[test]
    fn test_corrupt_record_counts_as_first_visit() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some("{not json".to_string());
        assert_eq!(load_consent(&store), None);
    }

    #[test]
    fn test_unavailable_storage_counts_as_first_visit() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };
        let panel = ConsentPanel::mount(load_consent(&store).as_ref());
        assert_eq!(panel.view, ConsentView::Banner);
    }

    #[test]
    fn test_close_preferences_returns_to_banner() {
        let transition = ConsentPanel::mount(None)
            .apply(ConsentAction::OpenPreferences)
            .panel
            .apply(ConsentAction::ClosePreferences);
        assert_eq!(transition.panel.view, ConsentView::Banner);
        assert_eq!(transition.decision, None);
    }

    #[test]
    fn test_necessary_toggle_is_noop() {
        let panel = ConsentPanel::mount(None)
            .apply(ConsentAction::OpenPreferences)
            .panel;
        let toggled = panel.apply(ConsentAction::Toggle(ConsentCategory::Necessary));
        assert_eq!(toggled.panel, panel);
    }

    #[test]
    fn test_save_needs_preferences_view() {
        let transition = ConsentPanel::mount(None).apply(ConsentAction::Save);
        assert_eq!(transition.decision, None);
        assert_eq!(transition.panel.view, ConsentView::Banner);
    }

    #[test]
    fn test_repeated_clicks_reduce_from_latest_state() {
        let flow = Rc::new(ConsentFlow::mount(None));
        let flow = flow.reduce(ConsentAction::AcceptAll);
        let flow = flow.reduce(ConsentAction::AcceptAll);
        let flow = flow.reduce(ConsentAction::Deny);
        assert_eq!(flow.panel.view, ConsentView::Hidden);
        assert_eq!(flow.decision, Some(ConsentCategories::ALL));
    }

    #[test]
    fn test_flow_records_saved_toggles() {
        let flow = [
            ConsentAction::OpenPreferences,
            ConsentAction::Toggle(ConsentCategory::Statistics),
            ConsentAction::Save,
            ConsentAction::Toggle(ConsentCategory::Marketing),
        ]
        .into_iter()
        .fold(Rc::new(ConsentFlow::mount(None)), |flow, action| flow.reduce(action));
        let decision = flow.decision.unwrap();
        assert!(decision.necessary);
        assert!(decision.statistics);
        assert!(!decision.marketing);
    }

    #[test]
    fn test_flow_with_stored_record_never_decides() {
        let record = ConsentRecord::new(ConsentCategories::ALL, fixed_time());
        let flow = Rc::new(ConsentFlow::mount(Some(&record))).reduce(ConsentAction::Deny);
        assert_eq!(flow.decision, None);
        assert!(!flow.panel.is_visible());
    }

    fn action_strategy() -> impl Strategy<Value = ConsentAction> {
        prop_oneof![
            Just(ConsentAction::AcceptAll),
            Just(ConsentAction::Deny),
            Just(ConsentAction::OpenPreferences),
            Just(ConsentAction::ClosePreferences),
            Just(ConsentAction::Save),
            Just(ConsentAction::Toggle(ConsentCategory::Necessary)),
            Just(ConsentAction::Toggle(ConsentCategory::Marketing)),
            Just(ConsentAction::Toggle(ConsentCategory::Statistics)),
        ]
    }

    proptest! {
        #[test]
        fn necessary_is_always_persisted(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let store = MemoryStore::default();
            let panel = drive(&store, &actions, fixed_time());
            prop_assert!(*store.writes.borrow() <= 1);
            if *store.writes.borrow() == 1 {
                prop_assert!(stored(&store).categories.necessary);
                prop_assert_eq!(panel.view, ConsentView::Hidden);
            }
        }

        #[test]
        fn remount_after_decision_stays_hidden(actions in prop::collection::vec(action_strategy(), 0..30)) {
            let store = MemoryStore::default();
            drive(&store, &actions, fixed_time());
            let remounted = ConsentPanel::mount(load_consent(&store).as_ref());
            prop_assert_eq!(remounted.is_visible(), *store.writes.borrow() == 0);
        }
    }
}
