//! Bills page controller: data loading and UI event handling
//!
//! Handlers are pure: they inspect the document and return an [`Effect`]
//! describing what should change. [`Effect::apply`] performs the mutation.

use crate::app::NavigationContext;
use crate::core::{Bill, DomError, StoreError, format_date, sort_by_date_desc};
use crate::ui::dom::{Document, NodeId, TEST_ID_ATTRIBUTE};
use crate::ui::views::{self, BILL_URL_ATTRIBUTE, RECEIPT_MODAL_ID, test_ids};

/// A user interaction on the bills page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click { target: NodeId },
}

/// Document change requested by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenModal { url: String, width: u32 },
    Noop,
}

impl Effect {
    /// Perform the change on `document`
    ///
    /// Opening the modal twice leaves it in the same state as opening it once.
    pub fn apply(&self, document: &mut Document) -> Result<(), DomError> {
        match self {
            Effect::Noop => Ok(()),
            Effect::OpenModal { url, width } => {
                let modal = document.get_by_id(RECEIPT_MODAL_ID)?;
                let body = document
                    .query_selector(&format!("#{RECEIPT_MODAL_ID} .modal-body"))?
                    .ok_or_else(|| DomError::NotFound {
                        query: format!("#{RECEIPT_MODAL_ID} .modal-body"),
                    })?;

                document.set_inner(body, &views::receipt_preview(url, *width));
                document.add_class(modal, "show");
                document.set_attribute(modal, "style", "display: block;");
                document.set_attribute(modal, "aria-hidden", "false");
                Ok(())
            }
        }
    }
}

/// Controller behind the bills page
pub struct BillsController {
    context: NavigationContext,
}

impl BillsController {
    pub fn new(context: NavigationContext) -> Self {
        Self { context }
    }

    /// Route a UI event to its handler
    pub fn handle(&self, document: &Document, event: UiEvent) -> Effect {
        self.route(document, event, |doc, icon| self.handle_click_icon_eye(doc, icon))
    }

    /// Route a UI event, sending eye-icon clicks to `on_icon_eye`
    pub fn route(
        &self,
        document: &Document,
        event: UiEvent,
        on_icon_eye: impl FnOnce(&Document, NodeId) -> Effect,
    ) -> Effect {
        match event {
            UiEvent::Click { target } => {
                if document.attribute(target, TEST_ID_ATTRIBUTE) == Some(test_ids::ICON_EYE) {
                    on_icon_eye(document, target)
                } else {
                    Effect::Noop
                }
            }
        }
    }

    /// Handle then apply, the equivalent of a user click
    pub fn dispatch(&self, document: &mut Document, event: UiEvent) -> Result<Effect, DomError> {
        self.dispatch_with(document, event, |doc, icon| {
            self.handle_click_icon_eye(doc, icon)
        })
    }

    /// [`dispatch`](Self::dispatch) with a caller-supplied eye-icon handler
    pub fn dispatch_with(
        &self,
        document: &mut Document,
        event: UiEvent,
        on_icon_eye: impl FnOnce(&Document, NodeId) -> Effect,
    ) -> Result<Effect, DomError> {
        let effect = self.route(document, event, on_icon_eye);
        effect.apply(document)?;
        Ok(effect)
    }

    /// Open the receipt referenced by an eye icon
    pub fn handle_click_icon_eye(&self, document: &Document, icon: NodeId) -> Effect {
        match document.attribute(icon, BILL_URL_ATTRIBUTE) {
            Some(url) => Effect::OpenModal {
                url: url.to_string(),
                width: self.context.config.bills_page.receipt_width,
            },
            None => {
                tracing::debug!("eye icon clicked without {}", BILL_URL_ATTRIBUTE);
                Effect::Noop
            }
        }
    }

    /// Fetch the bills, latest first, formatted for display
    pub async fn get_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let mut bills = self.context.store.bills().list().await?;
        tracing::debug!(count = bills.len(), "bills fetched");

        sort_by_date_desc(&mut bills);

        if self.context.config.bills_page.format_dates {
            for bill in &mut bills {
                match format_date(&bill.date) {
                    Some(formatted) => bill.date = formatted,
                    None => {
                        tracing::warn!(bill_id = %bill.id, date = %bill.date, "unparsable bill date, shown as is")
                    }
                }
            }
        }

        Ok(bills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::{InMemorySessionStorage, MockStore, fixtures};
    use crate::ui::views::{DEFAULT_BILLS_TITLE, RenderState, bills_ui};
    use std::sync::Arc;

    fn controller(store: MockStore, config: AppConfig) -> BillsController {
        BillsController::new(NavigationContext::new(
            Arc::new(store),
            Arc::new(InMemorySessionStorage::new()),
            config,
        ))
    }

    fn bills_document() -> Document {
        let mut doc = Document::new();
        let bills = fixtures::bills();
        doc.set_body(&bills_ui(RenderState::Data(&bills), DEFAULT_BILLS_TITLE));
        doc
    }

    #[tokio::test]
    async fn test_get_bills_sorts_and_formats() {
        let controller = controller(MockStore::with_fixtures(), AppConfig::default());

        let bills = controller.get_bills().await.unwrap();

        let dates: Vec<&str> = bills.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, ["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]);
    }

    #[tokio::test]
    async fn test_get_bills_without_formatting() {
        let mut config = AppConfig::default();
        config.bills_page.format_dates = false;
        let controller = controller(MockStore::with_fixtures(), config);

        let bills = controller.get_bills().await.unwrap();

        assert_eq!(bills[0].date, "2004-04-04");
        assert_eq!(bills[3].date, "2001-01-01");
    }

    #[tokio::test]
    async fn test_get_bills_keeps_corrupted_date() {
        let controller = controller(
            MockStore::new(vec![fixtures::corrupted_bill()]),
            AppConfig::default(),
        );

        let bills = controller.get_bills().await.unwrap();

        assert_eq!(bills[0].date, "20000004-04-04");
    }

    #[tokio::test]
    async fn test_get_bills_propagates_store_error() {
        let store = MockStore::with_fixtures();
        store.fail_once(StoreError::http(500));
        let controller = controller(store, AppConfig::default());

        let err = controller.get_bills().await.unwrap_err();

        assert_eq!(err.message, "Erreur 500");
    }

    #[test]
    fn test_eye_click_opens_modal() {
        let controller = controller(MockStore::with_fixtures(), AppConfig::default());
        let mut doc = bills_document();
        let icon = doc.get_all_by_test_id(test_ids::ICON_EYE).unwrap()[0];

        let effect = controller.dispatch(&mut doc, UiEvent::Click { target: icon }).unwrap();

        assert_eq!(
            effect,
            Effect::OpenModal {
                url: fixtures::bills()[0].file_url.clone(),
                width: 400,
            }
        );
        let modal = doc.get_by_test_id(test_ids::RECEIPT_MODAL).unwrap();
        assert!(doc.is_visible(modal));
        assert!(doc.has_class(modal, "show"));
        let img = doc.query_selector("#modaleFile img").unwrap().unwrap();
        assert_eq!(doc.attribute(img, "src"), Some(fixtures::bills()[0].file_url.as_str()));
    }

    #[test]
    fn test_opening_modal_twice_is_idempotent() {
        let controller = controller(MockStore::with_fixtures(), AppConfig::default());
        let mut doc = bills_document();
        let icon = doc.get_all_by_test_id(test_ids::ICON_EYE).unwrap()[0];

        controller.dispatch(&mut doc, UiEvent::Click { target: icon }).unwrap();
        let modal = doc.get_by_test_id(test_ids::RECEIPT_MODAL).unwrap();
        let first = doc.outer_html(modal);

        controller.dispatch(&mut doc, UiEvent::Click { target: icon }).unwrap();

        assert_eq!(doc.outer_html(modal), first);
        assert_eq!(doc.query_selector_all("#modaleFile img").unwrap().len(), 1);
    }

    #[test]
    fn test_click_elsewhere_is_noop() {
        let controller = controller(MockStore::with_fixtures(), AppConfig::default());
        let mut doc = bills_document();
        let window_icon = doc.get_by_test_id(test_ids::ICON_WINDOW).unwrap();

        let effect = controller
            .dispatch(&mut doc, UiEvent::Click { target: window_icon })
            .unwrap();

        assert_eq!(effect, Effect::Noop);
        let modal = doc.get_by_test_id(test_ids::RECEIPT_MODAL).unwrap();
        assert!(!doc.is_visible(modal));
    }
}
