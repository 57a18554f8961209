//! Customer account management over the token API.

use chrono::NaiveDate;
use shared::Result;
use shared_http::api::{Customer, CustomerPage};
use tracing::{info, warn};

use crate::notification::Notification;
use crate::ports::AccountsClient;

pub const MISSING_DATE: &str = "Data de desativação é necessária para desativar um cliente.";
pub const STATUS_FAILED: &str = "Erro ao alterar status do cliente.";
pub const DEACTIVATED: &str = "Usuário desativado com sucesso.";
pub const REACTIVATED: &str = "Usuário ativado com sucesso.";
pub const TOKEN_COPIED: &str = "Token copiado para a área de transferência.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAction {
    Deactivate { customer_id: String, date: NaiveDate },
    Reactivate { customer_id: String },
}

impl AccountAction {
    pub async fn run(&self, client: &dyn AccountsClient) -> Result<()> {
        match self {
            AccountAction::Deactivate { customer_id, date } => {
                client.deactivate(customer_id, *date).await.map(|_| ())
            }
            AccountAction::Reactivate { customer_id } => {
                client.reactivate(customer_id).await.map(|_| ())
            }
        }
    }
}

/// Confirmation dialog for toggling one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDialog {
    pub customer_id: String,
    /// The customer is currently deactivated.
    pub reactivate: bool,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountsScreen {
    pub page: u32,
    pub last_page: u32,
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub search: String,
    dialog: Option<StatusDialog>,
    notification: Option<Notification>,
}

impl Default for AccountsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountsScreen {
    pub fn new() -> Self {
        Self {
            page: 1,
            last_page: 1,
            customers: Vec::new(),
            loading: false,
            search: String::new(),
            dialog: None,
            notification: None,
        }
    }

    pub fn dialog(&self) -> Option<&StatusDialog> {
        self.dialog.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn begin_load(&mut self) -> u32 {
        self.loading = true;
        self.page
    }

    /// A failed listing is logged and shows an empty page.
    pub fn finish_load(&mut self, result: Result<CustomerPage>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.customers = page.data;
                self.last_page = page.last_page.max(1);
            }
            Err(e) => {
                warn!("Loading customers page {} failed: {}", self.page, e);
                self.customers.clear();
            }
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }

    /// Moves back a page; `None` on the first one.
    pub fn previous_page(&mut self) -> Option<u32> {
        if !self.has_previous() {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }

    pub fn next_page(&mut self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        self.page += 1;
        Some(self.page)
    }

    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search = value.into();
    }

    /// Customers on the current page whose id contains the search text.
    pub fn visible(&self) -> Vec<&Customer> {
        let needle = self.search.trim().to_lowercase();
        self.customers
            .iter()
            .filter(|c| needle.is_empty() || c.customer_id.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn open_toggle(&mut self, customer_id: &str) {
        let reactivate = self
            .customers
            .iter()
            .find(|c| c.customer_id == customer_id)
            .is_some_and(|c| !c.is_active());
        self.dialog = Some(StatusDialog {
            customer_id: customer_id.to_string(),
            reactivate,
            date: String::new(),
        });
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.date = value.into();
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Closes the dialog and returns the status change to perform, if the
    /// input allows one.
    pub fn confirm(&mut self) -> Option<AccountAction> {
        let dialog = self.dialog.take()?;
        let Some(customer) = self
            .customers
            .iter()
            .find(|c| c.customer_id == dialog.customer_id)
        else {
            warn!("Customer {} is not on the current page", dialog.customer_id);
            self.notification = Some(Notification::error(STATUS_FAILED));
            return None;
        };

        if !customer.is_active() {
            return Some(AccountAction::Reactivate {
                customer_id: dialog.customer_id,
            });
        }
        match NaiveDate::parse_from_str(dialog.date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(AccountAction::Deactivate {
                customer_id: dialog.customer_id,
                date,
            }),
            Err(_) => {
                self.notification = Some(Notification::error(MISSING_DATE));
                None
            }
        }
    }

    /// Returns `true` when the current page must be reloaded.
    pub fn finish_action(&mut self, action: &AccountAction, result: Result<()>) -> bool {
        match (action, result) {
            (AccountAction::Deactivate { customer_id, .. }, Ok(())) => {
                info!("Customer {} deactivated", customer_id);
                self.notification = Some(Notification::success(DEACTIVATED));
                true
            }
            (AccountAction::Reactivate { customer_id }, Ok(())) => {
                info!("Customer {} reactivated", customer_id);
                self.notification = Some(Notification::success(REACTIVATED));
                true
            }
            (_, Err(e)) => {
                warn!("Changing customer status failed: {}", e);
                self.notification = Some(Notification::error(STATUS_FAILED));
                false
            }
        }
    }

    /// Token to put on the clipboard, with the matching notice.
    pub fn copy_token(&mut self, customer_id: &str) -> Option<String> {
        let token = self
            .customers
            .iter()
            .find(|c| c.customer_id == customer_id)?
            .token
            .clone()
            .filter(|t| !t.is_empty())?;
        self.notification = Some(Notification::info(TOKEN_COPIED));
        Some(token)
    }

    pub async fn load(&mut self, client: &dyn AccountsClient) {
        let page = self.begin_load();
        let result = client.customers(page).await;
        self.finish_load(result);
    }

    pub async fn confirm_and_apply(&mut self, client: &dyn AccountsClient) {
        let Some(action) = self.confirm() else {
            return;
        };
        let result = action.run(client).await;
        if self.finish_action(&action, result) {
            self.load(client).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use shared::ApiError;
    use shared_http::api::Ack;

    use super::*;

    #[derive(Default)]
    struct FakeAccounts {
        calls: Mutex<Vec<String>>,
        reject: bool,
    }

    #[async_trait]
    impl AccountsClient for FakeAccounts {
        async fn customers(&self, page: u32) -> Result<CustomerPage> {
            self.calls.lock().unwrap().push(format!("customers {}", page));
            Ok(CustomerPage {
                data: vec![customer("abc-1", None), customer("XYZ-2", Some("2024-01-01"))],
                last_page: 3,
            })
        }

        async fn customer(&self, customer_id: &str) -> Result<Customer> {
            Ok(customer(customer_id, None))
        }

        async fn deactivate(&self, customer_id: &str, date: NaiveDate) -> Result<Ack> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("deactivate {} {}", customer_id, date));
            if self.reject {
                return Err(ApiError::server(500, None));
            }
            Ok(Ack::default())
        }

        async fn reactivate(&self, customer_id: &str) -> Result<Ack> {
            self.calls.lock().unwrap().push(format!("reactivate {}", customer_id));
            Ok(Ack::default())
        }
    }

    fn customer(id: &str, deleted_at: Option<&str>) -> Customer {
        Customer {
            customer_id: id.to_string(),
            token: Some("0123456789abcdef".into()),
            deleted_at: deleted_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_pagination_is_bounded() {
        let client = FakeAccounts::default();
        let mut screen = AccountsScreen::new();
        screen.load(&client).await;

        assert_eq!(screen.previous_page(), None);
        assert_eq!(screen.next_page(), Some(2));
        assert_eq!(screen.next_page(), Some(3));
        assert_eq!(screen.next_page(), None);
        assert_eq!(screen.page, 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let client = FakeAccounts::default();
        let mut screen = AccountsScreen::new();
        screen.load(&client).await;

        screen.set_search("xyz");
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].customer_id, "XYZ-2");
    }

    #[tokio::test]
    async fn test_deactivate_requires_date() {
        let client = FakeAccounts::default();
        let mut screen = AccountsScreen::new();
        screen.load(&client).await;

        screen.open_toggle("abc-1");
        assert!(!screen.dialog().unwrap().reactivate);
        screen.confirm_and_apply(&client).await;

        assert!(screen.dialog().is_none());
        assert_eq!(screen.notification(), Some(&Notification::error(MISSING_DATE)));
        assert_eq!(client.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deactivate_then_reload() {
        let client = FakeAccounts::default();
        let mut screen = AccountsScreen::new();
        screen.load(&client).await;

        screen.open_toggle("abc-1");
        screen.set_date("2024-07-01");
        screen.confirm_and_apply(&client).await;

        assert_eq!(screen.notification(), Some(&Notification::success(DEACTIVATED)));
        assert_eq!(
            *client.calls.lock().unwrap(),
            vec!["customers 1", "deactivate abc-1 2024-07-01", "customers 1"]
        );
    }

    #[tokio::test]
    async fn test_inactive_customer_is_reactivated() {
        let client = FakeAccounts::default();
        let mut screen = AccountsScreen::new();
        screen.load(&client).await;

        screen.open_toggle("XYZ-2");
        assert!(screen.dialog().unwrap().reactivate);
        screen.confirm_and_apply(&client).await;
        assert_eq!(screen.notification(), Some(&Notification::success(REACTIVATED)));
    }

    #[tokio::test]
    async fn test_rejected_change_reports_generic_error() {
        let client = FakeAccounts {
            reject: true,
            ..Default::default()
        };
        let mut screen = AccountsScreen::new();
        screen.load(&client).await;

        screen.open_toggle("abc-1");
        screen.set_date("2024-07-01");
        screen.confirm_and_apply(&client).await;
        assert_eq!(screen.notification(), Some(&Notification::error(STATUS_FAILED)));
        assert_eq!(client.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_copy_token_notifies() {
        let mut screen = AccountsScreen::new();
        screen.customers = vec![customer("abc-1", None)];
        assert_eq!(screen.copy_token("abc-1").as_deref(), Some("0123456789abcdef"));
        assert_eq!(screen.notification(), Some(&Notification::info(TOKEN_COPIED)));
        assert_eq!(screen.copy_token("nope"), None);
    }
}
