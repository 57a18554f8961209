//! Customers of the token API.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shared_http::api::Customer;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::store::StoreError;

/// One page of the customer listing, Laravel-paginator style.
#[derive(Debug, Serialize)]
pub struct Page {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: usize,
    pub total: usize,
    pub data: Vec<Customer>,
}

#[derive(Debug, Default)]
pub struct AccountStore {
    customers: RwLock<Vec<Customer>>,
}

impl AccountStore {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }

    /// `count` active customers with fresh tokens.
    pub fn demo(count: usize) -> Self {
        let now = Utc::now().to_rfc3339();
        let customers = (1..=count)
            .map(|n| Customer {
                id: Some(n as i64),
                customer_id: format!("cliente-{:03}", n),
                token: Some(Uuid::new_v4().simple().to_string()),
                created_at: Some(now.clone()),
                updated_at: Some(now.clone()),
                type_name: Some("api".to_string()),
                deleted_at: None,
            })
            .collect();
        Self::new(customers)
    }

    /// Pages are 1-based; a page past the end is empty.
    pub async fn page(&self, page: u32, per_page: usize) -> Page {
        let customers = self.customers.read().await;
        let per_page = per_page.max(1);
        let total = customers.len();
        let last_page = total.div_ceil(per_page).max(1) as u32;
        let page = page.max(1);
        let data = customers
            .iter()
            .skip((page as usize - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();
        Page {
            current_page: page,
            last_page,
            per_page,
            total,
            data,
        }
    }

    pub async fn get(&self, customer_id: &str) -> Option<Customer> {
        self.customers
            .read()
            .await
            .iter()
            .find(|c| c.customer_id == customer_id)
            .cloned()
    }

    pub async fn deactivate(&self, customer_id: &str, date: NaiveDate) -> Result<Customer, StoreError> {
        self.update(customer_id, |customer| {
            customer.deleted_at = Some(date.format("%Y-%m-%d").to_string());
        })
        .await
        .inspect(|_| info!("Customer {} deactivated as of {}", customer_id, date))
    }

    pub async fn reactivate(&self, customer_id: &str) -> Result<Customer, StoreError> {
        self.update(customer_id, |customer| customer.deleted_at = None)
            .await
            .inspect(|_| info!("Customer {} reactivated", customer_id))
    }

    async fn update(
        &self,
        customer_id: &str,
        change: impl FnOnce(&mut Customer),
    ) -> Result<Customer, StoreError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.customer_id == customer_id)
            .ok_or_else(|| StoreError::UnknownCustomer(customer_id.to_string()))?;
        change(customer);
        customer.updated_at = Some(Utc::now().to_rfc3339());
        Ok(customer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pages_are_bounded() {
        let store = AccountStore::demo(25);
        let first = store.page(1, 10).await;
        assert_eq!(first.data.len(), 10);
        assert_eq!(first.last_page, 3);
        assert_eq!(first.data[0].customer_id, "cliente-001");

        assert_eq!(store.page(3, 10).await.data.len(), 5);
        assert!(store.page(4, 10).await.data.is_empty());
        assert_eq!(AccountStore::default().page(1, 10).await.last_page, 1);
    }

    #[tokio::test]
    async fn test_deactivate_and_reactivate() {
        let store = AccountStore::demo(2);
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let customer = store.deactivate("cliente-002", date).await.unwrap();
        assert_eq!(customer.deleted_at.as_deref(), Some("2024-07-01"));

        let customer = store.reactivate("cliente-002").await.unwrap();
        assert!(customer.deleted_at.is_none());

        assert!(matches!(
            store.reactivate("nope").await,
            Err(StoreError::UnknownCustomer(_))
        ));
    }
}
