use std::sync::Mutex;

use async_trait::async_trait;
use contracts::domain::a001_order::aggregate::Order;

use super::{OrderStore, OrderStoreError};

/// In-process order store for tests
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Order>>,
    fail_with_status: Option<u16>,
}

impl InMemoryOrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
            fail_with_status: None,
        }
    }

    /// Store whose every call fails like an unavailable API
    pub fn failing(status: u16) -> Self {
        Self {
            orders: Mutex::new(vec![]),
            fail_with_status: Some(status),
        }
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), OrderStoreError> {
        match self.fail_with_status {
            Some(status) => Err(OrderStoreError::Api {
                status,
                message: "unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_orders(&self, _token: Option<&str>) -> Result<Vec<Order>, OrderStoreError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn get_order(&self, id: &str, _token: Option<&str>) -> Result<Order, OrderStoreError> {
        self.check()?;
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| OrderStoreError::NotFound(id.to_string()))
    }

    async fn create_order(
        &self,
        order: &Order,
        _token: Option<&str>,
    ) -> Result<Order, OrderStoreError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        let mut created = order.clone();
        if created.id.is_empty() {
            created.id = (orders.len() + 1).to_string();
        }
        orders.push(created.clone());
        Ok(created)
    }

    async fn update_order(
        &self,
        order: &Order,
        _token: Option<&str>,
    ) -> Result<Order, OrderStoreError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        let slot = orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or_else(|| OrderStoreError::NotFound(order.id.clone()))?;
        *slot = order.clone();
        Ok(order.clone())
    }

    async fn delete_order(&self, id: &str, _token: Option<&str>) -> Result<(), OrderStoreError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        if orders.len() == before {
            return Err(OrderStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
