//! In-memory repository backend
//!
//! Backs every repository contract with `parking_lot` guarded state.
//! Used as the test fixture and as the storage for single-process
//! deployments that keep the floor state in memory.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::db::repository::{
    NotificationSink, OpeningHoursProvider, OrderLifecycleRepository, RepoResult,
    ReservationIndex, TableCatalog,
};
use crate::utils::time::Clock;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, OpeningHours, OpeningWindow, Order,
    OrderRef, OrderStatus, Reservation,
};

// ============================================================================
// Tables
// ============================================================================

/// In-memory table catalog
#[derive(Default)]
pub struct MemoryTableCatalog {
    tables: RwLock<Vec<DiningTable>>,
}

impl MemoryTableCatalog {
    pub fn new(tables: Vec<DiningTable>) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Catalog from bare capacities, all tables active
    pub fn with_capacities(capacities: &[i32]) -> Self {
        let tables = capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| DiningTable {
                id: i as i64 + 1,
                name: format!("T{}", i + 1),
                capacity,
                is_active: true,
            })
            .collect();
        Self::new(tables)
    }

    pub fn insert(&self, table: DiningTable) {
        self.tables.write().push(table);
    }

    pub fn create(&self, data: DiningTableCreate) -> DiningTable {
        let mut tables = self.tables.write();
        let id = tables.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let table = DiningTable {
            id,
            name: data.name,
            capacity: data.capacity.unwrap_or(4),
            is_active: true,
        };
        tables.push(table.clone());
        table
    }

    pub fn update(&self, id: i64, data: DiningTableUpdate) -> Option<DiningTable> {
        let mut tables = self.tables.write();
        let table = tables.iter_mut().find(|t| t.id == id)?;
        if let Some(name) = data.name {
            table.name = name;
        }
        if let Some(capacity) = data.capacity {
            table.capacity = capacity;
        }
        if let Some(is_active) = data.is_active {
            table.is_active = is_active;
        }
        Some(table.clone())
    }
}

#[async_trait]
impl TableCatalog for MemoryTableCatalog {
    async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        Ok(self.tables.read().clone())
    }
}

// ============================================================================
// Reservations
// ============================================================================

/// In-memory reservation overlap index
#[derive(Default)]
pub struct MemoryReservationIndex {
    reservations: RwLock<Vec<Reservation>>,
}

impl MemoryReservationIndex {
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: RwLock::new(reservations),
        }
    }

    pub fn insert(&self, reservation: Reservation) {
        self.reservations.write().push(reservation);
    }
}

#[async_trait]
impl ReservationIndex for MemoryReservationIndex {
    async fn find_overlapping(&self, at: NaiveDateTime) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .read()
            .iter()
            .filter(|r| r.occupies(at))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Opening hours
// ============================================================================

/// In-memory opening-hours provider
///
/// Date overrides win over weekday defaults; a date with neither is
/// closed.
#[derive(Default)]
pub struct MemoryOpeningHours {
    defaults: RwLock<HashMap<Weekday, OpeningWindow>>,
    overrides: RwLock<HashMap<NaiveDate, OpeningWindow>>,
}

impl MemoryOpeningHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load stored opening-hours records; later records win on conflict
    pub fn from_records(records: Vec<OpeningHours>) -> Self {
        let hours = Self::default();
        for record in records {
            match (record.date, record.weekday) {
                (Some(date), _) => hours.set_override(date, record.window),
                (None, Some(weekday)) => hours.set_default(weekday, record.window),
                (None, None) => {}
            }
        }
        hours
    }

    pub fn set_default(&self, weekday: Weekday, window: OpeningWindow) {
        self.defaults.write().insert(weekday, window);
    }

    pub fn set_override(&self, date: NaiveDate, window: OpeningWindow) {
        self.overrides.write().insert(date, window);
    }
}

#[async_trait]
impl OpeningHoursProvider for MemoryOpeningHours {
    async fn window_for(&self, date: NaiveDate, weekday: Weekday) -> RepoResult<OpeningWindow> {
        if let Some(window) = self.overrides.read().get(&date) {
            return Ok(*window);
        }
        Ok(self
            .defaults
            .read()
            .get(&weekday)
            .copied()
            .unwrap_or(OpeningWindow::Closed))
    }
}

// ============================================================================
// Orders
// ============================================================================

/// In-memory order store with lifecycle bookkeeping
///
/// Owns the once-only flags for reminders and invoices: an order
/// returned from a `find_due_*` call is marked and never returned
/// again.
pub struct MemoryOrderStore {
    orders: RwLock<Vec<Order>>,
    reminded: RwLock<HashSet<i64>>,
    invoiced: RwLock<HashSet<i64>>,
    clock: Arc<dyn Clock>,
}

impl MemoryOrderStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
            reminded: RwLock::new(HashSet::new()),
            invoiced: RwLock::new(HashSet::new()),
            clock,
        }
    }

    pub fn insert(&self, order: Order) {
        self.orders.write().push(order);
    }

    pub fn status_of(&self, id: i64) -> Option<OrderStatus> {
        self.orders.read().iter().find(|o| o.id == id).map(|o| o.status)
    }
}

#[async_trait]
impl OrderLifecycleRepository for MemoryOrderStore {
    async fn cancel_late_orders(&self, grace: Duration) -> RepoResult<u64> {
        let now = self.clock.now();
        let deadline = now - grace;
        let mut count = 0;
        for order in self.orders.write().iter_mut() {
            if order.status == OrderStatus::Pending && order.scheduled_at < deadline {
                order.status = OrderStatus::Canceled;
                count += 1;
            }
        }
        Ok(count)
    }

    async fn find_due_for_reminder(&self, lead: Duration) -> RepoResult<Vec<OrderRef>> {
        let now = self.clock.now();
        let horizon = now + lead;
        let mut reminded = self.reminded.write();
        let due: Vec<OrderRef> = self
            .orders
            .read()
            .iter()
            .filter(|o| {
                o.status == OrderStatus::Pending
                    && o.scheduled_at >= now
                    && o.scheduled_at <= horizon
                    && !reminded.contains(&o.id)
            })
            .map(OrderRef::from)
            .collect();
        for order in &due {
            reminded.insert(order.id);
        }
        Ok(due)
    }

    async fn find_due_for_invoice(&self, seated_for: Duration) -> RepoResult<Vec<OrderRef>> {
        let now = self.clock.now();
        let mut invoiced = self.invoiced.write();
        let due: Vec<OrderRef> = self
            .orders
            .read()
            .iter()
            .filter(|o| {
                o.status == OrderStatus::Seated
                    && o.seated_at.is_some_and(|t| t + seated_for < now)
                    && !invoiced.contains(&o.id)
            })
            .map(OrderRef::from)
            .collect();
        for order in &due {
            invoiced.insert(order.id);
        }
        Ok(due)
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Notification sink that records what it was asked to send
///
/// Stands in for the real delivery path in tests and local runs.
#[derive(Default)]
pub struct RecordingSink {
    pub reminders: RwLock<Vec<OrderRef>>,
    pub invoices: RwLock<Vec<OrderRef>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send_reminder(&self, order: &OrderRef) {
        tracing::info!(order_id = order.id, "Reminder queued");
        self.reminders.write().push(order.clone());
    }

    async fn send_invoice(&self, order: &OrderRef) {
        tracing::info!(order_id = order.id, "Invoice queued");
        self.invoices.write().push(order.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::FixedClock;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn make_order(id: i64, status: OrderStatus, scheduled_at: NaiveDateTime) -> Order {
        Order {
            id,
            guest_name: format!("guest_{}", id),
            party_size: 2,
            status,
            scheduled_at,
            placed_at: scheduled_at - Duration::days(1),
            seated_at: None,
        }
    }

    #[tokio::test]
    async fn test_cancel_late_orders_grace_boundary() {
        let clock = Arc::new(FixedClock::new(dt(12, 0)));
        let store = MemoryOrderStore::new(clock);

        // 16 minutes late: past the 15-minute grace, canceled
        store.insert(make_order(1, OrderStatus::Pending, dt(11, 44)));
        // 10 minutes late: inside the grace, untouched
        store.insert(make_order(2, OrderStatus::Pending, dt(11, 50)));
        // late but already seated: untouched
        store.insert(make_order(3, OrderStatus::Seated, dt(11, 30)));

        let count = store
            .cancel_late_orders(Duration::minutes(15))
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.status_of(1), Some(OrderStatus::Canceled));
        assert_eq!(store.status_of(2), Some(OrderStatus::Pending));
        assert_eq!(store.status_of(3), Some(OrderStatus::Seated));
    }

    #[tokio::test]
    async fn test_exactly_grace_minutes_late_is_kept() {
        let clock = Arc::new(FixedClock::new(dt(12, 0)));
        let store = MemoryOrderStore::new(clock);
        // Exactly 15 minutes late is not "more than" the grace period
        store.insert(make_order(1, OrderStatus::Pending, dt(11, 45)));

        let count = store
            .cancel_late_orders(Duration::minutes(15))
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(store.status_of(1), Some(OrderStatus::Pending));
    }

    #[tokio::test]
    async fn test_reminders_fire_once() {
        let clock = Arc::new(FixedClock::new(dt(12, 0)));
        let store = MemoryOrderStore::new(clock);
        store.insert(make_order(1, OrderStatus::Pending, dt(13, 30)));
        // Outside the 2-hour lead
        store.insert(make_order(2, OrderStatus::Pending, dt(15, 30)));

        let due = store
            .find_due_for_reminder(Duration::hours(2))
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);

        // Second sweep: already reminded
        let due = store
            .find_due_for_reminder(Duration::hours(2))
            .await
            .unwrap();
        assert!(due.is_empty());
    }

    #[tokio::test]
    async fn test_invoice_after_seated_duration() {
        let clock = Arc::new(FixedClock::new(dt(14, 0)));
        let store = MemoryOrderStore::new(clock);

        let mut seated_long = make_order(1, OrderStatus::Seated, dt(11, 0));
        seated_long.seated_at = Some(dt(11, 30)); // seated 2.5h ago
        store.insert(seated_long);

        let mut seated_recent = make_order(2, OrderStatus::Seated, dt(12, 30));
        seated_recent.seated_at = Some(dt(12, 45)); // seated 1.25h ago
        store.insert(seated_recent);

        let due = store
            .find_due_for_invoice(Duration::hours(2))
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);

        let due = store
            .find_due_for_invoice(Duration::hours(2))
            .await
            .unwrap();
        assert!(due.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_create_and_deactivate() {
        let catalog = MemoryTableCatalog::default();
        let created = catalog.create(DiningTableCreate {
            name: "window-2".into(),
            capacity: None, // default capacity
        });
        assert_eq!(created.capacity, 4);
        assert!(created.is_active);

        let updated = catalog
            .update(
                created.id,
                DiningTableUpdate {
                    name: None,
                    capacity: Some(6),
                    is_active: Some(false),
                },
            )
            .unwrap();
        assert_eq!(updated.capacity, 6);

        let all = catalog.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].is_active);
    }

    #[tokio::test]
    async fn test_opening_hours_from_records() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(); // a Tuesday
        let window = OpeningWindow::Open {
            open: chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            close: chrono::NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        };
        let hours = MemoryOpeningHours::from_records(vec![
            OpeningHours {
                id: 1,
                weekday: Some(Weekday::Tue),
                date: None,
                window,
            },
            OpeningHours {
                id: 2,
                weekday: None,
                date: Some(date),
                window: OpeningWindow::Closed,
            },
        ]);

        assert!(hours.window_for(date, Weekday::Tue).await.unwrap().is_closed());
        let other = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
        assert_eq!(hours.window_for(other, Weekday::Tue).await.unwrap(), window);
    }

    #[tokio::test]
    async fn test_opening_hours_override_beats_weekday_default() {
        let hours = MemoryOpeningHours::new();
        let open = OpeningWindow::Open {
            open: chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            close: chrono::NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        };
        hours.set_default(Weekday::Tue, open);

        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(); // a Tuesday
        hours.set_override(date, OpeningWindow::Closed);

        let window = hours.window_for(date, Weekday::Tue).await.unwrap();
        assert!(window.is_closed());

        // A different Tuesday still uses the weekday default
        let other = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
        let window = hours.window_for(other, Weekday::Tue).await.unwrap();
        assert_eq!(window, open);
    }
}
