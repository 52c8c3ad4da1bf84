//! Reservation lifecycle scheduler
//!
//! Fixed-rate background loop advancing order state purely as a
//! function of elapsed time. Each tick runs three sweeps in order:
//! auto-cancel late pending orders, queue reminders, queue invoices.
//! Sweeps are fault-isolated - a failing sweep is logged and the
//! remaining sweeps still run on the same tick; the loop never exits
//! on a sweep failure.
//!
//! Registered as `TaskKind::Periodic` through [`BackgroundTasks`];
//! the only stop contract is the registry's shutdown token.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::config::BookingConfig;
use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::db::repository::{NotificationSink, OrderLifecycleRepository};

/// Time-driven order lifecycle scheduler
pub struct LifecycleScheduler {
    orders: Arc<dyn OrderLifecycleRepository>,
    notifier: Arc<dyn NotificationSink>,
    config: BookingConfig,
    started: AtomicBool,
}

impl LifecycleScheduler {
    pub fn new(
        orders: Arc<dyn OrderLifecycleRepository>,
        notifier: Arc<dyn NotificationSink>,
        config: BookingConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            orders,
            notifier,
            config,
            started: AtomicBool::new(false),
        })
    }

    /// Begin the periodic loop; idempotent
    ///
    /// The first tick fires after the configured startup delay,
    /// subsequent ticks at the fixed period measured from the first
    /// tick, not from the end of each tick's work.
    pub fn start(self: &Arc<Self>, tasks: &mut BackgroundTasks) {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!("Lifecycle scheduler already started, ignoring");
            return;
        }
        let scheduler = Arc::clone(self);
        let shutdown = tasks.shutdown_token();
        tasks.spawn("lifecycle_scheduler", TaskKind::Periodic, async move {
            scheduler.run(shutdown).await;
        });
    }

    async fn run(self: Arc<Self>, shutdown: CancellationToken) {
        let startup = Duration::from_secs(self.config.scheduler_startup_delay_secs);
        let period = Duration::from_secs(self.config.scheduler_period_secs);

        let mut ticker = tokio::time::interval_at(Instant::now() + startup, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

        tracing::info!(
            startup_secs = startup.as_secs(),
            period_secs = period.as_secs(),
            "Lifecycle scheduler started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Ticks never overlap: the next one is not awaited
                    // until all three sweeps finish.
                    self.run_sweeps().await;
                }
                _ = shutdown.cancelled() => {
                    tracing::info!("Lifecycle scheduler received shutdown signal");
                    return;
                }
            }
        }
    }

    async fn run_sweeps(&self) {
        self.sweep_auto_cancel().await;
        self.sweep_reminders().await;
        self.sweep_invoices().await;
    }

    /// Cancel pending orders past the grace period
    async fn sweep_auto_cancel(&self) {
        match self.orders.cancel_late_orders(self.config.cancel_grace()).await {
            Ok(0) => tracing::debug!("No late pending orders"),
            Ok(count) => tracing::info!(count, "Auto-canceled late pending orders"),
            Err(e) => tracing::error!(error = %e, "Auto-cancel sweep failed"),
        }
    }

    /// Queue reminders for orders coming up within the lead time
    async fn sweep_reminders(&self) {
        match self
            .orders
            .find_due_for_reminder(self.config.reminder_lead())
            .await
        {
            Ok(due) => {
                for order in &due {
                    self.notifier.send_reminder(order).await;
                }
                if !due.is_empty() {
                    tracing::info!(count = due.len(), "Reminders queued");
                }
            }
            Err(e) => tracing::error!(error = %e, "Reminder sweep failed"),
        }
    }

    /// Queue invoices for orders seated past the invoice threshold
    async fn sweep_invoices(&self) {
        match self
            .orders
            .find_due_for_invoice(self.config.invoice_after_seated())
            .await
        {
            Ok(due) => {
                for order in &due {
                    self.notifier.send_invoice(order).await;
                }
                if !due.is_empty() {
                    tracing::info!(count = due.len(), "Invoices queued");
                }
            }
            Err(e) => tracing::error!(error = %e, "Invoice sweep failed"),
        }
    }
}
