use log::{error, info};
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;

/// Stops a running [`Scheduler`] at its next cycle boundary
#[derive(Clone)]
pub struct SchedulerHandle {
    shutdown: Arc<watch::Sender<bool>>,
}

impl SchedulerHandle {
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Stops the scheduler on the first interrupt and resolves `true` on the
    /// second one. `false` means the interrupt source itself failed.
    pub async fn stop_on_interrupt<S, Fut>(&self, mut interrupt: S) -> bool
    where
        S: FnMut() -> Fut,
        Fut: Future<Output = io::Result<()>>,
    {
        if let Err(e) = interrupt().await {
            error!("Cannot listen for interrupts: {}", e);
            return false;
        }
        info!("Shutdown requested, stopping after the current step (interrupt again to exit now)...");
        self.stop();

        interrupt().await.is_ok()
    }
}

/// Runs a cycle, sleeps for the interval, repeats until stopped.
///
/// A cycle that fails or panics is logged and the loop carries on.
pub struct Scheduler {
    interval: Duration,
    shutdown: watch::Receiver<bool>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> (Self, SchedulerHandle) {
        let (tx, rx) = watch::channel(false);
        let scheduler = Self {
            interval,
            shutdown: rx,
        };
        let handle = SchedulerHandle {
            shutdown: Arc::new(tx),
        };
        (scheduler, handle)
    }

    /// Returns the number of cycles started before the stop request.
    pub async fn run<F, Fut>(mut self, mut cycle: F) -> u64
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let mut cycles = 0;

        while !self.is_stopped() {
            info!("Starting new update cycle...");
            run_isolated(cycle()).await;
            cycles += 1;

            info!(
                "Waiting {} seconds until next update...",
                self.interval.as_secs()
            );
            if !self.sleep_unless_stopped().await {
                break;
            }
        }

        info!("Scheduler stopped after {} cycle(s)", cycles);
        cycles
    }

    fn is_stopped(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// `false` when a stop arrived during the sleep
    async fn sleep_unless_stopped(&mut self) -> bool {
        let pause = sleep(self.interval);
        tokio::pin!(pause);
        let mut listening = true;

        loop {
            tokio::select! {
                _ = &mut pause => return true,
                changed = self.shutdown.changed(), if listening => match changed {
                    Ok(()) if *self.shutdown.borrow() => return false,
                    Ok(()) => {}
                    // every handle is gone, nobody can stop us any more
                    Err(_) => listening = false,
                },
            }
        }
    }
}

/// Runs one cycle on its own task so a panic cannot take the loop down.
async fn run_isolated<Fut>(cycle: Fut)
where
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    match tokio::spawn(cycle).await {
        Ok(Ok(())) => info!("Update cycle completed"),
        Ok(Err(e)) => {
            error!("Error in update cycle: {:#}", e);
            error!("{:?}", e);
        }
        Err(e) if e.is_panic() => error!("Update cycle panicked: {}", e),
        Err(e) => error!("Update cycle was cancelled: {}", e),
    }
}
