pub mod provider;

pub use provider::{MotionProvider, StaticMotion, SyntheticMotion};

use sheen_attitude::Attitude;
use sheen_config::MotionConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace};

const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_DEVICE_ANGLE_DEG: f64 = -25.0;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("Device motion is not available")]
    Unavailable,
    #[error("No delivery context available to receive updates")]
    NoDeliveryContext,
}

type SharedProvider = Arc<Mutex<Box<dyn MotionProvider>>>;

/// Orientation source for the shiny card effect.
///
/// Polls a [`MotionProvider`] on a background task and publishes the latest
/// attitude. One manager owns the physical sensor; any number of observers
/// can follow it through [`MotionManager::subscribe`].
pub struct MotionManager {
    provider: SharedProvider,
    attitude_tx: Arc<watch::Sender<Attitude>>,
    interval_tx: watch::Sender<Duration>,
    /// Neutral holding angle added to pitch (radians).
    default_device_angle: f64,
    updates: Option<UpdateTask>,
}

struct UpdateTask {
    /// Cleared under the provider lock when updates stop.
    active: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl MotionManager {
    pub fn new(provider: impl MotionProvider + 'static) -> Self {
        let (attitude_tx, _) = watch::channel(Attitude::ZERO);
        let (interval_tx, _) = watch::channel(DEFAULT_UPDATE_INTERVAL);
        let provider: Box<dyn MotionProvider> = Box::new(provider);
        Self {
            provider: Arc::new(Mutex::new(provider)),
            attitude_tx: Arc::new(attitude_tx),
            interval_tx,
            default_device_angle: DEFAULT_DEVICE_ANGLE_DEG.to_radians(),
            updates: None,
        }
    }

    pub fn from_config(provider: impl MotionProvider + 'static, config: &MotionConfig) -> Self {
        let mut manager = Self::new(provider);
        manager.set_update_interval(config.update_interval());
        manager.set_default_device_angle(config.default_device_angle());
        manager
    }

    /// Set the interval between motion samples. Applies from the next tick,
    /// also while updates are running.
    pub fn set_update_interval(&mut self, interval: Duration) {
        self.interval_tx.send_replace(interval);
    }

    pub fn update_interval(&self) -> Duration {
        *self.interval_tx.borrow()
    }

    /// The assumed resting angle of the device, used to offset pitch.
    ///
    /// A negative value assumes the device is tilted slightly toward the user,
    /// as when holding a phone upright.
    pub fn set_default_device_angle(&mut self, radians: f64) {
        self.default_device_angle = radians;
    }

    pub fn default_device_angle(&self) -> f64 {
        self.default_device_angle
    }

    /// Latest attitude. All zero while not tracking.
    pub fn attitude(&self) -> Attitude {
        *self.attitude_tx.borrow()
    }

    /// Follow attitude changes.
    pub fn subscribe(&self) -> watch::Receiver<Attitude> {
        self.attitude_tx.subscribe()
    }

    /// Pitch relative to the user's neutral holding angle.
    pub fn user_device_pitch(&self) -> f64 {
        self.attitude().pitch + self.default_device_angle
    }

    /// Latest attitude with pitch replaced by [`Self::user_device_pitch`].
    pub fn user_attitude(&self) -> Attitude {
        Attitude {
            pitch: self.user_device_pitch(),
            ..self.attitude()
        }
    }

    pub fn total_rotation(&self) -> f64 {
        self.attitude().total_rotation()
    }

    /// Whether the update task is currently running.
    pub fn is_tracking(&self) -> bool {
        self.updates
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }

    /// Start polling the provider on the current tokio runtime.
    ///
    /// Does nothing if updates are already running.
    pub fn start_updates(&mut self) -> Result<(), MotionError> {
        if self.is_tracking() {
            return Ok(());
        }

        {
            let provider = self.provider.lock().unwrap_or_else(PoisonError::into_inner);
            if !provider.is_available() {
                return Err(MotionError::Unavailable);
            }
        }

        let runtime = Handle::try_current().map_err(|_| MotionError::NoDeliveryContext)?;

        self.provider
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .start();

        let active = Arc::new(AtomicBool::new(true));
        let handle = runtime.spawn(motion_update_loop(
            self.provider.clone(),
            self.attitude_tx.clone(),
            self.interval_tx.subscribe(),
            active.clone(),
        ));
        self.updates = Some(UpdateTask { active, handle });

        info!(interval = ?self.update_interval(), "Device motion updates started");
        Ok(())
    }

    /// Stop polling and reset all angles to zero.
    ///
    /// Does nothing if updates are not running.
    pub fn stop_updates(&mut self) {
        if !self.is_tracking() {
            return;
        }
        let Some(task) = self.updates.take() else {
            return;
        };

        {
            let mut provider = self.provider.lock().unwrap_or_else(PoisonError::into_inner);
            task.active.store(false, Ordering::Release);
            provider.stop();
        }
        task.handle.abort();

        self.attitude_tx.send_replace(Attitude::ZERO);
        info!("Device motion updates stopped");
    }
}

impl Drop for MotionManager {
    fn drop(&mut self) {
        if let Some(task) = self.updates.take() {
            task.active.store(false, Ordering::Release);
            task.handle.abort();
        }
    }
}

/// Background task: wait one interval, read the provider, publish the sample.
async fn motion_update_loop(
    provider: SharedProvider,
    attitude_tx: Arc<watch::Sender<Attitude>>,
    mut interval_rx: watch::Receiver<Duration>,
    active: Arc<AtomicBool>,
) {
    let mut sample_count: u64 = 0;

    loop {
        let period = *interval_rx.borrow_and_update();
        tokio::time::sleep(period).await;

        let mut source = match provider.lock() {
            Ok(source) => source,
            Err(_) => {
                error!("Motion provider lock poisoned, stopping updates");
                break;
            }
        };
        if !active.load(Ordering::Acquire) {
            break;
        }

        match source.read_attitude() {
            Some(attitude) => {
                attitude_tx.send_replace(attitude);
                sample_count += 1;
                if sample_count % 100 == 0 {
                    debug!(sample_count, "Motion samples delivered");
                }
            }
            None => trace!("Skipping incomplete motion sample"),
        }
    }
}
