use anyhow::Result;
use sheen_config::ShinyConfig;
use sheen_effect::{CardFrame, Rect, ShinyCard};
use sheen_motion::{MotionManager, StaticMotion, SyntheticMotion};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Size of the demo card in points.
const CARD_SIZE: (f64, f64) = (340.0, 220.0);

/// Demo application state.
struct App {
    config: ShinyConfig,
    motion: MotionManager,
    card: ShinyCard,
    rect: Rect,
    last_frame: Option<CardFrame>,
    frame_count: u64,
}

impl App {
    fn new(config: ShinyConfig, motion: MotionManager) -> Self {
        let card = ShinyCard::from_config(&config.effect);
        Self {
            config,
            motion,
            card,
            rect: Rect::from_size(CARD_SIZE.0, CARD_SIZE.1),
            last_frame: None,
            frame_count: 0,
        }
    }

    /// Lay out one frame from the latest motion sample.
    fn tick(&mut self) {
        let frame = self.card.frame(self.rect, self.motion.user_attitude());

        let retrigger = self
            .last_frame
            .as_ref()
            .map_or(true, |prev| frame.animation.retriggers(&prev.animation));
        if retrigger {
            let tilt = frame.tilt.map(|t| (t.axis.to_array(), t.angle));
            debug!(
                offset_x = frame.highlight.offset.x,
                offset_y = frame.highlight.offset.y,
                ?tilt,
                "Card frame"
            );
        }

        self.frame_count += 1;
        if self.frame_count % 50 == 0 {
            let attitude = self.motion.attitude();
            info!(
                frames = self.frame_count,
                pitch = attitude.pitch,
                yaw = attitude.yaw,
                roll = attitude.roll,
                tracking = self.motion.is_tracking(),
                "Render heartbeat"
            );
        }

        self.last_frame = Some(frame);
    }

    fn shutdown(&mut self) {
        self.motion.stop_updates();
        if let Err(e) = sheen_config::save_config(&self.config) {
            error!(?e, "Failed to save config");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheen_app=info,sheen_motion=info,sheen_config=info".into()),
        )
        .init();

    info!("Sheen shiny card demo starting");

    // Load config.
    let config = sheen_config::load_config().unwrap_or_else(|e| {
        warn!(?e, "Failed to load config, using defaults");
        ShinyConfig::default()
    });

    info!(
        surface = ?config.effect.surface,
        content_mode = ?config.effect.content_mode,
        dampening = ?config.effect.dampening,
        "Config loaded"
    );

    // Start motion updates (fall back to a level device if unavailable).
    let mut motion = MotionManager::from_config(SyntheticMotion::new(), &config.motion);
    if let Err(e) = motion.start_updates() {
        warn!(?e, "Device motion not available, card stays level");
        motion = MotionManager::from_config(StaticMotion::pending(), &config.motion);
    }

    let frame_interval = config
        .effect
        .animation_duration()
        .max(Duration::from_millis(16));
    let mut app = App::new(config, motion);
    let mut ticker = tokio::time::interval(frame_interval);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => app.tick(),
            _ = &mut shutdown => {
                info!("Shutting down");
                break;
            }
        }
    }

    app.shutdown();
    Ok(())
}
