//! Startup configuration for the orrery window and its controls.

use std::time::Duration;

use bevy::{ecs::system::Resource, math::Vec2};
use derive_more::{Display, Error};

/// Everything that can be wrong with an [`OrreryConfig`]
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The window would have no area
    #[display(fmt = "viewport must be non-empty, got {}x{}", width, height)]
    EmptyViewport {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
    /// Frame pacing needs a positive rate
    #[display(fmt = "target frame rate must be positive")]
    ZeroFrameRate,
    /// The speed clamp is empty or reaches zero
    #[display(fmt = "speed bounds must satisfy 0 < min <= max, got [{}, {}]", min, max)]
    InvalidSpeedBounds {
        /// Lower clamp
        min: f32,
        /// Upper clamp
        max: f32,
    },
    /// Pressing up or down would do nothing
    #[display(fmt = "speed step must be positive, got {}", step)]
    InvalidSpeedStep {
        /// Requested step
        step: f32,
    },
    /// The starting speed is outside the clamp
    #[display(fmt = "initial speed {} is outside [{}, {}]", speed, min, max)]
    InitialSpeedOutOfBounds {
        /// Requested initial speed
        speed: f32,
        /// Lower clamp
        min: f32,
        /// Upper clamp
        max: f32,
    },
}

/// Window, pacing and control settings shared by every plugin
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrreryConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Frames per second the pacer caps the loop at
    pub target_fps: u32,
    /// Number of background stars
    pub star_count: u32,
    /// Lower clamp of the speed multiplier
    pub min_speed: f32,
    /// Upper clamp of the speed multiplier
    pub max_speed: f32,
    /// Amount one key press changes the speed multiplier by
    pub speed_step: f32,
    /// Speed multiplier at startup and after a reset
    pub initial_speed: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "Solar System - Universe Sandbox Style".to_string(),
            target_fps: 60,
            star_count: 100,
            min_speed: 0.1,
            max_speed: 10.0,
            speed_step: 0.5,
            initial_speed: 1.0,
        }
    }
}

impl OrreryConfig {
    /// Start from the defaults
    pub fn builder() -> OrreryConfigBuilder {
        OrreryConfigBuilder::new()
    }

    /// The window size in pixels
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// The midpoint of the window in pixel space.
    /// Integer halves, so odd sizes round down like the pixel grid does.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    /// How long a single frame may take at the target frame rate
    pub fn frame_budget(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.target_fps))
    }
}

/// Builds a validated [`OrreryConfig`]
pub struct OrreryConfigBuilder {
    config: OrreryConfig,
}

impl Default for OrreryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrreryConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: OrreryConfig::default(),
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn target_fps(mut self, target_fps: u32) -> Self {
        self.config.target_fps = target_fps;
        self
    }

    pub fn star_count(mut self, star_count: u32) -> Self {
        self.config.star_count = star_count;
        self
    }

    pub fn speed_bounds(mut self, min_speed: f32, max_speed: f32) -> Self {
        self.config.min_speed = min_speed;
        self.config.max_speed = max_speed;
        self
    }

    pub fn speed_step(mut self, speed_step: f32) -> Self {
        self.config.speed_step = speed_step;
        self
    }

    pub fn initial_speed(mut self, initial_speed: f32) -> Self {
        self.config.initial_speed = initial_speed;
        self
    }

    pub fn build(self) -> Result<OrreryConfig, ConfigError> {
        let config = self.config;
        if config.width == 0 || config.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: config.width,
                height: config.height,
            });
        }
        if config.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        // Written so NaN bounds fail too
        if !(config.min_speed > 0.0 && config.min_speed <= config.max_speed) {
            return Err(ConfigError::InvalidSpeedBounds {
                min: config.min_speed,
                max: config.max_speed,
            });
        }
        if !(config.speed_step > 0.0) {
            return Err(ConfigError::InvalidSpeedStep {
                step: config.speed_step,
            });
        }
        if !(config.min_speed..=config.max_speed).contains(&config.initial_speed) {
            return Err(ConfigError::InitialSpeedOutOfBounds {
                speed: config.initial_speed,
                min: config.min_speed,
                max: config.max_speed,
            });
        }
        Ok(config)
    }
}
