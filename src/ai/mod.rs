// AI module for the opponent paddle

mod bot;
mod tracking_bot;

pub use bot::Bot;
pub use tracking_bot::TrackingBot;

use crate::config::AIConfig;

/// Create the opponent from its configuration
pub fn create_bot(config: &AIConfig) -> Box<dyn Bot> {
    Box::new(TrackingBot::new(config.base_speed, config.urgent_speed))
}
