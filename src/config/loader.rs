// Configuration file loading and creation

use super::types::{AIConfig, Config, DisplayConfig};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fixpong");
    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        create_default_config(path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    Ok(parse_config(&contents))
}

/// Highest frame rate the play loop will pace to
pub const MAX_TARGET_FPS: u64 = 1000;

/// Highest opponent speed, in pixels per frame
pub const MAX_AI_SPEED: i32 = 16;

/// Parse config text, falling back to defaults on malformed input
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => sanitize(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file, using defaults: {}", e);
            Config::default()
        }
    }
}

/// Replace values that parse but can't be played with their defaults
fn sanitize(mut config: Config) -> Config {
    let display_defaults = DisplayConfig::default();
    if !(1..=MAX_TARGET_FPS).contains(&config.display.target_fps) {
        tracing::warn!(
            "display.target_fps = {} is outside 1..={}, using {}",
            config.display.target_fps,
            MAX_TARGET_FPS,
            display_defaults.target_fps
        );
        config.display.target_fps = display_defaults.target_fps;
    }
    if config.display.latch_frames == 0 {
        tracing::warn!(
            "display.latch_frames must be positive, using {}",
            display_defaults.latch_frames
        );
        config.display.latch_frames = display_defaults.latch_frames;
    }

    let ai = AIConfig::default();
    let speeds = [config.ai.base_speed, config.ai.urgent_speed];
    if speeds.iter().any(|speed| !(1..=MAX_AI_SPEED).contains(speed)) {
        tracing::warn!(
            "ai speeds {} / {} must be within 1..={}, using {} / {}",
            config.ai.base_speed,
            config.ai.urgent_speed,
            MAX_AI_SPEED,
            ai.base_speed,
            ai.urgent_speed
        );
        config.ai = ai;
    }

    config
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }

    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    let commented_toml = format!(
        "# Fixpong Configuration File\n\
         # Restart the game after editing for changes to take effect\n\
         #\n\
         # Key names: \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\", \"Tab\"\n\
         #            or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # physics.seed: set to a number for a repeatable serve sequence\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("writing default config to {}", path.display()))?;
    tracing::info!("Created default config file at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(
            parsed.physics.serve_wait_frames,
            config.physics.serve_wait_frames
        );
        assert_eq!(parsed.physics.seed, None);
        assert_eq!(parsed.keybindings.paddle_up, config.keybindings.paddle_up);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.ai.urgent_speed, config.ai.urgent_speed);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let partial_toml = r#"
            [physics]
            seed = 42

            [ai]
            urgent_speed = 4
        "#;

        let config = parse_config(partial_toml);

        // Custom values
        assert_eq!(config.physics.seed, Some(42));
        assert_eq!(config.ai.urgent_speed, 4);

        // Default values should still be there
        assert_eq!(config.physics.serve_wait_frames, 180);
        assert_eq!(config.ai.base_speed, 2);
        assert_eq!(config.keybindings.quit, vec!["Esc", "Q"]);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = parse_config("[physics\nserve_wait_frames = ");
        assert_eq!(config.physics.serve_wait_frames, 180);
        assert_eq!(config.display.target_fps, 60);
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let config = parse_config(
            r#"
            [display]
            target_fps = 4294967296
            latch_frames = 0

            [ai]
            base_speed = 2
            urgent_speed = 10000000
        "#,
        );
        assert_eq!(config.display.target_fps, 60);
        assert_eq!(config.display.latch_frames, 30);
        assert_eq!((config.ai.base_speed, config.ai.urgent_speed), (2, 3));

        let config = parse_config("[ai]\nbase_speed = -2\n");
        assert_eq!(config.ai.base_speed, 2);
    }

    #[test]
    fn test_in_range_values_are_kept() {
        let config = parse_config(
            "[display]\ntarget_fps = 1000\n[ai]\nbase_speed = 1\nurgent_speed = 16\n",
        );
        assert_eq!(config.display.target_fps, 1000);
        assert_eq!((config.ai.base_speed, config.ai.urgent_speed), (1, 16));
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = std::env::temp_dir().join(format!("fixpong-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.display.latch_frames, 30);
        assert!(path.exists());

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded.keybindings.begin, vec!["Space", "Enter"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
