//! Background settings and preferences
//!
//! Read from LocalStorage as JSON; the page owns writing them.

use serde::{Deserialize, Serialize};

/// Which draw layers are painted each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layers {
    pub grid: bool,
    pub streams: bool,
    pub connections: bool,
    pub particles: bool,
    pub symbols: bool,
    pub nodes: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            grid: true,
            streams: true,
            connections: true,
            particles: true,
            symbols: true,
            nodes: true,
        }
    }
}

impl Layers {
    /// Number of enabled layers
    pub fn enabled_count(&self) -> usize {
        [
            self.grid,
            self.streams,
            self.connections,
            self.particles,
            self.symbols,
            self.nodes,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}

/// Background settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Id of the `<canvas>` element to draw on
    pub canvas_id: String,

    // === Layers ===
    pub layers: Layers,

    // === Accessibility ===
    /// Draw one static frame instead of animating
    pub reduced_motion: bool,

    // === Debug ===
    /// Log an FPS estimate periodically
    pub log_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_id: "backgroundCanvas".to_string(),
            layers: Layers::default(),
            reduced_motion: false,
            log_fps: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neural_field_settings";

    /// Whether the loop should keep scheduling frames
    pub fn animates(&self) -> bool {
        !self.reduced_motion
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
