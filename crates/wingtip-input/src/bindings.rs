//! Key bindings: which physical keys drive which [`Control`].
//!
//! [`InputMap`] persists to RON, detects keys bound to more than one control,
//! and turns a [`KeyboardState`] into a [`ControlSet`] snapshot.

use crate::controls::{Control, ControlSet};
use crate::keyboard::KeyboardState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use winit::keyboard::KeyCode;

/// Serde helper for [`KeyCode`], which has no serde support of its own.
mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        format!("{code:?}").serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        string_to_keycode(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }

    fn string_to_keycode(s: &str) -> Option<KeyCode> {
        Some(match s {
            "KeyA" => KeyCode::KeyA,
            "KeyB" => KeyCode::KeyB,
            "KeyC" => KeyCode::KeyC,
            "KeyD" => KeyCode::KeyD,
            "KeyE" => KeyCode::KeyE,
            "KeyF" => KeyCode::KeyF,
            "KeyG" => KeyCode::KeyG,
            "KeyH" => KeyCode::KeyH,
            "KeyI" => KeyCode::KeyI,
            "KeyJ" => KeyCode::KeyJ,
            "KeyK" => KeyCode::KeyK,
            "KeyL" => KeyCode::KeyL,
            "KeyM" => KeyCode::KeyM,
            "KeyN" => KeyCode::KeyN,
            "KeyO" => KeyCode::KeyO,
            "KeyP" => KeyCode::KeyP,
            "KeyQ" => KeyCode::KeyQ,
            "KeyR" => KeyCode::KeyR,
            "KeyS" => KeyCode::KeyS,
            "KeyT" => KeyCode::KeyT,
            "KeyU" => KeyCode::KeyU,
            "KeyV" => KeyCode::KeyV,
            "KeyW" => KeyCode::KeyW,
            "KeyX" => KeyCode::KeyX,
            "KeyY" => KeyCode::KeyY,
            "KeyZ" => KeyCode::KeyZ,
            "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            "Backspace" => KeyCode::Backspace,
            "ShiftLeft" => KeyCode::ShiftLeft,
            "ShiftRight" => KeyCode::ShiftRight,
            "ControlLeft" => KeyCode::ControlLeft,
            "ControlRight" => KeyCode::ControlRight,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "PageUp" => KeyCode::PageUp,
            "PageDown" => KeyCode::PageDown,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "Numpad2" => KeyCode::Numpad2,
            "Numpad4" => KeyCode::Numpad4,
            "Numpad6" => KeyCode::Numpad6,
            "Numpad8" => KeyCode::Numpad8,
            _ => return None,
        })
    }
}

/// A physical key bound to a control.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding(#[serde(with = "keycode_serde")] pub KeyCode);

/// A key bound to more than one control.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// The shared key.
    pub key: KeyCode,
    /// Controls that share it.
    pub controls: Vec<Control>,
}

/// Maps each [`Control`] to the keys that hold it (any key suffices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMap {
    /// The binding table.
    pub bindings: HashMap<Control, Vec<KeyBinding>>,
}

impl Default for InputMap {
    /// W/S pitch, A/D roll, Q/E yaw, arrows throttle, Space brake, R reset.
    fn default() -> Self {
        let mut map = Self::new();
        map.set_keys(Control::PitchUp, &[KeyCode::KeyS]);
        map.set_keys(Control::PitchDown, &[KeyCode::KeyW]);
        map.set_keys(Control::RollLeft, &[KeyCode::KeyA]);
        map.set_keys(Control::RollRight, &[KeyCode::KeyD]);
        map.set_keys(Control::YawLeft, &[KeyCode::KeyQ]);
        map.set_keys(Control::YawRight, &[KeyCode::KeyE]);
        map.set_keys(Control::ThrottleUp, &[KeyCode::ArrowUp]);
        map.set_keys(Control::ThrottleDown, &[KeyCode::ArrowDown]);
        map.set_keys(Control::Brake, &[KeyCode::Space]);
        map.set_keys(Control::Reset, &[KeyCode::KeyR]);
        map
    }
}

impl InputMap {
    /// An empty map with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Replace the keys bound to `control`.
    pub fn set_keys(&mut self, control: Control, keys: &[KeyCode]) {
        self.bindings
            .insert(control, keys.iter().copied().map(KeyBinding).collect());
    }

    /// Keys bound to `control`.
    #[must_use]
    pub fn keys(&self, control: Control) -> Vec<KeyCode> {
        self.bindings
            .get(&control)
            .map(|keys| keys.iter().map(|k| k.0).collect())
            .unwrap_or_default()
    }

    /// Snapshot the controls currently held on `keyboard`.
    #[must_use]
    pub fn snapshot(&self, keyboard: &KeyboardState) -> ControlSet {
        self.bindings
            .iter()
            .filter(|(_, keys)| keys.iter().any(|k| keyboard.is_held(k.0)))
            .map(|(control, _)| *control)
            .collect()
    }

    /// Keys bound to more than one control.
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let mut seen: HashMap<KeyCode, Vec<Control>> = HashMap::new();
        for control in Control::ALL {
            for key in self.bindings.get(&control).into_iter().flatten() {
                let owners = seen.entry(key.0).or_default();
                if !owners.contains(&control) {
                    owners.push(control);
                }
            }
        }

        seen.into_iter()
            .filter(|(_, controls)| controls.len() > 1)
            .map(|(key, controls)| Conflict { key, controls })
            .collect()
    }

    /// Serialize to a RON string.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from a RON string.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Save the map to a RON file at `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load a map from `path`, falling back to [`InputMap::default`] with a
    /// warning when the file is missing or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let map = match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(map) => {
                    info!("Loaded key bindings from {}", path.display());
                    map
                }
                Err(e) => {
                    warn!(
                        "Malformed key binding file {}: {e}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "Could not read key binding file {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        };

        for conflict in map.detect_conflicts() {
            warn!(
                "Key {:?} is bound to several controls: {:?}",
                conflict.key, conflict.controls
            );
        }
        map
    }
}
