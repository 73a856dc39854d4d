use std::{fmt, str::FromStr};

use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL: &str = "Music";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Play,
    Stop,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Playlist,
    Soundboard,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Stop => "stop",
        }
    }
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Playlist => "playlist",
            MediaType::Soundboard => "soundboard",
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Action::Play),
            "stop" => Ok(Action::Stop),
            _ => Err(format!("unknown action: {}", s)),
        }
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playlist" => Ok(MediaType::Playlist),
            "soundboard" => Ok(MediaType::Soundboard),
            _ => Err(format!("unknown type: {}", s)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One play/stop instruction taken from a row of a `kenku` block.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub id: String,
    pub label: String,
    pub action: Action,
    #[serde(rename = "type")]
    pub kind: MediaType,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: DEFAULT_LABEL.to_string(),
            action: Action::default(),
            kind: MediaType::default(),
        }
    }
}

impl Directive {
    /// Icon shown in front of the label. Stop wins over the media type.
    pub fn icon(&self) -> &'static str {
        if self.action == Action::Stop {
            return "⏹";
        }

        match self.kind {
            MediaType::Soundboard => "♪",
            MediaType::Playlist => "♫",
        }
    }

    pub fn button_text(&self) -> String {
        format!("{} {}", self.icon(), self.label)
    }
}

/// Parses a row like `action=play, type=soundboard, id=1234, label=My Sound`.
///
/// Never fails: segments without a key or value are skipped, unknown keys
/// are ignored and later keys overwrite earlier ones. An `action` or `type`
/// value outside its known set leaves the current value in place.
pub fn parse_directive(line: &str) -> Directive {
    let mut directive = Directive::default();

    for part in line.split(',').map(str::trim) {
        let (key, value) = match part.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => continue,
        };

        if key.is_empty() || value.is_empty() {
            continue;
        }

        match key {
            "action" => match value.parse() {
                Ok(action) => directive.action = action,
                Err(e) => warn!("Ignoring {} in row: {}", e, line),
            },
            "type" => match value.parse() {
                Ok(kind) => directive.kind = kind,
                Err(e) => warn!("Ignoring {} in row: {}", e, line),
            },
            "id" => directive.id = value.to_string(),
            "label" => directive.label = value.to_string(),
            _ => {}
        }
    }

    directive
}
