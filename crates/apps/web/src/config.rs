use events::EVENTS_FILE_PATH;
use events::popup::PopupLabels;
use navigation::NavigationConfig;
use serde::{Deserialize, Serialize};
use storage::{DEFAULT_THEME_KEY, DEFAULT_VIEW_KEY, Theme};

pub const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const CARTO_DARK_TILES: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const CARTO_DARK_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSource {
    pub url: String,
    #[serde(default)]
    pub attribution: String,
}

impl TileSource {
    pub fn new(url: &str, attribution: &str) -> Self {
        Self {
            url: url.to_string(),
            attribution: attribution.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSet {
    pub light: TileSource,
    pub dark: TileSource,
}

impl Default for TileSet {
    fn default() -> Self {
        Self {
            light: TileSource::new(OSM_TILES, OSM_ATTRIBUTION),
            dark: TileSource::new(CARTO_DARK_TILES, CARTO_DARK_ATTRIBUTION),
        }
    }
}

impl TileSet {
    pub fn for_theme(&self, theme: Theme) -> &TileSource {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Boot options. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_url: String,
    pub view_key: String,
    pub theme_key: String,
    /// `EnvFilter` directive for the console logger.
    pub log_filter: String,
    pub map_element: String,
    pub timeline_element: String,
    pub tiles: TileSet,
    pub popup: PopupLabels,
    pub navigation: NavigationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: EVENTS_FILE_PATH.to_string(),
            view_key: DEFAULT_VIEW_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            log_filter: "info".to_string(),
            map_element: "map".to_string(),
            timeline_element: "timeline".to_string(),
            tiles: TileSet::default(),
            popup: PopupLabels::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl AppConfig {
    /// `None` or blank input yields the defaults.
    pub fn parse(json: Option<&str>) -> Result<Self, serde_json::Error> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => serde_json::from_str(text),
        }
    }
}
