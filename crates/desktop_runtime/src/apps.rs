//! Application catalog: the immutable launch template for every app the shell can open.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{WindowPosition, WindowSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppId {
    Welcome,
    Work,
    Gallery,
    Outlook,
    Winamp,
    Cv,
    RemoteFace,
    PowerMatix,
    Hexalyze,
}

impl AppId {
    pub const ALL: [AppId; 9] = [
        Self::Welcome,
        Self::Work,
        Self::Gallery,
        Self::Outlook,
        Self::Winamp,
        Self::Cv,
        Self::RemoteFace,
        Self::PowerMatix,
        Self::Hexalyze,
    ];

    /// Stable string key, also used for DOM ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Work => "work",
            Self::Gallery => "gallery",
            Self::Outlook => "outlook",
            Self::Winamp => "winamp",
            Self::Cv => "cv",
            Self::RemoteFace => "remoteFace",
            Self::PowerMatix => "powerMatix",
            Self::Hexalyze => "hexalyze",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application id `{0}`")]
pub struct UnknownAppId(pub String);

impl FromStr for AppId {
    type Err = UnknownAppId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == raw)
            .ok_or_else(|| UnknownAppId(raw.to_string()))
    }
}

/// Companies with a dedicated experience-detail window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceId {
    RemoteFace,
    PowerMatix,
    Hexalyze,
}

/// Which panel renders inside the window body. The registry never looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppContent {
    Welcome,
    Projects,
    Gallery,
    Mail,
    Player,
    Resume,
    ExperienceDetail(ExperienceId),
}

/// Presentational icon handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppIcon {
    WelcomeOrb,
    Folder,
    Picture,
    Mail,
    Music,
    Document,
    Globe,
    Chip,
    RecycleBin,
}

impl AppIcon {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::WelcomeOrb => "icon-welcome",
            Self::Folder => "icon-folder",
            Self::Picture => "icon-picture",
            Self::Mail => "icon-mail",
            Self::Music => "icon-music",
            Self::Document => "icon-document",
            Self::Globe => "icon-globe",
            Self::Chip => "icon-chip",
            Self::RecycleBin => "icon-recycle-bin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowChrome {
    pub has_menu_bar: bool,
    pub has_toolbar: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplicationTemplate {
    pub id: AppId,
    pub title: &'static str,
    pub icon: AppIcon,
    pub content: AppContent,
    pub default_size: WindowSize,
    /// `None` lets the shell fall back to [`crate::config::fallback_window_position`].
    pub default_position: Option<WindowPosition>,
    pub chrome: WindowChrome,
    pub status_text: &'static str,
}

const MENU_ONLY: WindowChrome = WindowChrome {
    has_menu_bar: true,
    has_toolbar: false,
};
const EXPLORER_CHROME: WindowChrome = WindowChrome {
    has_menu_bar: true,
    has_toolbar: true,
};
const BARE: WindowChrome = WindowChrome {
    has_menu_bar: false,
    has_toolbar: false,
};

const BUILTIN_TEMPLATES: [ApplicationTemplate; 9] = [
    ApplicationTemplate {
        id: AppId::Welcome,
        title: "Welcome",
        icon: AppIcon::WelcomeOrb,
        content: AppContent::Welcome,
        default_size: WindowSize::new(600, 450),
        default_position: Some(WindowPosition::new(100, 80)),
        chrome: BARE,
        status_text: "Done",
    },
    ApplicationTemplate {
        id: AppId::Work,
        title: "My Experience",
        icon: AppIcon::Folder,
        content: AppContent::Projects,
        default_size: WindowSize::new(700, 500),
        default_position: None,
        chrome: EXPLORER_CHROME,
        status_text: "3 Objects",
    },
    ApplicationTemplate {
        id: AppId::Gallery,
        title: "My Gallery - Windows Picture and Fax Viewer",
        icon: AppIcon::Picture,
        content: AppContent::Gallery,
        default_size: WindowSize::new(600, 500),
        default_position: None,
        chrome: EXPLORER_CHROME,
        status_text: "Image 1 of 3",
    },
    ApplicationTemplate {
        id: AppId::Outlook,
        title: "Outlook Express",
        icon: AppIcon::Mail,
        content: AppContent::Mail,
        default_size: WindowSize::new(700, 500),
        default_position: None,
        chrome: MENU_ONLY,
        status_text: "Online",
    },
    ApplicationTemplate {
        id: AppId::Winamp,
        title: "Winamp",
        icon: AppIcon::Music,
        content: AppContent::Player,
        default_size: WindowSize::new(300, 150),
        default_position: Some(WindowPosition::new(200, 150)),
        chrome: BARE,
        status_text: "Playing",
    },
    ApplicationTemplate {
        id: AppId::Cv,
        title: "Affan Ahmed Resume",
        icon: AppIcon::Document,
        content: AppContent::Resume,
        default_size: WindowSize::new(550, 650),
        default_position: Some(WindowPosition::new(150, 50)),
        chrome: MENU_ONLY,
        status_text: "Online",
    },
    ApplicationTemplate {
        id: AppId::RemoteFace,
        title: "RemoteFace - Experience Details",
        icon: AppIcon::Globe,
        content: AppContent::ExperienceDetail(ExperienceId::RemoteFace),
        default_size: WindowSize::new(650, 450),
        default_position: Some(WindowPosition::new(200, 100)),
        chrome: MENU_ONLY,
        status_text: "RemoteFace.doc",
    },
    ApplicationTemplate {
        id: AppId::PowerMatix,
        title: "PowerMatix - Experience Details",
        icon: AppIcon::Chip,
        content: AppContent::ExperienceDetail(ExperienceId::PowerMatix),
        default_size: WindowSize::new(650, 450),
        default_position: Some(WindowPosition::new(250, 150)),
        chrome: MENU_ONLY,
        status_text: "PowerMatix.doc",
    },
    ApplicationTemplate {
        id: AppId::Hexalyze,
        title: "Hexalyze - Experience Details",
        icon: AppIcon::Folder,
        content: AppContent::ExperienceDetail(ExperienceId::Hexalyze),
        default_size: WindowSize::new(650, 450),
        default_position: Some(WindowPosition::new(300, 200)),
        chrome: MENU_ONLY,
        status_text: "Hexalyze.doc",
    },
];

/// Read-only lookup from [`AppId`] to its launch template.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationCatalog<'a> {
    templates: &'a [ApplicationTemplate],
}

impl<'a> ApplicationCatalog<'a> {
    pub const fn new(templates: &'a [ApplicationTemplate]) -> Self {
        Self { templates }
    }

    pub fn template_for(&self, app_id: AppId) -> Option<&'a ApplicationTemplate> {
        self.templates.iter().find(|t| t.id == app_id)
    }

    pub fn templates(&self) -> &'a [ApplicationTemplate] {
        self.templates
    }
}

impl ApplicationCatalog<'static> {
    pub const fn builtin() -> Self {
        Self::new(&BUILTIN_TEMPLATES)
    }
}

/// Template lookup against the built-in catalog.
pub fn template_for(app_id: AppId) -> Option<&'static ApplicationTemplate> {
    ApplicationCatalog::builtin().template_for(app_id)
}

pub fn app_title(app_id: AppId) -> &'static str {
    template_for(app_id).map(|t| t.title).unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopIcon {
    pub label: &'static str,
    pub icon: AppIcon,
    /// `None` renders an icon that does nothing when activated.
    pub target: Option<AppId>,
}

const DESKTOP_ICONS: [DesktopIcon; 5] = [
    DesktopIcon {
        label: "My Experience",
        icon: AppIcon::Folder,
        target: Some(AppId::Work),
    },
    DesktopIcon {
        label: "My Gallery",
        icon: AppIcon::Picture,
        target: Some(AppId::Gallery),
    },
    DesktopIcon {
        label: "Outlook Express",
        icon: AppIcon::Mail,
        target: Some(AppId::Outlook),
    },
    DesktopIcon {
        label: "My CV",
        icon: AppIcon::Document,
        target: Some(AppId::Cv),
    },
    DesktopIcon {
        label: "Recycle Bin",
        icon: AppIcon::RecycleBin,
        target: None,
    },
];

pub fn desktop_icons() -> &'static [DesktopIcon] {
    &DESKTOP_ICONS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMenuEntry {
    Launch {
        label: &'static str,
        subtitle: Option<&'static str>,
        icon: AppIcon,
        bold: bool,
        target: Option<AppId>,
    },
    Separator,
}

const fn launch(label: &'static str, icon: AppIcon, bold: bool, target: Option<AppId>) -> StartMenuEntry {
    StartMenuEntry::Launch {
        label,
        subtitle: None,
        icon,
        bold,
        target,
    }
}

const START_MENU_PROGRAMS: [StartMenuEntry; 6] = [
    StartMenuEntry::Launch {
        label: "Internet",
        subtitle: Some("Internet Explorer"),
        icon: AppIcon::Globe,
        bold: true,
        target: Some(AppId::Work),
    },
    StartMenuEntry::Launch {
        label: "E-mail",
        subtitle: Some("Outlook Express"),
        icon: AppIcon::Mail,
        bold: true,
        target: Some(AppId::Outlook),
    },
    StartMenuEntry::Separator,
    launch("My Work", AppIcon::Folder, false, Some(AppId::Work)),
    launch("My Gallery", AppIcon::Picture, false, Some(AppId::Gallery)),
    launch("Winamp", AppIcon::Music, false, Some(AppId::Winamp)),
];

const START_MENU_PLACES: [StartMenuEntry; 8] = [
    launch("My Documents", AppIcon::Folder, true, Some(AppId::Work)),
    launch("My CV", AppIcon::Document, false, Some(AppId::Cv)),
    launch("My Pictures", AppIcon::Picture, true, Some(AppId::Gallery)),
    launch("My Music", AppIcon::Music, true, Some(AppId::Winamp)),
    StartMenuEntry::Separator,
    launch("Control Panel", AppIcon::Chip, false, None),
    launch("Search", AppIcon::Globe, false, None),
    launch("Run...", AppIcon::Document, false, None),
];

/// Left start-menu column (programs).
pub fn start_menu_programs() -> &'static [StartMenuEntry] {
    &START_MENU_PROGRAMS
}

/// Right start-menu column (places).
pub fn start_menu_places() -> &'static [StartMenuEntry] {
    &START_MENU_PLACES
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_app_id_has_exactly_one_builtin_template() {
        let catalog = ApplicationCatalog::builtin();
        for app_id in AppId::ALL {
            let matching = catalog
                .templates()
                .iter()
                .filter(|t| t.id == app_id)
                .count();
            assert_eq!(matching, 1, "{app_id}");
        }
    }

    #[test]
    fn app_ids_round_trip_through_their_string_keys() {
        for app_id in AppId::ALL {
            assert_eq!(app_id.as_str().parse::<AppId>(), Ok(app_id));
        }
        assert_eq!(
            "minesweeper".parse::<AppId>(),
            Err(UnknownAppId("minesweeper".to_string()))
        );
    }

    #[test]
    fn serialized_app_ids_use_string_keys() {
        for app_id in AppId::ALL {
            let json = serde_json::to_string(&app_id).expect("serialize app id");
            assert_eq!(json, format!("\"{}\"", app_id.as_str()));
            let back: AppId = serde_json::from_str(&json).expect("deserialize app id");
            assert_eq!(back, app_id);
        }
    }

    #[test]
    fn work_template_matches_launch_defaults() {
        let work = template_for(AppId::Work).expect("work template");
        assert_eq!(work.default_size, WindowSize::new(700, 500));
        assert_eq!(work.default_position, None);
        assert_eq!(work.chrome, EXPLORER_CHROME);
        assert_eq!(work.status_text, "3 Objects");
    }

    #[test]
    fn shell_entry_points_only_target_catalog_apps() {
        let catalog = ApplicationCatalog::builtin();
        let targets = desktop_icons()
            .iter()
            .filter_map(|icon| icon.target)
            .chain(
                start_menu_programs()
                    .iter()
                    .chain(start_menu_places())
                    .filter_map(|entry| match entry {
                        StartMenuEntry::Launch { target, .. } => *target,
                        StartMenuEntry::Separator => None,
                    }),
            );
        for target in targets {
            assert!(catalog.template_for(target).is_some(), "{target}");
        }
    }

    #[test]
    fn custom_catalog_can_omit_apps() {
        let templates = [BUILTIN_TEMPLATES[0]];
        let catalog = ApplicationCatalog::new(&templates);
        assert!(catalog.template_for(AppId::Welcome).is_some());
        assert!(catalog.template_for(AppId::Work).is_none());
    }
}
