//! # Options Menu
//!
//! An in-game options menu (audio and video settings) built on a small
//! retained-mode UI toolkit, with settings persisted to a preference store
//! or a JSON file.
//!
//! ## Features
//!
//! - **Retained-mode UI**: node tree with buttons, sliders, toggles and dropdowns
//! - **Menu state machine**: None / Choices / Audio / Video / InGame panels
//! - **Volume conversion**: logarithmic slider percent to mixer decibels
//! - **Persistence**: preference-store keys or a pretty-printed JSON file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use options_menu::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MenuConfig::default();
//!     let store = FilePreferenceStore::open(config.prefs_path())?;
//!     let mut menu = OptionsMenu::new(config, MixerSystem::new(), DisplayState::new(), Box::new(store))?;
//!     menu.init();
//!     menu.open();
//!     menu.update(0.016);
//!     let saved = menu.shutdown()?;
//!     println!("saved {saved:?}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod events;
pub mod input;
pub mod ui;
pub mod audio;
pub mod video;
pub mod settings;
pub mod menu;

/// Common imports for menu users
pub mod prelude {
    pub use crate::{
        audio::{AudioMixer, MixerSystem, VolumeGroup},
        core::config::MenuConfig,
        menu::{MenuAction, OptionType, OptionsMenu, OptionsMenuElement},
        settings::{
            AudioValues, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
            Resolution, SaveSettings, SaveType, SettingValues, SettingsError, VideoValues,
        },
        ui::{UIManager, UINodeId},
        video::{DisplayState, FullScreenMode, VideoOutput},
    };
}
