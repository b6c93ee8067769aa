//! Options menu demo
//!
//! Drives the menu headlessly through a scripted session: opens it, moves the
//! volume sliders, changes and accepts video settings, clicks a button with
//! the mouse and saves on shutdown.
//!
//! Usage: `options_demo [SAVE_TYPE] [CONFIG]`
//!
//! `SAVE_TYPE` is `prefs` or `json` and overrides the configured backend.
//! `CONFIG` is a `.toml` or `.ron` [`MenuConfig`]; it is written with the
//! defaults when missing.

use options_menu::config::Config;
use options_menu::foundation::logging;
use options_menu::prelude::*;
use options_menu::ui::MouseButton;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = "options_menu.toml";
const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);
    log::info!("Starting options menu demo");

    let mut args = std::env::args().skip(1);
    // Unknown backends are fatal
    let save_type = args.next().map(|arg| arg.parse::<SaveType>()).transpose()?;
    let config_path = args.next().map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let mut config = load_config(&config_path)?;
    if let Some(save_type) = save_type {
        config.save_type = save_type;
    }
    log::info!("Settings stored under {} ({})", config.data_dir.display(), config.save_type);

    let store = FilePreferenceStore::open(config.prefs_path())?;
    let mut menu = OptionsMenu::new(config, MixerSystem::new(), DisplayState::new(), Box::new(store))?;
    menu.init();
    log::info!("Loaded settings: {:?}", menu.settings().values());

    run_session(&mut menu);

    let saved = menu.shutdown()?;
    let [master, music, sfx] = saved.audio_values.to_percent();
    log::info!(
        "Saved volumes master={master:.0}% music={music:.0}% sfx={sfx:.0}%, video {:?}",
        saved.video_values
    );
    if menu.quit_requested() {
        log::info!("Quit requested, exiting");
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<MenuConfig, Box<dyn std::error::Error>> {
    if path.exists() {
        return Ok(MenuConfig::load_from_file(path)?);
    }

    let config = MenuConfig::default();
    if let Err(err) = config.save_to_file(path) {
        log::warn!("Could not write default config to {}: {err}", path.display());
    }
    Ok(config)
}

fn run_session(menu: &mut OptionsMenu<MixerSystem, DisplayState>) {
    menu.open();
    let audio_button = menu.element().audio_button();
    mouse_click(menu, audio_button);
    log::info!("Showing {:?}", menu.option_type());

    let audio = menu.element().audio().clone();
    menu.ui_mut().set_slider_value(audio.master_volume_slider, 65.0);
    menu.ui_mut().set_slider_value(audio.music_volume_slider, 35.0);
    menu.update(FRAME_TIME);
    for group in VolumeGroup::ALL {
        log::info!(
            "{:?}: {:.2} dB (gain {:.3})",
            group,
            menu.mixer().get_group_level(group),
            menu.mixer().get_effective_volume(group)
        );
    }

    menu.apply(MenuAction::Navigate(OptionType::Video));
    let video = menu.element().video().clone();
    let ui = menu.ui_mut();
    ui.select_dropdown_value(video.resolution_dropdown, "2560 x 1440");
    ui.set_toggle_value(video.fullscreen_toggle, true);
    ui.click_button(video.accept_changes_button);
    menu.update(FRAME_TIME);
    let display = menu.video();
    log::info!(
        "Display {}x{} {:?}, vsync {}, changes applied {}",
        display.width,
        display.height,
        display.mode,
        display.vsync_count,
        display.resolution_changes
    );

    menu.open_in_game();
    let quit_button = menu.element().quit_button();
    mouse_click(menu, quit_button);
}

/// Press and release the left button over the center of `button`
fn mouse_click(menu: &mut OptionsMenu<MixerSystem, DisplayState>, button: UINodeId) {
    let Some((min_x, min_y, max_x, max_y)) = menu.ui().bounds(button) else {
        log::warn!("No button {button:?} to click");
        return;
    };

    let ui = menu.ui_mut();
    ui.update_mouse_position((min_x + max_x) * 0.5, (min_y + max_y) * 0.5);
    ui.update_mouse_button(MouseButton::Left, true);
    menu.update(FRAME_TIME);
    menu.ui_mut().update_mouse_button(MouseButton::Left, false);
    menu.update(FRAME_TIME);
}
