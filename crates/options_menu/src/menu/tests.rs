use super::*;
use crate::audio::{MixerSystem, VolumeGroup};
use crate::core::config::MenuConfig;
use crate::settings::{
    percent_to_decibels, FilePreferenceStore, MemoryPreferenceStore, Resolution, SaveType, SettingValues,
};
use crate::ui::{MouseButton, UINodeId};
use crate::video::{DisplayState, FullScreenMode};
use approx::assert_relative_eq;
use tempfile::TempDir;

type Menu = OptionsMenu<MixerSystem, DisplayState>;

fn menu_in(dir: &TempDir, save_type: SaveType) -> Menu {
    let config = MenuConfig::new(dir.path()).with_save_type(save_type);
    let store = FilePreferenceStore::open(config.prefs_path()).unwrap();
    let mut menu = OptionsMenu::new(config, MixerSystem::new(), DisplayState::new(), Box::new(store)).unwrap();
    menu.init();
    menu
}

fn click(menu: &mut Menu, button: UINodeId) {
    assert!(menu.ui_mut().click_button(button), "button {button:?} not clickable");
    menu.handle_events();
}

fn visible_panels(menu: &Menu) -> Vec<UINodeId> {
    let element = menu.element();
    [
        element.root(),
        element.options_button_container(),
        element.in_game_button_container(),
        element.element_container(),
        element.audio().section.root,
        element.video().section.root,
    ]
    .into_iter()
    .filter(|id| menu.ui().is_visible(*id))
    .collect()
}

#[test]
fn test_visibility_per_option_type() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let element = menu.element();
    let (root, choices, in_game, container) = (
        element.root(),
        element.options_button_container(),
        element.in_game_button_container(),
        element.element_container(),
    );
    let (audio, video) = (element.audio().section.root, element.video().section.root);

    assert_eq!(menu.option_type(), OptionType::None);
    assert!(visible_panels(&menu).is_empty());

    let cases = [
        (OptionType::Choices, vec![root, choices]),
        (OptionType::Audio, vec![root, container, audio]),
        (OptionType::Video, vec![root, container, video]),
        (OptionType::InGame, vec![root, in_game]),
        (OptionType::None, vec![]),
    ];
    for (option_type, expected) in cases {
        menu.apply(MenuAction::Navigate(option_type));
        assert_eq!(menu.option_type(), option_type);
        assert_eq!(visible_panels(&menu), expected, "{option_type:?}");
    }
}

#[test]
fn test_navigation_buttons() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let element = menu.element();
    let audio_button = element.audio_button();
    let video_button = element.video_button();
    let back_button = element.back_button();
    let audio_back = element.audio().section.back_button;
    let video_back = element.video().section.back_button;
    let resume = element.resume_button();
    let settings = element.settings_button();

    menu.open();
    assert_eq!(menu.option_type(), OptionType::Choices);

    click(&mut menu, audio_button);
    assert_eq!(menu.option_type(), OptionType::Audio);
    click(&mut menu, audio_back);
    assert_eq!(menu.option_type(), OptionType::Choices);

    click(&mut menu, video_button);
    assert_eq!(menu.option_type(), OptionType::Video);
    click(&mut menu, video_back);
    assert_eq!(menu.option_type(), OptionType::Choices);

    click(&mut menu, back_button);
    assert_eq!(menu.option_type(), OptionType::None);

    menu.open_in_game();
    click(&mut menu, settings);
    assert_eq!(menu.option_type(), OptionType::Choices);

    menu.open_in_game();
    click(&mut menu, resume);
    assert_eq!(menu.option_type(), OptionType::None);
}

#[test]
fn test_hidden_buttons_ignore_clicks() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let quit = menu.element().quit_button();
    let audio_button = menu.element().audio_button();

    menu.open();
    assert!(!menu.ui_mut().click_button(quit));
    assert_eq!(menu.handle_events(), 0);

    menu.open_in_game();
    assert!(!menu.ui_mut().click_button(audio_button));
    assert!(!menu.quit_requested());
}

#[test]
fn test_quit_sets_flag() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let quit = menu.element().quit_button();

    menu.open_in_game();
    click(&mut menu, quit);

    assert!(menu.quit_requested());
    assert_eq!(menu.option_type(), OptionType::InGame);
}

#[test]
fn test_mouse_click_through_update() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let audio_button = menu.element().audio_button();
    menu.open();

    let (min_x, min_y, max_x, max_y) = menu.ui().bounds(audio_button).unwrap();
    let ui = menu.ui_mut();
    ui.update_mouse_position((min_x + max_x) * 0.5, (min_y + max_y) * 0.5);
    ui.update_mouse_button(MouseButton::Left, true);
    menu.update(0.016);
    menu.ui_mut().update_mouse_button(MouseButton::Left, false);
    menu.update(0.016);

    assert_eq!(menu.option_type(), OptionType::Audio);
}

#[test]
fn test_sliders_drive_mixer_in_decibels() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let master = menu.element().audio().master_volume_slider;
    let sfx = menu.element().audio().sfx_volume_slider;

    assert_relative_eq!(
        menu.mixer().get_group_level(VolumeGroup::Master),
        percent_to_decibels(75.0),
        epsilon = 1e-4
    );

    menu.ui_mut().set_slider_value(master, 50.0);
    menu.ui_mut().set_slider_value(sfx, 0.0);
    assert_eq!(menu.handle_events(), 2);

    assert_relative_eq!(menu.mixer().get_group_level(VolumeGroup::Master), percent_to_decibels(50.0));
    assert_relative_eq!(menu.mixer().get_group_level(VolumeGroup::SFX), crate::settings::MIN_DB);
}

#[test]
fn test_non_finite_slider_input_keeps_saved_settings() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let music = menu.element().audio().music_volume_slider;
    let dropdown = menu.element().video().resolution_dropdown;

    menu.ui_mut().select_dropdown_value(dropdown, "1280 x 720");
    assert!(!menu.ui_mut().set_slider_value(music, f32::NAN));
    menu.handle_events();
    assert_relative_eq!(
        menu.mixer().get_group_level(VolumeGroup::Music),
        percent_to_decibels(60.0),
        epsilon = 1e-4
    );
    menu.shutdown().unwrap();

    let reloaded = menu_in(&dir, SaveType::JsonFile);
    assert_eq!(reloaded.settings().values().video_values.resolution, Resolution::new(1280, 720));
}

#[test]
fn test_resolution_dropdown_populated() {
    let dir = tempfile::tempdir().unwrap();
    let menu = menu_in(&dir, SaveType::JsonFile);
    let dropdown = menu.ui().get_dropdown(menu.element().video().resolution_dropdown).unwrap();

    assert_eq!(
        dropdown.choices,
        vec!["1280 x 720", "1920 x 1080", "2560 x 1440", "3840 x 2160"]
    );
    assert_eq!(dropdown.value, "1920 x 1080");
}

#[test]
fn test_repeated_init_keeps_single_resolution_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let subscriptions = menu.events().subscription_count();

    menu.init();

    let dropdown = menu.ui().get_dropdown(menu.element().video().resolution_dropdown).unwrap();
    assert_eq!(dropdown.choices.len(), 4);
    assert_eq!(menu.events().subscription_count(), subscriptions);
}

#[test]
fn test_accept_changes_applies_to_display() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::JsonFile);
    let video = menu.element().video().clone();
    let video_button = menu.element().video_button();
    menu.open();
    click(&mut menu, video_button);

    let ui = menu.ui_mut();
    ui.select_dropdown_value(video.resolution_dropdown, "2560 x 1440");
    ui.set_toggle_value(video.fullscreen_toggle, true);
    ui.set_toggle_value(video.depth_of_field_toggle, false);
    menu.handle_events();
    // Nothing reaches the display before Accept
    assert_eq!(menu.video().resolution_changes, 0);

    click(&mut menu, video.accept_changes_button);

    let display = menu.video();
    assert_eq!((display.width, display.height), (2560, 1440));
    assert_eq!(display.mode, FullScreenMode::FullScreenWindow);
    assert_eq!(display.vsync_count, 1);
    assert_eq!(display.depth_of_field, Some(false));
}

#[test]
fn test_teardown_leaves_no_subscriptions() {
    let dir = tempfile::tempdir().unwrap();
    let mut menu = menu_in(&dir, SaveType::PreferenceStore);
    assert!(menu.events().subscription_count() > 0);

    menu.shutdown().unwrap();

    assert_eq!(menu.events().subscription_count(), 0);
    assert_eq!(menu.element().subscription_count(), 0);
    assert!(!menu.settings().audio().is_initialized());
}

fn change_everything(menu: &mut Menu) {
    let audio = menu.element().audio().clone();
    let video = menu.element().video().clone();
    let ui = menu.ui_mut();
    ui.set_slider_value(audio.master_volume_slider, 40.0);
    ui.set_slider_value(audio.music_volume_slider, 20.0);
    ui.set_slider_value(audio.sfx_volume_slider, 90.0);
    ui.select_dropdown_value(video.resolution_dropdown, "1280 x 720");
    ui.set_toggle_value(video.vsync_toggle, false);
    ui.set_toggle_value(video.depth_of_field_toggle, false);
    menu.handle_events();
}

fn assert_round_trip(save_type: SaveType) {
    let dir = tempfile::tempdir().unwrap();

    let mut first = menu_in(&dir, save_type);
    change_everything(&mut first);
    let saved = first.shutdown().unwrap();
    assert_relative_eq!(saved.audio_values.to_percent()[0], 40.0, epsilon = 1e-3);

    let mut second = menu_in(&dir, save_type);
    let loaded = *second.settings().values();
    assert_eq!(loaded.video_values.resolution, Resolution::new(1280, 720));
    assert!(!loaded.video_values.vsync);
    assert!(!loaded.video_values.depth_of_field);
    let [master, music, sfx] = loaded.audio_values.to_percent();
    assert_relative_eq!(master, 40.0, epsilon = 1e-3);
    assert_relative_eq!(music, 20.0, epsilon = 1e-3);
    assert_relative_eq!(sfx, 90.0, epsilon = 1e-3);

    // Loaded levels are pushed back into the mixer and onto the sliders
    assert_relative_eq!(second.mixer().get_group_level(VolumeGroup::Music), percent_to_decibels(20.0), epsilon = 1e-3);
    let music_slider = second.element().audio().music_volume_slider;
    assert_relative_eq!(second.ui().get_slider(music_slider).unwrap().value, 20.0, epsilon = 1e-3);

    // Saving untouched values again is stable
    let resaved = second.shutdown().unwrap();
    assert_eq!(resaved.video_values, loaded.video_values);
    assert_relative_eq!(resaved.audio_values.music_volume, loaded.audio_values.music_volume, epsilon = 1e-3);
}

#[test]
fn test_json_round_trip() {
    assert_round_trip(SaveType::JsonFile);
}

#[test]
fn test_preference_store_round_trip() {
    assert_round_trip(SaveType::PreferenceStore);
}

#[test]
fn test_fresh_install_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let menu = menu_in(&dir, SaveType::PreferenceStore);

    assert_eq!(*menu.settings().values(), SettingValues::default());
    let [master, music, sfx] = menu.current_values().audio_values.to_percent();
    assert_relative_eq!(master, 75.0, epsilon = 1e-3);
    assert_relative_eq!(music, 60.0, epsilon = 1e-3);
    assert_relative_eq!(sfx, 80.0, epsilon = 1e-3);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = MenuConfig::new(".").with_resolutions(Vec::new());
    let result = OptionsMenu::new(
        config,
        MixerSystem::new(),
        DisplayState::new(),
        Box::new(MemoryPreferenceStore::new()),
    );

    assert!(matches!(result, Err(crate::settings::SettingsError::Config(_))));
}
