// SPDX-License-Identifier: MPL-2.0
use showcase_clock::calendar::{build_month_grid, month_title, weekday_header, DayCell, MonthCursor};
use showcase_clock::clock::{
    compute_hand_angles, render, ClockView, DisplayController, DisplayMode, FixedClock, HourFormat,
    PaintCommand, RecordingSurface, TimeSource, WallClockTime,
};
use showcase_clock::config::{self, Config};
use showcase_clock::i18n::fluent::I18n;
use showcase_clock::ui::theming::{ColorScheme, ThemePreset};
use std::f32::consts::PI;
use tempfile::tempdir;

fn en() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(month_title(MonthCursor::new(2026, 9).unwrap(), &i18n_fr), "octobre 2026");
}

#[test]
fn test_leap_february_grid() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let grid = build_month_grid(2024, 1, today);

    // 1 Feb 2024 was a Thursday
    let blanks = grid.iter().filter(|cell| **cell == DayCell::Blank).count();
    assert_eq!(blanks, 4);
    assert_eq!(grid.len(), 4 + 29);
    assert_eq!(grid.last(), Some(&DayCell::Day { number: 29, is_today: true }));
    assert_eq!(weekday_header(&en()).len(), 7);
}

#[test]
fn test_controller_drives_analog_rendering() {
    let source = FixedClock(WallClockTime::at(2026, 9, 15, 6, 30, 0).unwrap());
    let i18n = en();
    let mut controller = DisplayController::new(DisplayMode::Digital, HourFormat::TwelveHour, false);

    let digital = controller.tick(&source.now(), &i18n);
    assert_eq!(digital.view, ClockView::Digital("6:30 AM".to_string()));

    let analog = controller.toggle(&source.now(), &i18n);
    let ClockView::Analog(angles) = analog.view else {
        panic!("expected analog presentation after toggle");
    };
    assert!((angles.hour - 13.0 * PI / 12.0).abs() < 1e-5);
    assert_eq!(angles, compute_hand_angles(&source.now()));

    let palette = ColorScheme::light().clock_palette();
    let mut surface = RecordingSurface::default();
    render(Some(&mut surface), 100.0, &angles, &palette);
    let first = surface.commands().to_vec();
    render(Some(&mut surface), 100.0, &angles, &palette);

    assert_eq!(first.first(), Some(&PaintCommand::Clear));
    assert_eq!(surface.commands(), first.as_slice());

    let back = controller.toggle(&source.now(), &i18n);
    assert_eq!(back.mode(), DisplayMode::Digital);
    assert_eq!(back.date_text, "Thursday, October 15, 2026");
}

#[test]
fn test_missing_surface_is_skipped() {
    let angles = compute_hand_angles(&WallClockTime::at(2026, 0, 1, 0, 0, 0).unwrap());
    render::<RecordingSurface>(None, 100.0, &angles, &ColorScheme::dark().clock_palette());
}

#[test]
fn test_theme_preset_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\ntheme = \"green\"\naccent = \"#112233\"\n\n[clock]\nmode = \"analog\"\n",
    )
    .expect("Failed to write config");

    let config = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(config.general.theme, ThemePreset::Green);
    assert_eq!(config.clock.mode, DisplayMode::Analog);
    assert_eq!(config.general.accent.as_deref(), Some("#112233"));
}
