use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const KNOWN_APP_IDS: [&str; 9] = [
    "welcome",
    "work",
    "gallery",
    "outlook",
    "winamp",
    "cv",
    "remoteFace",
    "powerMatix",
    "hexalyze",
];

#[derive(Debug, Deserialize)]
struct Phases {
    boot_duration_ms: u32,
    shutdown_duration_ms: u32,
}

#[derive(Debug, Deserialize)]
struct Desktop {
    welcome_app_id: String,
    taskbar_height_px: i32,
    clock_tick_ms: u32,
    fallback_window_x: i32,
    fallback_window_y: i32,
}

#[derive(Debug, Deserialize)]
struct Mail {
    compose_reset_ms: u32,
}

#[derive(Debug, Deserialize)]
struct ShellConfig {
    schema_version: u32,
    phases: Phases,
    desktop: Desktop,
    mail: Mail,
}

fn validate(config: &ShellConfig) -> Result<(), String> {
    if config.schema_version != 1 {
        return Err(format!(
            "schema mismatch: expected 1 found {}",
            config.schema_version
        ));
    }
    let durations = [
        ("phases.boot_duration_ms", config.phases.boot_duration_ms),
        ("phases.shutdown_duration_ms", config.phases.shutdown_duration_ms),
        ("desktop.clock_tick_ms", config.desktop.clock_tick_ms),
        ("mail.compose_reset_ms", config.mail.compose_reset_ms),
    ];
    if let Some((key, _)) = durations.iter().find(|(_, value)| *value == 0) {
        return Err(format!("{key} must be non-zero"));
    }
    if config.desktop.taskbar_height_px <= 0 {
        return Err("desktop.taskbar_height_px must be positive".to_string());
    }
    if !KNOWN_APP_IDS.contains(&config.desktop.welcome_app_id.as_str()) {
        return Err(format!(
            "desktop.welcome_app_id `{}` is not a built-in app",
            config.desktop.welcome_app_id
        ));
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("shell.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: ShellConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&config) {
        panic!("invalid {}: {err}", path.display());
    }

    let generated = format!(
        "/// Boot screen duration before the login screen appears.\n\
         pub const BOOT_DURATION_MS: u32 = {boot};\n\
         /// Shutdown screen duration before the machine boots again.\n\
         pub const SHUTDOWN_DURATION_MS: u32 = {shutdown};\n\
         /// Delay between a successful send and the compose form resetting.\n\
         pub const COMPOSE_RESET_MS: u32 = {reset};\n\
         /// Height of the taskbar strip excluded from maximized windows.\n\
         pub const TASKBAR_HEIGHT_PX: i32 = {taskbar};\n\
         /// App auto-opened on first desktop entry.\n\
         pub const WELCOME_APP_ID: &str = {welcome:?};\n\
         pub const FALLBACK_WINDOW_X: i32 = {x};\n\
         pub const FALLBACK_WINDOW_Y: i32 = {y};\n\
         /// Taskbar clock refresh interval.\n\
         pub const CLOCK_TICK_MS: u32 = {tick};\n",
        boot = config.phases.boot_duration_ms,
        shutdown = config.phases.shutdown_duration_ms,
        reset = config.mail.compose_reset_ms,
        taskbar = config.desktop.taskbar_height_px,
        welcome = config.desktop.welcome_app_id,
        x = config.desktop.fallback_window_x,
        y = config.desktop.fallback_window_y,
        tick = config.desktop.clock_tick_ms,
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("out dir"));
    let out_file = out_dir.join("shell_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
