//! Unit tests for CLI module
//!
//! Tests argument parsing, formatting and the one-off commands.
//! Settings commands use a temporary file.

use clap::Parser;
use toml::Value;

use crate::{
    cli::{
        Cli, CliError, Commands, ConfigCommand,
        commands::{colour, config},
        formatting::{format_toml_value, parse_toml_value, swatch},
        terminal::{TerminalView, frame},
    },
    colour::HexColour,
    config::{ColourMode, LogLevel},
    newtab::{RenderModel, View},
    settings_store::SettingsStore,
};

#[test]
fn format_toml_values() {
    assert_eq!(format_toml_value(&Value::String("hue".to_string())), "\"hue\"");
    assert_eq!(format_toml_value(&Value::Integer(-123)), "-123");
    assert_eq!(format_toml_value(&Value::Float(-2.5)), "-2.5");
    assert_eq!(format_toml_value(&Value::Boolean(false)), "false");
    assert_eq!(
        format_toml_value(&Value::Array(vec![Value::Integer(1), Value::Integer(2)])),
        "[2]"
    );
    assert_eq!(format_toml_value(&Value::Table(toml::map::Map::new())), "{0}");
}

#[test]
fn parse_toml_values() {
    assert_eq!(parse_toml_value("true"), Value::Boolean(true));
    assert_eq!(parse_toml_value("40"), Value::Integer(40));
    assert_eq!(parse_toml_value("0.5"), Value::Float(0.5));
    assert_eq!(
        parse_toml_value("#112233"),
        Value::String("#112233".to_string())
    );
    assert_eq!(parse_toml_value("hue"), Value::String("hue".to_string()));
}

#[test]
fn swatch_uses_truecolor_background() {
    assert_eq!(
        swatch("#ff8000".parse().unwrap(), 2),
        "\x1b[48;2;255;128;0m  \x1b[0m"
    );
}

#[test]
fn parses_commands() {
    let cli = Cli::try_parse_from(["colours", "colour", "12:00:00", "--mode", "hue"]).unwrap();
    assert!(!cli.is_interactive());
    assert_eq!(cli.log_level(), LogLevel::Warn);
    let Commands::Colour { time, mode, .. } = cli.command else {
        panic!("expected colour command");
    };
    assert_eq!(time, "12:00:00");
    assert_eq!(mode, ColourMode::Hue);

    let cli = Cli::try_parse_from(["colours", "--log-level", "DEBUG", "run", "--offline"]).unwrap();
    assert!(cli.is_interactive());
    assert_eq!(cli.log_level(), LogLevel::Debug);

    let cli = Cli::try_parse_from(["colours", "config", "set", "bgOpacity", "40"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config(ConfigCommand::Set { ref path, ref value })
            if path == "bgOpacity" && value == "40"
    ));

    assert!(Cli::try_parse_from(["colours", "colour", "12:00", "--mode", "rainbow"]).is_err());
    assert!(Cli::try_parse_from(["colours", "colour", "12:00", "--solid", "#12"]).is_err());
}

#[test]
fn colour_command() {
    assert_eq!(
        colour::colour_at("00:00:00", ColourMode::Full, HexColour::BLACK).unwrap(),
        HexColour::BLACK
    );
    assert_eq!(
        colour::colour_at("23:59:59", ColourMode::Full, HexColour::BLACK).unwrap(),
        HexColour::WHITE
    );
    assert_eq!(
        colour::execute("13:45", ColourMode::Regular, HexColour::BLACK, true).unwrap(),
        "#134500"
    );
    assert_eq!(
        colour::execute("08:00:00", ColourMode::Solid, "#112233".parse().unwrap(), true).unwrap(),
        "#112233"
    );

    let pretty = colour::execute("12:00:00", ColourMode::Hue, HexColour::BLACK, false).unwrap();
    assert!(pretty.contains("#00feff"));
    assert!(pretty.contains("rgb(0, 254, 255)"));

    assert!(matches!(
        colour::parse_time("25:00:00"),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(colour::parse_time("noon").is_err());
}

#[tokio::test]
async fn config_get_and_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let store = SettingsStore::load_from(&path).unwrap();

    assert_eq!(config::get(&store, "colour").unwrap(), "colour: \"regular\"");

    config::set(&store, "colour", "hue").unwrap();
    config::set(&store, "bgOpacity", "40").unwrap();
    assert_eq!(config::get(&store, "bgOpacity").unwrap(), "bgOpacity: 40");

    assert!(matches!(
        config::set(&store, "bgOpacity", "400"),
        Err(CliError::SettingsError(_))
    ));
    assert!(matches!(
        config::get(&store, "nope"),
        Err(CliError::SettingsError(_))
    ));

    let reopened = SettingsStore::load_from(&path).unwrap();
    assert_eq!(reopened.get_settings().colour, ColourMode::Hue);
}

#[test]
fn schema_lists_settings() {
    let schema = config::schema().unwrap();
    assert!(schema.contains("colourSolid"));
    assert!(schema.contains("time24hr"));
}

#[test]
fn terminal_frames() {
    assert!(frame(&RenderModel::default()).contains("loading settings"));

    let model = RenderModel {
        loaded: true,
        page_colour: "#102030".parse().unwrap(),
        background_colour: Some("#102030".to_string()),
        time: Some("10:20:30 AM".to_string()),
        colour: Some("#102030".to_string()),
        toast: Some("Copied".to_string()),
        ..RenderModel::default()
    };

    let mut view = TerminalView::new(Vec::new());
    view.render(&model).unwrap();
    let output = String::from_utf8(view.into_inner()).unwrap();

    assert!(output.starts_with("\r\x1b[2K"));
    assert!(output.contains("\x1b[48;2;16;32;48m"));
    assert!(output.contains("10:20:30 AM"));
    assert!(output.contains("[Copied]"));
}
