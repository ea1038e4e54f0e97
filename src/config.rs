//! Runtime configuration from environment variables and command-line flags.
//!
//! Environment variables provide defaults; flags override them.
//!
//! - `TUI_CUBE_ZOOM` / `--zoom F`: initial zoom (clamped into 0.1..=5.0)
//! - `TUI_CUBE_FRAME_US` / `--frame-us N`: sleep between frames in microseconds
//! - `TUI_CUBE_LOG` / `--log PATH`: write `tracing` output to a file
//! - `--frames N`: exit after presenting N frames

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use crate::engine::clamp_zoom;
use crate::types::{DEFAULT_ZOOM, FRAME_INTERVAL_US};

pub const USAGE: &str = "\
Usage: tui-cube [OPTIONS]

Options:
  --zoom F        initial zoom factor (0.1 to 5.0, default 0.6)
  --frame-us N    microseconds to sleep between frames (default 16667)
  --frames N      exit after N frames
  --log PATH      append logs to PATH (filter with RUST_LOG)
  -h, --help      print this help

Keys: + or = zoom in, - or _ zoom out, q or Esc quit";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub zoom: f64,
    pub frame_interval: Duration,
    pub max_frames: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            frame_interval: Duration::from_micros(FRAME_INTERVAL_US),
            max_frames: None,
            log_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Build a config from an arbitrary variable lookup (for tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(v) = lookup("TUI_CUBE_ZOOM") {
            config.zoom = parse_zoom(&v).context("TUI_CUBE_ZOOM")?;
        }
        if let Some(v) = lookup("TUI_CUBE_FRAME_US") {
            config.frame_interval = parse_frame_us(&v).context("TUI_CUBE_FRAME_US")?;
        }
        if let Some(v) = lookup("TUI_CUBE_LOG").filter(|v| !v.is_empty()) {
            config.log_path = Some(PathBuf::from(v));
        }
        Ok(config)
    }
}

/// Resolve the command for `args`, reading defaults from `lookup`.
///
/// A help flag short-circuits before the environment is read, so a bad
/// variable cannot hide the usage text.
pub fn load(args: &[String], lookup: impl Fn(&str) -> Option<String>) -> Result<Command> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(Command::Help);
    }
    parse_args(args, Config::from_lookup(lookup)?)
}

/// Apply command-line flags (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: Config) -> Result<Command> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "--zoom" | "--frame-us" | "--frames" | "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                match flag {
                    "--zoom" => config.zoom = parse_zoom(v).context("--zoom")?,
                    "--frame-us" => {
                        config.frame_interval = parse_frame_us(v).context("--frame-us")?
                    }
                    "--frames" => config.max_frames = Some(parse_frames(v)?),
                    _ => config.log_path = Some(PathBuf::from(v)),
                }
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }
    Ok(Command::Run(config))
}

fn parse_zoom(v: &str) -> Result<f64> {
    let zoom: f64 = v
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid zoom value: {}", v))?;
    if !zoom.is_finite() {
        bail!("zoom must be finite, got {}", v);
    }
    Ok(clamp_zoom(zoom))
}

fn parse_frame_us(v: &str) -> Result<Duration> {
    let us: u64 = v
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid frame interval: {}", v))?;
    Ok(Duration::from_micros(us))
}

fn parse_frames(v: &str) -> Result<u64> {
    match v.trim().parse::<u64>() {
        Ok(0) => bail!("--frames must be at least 1"),
        Ok(n) => Ok(n),
        Err(_) => bail!("invalid --frames value: {}", v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ZOOM_MAX, ZOOM_MIN};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_config(list: &[&str]) -> Config {
        match parse_args(&args(list), Config::default()).unwrap() {
            Command::Run(c) => c,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(run_config(&[]), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let c = run_config(&[
            "--zoom",
            "1.5",
            "--frames",
            "3",
            "--frame-us",
            "0",
            "--log",
            "/tmp/cube.log",
        ]);
        assert_eq!(c.zoom, 1.5);
        assert_eq!(c.max_frames, Some(3));
        assert_eq!(c.frame_interval, Duration::ZERO);
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/cube.log")));
    }

    #[test]
    fn zoom_is_clamped() {
        assert_eq!(run_config(&["--zoom", "50"]).zoom, ZOOM_MAX);
        assert_eq!(run_config(&["--zoom", "-1"]).zoom, ZOOM_MIN);
    }

    #[test]
    fn bad_values_are_errors() {
        for list in [
            &["--zoom"][..],
            &["--zoom", "abc"],
            &["--zoom", "NaN"],
            &["--zoom", "inf"],
            &["--frames", "0"],
            &["--frames", "-2"],
            &["--frame-us", "fast"],
            &["--wat"],
        ] {
            assert!(parse_args(&args(list), Config::default()).is_err(), "{list:?}");
        }
    }

    #[test]
    fn help_wins() {
        assert_eq!(
            parse_args(&args(&["--zoom", "1", "-h"]), Config::default()).unwrap(),
            Command::Help
        );
    }

    #[test]
    fn env_lookup_sets_defaults_and_flags_override() {
        let base = Config::from_lookup(|k| match k {
            "TUI_CUBE_ZOOM" => Some("2.0".into()),
            "TUI_CUBE_FRAME_US" => Some("1000".into()),
            "TUI_CUBE_LOG" => Some("cube.log".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(base.zoom, 2.0);
        assert_eq!(base.frame_interval, Duration::from_millis(1));
        assert_eq!(base.log_path, Some(PathBuf::from("cube.log")));

        let Command::Run(c) = parse_args(&args(&["--zoom", "0.5"]), base).unwrap() else {
            panic!("unexpected help");
        };
        assert_eq!(c.zoom, 0.5);
        assert_eq!(c.frame_interval, Duration::from_millis(1));
    }

    #[test]
    fn help_ignores_bad_env() {
        let bad = |k: &str| (k == "TUI_CUBE_ZOOM").then(|| "x".to_string());
        assert_eq!(load(&args(&["--help"]), bad).unwrap(), Command::Help);
        assert_eq!(load(&args(&["-h", "--wat"]), bad).unwrap(), Command::Help);
        assert!(load(&args(&[]), bad).is_err());
    }

    #[test]
    fn load_applies_env_then_flags() {
        let env = |k: &str| (k == "TUI_CUBE_ZOOM").then(|| "2.0".to_string());
        let Command::Run(c) = load(&args(&["--frames", "1"]), env).unwrap() else {
            panic!("unexpected help");
        };
        assert_eq!(c.zoom, 2.0);
        assert_eq!(c.max_frames, Some(1));
    }

    #[test]
    fn bad_env_is_an_error() {
        assert!(Config::from_lookup(|k| (k == "TUI_CUBE_ZOOM").then(|| "x".to_string())).is_err());
        assert!(Config::from_lookup(|k| (k == "TUI_CUBE_LOG").then(String::new))
            .unwrap()
            .log_path
            .is_none());
    }
}
