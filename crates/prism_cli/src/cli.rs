use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_core::Preset;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    RedSphere,
    TwoBalls,
    ThreeBalls,
}

impl From<PresetArg> for Preset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::RedSphere => Preset::RedSphere,
            PresetArg::TwoBalls => Preset::TwoBalls,
            PresetArg::ThreeBalls => Preset::ThreeBalls,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "A Whitted-style ray tracer")]
pub struct Args {
    /// Output image path (.ppm for plain-text pixel map, .png and others via the image crate)
    pub output: Option<PathBuf>,

    /// JSON scene description to render
    #[arg(short, long, conflicts_with = "preset")]
    pub scene: Option<PathBuf>,

    /// Built-in scene to render when no scene file is given
    #[arg(long, value_enum, default_value = "red-sphere")]
    pub preset: PresetArg,

    /// Number of worker threads (0 = one per hardware thread)
    #[arg(short = 'p', long = "processes", default_value = "0")]
    pub processes: usize,

    /// Override the scene's image width in pixels
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Override the scene's image height in pixels
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Maximum number of mirror reflections per primary ray
    #[arg(long, default_value = "3")]
    pub max_depth: u32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["prism", "out.ppm"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.ppm")));
        assert_eq!(args.preset, PresetArg::RedSphere);
        assert_eq!(args.processes, 0);
        assert_eq!(args.max_depth, 3);
        assert!(args.scene.is_none());
    }

    #[test]
    fn test_scene_and_processes() {
        let args =
            Args::try_parse_from(["prism", "balls.png", "--scene", "balls.json", "-p", "4"]).unwrap();
        assert_eq!(args.scene, Some(PathBuf::from("balls.json")));
        assert_eq!(args.processes, 4);
    }

    #[test]
    fn test_resolution_needs_both_dimensions() {
        assert!(Args::try_parse_from(["prism", "out.ppm", "--width", "64"]).is_err());
        let args =
            Args::try_parse_from(["prism", "out.ppm", "--width", "64", "--height", "32"]).unwrap();
        assert_eq!((args.width, args.height), (Some(64), Some(32)));
    }

    #[test]
    fn test_scene_conflicts_with_preset() {
        assert!(Args::try_parse_from([
            "prism", "out.ppm", "--scene", "a.json", "--preset", "two-balls"
        ])
        .is_err());
    }

    #[test]
    fn test_preset_names_match_core() {
        for arg in PresetArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(Preset::from(*arg).name(), name);
        }
    }
}
