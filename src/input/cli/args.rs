use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use crate::controllers::gallery::config::GalleryConfig;
use crate::controllers::process::config::{
    ProcessConfig, REFERENCE_BRIGHTNESS, REFERENCE_CONTRAST, REFERENCE_RESIZE,
    REFERENCE_SATURATION,
};
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Gallery(GalleryConfig),
    Process(ProcessConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub verbosity: Option<LevelFilter>,
    pub command: CliCommand,
}

/// Parse a pair of values separated by `separator`, e.g. "800x600" or "-0.7,0.27".
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let index = s.find(separator)?;
    match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

fn parse_complex(s: &str) -> Result<Complex, String> {
    parse_pair(s, ',')
        .map(|(real, imag)| Complex::new(real, imag))
        .ok_or_else(|| format!("expected REAL,IMAG but got '{}'", s))
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    parse_pair(s, 'x').ok_or_else(|| format!("expected WIDTHxHEIGHT but got '{}'", s))
}

fn parse_fractal_kind(s: &str) -> Result<FractalKinds, String> {
    s.parse::<FractalKinds>().map_err(|e| e.to_string())
}

fn gallery_command() -> Command {
    let defaults = GalleryConfig::default();

    Command::new("gallery")
        .about("Render fractals to PPM files")
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help(format!(
                    "Directory the images are written to (default: {})",
                    defaults.output_dir.display()
                )),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("WIDTHxHEIGHT")
                .value_parser(parse_size)
                .help("Size of the Mandelbrot and Julia images (default: 800x800)"),
        )
        .args(["xmin", "xmax", "ymin", "ymax"].map(|bound| {
            Arg::new(bound)
                .long(bound)
                .value_name("BOUND")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .help(format!("Viewing window {} for Mandelbrot and Julia", bound))
        }))
        .arg(
            Arg::new("max-iterations")
                .short('i')
                .long("max-iterations")
                .value_name("ITERATIONS")
                .value_parser(clap::value_parser!(u32))
                .help(format!(
                    "Escape-time iteration budget (default: {})",
                    defaults.max_iterations
                )),
        )
        .arg(
            Arg::new("julia-c")
                .short('c')
                .long("julia-c")
                .value_name("REAL,IMAG")
                .allow_hyphen_values(true)
                .value_parser(parse_complex)
                .help(format!(
                    "Julia set constant (default: {})",
                    defaults.julia_constant
                )),
        )
        .arg(
            Arg::new("koch-depth")
                .long("koch-depth")
                .value_name("DEPTH")
                .value_parser(clap::value_parser!(u32))
                .help(format!(
                    "Koch curve recursion depth (default: {})",
                    defaults.koch_depth
                )),
        )
        .arg(
            Arg::new("fern-iterations")
                .long("fern-iterations")
                .value_name("ITERATIONS")
                .value_parser(clap::value_parser!(u32))
                .help(format!(
                    "Barnsley fern samples, in thousands of points (default: {})",
                    defaults.fern_iterations
                )),
        )
        .arg(
            Arg::new("sierpinski-depth")
                .long("sierpinski-depth")
                .value_name("DEPTH")
                .value_parser(clap::value_parser!(u32))
                .help(format!(
                    "Sierpinski triangle recursion depth (default: {})",
                    defaults.sierpinski_depth
                )),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .help("Seed for the Barnsley fern's random source (default: random)"),
        )
        .arg(
            Arg::new("only")
                .long("only")
                .value_name("FRACTAL")
                .action(ArgAction::Append)
                .value_parser(parse_fractal_kind)
                .help("Render only this fractal (mandelbrot, julia, koch, fern, sierpinski)"),
        )
}

fn process_command() -> Command {
    Command::new("process")
        .about("Apply filters to an existing PPM image")
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("The PPM file to read"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("The PPM file to write"),
        )
        .arg(
            Arg::new("resize")
                .long("resize")
                .value_name("WIDTHxHEIGHT")
                .value_parser(parse_size)
                .help("Nearest-neighbour resize"),
        )
        .arg(
            Arg::new("brightness")
                .long("brightness")
                .value_name("DELTA")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32))
                .help("Add DELTA to every channel"),
        )
        .arg(
            Arg::new("contrast")
                .long("contrast")
                .value_name("FACTOR")
                .value_parser(clap::value_parser!(f64))
                .help("Scale distance from mid-grey by FACTOR"),
        )
        .arg(
            Arg::new("saturation")
                .long("saturation")
                .value_name("FACTOR")
                .value_parser(clap::value_parser!(f64))
                .help("Scale HSV saturation by FACTOR"),
        )
        .arg(
            Arg::new("edge-detect")
                .long("edge-detect")
                .action(ArgAction::SetTrue)
                .help("Apply the edge detection kernel last"),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .action(ArgAction::SetTrue)
                .help(format!(
                    "Fill unset steps with the reference pipeline ({}x{}, {:+}, x{}, x{}, edges)",
                    REFERENCE_RESIZE.0,
                    REFERENCE_RESIZE.1,
                    REFERENCE_BRIGHTNESS,
                    REFERENCE_CONTRAST,
                    REFERENCE_SATURATION
                )),
        )
}

pub fn build_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render fractals and filter PPM images")
        .subcommand_required(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .global(true)
                .value_name("VERBOSITY_LEVEL")
                .value_parser(PossibleValuesParser::new([
                    "off", "error", "warn", "info", "debug", "trace",
                ]))
                .help("Set verbosity level for output (default: info, or RUST_LOG)"),
        )
        .subcommand(gallery_command())
        .subcommand(process_command())
}

fn gallery_config(matches: &ArgMatches) -> GalleryConfig {
    let defaults = GalleryConfig::default();
    let (width, height) = matches
        .get_one::<(i32, i32)>("size")
        .copied()
        .unwrap_or((defaults.width, defaults.height));
    let bound = |name: &str, default: f64| matches.get_one::<f64>(name).copied().unwrap_or(default);
    let kinds: Vec<FractalKinds> = matches
        .get_many::<FractalKinds>("only")
        .map(|kinds| kinds.copied().collect())
        .unwrap_or_default();

    GalleryConfig {
        output_dir: matches
            .get_one::<PathBuf>("output-dir")
            .cloned()
            .unwrap_or(defaults.output_dir),
        width,
        height,
        xmin: bound("xmin", defaults.xmin),
        xmax: bound("xmax", defaults.xmax),
        ymin: bound("ymin", defaults.ymin),
        ymax: bound("ymax", defaults.ymax),
        max_iterations: matches
            .get_one::<u32>("max-iterations")
            .copied()
            .unwrap_or(defaults.max_iterations),
        julia_constant: matches
            .get_one::<Complex>("julia-c")
            .copied()
            .unwrap_or(defaults.julia_constant),
        koch_depth: matches
            .get_one::<u32>("koch-depth")
            .copied()
            .unwrap_or(defaults.koch_depth),
        fern_iterations: matches
            .get_one::<u32>("fern-iterations")
            .copied()
            .unwrap_or(defaults.fern_iterations),
        sierpinski_depth: matches
            .get_one::<u32>("sierpinski-depth")
            .copied()
            .unwrap_or(defaults.sierpinski_depth),
        seed: matches.get_one::<u64>("seed").copied(),
        kinds: if kinds.is_empty() {
            defaults.kinds
        } else {
            kinds
        },
    }
}

fn process_config(matches: &ArgMatches) -> Result<ProcessConfig, clap::Error> {
    let path = |name: &str| {
        matches.get_one::<PathBuf>(name).cloned().ok_or_else(|| {
            clap::Error::raw(
                clap::error::ErrorKind::MissingRequiredArgument,
                format!("missing <{}>", name),
            )
        })
    };
    let input = path("input")?;
    let output = path("output")?;

    let base = if matches.get_flag("reference") {
        ProcessConfig::reference(input, output)
    } else {
        ProcessConfig::new(input, output)
    };

    Ok(ProcessConfig {
        resize: matches.get_one::<(i32, i32)>("resize").copied().or(base.resize),
        brightness: matches.get_one::<i32>("brightness").copied().or(base.brightness),
        contrast: matches.get_one::<f64>("contrast").copied().or(base.contrast),
        saturation: matches.get_one::<f64>("saturation").copied().or(base.saturation),
        edge_detect: matches.get_flag("edge-detect") || base.edge_detect,
        ..base
    })
}

/// Parses `args` (program name first). Errors carry clap's usage message;
/// callers normally finish with `err.exit()`.
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    let verbosity = matches
        .get_one::<String>("verbosity")
        .and_then(|level| LevelFilter::from_str(level).ok());

    let command = match matches.subcommand() {
        Some(("gallery", sub)) => CliCommand::Gallery(gallery_config(sub)),
        Some(("process", sub)) => CliCommand::Process(process_config(sub)?),
        _ => {
            return Err(clap::Error::raw(
                clap::error::ErrorKind::MissingSubcommand,
                "expected a subcommand: gallery or process",
            ));
        }
    };

    Ok(CliArgs { verbosity, command })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        parse_args_from(std::iter::once("fractal_toolkit").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair::<i32>("800x600", 'x'), Some((800, 600)));
        assert_eq!(parse_pair::<f64>("-0.7,0.27", ','), Some((-0.7, 0.27)));
        assert_eq!(parse_pair::<i32>("800", 'x'), None);
        assert_eq!(parse_pair::<i32>("800xwide", 'x'), None);
    }

    #[test]
    fn test_gallery_defaults() {
        let args = parse(&["gallery"]).unwrap();

        assert_eq!(args.verbosity, None);
        assert_eq!(args.command, CliCommand::Gallery(GalleryConfig::default()));
    }

    #[test]
    fn test_gallery_options() {
        let args = parse(&[
            "gallery",
            "-o",
            "renders",
            "--size",
            "320x200",
            "--xmin",
            "-1.5",
            "--ymax",
            "1",
            "-i",
            "64",
            "--julia-c",
            "-0.8,0.156",
            "--koch-depth",
            "4",
            "--seed",
            "7",
            "--only",
            "julia",
            "--only",
            "fern",
            "-v",
            "debug",
        ])
        .unwrap();

        let CliCommand::Gallery(config) = args.command else {
            panic!("expected gallery command");
        };
        assert_eq!(args.verbosity, Some(LevelFilter::Debug));
        assert_eq!(config.output_dir, PathBuf::from("renders"));
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.xmin, -1.5);
        assert_eq!(config.ymax, 1.0);
        assert_eq!(config.xmax, 2.0);
        assert_eq!(config.max_iterations, 64);
        assert_eq!(config.julia_constant, Complex::new(-0.8, 0.156));
        assert_eq!(config.koch_depth, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(
            config.kinds,
            vec![FractalKinds::Julia, FractalKinds::BarnsleyFern]
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["gallery", "--size", "big"]).is_err());
        assert!(parse(&["gallery", "--only", "dragon"]).is_err());
        assert!(parse(&["gallery", "-v", "loud"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_process_steps() {
        let args = parse(&[
            "process",
            "in.ppm",
            "out.ppm",
            "--brightness",
            "-20",
            "--edge-detect",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            CliCommand::Process(ProcessConfig {
                brightness: Some(-20),
                edge_detect: true,
                ..ProcessConfig::new("in.ppm", "out.ppm")
            })
        );
    }

    #[test]
    fn test_process_reference_keeps_explicit_overrides() {
        let args = parse(&["process", "in.ppm", "out.ppm", "--reference", "--contrast", "2"])
            .unwrap();

        assert_eq!(
            args.command,
            CliCommand::Process(ProcessConfig {
                contrast: Some(2.0),
                ..ProcessConfig::reference("in.ppm", "out.ppm")
            })
        );
    }

    #[test]
    fn test_process_requires_paths() {
        assert!(parse(&["process", "in.ppm"]).is_err());
    }
}
