//! Parsing Options.
//! `--algorithm {kruskal|prim|compare}` or `-a`, `--mode {instant|step}` or `-m`

use std::error::Error;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::mst::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Single(Algorithm),
    Compare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Instant,
    Step,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightingKind {
    Distance,
    Cost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Ron,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// Number of points; `None` takes the count from the config.
    Random(Option<usize>),
}

fn make_options_parser() -> Command {
    Command::new("mst")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Minimum spanning trees over planar point sets")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Point set to load (JSON, or RON with a .ron extension)")
                .conflicts_with("random"),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .value_name("COUNT")
                .num_args(0..=1)
                .value_parser(clap::value_parser!(usize))
                .help("Generate a random layout instead of reading a file"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .help("Seed for the random layout"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .default_value("kruskal")
                .value_parser(["kruskal", "prim", "compare"]),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .default_value("instant")
                .value_parser(["instant", "step"]),
        )
        .arg(
            Arg::new("weighting")
                .short('w')
                .long("weighting")
                .default_value("distance")
                .value_parser(["distance", "cost"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("mst.toml"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the report here instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .default_value("text")
                .value_parser(["text", "json", "ron", "dot"]),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone)]
pub struct Options {
    pub input: InputSource,
    pub seed: Option<u64>,
    pub algorithm: AlgorithmChoice,
    pub mode: RunMode,
    pub weighting: WeightingKind,
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: InputSource::Random(None),
            seed: None,
            algorithm: AlgorithmChoice::Single(Algorithm::Kruskal),
            mode: RunMode::Instant,
            weighting: WeightingKind::Distance,
            config: PathBuf::from("mst.toml"),
            output: None,
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let input = match matches.get_one::<String>("input") {
            Some(path) => InputSource::File(PathBuf::from(path)),
            None => InputSource::Random(matches.get_one::<usize>("random").copied()),
        };

        let algorithm = match matches.get_one::<String>("algorithm").map(String::as_str) {
            Some("compare") => AlgorithmChoice::Compare,
            Some(name) => AlgorithmChoice::Single(name.parse()?),
            None => AlgorithmChoice::Single(Algorithm::Kruskal),
        };

        let mode = match matches.get_one::<String>("mode").map(String::as_str) {
            Some("step") => RunMode::Step,
            _ => RunMode::Instant,
        };

        let weighting = match matches.get_one::<String>("weighting").map(String::as_str) {
            Some("cost") => WeightingKind::Cost,
            _ => WeightingKind::Distance,
        };

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            Some("ron") => OutputFormat::Ron,
            Some("dot") => OutputFormat::Dot,
            Some("text") | None => OutputFormat::Text,
            Some(other) => return Err(format!("unsupported format `{other}`").into()),
        };

        Ok(Options {
            input,
            seed: matches.get_one::<u64>("seed").copied(),
            algorithm,
            mode,
            weighting,
            config: matches
                .get_one::<String>("config")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("mst.toml")),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            format,
            verbose: matches.get_flag("verbose"),
        })
    }
}
