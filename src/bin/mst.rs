use std::fmt::Display;
use std::fs;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use mst_planner::config::MstConfig;
use mst_planner::graph::{Edge, Weighting};
use mst_planner::io::{self, PointSet};
use mst_planner::options::{
    AlgorithmChoice, InputSource, Options, OutputFormat, RunMode, WeightingKind,
};
use mst_planner::report::{RunReport, StepReport};
use mst_planner::session::Session;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = if args.is_empty() {
        Options::parse_from_str(&std::env::var("MST_FLAGS").unwrap_or_default())
    } else {
        Options::parse_from_args(&args)
    }
    .map_err(|err| anyhow!("{err}"))?;

    init_logger(options.verbose);
    debug!("MST options: {:?}", options);

    let config = MstConfig::load_from_file(&options.config)?;
    let weighting = match options.weighting {
        WeightingKind::Distance => Weighting::Distance,
        WeightingKind::Cost => Weighting::Cost(config.cost_model()?),
    };

    let mut session = Session::with_weighting(weighting);
    info!("edge weights use {}", session.graph().weighting().name());
    match &options.input {
        InputSource::File(path) => {
            let set = PointSet::read(path)
                .with_context(|| format!("Failed to read point set: {:?}", path))?;
            for point in &set.points {
                session.add_vertex(point.x, point.y, point.category)?;
            }
            info!("loaded {} points from {:?}", set.points.len(), path);
        }
        InputSource::Random(count) => {
            let count = count.unwrap_or(config.random.count);
            let seed = options
                .seed
                .or(config.random.seed)
                .unwrap_or_else(rand::random);
            info!("random layout seed: {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            session.randomize(count, config.random.bounds, &mut rng)?;
        }
    }

    let rendered = match (options.algorithm, options.mode) {
        (AlgorithmChoice::Compare, _) => {
            let comparison = session.compare()?;
            let highlight = comparison.kruskal.edges.clone();
            render(&comparison, options.format, &session, &highlight)?
        }
        (AlgorithmChoice::Single(algorithm), RunMode::Instant) => {
            let result = session.run_instant(algorithm)?;
            let report = RunReport::new(&result, session.graph().vertex_count());
            render(&report, options.format, &session, &result.edges)?
        }
        (AlgorithmChoice::Single(algorithm), RunMode::Step) => {
            let player = session.run_stepwise(algorithm)?;
            while let Some(step) = player.advance() {
                let step = *step;
                debug!(
                    "[{}] {} {}",
                    player.progress(),
                    step.kind,
                    step.edge
                );
            }
            let report = StepReport::new(player.log());
            let accepted = player.accepted_edges().to_vec();
            render(&report, options.format, &session, &accepted)?
        }
    };

    match &options.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            info!("report written to {:?}", path);
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    } else if verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }
}

fn render<T>(value: &T, format: OutputFormat, session: &Session, highlight: &[Edge]) -> Result<String>
where
    T: Serialize + Display,
{
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => io::to_json_string(value)?,
        OutputFormat::Ron => io::to_ron_string(value)?,
        OutputFormat::Dot => session.graph().to_dot(highlight),
    })
}
