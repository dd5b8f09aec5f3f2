// File: crates/density-chart/src/main.rs
// Summary: `chart-builder` binary: reads <DIR>/data.txt, writes <DIR>/plot.png, then shows the chart.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use density_chart::builder;
use density_chart::{ChartConfig, Paths};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot stable generation against filling density", long_about = None)]
struct CliArgs {
    /// Directory holding data.txt; plot.png is written next to it
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Save the image without opening the viewer
    #[arg(long)]
    no_show: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let config = ChartConfig::default();
    let paths = Paths::in_dir(&args.dir);
    let chart = builder::run(&paths, &config)?;

    if args.no_show {
        info!("viewer disabled (--no-show)");
        return Ok(());
    }
    builder::present(chart, &config)
}
