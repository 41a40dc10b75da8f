// src/main.rs

use clap::Parser;
use log::{error, info};
use std::error::Error;

use dt_sweep_render::cli::Args;
use dt_sweep_render::crate_version;
use dt_sweep_render::pipeline::run_analysis;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    info!("dt-sweep-render {}", crate_version());

    match run_analysis(&config) {
        Ok(summary) => {
            info!(
                "Done: {} DT value(s), {} metric chart(s){}.",
                summary.dt_count,
                summary.metric_plots.len(),
                if summary.rank_plot.is_some() { ", 1 rank chart" } else { "" }
            );
            Ok(())
        }
        Err(e) => {
            error!("Analysis failed: {e}");
            Err(e)
        }
    }
}

// src/main.rs
