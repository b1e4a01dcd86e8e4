use orbitsim::{Scenario, ScenarioConfig, ViewConfig};
use orbitsim::{run_orbits, run_plain};
use orbitsim::{bench_attraction, bench_euler, bench_euler_curve};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Preset name ("inner", "full") or a YAML file under scenarios/
    #[arg(short, default_value = "inner")]
    scenario: String,

    /// Override the view picked by the scenario
    #[arg(short, long)]
    view: Option<ViewConfig>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    match args.scenario.as_str() {
        "inner" => Ok(Scenario::inner_planets()),
        "full" => Ok(Scenario::solar_system()),
        file_name => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("scenarios")
                .join(file_name);
            let file = File::open(&config_path)?;
            let reader = BufReader::new(file);
            let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

            //println!("{:?}", scenario_cfg);

            Ok(Scenario::build_scenario(scenario_cfg))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut scenario = load_scenario(&args).expect("failed to load scenario");
    if let Some(view) = args.view {
        scenario.engine.view = view;
    }

    match scenario.engine.view {
        ViewConfig::Orbits => run_orbits(scenario),
        ViewConfig::Plain => run_plain(scenario),
    }

    //bench_attraction();
    //bench_euler();
    //bench_euler_curve();

    Ok(())
}
