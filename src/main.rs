use clap::Parser;
use loadicator::{common::dbg_id::DbgId, Error, LoadingConditionId, Report, Ship, ShipConf};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};
/// Floating equilibrium of the ship in a loading condition of the trim and stability book.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Two digit loading condition, e. g. `07`; prompted if omitted.
    condition: Option<String>,
    /// Directory of the reference documents.
    #[arg(long, default_value = "Data")]
    data_dir: PathBuf,
    /// File the results are written to.
    #[arg(long, default_value = "Results.txt")]
    output: PathBuf,
}
//
//
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
//
//
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dbgid = DbgId("loadicator".to_owned());
    let input = match &cli.condition {
        Some(condition) => condition.clone(),
        None => prompt("Enter Loading Condition: ")?,
    };
    let condition: LoadingConditionId = input.trim().parse()?;
    let ship = Ship::new(&dbgid, ShipConf::from_data_dir(&cli.data_dir));
    let result = ship.equilibrium(&condition)?;
    std::fs::write(&cli.output, Report::new(&condition, &result).to_string()).map_err(|err| {
        format!(
            "{}.run | Failed to open '{}' for writing: {}",
            dbgid,
            cli.output.display(),
            err
        )
    })?;
    println!("Results have been written to {}", cli.output.display());
    Ok(())
}
///
/// Reads a line from stdin after printing `message`.
fn prompt(message: &str) -> Result<String, Error> {
    let read = || -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    };
    read().map_err(|err| {
        Error::MalformedCondition(format!("main.prompt | Failed reading input: {}", err).into())
    })
}
