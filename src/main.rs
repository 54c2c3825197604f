use std::io::{self, Write};
use log::{debug, info};
use miette::{IntoDiagnostic, Result as MResult};
use rankperm::{config::Config, input, logging, search, verify};

fn main() -> MResult<()> {
    let config = Config::from_env()?;
    logging::install(config.log_level);

    let instance = input::read_stdin()?;
    info!(
        "searching {} vertices under {} constraints",
        instance.vertices,
        instance.constraints.len(),
    );

    let (found, stats) = search::solve_with_stats(instance.vertices, &instance.constraints);
    info!("examined {} candidates, {} constraint checks", stats.candidates, stats.checks);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match found {
        Some(ranks) => {
            verify::verify(&instance, ranks.ranks())?;
            debug!("verified {}", ranks);
            writeln!(out, "{}", ranks)
        },
        None => writeln!(out, "-1"),
    };
    written.into_diagnostic()?;
    out.flush().into_diagnostic()
}
