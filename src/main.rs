#![warn(rust_2018_idioms)]

//! Counts temporal graphs on `n` vertices
//! with the selected strategy.

use happygen::{
    input::{read_settings, USAGE},
    misc::{Settings, Strategy},
    runner::{BatchRunner, ParallelRunner, SequentialRunner},
    statistics::Statistics,
    tables::Tables,
    time, Count, Error,
};

#[cfg(not(tarpaulin_include))]
fn run(settings: &Settings, tables: &Tables) -> Result<(Count, Option<Statistics>), Error> {
    let visitor = settings.count.visitor();

    match settings.strategy {
        Strategy::Sequential => {
            let mut runner = SequentialRunner::new(tables, visitor);
            if settings.statistics {
                runner = runner.collect_statistics();
            }
            let count = runner.run();
            Ok((count, runner.into_statistics()))
        }
        Strategy::Parallel => {
            let mut runner = ParallelRunner::new(tables, visitor);
            if settings.statistics {
                runner = runner.collect_statistics();
            }
            let count = runner.run();
            Ok((count, runner.into_statistics()))
        }
        Strategy::Batch => {
            let mut runner = BatchRunner::new(tables, visitor);
            if settings.statistics {
                runner = runner.collect_statistics();
            }
            let count = match settings.batch {
                Some(batch) => runner.run(batch)?,
                None => runner.run_all(),
            };
            Ok((count, runner.into_statistics()))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    env_logger::init();

    let settings = match read_settings(std::env::args().skip(1)) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{}", USAGE);
            return Err(error);
        }
    };
    log::debug!("{:?}", settings);

    if let Some(threads) = settings.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    time!(tables_time, tables, Tables::new(settings.vertices)?);
    log::info!("Tables built after {:?}", tables_time);

    let (count, statistics) = run(&settings, &tables)?;
    if let Some(statistics) = statistics {
        eprintln!("Raw Statistics: {:#?}", statistics);
    }
    println!("{}", count);

    Ok(())
}
