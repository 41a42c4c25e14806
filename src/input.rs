//! Command line arguments of the `happygen` binary.
use crate::{
    misc::{Settings, Strategy},
    Error,
};

pub const USAGE: &str = "Usage: happygen -n <vertices> [--strategy sequential|parallel|batch] \
[--batch <index>] [--count all|happy|non-dismountable|non-pivotable|non-both|spanner-candidates] \
[--threads <k>] [--statistics]";

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, Error>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| Error::CLIParseError(format!("Missing value for {}", flag)))
}

/// Reads the settings from the arguments following the program name.
pub fn read_settings<I>(args: I) -> Result<Settings, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut settings = Settings::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => settings.vertices = next_value(&mut args, "-n")?.parse()?,
            "--strategy" => settings.strategy = next_value(&mut args, "--strategy")?.parse()?,
            "--batch" => settings.batch = Some(next_value(&mut args, "--batch")?.parse()?),
            "--count" => settings.count = next_value(&mut args, "--count")?.parse()?,
            "--threads" => settings.threads = Some(next_value(&mut args, "--threads")?.parse()?),
            "--statistics" => settings.statistics = true,
            _ => return Err(Error::CLIParseError(format!("Unknown argument {}", arg))),
        }
    }

    if settings.vertices == 0 {
        return Err(Error::CLIParseError(
            "The number of vertices (-n) is required".to_string(),
        ));
    }
    if settings.batch.is_some() && settings.strategy != Strategy::Batch {
        return Err(Error::CLIParseError(
            "--batch requires --strategy batch".to_string(),
        ));
    }

    Ok(settings)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::misc::CountMode;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_read_settings() -> Result<(), Error> {
        let settings = read_settings(args("-n 6"))?;
        assert_eq!(
            settings,
            Settings {
                vertices: 6,
                ..Default::default()
            }
        );

        let settings = read_settings(args(
            "--strategy batch --batch 3 -n 7 --count non-both --threads 4 --statistics",
        ))?;
        assert_eq!(settings.vertices, 7);
        assert_eq!(settings.strategy, Strategy::Batch);
        assert_eq!(settings.batch, Some(3));
        assert_eq!(settings.count, CountMode::NonBoth);
        assert_eq!(settings.threads, Some(4));
        assert!(settings.statistics);
        Ok(())
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(read_settings(args("")), Err(Error::CLIParseError(_))));
        assert!(matches!(read_settings(args("-n")), Err(Error::CLIParseError(_))));
        assert!(matches!(read_settings(args("-n six")), Err(Error::CLIParseError(_))));
        assert!(matches!(
            read_settings(args("-n 5 --verbose")),
            Err(Error::CLIParseError(_))
        ));
        assert!(matches!(
            read_settings(args("-n 5 --batch 1")),
            Err(Error::CLIParseError(_))
        ));
        assert!(matches!(
            read_settings(args("-n 5 --strategy breadth_first")),
            Err(Error::SettingError(_))
        ));
    }
}
