use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::Result;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use tsvcut::{AppConfig, ConfigManager, Options, Selection, APP_NAME};
use tsvcut_cli::Args;

/// Merge parsed arguments with the on-disk config into run options.
/// Arguments pick the data path, filter, and selection; the config supplies
/// the loader and formatter knobs.
fn build_options(args: &Args, config: &AppConfig) -> Options {
    let selection = if !args.colnums.is_empty() {
        Selection::Indices(args.colnums.clone())
    } else {
        Selection::Names(args.cols.clone())
    };

    let mut opts = Options::new(args.path.clone(), selection);
    opts.filter = args.filter.clone();
    opts.read.skip_blank_lines = config.input.skip_blank_lines;
    opts.separator = config.output.separator.clone();
    opts
}

/// Logging goes to stderr; stdout is reserved for row output.
fn init_logging(debug_enabled: bool) {
    let default_filter = if debug_enabled { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            // Any malformed invocation exits 1, like a missing data file.
            e.print()?;
            std::process::exit(1);
        }
    };

    let (config, config_err) = match ConfigManager::new(APP_NAME).and_then(|m| AppConfig::load(&m))
    {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(config.debug.enabled);
    if let Some(e) = config_err {
        debug!("config load failed, using defaults: {e:#}");
    }
    debug!(path = %args.path.display(), "startup");

    let opts = build_options(&args, &config);
    let stdout = std::io::stdout();
    if let Err(e) = tsvcut::run(&opts, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn args_select_index_mode() {
        let args = Args::try_parse_from(["tsvcut", "d.tsv", "--colnums", "0", "2"]).unwrap();
        let opts = build_options(&args, &AppConfig::default());
        assert_eq!(opts.path, PathBuf::from("d.tsv"));
        assert_eq!(opts.selection, Selection::Indices(vec![0, 2]));
        assert_eq!(opts.separator, "\t");
        assert!(opts.read.skip_blank_lines);
    }

    #[test]
    fn args_select_name_mode_with_filter() {
        let args =
            Args::try_parse_from(["tsvcut", "d.tsv", "--filter", "5", "--cols", "age"]).unwrap();
        let opts = build_options(&args, &AppConfig::default());
        assert_eq!(opts.selection, Selection::Names(vec!["age".into()]));
        assert_eq!(opts.filter.as_deref(), Some("5"));
    }

    #[test]
    fn config_knobs_reach_options() {
        let args = Args::try_parse_from(["tsvcut", "d.tsv", "--colnums", "0"]).unwrap();
        let mut config = AppConfig::default();
        config.output.separator = ",".into();
        config.input.skip_blank_lines = false;
        let opts = build_options(&args, &config);
        assert_eq!(opts.separator, ",");
        assert!(!opts.read.skip_blank_lines);
    }
}
