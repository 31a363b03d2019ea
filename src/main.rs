use anyhow::Context;
use clap::Parser;
use hsuanwu::cli::Options;
use hsuanwu::logging::{self, LogReporter};
use hsuanwu::trainer::DryRun;
use std::process::ExitCode;

fn run(opts: &Options) -> anyhow::Result<()> {
    hsuanwu::launch(&opts.config, &opts.overrides, &mut DryRun, LogReporter)
        .with_context(|| format!("experiment {} aborted", opts.config.display()))
}

fn main() -> ExitCode {
    let opts = Options::parse();
    if let Err(err) = logging::init(!opts.no_color) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
