use anyhow::Result;

use banknorm_cli::pipeline::{RunOptions, run};
use banknorm_cli::summary::profiles_table;
use banknorm_cli::types::{ProfileChoice, RunResult};
use banknorm_ingest::LoadOptions;
use banknorm_profiles::{PROFILE_DIR_ENV_VAR, ProfileRegistry, profile_dir};

use crate::cli::Cli;

pub fn run_list_profiles() {
    let registry = ProfileRegistry::builtin();
    println!("{}", profiles_table(&registry));
    match profile_dir() {
        Some(dir) => println!("Profile directory: {}", dir.display()),
        None => println!("Set {PROFILE_DIR_ENV_VAR} to load <name>.toml profiles by name."),
    }
}

pub fn run_convert(cli: &Cli) -> Result<RunResult> {
    let input = cli
        .input
        .clone()
        .ok_or_else(|| anyhow::anyhow!("an input file is required"))?;
    let options = RunOptions {
        input,
        profile: ProfileChoice::from_args(&cli.bank, cli.profile.clone()),
        decimal: cli.decimal,
        output: cli.output.clone(),
        load: LoadOptions {
            start_row: cli.start_row,
            all_text: cli.all_text,
            delimiter: cli.delimiter,
            ..LoadOptions::default()
        },
        dry_run: cli.dry_run,
    };
    run(&options)
}
