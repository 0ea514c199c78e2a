// crates/list_mlta_sources/src/main.rs

use std::fs;
use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Arg, ArgAction, Command};

use collect_sidecar_sources::MissingSidecarError;
use list_mlta_sources::{list_sidecar_files, ListConfig};

fn main() -> Result<()> {
    let matches = Command::new("list_mlta_sources")
        .version("0.1.0")
        .about("Lists the .mlta.ll sidecar files for the sources compiled into an executable")
        .arg(
            Arg::new("executable_path")
                .required(true)
                .help("Path to the executable"),
        )
        .arg(
            Arg::new("root_dir")
                .short('r')
                .long("root_dir")
                .num_args(1)
                .help("Root directory path"),
        )
        .arg(
            Arg::new("shell_format")
                .short('f')
                .long("shell_format")
                .action(ArgAction::SetTrue)
                .help("Add \\ when breaking lines for shell"),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output_file")
                .num_args(1)
                .help("Output file"),
        )
        .arg(
            Arg::new("check")
                .short('c')
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Check that all the .mlta.ll files exist"),
        )
        .try_get_matches()
        .unwrap_or_else(|err| {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                process::exit(0);
            }
            // Usage errors exit with 1, not clap's default 2.
            println!("{}", err.render());
            process::exit(1);
        });

    let config = ListConfig {
        executable_path: matches
            .get_one::<String>("executable_path")
            .expect("executable_path is required")
            .clone(),
        root_dir: matches.get_one::<String>("root_dir").cloned(),
        shell_format: matches.get_flag("shell_format"),
        output_file: matches.get_one::<String>("output_file").cloned(),
        check: matches.get_flag("check"),
    };

    let output = match list_sidecar_files(&config) {
        Ok(output) => output,
        Err(err) => {
            if let Some(missing) = err.downcast_ref::<MissingSidecarError>() {
                eprintln!("{}", missing);
                process::exit(1);
            }
            return Err(err);
        }
    };

    match &config.output_file {
        Some(output_file) => {
            fs::write(output_file, &output)
                .with_context(|| format!("failed to write {}", output_file))?;
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
