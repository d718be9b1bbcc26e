use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("neat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Beautifies cheated plain text documents")
        .arg(
            Arg::new("input")
                .help("Input file path (stdin if omitted or '-')")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .help("Maximum line length")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a neat.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("c-comment")
                .long("c-comment")
                .help("Treat the input as a C/C++ block comment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("comment")
                .long("comment")
                .help("Treat the input as a prefixed block comment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Comment line prefix used with --comment")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("start-col")
                .long("start-col")
                .help("Column at which the comment starts in its source file")
                .value_hint(ValueHint::Other),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "neat", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "neat", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "neat", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
