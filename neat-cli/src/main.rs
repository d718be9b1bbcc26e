// Command-line interface for neat
//
// Reads a cheated plain text document (or a block comment extracted
// from source code) and writes the beautified version.
//
// Usage:
//  neat <input> [-w <width>] [-o <file>]   - Beautify a document
//  neat                                    - Beautify stdin to stdout
//  neat <input> --c-comment                - Reformat a C/C++ block comment
//  neat <input> --comment --prefix "// "   - Reformat a prefixed block comment
//
// Configuration is layered: built-in defaults, then an optional
// `neat.toml` in the working directory, then a file given with
// --config, then flags.

use clap::{Arg, ArgAction, Command, ValueHint};
use neat_config::{Loader, NeatConfig};
use neat_core::RenderRules;
use std::fs;
use std::io::Read;

fn build_cli() -> Command {
    Command::new("neat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Beautifies cheated plain text documents")
        .long_about(
            "neat parses a loosely-written plain text document, where structure\n\
            may be cheated with lightweight markers (= title, * item, . item,\n\
            > quote, NOTE: ...), and renders it as strictly aligned plain text.\n\n\
            The output is stable: running neat on its own output reproduces it\n\
            byte for byte.\n\n\
            Examples:\n  \
            neat draft.txt                        # Beautify to stdout\n  \
            neat draft.txt -w 100 -o final.txt    # Wider margin, write to file\n  \
            neat notes.txt --comment --prefix '# ' # Reformat a shell comment\n  \
            git show HEAD:doc.txt | neat          # Read from stdin",
        )
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
                .value_parser(clap::value_parser!(usize))
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
                .help("Treat the input as a C/C++ block comment (/* ... */)")
                .action(ArgAction::SetTrue)
                .conflicts_with("comment"),
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
                .help("Comment line prefix; implies --comment (default from config)")
                .conflicts_with("c-comment")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("start-col")
                .long("start-col")
                .help("Column at which the comment starts in its source file")
                .value_parser(clap::value_parser!(usize))
                .default_value("0")
                .value_hint(ValueHint::Other),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    let mut rules: RenderRules = config.formatting.rules.clone().into();

    if let Some(width) = matches.get_one::<usize>("width") {
        rules.max_line_len = *width;
    }

    let input = matches.get_one::<String>("input").map(|s| s.as_str());
    let source = read_input(input);
    let start_col = *matches
        .get_one::<usize>("start-col")
        .expect("start-col has a default");

    let explicit_prefix = matches.get_one::<String>("prefix");

    let formatted = if matches.get_flag("c-comment") {
        neat_core::format_c_block_comment(&source, start_col, rules.max_line_len)
    } else if matches.get_flag("comment") || explicit_prefix.is_some() {
        let prefix = explicit_prefix.unwrap_or(&config.comment.prefix);
        neat_core::format_prefixed_block_comment(&source, start_col, rules.max_line_len, prefix)
    } else {
        neat_core::format_with_rules(&source, &rules)
    };

    let formatted = formatted.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    write_output(matches.get_one::<String>("output").map(|s| s.as_str()), &formatted);
}

fn load_cli_config(explicit_path: Option<&str>) -> NeatConfig {
    let loader = Loader::new().with_optional_file("neat.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn read_input(input: Option<&str>) -> String {
    match input {
        Some(path) if path != "-" => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        }),
        _ => {
            let mut source = String::new();

            std::io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| {
                    eprintln!("Error reading stdin: {e}");
                    std::process::exit(1);
                });

            source
        }
    }
}

fn write_output(output: Option<&str>, formatted: &str) {
    match output {
        Some(path) => {
            fs::write(path, format!("{formatted}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{formatted}"),
    }
}
