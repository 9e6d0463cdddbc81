// Command-line interface for tohtml
//
// Reads a Markdown document on stdin and writes one self-contained HTML page: inlined
// stylesheet, table of contents, and (unless --static) the scroll-sync script.
//
// Usage:
//  tohtml [-t <title>] [-o <file>] [--static] [--ids slug|random]   - Build a page (default)
//  tohtml toc [--ids slug|random]                                   - Print the outline as JSON
//  tohtml css                                                       - Print the built-in stylesheet
//
// Configuration:
//
// Built-in defaults, then ./tohtml.toml if present, then the file given with --config, then
// command line flags. See tohtml-config/defaults/tohtml.default.toml for the keys.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, LevelFilter};
use std::io::{self, Read, Write};
use tohtml_config::{LoadError, Loader, ToHtmlConfig};
use tohtml_render::client::STYLESHEET;
use tohtml_render::{page_outline, publish, PageOptions, PageSpec, PublishArtifact};

const ID_SCHEMES: &[&str] = &["slug", "random"];

fn build_cli() -> Command {
    Command::new("tohtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown from stdin into a single self-contained HTML page")
        .long_about(
            "tohtml reads Markdown on stdin and writes one HTML page with an inlined stylesheet,\n\
            a table of contents and a scroll-synced client script.\n\n\
            Examples:\n  \
            tohtml -t 'Release notes' < NOTES.md > notes.html\n  \
            tohtml --static -o print.html < NOTES.md   # No script, plain anchors\n  \
            tohtml toc < NOTES.md                      # Outline as JSON\n  \
            tohtml css > page.css                      # Built-in stylesheet",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Document title (defaults to page.title from config)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write the page to a file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("static")
                .long("static")
                .help("Omit the scroll-sync script (print-friendly page)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tohtml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("ids")
                .long("ids")
                .value_name("SCHEME")
                .help("Heading identifier scheme")
                .value_parser(clap::builder::PossibleValuesParser::new(ID_SCHEMES))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (repeat for more detail)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("toc").about("Print the heading outline of stdin as JSON [{id, text, level}]"),
        )
        .subcommand(Command::new("css").about("Print the built-in stylesheet"))
}

fn main() {
    let matches = build_cli().get_matches();
    // Global args propagate down, so a subcommand sees flags given on either side of it.
    let verbosity = match matches.subcommand() {
        Some((_, sub_matches)) => sub_matches.get_count("verbose"),
        None => matches.get_count("verbose"),
    };
    init_logging(verbosity);

    match matches.subcommand() {
        Some(("css", _)) => {
            print!("{STYLESHEET}");
        }
        Some(("toc", sub_matches)) => {
            let config = load_cli_config(sub_matches);
            handle_toc_command(&config);
        }
        None => {
            let config = load_cli_config(&matches);
            let output = matches.get_one::<String>("output").map(|s| s.as_str());
            handle_build_command(&config, output);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// `warn` by default, `-v` info, `-vv` debug, `-vvv` trace. `RUST_LOG` wins when set.
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn load_cli_config(matches: &ArgMatches) -> ToHtmlConfig {
    let loader = Loader::new().with_optional_file("tohtml.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    apply_flag_overrides(loader, matches)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Flags layered over every configuration file.
fn apply_flag_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, LoadError> {
    if let Some(title) = matches.try_get_one::<String>("title").ok().flatten() {
        loader = loader.set_override("page.title", title.as_str())?;
    }
    if matches.try_get_one::<bool>("static").ok().flatten() == Some(&true) {
        loader = loader.set_override("toc.interactive", false)?;
    }
    if let Some(ids) = matches.get_one::<String>("ids") {
        loader = loader.set_override("toc.ids", ids.as_str())?;
    }
    Ok(loader)
}

fn read_stdin() -> String {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    }
    source
}

fn handle_build_command(config: &ToHtmlConfig, output: Option<&str>) {
    let source = read_stdin();
    let options = PageOptions::from(config);
    debug!("page options: {options:?}");

    let spec = PageSpec::new(&source, options);
    let spec = match output {
        Some(path) => spec.with_output_path(path),
        None => spec,
    };

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(html) => write_stdout(&html),
            PublishArtifact::File(_) => {}
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_toc_command(config: &ToHtmlConfig) {
    let source = read_stdin();
    let records = page_outline(&source, &PageOptions::from(config));
    match serde_json::to_string_pretty(&records) {
        Ok(json) => write_stdout(&format!("{json}\n")),
        Err(e) => {
            eprintln!("Error encoding outline: {e}");
            std::process::exit(1);
        }
    }
}

fn write_stdout(text: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Error writing output: {e}");
        std::process::exit(1);
    }
}
