use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI in src/main.rs
// Build scripts can't access src/ modules, so the definition is repeated here
const ID_SCHEMES: &[&str] = &["slug", "random"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tohtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown from stdin into a single self-contained HTML page")
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Document title"),
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
                .help("Omit the scroll-sync script")
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
        .subcommand(Command::new("toc").about("Print the heading outline of stdin as JSON"))
        .subcommand(Command::new("css").about("Print the built-in stylesheet"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tohtml", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tohtml", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tohtml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
