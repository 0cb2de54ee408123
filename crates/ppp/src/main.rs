//! `ppp` - pretty-print JSON from a file or stdin.
//!
//! ```text
//! echo '[1, 2, 3]' | ppp --color green --box
//! ppp people.json --table --border rounded
//! ```

mod input;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use prettyprint_plus::{pprint_to, BorderStyle, Color, OutputMode, PrintOptions};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pretty-print JSON values and tables in the terminal
#[derive(Parser, Debug)]
#[command(name = "ppp", version, about)]
struct Cli {
    /// JSON file to read (stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// YAML file with default print options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Text color: red, green, yellow, blue, magenta, cyan or white
    #[arg(long, value_name = "NAME", conflicts_with = "no_color")]
    color: Option<Color>,

    /// Print without color
    #[arg(long)]
    no_color: bool,

    /// Print in bold
    #[arg(long)]
    bold: bool,

    /// Draw a box around the output
    #[arg(long = "box")]
    boxed: bool,

    /// Escape code handling: auto, term or text
    #[arg(long, value_name = "MODE")]
    output: Option<OutputMode>,

    /// Render an array of objects as a table
    #[arg(long)]
    table: bool,

    /// Table border style: light, ascii, heavy, double or rounded
    #[arg(long, value_name = "STYLE", default_value = "light")]
    border: BorderStyle,

    /// Increase log verbosity (logs go to stderr)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Config file values first, then command-line flags on top.
    fn print_options(&self) -> Result<PrintOptions> {
        let mut options = match &self.config {
            Some(path) => PrintOptions::from_file(path)?,
            None => PrintOptions::default(),
        };
        if let Some(color) = self.color {
            options = options.color(color);
        }
        if self.no_color {
            options = options.no_color();
        }
        if self.bold {
            options = options.bold(true);
        }
        if self.boxed {
            options = options.boxed(true);
        }
        if let Some(mode) = self.output {
            options = options.mode(mode);
        }
        Ok(options)
    }

    /// Prints `value` to `out`: as a table with `--table`, otherwise
    /// pretty-printed and decorated.
    fn write_output<W: Write + ?Sized>(&self, out: &mut W, value: &Value) -> Result<()> {
        let options = self.print_options()?;
        tracing::debug!(?options, "resolved print options");

        if self.table {
            let table = input::json_to_table(value, self.border)?;
            table
                .print_to(out, options.mode)
                .context("failed to write table")?;
        } else {
            pprint_to(out, value, &options).context("failed to write output")?;
        }
        Ok(())
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info,prettyprint_plus=debug,ppp=debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let value = input::read_json(cli.file.as_deref())?;
    let stdout = io::stdout();
    cli.write_output(&mut stdout.lock(), &value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    fn output_of(args: &[&str], value: &Value) -> String {
        let cli = Cli::parse_from(args);
        let mut out: Vec<u8> = Vec::new();
        cli.write_output(&mut out, value).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["ppp", "--color", "red", "--bold", "--box", "--output", "text"]);
        let options = cli.print_options().unwrap();
        assert_eq!(options.color, Some(Color::Red));
        assert!(options.bold);
        assert!(options.boxed);
        assert_eq!(options.mode, OutputMode::Text);
    }

    #[test]
    fn no_color_clears_color() {
        let cli = Cli::parse_from(["ppp", "--no-color"]);
        assert_eq!(cli.print_options().unwrap().color, None);
    }

    #[test]
    fn color_and_no_color_conflict() {
        assert!(Cli::try_parse_from(["ppp", "--color", "red", "--no-color"]).is_err());
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(Cli::try_parse_from(["ppp", "--color", "purple"]).is_err());
    }

    #[test]
    fn table_border_parses() {
        let cli = Cli::parse_from(["ppp", "data.json", "--table", "--border", "double"]);
        assert!(cli.table);
        assert_eq!(cli.border, BorderStyle::Double);
        assert_eq!(cli.file, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn table_output_as_text() {
        let value = json!([{"name": "Ann", "age": 5}, {"name": "Bob", "age": 30}]);
        let output = output_of(
            &["ppp", "--table", "--output", "text", "--border", "ascii"],
            &value,
        );
        assert_eq!(
            output,
            "\
+------+-----+
| name | age |
+------+-----+
| Ann  | 5   |
| Bob  | 30  |
+------+-----+
"
        );
    }

    #[test]
    fn table_output_keeps_bold_headers_in_term_mode() {
        let value = json!([{"id": 1}]);
        let output = output_of(&["ppp", "--table", "--output", "term"], &value);
        assert!(output.contains("\x1b[1mid\x1b[0m"));
        assert!(output.starts_with('┌'));
    }

    #[test]
    fn value_output_boxed_text() {
        let output = output_of(&["ppp", "--box", "--output", "text"], &json!([1, 2]));
        assert_eq!(output, "+----------+\n| [ 1, 2 ] |\n+----------+\n");
    }

    #[test]
    fn value_output_colored() {
        let output = output_of(&["ppp", "--color", "green", "--output", "term"], &json!({"k": "v"}));
        assert_eq!(output, "\x1b[92m{\n  k: v\n}\x1b[0m\n");
    }

    #[test]
    fn table_output_rejects_scalars() {
        let cli = Cli::parse_from(["ppp", "--table"]);
        let mut out: Vec<u8> = Vec::new();
        assert!(cli.write_output(&mut out, &json!(7)).is_err());
        assert!(out.is_empty());
    }
}
