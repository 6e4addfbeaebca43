use std::error;
use std::io;

use bib2json::{group, write_json, Parser};

use clap::Parser as CLIParser;
use env_logger::Env;
use log::info;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to the .bib file to convert
    bibfile: String,

    /// Group the entries by this field. If the field is missing in any
    /// entry, all entries are grouped under "items"
    #[clap(short, long)]
    group: Option<String>,

    /// Pretty-print the JSON output
    #[clap(short, long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let settings = Settings::parse();

    let records = Parser::from_file(&settings.bibfile)
        .map_err(|e| format!("cannot read '{}': {}", settings.bibfile, e))?
        .records()?;
    info!("read {} entries from {}", records.len(), settings.bibfile);

    let grouped = group(records, settings.group.as_deref())?;
    write_json(io::stdout().lock(), &grouped, settings.pretty)?;

    Ok(())
}
