//! Contact Book entry point
//!
//! A thin command-line front end: load the data file, apply one command,
//! save if anything changed.

use std::path::PathBuf;
use std::process::ExitCode;

use contact_book::{
    Contact, ContactError, ContactForm, EditMode, LoadOutcome, RecordStore, Result, Settings,
    SortField,
};

const USAGE: &str = "\
usage: contact-book [--config PATH] <command>

commands:
  list [QUERY]                          show contacts whose name contains QUERY
  add NAME PHONE [EMAIL] [DATE]         add a contact
  edit INDEX NAME PHONE [EMAIL] [DATE]  replace the contact at INDEX
  delete INDEX                          remove the contact at INDEX
  sort [name|phone]                     sort contacts";

/// One parsed command line
#[derive(Debug)]
enum Command {
    List(Option<String>),
    Submit(EditMode, ContactForm),
    Delete(usize),
    Sort(Option<SortField>),
}

fn parse_index(s: &str) -> Option<usize> {
    s.parse().ok()
}

fn parse_form(args: &[String]) -> Option<ContactForm> {
    match args {
        [name, phone, rest @ ..] if rest.len() <= 2 => Some(ContactForm::new(
            name.as_str(),
            phone.as_str(),
            rest.first().map(String::as_str).unwrap_or(""),
            rest.get(1).map(String::as_str).unwrap_or(""),
        )),
        _ => None,
    }
}

fn parse_command(args: &[String]) -> std::result::Result<Command, String> {
    let Some((cmd, rest)) = args.split_first() else {
        return Err("missing command".to_string());
    };
    let bad = || format!("bad arguments for '{cmd}'");
    match cmd.as_str() {
        "list" if rest.len() <= 1 => Ok(Command::List(rest.first().cloned())),
        "add" => parse_form(rest)
            .map(|f| Command::Submit(EditMode::Adding, f))
            .ok_or_else(bad),
        "edit" => {
            let (index, fields) = rest.split_first().ok_or_else(bad)?;
            let index = parse_index(index).ok_or_else(bad)?;
            parse_form(fields)
                .map(|f| Command::Submit(EditMode::EditingAt(index), f))
                .ok_or_else(bad)
        }
        "delete" if rest.len() == 1 => parse_index(&rest[0]).map(Command::Delete).ok_or_else(bad),
        "sort" if rest.len() <= 1 => match rest.first() {
            None => Ok(Command::Sort(None)),
            Some(f) => SortField::from_str(f)
                .map(|f| Command::Sort(Some(f)))
                .ok_or_else(|| ContactError::UnknownSortField(f.clone()).to_string()),
        },
        _ => Err(bad()),
    }
}

fn print_row(index: usize, c: &Contact) {
    println!("{:>4}  {:<30} {:<16} {:<30} {}", index, c.name, c.phone, c.email, c.date);
}

/// Apply `command`; returns whether the store changed
fn apply(command: Command, store: &mut RecordStore, settings: &Settings) -> Result<bool> {
    match command {
        Command::List(query) => {
            if store.is_empty() {
                println!("No contacts.");
            }
            for (i, c) in store.search(query.as_deref()) {
                print_row(i, c);
            }
            Ok(false)
        }
        Command::Submit(mode, form) => {
            let index = form.submit(mode, store)?;
            if let Some(c) = store.get(index) {
                print_row(index, c);
            }
            Ok(true)
        }
        Command::Delete(index) => {
            let removed = store.delete(index)?;
            println!("Deleted {}", removed.name);
            Ok(true)
        }
        Command::Sort(field) => {
            if store.len() < 2 {
                println!("Not enough contacts to sort.");
                return Ok(false);
            }
            let field = field.unwrap_or(settings.default_sort);
            store.sort_by(field);
            log::info!("Sorted {} contacts by {}", store.len(), field.as_str());
            Ok(true)
        }
    }
}

fn run(config: PathBuf, command: Command) -> Result<()> {
    let settings = Settings::load(&config)?;
    let persistence = settings.persistence();
    let mut store = settings.new_store();

    match persistence.load_into(&mut store, &settings.data_file)? {
        LoadOutcome::Loaded { rejected, .. } if rejected > 0 => {
            eprintln!("Too many contacts loaded; {rejected} dropped.");
        }
        LoadOutcome::NoValidRecords => eprintln!("No valid contacts found in data file."),
        _ => {}
    }

    if apply(command, &mut store, &settings)? {
        persistence.save(store.contacts(), &settings.data_file)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = PathBuf::from(Settings::FILE_NAME);
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        config = PathBuf::from(args.remove(1));
        args.remove(0);
    }

    let command = match parse_command(&args) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(config, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
