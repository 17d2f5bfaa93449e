//! Interactive session: each input line becomes one controller event.

use std::io::{self, BufRead, Write};

use anyhow::bail;

use docsearch_core::layout::Density;
use docsearch_core::{FacetKind, QueryController, SearchEvent, SearchIndex};

use crate::output::{format_facets, format_human};

#[derive(Debug, PartialEq)]
pub enum Command {
    Event(SearchEvent),
    Facets,
    Help,
    Quit,
}

/// Plain text searches, an empty line clears the search, `/` introduces a command.
pub fn parse_line(line: &str, current_page_size: usize) -> anyhow::Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Event(SearchEvent::TextChanged(None)));
    }
    if !line.starts_with('/') {
        return Ok(Command::Event(SearchEvent::TextChanged(Some(line.to_string()))));
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["/quit" | "/q"] => Ok(Command::Quit),
        ["/help" | "/h"] => Ok(Command::Help),
        ["/facets" | "/f"] => Ok(Command::Facets),
        [cmd @ ("/cat" | "/type"), name, state] => {
            let group = if *cmd == "/cat" { FacetKind::Category } else { FacetKind::Type };
            let value = match *state {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                other => bail!("expected on/off, got '{}'", other),
            };
            Ok(Command::Event(SearchEvent::FacetToggled { group, name: name.to_string(), value }))
        }
        ["/page", number] => Ok(Command::Event(SearchEvent::PageChanged {
            page_size: current_page_size,
            page_number: number.parse()?,
        })),
        ["/page", size, number] => Ok(Command::Event(SearchEvent::PageChanged {
            page_size: size.parse()?,
            page_number: number.parse()?,
        })),
        _ => bail!("unknown command '{}', try /help", line),
    }
}

fn show_help() {
    println!("Commands:");
    println!("  <text>                 - Search for text");
    println!("  <empty line>           - Clear the search");
    println!("  /cat NAME on|off       - Toggle a category facet");
    println!("  /type NAME on|off      - Toggle a type facet");
    println!("  /page [SIZE] N         - Show page N (SIZE is 5, 10 or 20)");
    println!("  /facets                - Show facet counts for the current results");
    println!("  /help                  - Show this help message");
    println!("  /quit                  - Exit");
}

pub fn run<I: SearchIndex>(controller: &mut QueryController<I>, density: Density, with_facets: bool) -> anyhow::Result<()> {
    println!("🔍 Interactive docs search ({} documents indexed)", controller.index().len());
    show_help();
    if controller.query_state().searchable_text().is_some() {
        print!("{}", format_human(controller, density, with_facets));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("search> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match parse_line(&line, controller.page_view().page_size().get()) {
            Ok(command) => command,
            Err(e) => {
                println!("❌ {}", e);
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => show_help(),
            Command::Facets => print!("{}", format_facets(&controller.facet_counts())),
            Command::Event(event) => match controller.on_event(event) {
                Ok(()) => print!("{}", format_human(controller, density, with_facets)),
                Err(e) if e.is_recoverable() => println!("❌ {}", e),
                Err(e) => return Err(e.into()),
            },
        }
    }
    Ok(())
}
