//! Command-line front end.
//!
//! One-shot commands print a rendered screen (or JSON with `--json`) and exit.
//! `browse` runs the same state machine interactively, one command per line of
//! stdin.
//!
//! # Commands
//!
//! - `search <query...>`: chapters then reference ranges matching the query
//! - `chapters [filter...]`: chapter list, all chapters when no filter is given
//! - `chapter <id>`: full chapter content
//! - `ranges [category]`: reference range tables
//! - `stats`: content statistics
//! - `browse`: interactive navigation
//!
//! # Browse Commands
//!
//! - `j` / `k`: Move down / up
//! - empty line: Open the highlighted row
//! - `:next`, `:prev`, `:home`, `:chapters`, `:search`, `:about`: Switch tabs
//! - `:open <id>`: Open a chapter
//! - `:back`: Back to the chapter list
//! - `:clear`: Clear the query
//! - `:q`: Quit
//! - any other text (or `/text`): Replace the query on list and search screens

use bloodref::app::{handle_event, Action, AppState, Event, Screen, Tab};
use bloodref::domain::RangeEntry;
use bloodref::observability::init_tracing;
use bloodref::ui::{self, DEFAULT_WIDTH};
use bloodref::{initialize, BloodRefError, Config, Result};
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

const USAGE: &str = "\
Usage: bloodref [options] <command> [args]

Commands:
  search <query...>     Search chapters and reference ranges
  chapters [filter...]  List chapters, optionally filtered
  chapter <id>          Show a chapter
  ranges [category]     Show reference ranges
  stats                 Show content statistics
  browse                Navigate interactively (one command per line)

Options:
  --json                Print JSON instead of text
  --no-color            Disable ANSI colours
  --theme <name>        Use a theme by name
  --width <n>           Line width (default: $COLUMNS or 80)
  -h, --help            Show this help";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Chapters(String),
    Chapter(u32),
    Ranges(Option<String>),
    Stats,
    Browse,
    Help,
}

#[derive(Debug)]
struct Cli {
    command: Command,
    json: bool,
    no_color: bool,
    theme: Option<String>,
    width: Option<usize>,
}

fn parse_args(args: &[String]) -> Result<Cli> {
    let mut json = false;
    let mut no_color = false;
    let mut theme = None;
    let mut width = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--no-color" => no_color = true,
            "--theme" => {
                let name = iter
                    .next()
                    .ok_or_else(|| BloodRefError::Usage("--theme requires a name".to_string()))?;
                theme = Some(name.clone());
            }
            "--width" => {
                let n = iter
                    .next()
                    .and_then(|v| v.parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| BloodRefError::Usage("--width requires a positive number".to_string()))?;
                width = Some(n);
            }
            "-h" | "--help" => positional.insert(0, "help"),
            other if other.starts_with("--") => {
                return Err(BloodRefError::Usage(format!("unknown option {other}")));
            }
            other => positional.push(other),
        }
    }

    let Some((name, rest)) = positional.split_first() else {
        return Err(BloodRefError::Usage("missing command".to_string()));
    };

    let command = match *name {
        "search" => {
            if rest.is_empty() {
                return Err(BloodRefError::Usage("search requires a query".to_string()));
            }
            Command::Search(rest.join(" "))
        }
        "chapters" => Command::Chapters(rest.join(" ")),
        "chapter" => {
            let id = rest
                .first()
                .and_then(|v| v.parse::<u32>().ok())
                .ok_or_else(|| BloodRefError::Usage("chapter requires a numeric id".to_string()))?;
            Command::Chapter(id)
        }
        "ranges" => Command::Ranges(rest.first().map(|s| (*s).to_string())),
        "stats" => Command::Stats,
        "browse" => Command::Browse,
        "help" => Command::Help,
        other => return Err(BloodRefError::Usage(format!("unknown command {other}"))),
    };

    Ok(Cli {
        command,
        json,
        no_color,
        theme,
        width,
    })
}

/// Translates one line of `browse` input into events for the current screen.
fn parse_line(line: &str, screen: Screen) -> Vec<Event> {
    let trimmed = line.trim();

    match trimmed {
        "" => return vec![Event::Select],
        "j" => return vec![Event::KeyDown],
        "k" => return vec![Event::KeyUp],
        ":q" | ":quit" => return vec![Event::Quit],
        ":next" => return vec![Event::NextTab],
        ":prev" => return vec![Event::PrevTab],
        ":back" => return vec![Event::Back],
        ":clear" => return vec![Event::ClearQuery],
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix(":open ") {
        return rest
            .trim()
            .parse::<u32>()
            .map(|id| vec![Event::OpenChapter(id)])
            .unwrap_or_default();
    }

    if let Some(name) = trimmed.strip_prefix(':') {
        return Tab::parse(name).map(|t| vec![Event::SelectTab(t)]).unwrap_or_default();
    }

    if !screen.has_search_bar() {
        return Vec::new();
    }

    let query = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let mut events = vec![Event::ClearQuery];
    events.extend(query.chars().map(Event::Char));
    events
}

fn type_query(state: &mut AppState, query: &str) -> Result<()> {
    for c in query.chars() {
        handle_event(state, &Event::Char(c))?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let mut state = initialize(config)?;
    let color = config.color && !cli.no_color && io::stdout().is_terminal();
    let width = cli
        .width
        .or_else(|| env::var("COLUMNS").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_WIDTH);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Search(query) => {
            if cli.json {
                print_json(&mut out, &state.index.search(query.as_str()).hits())?;
            } else {
                handle_event(&mut state, &Event::SelectTab(Tab::Search))?;
                type_query(&mut state, query)?;
                write!(out, "{}", ui::render(&state, color, width))?;
            }
        }
        Command::Chapters(filter) => {
            if cli.json {
                print_json(&mut out, &state.index.filter_chapters(filter.as_str()))?;
            } else {
                handle_event(&mut state, &Event::SelectTab(Tab::Chapters))?;
                type_query(&mut state, filter)?;
                write!(out, "{}", ui::render(&state, color, width))?;
            }
        }
        Command::Chapter(id) => {
            handle_event(&mut state, &Event::OpenChapter(*id))?;
            if cli.json {
                print_json(&mut out, &state.index.chapter(*id))?;
            } else {
                write!(out, "{}", ui::render(&state, color, width))?;
            }
        }
        Command::Ranges(category) => {
            let entries: Vec<&RangeEntry> = state
                .index
                .ranges()
                .filter(|e| {
                    category
                        .as_deref()
                        .map_or(true, |c| e.category.eq_ignore_ascii_case(c))
                })
                .collect();
            if entries.is_empty() {
                if let Some(category) = category {
                    return Err(BloodRefError::NotFound(format!("range category {category}")));
                }
            }
            if cli.json {
                print_json(&mut out, &entries)?;
            } else {
                write!(out, "{}", ui::render_ranges(&entries, &state.theme, color, width))?;
            }
        }
        Command::Stats => {
            if cli.json {
                print_json(&mut out, &state.stats)?;
            } else {
                write!(out, "{}", ui::render_stats(&state.stats, &state.theme, color))?;
            }
        }
        Command::Browse => browse(&mut state, &mut out, color, width)?,
    }

    Ok(())
}

fn browse(state: &mut AppState, out: &mut impl Write, color: bool, width: usize) -> Result<()> {
    write!(out, "{}", ui::render(state, color, width))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut render = false;

        for event in parse_line(&line, state.screen()) {
            match handle_event(state, &event) {
                Ok((changed, actions)) => {
                    render |= changed;
                    if actions.contains(&Action::Quit) {
                        return Ok(());
                    }
                }
                Err(e) => eprintln!("{e}"),
            }
        }

        if render {
            write!(out, "{}", ui::render(state, color, width))?;
            out.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(1);
        }
    };

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if cli.theme.is_some() {
        config.theme_name.clone_from(&cli.theme);
        config.theme_file = None;
    }

    init_tracing(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
