// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use typeahead::{scan, Corpus, Item, RankingSession, SearchController};

mod cli;
use cli::{display, Cli, Commands, Input};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            options,
            json,
        } => run_search(&corpus, &query, &options, json),
        Commands::Inspect { corpus, query } => run_inspect(&corpus, query.as_deref()),
        Commands::Interactive {
            corpus,
            options,
            debounce_ms,
        } => run_interactive(&corpus, &options, debounce_ms),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `TYPEAHEAD_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TYPEAHEAD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_corpus(path: &str) -> Result<Corpus> {
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read corpus {}", path))?;
    let corpus =
        Corpus::from_json_str(&json).with_context(|| format!("failed to parse corpus {}", path))?;
    tracing::debug!(path, items = corpus.len(), "corpus loaded");
    Ok(corpus)
}

fn run_search(path: &str, query: &str, options: &cli::OptionArgs, json: bool) -> Result<()> {
    let options = options.resolve(None)?;
    let mut session = RankingSession::new(load_corpus(path)?, &options);

    if !session.triggers(query) {
        eprintln!(
            "query shorter than the minimum trigger length ({})",
            session.minimum_trigger_length()
        );
    }
    session.run(query);

    if json {
        let items: Vec<_> = session.result_items().collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        display::print_results(query, session.result_items());
    }
    Ok(())
}

fn run_inspect(path: &str, query: Option<&str>) -> Result<()> {
    let mut corpus = load_corpus(path)?;
    display::print_corpus(&corpus);

    if let Some(query) = query {
        let index = scan(&mut corpus, query);
        let groups = index.table().iter().map(|(group, range)| {
            let members: Vec<&Item> = index.results()[range.clone()]
                .iter()
                .filter_map(|&i| corpus.get(i))
                .collect();
            (group, range, members)
        });
        display::print_groups(query, groups);
    }
    Ok(())
}

fn run_interactive(path: &str, options: &cli::OptionArgs, debounce_ms: Option<u64>) -> Result<()> {
    let options = options.resolve(debounce_ms)?;
    let mut controller = SearchController::builder(load_corpus(path)?)
        .options(options)
        .on_selected(|item| println!("selected: {} ({})", item.label, item.description))
        .build();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match Input::parse(&line) {
            Ok(Input::Quit) => break,
            Ok(input) => {
                apply_input(&mut controller, input);
                // Line input is already coalesced; don't wait out the window.
                controller.flush();
                display::print_state(&controller.state());
            }
            Err(message) => eprintln!("{}", message),
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}

fn apply_input(controller: &mut SearchController, input: Input) {
    match input {
        Input::Query(text) => controller.on_query_changed(text),
        Input::Down => {
            controller.move_selection_down();
        }
        Input::Up => {
            controller.move_selection_up();
        }
        Input::Hover(index) => {
            if !controller.set_selection(index) {
                eprintln!("no result at row {}", index);
            }
        }
        Input::Commit => {
            let label = controller.commit_selection().map(|item| item.label.clone());
            // A text field echoes the label it was just given.
            if let Some(label) = label {
                controller.on_query_changed(label);
            }
        }
        Input::Blur => controller.unfocus(),
        Input::Focus => controller.focus(),
        Input::Quit => {}
    }
}
