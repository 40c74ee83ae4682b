// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches, ErrorKind};
use log::info;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use fleetlayout::{
    BoardDimensions, Coordinate, EditOutcome, FleetRules, FleetStore, LayoutEditor,
    OccupancyGrid, Orientation, PlayerLayout, BOARD_SIZE, MAX_SHIP_LEN,
};

/// Matcher for `--limit LEN=COUNT` values.
static LIMIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([0-9]+)\s*=\s*([0-9]+)\s*$").unwrap());

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Fleet Editor")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Interactive fleet layout editor for a 15x15 board.")
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("LEN=COUNT")
                .help("override the maximum number of ships of the given length")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|v| {
                    if LIMIT.is_match(&v) {
                        Ok(())
                    } else {
                        Err(format!("expected LEN=COUNT, got \"{}\"", v))
                    }
                }),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the randomize command")
                .takes_value(true)
                .validator(|v| {
                    v.parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| format!("seed must be a non-negative integer, got \"{}\"", v))
                }),
        )
        .get_matches();

    let rules = parse_rules(&matches);
    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().unwrap()),
        None => StdRng::from_entropy(),
    };
    info!("starting editor with rules {:?}", rules);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut editor = LayoutEditor::new(PlayerLayout::new(), rules);
    edit_layout(&mut editor, &mut rng, &mut input)?;

    println!();
    println!("Final layout:");
    show_layout(&editor);
    list_ships(&editor);
    Ok(())
}

/// Build the fleet rules from the standard table and any `--limit` overrides. Exits with
/// a usage error if an override is not allowed.
fn parse_rules(matches: &ArgMatches) -> FleetRules {
    let mut rules = FleetRules::standard();
    for value in matches.values_of("limit").into_iter().flatten() {
        // The validator already checked the format.
        let captures = LIMIT.captures(value).unwrap();
        let parsed = captures[1]
            .parse::<usize>()
            .and_then(|len| captures[2].parse::<usize>().map(|max| (len, max)));
        let (len, max) = match parsed {
            Ok(limit) => limit,
            Err(err) => clap::Error::with_description(
                &format!("invalid limit \"{}\": {}", value, err),
                ErrorKind::InvalidValue,
            )
            .exit(),
        };
        rules = match rules.with_limit(len, max) {
            Ok(rules) => rules,
            Err(err) => clap::Error::with_description(
                &format!("invalid limit \"{}\": {}", value, err),
                ErrorKind::InvalidValue,
            )
            .exit(),
        };
    }
    rules
}

/// Run the editing loop until the player quits.
fn edit_layout(
    editor: &mut LayoutEditor<PlayerLayout>,
    rng: &mut StdRng,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Toggle(Coordinate),
        Clear,
        Randomize,
        Ready,
        Edit,
        Ships,
        Help,
        Quit,
    }
    println!();
    println!("Edit your fleet. Type help or ? for commands.");
    loop {
        /// Matcher for toggle commands.
        static TOGGLE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:(?:toggle|t)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
            )
            .unwrap()
        });

        println!();
        show_layout(editor);
        show_status(editor);
        println!();

        let cmd = input.read_input_lower(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "clear" => Some(Command::Clear),
            "randomize" | "rand" | "random" => Some(Command::Randomize),
            "ready" | "done" => Some(Command::Ready),
            "edit" | "unready" => Some(Command::Edit),
            "ships" | "list" => Some(Command::Ships),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = TOGGLE.captures(other) {
                    let x = parse_axis("x", &captures["x"])?;
                    let y = parse_axis("y", &captures["y"])?;
                    Some(Command::Toggle(Coordinate::new(x, y)))
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Toggle(coord) => match editor.toggle(coord) {
                // Rejected edits have no visible effect; the reason only goes to the log.
                Ok(EditOutcome::Committed) | Ok(EditOutcome::Discarded(_)) => {}
                Ok(EditOutcome::Locked) => println!("Layout is ready. Type edit to change it."),
                Err(err) => println!("{}", err),
            },
            Command::Clear => {
                if editor.clear() == EditOutcome::Locked {
                    println!("Layout is ready. Type edit to change it.");
                }
            }
            Command::Randomize => {
                if editor.randomize(rng) == EditOutcome::Locked {
                    println!("Layout is ready. Type edit to change it.");
                }
            }
            Command::Ready => editor.store_mut().set_ready(true),
            Command::Edit => editor.store_mut().set_ready(false),
            Command::Ships => list_ships(editor),
            Command::Quit => break,
            Command::Help => {
                println!(
                    "Available Commands:
    <x>,<y>          toggle the cell at column x, row y (0-{max}).
    toggle <x> <y>   same as above.
    clear            remove every ship.
    randomize        replace the layout with a random legal fleet.
    ready            lock the layout.
    edit             unlock the layout for editing.
    ships            list the ships in the layout.
    quit             leave the editor.

Ships are straight lines of 1 to {len} cells. Ships may not touch diagonally;
cells that touch along a row or column join into one ship.",
                    max = BOARD_SIZE - 1,
                    len = MAX_SHIP_LEN,
                );
            }
        }
    }
    Ok(())
}

/// Parse one axis of a typed coordinate, complaining if it is not on the board.
fn parse_axis(name: &str, value: &str) -> Option<usize> {
    match value.parse() {
        Err(_) => {
            println!("invalid {}: {}", name, value);
            None
        }
        Ok(v) if v >= BOARD_SIZE => {
            println!("{} must be in range [0,{}], got {}", name, BOARD_SIZE - 1, v);
            None
        }
        Ok(v) => Some(v),
    }
}

/// Print the ready flag and how many ships of each length are still available.
fn show_status(editor: &LayoutEditor<PlayerLayout>) {
    if editor.store().is_ready() {
        println!("Layout is ready.");
    } else if editor.is_complete() {
        println!("Fleet complete. Type ready to lock it in.");
    }
    let remaining = editor.rules().remaining(editor.ships());
    let mut parts = remaining
        .iter()
        .rev()
        .map(|(len, left)| format!("{} x length {}", left, len));
    if let Some(first) = parts.next() {
        print!("Ships left to place: {}", first);
        for part in parts {
            print!(", {}", part);
        }
        println!();
    }
}

/// Print every ship in the layout.
fn list_ships(editor: &LayoutEditor<PlayerLayout>) {
    if editor.ships().is_empty() {
        println!("No ships placed.");
    }
    for (i, ship) in editor.ships().iter().enumerate() {
        let orientation = match ship.orientation() {
            Some(Orientation::Horizontal) => "horizontal",
            Some(Orientation::Vertical) => "vertical",
            None => "single",
        };
        println!(
            "{:>2}: length {} {} at {},{}",
            i + 1,
            ship.len(),
            orientation,
            ship.start().x,
            ship.start().y
        );
    }
}

/// Print out the layout being edited.
fn show_layout(editor: &LayoutEditor<PlayerLayout>) {
    enum LayoutCell {
        Empty,
        Ship,
    }
    impl fmt::Display for LayoutCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                LayoutCell::Empty => f.pad("~~"),
                LayoutCell::Ship => f.pad("##"),
            }
        }
    }
    let dim = BoardDimensions::default();
    let grid = match OccupancyGrid::from_ships(dim, editor.ships()) {
        Ok(grid) => grid,
        Err(err) => {
            println!("Cannot show layout: {}", err);
            return;
        }
    };
    show_board(dim.rows().map(|row| {
        row.map(|coord| {
            if grid.is_occupied(coord) {
                LayoutCell::Ship
            } else {
                LayoutCell::Empty
            }
        })
    }))
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ");
    for i in 0..BOARD_SIZE {
        print!("{:^3}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^3}", cell);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
