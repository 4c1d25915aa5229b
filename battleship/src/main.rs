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
    collections::HashSet,
    fmt,
    io::{self, BufRead, Write},
};

use boardtracker::{
    board::{AttackResult, BoardStatus, BoardTracker, CannotPlaceReason, Coordinate},
    ships::{place_random, Line, Orientation, Ship, ShipShape, STANDARD_FLEET},
};
use clap::{value_t, App, Arg, ArgMatches};
use enumflags2::BitFlags;
use log::{info, warn};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

mod logging;

/// Largest column or row span that `show` will draw.
const MAX_SHOWN_SPAN: i32 = 26;

static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:place|put)\s+
        (?P<col>-?[0-9]+)(?:\s*,\s*|\s+)(?P<row>-?[0-9]+)\s+
        (?P<dir>\w+)\s+
        (?P<len>-?[0-9]+)$",
    )
    .unwrap()
});
static SHIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ship((?:\s+-?[0-9]+\s*,\s*-?[0-9]+)+)$").unwrap());
static CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<col>-?[0-9]+)\s*,\s*(?P<row>-?[0-9]+)").unwrap());
static FIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:fire|shoot|attack)\s+(?P<col>-?[0-9]+)(?:\s*,\s*|\s+)(?P<row>-?[0-9]+)$")
        .unwrap()
});

fn main() -> io::Result<()> {
    logging::init();
    let matches = App::new("Battleship board tracker")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place ships on a single board and fire at them.")
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("WIDTH")
                .help("width of the board")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .value_name("HEIGHT")
                .help("height of the board")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for random placement")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .help("place the standard fleet at random before reading commands"),
        )
        .get_matches();

    let mut session = Session::from_args(&matches);
    if matches.is_present("random") {
        session.randomize();
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    println!("Tracking a {} board. Type help or ? for commands.", session.tracker.dimensions());
    while let Some(line) = input.read_line_lower("> ")? {
        if !session.run(&line) {
            break;
        }
    }
    Ok(())
}

/// Commands understood by the driver.
enum Command {
    Place(Line),
    Ship(Ship),
    Fire(Coordinate),
    Status,
    Randomize,
    Show,
    Help,
    Quit,
}

/// Parse a single command, printing the reason if it is not understood.
fn parse_command(input: &str) -> Option<Command> {
    match input {
        "" => None,
        "?" | "help" | "h" => Some(Command::Help),
        "status" => Some(Command::Status),
        "randomize" | "rand" | "random" => Some(Command::Randomize),
        "show" | "board" => Some(Command::Show),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => {
            if let Some(captures) = PLACE.captures(other) {
                let start = parse_coord(&captures["col"], &captures["row"])?;
                let dir = match &captures["dir"] {
                    "h" | "horizontal" | "across" => Orientation::Horizontal,
                    "v" | "vertical" | "down" => Orientation::Vertical,
                    other => {
                        println!("invalid direction {}, choose \"h\" or \"v\"", other);
                        return None;
                    }
                };
                let len = parse_num(&captures["len"])?;
                Some(Command::Place(Line::new(dir, start, len)))
            } else if let Some(captures) = SHIP.captures(other) {
                let mut ship = Vec::new();
                for cell in CELL.captures_iter(&captures[1]) {
                    ship.push(parse_coord(&cell["col"], &cell["row"])?);
                }
                Some(Command::Ship(ship.into_iter().collect()))
            } else if let Some(captures) = FIRE.captures(other) {
                parse_coord(&captures["col"], &captures["row"]).map(Command::Fire)
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    }
}

fn parse_num(text: &str) -> Option<i32> {
    match text.parse() {
        Ok(num) => Some(num),
        Err(_) => {
            println!("invalid number: {}", text);
            None
        }
    }
}

fn parse_coord(col: &str, row: &str) -> Option<Coordinate> {
    Some(Coordinate::new(parse_num(col)?, parse_num(row)?))
}

/// One board being driven from the command line.
struct Session {
    tracker: BoardTracker,
    rng: StdRng,
    /// Shots that hit nothing. The tracker keeps no record of these.
    misses: HashSet<Coordinate>,
}

impl Session {
    /// Build the session from the parsed command-line arguments. Exits with a usage
    /// error if the dimensions are invalid.
    fn from_args(matches: &ArgMatches) -> Self {
        let width = value_t!(matches, "width", i32).unwrap_or_else(|e| e.exit());
        let height = value_t!(matches, "height", i32).unwrap_or_else(|e| e.exit());
        let tracker = match BoardTracker::new(width, height) {
            Ok(tracker) => tracker,
            Err(err) => clap::Error::with_description(
                &err.to_string(),
                clap::ErrorKind::InvalidValue,
            )
            .exit(),
        };
        let rng = match matches.value_of("seed") {
            Some(_) => {
                StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
            }
            None => StdRng::from_entropy(),
        };
        Self {
            tracker,
            rng,
            misses: HashSet::new(),
        }
    }

    /// Run one line of input. Returns false once the user asks to quit.
    fn run(&mut self, line: &str) -> bool {
        match parse_command(line) {
            None => {}
            Some(Command::Quit) => return false,
            Some(Command::Help) => print_help(),
            Some(Command::Place(line)) => match line.build() {
                Ok(ship) => self.add_ship(ship),
                Err(err) => println!("Invalid ship: {}.", err),
            },
            Some(Command::Ship(ship)) => self.add_ship(ship),
            Some(Command::Fire(coord)) => match self.tracker.take_attack(coord) {
                AttackResult::Hit => {
                    println!("hit");
                    if self.tracker.board_status() == BoardStatus::AllShipsDestroyed {
                        println!("All ships destroyed.");
                    }
                }
                AttackResult::Miss => {
                    self.misses.insert(coord);
                    println!("miss");
                }
            },
            Some(Command::Status) => println!(
                "{} ({} of {} ships afloat)",
                StatusName(self.tracker.board_status()),
                self.tracker.ships_remaining(),
                self.tracker.ships().len()
            ),
            Some(Command::Randomize) => self.randomize(),
            Some(Command::Show) => self.show(),
        }
        true
    }

    fn add_ship(&mut self, ship: Ship) {
        let len = ship.len();
        match self.tracker.add_ship(ship) {
            Ok(()) => info!("added ship covering {} cells", len),
            Err(err) => match (err.reason(), err.coord()) {
                (CannotPlaceReason::EmptyShip, _) => println!("Invalid ship: {}", err.reason()),
                (reason, Some(coord)) => println!(
                    "Invalid placement: {} at {},{}.",
                    reason, coord.column, coord.row
                ),
                (reason, None) => println!("Invalid placement: {}.", reason),
            },
        }
    }

    /// Place the standard fleet at random.
    fn randomize(&mut self) {
        match place_random(
            &mut self.tracker,
            &mut self.rng,
            &STANDARD_FLEET,
            BitFlags::<Orientation>::all(),
        ) {
            Ok(()) => println!("Placed {} ships at random.", STANDARD_FLEET.len()),
            Err(err) => warn!("random placement stopped: {}", err),
        }
    }

    /// Print the fully revealed board.
    fn show(&self) {
        let dim = self.tracker.dimensions();
        // Columns run up to the height and rows up to the width.
        let (columns, rows) = (dim.height(), dim.width());
        if columns > MAX_SHOWN_SPAN || rows > MAX_SHOWN_SPAN {
            println!("Board is too large to show ({}).", dim);
            return;
        }
        print!("   ");
        for col in 0..columns {
            print!("{:^4}", col);
        }
        println!();
        for row in 0..rows {
            print!("{:>2} ", row);
            for col in 0..columns {
                print!("{:^4}", self.cell(Coordinate::new(col, row)));
            }
            println!();
        }
    }

    fn cell(&self, coord: Coordinate) -> Cell {
        match self.tracker.ship_at(coord) {
            Some(ship) if ship.destroyed() => Cell::Sunk,
            Some(ship) if ship.is_hit(&coord) => Cell::Hit,
            Some(_) => Cell::Ship,
            None if self.misses.contains(&coord) => Cell::Miss,
            None => Cell::Empty,
        }
    }
}

/// Display helper for one cell of the revealed board.
enum Cell {
    Empty,
    Miss,
    Ship,
    Hit,
    Sunk,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Cell::Empty => "~~",
            Cell::Miss => "x",
            Cell::Ship => "##",
            Cell::Hit => "x#",
            Cell::Sunk => "X#",
        })
    }
}

/// Display helper that prints a board status in words.
struct StatusName(BoardStatus);

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            BoardStatus::Empty => "empty",
            BoardStatus::ShipsAvailable => "ships available",
            BoardStatus::AllShipsDestroyed => "all ships destroyed",
        })
    }
}

fn print_help() {
    println!(
        "Available Commands:
    place <col>,<row> <h|v> <len>   add a straight ship starting at the given cell.
    ship <col>,<row> [<col>,<row>]  add a ship covering exactly the given cells.
    fire <col>,<row>                attack the given cell.
    status                          show whether any ship is still afloat.
    randomize                       add the standard fleet (5, 4, 3, 3, 2) at random.
    show                            print the board.
    quit                            leave."
    );
}

/// Helper to read lines of input.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B: BufRead> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }

    /// Print the prompt and read one line, trimmed and converted to ascii lower case.
    /// Returns `None` at end of input.
    fn read_line_lower(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(None);
        }
        self.buf.make_ascii_lowercase();
        Ok(Some(self.buf.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            tracker: BoardTracker::default(),
            rng: StdRng::seed_from_u64(1),
            misses: HashSet::new(),
        }
    }

    #[test]
    fn parses_place() {
        match parse_command("place 0,1 h 3") {
            Some(Command::Place(line)) => {
                assert_eq!(line.start(), Coordinate::new(0, 1));
                assert_eq!(line.orientation(), Orientation::Horizontal);
                assert_eq!(line.len(), 3);
            }
            _ => panic!("place not parsed"),
        }
    }

    #[test]
    fn parses_explicit_cells() {
        match parse_command("ship 1,1 1,2 -1,3") {
            Some(Command::Ship(ship)) => {
                assert_eq!(ship.len(), 3);
                assert!(ship.occupies(&Coordinate::new(-1, 3)));
            }
            _ => panic!("ship not parsed"),
        }
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_command("launch 1,1").is_none());
        assert!(parse_command("place 1,1 diagonal 2").is_none());
        assert!(parse_command("fire 99999999999,0").is_none());
    }

    #[test]
    fn session_plays_a_board() {
        let mut session = session();
        assert!(session.run("place 2,2 v 2"));
        assert_eq!(session.tracker.ships().len(), 1);
        assert!(session.run("fire 2,2"));
        assert!(session.run("fire 5,5"));
        assert!(session.misses.contains(&Coordinate::new(5, 5)));
        assert!(session.run("fire 2,3"));
        assert_eq!(session.tracker.board_status(), BoardStatus::AllShipsDestroyed);
        assert!(!session.run("quit"));
    }

    #[test]
    fn rejected_placement_keeps_board() {
        let mut session = session();
        session.run("ship 0,0 0,1");
        session.run("place 0,1 h 3");
        assert_eq!(session.tracker.ships().len(), 1);
    }

    #[test]
    fn overlong_line_is_reported() {
        let mut session = session();
        assert!(session.run("place 2147483646,0 h 2147483647"));
        assert!(session.tracker.ships().is_empty());
    }

    #[test]
    fn randomize_places_fleet() {
        let mut session = session();
        session.run("randomize");
        assert_eq!(session.tracker.ships().len(), STANDARD_FLEET.len());
    }
}
