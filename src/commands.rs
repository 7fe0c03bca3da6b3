use crate::client::PokeApi;
use crate::config::Config;
use crate::error::AppError;
use crate::explore::LocationExplorer;
use crate::pager::{Direction, LocationPager};
use crate::pokedex::Pokedex;
use rand::Rng;

/// The command surface, one variant per entry in the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Registry order, used by the help listing.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Quit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn parse(token: &str) -> Option<Command> {
        match token {
            "help" => Some(Command::Help),
            "quit" => Some(Command::Quit),
            "map" => Some(Command::Map),
            "mapb" => Some(Command::MapBack),
            "explore" => Some(Command::Explore),
            "catch" => Some(Command::Catch),
            "inspect" => Some(Command::Inspect),
            "pokedex" => Some(Command::Pokedex),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Quit => "Quit the Pokedex",
            Command::Map => {
                "Displays the names of 20 location areas in the Pokemon world. \
                 Each subsequent call to map displays the next 20 locations, and so on. \
                 'map' lets you explore the world of Pokemon."
            }
            Command::MapBack => {
                "Similar to the map command, however, instead of displaying the next 20 \
                 locations, it displays the previous 20 locations. It's a way to go back."
            }
            Command::Explore => {
                "use 'explore [location name or id]' to see all the pokemon available at that location."
            }
            Command::Catch => "use 'catch [pokemon name or id]' to attempt to catch that pokemon.",
            Command::Inspect => "use 'inspect [pokemon]' to see a pokemon's details.",
            Command::Pokedex => "Displays the names of all caught pokemon.",
        }
    }
}

/// What the REPL loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    InvalidCommand,
    CommandError,
    Quit,
}

/// Session state behind the prompt: the API client, the RNG for catch rolls,
/// and the three process-lifetime caches.
pub struct Repl<C, R>
where
    C: PokeApi,
    R: Rng,
{
    api: C,
    rng: R,
    pager: LocationPager,
    explorer: LocationExplorer,
    pokedex: Pokedex,
}

impl<C, R> Repl<C, R>
where
    C: PokeApi,
    R: Rng,
{
    pub fn new(config: &Config, api: C, rng: R) -> Self {
        Self {
            api,
            rng,
            pager: LocationPager::new(&config.pokeapi),
            explorer: LocationExplorer::new(),
            pokedex: Pokedex::new(),
        }
    }

    /// Dispatch one input line. All output is printed directly to the
    /// console; the returned status only tells the loop whether to keep
    /// reading.
    pub async fn execute(&mut self, line: &str) -> CommandStatus {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return CommandStatus::Continue;
        };
        let args: Vec<&str> = tokens.collect();

        let Some(command) = Command::parse(token) else {
            println!("invalid command: {line}");
            return CommandStatus::InvalidCommand;
        };

        if let Err(err) = self.run(command, &args).await {
            println!("{err}");
            return CommandStatus::CommandError;
        }

        if command == Command::Quit {
            CommandStatus::Quit
        } else {
            CommandStatus::Continue
        }
    }

    async fn run(&mut self, command: Command, args: &[&str]) -> Result<(), AppError> {
        match command {
            Command::Help => self.cmd_help(args),
            Command::Quit => {
                println!("Go catch em all!");
                Ok(())
            }
            Command::Map => self.cmd_map(Direction::Forward).await,
            Command::MapBack => self.cmd_map(Direction::Backward).await,
            Command::Explore => self.cmd_explore(args).await,
            Command::Catch => self.cmd_catch(args).await,
            Command::Inspect => self.cmd_inspect(args),
            Command::Pokedex => {
                self.cmd_pokedex();
                Ok(())
            }
        }
    }

    fn cmd_help(&self, args: &[&str]) -> Result<(), AppError> {
        match args {
            [] => {
                println!("\nWelcome to the Pokedex!\n\nCommands:");
                for command in Command::ALL {
                    println!("{}: {}", command.name(), command.description());
                }
                Ok(())
            }
            [name] => match Command::parse(name) {
                Some(command) => {
                    println!("{}: {}", command.name(), command.description());
                    Ok(())
                }
                None => Err(AppError::Usage(format!("no such command: {name}"))),
            },
            _ => Err(AppError::Usage(
                "help accepts at most one command name".to_string(),
            )),
        }
    }

    async fn cmd_map(&mut self, direction: Direction) -> Result<(), AppError> {
        let which = match direction {
            Direction::Forward => "next",
            Direction::Backward => "previous",
        };
        let locations = self
            .pager
            .advance(&self.api, direction)
            .await
            .map_err(|err| err.context(&format!("unable to get the {which} map")))?;
        for location in &locations {
            println!("{location}");
        }
        Ok(())
    }

    async fn cmd_explore(&mut self, args: &[&str]) -> Result<(), AppError> {
        match args {
            [] => self.cmd_help(&["explore"]),
            [location] => {
                println!("Exploring {location} ...");
                let pokemon = self
                    .explorer
                    .explore(&self.api, location)
                    .await
                    .map_err(|err| err.context(&format!("unable to explore {location}")))?;
                println!("Found Pokemon:");
                for name in &pokemon {
                    println!(" - {name}");
                }
                Ok(())
            }
            _ => Err(AppError::Usage(
                "explore accepts only one argument".to_string(),
            )),
        }
    }

    async fn cmd_catch(&mut self, args: &[&str]) -> Result<(), AppError> {
        match args {
            [] => self.cmd_help(&["catch"]),
            [name] => {
                let caught = self
                    .pokedex
                    .catch(&self.api, &mut self.rng, name)
                    .await
                    .map_err(|err| err.context(&format!("unable to catch {name}")))?;
                println!("Threw a pokeball at {name}");
                if caught {
                    println!("{name} was caught!");
                } else {
                    println!("{name} escaped...");
                }
                Ok(())
            }
            _ => Err(AppError::Usage(
                "you can only catch one pokemon at a time".to_string(),
            )),
        }
    }

    fn cmd_inspect(&self, args: &[&str]) -> Result<(), AppError> {
        if args.is_empty() {
            return self.cmd_help(&["inspect"]);
        }
        for name in args {
            match self.pokedex.get(name) {
                Some(record) if record.caught => {
                    println!("Name: {}", record.name);
                    println!("ID: {}", record.id);
                    println!("Height: {}", record.height);
                    println!("Weight: {}", record.weight);
                    println!("Base Experience: {}", record.base_experience);
                    println!("Types:");
                    for type_name in &record.types {
                        println!("\t- {type_name}");
                    }
                    println!("Stats:");
                    for (stat, value) in &record.stats {
                        println!("\t- {stat}: {value}");
                    }
                    println!("Catch Rate: {}", record.capture_rate);
                }
                _ => println!("You have not caught a {name}"),
            }
        }
        Ok(())
    }

    fn cmd_pokedex(&self) {
        if self.pokedex.is_empty() {
            println!("You have not caught any pokemon...");
            return;
        }
        println!("Your Pokedex:");
        for (name, record) in self.pokedex.iter() {
            let status = if record.caught { "caught ✓" } else { "seen ✕" };
            println!("\t-{name} ({status})");
        }
    }
}
