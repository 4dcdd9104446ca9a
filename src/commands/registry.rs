//! Command Registry
//!
//! Static descriptors for every REPL command, looked up by exact name.

/// Which handler a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Visit,
    WhereAmI,
    Encounter,
    Catch,
    Inspect,
    Pokedex,
    Save,
    Load,
}

/// An optional switch a command understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub name: &'static str,
    pub description: &'static str,
}

/// Name, help text and handler of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Argument synopsis shown by `help`, empty for none
    pub usage: &'static str,
    pub description: &'static str,
    pub flags: &'static [Flag],
    pub kind: CommandKind,
}

const WHEREAMI_FLAGS: &[Flag] = &[
    Flag {
        name: "-r",
        description: "Shows the current region instead.",
    },
    Flag {
        name: "-l",
        description: "Shows the current location instead.",
    },
];

const BUILTIN: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "",
        description: "Shows the list of commands.",
        flags: &[],
        kind: CommandKind::Help,
    },
    CommandSpec {
        name: "exit",
        usage: "",
        description: "Exit the Pokedex.",
        flags: &[],
        kind: CommandKind::Exit,
    },
    CommandSpec {
        name: "map",
        usage: "",
        description: "Shows the next 20 location areas in the Pokemon world.",
        flags: &[],
        kind: CommandKind::Map,
    },
    CommandSpec {
        name: "mapb",
        usage: "",
        description: "Shows the previous 20 location areas in the Pokemon world.",
        flags: &[],
        kind: CommandKind::MapBack,
    },
    CommandSpec {
        name: "explore",
        usage: "[area]",
        description: "Lists the Pokemon living in an area, the current one by default.",
        flags: &[],
        kind: CommandKind::Explore,
    },
    CommandSpec {
        name: "visit",
        usage: "<area>",
        description: "Travels to a location area.",
        flags: &[],
        kind: CommandKind::Visit,
    },
    CommandSpec {
        name: "whereami",
        usage: "[-r|-l]",
        description: "Shows the player's current location area.",
        flags: WHEREAMI_FLAGS,
        kind: CommandKind::WhereAmI,
    },
    CommandSpec {
        name: "encounter",
        usage: "",
        description: "Triggers a random Pokemon encounter in the current area.",
        flags: &[],
        kind: CommandKind::Encounter,
    },
    CommandSpec {
        name: "catch",
        usage: "[pokemon]",
        description: "Throws a Pokeball, at the last encounter by default.",
        flags: &[],
        kind: CommandKind::Catch,
    },
    CommandSpec {
        name: "inspect",
        usage: "<pokemon>",
        description: "Shows the details of a caught Pokemon.",
        flags: &[],
        kind: CommandKind::Inspect,
    },
    CommandSpec {
        name: "pokedex",
        usage: "",
        description: "Lists every caught Pokemon.",
        flags: &[],
        kind: CommandKind::Pokedex,
    },
    CommandSpec {
        name: "save",
        usage: "",
        description: "Saves the current game.",
        flags: &[],
        kind: CommandKind::Save,
    },
    CommandSpec {
        name: "load",
        usage: "",
        description: "Loads the saved game.",
        flags: &[],
        kind: CommandKind::Load,
    },
];

/// Ordered collection of command descriptors.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Registry holding every built-in command.
    pub fn new() -> Self {
        Self {
            commands: BUILTIN.to_vec(),
        }
    }

    /// Looks a command up by exact name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| spec.name == name)
    }

    /// Commands in help order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Renders the `help` text.
    pub fn help_text(&self) -> String {
        let mut out = String::from(
            "Welcome to the Pokedex!\n\nusage: <command> [args...]\n\nAvailable commands:\n\n",
        );
        for spec in &self.commands {
            let synopsis = if spec.usage.is_empty() {
                spec.name.to_string()
            } else {
                format!("{} {}", spec.name, spec.usage)
            };
            out.push_str(&format!("    {:<22}{}\n", synopsis, spec.description));
            for flag in spec.flags {
                out.push_str(&format!("        {:<18}{}\n", flag.name, flag.description));
            }
        }
        out
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_by_exact_name() {
        let registry = CommandRegistry::new();

        assert_eq!(registry.get("mapb").unwrap().kind, CommandKind::MapBack);
        assert_eq!(registry.get("map").unwrap().kind, CommandKind::Map);
        assert!(registry.get("ma").is_none());
        assert!(registry.get("MAP").is_none());
    }

    #[test]
    fn test_names_unique() {
        let registry = CommandRegistry::new();
        let names: HashSet<&str> = registry.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_help_lists_commands_and_flags() {
        let help = CommandRegistry::new().help_text();

        assert!(help.starts_with("Welcome to the Pokedex!"));
        assert!(help.contains("    catch [pokemon]"));
        assert!(help.contains("Shows the current region instead."));
        assert!(help.contains("exit"));
    }
}
