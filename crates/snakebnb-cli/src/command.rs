//! Menu command parsing.
//!
//! The session reads one line per action and parses it into a tagged
//! command enum per mode, so dispatch is an exhaustive match rather than a
//! string-keyed switch. Parsing is case-insensitive and tolerant of
//! surrounding whitespace; an empty line is a no-op.

use std::str::FromStr;

/// Actions available from the host menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    CreateAccount,
    Login,
    ListCages,
    RegisterCage,
    UpdateAvailability,
    ViewBookings,
    SwitchMode,
    Help,
    Exit,
    Noop,
}

impl FromStr for HostCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" => Ok(HostCommand::CreateAccount),
            "a" => Ok(HostCommand::Login),
            "l" => Ok(HostCommand::ListCages),
            "r" => Ok(HostCommand::RegisterCage),
            "u" => Ok(HostCommand::UpdateAvailability),
            "v" => Ok(HostCommand::ViewBookings),
            "m" => Ok(HostCommand::SwitchMode),
            "?" => Ok(HostCommand::Help),
            "x" | "bye" | "exit" | "exit()" => Ok(HostCommand::Exit),
            "" => Ok(HostCommand::Noop),
            other => Err(other.to_string()),
        }
    }
}

/// Actions available from the guest menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestCommand {
    CreateAccount,
    Login,
    AddSnake,
    ViewSnakes,
    BookCage,
    ViewBookings,
    SwitchMode,
    Help,
    Exit,
    Noop,
}

impl FromStr for GuestCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" => Ok(GuestCommand::CreateAccount),
            "l" => Ok(GuestCommand::Login),
            "a" => Ok(GuestCommand::AddSnake),
            "y" => Ok(GuestCommand::ViewSnakes),
            "b" => Ok(GuestCommand::BookCage),
            "v" => Ok(GuestCommand::ViewBookings),
            "m" => Ok(GuestCommand::SwitchMode),
            "?" => Ok(GuestCommand::Help),
            "x" | "bye" | "exit" | "exit()" => Ok(GuestCommand::Exit),
            "" => Ok(GuestCommand::Noop),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_command_parsing() {
        assert_eq!("c".parse(), Ok(HostCommand::CreateAccount));
        assert_eq!(" R ".parse(), Ok(HostCommand::RegisterCage));
        assert_eq!("EXIT".parse(), Ok(HostCommand::Exit));
        assert_eq!("".parse(), Ok(HostCommand::Noop));
        assert_eq!("q".parse::<HostCommand>(), Err("q".to_string()));
    }

    #[test]
    fn test_guest_command_parsing() {
        assert_eq!("b".parse(), Ok(GuestCommand::BookCage));
        assert_eq!("y".parse(), Ok(GuestCommand::ViewSnakes));
        assert_eq!("bye".parse(), Ok(GuestCommand::Exit));
        assert_eq!("zz".parse::<GuestCommand>(), Err("zz".to_string()));
    }
}
