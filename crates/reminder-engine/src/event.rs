use reminder_core::{ConfigurationChange, DocumentId};

/// Something the host reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Extension activated (runs one check against the active document)
    Activated,
    /// Text of a document changed
    DocumentChanged(DocumentId),
    /// Host settings changed
    ConfigurationChanged(ConfigurationChange),
    /// User invoked a command
    Command(Command),
}

/// Commands registered on the host command surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CheckTokens,
    ToggleModel,
    SetTokenLimit,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::CheckTokens,
        Command::ToggleModel,
        Command::SetTokenLimit,
    ];

    /// Registered command id
    pub fn id(self) -> &'static str {
        match self {
            Command::CheckTokens => "context-reminder.checkTokens",
            Command::ToggleModel => "context-reminder.toggleModel",
            Command::SetTokenLimit => "context-reminder.setTokenLimit",
        }
    }

    pub fn from_id(id: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|command| command.id() == id)
    }
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        Event::Command(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ids() {
        assert_eq!(Command::CheckTokens.id(), "context-reminder.checkTokens");
        assert_eq!(Command::ToggleModel.id(), "context-reminder.toggleModel");
        assert_eq!(Command::SetTokenLimit.id(), "context-reminder.setTokenLimit");
    }

    #[test]
    fn test_from_id() {
        for command in Command::ALL {
            assert_eq!(Command::from_id(command.id()), Some(command));
        }
        assert_eq!(Command::from_id("context-reminder.unknown"), None);
    }
}
