//! Command: user actions packaged as values, queued by receivers, and wired
//! to GUI controls.
//!
//! A [`Command`] carries its kind, content, and argument list. Receivers
//! queue commands and later drain them, validating each argument; the
//! [`Gui`] binds several controls to the same command kind.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command tag: {0}")]
    UnknownTag(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Save,
    Copy,
    Cancel,
}

impl FromStr for CommandKind {
    type Err = CommandError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Save" => Ok(CommandKind::Save),
            "Copy" => Ok(CommandKind::Copy),
            "Cnl" => Ok(CommandKind::Cancel),
            other => Err(CommandError::UnknownTag(other.to_string())),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Save => "Save",
            CommandKind::Copy => "Copy",
            CommandKind::Cancel => "Cancel",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    kind: CommandKind,
    content: String,
    arguments: Vec<String>,
}

impl Command {
    pub fn new(kind: CommandKind, content: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            arguments,
        }
    }

    /// The stock command each GUI control sends when clicked.
    pub fn with_defaults(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Save => Self::new(
                kind,
                "Save this item",
                vec!["pdfFormat".to_string(), "HD".to_string()],
            ),
            CommandKind::Copy => Self::new(kind, "Copy this item", vec!["2".to_string(), "30".to_string()]),
            CommandKind::Cancel => Self::new(kind, "Cancel this operation", vec![String::new()]),
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// Queues commands of one kind and processes them on demand.
pub struct Receiver {
    kind: CommandKind,
    queue: VecDeque<Command>,
}

impl Receiver {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            queue: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn receive(&mut self, command: Command) -> String {
        self.queue.push_back(command);
        format!("{} request received!", self.kind)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Processes every queued command of this receiver's kind, in order.
    /// Commands of another kind are discarded without output.
    pub fn drain(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(command) = self.queue.pop_front() {
            if command.kind() != self.kind {
                continue;
            }
            lines.push(format!(
                "Processing the following request: {}",
                command.content()
            ));
            for argument in command.arguments() {
                lines.push(format!(
                    "Validating the following constraint: {argument} Please wait..."
                ));
            }
            lines.push(format!(
                "Your request {} has been processed!",
                command.content()
            ));
        }
        lines
    }
}

/// Several controls bound to the same few command kinds.
pub struct Gui {
    receivers: Vec<Rc<RefCell<Receiver>>>,
}

impl Gui {
    pub fn new(receivers: Vec<Rc<RefCell<Receiver>>>) -> Self {
        Self { receivers }
    }

    /// Routes a command to the first receiver of its kind.
    pub fn trigger(&self, command: Command) -> Option<String> {
        self.receivers
            .iter()
            .find(|receiver| receiver.borrow().kind() == command.kind())
            .map(|receiver| receiver.borrow_mut().receive(command))
    }

    pub fn click_save_button(&self) -> Option<String> {
        self.trigger(Command::with_defaults(CommandKind::Save))
    }

    pub fn click_save_menu_item(&self) -> Option<String> {
        self.trigger(Command::with_defaults(CommandKind::Save))
    }

    pub fn press_save_shortcut(&self) -> Option<String> {
        self.trigger(Command::with_defaults(CommandKind::Save))
    }

    pub fn click_copy_button(&self) -> Option<String> {
        self.trigger(Command::with_defaults(CommandKind::Copy))
    }

    pub fn click_copy_menu_item(&self) -> Option<String> {
        self.trigger(Command::with_defaults(CommandKind::Copy))
    }

    pub fn click_cancel_button(&self) -> Option<String> {
        self.trigger(Command::with_defaults(CommandKind::Cancel))
    }
}

/// Builds commands on behalf of the user.
pub struct Client;

impl Client {
    pub fn make_request(
        &self,
        kind: CommandKind,
        content: impl Into<String>,
        arguments: Vec<String>,
    ) -> Command {
        Command::new(kind, content, arguments)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_tags() {
        assert_eq!("Save".parse::<CommandKind>().unwrap(), CommandKind::Save);
        assert_eq!("Copy".parse::<CommandKind>().unwrap(), CommandKind::Copy);
        assert_eq!("Cnl".parse::<CommandKind>().unwrap(), CommandKind::Cancel);
        let err = "Paste".parse::<CommandKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command tag: Paste");
    }

    #[test]
    fn test_default_commands() {
        let save = Command::with_defaults(CommandKind::Save);
        assert_eq!(save.content(), "Save this item");
        assert_eq!(save.arguments(), ["pdfFormat", "HD"]);

        let copy = Command::with_defaults(CommandKind::Copy);
        assert_eq!(copy.content(), "Copy this item");
        assert_eq!(copy.arguments(), ["2", "30"]);

        let cancel = Command::with_defaults(CommandKind::Cancel);
        assert_eq!(cancel.content(), "Cancel this operation");
        assert_eq!(cancel.arguments(), [""]);
    }

    #[test]
    fn test_receive_acknowledges_and_queues() {
        let mut receiver = Receiver::new(CommandKind::Save);
        let receipt = receiver.receive(Command::with_defaults(CommandKind::Save));
        assert_eq!(receipt, "Save request received!");
        assert_eq!(receiver.len(), 1);
    }

    #[test]
    fn test_drain_validates_each_argument() {
        let mut receiver = Receiver::new(CommandKind::Save);
        receiver.receive(Command::with_defaults(CommandKind::Save));
        assert_eq!(
            receiver.drain(),
            vec![
                "Processing the following request: Save this item",
                "Validating the following constraint: pdfFormat Please wait...",
                "Validating the following constraint: HD Please wait...",
                "Your request Save this item has been processed!",
            ]
        );
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_drain_skips_foreign_kinds() {
        let mut receiver = Receiver::new(CommandKind::Save);
        receiver.receive(Command::with_defaults(CommandKind::Copy));
        receiver.receive(Command::with_defaults(CommandKind::Save));
        let lines = receiver.drain();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Processing the following request: Save this item");
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_cancel_validates_its_empty_argument() {
        let mut receiver = Receiver::new(CommandKind::Cancel);
        receiver.receive(Command::with_defaults(CommandKind::Cancel));
        let lines = receiver.drain();
        assert_eq!(
            lines[1],
            "Validating the following constraint:  Please wait..."
        );
    }

    #[test]
    fn test_gui_routes_by_kind() {
        let save = Rc::new(RefCell::new(Receiver::new(CommandKind::Save)));
        let copy = Rc::new(RefCell::new(Receiver::new(CommandKind::Copy)));
        let gui = Gui::new(vec![Rc::clone(&save), Rc::clone(&copy)]);

        assert_eq!(gui.click_save_button().as_deref(), Some("Save request received!"));
        assert_eq!(gui.press_save_shortcut().as_deref(), Some("Save request received!"));
        assert_eq!(gui.click_copy_menu_item().as_deref(), Some("Copy request received!"));
        // No cancel receiver is registered.
        assert_eq!(gui.click_cancel_button(), None);

        assert_eq!(save.borrow().len(), 2);
        assert_eq!(copy.borrow().len(), 1);
    }

    #[test]
    fn test_client_builds_custom_commands() {
        let client = Client;
        let command = client.make_request(
            CommandKind::Save,
            "Save this file",
            vec!["pdfFormat".to_string(), "SD".to_string()],
        );
        assert_eq!(command.kind(), CommandKind::Save);
        assert_eq!(command.content(), "Save this file");
        assert_eq!(command.arguments(), ["pdfFormat", "SD"]);
    }
}
