//! Bridge: user interfaces and kernels vary independently.
//!
//! The interface side holds a boxed [`Kernel`] and delegates every low-level
//! step to it, so new interface refinements and new kernels combine without a
//! subclass cross product.

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// Memory handed to a kernel when an interface boots it.
pub const KERNEL_MEMORY_MB: u32 = 20;

#[derive(Error, Debug, PartialEq)]
pub enum BridgeError {
    #[error("unknown kernel tag: {0}")]
    UnknownKernel(String),
    #[error("no command at index {index} ({count} commands registered)")]
    CommandOutOfRange { index: usize, count: usize },
}

// ============================================================================
// Example: Implementation Side - Kernels
// ============================================================================

pub trait Kernel {
    fn send_request(&self, hardware: &str) -> String;
    fn memory_mb(&self) -> u32;
}

pub struct MonoKernel {
    memory_mb: u32,
}

impl MonoKernel {
    pub fn new(memory_mb: u32) -> Self {
        Self { memory_mb }
    }
}

impl Kernel for MonoKernel {
    fn send_request(&self, hardware: &str) -> String {
        format!("One request sent to {hardware}")
    }

    fn memory_mb(&self) -> u32 {
        self.memory_mb
    }
}

pub struct MicroKernel {
    memory_mb: u32,
}

impl MicroKernel {
    pub fn new(memory_mb: u32) -> Self {
        Self { memory_mb }
    }
}

impl Kernel for MicroKernel {
    fn send_request(&self, hardware: &str) -> String {
        format!("Multiple requests sent to {hardware}")
    }

    fn memory_mb(&self) -> u32 {
        self.memory_mb
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelKind {
    Mono,
    Micro,
}

impl KernelKind {
    pub fn boot(self, memory_mb: u32) -> Box<dyn Kernel> {
        match self {
            KernelKind::Mono => Box::new(MonoKernel::new(memory_mb)),
            KernelKind::Micro => Box::new(MicroKernel::new(memory_mb)),
        }
    }
}

impl FromStr for KernelKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mono" => Ok(KernelKind::Mono),
            "Micro" => Ok(KernelKind::Micro),
            other => Err(BridgeError::UnknownKernel(other.to_string())),
        }
    }
}

// ============================================================================
// Example: Abstraction Side - Interfaces Over a Kernel
// ============================================================================

pub struct UserInterface {
    quality: u32,
    version: String,
    date: u32,
    kernel: Box<dyn Kernel>,
}

impl UserInterface {
    pub fn new(quality: u32, version: impl Into<String>, date: u32, kind: KernelKind) -> Self {
        Self {
            quality,
            version: version.into(),
            date,
            kernel: kind.boot(KERNEL_MEMORY_MB),
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "quality {}, version {}, date {}, kernel memory {} MB",
            self.quality,
            self.version,
            self.date,
            self.kernel.memory_mb()
        )
    }

    fn dispatch(&self, hardware: &str) -> String {
        self.kernel.send_request(hardware)
    }
}

pub struct GraphicalUserInterface {
    ui: UserInterface,
    cursor: String,
}

impl GraphicalUserInterface {
    pub fn new(ui: UserInterface, cursor: impl Into<String>) -> Self {
        Self {
            ui,
            cursor: cursor.into(),
        }
    }

    pub fn show_cursor(&self) -> String {
        format!("{}\n{}", self.ui.dispatch("show Cursor!"), self.cursor)
    }

    pub fn click_cursor(&self) -> String {
        format!("{}\nCursor clicked!", self.ui.dispatch("click Cursor!"))
    }

    pub fn ui(&self) -> &UserInterface {
        &self.ui
    }
}

pub struct Terminal {
    ui: UserInterface,
    commands: Vec<String>,
}

impl Terminal {
    pub fn new(ui: UserInterface, commands: Vec<String>) -> Self {
        Self { ui, commands }
    }

    pub fn show_all_commands(&self) -> String {
        format!(
            "{}\n{}",
            self.ui.dispatch("show commands!"),
            self.commands.iter().join(", ")
        )
    }

    pub fn show_command(&self, index: usize) -> Result<String, BridgeError> {
        let command = self.command_at(index)?;
        Ok(format!("{}\n{}", self.ui.dispatch("show command!"), command))
    }

    pub fn execute_command(&self, index: usize) -> Result<String, BridgeError> {
        let command = self.command_at(index)?;
        Ok(format!(
            "{}\nCommand {} executed!",
            self.ui.dispatch("execute command!"),
            command
        ))
    }

    pub fn ui(&self) -> &UserInterface {
        &self.ui
    }

    fn command_at(&self, index: usize) -> Result<&str, BridgeError> {
        self.commands
            .get(index)
            .map(String::as_str)
            .ok_or(BridgeError::CommandOutOfRange {
                index,
                count: self.commands.len(),
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
