//! Chain of Responsibility: request checks that retry themselves with doubled
//! capacity before giving up.
//!
//! Every handler construction is recorded in an [`InstanceLedger`], and a
//! handler whose capacity falls short keeps spawning stronger replacements
//! until the ledger hits [`INSTANCE_LIMIT`]. The dispatcher ([`BaseHandler`])
//! holds whichever concrete handler is current and is re-pointed explicitly
//! between stages.

use thiserror::Error;

/// A handler at or above this capacity serves the request directly.
pub const CAPACITY_THRESHOLD: u32 = 20;
/// Retry storms stop once this many handlers of one kind exist.
pub const INSTANCE_LIMIT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerKind {
    Authenticate,
    Authorize,
    Validate,
}

/// Counts how many handlers of each kind have been constructed.
#[derive(Default, Debug)]
pub struct InstanceLedger {
    authenticate: u32,
    authorize: u32,
    validate: u32,
}

impl InstanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: HandlerKind) -> u32 {
        match kind {
            HandlerKind::Authenticate => self.authenticate,
            HandlerKind::Authorize => self.authorize,
            HandlerKind::Validate => self.validate,
        }
    }

    fn record(&mut self, kind: HandlerKind) {
        match kind {
            HandlerKind::Authenticate => self.authenticate += 1,
            HandlerKind::Authorize => self.authorize += 1,
            HandlerKind::Validate => self.validate += 1,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum HandlerError {
    #[error("Insufficient Authentication Capacity")]
    Authentication,
    #[error("Insufficient Authorization capacity")]
    Authorization,
    #[error("Insufficient Validation capacity")]
    Validation,
}

pub trait RequestHandler {
    fn process_request(
        &self,
        request: &str,
        ledger: &mut InstanceLedger,
        log: &mut Vec<String>,
    ) -> Result<(), HandlerError>;
}

pub struct Authenticate {
    capacity: u32,
}

impl Authenticate {
    pub fn new(capacity: u32, ledger: &mut InstanceLedger) -> Self {
        ledger.record(HandlerKind::Authenticate);
        Self { capacity }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl RequestHandler for Authenticate {
    fn process_request(
        &self,
        request: &str,
        ledger: &mut InstanceLedger,
        log: &mut Vec<String>,
    ) -> Result<(), HandlerError> {
        if self.capacity >= CAPACITY_THRESHOLD {
            log.push(format!("{request}: authenticated!"));
            return Ok(());
        }
        // Undersized: spawn doubled-capacity replacements until the ledger is
        // full, then report the shortfall. Replacement successes are logged
        // but do not rescue this handler.
        while ledger.count(HandlerKind::Authenticate) < INSTANCE_LIMIT {
            let retry = Authenticate::new(2 * self.capacity, ledger);
            retry.process_request(request, ledger, log)?;
        }
        Err(HandlerError::Authentication)
    }
}

pub struct Authorize {
    capacity: u32,
}

impl Authorize {
    pub fn new(capacity: u32, ledger: &mut InstanceLedger) -> Self {
        ledger.record(HandlerKind::Authorize);
        Self { capacity }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl RequestHandler for Authorize {
    fn process_request(
        &self,
        request: &str,
        ledger: &mut InstanceLedger,
        log: &mut Vec<String>,
    ) -> Result<(), HandlerError> {
        if self.capacity >= CAPACITY_THRESHOLD {
            log.push(format!("{request}: auhtorized!"));
            return Ok(());
        }
        while ledger.count(HandlerKind::Authorize) < INSTANCE_LIMIT {
            let retry = Authorize::new(2 * self.capacity, ledger);
            retry.process_request(request, ledger, log)?;
            // Authorization stops retrying as soon as the doubled capacity
            // would clear the threshold.
            if 2 * self.capacity >= CAPACITY_THRESHOLD {
                break;
            }
        }
        Err(HandlerError::Authorization)
    }
}

pub struct Validate {
    capacity: u32,
}

impl Validate {
    pub fn new(capacity: u32, ledger: &mut InstanceLedger) -> Self {
        ledger.record(HandlerKind::Validate);
        Self { capacity }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl RequestHandler for Validate {
    fn process_request(
        &self,
        request: &str,
        ledger: &mut InstanceLedger,
        log: &mut Vec<String>,
    ) -> Result<(), HandlerError> {
        if self.capacity >= CAPACITY_THRESHOLD {
            log.push(format!("{request}: validated!"));
            return Ok(());
        }
        while ledger.count(HandlerKind::Validate) < INSTANCE_LIMIT {
            let retry = Validate::new(2 * self.capacity, ledger);
            retry.process_request(request, ledger, log)?;
        }
        Err(HandlerError::Validation)
    }
}

/// Dispatcher that forwards to the current concrete handler.
pub struct BaseHandler {
    current: Box<dyn RequestHandler>,
}

impl BaseHandler {
    pub fn new(initial: Box<dyn RequestHandler>) -> Self {
        Self { current: initial }
    }

    /// Points the dispatcher at the next stage of the chain.
    pub fn set_next(&mut self, next: Box<dyn RequestHandler>) {
        self.current = next;
    }
}

impl RequestHandler for BaseHandler {
    fn process_request(
        &self,
        request: &str,
        ledger: &mut InstanceLedger,
        log: &mut Vec<String>,
    ) -> Result<(), HandlerError> {
        self.current.process_request(request, ledger, log)
    }
}

// ============================================================================
// Tests
// ============================================================================
