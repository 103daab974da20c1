//! Proxy: a stand-in that controls access to an expensive service.
//!
//! The proxy starts the real service lazily on the first request, keeps a
//! request history, serves repeated requests from a cache, and rejects users
//! whose credentials do not match before delegating.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("Service access invalid")]
    Denied { user: String },
}

pub struct User {
    name: String,
    credentials: String,
}

impl User {
    pub fn new(name: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credentials: credentials.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credentials(&self) -> &str {
        &self.credentials
    }
}

pub struct Service {
    name: String,
    size_mb: u32,
    processed: u32,
}

impl Service {
    pub fn new(name: impl Into<String>, size_mb: u32) -> Self {
        Self {
            name: name.into(),
            size_mb,
            processed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_mb(&self) -> u32 {
        self.size_mb
    }

    pub fn processed(&self) -> u32 {
        self.processed
    }

    pub fn process(&mut self, request: &str) -> String {
        self.processed += 1;
        format!("{request} processed!")
    }
}

pub struct ServiceProxy {
    name: String,
    size_mb: u32,
    credentials: String,
    service: Option<Service>,
    history: Vec<String>,
    cache: Vec<(String, String)>,
}

impl ServiceProxy {
    pub fn new(name: impl Into<String>, size_mb: u32, credentials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_mb,
            credentials: credentials.into(),
            service: None,
            history: Vec::new(),
            cache: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs one request through the proxy.
    ///
    /// The cache is consulted before the credential check, so a request that
    /// already has a cached answer is served to any caller.
    pub fn request(&mut self, user: &User, request: &str) -> Result<String, AccessError> {
        let service = self
            .service
            .get_or_insert_with(|| Service::new(self.name.clone(), self.size_mb));
        self.history.push(request.to_string());

        if let Some((_, cached)) = self.cache.iter().find(|(req, _)| req == request) {
            return Ok(cached.clone());
        }

        if user.credentials() != self.credentials {
            return Err(AccessError::Denied {
                user: user.name().to_string(),
            });
        }

        let result = service.process(request);
        self.cache.push((request.to_string(), result.clone()));
        Ok(result)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of requests that actually reached the service.
    pub fn delegations(&self) -> u32 {
        self.service.as_ref().map_or(0, Service::processed)
    }

    pub fn service_started(&self) -> bool {
        self.service.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_starts_service_and_delegates() {
        let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
        let user = User::new("Ayoub", "abc");
        assert!(!proxy.service_started());

        let result = proxy.request(&user, "I want to deliver my product!").unwrap();
        assert_eq!(result, "I want to deliver my product! processed!");
        assert!(proxy.service_started());
        assert_eq!(proxy.delegations(), 1);
        assert_eq!(proxy.history(), ["I want to deliver my product!"]);
    }

    #[test]
    fn test_repeated_request_served_from_cache() {
        let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
        let user = User::new("Ayoub", "abc");
        let first = proxy.request(&user, "ship it").unwrap();
        let second = proxy.request(&user, "ship it").unwrap();
        assert_eq!(first, second);
        // Both requests are in the history, but only one reached the service.
        assert_eq!(proxy.history().len(), 2);
        assert_eq!(proxy.delegations(), 1);
    }

    #[test]
    fn test_bad_credentials_are_denied() {
        let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
        let intruder = User::new("Mallory", "xyz");
        let err = proxy.request(&intruder, "ship it").unwrap_err();
        assert_eq!(err.to_string(), "Service access invalid");
        // The service is started on request entry even when access is denied,
        // but nothing was delegated to it.
        assert!(proxy.service_started());
        assert_eq!(proxy.delegations(), 0);
        assert_eq!(proxy.history().len(), 1);
    }

    #[test]
    fn test_denied_error_records_the_user() {
        let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
        let intruder = User::new("Mallory", "xyz");
        let AccessError::Denied { user } = proxy.request(&intruder, "ship it").unwrap_err();
        assert_eq!(user, "Mallory");
    }

    #[test]
    fn test_cache_hit_bypasses_credential_check() {
        let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
        let user = User::new("Ayoub", "abc");
        let intruder = User::new("Mallory", "xyz");
        proxy.request(&user, "ship it").unwrap();

        // The cache is scanned before credentials, so the intruder gets the
        // cached answer for an already-processed request.
        let replay = proxy.request(&intruder, "ship it").unwrap();
        assert_eq!(replay, "ship it processed!");
        assert_eq!(proxy.delegations(), 1);

        // A fresh request from the same intruder is still rejected.
        assert!(proxy.request(&intruder, "something new").is_err());
    }

    #[test]
    fn test_distinct_requests_each_delegate_once() {
        let mut proxy = ServiceProxy::new("Delivery", 20, "abc");
        let user = User::new("Ayoub", "abc");
        proxy.request(&user, "one").unwrap();
        proxy.request(&user, "two").unwrap();
        proxy.request(&user, "one").unwrap();
        assert_eq!(proxy.delegations(), 2);
        assert_eq!(proxy.history(), ["one", "two", "one"]);
    }
}
