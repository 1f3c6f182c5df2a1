//! Service selection: which compose units take part in a lifecycle operation.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

/// Service whose startup needs every other service of the stack running.
pub const ORCHESTRATOR_SERVICE: &str = "elastic-agent";

/// Suffix of the readiness sidecar defined for every service in the
/// compose file (`<service>_is_ready`).
pub const READY_SUFFIX: &str = "_is_ready";

/// Set of compose units an operation is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSelection {
    /// No restriction: every service defined in the compose file.
    All,
    /// Exactly these units, in this order.
    Specific(Vec<String>),
}

impl ServiceSelection {
    /// Build a selection from a user request. An empty request selects all.
    #[must_use]
    pub fn from_requested(services: &[String]) -> Self {
        if services.is_empty() {
            Self::All
        } else {
            Self::Specific(services.to_vec())
        }
    }

    /// Units in the form the compose engine expects. `All` is the empty list.
    #[must_use]
    pub fn units(&self) -> &[String] {
        match self {
            Self::All => &[],
            Self::Specific(units) => units,
        }
    }

    /// Consume the selection, returning the engine form.
    #[must_use]
    pub fn into_units(self) -> Vec<String> {
        match self {
            Self::All => Vec::new(),
            Self::Specific(units) => units,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.units().is_empty()
    }
}

/// Rewrites requested services into the units handed to the compose engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSelector {
    orchestrator: String,
    ready_suffix: String,
}

impl Default for ServiceSelector {
    fn default() -> Self {
        Self::new(ORCHESTRATOR_SERVICE, READY_SUFFIX)
    }
}

impl ServiceSelector {
    #[must_use]
    pub fn new(orchestrator: impl Into<String>, ready_suffix: impl Into<String>) -> Self {
        Self {
            orchestrator: orchestrator.into(),
            ready_suffix: ready_suffix.into(),
        }
    }

    /// Name of the readiness sidecar for `service`.
    #[must_use]
    pub fn ready_unit(&self, service: &str) -> String {
        format!("{service}{}", self.ready_suffix)
    }

    /// Escalate to `All` when the orchestrator is requested anywhere in the
    /// selection; otherwise return it unchanged.
    #[must_use]
    pub fn with_dependent_services(&self, selection: ServiceSelection) -> ServiceSelection {
        let needs_all = selection
            .units()
            .iter()
            .any(|service| *service == self.orchestrator);
        if needs_all {
            ServiceSelection::All
        } else {
            selection
        }
    }

    /// Follow every selected service with its readiness sidecar.
    ///
    /// `All` is returned untouched: the engine reads an empty unit list as
    /// "every service", sidecars included.
    #[must_use]
    pub fn with_ready_services(&self, selection: ServiceSelection) -> ServiceSelection {
        match selection {
            ServiceSelection::All => ServiceSelection::All,
            ServiceSelection::Specific(services) => ServiceSelection::Specific(
                services
                    .into_iter()
                    .flat_map(|service| {
                        let ready = self.ready_unit(&service);
                        [service, ready]
                    })
                    .collect(),
            ),
        }
    }

    /// Escalation, then readiness expansion, applied to a raw request.
    #[must_use]
    pub fn expand(&self, requested: &[String]) -> ServiceSelection {
        self.with_ready_services(
            self.with_dependent_services(ServiceSelection::from_requested(requested)),
        )
    }
}
