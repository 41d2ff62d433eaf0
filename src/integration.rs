use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use thiserror::Error;

use crate::engine::ThermalEngine;
use crate::frame::ObserverState;
use crate::providers::{ThermalWindProvider, WindSource};

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Aerodynamics registry unavailable: {0}")]
    RegistryUnavailable(String),
    #[error("Failed to install wind function: {0}")]
    InstallFailed(String),
}

/// The external aerodynamics subsystem's wind-function slot.
///
/// The subsystem supports at most one registered wind function at a time.
/// The host implements this adapter over whatever registration mechanism it
/// actually has and passes it in; the engine never goes looking for the hook
/// itself.
pub trait AeroRegistry {
    /// Removes and returns the currently installed wind function, if any.
    fn take_installed(&mut self) -> Option<Rc<dyn WindSource>>;

    /// Installs `source` as the active wind function.
    fn install(&mut self, source: Rc<dyn WindSource>) -> Result<(), IntegrationError>;
}

/// Owns the engine's presence in the aerodynamics subsystem.
///
/// On attach it captures whatever wind function was installed before it,
/// chains to it through [`ThermalWindProvider`], and registers the composed
/// provider. On detach it puts the captured function back so the subsystem
/// is left exactly as it was found. A failed attach disables the feature:
/// one error log, then the system stays inert instead of retrying or
/// crashing the host.
pub struct ThermalWindSystem {
    engine: Rc<RefCell<ThermalEngine>>,
    provider: Option<Rc<ThermalWindProvider>>,
    previous: Option<Rc<dyn WindSource>>,
    enabled: bool,
}

impl ThermalWindSystem {
    pub fn attach(engine: Rc<RefCell<ThermalEngine>>, registry: &mut dyn AeroRegistry) -> Self {
        let previous = registry.take_installed();
        let provider = Rc::new(ThermalWindProvider::new(engine.clone(), previous.clone()));

        match registry.install(provider.clone()) {
            Ok(()) => {
                info!("thermal wind provider installed");
                Self {
                    engine,
                    provider: Some(provider),
                    previous,
                    enabled: true,
                }
            }
            Err(err) => {
                error!("could not bind to the aerodynamics wind hook: {err}; thermal lift disabled");
                // Put back whatever we removed; best effort.
                if let Some(prev) = previous {
                    if registry.install(prev).is_err() {
                        warn!("failed to reinstall the previous wind function");
                    }
                }
                Self {
                    engine,
                    provider: None,
                    previous: None,
                    enabled: false,
                }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The composed provider, for hosts that query wind directly.
    pub fn provider(&self) -> Option<&Rc<ThermalWindProvider>> {
        self.provider.as_ref()
    }

    /// Per-tick recompute; a no-op while the system is disabled.
    pub fn advance_tick(&mut self, observer: Option<&ObserverState>) {
        if self.enabled {
            self.engine.borrow_mut().advance_tick(observer);
        }
    }

    /// Restores the previously installed wind function.
    ///
    /// Restore failures are swallowed with a warning; the host is already
    /// tearing the scene down.
    pub fn detach(&mut self, registry: &mut dyn AeroRegistry) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        self.provider = None;

        let _ = registry.take_installed();
        if let Some(previous) = self.previous.take() {
            if let Err(err) = registry.install(previous) {
                warn!("failed to restore the previous wind function: {err}");
            }
        }
    }
}
