use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use log::{debug, warn};
use nalgebra::Vector3;
use thiserror::Error;

use crate::engine::ThermalEngine;
use crate::environment::WindSample;
use crate::frame::{BodyId, ObserverId};

#[derive(Error, Debug)]
pub enum WindSourceError {
    #[error("Wind source unavailable: {0}")]
    Unavailable(String),
    #[error("Wind source failed: {0}")]
    Failed(String),
}

/// An independently owned producer of wind vectors.
///
/// This is both the shape of an upstream provider the engine chains with and
/// the shape the engine itself exposes to the aerodynamics subsystem. A
/// source may fail; the caller decides what a failure means.
pub trait WindSource {
    fn sample(
        &self,
        body: BodyId,
        observer: ObserverId,
        point: &Vector3<f64>,
    ) -> Result<Vector3<f64>, WindSourceError>;
}

/// Result of one composed wind query.
#[derive(Debug, Clone, Copy)]
pub struct CompositionResult {
    /// Own contribution plus whatever the upstream source produced.
    pub total: Vector3<f64>,
    /// The thermal field's own sample, for telemetry.
    pub own_sample: WindSample,
}

/// Composes the thermal field's lift with a previously installed provider.
///
/// The upstream source is ordinary owned state captured at install time, not
/// a global slot. Upstream failures and panics are contained per call: they
/// contribute zero for that call only and never suppress the thermal
/// contribution or reach the aerodynamics caller.
pub struct ThermalWindProvider {
    engine: Rc<RefCell<ThermalEngine>>,
    upstream: Option<Rc<dyn WindSource>>,
    debug_mode: bool,
}

impl ThermalWindProvider {
    pub fn new(engine: Rc<RefCell<ThermalEngine>>, upstream: Option<Rc<dyn WindSource>>) -> Self {
        let debug_mode = engine.borrow().settings().debug_mode;
        Self {
            engine,
            upstream,
            debug_mode,
        }
    }

    pub fn has_upstream(&self) -> bool {
        self.upstream.is_some()
    }

    /// Composed wind at `point` for a query attributed to `(body, observer)`.
    ///
    /// Queries for anything other than the tracked entity get a zero own
    /// contribution; the upstream source is still consulted either way so its
    /// effect is never dropped.
    pub fn query(
        &self,
        body: BodyId,
        observer: ObserverId,
        point: &Vector3<f64>,
    ) -> CompositionResult {
        let own_sample = {
            let engine = self.engine.borrow();
            if engine.is_query_for_tracked(body, observer) {
                engine.evaluate_at(point)
            } else {
                WindSample::zero()
            }
        };

        let mut total = own_sample.velocity();
        if let Some(upstream) = &self.upstream {
            total += self.sample_upstream(upstream.as_ref(), body, observer, point);
        }

        CompositionResult { total, own_sample }
    }

    fn sample_upstream(
        &self,
        upstream: &dyn WindSource,
        body: BodyId,
        observer: ObserverId,
        point: &Vector3<f64>,
    ) -> Vector3<f64> {
        let outcome = catch_unwind(AssertUnwindSafe(|| upstream.sample(body, observer, point)));
        match outcome {
            Ok(Ok(wind)) if wind.iter().all(|c| c.is_finite()) => wind,
            Ok(Ok(_)) => {
                if self.debug_mode {
                    debug!("upstream wind source returned a non-finite vector, ignoring");
                }
                Vector3::zeros()
            }
            Ok(Err(err)) => {
                if self.debug_mode {
                    debug!("upstream wind source failed: {err}");
                }
                Vector3::zeros()
            }
            Err(_) => {
                warn!("upstream wind source panicked, ignoring for this call");
                Vector3::zeros()
            }
        }
    }
}

impl WindSource for ThermalWindProvider {
    fn sample(
        &self,
        body: BodyId,
        observer: ObserverId,
        point: &Vector3<f64>,
    ) -> Result<Vector3<f64>, WindSourceError> {
        Ok(self.query(body, observer, point).total)
    }
}
