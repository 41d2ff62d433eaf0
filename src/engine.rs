use nalgebra::Vector3;

use crate::config::ThermalSettings;
use crate::environment::{
    altitude_ramp_factor, find_active_zone, sample_lift, solar_factor, EvaluationContext,
    WindSample, ZoneSet,
};
use crate::frame::{BodyFrame, BodyId, ObserverId, ObserverState};

/// Thermal field evaluator for a single tracked observer.
///
/// Call order contract: [`advance_tick`](Self::advance_tick) must run once
/// per physics step before any [`evaluate_at`](Self::evaluate_at) call in
/// that step. Queries arriving before the first tick see the neutral default
/// context and contribute zero wind. Everything is synchronous and
/// single-threaded; there is no locking, only this ordering contract.
pub struct ThermalEngine {
    zones: ZoneSet,
    settings: ThermalSettings,
    frame: Box<dyn BodyFrame>,
    context: EvaluationContext,
    tracked: Option<(ObserverId, BodyId)>,
}

impl ThermalEngine {
    pub fn new(zones: ZoneSet, settings: ThermalSettings, frame: Box<dyn BodyFrame>) -> Self {
        Self {
            zones,
            settings,
            frame,
            context: EvaluationContext::default(),
            tracked: None,
        }
    }

    /// Recomputes the per-tick evaluation context from the current observer.
    ///
    /// `None` means no observer is being tracked this tick (scene change,
    /// vessel destroyed); the context resets to neutral so subsequent queries
    /// contribute nothing.
    pub fn advance_tick(&mut self, observer: Option<&ObserverState>) {
        match observer {
            Some(observer) => {
                self.tracked = Some((observer.id, observer.body));
                self.context = EvaluationContext {
                    solar_factor: solar_factor(observer, self.frame.as_ref()),
                    altitude_ramp_factor: altitude_ramp_factor(
                        observer.altitude_agl,
                        self.settings.ramp_up_altitude_m,
                    ),
                    active_zone: find_active_zone(&self.zones, observer, self.frame.as_ref()),
                };
            }
            None => {
                self.tracked = None;
                self.context = EvaluationContext::default();
            }
        }
    }

    /// Whether a query for `(body, observer)` targets the tracked entity.
    ///
    /// Only one entity is evaluated at a time; queries for anything else get
    /// a zero own-contribution.
    pub fn is_query_for_tracked(&self, body: BodyId, observer: ObserverId) -> bool {
        self.tracked == Some((observer, body))
    }

    /// Lift sample at a world-frame query point using this tick's context.
    ///
    /// Many calls per tick (one per point of interest on the vehicle); each
    /// evaluates the exact query point against the cached active zone.
    pub fn evaluate_at(&self, point: &Vector3<f64>) -> WindSample {
        let zone = match self.context.active_zone.and_then(|index| self.zones.get(index)) {
            Some(zone) => zone,
            None => return WindSample::zero(),
        };
        sample_lift(
            zone,
            point,
            self.context.solar_factor,
            self.context.altitude_ramp_factor,
            self.frame.as_ref(),
        )
    }

    /// Replaces the zone set wholesale.
    ///
    /// The cached active-zone index would dangle into the old set, so it is
    /// cleared; the next tick re-resolves it against the new zones.
    pub fn reload(&mut self, zones: ZoneSet) {
        self.zones = zones;
        self.context.active_zone = None;
    }

    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    pub fn settings(&self) -> &ThermalSettings {
        &self.settings
    }

    pub fn has_active_zone(&self) -> bool {
        self.context.active_zone.is_some()
    }
}
