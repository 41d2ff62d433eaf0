use log::{debug, info};

use crate::environment::WindSample;

/// Simulated seconds between status lines.
pub const STATUS_INTERVAL_S: f64 = 2.0;

/// Periodic human-readable status for on-screen or log display.
///
/// Owns the "last observable sample" itself; the evaluation path stays pure
/// and just hands samples over. Output is fire-and-forget, never read back.
pub struct StatusReporter {
    debug_mode: bool,
    last_sample: Option<WindSample>,
    next_emit: f64,
}

impl StatusReporter {
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            last_sample: None,
            next_emit: 0.0,
        }
    }

    /// Retains the sample if it is worth showing. Last writer wins.
    pub fn record(&mut self, sample: &WindSample) {
        if sample.is_observable() {
            self.last_sample = Some(*sample);
        }
    }

    pub fn last_sample(&self) -> Option<&WindSample> {
        self.last_sample.as_ref()
    }

    /// Emits a status line every [`STATUS_INTERVAL_S`] of simulated time.
    pub fn poll(&mut self, sim_time_s: f64, zone_active: bool) -> Option<String> {
        if sim_time_s < self.next_emit {
            return None;
        }
        self.next_emit = sim_time_s + STATUS_INTERVAL_S;

        let line = if self.debug_mode {
            match &self.last_sample {
                Some(sample) => format!(
                    "thermals: speed {:.2} m/s, radial {:.2}",
                    sample.speed, sample.radial_factor
                ),
                None => "thermals: no lift sampled".to_string(),
            }
        } else if zone_active {
            "thermals: active".to_string()
        } else {
            "thermals: idle".to_string()
        };

        if self.debug_mode {
            debug!("{line}");
        } else {
            info!("{line}");
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn sample(speed: f64, radial_factor: f64) -> WindSample {
        WindSample {
            speed,
            radial_factor,
            direction: Vector3::z(),
        }
    }

    #[test]
    fn test_poll_respects_the_interval() {
        let mut reporter = StatusReporter::new(false);

        assert!(reporter.poll(0.0, false).is_some());
        assert!(reporter.poll(1.0, false).is_none());
        assert!(reporter.poll(1.9, false).is_none());
        assert!(reporter.poll(2.0, false).is_some());
        assert!(reporter.poll(3.5, false).is_none());
        assert!(reporter.poll(4.1, false).is_some());
    }

    #[test]
    fn test_terse_mode_reports_activity() {
        let mut reporter = StatusReporter::new(false);
        assert_eq!(reporter.poll(0.0, true).unwrap(), "thermals: active");
        assert_eq!(reporter.poll(2.0, false).unwrap(), "thermals: idle");
    }

    #[test]
    fn test_debug_mode_reports_last_observable_sample() {
        let mut reporter = StatusReporter::new(true);
        reporter.record(&sample(4.2, 0.8));
        // Below the observable threshold, must not replace the last sample.
        reporter.record(&sample(0.001, 0.1));

        let line = reporter.poll(0.0, true).unwrap();
        assert_eq!(line, "thermals: speed 4.20 m/s, radial 0.80");
    }

    #[test]
    fn test_debug_mode_without_samples() {
        let mut reporter = StatusReporter::new(true);
        assert_eq!(reporter.poll(0.0, true).unwrap(), "thermals: no lift sampled");
    }

    #[test]
    fn test_last_writer_wins() {
        let mut reporter = StatusReporter::new(true);
        reporter.record(&sample(1.0, 0.2));
        reporter.record(&sample(2.0, 0.4));

        assert_eq!(reporter.last_sample().unwrap().speed, 2.0);
    }
}
