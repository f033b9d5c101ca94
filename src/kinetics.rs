use crate::error::CError;
use crate::plot::{render_decay, PlotOptions};
use log::debug;
use nalgebra::DVector;
use std::path::Path;

/// Parameters of a first-order decomposition `A -> products`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayParams {
    /// `[A]` at `t = 0`, in mol/L
    pub initial_concentration: f64,
    /// First-order rate constant `k`, in 1/s
    pub rate_constant: f64,
    /// Length of the sampled interval, in seconds
    pub duration: f64,
    /// Number of evenly spaced samples over `[0, duration]`
    pub steps: usize,
}

impl Default for DecayParams {
    fn default() -> Self {
        DecayParams {
            initial_concentration: 1.0,
            rate_constant: 1.0,
            duration: 10.0,
            steps: 10,
        }
    }
}

impl DecayParams {
    pub fn new(initial_concentration: f64, rate_constant: f64, duration: f64) -> Self {
        DecayParams {
            initial_concentration,
            rate_constant,
            duration,
            ..Default::default()
        }
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    fn validate(&self) -> Result<(), CError> {
        let checks = [
            ("initial concentration", self.initial_concentration),
            ("rate constant", self.rate_constant),
            ("duration", self.duration),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(CError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(CError::InvalidParameter(format!(
                    "{name} cannot be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// `[A](t) = [A]0 * exp(-k t)`
    pub fn concentration(&self, t: f64) -> f64 {
        self.initial_concentration * (-self.rate_constant * t).exp()
    }

    /// Sampling times: `steps` evenly spaced points from `0` to `duration`,
    /// both ends included.
    pub fn times(&self) -> DVector<f64> {
        match self.steps {
            0 => DVector::zeros(0),
            1 => DVector::from_element(1, 0.0),
            steps => {
                let dt = self.duration / (steps - 1) as f64;
                DVector::from_fn(steps, |i, _| i as f64 * dt)
            }
        }
    }
}

/// Concentration of `A` at each of the sampling times of `params`.
///
/// # Errors
///
/// Returns [`CError::InvalidParameter`] if a parameter is negative or not finite.
pub fn decay_series(params: &DecayParams) -> Result<DVector<f64>, CError> {
    params.validate()?;
    let series = params.times().map(|t| params.concentration(t));
    debug!(
        "sampled first-order decay: {} points over {} s",
        series.len(),
        params.duration
    );
    Ok(series)
}

/// Sample the decay and, if `figure_path` is given, save a chart of it there.
///
/// # Errors
///
/// Fails like [`decay_series`], or like [`render_decay`] when writing the figure.
pub fn kinetic_decomp(
    params: &DecayParams,
    figure_path: Option<&Path>,
) -> Result<DVector<f64>, CError> {
    let series = decay_series(params)?;
    if let Some(path) = figure_path {
        render_decay(
            &params.times(),
            &series,
            path,
            &PlotOptions::default(),
        )?;
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn default_has_ten_steps() {
        let params = DecayParams::new(2.0, 0.5, 9.0);
        assert_eq!(params.steps, 10);
        let times = params.times();
        assert_eq!(times.len(), 10);
        assert_approx_eq!(times[0], 0.0);
        assert_approx_eq!(times[1], 1.0);
        assert_approx_eq!(times[9], 9.0);
    }

    #[test]
    fn series_follows_exponential() {
        let params = DecayParams::new(2.0, 0.5, 9.0);
        let series = decay_series(&params).unwrap();
        assert_eq!(series.len(), 10);
        assert_approx_eq!(series[0], 2.0);
        for (i, value) in series.iter().enumerate() {
            assert_approx_eq!(*value, 2.0 * (-0.5 * i as f64).exp());
        }
        assert!(series.as_slice().windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn degenerate_step_counts() {
        let params = DecayParams::new(1.0, 1.0, 5.0);
        assert_eq!(decay_series(&params.with_steps(0)).unwrap().len(), 0);

        let single = decay_series(&params.with_steps(1)).unwrap();
        assert_eq!(single.len(), 1);
        assert_approx_eq!(single[0], 1.0);
    }

    #[test]
    fn zero_rate_is_constant() {
        let params = DecayParams::new(3.0, 0.0, 5.0);
        let series = decay_series(&params).unwrap();
        assert!(series.iter().all(|&c| (c - 3.0).abs() < 1e-12));
    }

    #[test]
    fn invalid_parameters() {
        for params in [
            DecayParams::new(-1.0, 1.0, 1.0),
            DecayParams::new(1.0, -1.0, 1.0),
            DecayParams::new(1.0, 1.0, f64::NAN),
            DecayParams::new(f64::INFINITY, 1.0, 1.0),
        ] {
            assert!(matches!(
                decay_series(&params),
                Err(CError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn without_figure() {
        let params = DecayParams::new(1.0, 0.1, 10.0).with_steps(5);
        let series = kinetic_decomp(&params, None).unwrap();
        assert_eq!(series, decay_series(&params).unwrap());
    }

    #[test]
    fn with_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decay.svg");
        let params = DecayParams::new(1.0, 0.1, 10.0).with_steps(50);
        let series = kinetic_decomp(&params, Some(&path)).unwrap();
        assert_eq!(series.len(), 50);
        assert!(path.exists());
    }

    #[test]
    fn figure_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decay.txt");
        let params = DecayParams::default();
        assert!(matches!(
            kinetic_decomp(&params, Some(&path)),
            Err(CError::UnsupportedFileFormat(_))
        ));
    }
}
