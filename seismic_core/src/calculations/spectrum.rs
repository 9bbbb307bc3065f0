//! # Elastic Response Spectrum
//!
//! Generates the elastic acceleration response spectrum Sa(T) for a site.
//!
//! ## Spectral Shape
//!
//! ```text
//! Sa
//!  │      ┌──────────┐  η·Z·Fa
//!  │     /            \
//!  │    /              ╲_
//!  │   /                 ‾‾──___   η·Z·Fa·(Tc/T)^r
//!  │  ● Z·Fa                    ‾‾‾───
//!  └──┴──┴──────────┴───────────────────── T
//!     0  T0         Tc                   4 s
//! ```
//!
//! - T = 0: Sa = Z·Fa
//! - 0 < T ≤ T0: Sa = Z·Fa·(1 + (η − 1)·T/T0)
//! - T0 < T ≤ Tc: Sa = η·Z·Fa
//! - T > Tc: Sa = η·Z·Fa·(Tc/T)^r
//!
//! with T0 = 0.10·Fs·Fd/Fa and Tc = 0.55·Fs·Fd/Fa.
//!
//! The curve is sampled from 0 to 4 s at 0.01 s (401 points). Ordinates at an
//! arbitrary period are read from the nearest sample; there is no
//! interpolation.
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::calculations::spectrum::{generate, SAMPLE_COUNT};
//! use seismic_core::site::{Region, SeismicZone, SiteParameters, SoilClass};
//!
//! let site = SiteParameters::new(SeismicZone::V, SoilClass::B, Region::Sierra);
//! let spectrum = generate(&site);
//!
//! assert_eq!(spectrum.points.len(), SAMPLE_COUNT);
//! assert_eq!(spectrum.points[0].sa, 0.40);
//! assert!((spectrum.sa_at(0.2).unwrap() - 0.992).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::site::SiteParameters;

/// Period sampling step (s)
pub const PERIOD_STEP_S: f64 = 0.01;

/// Upper end of the sampled period range (s)
pub const PERIOD_MAX_S: f64 = 4.0;

/// Number of samples from 0 to PERIOD_MAX_S inclusive
pub const SAMPLE_COUNT: usize = 401;

/// Scalar parameters that define the spectral shape.
///
/// ## JSON Example
///
/// ```json
/// {
///   "z": 0.4, "fa": 1.0, "fd": 1.0, "fs": 0.75, "eta": 2.48, "r": 1.0,
///   "sa0": 0.4, "t0_s": 0.075, "tc_s": 0.4125
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumParameters {
    /// Zone factor Z
    pub z: f64,
    /// Short-period amplification Fa
    pub fa: f64,
    /// Displacement amplification Fd
    pub fd: f64,
    /// Nonlinear soil behavior factor Fs
    pub fs: f64,
    /// Plateau ratio η
    pub eta: f64,
    /// Decay exponent r
    pub r: f64,
    /// Ordinate at T = 0 (Z·Fa)
    pub sa0: f64,
    /// Start of the plateau (s)
    pub t0_s: f64,
    /// End of the plateau (s)
    pub tc_s: f64,
}

impl SpectrumParameters {
    /// Derive the spectral parameters for a site.
    pub fn for_site(site: &SiteParameters) -> Self {
        let c = site.coefficients();
        let corner = c.fs * c.fd / c.fa;
        SpectrumParameters {
            z: c.z,
            fa: c.fa,
            fd: c.fd,
            fs: c.fs,
            eta: c.eta,
            r: c.r,
            sa0: c.z * c.fa,
            t0_s: 0.1 * corner,
            tc_s: 0.55 * corner,
        }
    }

    /// Plateau ordinate η·Z·Fa
    pub fn plateau_sa(&self) -> f64 {
        self.eta * self.z * self.fa
    }

    /// Elastic ordinate Sa(T), evaluated in closed form.
    pub fn elastic_sa(&self, period_s: f64) -> f64 {
        if period_s == 0.0 {
            self.sa0
        } else if period_s <= self.t0_s {
            self.z * self.fa * (1.0 + (self.eta - 1.0) * period_s / self.t0_s)
        } else if period_s <= self.tc_s {
            self.plateau_sa()
        } else {
            self.plateau_sa() * (self.tc_s / period_s).powf(self.r)
        }
    }
}

/// One sample of the spectrum curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Period T (s)
    pub period_s: f64,
    /// Spectral acceleration Sa (g)
    pub sa: f64,
}

/// Sampled elastic response spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpectrum {
    /// Shape parameters the curve was built from
    pub parameters: SpectrumParameters,
    /// SAMPLE_COUNT samples at PERIOD_STEP_S spacing, starting at T = 0
    pub points: Vec<SpectrumPoint>,
}

impl ResponseSpectrum {
    /// Elastic ordinate at an arbitrary period, read from the nearest sample.
    ///
    /// Periods past the last sample read the last sample. `None` only when
    /// the spectrum has no samples.
    pub fn sa_at(&self, period_s: f64) -> Option<f64> {
        let last = self.points.len().checked_sub(1)?;
        self.points.get(sample_index(period_s).min(last)).map(|p| p.sa)
    }

    /// Sampled periods (s)
    pub fn periods(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.period_s).collect()
    }

    /// Sampled elastic ordinates (g)
    pub fn ordinates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sa).collect()
    }

    /// Every sampled ordinate multiplied by `factor`.
    pub fn scaled_ordinates(&self, factor: f64) -> Vec<f64> {
        self.points.iter().map(|p| p.sa * factor).collect()
    }
}

/// Index of the sample nearest to `period_s`, clamped to the sampled range.
pub fn sample_index(period_s: f64) -> usize {
    let idx = (period_s / PERIOD_STEP_S).round();
    if idx.is_nan() || idx <= 0.0 {
        0
    } else {
        (idx as usize).min(SAMPLE_COUNT - 1)
    }
}

/// Generate the sampled elastic spectrum for a site.
pub fn generate(site: &SiteParameters) -> ResponseSpectrum {
    let parameters = SpectrumParameters::for_site(site);
    let points = (0..SAMPLE_COUNT)
        .map(|i| {
            let period_s = i as f64 * PERIOD_STEP_S;
            SpectrumPoint {
                period_s,
                sa: parameters.elastic_sa(period_s),
            }
        })
        .collect();
    ResponseSpectrum { parameters, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Region, SeismicZone, SoilClass};

    const EPS: f64 = 1e-9;

    fn quito_site() -> SiteParameters {
        SiteParameters::new(SeismicZone::V, SoilClass::B, Region::Sierra)
    }

    #[test]
    fn test_sample_grid() {
        let spectrum = generate(&quito_site());
        assert_eq!(spectrum.points.len(), 401);
        assert_eq!(spectrum.points[0].period_s, 0.0);
        assert!((spectrum.points[400].period_s - 4.0).abs() < 1e-12);
        for (i, p) in spectrum.points.iter().enumerate() {
            assert!((p.period_s - i as f64 * 0.01).abs() < 1e-12);
        }
    }

    #[test]
    fn test_parameters_soil_b() {
        let params = SpectrumParameters::for_site(&quito_site());
        assert_eq!(params.sa0, 0.40);
        assert!((params.t0_s - 0.075).abs() < 1e-12);
        assert!((params.tc_s - 0.4125).abs() < 1e-12);
        assert!((params.plateau_sa() - 0.992).abs() < 1e-12);
    }

    #[test]
    fn test_zero_period_ordinate() {
        for zone in SeismicZone::ALL {
            for soil in SoilClass::ALL {
                let site = SiteParameters::new(zone, soil, Region::Costa);
                let spectrum = generate(&site);
                let c = site.coefficients();
                assert_eq!(spectrum.points[0].sa, c.z * c.fa);
            }
        }
    }

    #[test]
    fn test_branches() {
        let params = SpectrumParameters::for_site(&quito_site());
        // Ramp halfway to T0
        let half = params.elastic_sa(params.t0_s / 2.0);
        assert!((half - 0.40 * (1.0 + 1.48 * 0.5)).abs() < EPS);
        // Plateau
        assert!((params.elastic_sa(0.3) - 0.992).abs() < EPS);
        // Decay with r = 1
        assert!((params.elastic_sa(0.825) - 0.496).abs() < EPS);
    }

    #[test]
    fn test_soil_e_decay_exponent() {
        let site = SiteParameters::new(SeismicZone::III, SoilClass::E, Region::Sierra);
        let params = SpectrumParameters::for_site(&site);
        assert_eq!(params.r, 1.5);
        let t = 2.0 * params.tc_s;
        let expected = params.plateau_sa() * 0.5_f64.powf(1.5);
        assert!((params.elastic_sa(t) - expected).abs() < EPS);
    }

    #[test]
    fn test_continuity_at_breakpoints() {
        for zone in SeismicZone::ALL {
            for soil in SoilClass::ALL {
                for region in Region::ALL {
                    let params = SpectrumParameters::for_site(&SiteParameters::new(zone, soil, region));
                    let plateau = params.plateau_sa();
                    let at_t0 = params.elastic_sa(params.t0_s);
                    let after_t0 = params.elastic_sa(params.t0_s + 1e-12);
                    assert!((at_t0 - plateau).abs() < EPS);
                    assert!((after_t0 - plateau).abs() < EPS);

                    let at_tc = params.elastic_sa(params.tc_s);
                    let after_tc = params.elastic_sa(params.tc_s + 1e-12);
                    assert_eq!(at_tc, plateau);
                    assert!((after_tc - plateau).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_sample_index_rounding_and_clamping() {
        assert_eq!(sample_index(0.0), 0);
        assert_eq!(sample_index(0.3973), 40);
        assert_eq!(sample_index(0.426), 43);
        assert_eq!(sample_index(0.004), 0);
        assert_eq!(sample_index(-1.0), 0);
        assert_eq!(sample_index(4.0), 400);
        assert_eq!(sample_index(12.5), 400);
        assert_eq!(sample_index(f64::NAN), 0);
    }

    #[test]
    fn test_sa_at_uses_nearest_sample() {
        let spectrum = generate(&quito_site());
        // 0.4149 s rounds to the 0.41 s sample, still on the plateau
        assert!((spectrum.sa_at(0.4149).unwrap() - 0.992).abs() < EPS);
        // 0.4151 s rounds to 0.42 s, on the decay branch
        let expected = 0.992 * 0.4125 / 0.42;
        assert!((spectrum.sa_at(0.4151).unwrap() - expected).abs() < EPS);
        // Beyond the sampled range the last sample is used
        assert_eq!(spectrum.sa_at(10.0), Some(spectrum.points[400].sa));
    }

    #[test]
    fn test_sa_at_short_spectrum_clamps_to_last_point() {
        let json = r#"{
            "parameters": {
                "z": 0.4, "fa": 1.0, "fd": 1.0, "fs": 0.75, "eta": 2.48, "r": 1.0,
                "sa0": 0.4, "t0_s": 0.075, "tc_s": 0.4125
            },
            "points": [ { "period_s": 0.0, "sa": 0.4 } ]
        }"#;
        let short: ResponseSpectrum = serde_json::from_str(json).unwrap();
        assert_eq!(short.sa_at(0.5), Some(0.4));
        assert_eq!(short.sa_at(-3.0), Some(0.4));

        let empty = ResponseSpectrum {
            parameters: short.parameters,
            points: Vec::new(),
        };
        assert_eq!(empty.sa_at(0.5), None);
    }

    #[test]
    fn test_scaled_ordinates() {
        let spectrum = generate(&quito_site());
        let scaled = spectrum.scaled_ordinates(0.1875);
        assert_eq!(scaled.len(), SAMPLE_COUNT);
        for (s, p) in scaled.iter().zip(&spectrum.points) {
            assert_eq!(*s, p.sa * 0.1875);
        }
    }

    #[test]
    fn test_spectrum_is_non_increasing_after_plateau() {
        let spectrum = generate(&SiteParameters::new(SeismicZone::IV, SoilClass::D, Region::Oriente));
        let tc = spectrum.parameters.tc_s;
        let tail: Vec<f64> = spectrum
            .points
            .iter()
            .filter(|p| p.period_s > tc)
            .map(|p| p.sa)
            .collect();
        assert!(tail.windows(2).all(|w| w[1] <= w[0]));
    }
}
