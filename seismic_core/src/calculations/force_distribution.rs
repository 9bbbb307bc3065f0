//! # Vertical Distribution of Lateral Force
//!
//! Distributes the base shear over the building levels:
//!
//! ```text
//! Fi = V · Wi·Hi^k / Σ Wj·Hj^k
//! ```
//!
//! where Hi is the height of level i above the base and k depends on the
//! fundamental period:
//!
//! | T1 (s)          | k              |
//! |-----------------|----------------|
//! | T1 ≤ 0.5        | 1.0            |
//! | 0.5 < T1 ≤ 2.5  | 0.75 + 0.5·T1  |
//! | T1 > 2.5        | 2.0            |
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::calculations::force_distribution::distribute;
//! use seismic_core::structure::BuildingGeometry;
//!
//! let geometry = BuildingGeometry::from_lists(&[3.0, 3.0, 3.0], &[96.0, 96.0, 96.0]);
//! let dist = distribute(&geometry, 60.0, 0.4);
//!
//! assert_eq!(dist.k, 1.0);
//! assert!((dist.levels[2].force_t - 30.0).abs() < 1e-9);
//! assert!((dist.total_force_t() - 60.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::structure::BuildingGeometry;

/// Distribution exponent k for a fundamental period T1 (s).
pub fn distribution_exponent(t1_s: f64) -> f64 {
    if t1_s <= 0.5 {
        1.0
    } else if t1_s <= 2.5 {
        0.75 + 0.5 * t1_s
    } else {
        2.0
    }
}

/// Lateral force at one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelForce {
    /// Level number, 1 at the first floor above the base
    pub level: usize,
    /// Story height (m)
    pub story_height_m: f64,
    /// Height above the base Hi (m)
    pub height_m: f64,
    /// Seismic weight Wi (t)
    pub weight_t: f64,
    /// Wi·Hi^k
    pub weight_height_product: f64,
    /// Lateral force Fi (t)
    pub force_t: f64,
    /// Fi as a percentage of the base shear
    pub percent_of_base_shear: f64,
    /// Story shear, sum of the forces at and above this level (t)
    pub story_shear_t: f64,
}

/// Lateral force distribution over all levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceDistribution {
    /// Distribution exponent k
    pub k: f64,
    /// Base shear that was distributed (t)
    pub base_shear_t: f64,
    /// Forces per level, base first
    pub levels: Vec<LevelForce>,
}

impl ForceDistribution {
    /// Sum of the level forces (equals the base shear)
    pub fn total_force_t(&self) -> f64 {
        self.levels.iter().map(|l| l.force_t).sum()
    }

    /// Level forces, base first
    pub fn forces_t(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.force_t).collect()
    }

    /// Overturning moment at the base, Σ Fi·Hi (t·m)
    pub fn overturning_moment_tm(&self) -> f64 {
        self.levels.iter().map(|l| l.force_t * l.height_m).sum()
    }
}

/// Distribute `base_shear_t` over the levels of `geometry`.
///
/// The geometry must already be validated (non-empty, positive heights and
/// weights).
pub fn distribute(geometry: &BuildingGeometry, base_shear_t: f64, t1_s: f64) -> ForceDistribution {
    let k = distribution_exponent(t1_s);
    let heights = geometry.cumulative_heights_m();

    let products: Vec<f64> = geometry
        .floors
        .iter()
        .zip(&heights)
        .map(|(floor, &h)| floor.weight_t * h.powf(k))
        .collect();
    let sum_products: f64 = products.iter().sum();

    let mut levels: Vec<LevelForce> = geometry
        .floors
        .iter()
        .zip(heights.iter().zip(&products))
        .enumerate()
        .map(|(i, (floor, (&height_m, &product)))| {
            let force_t = base_shear_t * (product / sum_products);
            let percent_of_base_shear = if base_shear_t != 0.0 {
                force_t / base_shear_t * 100.0
            } else {
                0.0
            };
            LevelForce {
                level: i + 1,
                story_height_m: floor.height_m,
                height_m,
                weight_t: floor.weight_t,
                weight_height_product: product,
                force_t,
                percent_of_base_shear,
                story_shear_t: 0.0,
            }
        })
        .collect();

    let mut shear = 0.0;
    for level in levels.iter_mut().rev() {
        shear += level.force_t;
        level.story_shear_t = shear;
    }

    ForceDistribution {
        k,
        base_shear_t,
        levels,
    }
}
