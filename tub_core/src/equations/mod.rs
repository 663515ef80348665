//! # Structural Equations
//!
//! All closed-form mechanics used by the calculators lives here, so the
//! formulas can be checked against their references in one place.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (maximum moment, deflection curve)
//! - [`plate`] - Thin plate rigidity, deflection and mode shape
//! - [`section`] - Cross-section properties and bending stress
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive in the direction the water pushes
//! - **Moment**: Positive sagging
//! - **Deflection**: Positive in the load direction
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Timoshenko & Woinowsky-Krieger, Theory of Plates and Shells

pub mod beam;
pub mod plate;
pub mod section;

pub use beam::{uniform_load_deflection, uniform_load_max_deflection, uniform_load_max_moment};

pub use plate::{
    flexural_rigidity,
    mode_shape,
    simply_supported_max_deflection,
    MDF_POISSON_RATIO,
    PLATE_DEFLECTION_COEFF,
};

pub use section::{bending_stress, rectangular_moment_of_inertia};
