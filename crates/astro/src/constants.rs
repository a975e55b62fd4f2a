//! Named physical constants, SI units throughout

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.67408e-11;

/// Boltzmann constant (J K⁻¹)
pub const BOLTZMANN: f64 = 1.38065e-23;

/// Stefan-Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.67037e-8;

/// Freezing point of water (K)
pub const FREEZING_POINT: f64 = 273.15;

/// Boiling point of water (K)
pub const BOILING_POINT: f64 = 373.13;

/// Zero-point luminosity for absolute bolometric magnitude 0 (W), IAU 2015
pub const ZERO_POINT_LUMINOSITY: f64 = 3.0128e28;

/// Mass of the Sun (kg)
pub const SUN_MASS: f64 = 1.9885e30;

/// Radius of the Sun (m)
pub const SUN_RADIUS: f64 = 695_700_000.0;

/// Sidereal rotation period of the Sun (s), ~25.05 days
pub const SUN_ROTATION_PERIOD: f64 = 2_164_320.0;

/// Effective temperature of the Sun (K)
pub const SUN_TEMPERATURE: f64 = 5778.0;

/// Mass of the Earth (kg)
pub const EARTH_MASS: f64 = 5.9722e24;

/// Radius of the Earth (m)
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Mass of Jupiter (kg)
pub const JUPITER_MASS: f64 = 1.89813e27;

/// Radius of Jupiter (m)
pub const JUPITER_RADIUS: f64 = 69_911_000.0;

/// Astronomical unit (m)
pub const ASTRONOMICAL_UNIT: f64 = 1.495978707e11;
