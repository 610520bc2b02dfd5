//! Math utility functions.

use num_traits::Float;

use crate::color::Component;

/// Round `value` to the nearest integer, with ties going up.
///
/// ```rust
/// use colorshift::smart_round;
/// assert_eq!(smart_round(2.5), 3.0);
/// assert_eq!(smart_round(2.49), 2.0);
/// ```
pub fn smart_round<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());
    let floor = value.floor();

    // Adding zero turns a negative zero into a positive one.
    if value - floor >= half {
        floor + T::one()
    } else {
        floor + T::zero()
    }
}

/// Returns true if `value` is too small to divide by. Every value checked
/// here is derived from 8-bit channels, so anything below the square root of
/// the machine epsilon is a rounding artifact of zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon().sqrt()
}

/// Scale an 8-bit channel into `0.0..=1.0`.
pub fn normalize(channel: u8) -> Component {
    Component::from(channel) / 255.0
}

/// Scale a value in `0.0..=1.0` to an 8-bit channel, smart rounding it.
pub fn denormalize(value: Component) -> u8 {
    smart_round(value * 255.0).clamp(0.0, 255.0) as u8
}

/// Scale a value in `0.0..=1.0` to a percentage in `0.0..=100.0`.
pub fn to_percent(value: Component) -> Component {
    (value * 100.0).clamp(0.0, 100.0)
}
