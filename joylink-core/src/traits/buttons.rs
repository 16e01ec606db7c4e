//! Button input trait

use crate::ButtonBitmask;

/// Source of the current button state
///
/// Implementations sample every button and fold them into one bitmask,
/// inverting active-low inputs so that a set bit always means "engaged".
/// Bits that do not belong to a button must read as zero.
pub trait ButtonSource {
    /// Sample all buttons now
    fn read_bitmask(&mut self) -> ButtonBitmask;
}

impl<T: ButtonSource + ?Sized> ButtonSource for &mut T {
    fn read_bitmask(&mut self) -> ButtonBitmask {
        (**self).read_bitmask()
    }
}
