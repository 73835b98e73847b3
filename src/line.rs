use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

/// A single digital output driving one input of the shift register.
///
/// Writes are immediate and cannot fail.
pub trait Line {
    fn set_high(&mut self);
    fn set_low(&mut self);

    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

impl<P> Line for P
where
    P: OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match OutputPin::set_high(self) {
            Ok(()) => (),
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match OutputPin::set_low(self) {
            Ok(()) => (),
            Err(e) => match e {},
        }
    }
}
