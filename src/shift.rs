use crate::line::Line;

const MSB: u8 = 0b1000_0000;

/// 8-bit serial-in/parallel-out register (74HC595 style) driven by three lines.
///
/// Bits go out most-significant first. Every line is left low between calls.
pub struct ShiftRegister<D, C, L> {
    sdata_pin: D,
    clock_pin: C,
    latch_pin: L,
}

impl<D, C, L> ShiftRegister<D, C, L>
where
    D: Line,
    C: Line,
    L: Line,
{
    /// Takes ownership of the lines and drives all of them low.
    pub fn new(mut sdata_pin: D, mut clock_pin: C, mut latch_pin: L) -> Self {
        sdata_pin.set_low();
        clock_pin.set_low();
        latch_pin.set_low();
        Self {
            sdata_pin,
            clock_pin,
            latch_pin,
        }
    }

    /// Clocks `byte` into the shift storage without touching the outputs.
    pub fn shift_out(&mut self, byte: u8) {
        let mut byte = byte;
        for _ in 0..8 {
            self.sdata_pin.set_level(byte & MSB != 0);

            // data is captured on the rising edge
            self.clock_pin.set_high();
            self.clock_pin.set_low();

            byte <<= 1;
        }
        self.sdata_pin.set_low();
    }

    /// Copies the shift storage to the output pins.
    pub fn latch(&mut self) {
        self.latch_pin.set_high();
        self.latch_pin.set_low();
    }

    pub fn push_byte_and_latch(&mut self, byte: u8) {
        self.shift_out(byte);
        self.latch();
    }

    /// There is no SRCLR line, so clearing means shifting in eight zeros.
    pub fn clear_register(&mut self) {
        self.push_byte_and_latch(0);
    }

    pub fn release(self) -> (D, C, L) {
        (self.sdata_pin, self.clock_pin, self.latch_pin)
    }
}
