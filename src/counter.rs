use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use ufmt::{uWrite, uwriteln};

use crate::line::Line;
use crate::shift::ShiftRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// How long each value stays on the outputs.
    pub step_delay_ms: u16,
    /// Exclusive upper bound of the counting range, at most 256.
    pub end: u16,
}

impl CounterConfig {
    pub const fn new(step_delay_ms: u16, end: u16) -> Self {
        Self { step_delay_ms, end }
    }

    pub const fn with_step_delay_ms(self, step_delay_ms: u16) -> Self {
        Self {
            step_delay_ms,
            ..self
        }
    }

    pub const fn with_end(self, end: u16) -> Self {
        Self { end, ..self }
    }
}

impl Default for CounterConfig {
    /// One second per step, counting 0 to 254. 255 is never shown.
    fn default() -> Self {
        Self::new(1000, 255)
    }
}

/// Log sink that drops everything.
pub struct Silent;

impl uWrite for Silent {
    type Error = Infallible;

    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Shows a binary count on the register outputs, one value per step.
pub struct BinaryCounter<D, C, L, T, W> {
    register: ShiftRegister<D, C, L>,
    delay: T,
    log: W,
    config: CounterConfig,
    value: u8,
}

impl<D, C, L, T, W> BinaryCounter<D, C, L, T, W>
where
    D: Line,
    C: Line,
    L: Line,
    T: DelayMs<u16>,
    W: uWrite,
{
    /// Clears the register and starts counting from zero.
    pub fn new(
        mut register: ShiftRegister<D, C, L>,
        delay: T,
        mut log: W,
        config: CounterConfig,
    ) -> Self {
        register.clear_register();
        // a broken log sink must never stop the counter
        uwriteln!(
            &mut log,
            "counter: 0..{} every {} ms",
            config.end,
            config.step_delay_ms
        )
        .ok();
        Self {
            register,
            delay,
            log,
            config,
            value: 0,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Pushes the current value, waits one step and advances.
    ///
    /// Returns the value that was shown.
    pub fn step(&mut self) -> u8 {
        let shown = self.value;
        self.register.push_byte_and_latch(shown);
        uwriteln!(&mut self.log, "count: {}", shown).ok();
        self.delay.delay_ms(self.config.step_delay_ms);

        let next = u16::from(shown) + 1;
        self.value = if next >= self.config.end { 0 } else { next as u8 };
        shown
    }

    /// Runs from the current value up to the end of the range.
    pub fn run_cycle(&mut self) {
        loop {
            self.step();
            if self.value == 0 {
                break;
            }
        }
    }

    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    pub fn release(self) -> (ShiftRegister<D, C, L>, T, W) {
        (self.register, self.delay, self.log)
    }
}
