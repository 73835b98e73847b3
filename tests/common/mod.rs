//! Simulated 74HC595 wired to fake output pins.
#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use shift_counter::ShiftRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Ser,
    Srclk,
    Rclk,
}

#[derive(Debug, Default)]
pub struct Hc595 {
    pub ser: bool,
    pub srclk: bool,
    pub rclk: bool,
    /// internal shift storage, newest bit in bit 0
    pub storage: u8,
    /// output latch, Q7 in bit 7
    pub outputs: u8,
    pub shifts: usize,
    pub latches: usize,
}

impl Hc595 {
    fn drive(&mut self, input: Input, high: bool) {
        match input {
            Input::Ser => self.ser = high,
            Input::Srclk => {
                if high && !self.srclk {
                    self.storage = (self.storage << 1) | self.ser as u8;
                    self.shifts += 1;
                }
                self.srclk = high;
            }
            Input::Rclk => {
                if high && !self.rclk {
                    self.outputs = self.storage;
                    self.latches += 1;
                }
                self.rclk = high;
            }
        }
    }

    /// Output pins in order Q7..Q0.
    pub fn pins(&self) -> [u8; 8] {
        let mut pins = [0; 8];
        for (i, pin) in pins.iter_mut().enumerate() {
            *pin = (self.outputs >> (7 - i)) & 1;
        }
        pins
    }

    pub fn lines_idle(&self) -> bool {
        !self.ser && !self.srclk && !self.rclk
    }
}

pub type Chip = Rc<RefCell<Hc595>>;

pub struct SimPin {
    input: Input,
    chip: Chip,
}

impl OutputPin for SimPin {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.chip.borrow_mut().drive(self.input, true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.chip.borrow_mut().drive(self.input, false);
        Ok(())
    }
}

/// Records the register outputs at every wait, like sampling on each tick.
pub struct TickSampler {
    chip: Chip,
    pub samples: Vec<u8>,
    pub waited_ms: u32,
}

impl DelayMs<u16> for TickSampler {
    fn delay_ms(&mut self, ms: u16) {
        self.samples.push(self.chip.borrow().outputs);
        self.waited_ms += u32::from(ms);
    }
}

pub fn chip() -> Chip {
    Chip::default()
}

pub fn wired(chip: &Chip) -> ShiftRegister<SimPin, SimPin, SimPin> {
    let pin = |input| SimPin {
        input,
        chip: chip.clone(),
    };
    ShiftRegister::new(pin(Input::Ser), pin(Input::Srclk), pin(Input::Rclk))
}

pub fn sampler(chip: &Chip) -> TickSampler {
    TickSampler {
        chip: chip.clone(),
        samples: Vec::new(),
        waited_ms: 0,
    }
}
