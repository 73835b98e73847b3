#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
use shift_counter::{BinaryCounter, CounterConfig, ShiftRegister};

#[cfg(target_arch = "avr")]
const BAUD_RATE: u32 = 57_600;

/* Wiring (all on PORTB):
 *   SER   -> d8  / PB0  data
 *   SRCLK -> d9  / PB1  shift clock
 *   RCLK  -> d12 / PB4  latch
 * SRCLR is tied high and OE low on the register.
 */
#[cfg(target_arch = "avr")]
#[arduino_hal::entry]
fn main() -> ! {
    let peripherals = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(peripherals);

    let mut serial = arduino_hal::default_serial!(peripherals, pins, BAUD_RATE);
    ufmt::uwriteln!(&mut serial, "shift-counter: SER=d8 SRCLK=d9 RCLK=d12").ok();

    let shift_register = ShiftRegister::new(
        pins.d8.into_output().downgrade(),
        pins.d9.into_output().downgrade(),
        pins.d12.into_output().downgrade(),
    );

    BinaryCounter::new(
        shift_register,
        arduino_hal::Delay::new(),
        serial,
        CounterConfig::default(),
    )
    .run()
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("shift-counter is AVR firmware; build it for an ATmega328P target");
}
