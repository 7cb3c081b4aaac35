#![no_std]
#![no_main]

use arduino_hal::spi;
use arduino_hal::default_serial;
use embedded_hal::spi::{Mode, Phase, Polarity};
use panic_halt as _;
use tdc_as6501::registers::NREG;
use tdc_as6501::{As6501, RetryPolicy};
use ufmt::uwriteln;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let mut serial = default_serial!(dp, pins, 57600);

    let settings = spi::Settings {
        data_order: spi::DataOrder::MostSignificantFirst,
        mode: Mode {
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        },
        clock: spi::SerialClockRate::OscfOver64,
    };

    let sclk = pins.d13.into_output();
    let mosi = pins.d11.into_output();
    let miso = pins.d12.into_pull_up_input();
    let cs = pins.d10.into_output();
    let (spi, cs_pin) = spi::Spi::new(dp.SPI, sclk, mosi, miso, cs, settings);

    // Give up after five rounds so a missing chip still gets a register dump
    let mut tdc = As6501::new(spi, cs_pin, arduino_hal::Delay::new())
        .unwrap()
        .with_retry_policy(RetryPolicy::capped(5));

    match tdc.configure_single_channel(&mut serial) {
        Ok(()) => uwriteln!(&mut serial, "Chip present").ok(),
        Err(e) => uwriteln!(&mut serial, "Chip not configured: {:?}", e).ok(),
    };

    for addr in 0..NREG as u8 {
        match tdc.read_register(addr) {
            Ok(value) => uwriteln!(&mut serial, "CFG{}: 0x{:02X}", addr, value).ok(),
            Err(e) => uwriteln!(&mut serial, "CFG{}: {:?}", addr, e).ok(),
        };
    }

    loop {}
}
