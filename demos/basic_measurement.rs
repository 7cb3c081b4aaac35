#![no_std]
#![no_main]

use arduino_hal::spi;
use arduino_hal::default_serial;
use embedded_hal::spi::{Mode, Phase, Polarity};
use panic_halt as _;
use tdc_as6501::{As6501, Channel};
use ufmt::uwriteln;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let mut serial = default_serial!(dp, pins, 57600);

    // SPI mode 0, MSB first. The Uno tops out well below the chip's 50 MHz.
    let settings = spi::Settings {
        data_order: spi::DataOrder::MostSignificantFirst,
        mode: Mode {
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        },
        clock: spi::SerialClockRate::OscfOver2,
    };

    let sclk = pins.d13.into_output();
    let mosi = pins.d11.into_output();
    let miso = pins.d12.into_pull_up_input();
    let cs = pins.d10.into_output();
    let (spi, cs_pin) = spi::Spi::new(dp.SPI, sclk, mosi, miso, cs, settings);

    let mut tdc = match As6501::new(spi, cs_pin, arduino_hal::Delay::new()) {
        Ok(tdc) => tdc,
        Err(e) => {
            uwriteln!(&mut serial, "AS6501 setup failed: {:?}", e).ok();
            loop {}
        }
    };

    if let Err(e) = tdc.configure_dual_channel(&mut serial) {
        uwriteln!(&mut serial, "AS6501 configuration failed: {:?}", e).ok();
        loop {}
    }

    loop {
        for (name, channel) in [("A", Channel::A), ("B", Channel::B)] {
            match tdc.read_measurement(channel) {
                Ok(m) => {
                    uwriteln!(&mut serial, "STOP{}: REFID={} TSTOP={}", name, m.refid, m.tstop).ok();
                }
                Err(e) => {
                    uwriteln!(&mut serial, "STOP{}: read failed: {:?}", name, e).ok();
                }
            }
        }
        arduino_hal::delay_ms(500);
    }
}
