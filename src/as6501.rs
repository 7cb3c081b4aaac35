use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};
use ufmt::uWrite;
use crate::channel_types::{Channel, ChannelMode, Measurement, ResultSlot};
use crate::commands::*;
use crate::cs_pin_wrapper::CsPinWrapper;
use crate::errors::As6501Error;
use crate::registers::*;
use crate::retry_policy::RetryPolicy;

// Bus settings the caller must apply before handing the bus over
pub const SPI_FREQUENCY_HZ: u32 = 50_000_000;
pub const SPI_MODE: Mode = MODE_0; // Clock idle low, capture on first edge
pub const SPI_MSB_FIRST: bool = true;

// Settle times after the single-byte opcodes
pub const POWER_ON_RESET_SETTLE_MS: u32 = 5;
pub const INIT_SETTLE_MS: u32 = 1;

/// Driver for the ScioSense AS6501 time-to-digital converter.
///
/// Every method that touches the bus runs as one chip select session. The bus
/// must already be set up with [`SPI_FREQUENCY_HZ`], [`SPI_MODE`] and MSB first
/// bit order.
pub struct As6501<SPI, CS, D> {
    spi: SPI,
    cs: CsPinWrapper<CS>,
    delay: D,
    retry: RetryPolicy,
    present: bool,
    mode: Option<ChannelMode>,
}

impl<SPI, CS, D> As6501<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    /// Binds the driver to an initialised bus and drives chip select high.
    pub fn new(spi: SPI, cs: CS, delay: D) -> Result<Self, As6501Error> {
        let mut cs = CsPinWrapper::new(cs);
        cs.set_high()?;
        Ok(As6501 {
            spi,
            cs,
            delay,
            retry: RetryPolicy::default(),
            present: false,
            mode: None,
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// True if the last configuration readback matched.
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn is_dual_mode(&self) -> bool {
        self.mode == Some(ChannelMode::Dual)
    }

    pub fn mode(&self) -> Option<ChannelMode> {
        self.mode
    }

    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs.release(), self.delay)
    }

    // One chip select session, full duplex over the whole frame
    fn transaction(&mut self, frame: &mut [u8]) -> Result<(), As6501Error> {
        let _selected = self.cs.select()?;
        self.spi
            .transfer_in_place(frame)
            .map_err(|_| As6501Error::CommunicationError)?;
        self.spi.flush().map_err(|_| As6501Error::CommunicationError)
    }

    pub fn send_opcode(&mut self, op: u8) -> Result<(), As6501Error> {
        self.transaction(&mut [op])
    }

    /// Power-on reset. Clears the configuration registers.
    pub fn power_on_reset(&mut self) -> Result<(), As6501Error> {
        self.send_opcode(OPC_POWER)?;
        self.delay.delay_ms(POWER_ON_RESET_SETTLE_MS);
        Ok(())
    }

    /// Keeps the configuration and starts measuring.
    pub fn init_measurement(&mut self) -> Result<(), As6501Error> {
        self.send_opcode(OPC_INIT)?;
        self.delay.delay_ms(INIT_SETTLE_MS);
        Ok(())
    }

    /// Writes one configuration register. `addr` is masked to 5 bits.
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<(), As6501Error> {
        self.transaction(&mut [write_register_opcode(addr), value])
    }

    /// Reads one configuration register. `addr` is masked to 5 bits.
    pub fn read_register(&mut self, addr: u8) -> Result<u8, As6501Error> {
        let mut frame = [read_register_opcode(addr), 0x00];
        self.transaction(&mut frame)?;
        Ok(frame[1])
    }

    /// Writes CFG0..CFG16 in one session.
    pub fn write_config(&mut self, cfg: &[u8; NREG]) -> Result<(), As6501Error> {
        let mut frame = [0u8; NREG + 1];
        frame[0] = OPC_WR_CONF;
        frame[1..].copy_from_slice(cfg);
        self.transaction(&mut frame)
    }

    /// Reads back all 17 registers and compares them with `cfg`.
    ///
    /// All registers are read even after a mismatch. Each mismatching register
    /// is reported on `serial`. The result is also kept as the presence flag.
    pub fn verify_config<W: uWrite>(
        &mut self,
        cfg: &[u8; NREG],
        serial: &mut W,
    ) -> Result<bool, As6501Error> {
        self.present = true;
        let mut frame = [0u8; NREG + 1];
        frame[0] = OPC_RD_CONF;
        if let Err(e) = self.transaction(&mut frame) {
            self.present = false;
            return Err(e);
        }

        for (i, (&expected, &read)) in cfg.iter().zip(frame[1..].iter()).enumerate() {
            if read != expected {
                ufmt::uwriteln!(
                    serial,
                    "Reg {} mismatch: wrote 0x{:02X}, read 0x{:02X}",
                    i,
                    expected,
                    read
                )
                .ok();
                self.present = false;
            }
        }
        Ok(self.present)
    }

    /// Reads a 24-bit result starting at `base_addr`.
    ///
    /// Unlike the register accessors the address is not masked, so anything
    /// other than the four result base addresses ends up in the opcode bits.
    pub fn read_result_at(&mut self, base_addr: u8) -> Result<u32, As6501Error> {
        let mut frame = [read_result_opcode(base_addr), 0x00, 0x00, 0x00];
        self.transaction(&mut frame)?;
        Ok(u32::from_be_bytes([0, frame[1], frame[2], frame[3]]))
    }

    pub fn read_result(&mut self, slot: ResultSlot) -> Result<u32, As6501Error> {
        self.read_result_at(slot.base_addr())
    }

    /// Reads REFID and TSTOP of one channel. Channel B needs dual channel mode.
    pub fn read_measurement(&mut self, channel: Channel) -> Result<Measurement, As6501Error> {
        let (refid, tstop) = match channel {
            Channel::A => (ResultSlot::RefIdA, ResultSlot::TstopA),
            Channel::B if self.is_dual_mode() => (ResultSlot::RefIdB, ResultSlot::TstopB),
            Channel::B => return Err(As6501Error::ChannelDisabled),
        };
        Ok(Measurement {
            refid: self.read_result(refid)?,
            tstop: self.read_result(tstop)?,
        })
    }

    /// Resets the chip and configures STOPA only.
    ///
    /// Blocks until the readback matches, unless a capped retry policy is set.
    pub fn configure_single_channel<W: uWrite>(&mut self, serial: &mut W) -> Result<(), As6501Error> {
        self.configure(&CFG_SINGLE, ChannelMode::Single, serial)
    }

    /// Resets the chip and configures STOPA and STOPB.
    ///
    /// Blocks until the readback matches, unless a capped retry policy is set.
    pub fn configure_dual_channel<W: uWrite>(&mut self, serial: &mut W) -> Result<(), As6501Error> {
        self.configure(&CFG_DUAL, ChannelMode::Dual, serial)
    }

    fn configure<W: uWrite>(
        &mut self,
        cfg: &[u8; NREG],
        mode: ChannelMode,
        serial: &mut W,
    ) -> Result<(), As6501Error> {
        // The reset wipes whatever mode was active before
        self.mode = None;
        self.power_on_reset()?;
        self.write_config(cfg)?;

        let mut attempts: u32 = 1;
        while !self.verify_config(cfg, serial)? {
            if !self.retry.allows_retry(attempts) {
                ufmt::uwriteln!(serial, "Configuration mismatch; giving up after {} attempts", attempts).ok();
                return Err(As6501Error::ConfigMismatch);
            }
            ufmt::uwriteln!(
                serial,
                "Configuration mismatch; re-checking in {} ms...",
                self.retry.backoff_ms
            )
            .ok();
            self.delay.delay_ms(self.retry.backoff_ms);
            attempts = attempts.saturating_add(1);
        }

        self.init_measurement()?;
        self.mode = Some(mode);
        match mode {
            ChannelMode::Single => ufmt::uwriteln!(serial, "AS6501 configured: single channel").ok(),
            ChannelMode::Dual => ufmt::uwriteln!(serial, "AS6501 configured: dual channel").ok(),
        };
        Ok(())
    }
}
