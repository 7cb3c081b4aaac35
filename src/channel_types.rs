use core::fmt::{Debug, Formatter, Result};
use crate::registers::{RES_REFID_A, RES_REFID_B, RES_TSTOP_A, RES_TSTOP_B};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Single,
    Dual,
}

impl Debug for ChannelMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ChannelMode::Single => write!(f, "Single"),
            ChannelMode::Dual => write!(f, "Dual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

/// Result registers. B slots only carry data in dual channel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSlot {
    RefIdA,
    TstopA,
    RefIdB,
    TstopB,
}

impl ResultSlot {
    pub const fn base_addr(self) -> u8 {
        match self {
            ResultSlot::RefIdA => RES_REFID_A,
            ResultSlot::TstopA => RES_TSTOP_A,
            ResultSlot::RefIdB => RES_REFID_B,
            ResultSlot::TstopB => RES_TSTOP_B,
        }
    }

    pub const fn channel(self) -> Channel {
        match self {
            ResultSlot::RefIdA | ResultSlot::TstopA => Channel::A,
            ResultSlot::RefIdB | ResultSlot::TstopB => Channel::B,
        }
    }
}

/// Raw reference index and stop time of one channel, both 24 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    pub refid: u32,
    pub tstop: u32,
}
