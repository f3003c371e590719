//! Command Table

/// Prefix of the ILI9881 page select frame, `FFh` followed by the
/// `98h 81h` unlock key. The target page id is appended as the 4th byte.
pub const PAGE_UNLOCK: [u8; 3] = [0xff, 0x98, 0x81];

/// Register bank holding the standard DCS commands.
pub const DCS_PAGE: u8 = 0;

/// Standard DCS commands used by the panel lifecycle.
///
/// Only valid while page 0 is addressed, the vendor pages reuse these
/// opcodes as plain register addresses.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Enter Sleep Mode
    ///
    /// DC/DC, oscillator and panel scanning are stopped.
    /// Wait 5ms before the next command.
    EnterSleepMode = 0x10,
    /// Exit Sleep Mode
    ///
    /// Wait 120ms before `SetDisplayOn` while the supplies settle.
    ExitSleepMode = 0x11,
    /// Blank the panel, frame memory is kept.
    SetDisplayOff = 0x28,
    SetDisplayOn = 0x29,
    /// Tearing effect output off.
    SetTearOff = 0x34,
    /// Tearing effect output on.
    ///
    /// <<0:b7, M:b1>>
    ///
    /// ## M
    /// M=0, V-Blanking only
    /// M=1, V-Blanking and H-Blanking
    SetTearOn = 0x35,
}

impl Command {
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// Parameter of [`Command::SetTearOn`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TearMode {
    /// TE pulses once per frame, during vertical blanking.
    VBlank = 0x00,
    /// TE pulses on both vertical and horizontal blanking.
    VHBlank = 0x01,
}
