//! The command interface for MIPI-DSI panels.
//!
//! The panel driver never sees the DSI host itself. It only needs a way to push
//! one DCS write (a short byte frame) at a time, which is what
//! [`CommandChannel`] describes. Packet type selection, virtual channel and ECC
//! are the host's business.

/// Largest parameter list [`CommandChannel::send_command_data`] accepts.
pub const MAX_PARAMS: usize = 15;

/// Pixel format streamed by the host in video mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    Rgb888,
    Rgb666,
    Rgb666Packed,
    Rgb565,
}

impl PixelFormat {
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb666Packed => 24,
            PixelFormat::Rgb666 => 18,
            PixelFormat::Rgb565 => 16,
        }
    }
}

/// Video mode timing flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VideoMode {
    /// Sync pulses carry both start and end events.
    SyncPulse,
    /// Sync events only, no end packets.
    SyncEvent,
    Burst,
}

/// Link parameters the host must be configured with before the panel can be
/// driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Number of data lanes, 1 to 4.
    pub lanes: u8,
    pub format: PixelFormat,
    pub mode: VideoMode,
}

impl LinkConfig {
    pub const fn new(lanes: u8, format: PixelFormat, mode: VideoMode) -> Self {
        Self {
            lanes,
            format,
            mode,
        }
    }
}

/// Trait implemented by DSI hosts to carry panel commands.
///
/// Every call is one complete frame: it is either accepted as a whole or the
/// call fails. Nothing is read back.
///
/// There is no timeout at this level. A transport that never returns blocks
/// the lifecycle operation that issued the write; hosts that can hang should
/// bound their own transfers and report it through `Self::Error`.
pub trait CommandChannel {
    type Error: core::fmt::Debug;

    /// Send one DCS write, `bytes[0]` being the command (or register) and the
    /// rest its parameters.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Send a parameterless command.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.send(&[command])
    }

    /// Send a command and its parameters as a single frame.
    ///
    /// Panics if `data` is longer than [`MAX_PARAMS`].
    fn send_command_data(&mut self, command: u8, data: &[u8]) -> Result<(), Self::Error> {
        assert!(data.len() <= MAX_PARAMS, "DCS parameter list too long");

        let mut buf = [0u8; MAX_PARAMS + 1];
        buf[0] = command;
        buf[1..=data.len()].copy_from_slice(data);
        self.send(&buf[..=data.len()])
    }

    /// Configure the host side of the link for this panel.
    fn attach(&mut self, _link: &LinkConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Release the host side of the link.
    fn detach(&mut self) {}
}

impl<T: CommandChannel + ?Sized> CommandChannel for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::send(self, bytes)
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        T::send_command(self, command)
    }

    fn send_command_data(&mut self, command: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::send_command_data(self, command, data)
    }

    fn attach(&mut self, link: &LinkConfig) -> Result<(), Self::Error> {
        T::attach(self, link)
    }

    fn detach(&mut self) {
        T::detach(self)
    }
}
