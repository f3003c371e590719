//! Panel-side driver for Ilitek ILI9881C/ILI9881D MIPI-DSI LCD controllers.
//!
//! The DSI host streams pixels on its own once the panel is up. What the panel
//! needs from software is the power-up dance: supply, reset pulse, the vendor
//! register sequence, tearing signal, sleep out, display on, and the reverse.
//! [`Panel`] runs that sequence for any model described by a
//! [`PanelDescriptor`]; the shipped ones live in [`drivers`].
//!
//! The engine is driven by one caller, in the order
//! `prepare -> enable -> disable -> unprepare`. Waits are blocking
//! `DelayNs` sleeps on the calling thread.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod command;
pub mod drivers;
pub mod encoder;
pub mod instruction;
pub mod interface;
pub mod mode;
pub mod resources;

use embedded_graphics::{geometry::OriginDimensions, prelude::Size};
use embedded_hal::delay::DelayNs;

use command::{Command, DCS_PAGE};
use encoder::PageEncoder;
use resources::{ResourceError, ResourceKind};

pub use drivers::{PanelDescriptor, Timings};
pub use instruction::{Instruction, InstructionTable, Paging, ValidationError};
pub use interface::{CommandChannel, LinkConfig};
pub use mode::{ModeDescriptor, PanelModes};
pub use resources::{
    Acquire, Backlight, NoBacklight, PowerSupply, ResetLine, ResourceProvider,
};

/// Where a panel is in its power lifecycle.
///
/// `Resetting` and `Initializing` are only observable while `prepare` runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleState {
    Unpowered,
    Resetting,
    Initializing,
    Prepared,
    Enabled,
    Disabled,
}

/// The four lifecycle transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    Prepare,
    Enable,
    Disable,
    Unprepare,
}

impl Operation {
    /// The only state the operation may be called from.
    pub const fn source(self) -> LifecycleState {
        match self {
            Operation::Prepare => LifecycleState::Unpowered,
            Operation::Enable => LifecycleState::Prepared,
            Operation::Disable => LifecycleState::Enabled,
            Operation::Unprepare => LifecycleState::Disabled,
        }
    }

    pub const fn target(self) -> LifecycleState {
        match self {
            Operation::Prepare => LifecycleState::Prepared,
            Operation::Enable => LifecycleState::Enabled,
            Operation::Disable => LifecycleState::Disabled,
            Operation::Unprepare => LifecycleState::Unpowered,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A command write failed.
    Channel(E),
    /// The power supply refused to switch.
    Power,
    /// The reset line could not be driven.
    Reset,
    /// The backlight refused to switch.
    Backlight,
    /// A handle could not be obtained at attach time.
    Resource(ResourceError),
    /// The descriptor's init table is malformed.
    Validation(ValidationError),
    /// Operation called out of order, nothing was touched.
    InvalidState {
        operation: Operation,
        state: LifecycleState,
    },
    /// No known panel for the compatible string.
    NoMatch,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Channel(e) => write!(f, "command write failed: {:?}", e),
            Error::Power => f.write_str("power supply error"),
            Error::Reset => f.write_str("reset line error"),
            Error::Backlight => f.write_str("backlight error"),
            Error::Resource(e) => write!(f, "{}", e),
            Error::Validation(e) => write!(f, "{}", e),
            Error::InvalidState { operation, state } => {
                write!(f, "{:?} called in state {:?}", operation, state)
            }
            Error::NoMatch => f.write_str("no matching panel"),
        }
    }
}

impl<E> From<ResourceError> for Error<E> {
    fn from(e: ResourceError) -> Self {
        Error::Resource(e)
    }
}

impl<E> From<ValidationError> for Error<E> {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

/// Handles given back by [`Panel::detach`].
pub struct Parts<CH, PWR, RST, BL> {
    pub channel: CH,
    pub power: PWR,
    pub reset: RST,
    pub backlight: Option<BL>,
}

/// One physical panel and the handles it owns.
pub struct Panel<CH, PWR, RST, BL = NoBacklight>
where
    CH: CommandChannel,
{
    descriptor: &'static PanelDescriptor,
    encoder: PageEncoder<CH>,
    power: PWR,
    reset: RST,
    backlight: Option<BL>,
    timings: Timings,
    state: LifecycleState,
    fault: Option<Operation>,
}

impl<CH, PWR, RST, BL> Panel<CH, PWR, RST, BL>
where
    CH: CommandChannel,
    PWR: PowerSupply,
    RST: ResetLine,
    BL: Backlight,
{
    /// Bind a panel to already acquired handles.
    ///
    /// Holds the controller in reset and configures the host link. The panel
    /// starts `Unpowered`.
    pub fn new(
        descriptor: &'static PanelDescriptor,
        mut channel: CH,
        power: PWR,
        mut reset: RST,
        backlight: Option<BL>,
    ) -> Result<Self, Error<CH::Error>> {
        descriptor.table.validate()?;

        reset.assert().map_err(|_| Error::<CH::Error>::Reset)?;
        channel.attach(&descriptor.link).map_err(Error::Channel)?;

        info!(
            "{} attached, {} lanes, backlight: {}",
            descriptor.name,
            descriptor.link.lanes,
            backlight.is_some()
        );

        Ok(Self {
            descriptor,
            encoder: PageEncoder::new(channel),
            power,
            reset,
            backlight,
            timings: descriptor.timings,
            state: LifecycleState::Unpowered,
            fault: None,
        })
    }

    /// Match `compatible` against the known panels and acquire the handles
    /// from `provider`.
    ///
    /// A backlight that is described but not ready yet fails with a deferred
    /// [`ResourceError`], the caller should try again later.
    pub fn attach<P>(
        compatible: &str,
        channel: CH,
        provider: &mut P,
    ) -> Result<Self, Error<CH::Error>>
    where
        P: ResourceProvider<Power = PWR, Reset = RST, Backlight = BL>,
    {
        let descriptor = drivers::find(compatible).ok_or(Error::<CH::Error>::NoMatch)?;

        let power = acquired(provider.power().required(ResourceKind::Power))?;
        let reset = acquired(provider.reset().required(ResourceKind::Reset))?;
        let backlight = acquired(provider.backlight().optional(ResourceKind::Backlight))?;

        Self::new(descriptor, channel, power, reset, backlight)
    }

    pub fn descriptor(&self) -> &'static PanelDescriptor {
        self.descriptor
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The transition that failed last, cleared by the next successful one.
    pub fn last_fault(&self) -> Option<Operation> {
        self.fault
    }

    /// Register page the command channel is addressing.
    pub fn current_page(&self) -> u8 {
        self.encoder.current_page()
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Replace the descriptor's timings, e.g. for slow supply rails.
    pub fn set_timings(&mut self, timings: Timings) {
        self.timings = timings;
    }

    /// The panel's one mode and physical size. Callable in any state.
    pub fn get_modes(&self) -> PanelModes {
        self.descriptor.modes()
    }

    /// Power the panel and run its init sequence.
    ///
    /// On failure the supply is switched back off and reset asserted, the
    /// panel is `Unpowered` again and `prepare` can be retried.
    pub fn prepare<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<CH::Error>> {
        self.expect(Operation::Prepare)?;

        if self.power.enable().is_err() {
            return self.finish(Operation::Prepare, Err(Error::Power));
        }

        let result = self.reset_and_init(delay);
        if result.is_err() {
            self.abort_power_up();
        }
        self.finish(Operation::Prepare, result)
    }

    /// Turn the display on once the panel has settled, then the backlight.
    pub fn enable<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<CH::Error>> {
        self.expect(Operation::Enable)?;

        delay.delay_ms(self.timings.enable_settle_ms());

        let result = self.display_on();
        self.finish(Operation::Enable, result)
    }

    /// Backlight off, then display off.
    pub fn disable(&mut self) -> Result<(), Error<CH::Error>> {
        self.expect(Operation::Disable)?;

        let result = self.display_off();
        self.finish(Operation::Disable, result)
    }

    /// Sleep in, supply off, reset asserted.
    pub fn unprepare(&mut self) -> Result<(), Error<CH::Error>> {
        self.expect(Operation::Unprepare)?;

        let result = self.power_down();
        self.finish(Operation::Unprepare, result)
    }

    /// Tear the panel down from whatever state it is in and give the handles
    /// back.
    ///
    /// Every teardown step is attempted even if an earlier one failed; the
    /// first error is reported next to the handles.
    pub fn detach(mut self) -> (Parts<CH, PWR, RST, BL>, Result<(), Error<CH::Error>>) {
        let result = self.teardown();

        let mut channel = self.encoder.release();
        channel.detach();

        info!("{} detached", self.descriptor.name);

        let parts = Parts {
            channel,
            power: self.power,
            reset: self.reset,
            backlight: self.backlight,
        };
        (parts, result)
    }

    fn expect(&self, operation: Operation) -> Result<(), Error<CH::Error>> {
        if self.state == operation.source() {
            Ok(())
        } else {
            warn!("{} called in state {}", operation, self.state);
            Err(Error::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn transition(&mut self, to: LifecycleState) {
        debug!("{}: {} -> {}", self.descriptor.name, self.state, to);
        self.state = to;
    }

    fn finish(
        &mut self,
        operation: Operation,
        result: Result<(), Error<CH::Error>>,
    ) -> Result<(), Error<CH::Error>> {
        match result {
            Ok(()) => {
                self.fault = None;
                self.transition(operation.target());
                Ok(())
            }
            Err(e) => {
                warn!("{}: {} failed", self.descriptor.name, operation);
                self.fault = Some(operation);
                self.transition(operation.source());
                Err(e)
            }
        }
    }

    fn reset_and_init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<CH::Error>> {
        let timings = self.timings;
        delay.delay_ms(timings.power_settle_ms());

        self.transition(LifecycleState::Resetting);
        self.reset.assert().map_err(|_| Error::<CH::Error>::Reset)?;
        delay.delay_ms(timings.reset_assert_ms());
        self.reset.deassert().map_err(|_| Error::<CH::Error>::Reset)?;
        self.encoder.forget_page();
        delay.delay_ms(timings.reset_release_ms());

        self.transition(LifecycleState::Initializing);
        let sent = self
            .encoder
            .run(&self.descriptor.table)
            .map_err(|e| Error::Channel(e.error))?;
        debug!("{}: {} init instructions sent", self.descriptor.name, sent);

        self.encoder.switch_page(DCS_PAGE).map_err(Error::Channel)?;
        self.encoder
            .dcs(Command::SetTearOn, &[self.descriptor.tear_mode as u8])
            .map_err(Error::Channel)?;
        self.encoder
            .dcs(Command::ExitSleepMode, &[])
            .map_err(Error::Channel)
    }

    /// Leave a half powered panel in the boundary state. Failures here are
    /// logged only, the error that caused the abort is the one reported.
    fn abort_power_up(&mut self) {
        if self.power.disable().is_err() {
            warn!("{}: power off after failed prepare failed", self.descriptor.name);
        }
        if self.reset.assert().is_err() {
            warn!("{}: reset after failed prepare failed", self.descriptor.name);
        }
        self.encoder.forget_page();
    }

    fn display_on(&mut self) -> Result<(), Error<CH::Error>> {
        self.encoder
            .dcs(Command::SetDisplayOn, &[])
            .map_err(Error::Channel)?;
        if let Some(backlight) = self.backlight.as_mut() {
            backlight
                .enable()
                .map_err(|_| Error::<CH::Error>::Backlight)?;
        }
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), Error<CH::Error>> {
        if let Some(backlight) = self.backlight.as_mut() {
            backlight
                .disable()
                .map_err(|_| Error::<CH::Error>::Backlight)?;
        }
        self.encoder
            .dcs(Command::SetDisplayOff, &[])
            .map_err(Error::Channel)
    }

    fn power_down(&mut self) -> Result<(), Error<CH::Error>> {
        self.encoder
            .dcs(Command::EnterSleepMode, &[])
            .map_err(Error::Channel)?;
        self.power
            .disable()
            .map_err(|_| Error::<CH::Error>::Power)?;
        self.reset.assert().map_err(|_| Error::Reset)
    }

    fn teardown(&mut self) -> Result<(), Error<CH::Error>> {
        let mut first = Ok(());

        match self.state {
            LifecycleState::Unpowered => return first,
            LifecycleState::Enabled => {
                if let Some(backlight) = self.backlight.as_mut() {
                    keep_first(&mut first, backlight.disable().map_err(|_| Error::Backlight));
                }
                keep_first(
                    &mut first,
                    self.encoder
                        .dcs(Command::SetDisplayOff, &[])
                        .map_err(Error::Channel),
                );
            }
            _ => {}
        }

        keep_first(
            &mut first,
            self.encoder
                .dcs(Command::EnterSleepMode, &[])
                .map_err(Error::Channel),
        );
        keep_first(&mut first, self.power.disable().map_err(|_| Error::Power));
        keep_first(&mut first, self.reset.assert().map_err(|_| Error::Reset));

        if first.is_err() {
            warn!("{}: teardown incomplete", self.descriptor.name);
        }
        self.transition(LifecycleState::Unpowered);
        first
    }
}

impl<CH, PWR, RST, BL> OriginDimensions for Panel<CH, PWR, RST, BL>
where
    CH: CommandChannel,
{
    fn size(&self) -> Size {
        self.descriptor.mode.size()
    }
}

fn acquired<T>(handle: Result<T, ResourceError>) -> Result<T, ResourceError> {
    if let Err(e) = &handle {
        warn!("couldn't get {}: deferred={}", e.kind(), e.is_deferred());
    }
    handle
}

fn keep_first<E>(first: &mut Result<(), E>, result: Result<(), E>) {
    if first.is_ok() {
        *first = result;
    }
}
