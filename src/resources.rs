//! Power, reset and backlight handles.
//!
//! The panel engine only needs switch-like capabilities. Boards wire these to
//! regulators, GPIO expanders or PWM drivers; plain GPIO adapters over
//! `embedded_hal::digital::OutputPin` are provided here.

use core::fmt;

use embedded_hal::digital::OutputPin;

pub trait PowerSupply {
    type Error: fmt::Debug;

    fn enable(&mut self) -> Result<(), Self::Error>;
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// Reset input of the controller, in logical terms: `assert` holds the
/// controller in reset whatever the electrical polarity.
pub trait ResetLine {
    type Error: fmt::Debug;

    fn assert(&mut self) -> Result<(), Self::Error>;
    fn deassert(&mut self) -> Result<(), Self::Error>;
}

pub trait Backlight {
    type Error: fmt::Debug;

    fn enable(&mut self) -> Result<(), Self::Error>;
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// Electrical level meaning "active".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

fn drive<P: OutputPin>(pin: &mut P, polarity: Polarity, active: bool) -> Result<(), P::Error> {
    match (polarity, active) {
        (Polarity::ActiveHigh, true) | (Polarity::ActiveLow, false) => pin.set_high(),
        (Polarity::ActiveHigh, false) | (Polarity::ActiveLow, true) => pin.set_low(),
    }
}

/// Load switch or regulator enable on a GPIO.
pub struct PowerPin<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> PowerPin<P> {
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveHigh)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> PowerSupply for PowerPin<P> {
    type Error = P::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        drive(&mut self.pin, self.polarity, true)
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        drive(&mut self.pin, self.polarity, false)
    }
}

/// Reset line on a GPIO. The ILI9881 RESX input is active low.
pub struct ResetPin<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> ResetPin<P> {
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveLow)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ResetLine for ResetPin<P> {
    type Error = P::Error;

    fn assert(&mut self) -> Result<(), Self::Error> {
        drive(&mut self.pin, self.polarity, true)
    }

    fn deassert(&mut self) -> Result<(), Self::Error> {
        drive(&mut self.pin, self.polarity, false)
    }
}

/// Backlight enable on a GPIO, full brightness when on.
pub struct BacklightPin<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> BacklightPin<P> {
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveHigh)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Backlight for BacklightPin<P> {
    type Error = P::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        drive(&mut self.pin, self.polarity, true)
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        drive(&mut self.pin, self.polarity, false)
    }
}

/// Placeholder for boards without a controllable backlight.
///
/// Never constructed, only names the type of `None`.
pub enum NoBacklight {}

impl Backlight for NoBacklight {
    type Error = core::convert::Infallible;

    fn enable(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}

/// Which handle an acquisition error is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceKind {
    Power,
    Reset,
    Backlight,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Power => "power supply",
            ResourceKind::Reset => "reset line",
            ResourceKind::Backlight => "backlight",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// A mandatory handle is not described for this device.
    Missing(ResourceKind),
    /// The handle exists but its provider is not up yet, attach again later.
    Deferred(ResourceKind),
}

impl ResourceError {
    pub fn kind(&self) -> ResourceKind {
        match *self {
            ResourceError::Missing(kind) | ResourceError::Deferred(kind) => kind,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ResourceError::Deferred(_))
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Missing(kind) => write!(f, "couldn't get {}", kind),
            ResourceError::Deferred(kind) => write!(f, "{} not available yet", kind),
        }
    }
}

/// Outcome of looking up one handle.
#[derive(Debug)]
pub enum Acquire<T> {
    Ready(T),
    /// Not described for this device.
    Absent,
    /// Described, but not available yet.
    Deferred,
}

impl<T> Acquire<T> {
    /// A handle the panel cannot work without.
    pub fn required(self, kind: ResourceKind) -> Result<T, ResourceError> {
        match self {
            Acquire::Ready(handle) => Ok(handle),
            Acquire::Absent => Err(ResourceError::Missing(kind)),
            Acquire::Deferred => Err(ResourceError::Deferred(kind)),
        }
    }

    /// A handle the panel can do without. Absence is fine, a described but
    /// missing provider still defers the attach.
    pub fn optional(self, kind: ResourceKind) -> Result<Option<T>, ResourceError> {
        match self {
            Acquire::Ready(handle) => Ok(Some(handle)),
            Acquire::Absent => Ok(None),
            Acquire::Deferred => Err(ResourceError::Deferred(kind)),
        }
    }
}

/// Platform side of the binding: hands out the handles of one device.
pub trait ResourceProvider {
    type Power: PowerSupply;
    type Reset: ResetLine;
    type Backlight: Backlight;

    fn power(&mut self) -> Acquire<Self::Power>;
    fn reset(&mut self) -> Acquire<Self::Reset>;
    fn backlight(&mut self) -> Acquire<Self::Backlight>;
}
