//! Recording doubles for the panel's handles.
//!
//! Every double writes into one shared log so tests can assert the exact
//! interleaving of power, reset, delays and command frames.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use ili9881::drivers::W500HDC023;
use ili9881::resources::{Acquire, Backlight, PowerSupply, ResetLine, ResourceProvider};
use ili9881::{CommandChannel, Instruction, InstructionTable, LinkConfig, PanelDescriptor, Paging};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Attach(LinkConfig),
    Detach,
    Frame(Vec<u8>),
    PowerOn,
    PowerOff,
    ResetAssert,
    ResetDeassert,
    BacklightOn,
    BacklightOff,
    DelayMs(u32),
}

/// Error of the command channel double, carries the index of the refused frame.
#[derive(Debug, PartialEq, Eq)]
pub struct Nack(pub usize);

/// Error of the switch doubles.
#[derive(Debug, PartialEq, Eq)]
pub struct Refused;

#[derive(Default)]
struct Shared {
    log: RefCell<Vec<Event>>,
    sent: Cell<usize>,
    fail_frame: Cell<Option<usize>>,
    fail_power: Cell<bool>,
    fail_reset: Cell<bool>,
    fail_backlight: Cell<bool>,
}

/// Hands out handles that all record into the same log.
#[derive(Clone, Default)]
pub struct Bench(Rc<Shared>);

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self) -> MockChannel {
        MockChannel(self.clone())
    }

    pub fn power(&self) -> MockPower {
        MockPower(self.clone())
    }

    pub fn reset(&self) -> MockReset {
        MockReset(self.clone())
    }

    pub fn backlight(&self) -> MockBacklight {
        MockBacklight(self.clone())
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay(self.clone())
    }

    /// Refuse the frame with this zero-based index, counted over the bench's
    /// lifetime.
    pub fn fail_frame(&self, index: Option<usize>) {
        self.0.fail_frame.set(index);
    }

    pub fn fail_power(&self, fail: bool) {
        self.0.fail_power.set(fail);
    }

    pub fn fail_reset(&self, fail: bool) {
        self.0.fail_reset.set(fail);
    }

    pub fn fail_backlight(&self, fail: bool) {
        self.0.fail_backlight.set(fail);
    }

    /// Frames accepted so far.
    pub fn sent(&self) -> usize {
        self.0.sent.get()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.log.borrow().clone()
    }

    /// Take the log, leaving it empty.
    pub fn drain(&self) -> Vec<Event> {
        self.0.log.borrow_mut().drain(..).collect()
    }

    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.0
            .log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Frame(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.0.log.borrow_mut().push(event);
    }
}

pub struct MockChannel(Bench);

impl CommandChannel for MockChannel {
    type Error = Nack;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Nack> {
        let n = self.0 .0.sent.get();
        if self.0 .0.fail_frame.get() == Some(n) {
            return Err(Nack(n));
        }
        self.0 .0.sent.set(n + 1);
        self.0.record(Event::Frame(bytes.to_vec()));
        Ok(())
    }

    fn attach(&mut self, link: &LinkConfig) -> Result<(), Nack> {
        self.0.record(Event::Attach(*link));
        Ok(())
    }

    fn detach(&mut self) {
        self.0.record(Event::Detach);
    }
}

pub struct MockPower(Bench);

impl PowerSupply for MockPower {
    type Error = Refused;

    fn enable(&mut self) -> Result<(), Refused> {
        if self.0 .0.fail_power.get() {
            return Err(Refused);
        }
        self.0.record(Event::PowerOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Refused> {
        if self.0 .0.fail_power.get() {
            return Err(Refused);
        }
        self.0.record(Event::PowerOff);
        Ok(())
    }
}

pub struct MockReset(Bench);

impl ResetLine for MockReset {
    type Error = Refused;

    fn assert(&mut self) -> Result<(), Refused> {
        if self.0 .0.fail_reset.get() {
            return Err(Refused);
        }
        self.0.record(Event::ResetAssert);
        Ok(())
    }

    fn deassert(&mut self) -> Result<(), Refused> {
        if self.0 .0.fail_reset.get() {
            return Err(Refused);
        }
        self.0.record(Event::ResetDeassert);
        Ok(())
    }
}

pub struct MockBacklight(Bench);

impl Backlight for MockBacklight {
    type Error = Refused;

    fn enable(&mut self) -> Result<(), Refused> {
        if self.0 .0.fail_backlight.get() {
            return Err(Refused);
        }
        self.0.record(Event::BacklightOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Refused> {
        if self.0 .0.fail_backlight.get() {
            return Err(Refused);
        }
        self.0.record(Event::BacklightOff);
        Ok(())
    }
}

pub struct MockDelay(Bench);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.record(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.record(Event::DelayMs(ms));
    }
}

/// Resource lookup double, each handle can be handed out once.
pub struct MockProvider {
    pub power: Option<Acquire<MockPower>>,
    pub reset: Option<Acquire<MockReset>>,
    pub backlight: Option<Acquire<MockBacklight>>,
}

impl MockProvider {
    /// All three handles ready.
    pub fn complete(bench: &Bench) -> Self {
        Self {
            power: Some(Acquire::Ready(bench.power())),
            reset: Some(Acquire::Ready(bench.reset())),
            backlight: Some(Acquire::Ready(bench.backlight())),
        }
    }
}

impl ResourceProvider for MockProvider {
    type Power = MockPower;
    type Reset = MockReset;
    type Backlight = MockBacklight;

    fn power(&mut self) -> Acquire<MockPower> {
        self.power.take().unwrap_or(Acquire::Absent)
    }

    fn reset(&mut self) -> Acquire<MockReset> {
        self.reset.take().unwrap_or(Acquire::Absent)
    }

    fn backlight(&mut self) -> Acquire<MockBacklight> {
        self.backlight.take().unwrap_or(Acquire::Absent)
    }
}

const fn fifty_entries() -> [Instruction; 50] {
    let mut entries = [Instruction::page(3); 50];
    let mut i = 1;
    while i < 50 {
        entries[i] = Instruction::write(i as u8, 0x5a);
        i += 1;
    }
    entries
}

/// One page switch followed by 49 register writes.
pub const FIFTY: [Instruction; 50] = fifty_entries();

/// A panel like the W500HDC023 with a short, predictable init table.
pub static TEST_PANEL: PanelDescriptor = PanelDescriptor {
    name: "test",
    compatible: "test,panel",
    table: InstructionTable::new(Paging::Explicit, &FIFTY),
    ..W500HDC023
};

/// Frames `prepare` sends for a table of this many entries: the table, the
/// switch back to page 0, tear on and sleep out.
pub fn prepare_frames(table: &[Instruction]) -> Vec<Vec<u8>> {
    let mut frames: Vec<Vec<u8>> = table
        .iter()
        .map(|i| match *i {
            Instruction::SwitchPage { page } => vec![0xff, 0x98, 0x81, page],
            Instruction::WriteRegister { register, value } => vec![register, value],
        })
        .collect();
    frames.push(vec![0xff, 0x98, 0x81, 0x00]);
    frames.push(vec![0x35, 0x00]);
    frames.push(vec![0x11]);
    frames
}
