//! Vendor init sequences.
//!
//! An init sequence is a flat list of page switches and single byte register
//! writes, replayed in order. Later writes may depend on the page selected by
//! an earlier entry, so tables are never reordered or filtered.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

/// One step of an init sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// Select the register bank subsequent writes go to.
    SwitchPage { page: u8 },
    /// Write one byte to one register of the current page.
    WriteRegister { register: u8, value: u8 },
}

impl Instruction {
    pub const fn page(page: u8) -> Self {
        Instruction::SwitchPage { page }
    }

    pub const fn write(register: u8, value: u8) -> Self {
        Instruction::WriteRegister { register, value }
    }

    pub const fn is_page_switch(&self) -> bool {
        matches!(self, Instruction::SwitchPage { .. })
    }
}

/// Whether a controller family needs an explicit page select before the first
/// register write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paging {
    /// Vendor registers are only reachable after a page switch.
    Explicit,
    /// Writes before the first switch land on the power-on default page.
    Implicit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// The table has no instruction at all.
    Empty,
    /// The controller needs explicit paging but the table starts with a
    /// register write.
    MissingInitialPageSwitch,
}

impl ValidationError {
    const fn message(self) -> &'static str {
        match self {
            ValidationError::Empty => "init table is empty",
            ValidationError::MissingInitialPageSwitch => {
                "init table must start with a page switch"
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An immutable, ordered init sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionTable {
    paging: Paging,
    instructions: &'static [Instruction],
}

impl InstructionTable {
    /// Wrap a static instruction list.
    ///
    /// Panics when the list fails [`validate`](Self::validate). Used to
    /// initialise a `const`, a malformed table is then a compile error.
    pub const fn new(paging: Paging, instructions: &'static [Instruction]) -> Self {
        let table = Self {
            paging,
            instructions,
        };
        if let Err(e) = table.validate() {
            panic!("{}", e.message());
        }
        table
    }

    pub const fn validate(&self) -> Result<(), ValidationError> {
        match self.instructions.first() {
            None => Err(ValidationError::Empty),
            Some(Instruction::WriteRegister { .. }) if matches!(self.paging, Paging::Explicit) => {
                Err(ValidationError::MissingInitialPageSwitch)
            }
            Some(_) => Ok(()),
        }
    }

    pub const fn paging(&self) -> Paging {
        self.paging
    }

    pub const fn len(&self) -> usize {
        self.instructions.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub const fn as_slice(&self) -> &'static [Instruction] {
        self.instructions
    }

    /// Number of page switches in the table.
    pub fn pages(&self) -> usize {
        self.iter().filter(Instruction::is_page_switch).count()
    }

    /// Walk the table in order. Cloning the iterator saves a position the walk
    /// can be restarted from.
    pub fn iter(&self) -> Iter {
        Iter {
            inner: self.instructions.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a InstructionTable {
    type Item = Instruction;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Iter {
    inner: slice::Iter<'static, Instruction>,
}

impl Iterator for Iter {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
