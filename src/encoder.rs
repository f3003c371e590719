//! Page-addressed register protocol.
//!
//! The controller accepts private DCS writes that map directly onto its
//! registers. Registers are grouped in pages, page 0 holding the standard DCS
//! command set, so before any register write the right page has to be
//! selected with the `FFh 98h 81h <page>` frame.
//!
//! The encoder does not switch pages on its own: register writes go to
//! whatever page was last selected, table order takes care of the rest.

use core::fmt;

use crate::command::{Command, DCS_PAGE, PAGE_UNLOCK};
use crate::instruction::{Instruction, InstructionTable};
use crate::interface::CommandChannel;

/// A table replay stopped at `index`, entries before it were all sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableError<E> {
    pub index: usize,
    pub instruction: Instruction,
    pub error: E,
}

impl<E: fmt::Debug> fmt::Display for TableError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "init instruction #{} ({:?}) failed: {:?}",
            self.index, self.instruction, self.error
        )
    }
}

/// Owns the command channel and tracks which page it is addressing.
pub struct PageEncoder<CH> {
    channel: CH,
    current_page: u8,
}

impl<CH> PageEncoder<CH>
where
    CH: CommandChannel,
{
    pub fn new(channel: CH) -> Self {
        Self {
            channel,
            current_page: DCS_PAGE,
        }
    }

    pub fn current_page(&self) -> u8 {
        self.current_page
    }

    /// Select `page`. The tracker only moves once the frame was accepted.
    pub fn switch_page(&mut self, page: u8) -> Result<(), CH::Error> {
        let [k0, k1, k2] = PAGE_UNLOCK;
        self.channel.send(&[k0, k1, k2, page])?;
        self.current_page = page;
        Ok(())
    }

    /// Write one register of the current page.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), CH::Error> {
        self.channel.send(&[register, value])
    }

    pub fn execute(&mut self, instruction: Instruction) -> Result<(), CH::Error> {
        match instruction {
            Instruction::SwitchPage { page } => self.switch_page(page),
            Instruction::WriteRegister { register, value } => {
                self.write_register(register, value)
            }
        }
    }

    /// Replay a whole table, stopping at the first failing entry.
    ///
    /// Returns the number of instructions sent.
    pub fn run(&mut self, table: &InstructionTable) -> Result<usize, TableError<CH::Error>> {
        trace!("running init table, {} entries", table.len());

        for (index, instruction) in table.iter().enumerate() {
            if let Err(error) = self.execute(instruction) {
                warn!("init instruction #{} failed", index);
                return Err(TableError {
                    index,
                    instruction,
                    error,
                });
            }
        }
        Ok(table.len())
    }

    /// Send a standard DCS command. Page 0 must be selected.
    pub fn dcs(&mut self, command: Command, params: &[u8]) -> Result<(), CH::Error> {
        debug_assert_eq!(self.current_page, DCS_PAGE, "DCS command outside page 0");

        if params.is_empty() {
            self.channel.send_command(command.opcode())
        } else {
            self.channel.send_command_data(command.opcode(), params)
        }
    }

    /// The controller comes out of reset on page 0, call this whenever the
    /// reset line was pulsed.
    pub fn forget_page(&mut self) {
        self.current_page = DCS_PAGE;
    }

    pub fn release(self) -> CH {
        self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Paging;

    #[derive(Default)]
    struct FakeChannel {
        frames: Vec<Vec<u8>>,
        fail_at: Option<usize>,
    }

    #[derive(Debug, PartialEq)]
    struct Nack(usize);

    impl CommandChannel for FakeChannel {
        type Error = Nack;

        fn send(&mut self, bytes: &[u8]) -> Result<(), Nack> {
            let n = self.frames.len();
            if self.fail_at == Some(n) {
                return Err(Nack(n));
            }
            self.frames.push(bytes.to_vec());
            Ok(())
        }
    }

    #[test]
    fn switch_page_frame_for_every_page() {
        let mut enc = PageEncoder::new(FakeChannel::default());
        for page in 0..=255u8 {
            enc.switch_page(page).unwrap();
            assert_eq!(enc.current_page(), page);
        }
        let ch = enc.release();
        assert_eq!(ch.frames.len(), 256);
        for (page, frame) in ch.frames.iter().enumerate() {
            assert_eq!(frame, &[0xff, 0x98, 0x81, page as u8]);
        }
    }

    #[test]
    fn write_register_is_two_bytes_and_keeps_page() {
        let mut enc = PageEncoder::new(FakeChannel::default());
        enc.switch_page(4).unwrap();
        enc.write_register(0x6d, 0x08).unwrap();
        enc.write_register(0x00, 0xff).unwrap();
        assert_eq!(enc.current_page(), 4);
        assert_eq!(
            enc.release().frames,
            [vec![0xff, 0x98, 0x81, 4], vec![0x6d, 0x08], vec![0x00, 0xff]]
        );
    }

    #[test]
    fn failed_switch_leaves_tracker_alone() {
        let mut enc = PageEncoder::new(FakeChannel {
            fail_at: Some(1),
            ..Default::default()
        });
        enc.switch_page(3).unwrap();
        assert_eq!(enc.switch_page(1), Err(Nack(1)));
        assert_eq!(enc.current_page(), 3);
    }

    #[test]
    fn run_stops_at_first_failure() {
        const ENTRIES: &[Instruction] = &[
            Instruction::page(3),
            Instruction::write(0x01, 0x00),
            Instruction::write(0x02, 0x00),
            Instruction::page(1),
            Instruction::write(0x22, 0x0a),
        ];
        const TABLE: InstructionTable = InstructionTable::new(Paging::Explicit, ENTRIES);

        let mut enc = PageEncoder::new(FakeChannel {
            fail_at: Some(3),
            ..Default::default()
        });
        let err = enc.run(&TABLE).unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(err.instruction, Instruction::page(1));
        assert_eq!(err.error, Nack(3));
        assert_eq!(enc.current_page(), 3);
        assert_eq!(enc.release().frames.len(), 3);
    }

    #[test]
    fn dcs_commands() {
        let mut enc = PageEncoder::new(FakeChannel::default());
        enc.dcs(Command::SetTearOn, &[0x00]).unwrap();
        enc.dcs(Command::ExitSleepMode, &[]).unwrap();
        assert_eq!(enc.release().frames, [vec![0x35, 0x00], vec![0x11]]);
    }

    #[test]
    fn forget_page_returns_to_dcs_page() {
        let mut enc = PageEncoder::new(FakeChannel::default());
        enc.switch_page(4).unwrap();
        enc.forget_page();
        assert_eq!(enc.current_page(), DCS_PAGE);
    }
}
