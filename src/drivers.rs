use crate::command::TearMode;
use crate::instruction::InstructionTable;
use crate::interface::LinkConfig;
use crate::mode::{ModeDescriptor, PanelModes};

pub use self::ili9881c::*;
pub use self::ili9881d::*;

mod ili9881c;
mod ili9881d;

/// Every panel this crate knows, in match order.
pub static PANELS: &[&PanelDescriptor] = &[&W500HDC023, &W500HDC019];

/// Look a panel up by its device tree style compatible string.
pub fn find(compatible: &str) -> Option<&'static PanelDescriptor> {
    PANELS.iter().copied().find(|panel| panel.matches(compatible))
}

/// Minimum settle times of the power-up and power-down sequences, in ms.
///
/// These come from the controller datasheet and are lower bounds: the setters
/// only ever lengthen a wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timings {
    power_settle_ms: u32,
    reset_assert_ms: u32,
    reset_release_ms: u32,
    enable_settle_ms: u32,
}

const fn at_least(ms: u32, min: u32) -> u32 {
    if ms < min {
        min
    } else {
        ms
    }
}

impl Timings {
    pub const MIN: Timings = Timings {
        power_settle_ms: 5,
        reset_assert_ms: 20,
        reset_release_ms: 20,
        enable_settle_ms: 120,
    };

    /// After the supply is switched on, before touching reset.
    pub const fn power_settle_ms(&self) -> u32 {
        self.power_settle_ms
    }

    /// Reset pulse width.
    pub const fn reset_assert_ms(&self) -> u32 {
        self.reset_assert_ms
    }

    /// After reset is released, before the first command.
    pub const fn reset_release_ms(&self) -> u32 {
        self.reset_release_ms
    }

    /// After sleep out, before display on.
    pub const fn enable_settle_ms(&self) -> u32 {
        self.enable_settle_ms
    }

    pub const fn with_power_settle_ms(mut self, ms: u32) -> Self {
        self.power_settle_ms = at_least(ms, Self::MIN.power_settle_ms);
        self
    }

    pub const fn with_reset_assert_ms(mut self, ms: u32) -> Self {
        self.reset_assert_ms = at_least(ms, Self::MIN.reset_assert_ms);
        self
    }

    pub const fn with_reset_release_ms(mut self, ms: u32) -> Self {
        self.reset_release_ms = at_least(ms, Self::MIN.reset_release_ms);
        self
    }

    pub const fn with_enable_settle_ms(mut self, ms: u32) -> Self {
        self.enable_settle_ms = at_least(ms, Self::MIN.enable_settle_ms);
        self
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::MIN
    }
}

/// Everything that tells one panel model apart from another.
#[derive(Clone, Copy, Debug)]
pub struct PanelDescriptor {
    /// Driver name, for logs.
    pub name: &'static str,
    pub compatible: &'static str,
    /// Vendor init sequence, replayed on every prepare.
    pub table: InstructionTable,
    pub mode: ModeDescriptor,
    pub width_mm: u16,
    pub height_mm: u16,
    pub link: LinkConfig,
    pub tear_mode: TearMode,
    pub timings: Timings,
}

impl PanelDescriptor {
    pub fn matches(&self, compatible: &str) -> bool {
        self.compatible == compatible
    }

    pub const fn modes(&self) -> PanelModes {
        PanelModes {
            mode: self.mode,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{Instruction, Paging};
    use crate::interface::{PixelFormat, VideoMode};

    #[test]
    fn timings_never_shrink() {
        let t = Timings::MIN
            .with_power_settle_ms(1)
            .with_reset_assert_ms(0)
            .with_reset_release_ms(50)
            .with_enable_settle_ms(200);
        assert_eq!(t.power_settle_ms(), 5);
        assert_eq!(t.reset_assert_ms(), 20);
        assert_eq!(t.reset_release_ms(), 50);
        assert_eq!(t.enable_settle_ms(), 200);
        assert_eq!(Timings::default(), Timings::MIN);
    }

    #[test]
    fn lookup_by_compatible() {
        assert_eq!(find("chance,w500hdc023").map(|p| p.name), Some("ili9881c"));
        assert_eq!(find("chance,w500hdc019").map(|p| p.name), Some("ili9881d"));
        assert!(find("chance,w500hdc0").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn shipped_panels_are_well_formed() {
        for panel in PANELS {
            assert_eq!(panel.table.validate(), Ok(()), "{}", panel.name);
            assert_eq!(panel.table.paging(), Paging::Explicit);
            assert!(panel.mode.is_valid(), "{}", panel.name);
            assert_eq!(panel.mode.refresh_rate(), u32::from(panel.mode.refresh_hint));
            assert_eq!(
                panel.link,
                LinkConfig::new(4, PixelFormat::Rgb888, VideoMode::SyncPulse)
            );
            assert_eq!(panel.tear_mode, TearMode::VBlank);
            assert_eq!(panel.timings, Timings::MIN);
            assert_eq!((panel.width_mm, panel.height_mm), (62, 110));
        }
    }

    #[test]
    fn tables_visit_pages_3_4_1() {
        for panel in PANELS {
            let pages: Vec<u8> = panel
                .table
                .iter()
                .filter_map(|i| match i {
                    Instruction::SwitchPage { page } => Some(page),
                    _ => None,
                })
                .collect();
            assert_eq!(pages, [3, 4, 1], "{}", panel.name);
        }
    }

    #[test]
    fn compatibles_are_unique() {
        for (i, a) in PANELS.iter().enumerate() {
            for b in &PANELS[i + 1..] {
                assert_ne!(a.compatible, b.compatible);
            }
        }
    }
}
