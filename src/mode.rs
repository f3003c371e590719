//! Video timings.

use core::fmt;

use embedded_graphics::geometry::Size;

/// One fixed output mode, in the layout display pipelines expect:
/// every horizontal/vertical position counts from the start of the active
/// area, `display <= sync_start <= sync_end <= total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeDescriptor {
    /// Pixel clock in kHz.
    pub clock: u32,
    pub h_display: u16,
    pub h_sync_start: u16,
    pub h_sync_end: u16,
    pub h_total: u16,
    pub v_display: u16,
    pub v_sync_start: u16,
    pub v_sync_end: u16,
    pub v_total: u16,
    /// Nominal refresh rate in Hz.
    pub refresh_hint: u8,
}

impl ModeDescriptor {
    /// Build a mode from active size and porch/sync widths.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_porches(
        clock: u32,
        refresh_hint: u8,
        h_display: u16,
        h_front_porch: u16,
        h_sync: u16,
        h_back_porch: u16,
        v_display: u16,
        v_front_porch: u16,
        v_sync: u16,
        v_back_porch: u16,
    ) -> Self {
        Self {
            clock,
            h_display,
            h_sync_start: h_display + h_front_porch,
            h_sync_end: h_display + h_front_porch + h_sync,
            h_total: h_display + h_front_porch + h_sync + h_back_porch,
            v_display,
            v_sync_start: v_display + v_front_porch,
            v_sync_end: v_display + v_front_porch + v_sync,
            v_total: v_display + v_front_porch + v_sync + v_back_porch,
            refresh_hint,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.clock != 0
            && self.h_display != 0
            && self.v_display != 0
            && self.h_display <= self.h_sync_start
            && self.h_sync_start <= self.h_sync_end
            && self.h_sync_end <= self.h_total
            && self.v_display <= self.v_sync_start
            && self.v_sync_start <= self.v_sync_end
            && self.v_sync_end <= self.v_total
    }

    /// Active area.
    pub const fn size(&self) -> Size {
        Size::new(self.h_display as u32, self.v_display as u32)
    }

    pub const fn h_front_porch(&self) -> u16 {
        self.h_sync_start - self.h_display
    }

    pub const fn h_sync_len(&self) -> u16 {
        self.h_sync_end - self.h_sync_start
    }

    pub const fn h_back_porch(&self) -> u16 {
        self.h_total - self.h_sync_end
    }

    pub const fn v_front_porch(&self) -> u16 {
        self.v_sync_start - self.v_display
    }

    pub const fn v_sync_len(&self) -> u16 {
        self.v_sync_end - self.v_sync_start
    }

    pub const fn v_back_porch(&self) -> u16 {
        self.v_total - self.v_sync_end
    }

    /// Refresh rate the timings actually produce, rounded to the closest Hz.
    pub fn refresh_rate(&self) -> u32 {
        let pixels = self.h_total as u64 * self.v_total as u64;
        if pixels == 0 {
            return 0;
        }
        let hz = (self.clock as u64 * 1000 + pixels / 2) / pixels;
        hz as u32
    }
}

/// Mode name, e.g. `720x1280`.
impl fmt::Display for ModeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.h_display, self.v_display)
    }
}

/// What a panel reports to the mode registration side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelModes {
    /// The single, preferred mode.
    pub mode: ModeDescriptor,
    pub width_mm: u16,
    pub height_mm: u16,
}
