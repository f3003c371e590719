//! ILI9881C
//!
//! For:
//! - Chance W500HDC023, 5" 720x1280 MIPI-DSI, 4 lanes

use crate::command::TearMode;
use crate::instruction::{Instruction, InstructionTable, Paging};
use crate::interface::{LinkConfig, PixelFormat, VideoMode};
use crate::mode::ModeDescriptor;

use super::{PanelDescriptor, Timings};

// Panel-tuned sequence, not the controller vendor's reference one.
#[rustfmt::skip]
const INIT: &[Instruction] = &[
    // GIP timing
    Instruction::page(3),
    Instruction::write(0x01, 0x00),
    Instruction::write(0x01, 0x00),
    Instruction::write(0x02, 0x00),
    Instruction::write(0x03, 0x73),
    Instruction::write(0x04, 0x00),
    Instruction::write(0x05, 0x00),
    Instruction::write(0x06, 0x0e),
    Instruction::write(0x07, 0x00),
    Instruction::write(0x08, 0x00),
    Instruction::write(0x09, 0x01),
    Instruction::write(0x0a, 0x01),
    Instruction::write(0x0b, 0x01),
    Instruction::write(0x0c, 0x01),
    Instruction::write(0x0d, 0x01),
    Instruction::write(0x0e, 0x01),
    Instruction::write(0x0f, 0x00),
    Instruction::write(0x10, 0x00),
    Instruction::write(0x11, 0x00),
    Instruction::write(0x12, 0x00),
    Instruction::write(0x13, 0x00),
    Instruction::write(0x14, 0x00),
    Instruction::write(0x15, 0x00),
    Instruction::write(0x16, 0x00),
    Instruction::write(0x17, 0x00),
    Instruction::write(0x18, 0x00),
    Instruction::write(0x19, 0x00),
    Instruction::write(0x1a, 0x00),
    Instruction::write(0x1b, 0x00),
    Instruction::write(0x1c, 0x00),
    Instruction::write(0x1d, 0x00),
    Instruction::write(0x1e, 0x40),
    Instruction::write(0x1f, 0xc0),
    Instruction::write(0x20, 0x0a),
    Instruction::write(0x21, 0x05),
    Instruction::write(0x22, 0x00),
    Instruction::write(0x23, 0x00),
    Instruction::write(0x24, 0x00),
    Instruction::write(0x25, 0x00),
    Instruction::write(0x26, 0x00),
    Instruction::write(0x27, 0x00),
    Instruction::write(0x28, 0x33),
    Instruction::write(0x29, 0x03),
    Instruction::write(0x2a, 0x00),
    Instruction::write(0x2b, 0x00),
    Instruction::write(0x2c, 0x00),
    Instruction::write(0x2d, 0x00),
    Instruction::write(0x2e, 0x00),
    Instruction::write(0x2f, 0x00),
    Instruction::write(0x30, 0x00),
    Instruction::write(0x31, 0x00),
    Instruction::write(0x32, 0x00),
    Instruction::write(0x33, 0x00),
    Instruction::write(0x34, 0x00),
    Instruction::write(0x35, 0x00),
    Instruction::write(0x36, 0x00),
    Instruction::write(0x37, 0x00),
    Instruction::write(0x38, 0x00),
    Instruction::write(0x39, 0x35),
    Instruction::write(0x3a, 0x01),
    Instruction::write(0x3b, 0x40),
    Instruction::write(0x3c, 0x00),
    Instruction::write(0x3d, 0x01),
    Instruction::write(0x3e, 0x00),
    Instruction::write(0x3f, 0x00),
    Instruction::write(0x40, 0x35),
    Instruction::write(0x41, 0x88),
    Instruction::write(0x42, 0x00),
    Instruction::write(0x43, 0x40),
    Instruction::write(0x44, 0x3f),
    Instruction::write(0x45, 0x20),
    Instruction::write(0x46, 0x00),
    Instruction::write(0x50, 0x01),
    Instruction::write(0x51, 0x23),
    Instruction::write(0x52, 0x45),
    Instruction::write(0x53, 0x67),
    Instruction::write(0x54, 0x89),
    Instruction::write(0x55, 0xab),
    Instruction::write(0x56, 0x01),
    Instruction::write(0x57, 0x23),
    Instruction::write(0x58, 0x45),
    Instruction::write(0x59, 0x67),
    Instruction::write(0x5a, 0x89),
    Instruction::write(0x5b, 0xab),
    Instruction::write(0x5c, 0xcd),
    Instruction::write(0x5d, 0xef),
    Instruction::write(0x5e, 0x11),
    Instruction::write(0x5f, 0x0c),
    Instruction::write(0x60, 0x0d),
    Instruction::write(0x61, 0x0e),
    Instruction::write(0x62, 0x0f),
    Instruction::write(0x63, 0x06),
    Instruction::write(0x64, 0x07),
    Instruction::write(0x65, 0x02),
    Instruction::write(0x66, 0x02),
    Instruction::write(0x67, 0x02),
    Instruction::write(0x68, 0x02),
    Instruction::write(0x69, 0x02),
    Instruction::write(0x6a, 0x02),
    Instruction::write(0x6b, 0x02),
    Instruction::write(0x6c, 0x02),
    Instruction::write(0x6d, 0x02),
    Instruction::write(0x6e, 0x02),
    Instruction::write(0x6f, 0x02),
    Instruction::write(0x70, 0x02),
    Instruction::write(0x71, 0x02),
    Instruction::write(0x72, 0x02),
    Instruction::write(0x73, 0x01),
    Instruction::write(0x74, 0x00),
    Instruction::write(0x75, 0x0c),
    Instruction::write(0x76, 0x0d),
    Instruction::write(0x77, 0x0e),
    Instruction::write(0x78, 0x0f),
    Instruction::write(0x79, 0x06),
    Instruction::write(0x7a, 0x07),
    Instruction::write(0x7b, 0x02),
    Instruction::write(0x7c, 0x02),
    Instruction::write(0x7d, 0x02),
    Instruction::write(0x7e, 0x02),
    Instruction::write(0x7f, 0x02),
    Instruction::write(0x80, 0x02),
    Instruction::write(0x81, 0x02),
    Instruction::write(0x82, 0x02),
    Instruction::write(0x83, 0x02),
    Instruction::write(0x84, 0x02),
    Instruction::write(0x85, 0x02),
    Instruction::write(0x86, 0x02),
    Instruction::write(0x87, 0x02),
    Instruction::write(0x88, 0x02),
    Instruction::write(0x89, 0x01),
    Instruction::write(0x8a, 0x00),
    // power control
    Instruction::page(4),
    Instruction::write(0x68, 0xdb),
    Instruction::write(0x6d, 0x08),
    Instruction::write(0x70, 0x00),
    Instruction::write(0x71, 0x00),
    Instruction::write(0x66, 0x1e),
    Instruction::write(0x3a, 0x24),
    Instruction::write(0x82, 0x0a),
    Instruction::write(0x84, 0x0a),
    Instruction::write(0x85, 0x1d),
    Instruction::write(0x32, 0xac),
    Instruction::write(0x8c, 0x80),
    Instruction::write(0x3c, 0xf5),
    Instruction::write(0x3a, 0x24),
    Instruction::write(0xb5, 0x02),
    Instruction::write(0x31, 0x25),
    Instruction::write(0x88, 0x33),
    Instruction::write(0x38, 0x01),
    Instruction::write(0x39, 0x00),
    // source, VCOM and gamma
    Instruction::page(1),
    Instruction::write(0x22, 0x0a),
    Instruction::write(0x31, 0x00),
    Instruction::write(0x50, 0x5c),
    Instruction::write(0x51, 0x5c),
    Instruction::write(0x53, 0x65),
    Instruction::write(0x55, 0x68),
    Instruction::write(0x60, 0x2b),
    Instruction::write(0x61, 0x00),
    Instruction::write(0x62, 0x19),
    Instruction::write(0x63, 0x00),
    Instruction::write(0xa0, 0x00),
    Instruction::write(0xa1, 0x09),
    Instruction::write(0xa2, 0x11),
    Instruction::write(0xa3, 0x0e),
    Instruction::write(0xa4, 0x16),
    Instruction::write(0xa5, 0x1f),
    Instruction::write(0xa6, 0x14),
    Instruction::write(0xa7, 0x18),
    Instruction::write(0xa8, 0x46),
    Instruction::write(0xa9, 0x1c),
    Instruction::write(0xaa, 0x28),
    Instruction::write(0xab, 0x3e),
    Instruction::write(0xac, 0x18),
    Instruction::write(0xad, 0x17),
    Instruction::write(0xae, 0x4c),
    Instruction::write(0xaf, 0x22),
    Instruction::write(0xb0, 0x28),
    Instruction::write(0xb1, 0x43),
    Instruction::write(0xb2, 0x64),
    Instruction::write(0xb3, 0x39),
    Instruction::write(0xc0, 0x00),
    Instruction::write(0xc1, 0x09),
    Instruction::write(0xc2, 0x11),
    Instruction::write(0xc3, 0x0e),
    Instruction::write(0xc4, 0x16),
    Instruction::write(0xc5, 0x1f),
    Instruction::write(0xc6, 0x14),
    Instruction::write(0xc7, 0x18),
    Instruction::write(0xc8, 0x46),
    Instruction::write(0xc9, 0x1c),
    Instruction::write(0xca, 0x28),
    Instruction::write(0xcb, 0x3e),
    Instruction::write(0xcc, 0x18),
    Instruction::write(0xcd, 0x17),
    Instruction::write(0xce, 0x4c),
    Instruction::write(0xcf, 0x22),
    Instruction::write(0xd0, 0x28),
    Instruction::write(0xd1, 0x43),
    Instruction::write(0xd2, 0x64),
    Instruction::write(0xd3, 0x39),
];

pub const W500HDC023: PanelDescriptor = PanelDescriptor {
    name: "ili9881c",
    compatible: "chance,w500hdc023",
    table: InstructionTable::new(Paging::Explicit, INIT),
    // 62.469MHz, 60Hz
    mode: ModeDescriptor::from_porches(62_469, 60, 720, 24, 4, 36, 1280, 32, 4, 12),
    width_mm: 62,
    height_mm: 110,
    link: LinkConfig::new(4, PixelFormat::Rgb888, VideoMode::SyncPulse),
    tear_mode: TearMode::VBlank,
    timings: Timings::MIN,
};
