//! ILI9881D
//!
//! For:
//! - Chance W500HDC019, 5" 720x1280 MIPI-DSI, 4 lanes
//!
//! Same engine as the ILI9881C, only the register values and timings differ.

use crate::command::TearMode;
use crate::instruction::{Instruction, InstructionTable, Paging};
use crate::interface::{LinkConfig, PixelFormat, VideoMode};
use crate::mode::ModeDescriptor;

use super::{PanelDescriptor, Timings};

#[rustfmt::skip]
const INIT: &[Instruction] = &[
    // GIP timing
    Instruction::page(3),
    Instruction::write(0x01, 0x00),
    Instruction::write(0x02, 0x00),
    Instruction::write(0x03, 0x53),
    Instruction::write(0x04, 0x13),
    Instruction::write(0x05, 0x13),
    Instruction::write(0x06, 0x06),
    Instruction::write(0x07, 0x00),
    Instruction::write(0x08, 0x04),
    Instruction::write(0x09, 0x00),
    Instruction::write(0x0a, 0x00),
    Instruction::write(0x0b, 0x00),
    Instruction::write(0x0c, 0x00),
    Instruction::write(0x0d, 0x00),
    Instruction::write(0x0e, 0x00),
    Instruction::write(0x0f, 0x00),
    Instruction::write(0x10, 0x00),
    Instruction::write(0x11, 0x00),
    Instruction::write(0x12, 0x00),
    Instruction::write(0x13, 0x00),
    Instruction::write(0x14, 0x00),
    Instruction::write(0x15, 0x00),
    Instruction::write(0x16, 0x00),
    Instruction::write(0x17, 0x00),
    Instruction::write(0x18, 0x08),
    Instruction::write(0x19, 0x00),
    Instruction::write(0x1a, 0x00),
    Instruction::write(0x1b, 0x00),
    Instruction::write(0x1c, 0x00),
    Instruction::write(0x1d, 0x00),
    Instruction::write(0x1e, 0xc0),
    Instruction::write(0x1f, 0x80),
    Instruction::write(0x20, 0x04),
    Instruction::write(0x21, 0x0b),
    Instruction::write(0x22, 0x00),
    Instruction::write(0x23, 0x00),
    Instruction::write(0x24, 0x00),
    Instruction::write(0x25, 0x00),
    Instruction::write(0x26, 0x00),
    Instruction::write(0x27, 0x00),
    Instruction::write(0x28, 0x55),
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
    Instruction::write(0x34, 0x04),
    Instruction::write(0x35, 0x05),
    Instruction::write(0x36, 0x05),
    Instruction::write(0x37, 0x00),
    Instruction::write(0x38, 0x3c),
    Instruction::write(0x39, 0x50),
    Instruction::write(0x3a, 0x01),
    Instruction::write(0x3b, 0x40),
    Instruction::write(0x3c, 0x00),
    Instruction::write(0x3d, 0x01),
    Instruction::write(0x3e, 0x00),
    Instruction::write(0x3f, 0x00),
    Instruction::write(0x40, 0x50),
    Instruction::write(0x41, 0x88),
    Instruction::write(0x42, 0x00),
    Instruction::write(0x43, 0x00),
    Instruction::write(0x44, 0x1f),
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
    Instruction::write(0x5e, 0x03),
    Instruction::write(0x5f, 0x14),
    Instruction::write(0x60, 0x15),
    Instruction::write(0x61, 0x0c),
    Instruction::write(0x62, 0x0d),
    Instruction::write(0x63, 0x0e),
    Instruction::write(0x64, 0x0f),
    Instruction::write(0x65, 0x10),
    Instruction::write(0x66, 0x11),
    Instruction::write(0x67, 0x08),
    Instruction::write(0x68, 0x02),
    Instruction::write(0x69, 0x0a),
    Instruction::write(0x6a, 0x02),
    Instruction::write(0x6b, 0x02),
    Instruction::write(0x6c, 0x02),
    Instruction::write(0x6d, 0x02),
    Instruction::write(0x6e, 0x02),
    Instruction::write(0x6f, 0x02),
    Instruction::write(0x70, 0x02),
    Instruction::write(0x71, 0x02),
    Instruction::write(0x72, 0x06),
    Instruction::write(0x73, 0x02),
    Instruction::write(0x74, 0x02),
    Instruction::write(0x75, 0x14),
    Instruction::write(0x76, 0x15),
    Instruction::write(0x77, 0x11),
    Instruction::write(0x78, 0x10),
    Instruction::write(0x79, 0x0f),
    Instruction::write(0x7a, 0x0e),
    Instruction::write(0x7b, 0x0d),
    Instruction::write(0x7c, 0x0c),
    Instruction::write(0x7d, 0x06),
    Instruction::write(0x7e, 0x02),
    Instruction::write(0x7f, 0x0a),
    Instruction::write(0x80, 0x02),
    Instruction::write(0x81, 0x02),
    Instruction::write(0x82, 0x02),
    Instruction::write(0x83, 0x02),
    Instruction::write(0x84, 0x02),
    Instruction::write(0x85, 0x02),
    Instruction::write(0x86, 0x02),
    Instruction::write(0x87, 0x02),
    Instruction::write(0x88, 0x08),
    Instruction::write(0x89, 0x02),
    Instruction::write(0x8a, 0x02),
    // power control
    Instruction::page(4),
    Instruction::write(0x70, 0x00),
    Instruction::write(0x71, 0x00),
    Instruction::write(0x66, 0xfe),
    Instruction::write(0x6f, 0x05),
    Instruction::write(0x82, 0x1f),
    Instruction::write(0x84, 0x1f),
    Instruction::write(0x85, 0x0c),
    Instruction::write(0x32, 0xac),
    Instruction::write(0x8c, 0x80),
    Instruction::write(0x3c, 0xf5),
    Instruction::write(0x3a, 0x24),
    Instruction::write(0xb5, 0x02),
    Instruction::write(0x31, 0x25),
    Instruction::write(0x88, 0x33),
    // source, VCOM and gamma
    Instruction::page(1),
    Instruction::write(0x22, 0x0a),
    Instruction::write(0x31, 0x00),
    Instruction::write(0x53, 0x6e),
    Instruction::write(0x55, 0x78),
    Instruction::write(0x50, 0x6b),
    Instruction::write(0x51, 0x6b),
    Instruction::write(0x60, 0x20),
    Instruction::write(0x61, 0x00),
    Instruction::write(0x62, 0x0d),
    Instruction::write(0x63, 0x00),
    Instruction::write(0xa0, 0x00),
    Instruction::write(0xa1, 0x11),
    Instruction::write(0xa2, 0x1d),
    Instruction::write(0xa3, 0x13),
    Instruction::write(0xa4, 0x15),
    Instruction::write(0xa5, 0x27),
    Instruction::write(0xa6, 0x1c),
    Instruction::write(0xa7, 0x1e),
    Instruction::write(0xa8, 0x7e),
    Instruction::write(0xa9, 0x1e),
    Instruction::write(0xaa, 0x2a),
    Instruction::write(0xab, 0x72),
    Instruction::write(0xac, 0x1a),
    Instruction::write(0xad, 0x1a),
    Instruction::write(0xae, 0x4d),
    Instruction::write(0xaf, 0x23),
    Instruction::write(0xb0, 0x29),
    Instruction::write(0xb1, 0x4a),
    Instruction::write(0xb2, 0x59),
    Instruction::write(0xb3, 0x3c),
    Instruction::write(0xc0, 0x00),
    Instruction::write(0xc1, 0x10),
    Instruction::write(0xc2, 0x1d),
    Instruction::write(0xc3, 0x12),
    Instruction::write(0xc4, 0x16),
    Instruction::write(0xc5, 0x28),
    Instruction::write(0xc6, 0x1b),
    Instruction::write(0xc7, 0x1d),
    Instruction::write(0xc8, 0x7c),
    Instruction::write(0xc9, 0x1e),
    Instruction::write(0xca, 0x29),
    Instruction::write(0xcb, 0x71),
    Instruction::write(0xcc, 0x1a),
    Instruction::write(0xcd, 0x19),
    Instruction::write(0xce, 0x4e),
    Instruction::write(0xcf, 0x22),
    Instruction::write(0xd0, 0x28),
    Instruction::write(0xd1, 0x49),
    Instruction::write(0xd2, 0x59),
    Instruction::write(0xd3, 0x3c),
];

pub const W500HDC019: PanelDescriptor = PanelDescriptor {
    name: "ili9881d",
    compatible: "chance,w500hdc019",
    table: InstructionTable::new(Paging::Explicit, INIT),
    mode: ModeDescriptor::from_porches(62_000, 60, 720, 10, 20, 30, 1280, 10, 10, 20),
    width_mm: 62,
    height_mm: 110,
    link: LinkConfig::new(4, PixelFormat::Rgb888, VideoMode::SyncPulse),
    tear_mode: TearMode::VBlank,
    timings: Timings::MIN,
};
