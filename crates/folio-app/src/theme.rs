#![forbid(unsafe_code)]

//! Color palette: a sky/emerald accent pair over slate neutrals.

use folio_render::cell::PackedRgba;

pub const SKY_400: PackedRgba = PackedRgba::rgb(0x38, 0xbd, 0xf8);
pub const SKY_500: PackedRgba = PackedRgba::rgb(0x0e, 0xa5, 0xe9);
pub const SKY_600: PackedRgba = PackedRgba::rgb(0x02, 0x84, 0xc7);
pub const SKY_700: PackedRgba = PackedRgba::rgb(0x03, 0x69, 0xa1);
pub const SKY_900: PackedRgba = PackedRgba::rgb(0x0c, 0x4a, 0x6e);

pub const EMERALD_500: PackedRgba = PackedRgba::rgb(0x10, 0xb9, 0x81);

pub const SLATE_100: PackedRgba = PackedRgba::rgb(0xf1, 0xf5, 0xf9);
pub const SLATE_300: PackedRgba = PackedRgba::rgb(0xcb, 0xd5, 0xe1);
pub const SLATE_400: PackedRgba = PackedRgba::rgb(0x94, 0xa3, 0xb8);
pub const SLATE_500: PackedRgba = PackedRgba::rgb(0x64, 0x74, 0x8b);
pub const SLATE_700: PackedRgba = PackedRgba::rgb(0x33, 0x41, 0x55);
pub const SLATE_900: PackedRgba = PackedRgba::rgb(0x0f, 0x17, 0x2a);
