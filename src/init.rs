//! Panel initialization tables
//!
//! The ST7789 powers up with registers that suit no panel in particular. The
//! porch, gate, voltage and gamma values a module needs come from its
//! datasheet and are written once, in order, after reset. They are kept here
//! as a literal table of [`InitStep`]s so they can be swapped per panel with
//! [`Builder::tuning`](crate::Builder::tuning).
//!
//! The surrounding steps that depend on configuration (sleep-out, MADCTL,
//! inversion, the full-panel window, display-on) are issued by
//! [`Display::init`](crate::Display::init) around this table.

use crate::command::{
    COLMOD, COLMOD_RGB565, DFUNCTR, FRCTR2, GCTRL, LCMCTRL, NVGAMCTRL, PORCTRL, PVGAMCTRL,
    PWCTRL1, VCOMS, VDVSET, VDVVRHEN, VRHS,
};

/// One entry of an initialization table
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitStep {
    /// Register write: command byte followed by its parameters
    Command(u8, &'static [u8]),
    /// Wait the given number of milliseconds
    DelayMs(u32),
}

/// Settle time after sleep-out and around display-on
pub const SLEEP_OUT_DELAY_MS: u32 = 120;

/// Tuning for the 240x240 IPS module (JLX240 family)
pub const DEFAULT_TUNING: &[InitStep] = &[
    InitStep::Command(DFUNCTR, &[0x0A, 0x82]),
    InitStep::Command(COLMOD, &[COLMOD_RGB565]),
    InitStep::DelayMs(10),
    // Frame rate
    InitStep::Command(PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    InitStep::Command(GCTRL, &[0x35]),
    // Power
    InitStep::Command(VCOMS, &[0x28]),
    InitStep::Command(LCMCTRL, &[0x0C]),
    InitStep::Command(VDVVRHEN, &[0x01, 0xFF]),
    InitStep::Command(VRHS, &[0x10]),
    InitStep::Command(VDVSET, &[0x20]),
    InitStep::Command(FRCTR2, &[0x0F]),
    InitStep::Command(PWCTRL1, &[0xA4, 0xA1]),
    // Gamma
    InitStep::Command(
        PVGAMCTRL,
        &[
            0xD0, 0x00, 0x02, 0x07, 0x0A, 0x28, 0x32, 0x44, 0x42, 0x06, 0x0E, 0x12, 0x14, 0x17,
        ],
    ),
    InitStep::Command(
        NVGAMCTRL,
        &[
            0xD0, 0x00, 0x02, 0x07, 0x0A, 0x28, 0x31, 0x54, 0x47, 0x0E, 0x1C, 0x17, 0x1B, 0x1E,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_tables_are_fourteen_bytes() {
        for step in DEFAULT_TUNING {
            if let InitStep::Command(cmd, data) = step {
                if *cmd == PVGAMCTRL || *cmd == NVGAMCTRL {
                    assert_eq!(data.len(), 14);
                }
            }
        }
    }

    #[test]
    fn test_pixel_format_is_rgb565_then_settles() {
        let index = DEFAULT_TUNING
            .iter()
            .position(|step| *step == InitStep::Command(COLMOD, &[0x55]))
            .unwrap();
        assert_eq!(DEFAULT_TUNING[index + 1], InitStep::DelayMs(10));
    }
}
