//! Recognizer for the fixed set of logging/diagnostic function names.
//!
//! Classifying an identifier must be O(1) because it happens for every
//! identifier token in every file. The table is built once at startup:
//! starting from a floor width, increasing widths are tried until
//! `djb2a(name) % width` is injective over the whole name list, so a
//! lookup is one hash, one modulo and one exact string compare. A slot
//! may be occupied by a name whose hash collides at a *different* width,
//! never at the chosen one, hence the final equality check.

use thiserror::Error;

/// Kernel logging and diagnostic call names recognized by the scanner:
/// the printk family, the `dev_*` device-logging variants and the ACPI
/// trace macros.
pub const FUNCTIONS: &[&str] = &[
    "printk",
    "printf",
    "early_printk",
    "vprintk_emit",
    "vprintk",
    "printk_emit",
    "printk_once",
    "printk_deferred",
    "printk_deferred_once",
    "pr_emerg",
    "pr_alert",
    "pr_crit",
    "pr_err",
    "pr_warning",
    "pr_warn",
    "pr_notice",
    "pr_info",
    "pr_cont",
    "pr_devel",
    "pr_debug",
    "pr_emerg_once",
    "pr_alert_once",
    "pr_crit_once",
    "pr_err_once",
    "pr_warning_once",
    "pr_warn_once",
    "pr_notice_once",
    "pr_info_once",
    "pr_cont_once",
    "pr_devel_once",
    "pr_debug_once",
    "dynamic_pr_debug",
    "dev_vprintk_emit",
    "dev_printk_emit",
    "dev_printk",
    "dev_emerg",
    "dev_alert",
    "dev_crit",
    "dev_err",
    "dev_warn",
    "dev_dbg",
    "dev_notice",
    "dev_level_once",
    "dev_emerg_once",
    "dev_alert_once",
    "dev_crit_once",
    "dev_err_once",
    "dev_warn_once",
    "dev_notice_once",
    "dev_info_once",
    "dev_dbg_once",
    "dev_level_ratelimited",
    "dev_emerg_ratelimited",
    "dev_alert_ratelimited",
    "dev_crit_ratelimited",
    "dev_err_ratelimited",
    "dev_warn_ratelimited",
    "dev_notice_ratelimited",
    "dev_info_ratelimited",
    "dbg",
    "ACPI_ERROR",
    "ACPI_INFO",
    "ACPI_WARNING",
    "ACPI_EXCEPTION",
    "ACPI_BIOS_WARNING",
    "ACPI_BIOS_ERROR",
    "ACPI_ERROR_METHOD",
    "ACPI_DEBUG_PRINT",
    "ACPI_DEBUG_PRINT_RAW",
    "DEBUG",
];

const WIDTH_FLOOR: usize = 458;
const WIDTH_CEILING: usize = 5000;

/// Startup failure: the width search exhausted the ceiling without
/// finding a collision-free table. Fatal; nothing can be scanned
/// correctly without the table.
#[derive(Debug, Error)]
#[error("function-name table: no collision-free width below {0}")]
pub struct TableOverflow(pub usize);

/// Immutable collision-free lookup table over [`FUNCTIONS`].
pub struct FuncTable {
    slots: Vec<Option<&'static str>>,
}

impl FuncTable {
    /// Search increasing widths from the floor until `hash % width` maps
    /// every name to a distinct slot.
    pub fn build() -> Result<Self, TableOverflow> {
        for width in WIDTH_FLOOR..WIDTH_CEILING {
            let mut slots = vec![None; width];
            let mut collision = false;
            for &name in FUNCTIONS {
                let slot = &mut slots[djb2a(name) as usize % width];
                if slot.is_some() {
                    collision = true;
                    break;
                }
                *slot = Some(name);
            }
            if !collision {
                return Ok(Self { slots });
            }
        }
        Err(TableOverflow(WIDTH_CEILING))
    }

    /// The chosen table width.
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// True when `name` is exactly one of the known logging functions.
    pub fn recognizes(&self, name: &str) -> bool {
        self.slots[djb2a(name) as usize % self.slots.len()] == Some(name)
    }
}

/// Order-sensitive polynomial hash over the byte sequence: seed 5381,
/// `(hash * 33) ^ byte` per step, wrapping.
fn djb2a(s: &str) -> u32 {
    let mut hash: u32 = 5381;
    for b in s.bytes() {
        hash = (hash.wrapping_shl(5).wrapping_add(hash)) ^ u32::from(b);
    }
    hash
}
