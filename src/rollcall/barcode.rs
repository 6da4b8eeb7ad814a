//! # Barcode Synthesis
//!
//! Code 128 (subset B) rendering for the printable sheets. The symbology
//! covers the full printable ASCII range, so any roster barcode string
//! can be encoded; anything outside that range is rejected up front.
//!
//! Rendering is kept behind [`BarcodeRenderer`] so the sheet writer can
//! be exercised with a stub image source in tests.

use crate::error::{Result, RollcallError};

/// Bar/space module widths for symbol values 0 through 105. Each symbol
/// is six elements wide, eleven modules total, starting with a bar.
const PATTERNS: [[u8; 6]; 106] = [
    [2, 1, 2, 2, 2, 2],
    [2, 2, 2, 1, 2, 2],
    [2, 2, 2, 2, 2, 1],
    [1, 2, 1, 2, 2, 3],
    [1, 2, 1, 3, 2, 2],
    [1, 3, 1, 2, 2, 2],
    [1, 2, 2, 2, 1, 3],
    [1, 2, 2, 3, 1, 2],
    [1, 3, 2, 2, 1, 2],
    [2, 2, 1, 2, 1, 3],
    [2, 2, 1, 3, 1, 2],
    [2, 3, 1, 2, 1, 2],
    [1, 1, 2, 2, 3, 2],
    [1, 2, 2, 1, 3, 2],
    [1, 2, 2, 2, 3, 1],
    [1, 1, 3, 2, 2, 2],
    [1, 2, 3, 1, 2, 2],
    [1, 2, 3, 2, 2, 1],
    [2, 2, 3, 2, 1, 1],
    [2, 2, 1, 1, 3, 2],
    [2, 2, 1, 2, 3, 1],
    [2, 1, 3, 2, 1, 2],
    [2, 2, 3, 1, 1, 2],
    [3, 1, 2, 1, 3, 1],
    [3, 1, 1, 2, 2, 2],
    [3, 2, 1, 1, 2, 2],
    [3, 2, 1, 2, 2, 1],
    [3, 1, 2, 2, 1, 2],
    [3, 2, 2, 1, 1, 2],
    [3, 2, 2, 2, 1, 1],
    [2, 1, 2, 1, 2, 3],
    [2, 1, 2, 3, 2, 1],
    [2, 3, 2, 1, 2, 1],
    [1, 1, 1, 3, 2, 3],
    [1, 3, 1, 1, 2, 3],
    [1, 3, 1, 3, 2, 1],
    [1, 1, 2, 3, 1, 3],
    [1, 3, 2, 1, 1, 3],
    [1, 3, 2, 3, 1, 1],
    [2, 1, 1, 3, 1, 3],
    [2, 3, 1, 1, 1, 3],
    [2, 3, 1, 3, 1, 1],
    [1, 1, 2, 1, 3, 3],
    [1, 1, 2, 3, 3, 1],
    [1, 3, 2, 1, 3, 1],
    [1, 1, 3, 1, 2, 3],
    [1, 1, 3, 3, 2, 1],
    [1, 3, 3, 1, 2, 1],
    [3, 1, 3, 1, 2, 1],
    [2, 1, 1, 3, 3, 1],
    [2, 3, 1, 1, 3, 1],
    [2, 1, 3, 1, 1, 3],
    [2, 1, 3, 3, 1, 1],
    [2, 1, 3, 1, 3, 1],
    [3, 1, 1, 1, 2, 3],
    [3, 1, 1, 3, 2, 1],
    [3, 3, 1, 1, 2, 1],
    [3, 1, 2, 1, 1, 3],
    [3, 1, 2, 3, 1, 1],
    [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1],
    [2, 2, 1, 4, 1, 1],
    [4, 3, 1, 1, 1, 1],
    [1, 1, 1, 2, 2, 4],
    [1, 1, 1, 4, 2, 2],
    [1, 2, 1, 1, 2, 4],
    [1, 2, 1, 4, 2, 1],
    [1, 4, 1, 1, 2, 2],
    [1, 4, 1, 2, 2, 1],
    [1, 1, 2, 2, 1, 4],
    [1, 1, 2, 4, 1, 2],
    [1, 2, 2, 1, 1, 4],
    [1, 2, 2, 4, 1, 1],
    [1, 4, 2, 1, 1, 2],
    [1, 4, 2, 2, 1, 1],
    [2, 4, 1, 2, 1, 1],
    [2, 2, 1, 1, 1, 4],
    [4, 1, 3, 1, 1, 1],
    [2, 4, 1, 1, 1, 2],
    [1, 3, 4, 1, 1, 1],
    [1, 1, 1, 2, 4, 2],
    [1, 2, 1, 1, 4, 2],
    [1, 2, 1, 2, 4, 1],
    [1, 1, 4, 2, 1, 2],
    [1, 2, 4, 1, 1, 2],
    [1, 2, 4, 2, 1, 1],
    [4, 1, 1, 2, 1, 2],
    [4, 2, 1, 1, 1, 2],
    [4, 2, 1, 2, 1, 1],
    [2, 1, 2, 1, 4, 1],
    [2, 1, 4, 1, 2, 1],
    [4, 1, 2, 1, 2, 1],
    [1, 1, 1, 1, 4, 3],
    [1, 1, 1, 3, 4, 1],
    [1, 3, 1, 1, 4, 1],
    [1, 1, 4, 1, 1, 3],
    [1, 1, 4, 3, 1, 1],
    [4, 1, 1, 1, 1, 3],
    [4, 1, 1, 3, 1, 1],
    [1, 1, 3, 1, 4, 1],
    [1, 1, 4, 1, 3, 1],
    [3, 1, 1, 1, 4, 1],
    [4, 1, 1, 1, 3, 1],
    [2, 1, 1, 4, 1, 2],
    [2, 1, 1, 2, 1, 4],
    [2, 1, 1, 2, 3, 2],
];

/// Stop symbol, thirteen modules with the extra terminating bar.
const STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

const START_B: u8 = 104;

/// A rendered one-dimensional barcode: a 1-bit raster whose rows are all
/// identical, so one row of column flags describes the whole image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeImage {
    width: u32,
    height: u32,
    columns: Vec<bool>,
}

impl BarcodeImage {
    pub fn new(height: u32, columns: Vec<bool>) -> Self {
        Self {
            width: columns.len() as u32,
            height,
            columns,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_dark(&self, x: u32) -> bool {
        self.columns.get(x as usize).copied().unwrap_or(false)
    }

    /// Horizontal (offset, width) spans of the dark bars.
    pub fn dark_runs(&self) -> Vec<(u32, u32)> {
        let mut runs = Vec::new();
        let mut start = None;
        for (x, dark) in self.columns.iter().enumerate() {
            match (dark, start) {
                (true, None) => start = Some(x as u32),
                (false, Some(s)) => {
                    runs.push((s, x as u32 - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.width - s));
        }
        runs
    }
}

/// Turns a barcode string into a printable image.
pub trait BarcodeRenderer {
    fn render(&self, text: &str) -> Result<BarcodeImage>;
}

/// Code 128 subset B renderer.
#[derive(Debug, Clone, Copy)]
pub struct Code128 {
    /// Pixels per narrow module.
    pub module_width: u32,
    pub bar_height: u32,
}

impl Default for Code128 {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 50,
        }
    }
}

impl Code128 {
    fn symbol_values(text: &str) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Err(RollcallError::Barcode {
                text: text.to_string(),
                reason: "empty string".to_string(),
            });
        }
        text.chars()
            .map(|c| match c {
                ' '..='~' => Ok(c as u8 - 32),
                _ => Err(RollcallError::Barcode {
                    text: text.to_string(),
                    reason: format!("character {c:?} is outside printable ASCII"),
                }),
            })
            .collect()
    }

    /// Full module sequence: start, data, check symbol, stop.
    fn modules(text: &str) -> Result<Vec<bool>> {
        let values = Self::symbol_values(text)?;

        let mut check = START_B as u32;
        for (i, v) in values.iter().enumerate() {
            check += (i as u32 + 1) * *v as u32;
        }
        let check = (check % 103) as u8;

        let mut modules = Vec::new();
        let mut push = |widths: &[u8]| {
            for (i, w) in widths.iter().enumerate() {
                let dark = i % 2 == 0;
                for _ in 0..*w {
                    modules.push(dark);
                }
            }
        };

        push(&PATTERNS[START_B as usize]);
        for v in &values {
            push(&PATTERNS[*v as usize]);
        }
        push(&PATTERNS[check as usize]);
        push(&STOP);
        Ok(modules)
    }
}

impl BarcodeRenderer for Code128 {
    fn render(&self, text: &str) -> Result<BarcodeImage> {
        let modules = Self::modules(text)?;
        let mut columns = Vec::with_capacity(modules.len() * self.module_width as usize);
        for dark in modules {
            for _ in 0..self.module_width {
                columns.push(dark);
            }
        }
        Ok(BarcodeImage::new(self.bar_height, columns))
    }
}
