// SPDX-License-Identifier: GPL-3.0-only

//! Centralized layout settings and constants.

/// Row number (1-based) of the row holding the spacebar.
pub const SPACEBAR_ROW: usize = 4;

/// Row number (1-based) that receives the shift keys.
pub const SHIFT_ROW: usize = 3;

/// Maximum number of rows an alphabet grid may declare.
///
/// Row 4 is the spacebar row; anything placed there is replaced during
/// composition.
pub const MAX_GRID_ROWS: usize = SPACEBAR_ROW;

/// Number of letter rows a typical alphabet grid has.
pub const EXPECTED_LETTER_ROWS: usize = 3;

/// Maximum inheritance depth between layout definitions.
pub const MAX_INHERITANCE_DEPTH: usize = 5;

/// Folder holding the embedded layout definitions.
pub const LAYOUT_RESOURCE_DIR: &str = "resources/layouts";

/// Default tracing directive for the dump tool.
pub const DEFAULT_LOG_DIRECTIVE: &str = "expected_layouts=info";
