// SPDX-License-Identifier: GPL-3.0-only

//! Mutable construction of expected layouts.
//!
//! [`ExpectedKeyboardBuilder`] edits a key matrix row by row and is turned
//! into an immutable [`ExpectedLayout`] with [`ExpectedKeyboardBuilder::build`].
//! Rows are addressed by 1-based row number, matching how keyboards are
//! described ("row 4 holds the spacebar"). Editing a row past the end grows
//! the matrix with empty rows.

use crate::expected::key::{ExpectedKey, ExpectedLayout};
use crate::layout::types::LayoutError;
use crate::locale::Locale;

/// Row-oriented editor for a key matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedKeyboardBuilder {
    rows: Vec<Vec<ExpectedKey>>,
}

impl ExpectedKeyboardBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a builder holding a copy of `layout`.
    pub fn from_layout(layout: &ExpectedLayout) -> Self {
        Self {
            rows: layout.rows().to_vec(),
        }
    }

    /// Creates a builder from raw rows.
    pub fn from_rows(rows: Vec<Vec<ExpectedKey>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Replaces the content of `row` with `keys`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is 0.
    pub fn set_keys_of_row(
        &mut self,
        row: usize,
        keys: impl IntoIterator<Item = ExpectedKey>,
    ) -> &mut Self {
        *self.row_mut(row) = keys.into_iter().collect();
        self
    }

    /// Inserts `keys` at the left edge of `row`, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `row` is 0.
    pub fn add_keys_on_the_left_of_row(
        &mut self,
        row: usize,
        keys: impl IntoIterator<Item = ExpectedKey>,
    ) -> &mut Self {
        let target = self.row_mut(row);
        let tail = std::mem::take(target);
        target.extend(keys);
        target.extend(tail);
        self
    }

    /// Appends `keys` at the right edge of `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is 0.
    pub fn add_keys_on_the_right_of_row(
        &mut self,
        row: usize,
        keys: impl IntoIterator<Item = ExpectedKey>,
    ) -> &mut Self {
        self.row_mut(row).extend(keys);
        self
    }

    /// Replaces every key labeled `label` with the `replacement` keys.
    ///
    /// One key may be replaced by several, so this can change row lengths.
    /// Fails if no key carries the label.
    pub fn replace_key_of_label(
        &mut self,
        label: &str,
        replacement: &[ExpectedKey],
    ) -> Result<&mut Self, LayoutError> {
        let mut replaced = 0;
        for row in &mut self.rows {
            if !row.iter().any(|key| key.has_label(label)) {
                continue;
            }
            let mut rebuilt = Vec::with_capacity(row.len() + replacement.len());
            for key in row.drain(..) {
                if key.has_label(label) {
                    rebuilt.extend_from_slice(replacement);
                    replaced += 1;
                } else {
                    rebuilt.push(key);
                }
            }
            *row = rebuilt;
        }

        if replaced == 0 {
            return Err(LayoutError::key_not_found(label));
        }
        Ok(self)
    }

    /// Replaces every occurrence of `key` in the whole matrix with
    /// `replacement`. Absent keys are not an error.
    pub fn replace_keys_of_all(
        &mut self,
        key: &ExpectedKey,
        replacement: &ExpectedKey,
    ) -> &mut Self {
        let mut replaced = 0usize;
        for slot in self.rows.iter_mut().flatten() {
            if slot == key {
                *slot = replacement.clone();
                replaced += 1;
            }
        }
        tracing::trace!("Replaced {} occurrence(s) of {}", replaced, key);
        self
    }

    /// Attaches `more_keys` to every key labeled `label`.
    ///
    /// This never adds or removes keys; unknown labels are ignored.
    pub fn set_more_keys_of(&mut self, label: &str, more_keys: &[ExpectedKey]) -> &mut Self {
        for slot in self.rows.iter_mut().flatten() {
            if slot.has_label(label) {
                *slot = slot.clone().with_more_keys(more_keys.iter().cloned());
            }
        }
        self
    }

    /// Upper-cases every key (and its more keys) using `locale`'s rules.
    pub fn to_upper_case(&mut self, locale: &Locale) -> &mut Self {
        for slot in self.rows.iter_mut().flatten() {
            *slot = slot.to_upper_case(locale);
        }
        self
    }

    /// Materializes the current matrix.
    pub fn build(&self) -> ExpectedLayout {
        ExpectedLayout::new(self.rows.clone())
    }

    fn row_mut(&mut self, row: usize) -> &mut Vec<ExpectedKey> {
        assert!(row > 0, "row numbers start at 1");
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        &mut self.rows[row - 1]
    }
}
