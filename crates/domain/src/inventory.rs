// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BloodType, lenient};
use serde::{Deserialize, Serialize};

/// Quantities at or below this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Quantities at or below this are reported as critical.
pub const CRITICAL_STOCK_THRESHOLD: u32 = 5;

/// Stock health classification for an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StockLevel {
    /// At or below [`CRITICAL_STOCK_THRESHOLD`].
    Critical,
    /// At or below [`LOW_STOCK_THRESHOLD`].
    Low,
    /// Above [`LOW_STOCK_THRESHOLD`].
    Adequate,
}

impl StockLevel {
    /// Classifies a quantity.
    #[must_use]
    pub const fn classify(quantity: u32) -> Self {
        if quantity <= CRITICAL_STOCK_THRESHOLD {
            Self::Critical
        } else if quantity <= LOW_STOCK_THRESHOLD {
            Self::Low
        } else {
            Self::Adequate
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Low => "low",
            Self::Adequate => "adequate",
        }
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Units on hand for one blood type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Server-assigned identifier.
    pub id: i64,
    /// The stocked blood type.
    pub blood_type: BloodType,
    /// Units on hand.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub quantity: u32,
}

impl InventoryItem {
    /// Stock health of this row.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity)
    }

    /// Returns whether this row counts toward the low-stock total.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }
}

/// Body for setting the units on hand for a blood type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdate {
    /// The stocked blood type.
    pub blood_type: BloodType,
    /// Units on hand.
    pub quantity: u32,
}

impl InventoryUpdate {
    /// Builds an update from a user-entered quantity, clamping negatives to zero.
    #[must_use]
    pub fn new(blood_type: BloodType, quantity: i64) -> Self {
        Self {
            blood_type,
            quantity: clamp_quantity(quantity),
        }
    }
}

/// Clamps a user-entered quantity into the range the server accepts.
///
/// Negative input becomes `0`; values beyond `u32::MAX` saturate.
#[must_use]
pub fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(0)).unwrap_or(u32::MAX)
}
