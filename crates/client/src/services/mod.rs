// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One module per backend resource area.
//!
//! Every function issues exactly one request and returns the server's
//! answer; nothing is cached. Errors are never swallowed.

pub mod admin;
pub mod auth;
pub mod donor;
pub mod medical_center;
pub mod schedule;
pub mod staff;

use blood_bank_domain::BloodType;

/// Renders a blood type for use inside a URL path.
pub(crate) fn blood_type_segment(blood_type: BloodType) -> String {
    blood_type.as_str().replace('+', "%2B")
}
