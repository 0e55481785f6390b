// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::authorization_header;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_non_empty_token_becomes_bearer(token in "[A-Za-z0-9._-]{1,64}") {
        prop_assert_eq!(
            authorization_header(Some(token.as_str())),
            Some(format!("Bearer {token}"))
        );
    }
}

#[test]
fn test_missing_or_empty_token_has_no_header() {
    assert_eq!(authorization_header(None), None);
    assert_eq!(authorization_header(Some("")), None);
}
