// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional mutations.
//!
//! Each public function here runs as a single transaction: the row writes
//! and the activity-log insert for one lifecycle operation commit together
//! or not at all.

pub mod activity;
pub mod directory;
pub mod tickets;

pub use tickets::MAX_NUMBER_ATTEMPTS;
