// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.

pub mod activity;
pub mod search;
pub mod stats;
pub mod tickets;

pub use search::SEARCH_RESULT_CAP;
