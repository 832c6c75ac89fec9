// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with geometry crates used by toolkits.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "kurbo_adapter")]
pub mod kurbo;
