// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Obscura — Core error taxonomy and pipeline parameters shared across all crates.

pub mod config;
pub mod error;

pub use config::ObfuscationParams;
pub use error::{ErrorKind, ObscuraError, Result};
