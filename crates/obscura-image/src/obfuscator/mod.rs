// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Obfuscation pipeline — resample, edge overlay, blend, centre marker.

pub mod pipeline;

pub use pipeline::{ImageObfuscator, obfuscate, obfuscate_to_default};
