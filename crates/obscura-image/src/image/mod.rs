// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — decoding, canvas normalisation, PNG encoding, atomic output.

pub mod output;
pub mod processor;

pub use output::write_atomic;
pub use processor::ImageProcessor;
