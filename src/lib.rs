/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Multi-level discrete wavelet decomposition and reconstruction for 1D
//! signals.
//!
//! A signal is split into a coarsest approximation band plus one detail band
//! per level; the hierarchy can be reconstructed exactly, a single band's
//! contribution can be isolated, and cumulative approximations can be
//! derived level by level.
//!
//! ```
//! use wavebands::{BorderMode, DaubechiesFamily, MultiLevelDwt};
//!
//! let signal: Vec<f64> = (0..64).map(|i| (i as f64 * 0.3).sin()).collect();
//! let engine = MultiLevelDwt::new(&DaubechiesFamily::Db1, BorderMode::Wrap).unwrap();
//! let bands = engine.decompose(&signal, 3).unwrap();
//! let restored = engine.reconstruct(&bands).unwrap();
//! assert!(signal
//!     .iter()
//!     .zip(restored.iter())
//!     .all(|(x, y)| (x - y).abs() < 1e-9));
//! ```
#![allow(clippy::excessive_precision)]
#![forbid(unsafe_code)]

mod aggregate;
mod border_mode;
mod daubechies;
mod decomposition;
mod engine;
mod err;
mod filter_bank;
mod filter_padding;
mod mla;
mod symlets;
mod util;

use num_traits::MulAdd;
use std::borrow::Cow;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

pub use aggregate::CumulativeApproximations;
pub use border_mode::BorderMode;
pub use daubechies::DaubechiesFamily;
pub use decomposition::Decomposition;
pub use engine::MultiLevelDwt;
pub use err::WavebandsError;
pub use filter_bank::{FilterBank, QuadFilter};
pub use symlets::SymletFamily;
pub use util::{dwt_length, idwt_length, max_decomposition_level};

/// Provides an orthogonal scaling (lowpass reconstruction) filter in natural
/// order; the analysis and highpass filters are derived from it by
/// quadrature mirroring.
pub trait WaveletFilterProvider<T>
where
    T: Copy,
    [T]: ToOwned,
{
    fn get_wavelet(&self) -> Cow<'_, [T]>;
}

/// Scalar sample type the transforms operate on.
pub trait WaveletSample:
    Copy
    + Default
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + MulAdd<Self, Output = Self>
{
}

impl WaveletSample for f32 {}
impl WaveletSample for f64 {}
