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
use std::error::Error;
use std::fmt::Formatter;

/// Errors reported by the decomposition, isolation and reconstruction operations.
///
/// Every error is detected synchronously before any coefficients are produced;
/// no operation silently truncates or clamps its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WavebandsError {
    /// Cannot allocate the requested number of bytes.
    OutOfMemory(usize),
    /// The input signal contained no samples.
    EmptySignal,
    /// Requested decomposition depth is zero or exceeds the maximum feasible
    /// depth for the signal length and filter length: `(requested, max)`.
    InvalidLevelCount(usize, usize),
    /// Band index outside `0..band_count`: `(index, band_count)`.
    IndexOutOfRange(usize, usize),
    /// A band length is inconsistent with the target signal length and the
    /// filter length: `(actual, expected)`.
    ShapeMismatch(usize, usize),
    /// The input was shorter than the wavelet filter: `(input, filter)`.
    MinFilterSize(usize, usize),
    /// Orthogonal scaling filters must be non-empty and of even length.
    ZeroOrOddSizedWavelet,
    /// Approximation and detail bands must have equal lengths: `(approx, detail)`.
    ApproxDetailsNotMatches(usize, usize),
    /// An output buffer did not have the declared length: `(actual, expected)`.
    OutputSizeIsNotValid(usize, usize),
}

impl Error for WavebandsError {}

impl std::fmt::Display for WavebandsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WavebandsError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector"))
            }
            WavebandsError::EmptySignal => f.write_str("Input signal must not be empty"),
            WavebandsError::InvalidLevelCount(requested, max) => f.write_fmt(format_args!(
                "Requested {requested} decomposition level(s), but feasible depth is 1..={max}"
            )),
            WavebandsError::IndexOutOfRange(index, band_count) => f.write_fmt(format_args!(
                "Band index {index} is outside the valid range 0..{band_count}"
            )),
            WavebandsError::ShapeMismatch(actual, expected) => f.write_fmt(format_args!(
                "Band length {actual} does not match the expected length {expected}"
            )),
            WavebandsError::MinFilterSize(input_size, filter_size) => f.write_fmt(format_args!(
                "Input size {input_size} can't be less than {filter_size}"
            )),
            WavebandsError::ZeroOrOddSizedWavelet => f.write_str("Zero or odd sized wavelet"),
            WavebandsError::ApproxDetailsNotMatches(approx, details) => f.write_fmt(format_args!(
                "Approx and details must match, but they don't {approx}x{details}"
            )),
            WavebandsError::OutputSizeIsNotValid(actual, expected) => f.write_fmt(format_args!(
                "Output size should be {expected}, but it was {actual}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::WavebandsError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
