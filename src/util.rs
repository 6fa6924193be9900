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

/// Computes the length of the **approximation/detail bands** after a
/// single-level discrete wavelet transform of a 1D signal.
///
/// This is the full-convolution length `floor((len + filter_length - 1) / 2)`;
/// it determines every downstream band length in a multi-level decomposition.
///
/// # Parameters
/// - `len`: Length of the input signal.
/// - `filter_length`: Length of the wavelet filter (number of taps).
#[inline]
pub fn dwt_length(len: usize, filter_length: usize) -> usize {
    (len + filter_length - 1) / 2
}

/// Computes the length of the **reconstructed signal** produced by one
/// upsample-and-filter synthesis step, before any trimming.
///
/// # Parameters
/// - `approx_length`: Length of the approximation band.
/// - `filter_length`: Length of the wavelet filter (number of taps).
#[inline]
pub fn idwt_length(approx_length: usize, filter_length: usize) -> usize {
    2 * approx_length - (filter_length - 2)
}

/// Maximum feasible decomposition depth for a signal of length `len` and a
/// filter of `filter_length` taps: `floor(log2(len / (filter_length - 1)))`.
///
/// Returns 0 when no level is feasible. Requesting more levels than this is
/// an error, never a silent truncation.
#[inline]
pub fn max_decomposition_level(len: usize, filter_length: usize) -> usize {
    if filter_length < 2 {
        return 0;
    }
    let mut k = len / (filter_length - 1);
    let mut level = 0usize;
    while k > 1 {
        k >>= 1;
        level += 1;
    }
    level
}
