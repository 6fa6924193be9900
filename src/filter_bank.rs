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
use crate::border_mode::BorderMode;
use crate::err::{WavebandsError, try_vec};
use crate::filter_padding::write_arena_1d;
use crate::mla::fmla;
use crate::util::{dwt_length, idwt_length};
use crate::WaveletSample;

/// The four filters of an orthogonal wavelet: analysis (decomposition) and
/// synthesis (reconstruction) pairs, each split into low-pass and high-pass.
///
/// All four are derived from the natural-order scaling filter by the
/// quadrature-mirror relations, so the synthesis pair is the exact algebraic
/// dual of the analysis pair and perfect reconstruction holds by construction.
#[derive(Clone, Debug)]
pub struct QuadFilter<T> {
    /// Analysis low-pass (approximation) filter.
    pub dec_lo: Vec<T>,
    /// Analysis high-pass (detail) filter.
    pub dec_hi: Vec<T>,
    /// Synthesis low-pass filter.
    pub rec_lo: Vec<T>,
    /// Synthesis high-pass filter.
    pub rec_hi: Vec<T>,
}

impl<T: WaveletSample> QuadFilter<T> {
    /// Derives the filter quadruple from a scaling filter given in natural
    /// (reconstruction) order, e.g. `[0.7071.., 0.7071..]` for Haar.
    ///
    /// Fails with [`WavebandsError::ZeroOrOddSizedWavelet`] unless the filter
    /// has an even, non-zero number of taps.
    pub fn from_scaling(src: &[T]) -> Result<Self, WavebandsError> {
        let len = src.len();
        if len == 0 || len % 2 != 0 {
            return Err(WavebandsError::ZeroOrOddSizedWavelet);
        }

        let mut dec_lo = try_vec![T::default(); len];
        let mut dec_hi = try_vec![T::default(); len];
        let mut rec_lo = try_vec![T::default(); len];
        let mut rec_hi = try_vec![T::default(); len];

        for (i, (((dec_lo, dec_hi), rec_lo), rec_hi)) in dec_lo
            .iter_mut()
            .zip(dec_hi.iter_mut())
            .zip(rec_lo.iter_mut())
            .zip(rec_hi.iter_mut())
            .enumerate()
        {
            let rev_i = len - 1 - i;

            *rec_lo = src[i];
            *dec_lo = src[rev_i];

            *rec_hi = if i % 2 == 1 { -src[rev_i] } else { src[rev_i] };
            *dec_hi = if rev_i % 2 == 1 { -src[i] } else { src[i] };
        }

        Ok(QuadFilter {
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        })
    }

    /// Number of taps in each of the four filters.
    #[inline]
    pub fn len(&self) -> usize {
        self.rec_lo.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rec_lo.is_empty()
    }
}

/// One-level analysis/synthesis primitives for a fixed filter quadruple and
/// border mode.
///
/// `analyze` convolves with the analysis filters and downsamples by two;
/// `synthesize` upsamples by two and overlap-adds the synthesis filters.
/// Band lengths follow [`dwt_length`]/[`idwt_length`] exactly.
pub struct FilterBank<T> {
    filter: QuadFilter<T>,
    border_mode: BorderMode,
}

impl<T: WaveletSample> FilterBank<T> {
    pub fn new(filter: QuadFilter<T>, border_mode: BorderMode) -> Self {
        Self {
            filter,
            border_mode,
        }
    }

    #[inline]
    pub fn filter_length(&self) -> usize {
        self.filter.len()
    }

    #[inline]
    pub fn border_mode(&self) -> BorderMode {
        self.border_mode
    }

    #[inline]
    pub fn filter(&self) -> &QuadFilter<T> {
        &self.filter
    }

    /// Single-level forward transform.
    ///
    /// `approx` and `detail` must both be `dwt_length(input.len(), taps)`
    /// long. The input is extended into a padded arena per the border mode so
    /// that every output coefficient sees a full filter window.
    pub fn analyze(
        &self,
        input: &[T],
        approx: &mut [T],
        detail: &mut [T],
    ) -> Result<(), WavebandsError> {
        let taps = self.filter.len();
        let half = dwt_length(input.len(), taps);

        if input.len() < taps {
            return Err(WavebandsError::MinFilterSize(input.len(), taps));
        }
        if approx.len() != half {
            return Err(WavebandsError::OutputSizeIsNotValid(approx.len(), half));
        }
        if detail.len() != half {
            return Err(WavebandsError::OutputSizeIsNotValid(detail.len(), half));
        }

        let whole_pad_size = (2 * half + taps - 2) - input.len();
        let left_pad = whole_pad_size / 2;
        let right_pad = whole_pad_size - left_pad;

        let mut arena = try_vec![T::default(); input.len() + whole_pad_size];
        write_arena_1d(input, &mut arena, left_pad, right_pad, self.border_mode)?;

        for (i, (approx, detail)) in approx.iter_mut().zip(detail.iter_mut()).enumerate() {
            let base = 2 * i;
            let window = &arena[base..base + taps];

            let mut a = T::default();
            let mut d = T::default();

            // Convolution with the analysis filters: the window runs forward
            // while the filters run backward.
            for ((&x, &lo), &hi) in window
                .iter()
                .zip(self.filter.dec_lo.iter().rev())
                .zip(self.filter.dec_hi.iter().rev())
            {
                a = fmla(lo, x, a);
                d = fmla(hi, x, d);
            }

            *approx = a;
            *detail = d;
        }
        Ok(())
    }

    /// Single-level inverse transform.
    ///
    /// `output` must be exactly `idwt_length(approx.len(), taps)` long; it is
    /// zeroed and then filled by upsampling both bands by two and
    /// overlap-adding the synthesis filters. Contributions falling outside
    /// the output window are the pad overhang and are discarded.
    pub fn synthesize(
        &self,
        approx: &[T],
        detail: &[T],
        output: &mut [T],
    ) -> Result<(), WavebandsError> {
        if approx.len() != detail.len() {
            return Err(WavebandsError::ApproxDetailsNotMatches(
                approx.len(),
                detail.len(),
            ));
        }

        let taps = self.filter.len();
        if 2 * approx.len() + 2 < taps {
            return Err(WavebandsError::MinFilterSize(approx.len(), taps));
        }
        let rec_len = idwt_length(approx.len(), taps);

        if output.len() != rec_len {
            return Err(WavebandsError::OutputSizeIsNotValid(output.len(), rec_len));
        }

        // Mirrors the left pad applied by `analyze`.
        let whole_pad_size = (2 * approx.len() + taps - 2) - output.len();
        let filter_offset = whole_pad_size / 2;

        for dst in output.iter_mut() {
            *dst = T::default();
        }

        for (i, (&a, &d)) in approx.iter().zip(detail.iter()).enumerate() {
            let base = 2 * i as isize - filter_offset as isize;
            for (j, (&lo, &hi)) in self
                .filter
                .rec_lo
                .iter()
                .zip(self.filter.rec_hi.iter())
                .enumerate()
            {
                let k = base + j as isize;
                if k >= 0 && k < rec_len as isize {
                    let k = k as usize;
                    output[k] = fmla(lo, a, fmla(hi, d, output[k]));
                }
            }
        }
        Ok(())
    }
}
