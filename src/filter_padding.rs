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
use crate::WaveletSample;
use crate::border_mode::BorderMode;
use crate::err::WavebandsError;
use std::ops::Range;

#[inline]
fn reflect_index(i: isize, n: isize) -> usize {
    (n - i.rem_euclid(n) - 1) as usize
}

#[inline]
fn reflect_index_101(i: isize, n: isize) -> usize {
    (n - i.rem_euclid(n)) as usize
}

/// Extends `data` into `padded` with `pad_left`/`pad_right` border samples
/// resolved according to `border_mode`.
///
/// `padded` must be exactly `pad_left + data.len() + pad_right` long.
pub(crate) fn write_arena_1d<T: WaveletSample>(
    data: &[T],
    padded: &mut [T],
    pad_left: usize,
    pad_right: usize,
    border_mode: BorderMode,
) -> Result<(), WavebandsError> {
    if padded.len() != pad_left + data.len() + pad_right {
        return Err(WavebandsError::OutputSizeIsNotValid(
            padded.len(),
            pad_left + data.len() + pad_right,
        ));
    }
    if data.is_empty() {
        return Err(WavebandsError::EmptySignal);
    }
    for (dst, src) in padded.iter_mut().skip(pad_left).zip(data.iter()) {
        *dst = *src;
    }

    let filling_ranges = [
        Range {
            start: 0,
            end: pad_left,
        },
        Range {
            start: padded.len() - pad_right,
            end: padded.len(),
        },
    ];

    for range in filling_ranges.iter() {
        let n = data.len() as isize;
        let reshaped = &mut padded[range.start..range.end];
        for (idx, dst) in reshaped.iter_mut().enumerate() {
            let position = range.start as isize - pad_left as isize + idx as isize;
            *dst = match border_mode {
                BorderMode::Clamp => data[position.clamp(0, n - 1) as usize],
                BorderMode::Wrap => data[position.rem_euclid(n) as usize],
                BorderMode::Reflect => data[reflect_index(position, n)],
                BorderMode::Reflect101 => {
                    if data.len() == 1 {
                        data[0]
                    } else {
                        data[reflect_index_101(position, n - 1)]
                    }
                }
                BorderMode::Zeros => {
                    if position < 0 || position >= n {
                        T::default()
                    } else {
                        data[position as usize]
                    }
                }
            };
        }
    }
    Ok(())
}
