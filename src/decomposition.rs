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
use crate::err::{WavebandsError, try_vec};
use crate::WaveletSample;

/// Coefficient hierarchy produced by a multi-level decomposition.
///
/// Holds one approximation band (coarsest scale) followed by `L` detail
/// bands ordered coarsest-detail-first, plus the original signal length.
/// The value is immutable once produced; derived hierarchies are obtained
/// through [`Decomposition::isolate`], which never mutates its input.
///
/// Band indexing convention: index 0 is the approximation band, indices
/// `1..=L` are detail bands from coarsest to finest.
#[derive(Clone, Debug)]
pub struct Decomposition<T> {
    pub(crate) approx: Vec<T>,
    pub(crate) details: Vec<Vec<T>>,
    pub(crate) signal_length: usize,
}

impl<T: WaveletSample> Decomposition<T> {
    /// Number of decomposition levels `L`.
    #[inline]
    pub fn levels(&self) -> usize {
        self.details.len()
    }

    /// Number of bands, `L + 1` (approximation plus every detail level).
    #[inline]
    pub fn band_count(&self) -> usize {
        self.details.len() + 1
    }

    /// Length of the signal this hierarchy was decomposed from.
    #[inline]
    pub fn signal_length(&self) -> usize {
        self.signal_length
    }

    /// The coarsest approximation band.
    #[inline]
    pub fn approximation(&self) -> &[T] {
        &self.approx
    }

    /// Detail band for `level` in `1..=L`, 1 being the coarsest.
    pub fn detail(&self, level: usize) -> Result<&[T], WavebandsError> {
        if level < 1 || level > self.levels() {
            return Err(WavebandsError::IndexOutOfRange(level, self.band_count()));
        }
        Ok(&self.details[level - 1])
    }

    /// Band by hierarchy index: 0 is the approximation, `1..=L` the detail
    /// bands from coarsest to finest.
    pub fn band(&self, index: usize) -> Result<&[T], WavebandsError> {
        if index >= self.band_count() {
            return Err(WavebandsError::IndexOutOfRange(index, self.band_count()));
        }
        if index == 0 {
            Ok(&self.approx)
        } else {
            Ok(&self.details[index - 1])
        }
    }

    /// Derives a new hierarchy of identical shape in which every band except
    /// `index` is replaced by a same-length all-zero band.
    ///
    /// This is a pure operation: `self` is left untouched and the result is
    /// independently owned, so isolated reconstructions of different bands
    /// can proceed in parallel.
    ///
    /// Fails with [`WavebandsError::IndexOutOfRange`] if `index > L`.
    pub fn isolate(&self, index: usize) -> Result<Decomposition<T>, WavebandsError> {
        if index >= self.band_count() {
            return Err(WavebandsError::IndexOutOfRange(index, self.band_count()));
        }

        let approx = if index == 0 {
            self.approx.clone()
        } else {
            try_vec![T::default(); self.approx.len()]
        };

        let mut details = Vec::new();
        details
            .try_reserve_exact(self.details.len())
            .map_err(|_| WavebandsError::OutOfMemory(self.details.len()))?;
        for (level, band) in self.details.iter().enumerate() {
            if level + 1 == index {
                details.push(band.clone());
            } else {
                details.push(try_vec![T::default(); band.len()]);
            }
        }

        Ok(Decomposition {
            approx,
            details,
            signal_length: self.signal_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_decomposition() -> Decomposition<f64> {
        Decomposition {
            approx: vec![1.0, 2.0],
            details: vec![vec![3.0, 4.0], vec![5.0, 6.0, 7.0]],
            signal_length: 5,
        }
    }

    #[test]
    fn test_band_indexing() {
        let d = sample_decomposition();
        assert_eq!(d.levels(), 2);
        assert_eq!(d.band_count(), 3);
        assert_eq!(d.band(0).unwrap(), &[1.0, 2.0]);
        assert_eq!(d.band(1).unwrap(), &[3.0, 4.0]);
        assert_eq!(d.band(2).unwrap(), &[5.0, 6.0, 7.0]);
        assert_eq!(d.detail(1).unwrap(), &[3.0, 4.0]);
        assert!(matches!(
            d.band(3),
            Err(WavebandsError::IndexOutOfRange(3, 3))
        ));
        assert!(matches!(
            d.detail(0),
            Err(WavebandsError::IndexOutOfRange(0, 3))
        ));
    }

    #[test]
    fn test_isolate_zeroes_other_bands() {
        let d = sample_decomposition();
        let only_first_detail = d.isolate(1).unwrap();
        assert_eq!(only_first_detail.approximation(), &[0.0, 0.0]);
        assert_eq!(only_first_detail.band(1).unwrap(), &[3.0, 4.0]);
        assert_eq!(only_first_detail.band(2).unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(only_first_detail.signal_length(), 5);

        let only_approx = d.isolate(0).unwrap();
        assert_eq!(only_approx.approximation(), &[1.0, 2.0]);
        assert_eq!(only_approx.band(1).unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn test_isolate_never_mutates_input() {
        let d = sample_decomposition();
        let a = d.isolate(0).unwrap();
        let b = d.isolate(2).unwrap();
        // the two derived hierarchies are independent of each other
        assert_eq!(a.band(2).unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(b.band(2).unwrap(), &[5.0, 6.0, 7.0]);
        // and the source still holds all of its coefficients
        assert_eq!(d.band(0).unwrap(), &[1.0, 2.0]);
        assert_eq!(d.band(1).unwrap(), &[3.0, 4.0]);
        assert_eq!(d.band(2).unwrap(), &[5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_isolate_out_of_range() {
        let d = sample_decomposition();
        assert!(d.isolate(0).is_ok());
        assert!(d.isolate(d.levels()).is_ok());
        assert!(matches!(
            d.isolate(d.levels() + 1),
            Err(WavebandsError::IndexOutOfRange(3, 3))
        ));
    }
}
