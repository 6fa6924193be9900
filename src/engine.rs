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
use crate::aggregate::CumulativeApproximations;
use crate::border_mode::BorderMode;
use crate::decomposition::Decomposition;
use crate::err::{WavebandsError, try_vec};
use crate::filter_bank::{FilterBank, QuadFilter};
use crate::util::{dwt_length, idwt_length, max_decomposition_level};
use crate::{WaveletFilterProvider, WaveletSample};

/// Multi-level decomposition/reconstruction engine for 1D signals.
///
/// The engine is a deterministic, side-effect-free function over immutable
/// inputs: it holds only the filter bank configuration (wavelet family and
/// border mode), never any per-call state, and is `Send + Sync` so isolated
/// per-band reconstructions may be fanned out across threads by the caller.
pub struct MultiLevelDwt<T> {
    bank: FilterBank<T>,
}

impl<T: WaveletSample> MultiLevelDwt<T> {
    /// Builds an engine for the given wavelet family and border mode.
    ///
    /// Fails with [`WavebandsError::ZeroOrOddSizedWavelet`] if the provider
    /// returns an empty or odd-length scaling filter.
    pub fn new<W: WaveletFilterProvider<T>>(
        provider: &W,
        border_mode: BorderMode,
    ) -> Result<Self, WavebandsError>
    where
        [T]: ToOwned,
    {
        let filter = QuadFilter::from_scaling(provider.get_wavelet().as_ref())?;
        Ok(Self {
            bank: FilterBank::new(filter, border_mode),
        })
    }

    /// The single-level analysis/synthesis primitives this engine runs on.
    #[inline]
    pub fn filter_bank(&self) -> &FilterBank<T> {
        &self.bank
    }

    /// Maximum feasible decomposition depth for a signal of length `len`.
    #[inline]
    pub fn max_level(&self, len: usize) -> usize {
        max_decomposition_level(len, self.bank.filter_length())
    }

    /// Decomposes `signal` into `levels` detail bands plus one final
    /// approximation band.
    ///
    /// Fails with [`WavebandsError::InvalidLevelCount`] if `levels` is zero
    /// or exceeds [`Self::max_level`]; an infeasible request is never
    /// silently truncated. The input signal is not mutated.
    pub fn decompose(
        &self,
        signal: &[T],
        levels: usize,
    ) -> Result<Decomposition<T>, WavebandsError> {
        if signal.is_empty() {
            return Err(WavebandsError::EmptySignal);
        }
        let max = self.max_level(signal.len());
        if levels < 1 || levels > max {
            return Err(WavebandsError::InvalidLevelCount(levels, max));
        }

        let taps = self.bank.filter_length();
        let mut current = signal.to_vec();
        let mut details: Vec<Vec<T>> = Vec::with_capacity(levels);

        for _ in 0..levels {
            let half = dwt_length(current.len(), taps);
            let mut approx = try_vec![T::default(); half];
            let mut detail = try_vec![T::default(); half];

            self.bank.analyze(&current, &mut approx, &mut detail)?;

            details.push(detail);
            current = approx;
        }

        // stored coarsest-detail-first, matching the band indexing convention
        details.reverse();

        Ok(Decomposition {
            approx: current,
            details,
            signal_length: signal.len(),
        })
    }

    /// Decomposes `signal` to the maximum feasible depth.
    pub fn decompose_full(&self, signal: &[T]) -> Result<Decomposition<T>, WavebandsError> {
        if signal.is_empty() {
            return Err(WavebandsError::EmptySignal);
        }
        let max = self.max_level(signal.len());
        if max == 0 {
            return Err(WavebandsError::InvalidLevelCount(1, 0));
        }
        self.decompose(signal, max)
    }

    /// Reconstructs a signal of `decomposition.signal_length()` samples from
    /// the full hierarchy. Reconstructing an unmodified hierarchy reproduces
    /// the decomposed signal up to floating-point tolerance.
    pub fn reconstruct(&self, decomposition: &Decomposition<T>) -> Result<Vec<T>, WavebandsError> {
        self.reconstruct_to(decomposition, decomposition.signal_length)
    }

    /// Reconstructs a signal of exactly `target_length` samples.
    ///
    /// Every per-level band length is validated against the length chain
    /// implied by `target_length` and the filter length before any synthesis
    /// runs; any inconsistency fails with [`WavebandsError::ShapeMismatch`].
    /// Each synthesis step overshoots the level's expected length by at most
    /// one sample; the trailing overhang is trimmed, and the same trailing
    /// trim rule is applied at every level.
    pub fn reconstruct_to(
        &self,
        decomposition: &Decomposition<T>,
        target_length: usize,
    ) -> Result<Vec<T>, WavebandsError> {
        if target_length == 0 {
            return Err(WavebandsError::EmptySignal);
        }
        let taps = self.bank.filter_length();
        let levels = decomposition.levels();

        // chain[l] is the band length at depth l: chain[0] = target_length,
        // chain[l + 1] = dwt_length(chain[l]).
        let mut chain = Vec::new();
        chain
            .try_reserve_exact(levels + 1)
            .map_err(|_| WavebandsError::OutOfMemory(levels + 1))?;
        let mut len = target_length;
        chain.push(len);
        for _ in 0..levels {
            len = dwt_length(len, taps);
            chain.push(len);
        }

        if decomposition.approx.len() != chain[levels] {
            return Err(WavebandsError::ShapeMismatch(
                decomposition.approx.len(),
                chain[levels],
            ));
        }
        for (k, band) in decomposition.details.iter().enumerate() {
            // details[k] was produced at depth levels - k
            let expected = chain[levels - k];
            if band.len() != expected {
                return Err(WavebandsError::ShapeMismatch(band.len(), expected));
            }
        }

        let mut current = decomposition.approx.clone();
        for (k, detail) in decomposition.details.iter().enumerate() {
            let level = levels - k;
            let mut output = try_vec![T::default(); idwt_length(current.len(), taps)];
            self.bank.synthesize(&current, detail, &mut output)?;
            output.truncate(chain[level - 1]);
            current = output;
        }
        Ok(current)
    }

    /// Isolated contribution of one band to the signal: reconstruction of a
    /// derived hierarchy in which every other band is zeroed.
    ///
    /// Index 0 is the approximation band, `1..=L` the detail bands from
    /// coarsest to finest.
    pub fn band_signal(
        &self,
        decomposition: &Decomposition<T>,
        index: usize,
    ) -> Result<Vec<T>, WavebandsError> {
        let isolated = decomposition.isolate(index)?;
        self.reconstruct(&isolated)
    }

    /// Cumulative approximation at depth `level`: the elementwise sum of the
    /// isolated reconstructions of the approximation band and the detail
    /// bands `1..=level`. At `level == L` this equals the full
    /// reconstruction by linearity of the transform.
    pub fn cumulative_approximation(
        &self,
        decomposition: &Decomposition<T>,
        level: usize,
    ) -> Result<Vec<T>, WavebandsError> {
        let levels = decomposition.levels();
        if level < 1 || level > levels {
            return Err(WavebandsError::InvalidLevelCount(level, levels));
        }
        let mut sum = self.band_signal(decomposition, 0)?;
        for band in 1..=level {
            let isolated = self.band_signal(decomposition, band)?;
            for (dst, src) in sum.iter_mut().zip(isolated.iter()) {
                *dst += *src;
            }
        }
        Ok(sum)
    }

    /// Lazy sequence of cumulative approximations for levels `1..=L`.
    ///
    /// Each element is computed independently from the borrowed hierarchy,
    /// so callers may consume any prefix, restart the iterator, or compute
    /// elements in parallel without shared state.
    pub fn cumulative_approximations<'a>(
        &'a self,
        decomposition: &'a Decomposition<T>,
    ) -> CumulativeApproximations<'a, T> {
        CumulativeApproximations::new(self, decomposition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daubechies::DaubechiesFamily;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn haar_engine() -> MultiLevelDwt<f64> {
        MultiLevelDwt::new(&DaubechiesFamily::Db1, BorderMode::Wrap).unwrap()
    }

    /// Linear ramp with a localized three-sample spike, the shape used for
    /// inspecting per-band contributions of spectra.
    fn ramp_with_spike(n: usize) -> Vec<f64> {
        let mut y: Vec<f64> = (0..n)
            .map(|i| 2.0 * (i as f64 / (n - 1) as f64) - 1.0)
            .collect();
        y[20] += 7.0;
        y[21] += 15.0;
        y[22] += 9.0;
        y
    }

    #[test]
    fn test_perfect_reconstruction_haar_every_feasible_depth() {
        let signal = ramp_with_spike(128);
        let engine = haar_engine();
        assert_eq!(engine.max_level(128), 7);
        for levels in 1..=7usize {
            let decomposition = engine.decompose(&signal, levels).unwrap();
            assert_eq!(decomposition.levels(), levels);
            let reconstructed = engine.reconstruct(&decomposition).unwrap();
            assert_eq!(reconstructed.len(), signal.len());
            for (i, (x, y)) in signal.iter().zip(reconstructed.iter()).enumerate() {
                assert!(
                    (x - y).abs() < 1e-9,
                    "level {levels} sample {i}: expected {x}, derived {y}"
                );
            }
        }
    }

    #[test]
    fn test_perfect_reconstruction_db4_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let signal: Vec<f64> = (0..128).map(|_| rng.gen_range(-4.0..4.0)).collect();
        let engine: MultiLevelDwt<f64> =
            MultiLevelDwt::new(&DaubechiesFamily::Db4, BorderMode::Wrap).unwrap();
        assert_eq!(engine.max_level(128), 4);
        let decomposition = engine.decompose_full(&signal).unwrap();
        let reconstructed = engine.reconstruct(&decomposition).unwrap();
        for (x, y) in signal.iter().zip(reconstructed.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_perfect_reconstruction_odd_length() {
        let signal = ramp_with_spike(101);
        let engine = haar_engine();
        let decomposition = engine.decompose(&signal, 3).unwrap();
        let reconstructed = engine.reconstruct(&decomposition).unwrap();
        assert_eq!(reconstructed.len(), 101);
        for (x, y) in signal.iter().zip(reconstructed.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_level_count_bound() {
        let signal = vec![1.0f64; 128];
        let engine = haar_engine();
        assert!(matches!(
            engine.decompose(&signal, 8),
            Err(WavebandsError::InvalidLevelCount(8, 7))
        ));
        assert!(matches!(
            engine.decompose(&signal, 0),
            Err(WavebandsError::InvalidLevelCount(0, 7))
        ));
        assert!(engine.decompose(&signal, 7).is_ok());
        assert_eq!(engine.decompose_full(&signal).unwrap().levels(), 7);
    }

    #[test]
    fn test_empty_signal_rejected() {
        let engine = haar_engine();
        assert!(matches!(
            engine.decompose(&[], 1),
            Err(WavebandsError::EmptySignal)
        ));
        assert!(matches!(
            engine.decompose_full(&[]),
            Err(WavebandsError::EmptySignal)
        ));
    }

    #[test]
    fn test_band_lengths_follow_chain() {
        let signal = ramp_with_spike(128);
        let engine: MultiLevelDwt<f64> =
            MultiLevelDwt::new(&DaubechiesFamily::Db2, BorderMode::Wrap).unwrap();
        let decomposition = engine.decompose(&signal, 3).unwrap();
        // 128 -> 65 -> 34 -> 18 with a 4-tap filter
        assert_eq!(decomposition.approximation().len(), 18);
        assert_eq!(decomposition.band(1).unwrap().len(), 18);
        assert_eq!(decomposition.band(2).unwrap().len(), 34);
        assert_eq!(decomposition.band(3).unwrap().len(), 65);
    }

    #[test]
    fn test_linearity_of_isolated_reconstructions() {
        let signal = ramp_with_spike(128);
        let engine = haar_engine();
        let decomposition = engine.decompose(&signal, 5).unwrap();

        let full = engine.reconstruct(&decomposition).unwrap();
        let mut sum = vec![0.0f64; full.len()];
        for band in 0..decomposition.band_count() {
            let isolated = engine.band_signal(&decomposition, band).unwrap();
            assert_eq!(isolated.len(), full.len());
            for (dst, src) in sum.iter_mut().zip(isolated.iter()) {
                *dst += *src;
            }
        }
        for (x, y) in full.iter().zip(sum.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_isolation_does_not_disturb_the_hierarchy() {
        let signal = ramp_with_spike(128);
        let engine = haar_engine();
        let decomposition = engine.decompose(&signal, 4).unwrap();
        let before: Vec<Vec<f64>> = (0..decomposition.band_count())
            .map(|i| decomposition.band(i).unwrap().to_vec())
            .collect();

        let _ = engine.band_signal(&decomposition, 0).unwrap();
        let _ = engine.band_signal(&decomposition, 4).unwrap();

        for (i, band) in before.iter().enumerate() {
            assert_eq!(decomposition.band(i).unwrap(), band.as_slice());
        }
    }

    #[test]
    fn test_band_signal_index_validation() {
        let signal = ramp_with_spike(128);
        let engine = haar_engine();
        let decomposition = engine.decompose(&signal, 4).unwrap();
        assert!(engine.band_signal(&decomposition, 0).is_ok());
        assert!(engine.band_signal(&decomposition, 4).is_ok());
        assert!(matches!(
            engine.band_signal(&decomposition, 5),
            Err(WavebandsError::IndexOutOfRange(5, 5))
        ));
    }

    #[test]
    fn test_reconstruct_shape_mismatch() {
        let signal = ramp_with_spike(128);
        let engine = haar_engine();
        let decomposition = engine.decompose(&signal, 3).unwrap();

        // wrong target length
        let r = engine.reconstruct_to(&decomposition, 100);
        assert!(matches!(r, Err(WavebandsError::ShapeMismatch(_, _))));

        // tampered detail band
        let mut tampered = decomposition.clone();
        tampered.details[1].pop();
        let r = engine.reconstruct(&tampered);
        assert!(matches!(r, Err(WavebandsError::ShapeMismatch(31, 32))));

        // tampered approximation band
        let mut tampered = decomposition.clone();
        tampered.approx.push(0.0);
        let r = engine.reconstruct(&tampered);
        assert!(matches!(r, Err(WavebandsError::ShapeMismatch(17, 16))));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<MultiLevelDwt<f64>>();
        assert_send_sync::<Decomposition<f32>>();
    }
}
