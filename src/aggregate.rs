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
use crate::decomposition::Decomposition;
use crate::engine::MultiLevelDwt;
use crate::err::WavebandsError;
use crate::WaveletSample;

/// Iterator over cumulative approximations of a decomposition hierarchy.
///
/// Element `k` (for `k` in `1..=L`) is the reconstruction of the
/// approximation band plus the detail bands `1..=k`, each computed
/// independently from the borrowed hierarchy. The final element equals the
/// full reconstruction. Created by
/// [`MultiLevelDwt::cumulative_approximations`].
pub struct CumulativeApproximations<'a, T> {
    engine: &'a MultiLevelDwt<T>,
    decomposition: &'a Decomposition<T>,
    level: usize,
}

impl<'a, T: WaveletSample> CumulativeApproximations<'a, T> {
    pub(crate) fn new(
        engine: &'a MultiLevelDwt<T>,
        decomposition: &'a Decomposition<T>,
    ) -> Self {
        Self {
            engine,
            decomposition,
            level: 1,
        }
    }
}

impl<T: WaveletSample> Iterator for CumulativeApproximations<'_, T> {
    type Item = Result<Vec<T>, WavebandsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level > self.decomposition.levels() {
            return None;
        }
        let item = self
            .engine
            .cumulative_approximation(self.decomposition, self.level);
        self.level += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.decomposition.levels() + 1 - self.level;
        (remaining, Some(remaining))
    }
}

impl<T: WaveletSample> ExactSizeIterator for CumulativeApproximations<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border_mode::BorderMode;
    use crate::daubechies::DaubechiesFamily;
    use approx::assert_abs_diff_eq;

    fn sample_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                (2.0 * std::f64::consts::PI * 3.0 * t).sin() + 0.25 * t
            })
            .collect()
    }

    #[test]
    fn test_sequence_has_one_element_per_level() {
        let signal = sample_signal(128);
        let engine: MultiLevelDwt<f64> =
            MultiLevelDwt::new(&DaubechiesFamily::Db2, BorderMode::Wrap).unwrap();
        let decomposition = engine.decompose(&signal, 4).unwrap();
        let seq = engine.cumulative_approximations(&decomposition);
        assert_eq!(seq.len(), 4);
        let collected: Vec<Vec<f64>> = seq.map(|r| r.unwrap()).collect();
        assert_eq!(collected.len(), 4);
        for element in &collected {
            assert_eq!(element.len(), signal.len());
        }
    }

    #[test]
    fn test_final_element_equals_full_reconstruction() {
        let signal = sample_signal(128);
        let engine: MultiLevelDwt<f64> =
            MultiLevelDwt::new(&DaubechiesFamily::Db3, BorderMode::Wrap).unwrap();
        let decomposition = engine.decompose(&signal, 3).unwrap();
        let full = engine.reconstruct(&decomposition).unwrap();
        let last = engine
            .cumulative_approximations(&decomposition)
            .last()
            .unwrap()
            .unwrap();
        for (x, y) in full.iter().zip(last.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-9);
        }
        // and therefore the original signal, by perfect reconstruction
        for (x, y) in signal.iter().zip(last.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_element_is_sum_of_isolated_bands() {
        let signal = sample_signal(96);
        let engine: MultiLevelDwt<f64> =
            MultiLevelDwt::new(&DaubechiesFamily::Db1, BorderMode::Wrap).unwrap();
        let decomposition = engine.decompose(&signal, 3).unwrap();

        for (k, element) in engine
            .cumulative_approximations(&decomposition)
            .enumerate()
        {
            let element = element.unwrap();
            let mut expected = engine.band_signal(&decomposition, 0).unwrap();
            for band in 1..=(k + 1) {
                let isolated = engine.band_signal(&decomposition, band).unwrap();
                for (dst, src) in expected.iter_mut().zip(isolated.iter()) {
                    *dst += *src;
                }
            }
            for (x, y) in expected.iter().zip(element.iter()) {
                assert_abs_diff_eq!(x, y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_iterator_is_restartable() {
        let signal = sample_signal(64);
        let engine: MultiLevelDwt<f64> =
            MultiLevelDwt::new(&DaubechiesFamily::Db1, BorderMode::Wrap).unwrap();
        let decomposition = engine.decompose(&signal, 2).unwrap();

        let mut first_pass = engine.cumulative_approximations(&decomposition);
        let prefix = first_pass.next().unwrap().unwrap();
        drop(first_pass);

        // a fresh iterator over the same hierarchy yields the same elements
        let mut second_pass = engine.cumulative_approximations(&decomposition);
        assert_eq!(second_pass.next().unwrap().unwrap(), prefix);
        assert_eq!(second_pass.len(), 1);
    }
}
