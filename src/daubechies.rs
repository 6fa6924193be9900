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
use crate::WaveletFilterProvider;
use num_traits::AsPrimitive;
use std::borrow::Cow;

const DB1: [f64; 2] = [std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2];

const DB2: [f64; 4] = [
    0.48296291314469025,
    0.83651630373746899,
    0.22414386804185735,
    -0.12940952255092145,
];

const DB3: [f64; 6] = [
    0.33267055295095688,
    0.80689150931333875,
    0.45987750211933132,
    -0.13501102001039084,
    -0.085441273882241486,
    0.035226291882100656,
];

const DB4: [f64; 8] = [
    0.23037781330885523,
    0.71484657055254153,
    0.63088076792959036,
    -0.027983769416983849,
    -0.18703481171888114,
    0.030841381835986965,
    0.032883011666982945,
    -0.010597401784997278,
];

const DB5: [f64; 10] = [
    0.160102397974125,
    0.60382926979747287,
    0.72430852843857441,
    0.13842814590110342,
    -0.24229488706619015,
    -0.032244869585030339,
    0.077571493840065148,
    -0.0062414902130117052,
    -0.012580751999015526,
    0.0033357252850015492,
];

const DB6: [f64; 12] = [
    0.11154074335008017,
    0.49462389039838539,
    0.75113390802157753,
    0.31525035170924131,
    -0.22626469396516913,
    -0.12976686756709563,
    0.097501605587079362,
    0.027522865530016288,
    -0.031582039318031156,
    0.00055384220099381803,
    0.0047772575110106514,
    -0.0010773010849955799,
];

const DB7: [f64; 14] = [
    0.077852054085062364,
    0.39653931948230575,
    0.72913209084655506,
    0.4697822874053586,
    -0.14390600392910627,
    -0.22403618499416572,
    0.071309219267050042,
    0.080612609151065898,
    -0.038029936935034633,
    -0.01657454163101562,
    0.012550998556013784,
    0.00042957797300470274,
    -0.0018016407039998328,
    0.00035371380000103988,
];

const DB8: [f64; 16] = [
    0.054415842243081609,
    0.31287159091446592,
    0.67563073629801285,
    0.58535468365486909,
    -0.015829105256023893,
    -0.28401554296242809,
    0.00047248457399797254,
    0.128747426620186,
    -0.017369301002022108,
    -0.044088253931064719,
    0.013981027917015516,
    0.0087460940470156547,
    -0.0048703529930106603,
    -0.00039174037299597711,
    0.00067544940599855677,
    -0.00011747678400228192,
];

/// Represents the Daubechies wavelet family.
///
/// Daubechies wavelets are the standard orthogonal wavelets with a maximal
/// number of vanishing moments for a given support width. `Db1` is the Haar
/// wavelet. Coefficients are stored in natural (reconstruction) order.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum DaubechiesFamily {
    /// Haar wavelet, 2 taps
    Db1,
    /// Daubechies wavelet with 2 vanishing moments
    Db2,
    /// Daubechies wavelet with 3 vanishing moments
    Db3,
    /// Daubechies wavelet with 4 vanishing moments
    Db4,
    /// Daubechies wavelet with 5 vanishing moments
    Db5,
    /// Daubechies wavelet with 6 vanishing moments
    Db6,
    /// Daubechies wavelet with 7 vanishing moments
    Db7,
    /// Daubechies wavelet with 8 vanishing moments
    Db8,
}

impl DaubechiesFamily {
    pub(crate) fn get_wavelet_impl(self) -> &'static [f64] {
        match self {
            DaubechiesFamily::Db1 => DB1.as_slice(),
            DaubechiesFamily::Db2 => DB2.as_slice(),
            DaubechiesFamily::Db3 => DB3.as_slice(),
            DaubechiesFamily::Db4 => DB4.as_slice(),
            DaubechiesFamily::Db5 => DB5.as_slice(),
            DaubechiesFamily::Db6 => DB6.as_slice(),
            DaubechiesFamily::Db7 => DB7.as_slice(),
            DaubechiesFamily::Db8 => DB8.as_slice(),
        }
    }
}

impl<T: Copy + 'static> WaveletFilterProvider<T> for DaubechiesFamily
where
    f64: AsPrimitive<T>,
{
    fn get_wavelet(&self) -> Cow<'_, [T]> {
        Cow::Owned(self.get_wavelet_impl().iter().map(|x| x.as_()).collect())
    }
}
