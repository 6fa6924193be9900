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
#![no_main]

use libfuzzer_sys::fuzz_target;
use wavebands::{BorderMode, DaubechiesFamily, MultiLevelDwt};

fuzz_target!(|data: (u16, u8, u8, Vec<f32>)| {
    let (len_seed, wavelet_seed, mode_seed, samples) = data;
    let n = (len_seed as usize % 512).max(2);
    if samples.iter().any(|x| !x.is_finite()) {
        return;
    }

    let wavelet = match wavelet_seed % 4 {
        0 => DaubechiesFamily::Db1,
        1 => DaubechiesFamily::Db2,
        2 => DaubechiesFamily::Db3,
        _ => DaubechiesFamily::Db4,
    };
    let border_mode = match mode_seed % 5 {
        0 => BorderMode::Clamp,
        1 => BorderMode::Wrap,
        2 => BorderMode::Reflect,
        3 => BorderMode::Reflect101,
        _ => BorderMode::Zeros,
    };

    let mut signal = vec![0f32; n];
    for (dst, src) in signal.iter_mut().zip(samples.iter()) {
        *dst = *src;
    }

    let engine: MultiLevelDwt<f32> = MultiLevelDwt::new(&wavelet, border_mode).unwrap();
    let max = engine.max_level(signal.len());
    if max == 0 {
        return;
    }

    for levels in 1..=max {
        let decomposition = engine.decompose(&signal, levels).unwrap();
        let restored = engine.reconstruct(&decomposition).unwrap();
        assert_eq!(restored.len(), signal.len());
    }
});
