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
use std::fmt::{Display, Formatter};

/// Declares how the signal is extended when the analysis window crosses an edge.
///
/// The same mode is applied at every decomposition level. Perfect
/// reconstruction across a full decompose/reconstruct round trip is
/// guaranteed for [`BorderMode::Wrap`], the default.
#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum BorderMode {
    /// Edge sample is replicated across the filter: `aaaaaa|abcdefgh|hhhhhh`
    Clamp,
    /// Signal is treated as periodic: `cdefgh|abcdefgh|abcdefg`
    #[default]
    Wrap,
    /// Signal is mirrored including the edge sample: `fedcba|abcdefgh|hgfedcb`
    Reflect,
    /// Signal is mirrored excluding the edge sample: `gfedcb|abcdefgh|gfedcba`
    Reflect101,
    /// Out-of-bounds positions read as zero: `000000|abcdefgh|000000`
    Zeros,
}

impl Display for BorderMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderMode::Clamp => f.write_str("Clamp"),
            BorderMode::Wrap => f.write_str("Wrap"),
            BorderMode::Reflect => f.write_str("Reflect"),
            BorderMode::Reflect101 => f.write_str("Reflect101"),
            BorderMode::Zeros => f.write_str("Zeros"),
        }
    }
}
