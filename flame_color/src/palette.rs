// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category tints and per-frame color derivation.

use flame_tree::{Frame, FrameFlags};

use crate::hash::source_hash;
use crate::rng::{Mulberry32, UnitRng};

/// A color with `f64` channels: RGB in `[0, 255]`, alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0, 1.0);

    /// Create a color from channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the RGB channels, keeping alpha.
    #[must_use]
    pub fn scale_rgb(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Round to 8-bit channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn channel(v: f64) -> u8 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped into the u8 range first."
            )]
            let out = (v.clamp(0.0, 255.0) + 0.5) as u8;
            out
        }
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a * 255.0),
        ]
    }
}

/// Colors used to paint one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeColors {
    /// Band fill.
    pub fill: Rgba,
    /// Optional band border, 80% of the fill luminance.
    pub stroke: Rgba,
    /// Label color.
    pub text: Rgba,
}

/// A base color and the spread applied around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tint {
    /// Base RGB.
    pub base: [u8; 3],
    /// Full width of the jitter range; each channel moves by up to half of it.
    pub jitter: f64,
}

impl Tint {
    /// Create a tint.
    pub const fn new(base: [u8; 3], jitter: f64) -> Self {
        Self { base, jitter }
    }

    /// Returns `true` if the base color is a gray.
    pub const fn is_achromatic(&self) -> bool {
        self.base[0] == self.base[1] && self.base[1] == self.base[2]
    }

    /// Perturb the base color with draws from `rng`.
    ///
    /// Grays draw once and keep all channels equal; other tints draw once per
    /// channel in R, G, B order.
    pub fn perturb<R: UnitRng>(&self, rng: &mut R) -> [f64; 3] {
        let mut shift = |base: u8| {
            (f64::from(base) + (rng.next_unit() - 0.5) * self.jitter).clamp(0.0, 255.0)
        };
        if self.is_achromatic() {
            let v = shift(self.base[0]);
            [v, v, v]
        } else {
            let r = shift(self.base[0]);
            let g = shift(self.base[1]);
            let b = shift(self.base[2]);
            [r, g, b]
        }
    }
}

/// Color policy for frames.
///
/// The tint is chosen by the highest-priority flag present:
/// runtime dispatch, then GC, then compiled code, then the default tint.
/// Native frames are drawn translucent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Tint for [`FrameFlags::RUNTIME_DISPATCH`].
    pub runtime_dispatch: Tint,
    /// Tint for [`FrameFlags::GC`].
    pub gc: Tint,
    /// Tint for [`FrameFlags::COMPILED`].
    pub compiled: Tint,
    /// Tint for everything else.
    pub default: Tint,
    /// Fill alpha for [`FrameFlags::NATIVE`] frames.
    pub native_alpha: f64,
    /// Label color; its alpha is raised to at least `min_text_alpha`.
    pub text: Rgba,
    /// Lower bound for label alpha.
    pub min_text_alpha: f64,
    /// Stroke luminance relative to the fill.
    pub stroke_factor: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            runtime_dispatch: Tint::new([204, 103, 103], 20.0),
            gc: Tint::new([204, 153, 68], 20.0),
            compiled: Tint::new([100, 100, 100], 60.0),
            default: Tint::new([64, 99, 221], 70.0),
            native_alpha: 0.5,
            text: Rgba::WHITE,
            min_text_alpha: 0.6,
            stroke_factor: 0.8,
        }
    }
}

impl Palette {
    /// The tint applied to frames carrying `flags`.
    pub fn tint_for(&self, flags: FrameFlags) -> &Tint {
        if flags.contains(FrameFlags::RUNTIME_DISPATCH) {
            &self.runtime_dispatch
        } else if flags.contains(FrameFlags::GC) {
            &self.gc
        } else if flags.contains(FrameFlags::COMPILED) {
            &self.compiled
        } else {
            &self.default
        }
    }

    /// Colors for a frame, seeded from its source location.
    ///
    /// Two frames with the same file and line always get the same colors,
    /// wherever they appear in the tree.
    pub fn colors_for(&self, frame: &Frame) -> NodeColors {
        let mut rng = Mulberry32::new(source_hash(&frame.file, frame.line));
        self.colors_with(frame.flags, &mut rng)
    }

    /// Colors for `flags`, drawing jitter from a caller-supplied generator.
    pub fn colors_with<R: UnitRng>(&self, flags: FrameFlags, rng: &mut R) -> NodeColors {
        let [r, g, b] = self.tint_for(flags).perturb(rng);
        let alpha = if flags.contains(FrameFlags::NATIVE) {
            self.native_alpha
        } else {
            1.0
        };
        let fill = Rgba::new(r, g, b, alpha);
        NodeColors {
            fill,
            stroke: fill.scale_rgb(self.stroke_factor),
            text: self.text.with_alpha(self.min_text_alpha.max(alpha)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn frame(file: &str, line: u32, flags: FrameFlags) -> Frame {
        Frame {
            file: file.into(),
            line,
            flags,
            ..Frame::new("f", 1)
        }
    }

    /// Replays a fixed sequence.
    struct Fixed<'a>(&'a [f64]);

    impl UnitRng for Fixed<'_> {
        fn next_unit(&mut self) -> f64 {
            let (first, rest) = self.0.split_first().expect("sequence exhausted");
            self.0 = rest;
            *first
        }
    }

    #[test]
    fn default_tint_for_unlocated_frames() {
        let colors = Palette::default().colors_for(&frame("", 0, FrameFlags::empty()));
        assert!(close(colors.fill.r, 47.650_044_607_929_885));
        assert!(close(colors.fill.g, 64.023_082_199_040_8));
        assert!(close(colors.fill.b, 201.629_041_921_347_38));
        assert_eq!(colors.fill.a, 1.0);
        assert_eq!(colors.text, Rgba::WHITE);
    }

    #[test]
    fn compiled_frames_stay_gray() {
        let colors = Palette::default().colors_for(&frame("", 0, FrameFlags::COMPILED));
        assert!(close(colors.fill.r, 85.985_752_521_082_76));
        assert_eq!(colors.fill.r, colors.fill.g);
        assert_eq!(colors.fill.g, colors.fill.b);
    }

    #[test]
    fn flag_priority() {
        let p = Palette::default();
        let all = FrameFlags::RUNTIME_DISPATCH | FrameFlags::GC | FrameFlags::COMPILED;
        assert_eq!(p.tint_for(all), &p.runtime_dispatch);
        assert_eq!(p.tint_for(FrameFlags::GC | FrameFlags::COMPILED), &p.gc);
        assert_eq!(p.tint_for(FrameFlags::COMPILED), &p.compiled);
        assert_eq!(p.tint_for(FrameFlags::NATIVE), &p.default);
        assert_eq!(p.tint_for(FrameFlags::from_bits_retain(0x04)), &p.default);

        let colors = p.colors_for(&frame("lib.rs", 7, all));
        assert!(close(colors.fill.r, 204.518_095_837_906));
        assert!(close(colors.fill.g, 102.059_260_897_338_39));
        assert!(close(colors.fill.b, 98.394_323_132_932_19));
    }

    #[test]
    fn native_frames_are_translucent() {
        let colors = Palette::default().colors_for(&frame("ffi.c", 3, FrameFlags::NATIVE));
        assert_eq!(colors.fill.a, 0.5);
        assert_eq!(colors.stroke.a, 0.5);
        assert_eq!(colors.text.a, 0.6);
    }

    #[test]
    fn stroke_is_darker_fill() {
        let colors = Palette::default().colors_for(&frame("a.rs", 1, FrameFlags::GC));
        assert!(close(colors.stroke.r, colors.fill.r * 0.8));
        assert!(close(colors.stroke.g, colors.fill.g * 0.8));
        assert!(close(colors.stroke.b, colors.fill.b * 0.8));
    }

    #[test]
    fn same_location_same_color() {
        let p = Palette::default();
        let mut a = frame("src/lib.rs", 12, FrameFlags::empty());
        let mut b = a.clone();
        a.func = "one".into();
        b.func = "two".into();
        b.count = 999;
        assert_eq!(p.colors_for(&a), p.colors_for(&b));
        assert_ne!(
            p.colors_for(&a),
            p.colors_for(&frame("src/lib.rs", 13, FrameFlags::empty()))
        );
    }

    #[test]
    fn jitter_is_clamped() {
        let tint = Tint::new([250, 5, 128], 100.0);
        let [r, g, b] = tint.perturb(&mut Fixed(&[0.99, 0.0, 0.5]));
        assert_eq!(r, 255.0);
        assert_eq!(g, 0.0);
        assert_eq!(b, 128.0);
    }

    #[test]
    fn gray_tints_draw_once() {
        let tint = Tint::new([100, 100, 100], 60.0);
        // A second draw would panic on the exhausted sequence.
        let [r, g, b] = tint.perturb(&mut Fixed(&[1.0]));
        assert_eq!([r, g, b], [130.0, 130.0, 130.0]);
    }

    #[test]
    fn rgba8_rounding() {
        assert_eq!(Rgba::new(47.6, 64.4, 300.0, 0.5).to_rgba8(), [48, 64, 255, 128]);
        assert_eq!(Rgba::new(-3.0, 0.0, 0.0, 1.0).to_rgba8(), [0, 0, 0, 255]);
    }
}
