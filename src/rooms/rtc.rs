use std::{fmt, sync::{Arc, Mutex}};

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::room::RtcType;

/// Values 0..TRTC_SHARE of a ten-way draw go to TRTC, the rest to Agora.
pub const TRTC_SHARE: u32 = 6;
pub const DRAW_RANGE: u32 = 10;

/// Source of the ten-way draw behind backend selection.
pub trait Draw: Send + Sync {
    fn draw(&self) -> u32;
}

pub struct ThreadRngDraw;

impl Draw for ThreadRngDraw {
    fn draw(&self) -> u32 {
        rand::rng().random_range(0..DRAW_RANGE)
    }
}

pub struct SeededDraw(Mutex<StdRng>);

impl SeededDraw {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl Draw for SeededDraw {
    fn draw(&self) -> u32 {
        let mut rng = match self.0.lock() {
            Ok(rng) => rng,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.random_range(0..DRAW_RANGE)
    }
}

pub struct FixedDraw(pub u32);

impl Draw for FixedDraw {
    fn draw(&self) -> u32 {
        self.0
    }
}

#[derive(Clone)]
pub struct RtcPicker {
    source: Arc<dyn Draw>,
}

impl RtcPicker {
    pub fn new(source: impl Draw + 'static) -> Self {
        Self { source: Arc::new(source) }
    }

    pub fn random() -> Self {
        Self::new(ThreadRngDraw)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededDraw::new(seed))
    }

    pub fn fixed(value: u32) -> Self {
        Self::new(FixedDraw(value))
    }

    pub fn pick(&self) -> RtcType {
        rtc_for_draw(self.source.draw())
    }
}

impl Default for RtcPicker {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Debug for RtcPicker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RtcPicker").finish_non_exhaustive()
    }
}

pub fn rtc_for_draw(draw: u32) -> RtcType {
    if draw % DRAW_RANGE < TRTC_SHARE {
        RtcType::Trtc
    } else {
        RtcType::Agora
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_boundaries() {
        for draw in 0..=5 {
            assert_eq!(rtc_for_draw(draw), RtcType::Trtc, "{draw}");
        }
        for draw in 6..=9 {
            assert_eq!(rtc_for_draw(draw), RtcType::Agora, "{draw}");
        }
    }

    #[test]
    fn out_of_range_draws_wrap() {
        assert_eq!(rtc_for_draw(10), RtcType::Trtc);
        assert_eq!(rtc_for_draw(17), RtcType::Agora);
    }

    #[test]
    fn fixed_picker_hits_both_branches() {
        assert_eq!(RtcPicker::fixed(0).pick(), RtcType::Trtc);
        assert_eq!(RtcPicker::fixed(5).pick(), RtcType::Trtc);
        assert_eq!(RtcPicker::fixed(6).pick(), RtcType::Agora);
        assert_eq!(RtcPicker::fixed(9).pick(), RtcType::Agora);
    }

    #[test]
    fn split_converges_to_sixty_forty() {
        let picker = RtcPicker::seeded(0x5eed);
        let n = 10_000;
        let trtc = (0..n).filter(|_| picker.pick() == RtcType::Trtc).count();
        let fraction = trtc as f64 / n as f64;
        assert!((fraction - 0.6).abs() < 0.03, "TRTC fraction {fraction}");
    }

    #[test]
    fn thread_rng_stays_in_range() {
        for _ in 0..1_000 {
            assert!(ThreadRngDraw.draw() < DRAW_RANGE);
        }
    }
}
