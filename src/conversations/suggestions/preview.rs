//! Sample reply shown next to the tone sliders.

use crate::conversations::core::tone::ToneProfile;

/// Incoming message the preview replies to.
pub const PREVIEW_INPUT: &str = "Let's do a hike this weekend?";

const ENTHUSIASTIC: &str = "Love that idea\u{2014}how about Saturday morning? I know a spot with a killer view, and coffee\u{2019}s on me. \u{1F604}";
const RESERVED: &str = "That sounds nice. Which day works best for you?";
const BALANCED: &str = "Weekend hike sounds great. I\u{2019}m thinking Saturday\u{2014}does that fit for you?";
const FALLBACK: &str = "I\u{2019}m in for a hike\u{2014}what time suits you?";

/// Sample reply to [`PREVIEW_INPUT`] for `tone`.
///
/// Bands are checked in order: enthusiastic, reserved, balanced, fallback.
#[must_use]
pub fn preview_reply(tone: &ToneProfile) -> &'static str {
    let [play, _, fwd, expr, flirt] = tone.rounded();

    if play >= 7 && flirt >= 7 && fwd >= 6 && expr >= 6 {
        ENTHUSIASTIC
    } else if (1..=3).contains(&play)
        && (1..=3).contains(&flirt)
        && (1..=5).contains(&fwd)
        && (1..=4).contains(&expr)
    {
        RESERVED
    } else if (4..=6).contains(&play)
        && (4..=6).contains(&flirt)
        && (4..=7).contains(&fwd)
        && (4..=7).contains(&expr)
    {
        BALANCED
    } else {
        FALLBACK
    }
}
