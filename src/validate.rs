//! Cheap plausibility gate for partial channel updates.

use crate::patch::{Channel, ChannelPatch, ChannelValue};

/// Checks that every present channel in `patch` looks numeric.
///
/// A channel is only checked when its value is truthy, so `0` and empty text
/// are skipped as if absent. A checked value passes when it coerces to a
/// number, or, for `s` and `l`, when it is a whole percentage such as `"42%"`.
/// Ranges are not checked.
///
/// Returns the patch itself when every checked channel passed (including when
/// nothing was checked) and `None` otherwise.
pub fn simple_check_for_valid_color<'p, 'a>(
    patch: &'p ChannelPatch<'a>,
) -> Option<&'p ChannelPatch<'a>> {
    let mut checked = 0;
    let mut passed = 0;

    for channel in Channel::ALL {
        let Some(value) = patch.get(channel).filter(ChannelValue::is_truthy) else {
            continue;
        };
        checked += 1;

        if !value.as_number().is_nan() {
            passed += 1;
        }
        if matches!(channel, Channel::S | Channel::L) {
            if let ChannelValue::Text(text) = value {
                if is_whole_percent(text) {
                    passed += 1;
                }
            }
        }
    }

    (checked == passed).then_some(patch)
}

/// Matches `^\d+%$`.
fn is_whole_percent(text: &str) -> bool {
    text.strip_suffix('%')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
