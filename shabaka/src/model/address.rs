use crate::constants::DISPLAY_NAME_ELLIPSIS;
use crate::constants::DISPLAY_NAME_PREFIX_CHARS;
use crate::constants::DISPLAY_NAME_SUFFIX_CHARS;

/// Shortens an address to `prefix...suffix` for on-canvas labels.
///
/// A 42-character EVM address `0xAbCd...` keeps characters `[0, 3)` and
/// `[39, 42)`. Addresses too short to gain anything from the ellipsis are
/// returned unchanged. Works on chars, so non-ASCII input never splits.
pub fn abbreviate_address(address: &str) -> String {
    let char_count = address.chars().count();
    let min_len = DISPLAY_NAME_PREFIX_CHARS + DISPLAY_NAME_ELLIPSIS.len() + DISPLAY_NAME_SUFFIX_CHARS;
    if char_count <= min_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(DISPLAY_NAME_PREFIX_CHARS).collect();
    let suffix: String = address.chars().skip(char_count - DISPLAY_NAME_SUFFIX_CHARS).collect();
    format!("{}{}{}", prefix, DISPLAY_NAME_ELLIPSIS, suffix)
}
