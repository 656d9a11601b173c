pub const SKILLS_THRESHOLD: f64 = 0.3;
pub const STAGGER_MS: u32 = 100;
pub const FILL_DELAY_MS: u32 = 300;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Reads a `data-skill` value: optional leading whitespace and sign, then
/// leading digits. Anything after the digits is ignored. Values above 100 are
/// kept as written; negative values yield `None` and leave the bar alone.
pub fn parse_skill_level(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<u32>().unwrap_or(u32::MAX);
    if negative && value > 0 {
        return None;
    }
    Some(value)
}

pub fn item_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

pub fn fill_width(level: u32) -> String {
    format!("{level}%")
}
