pub const MIN_DESTINATION_LEN: usize = 4;

/// Syntax-only email check: `local@domain.tld`, no whitespace, a single `@`.
pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if !is_plain_part(local) || !is_plain_part(domain) {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, c)| *c == '.' && i > 0 && i + 1 < chars.len())
}

fn is_plain_part(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace())
}

pub fn is_destination_filled(destination: &str) -> bool {
    !destination.trim().is_empty()
}

pub fn is_destination_long_enough(destination: &str) -> bool {
    destination.trim().chars().count() >= MIN_DESTINATION_LEN
}
