//! String helpers shared by the loader, filter, sort engine and renderer.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Number [CSF]|Numero [CSF]").expect("valid regex"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Fold a character to its lowercase base letter (drops common Latin accents).
pub fn fold_char(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Lowercase and strip accents from a whole string.
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Natural, case- and accent-insensitive comparison.
///
/// Runs of ASCII digits compare by numeric value, so "Card 2" sorts before
/// "Card 10". Characters that differ only in case or accent compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();
    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let na = take_digits(&mut ai);
                let nb = take_digits(&mut bi);
                let ord = compare_digit_runs(&na, &nb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                ai.next();
                bi.next();
                let ord = char_weight(ca).cmp(&char_weight(cb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Accent- and case-folded comparison without numeric awareness; texts that
/// fold equal fall back to their raw order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// Punctuation and spaces sort ahead of letters and digits.
fn char_weight(c: char) -> (bool, char) {
    (c.is_alphanumeric(), fold_char(c))
}

/// Predictable slug: lowercase, no quotes, non-alphanumeric runs become `-`.
pub fn slugify(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_dash = false;
    for c in lower.chars() {
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Remove the decorative `"—— "` and `"— "` markers used in option labels.
pub fn strip_dash_prefix(s: &str) -> String {
    s.replace("—— ", "").replace("— ", "")
}

/// Remove every en/em dash and trim.
pub fn clean_dashes(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '–' | '—'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Drop HTML tags, collapse whitespace runs, lowercase.
pub fn strip_html(s: &str) -> String {
    let without_tags = HTML_TAG.replace_all(s, "");
    without_tags
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parse the longest numeric prefix of `s`, the way browsers' `parseFloat`
/// does: leading whitespace, optional sign, digits, fraction and exponent.
///
/// Returns `None` when no digits are found.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Normalize a card name for the name sort: drop the first `"CXyz "` and
/// replace `Number C`/`Numero S`-style prefixes with the plain localized word.
pub fn normalize_card_name(name: &str, number_word: &str) -> String {
    let without_cxyz = name.replacen("CXyz ", "", 1);
    NUMBER_PREFIX
        .replace_all(&without_cxyz, regex::NoExpand(number_word))
        .into_owned()
}
