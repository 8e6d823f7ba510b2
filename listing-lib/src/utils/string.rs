/// Replace every run of whitespace with a single underscore.
/// Leading and trailing runs are replaced too, nothing is trimmed.
pub fn underscore_whitespace(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_whitespace = false;

    for c in value.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }

    result
}

/// Title-case text: a cased letter is upper-cased when the character before it
/// is not a cased letter, lower-cased otherwise.
///
/// Any non-letter starts a new word, so `o'neil` becomes `O'Neil` and `3rd`
/// becomes `3Rd`. Those are accepted quirks of the convention.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_cased = false;

    for c in value.chars() {
        let is_cased = c.is_lowercase() || c.is_uppercase() || is_titlecase_letter(c);
        if is_cased {
            if previous_is_cased {
                result.extend(c.to_lowercase());
            } else if let Some(titlecased) = titlecase_mapping(c) {
                result.push_str(titlecased);
            } else {
                result.extend(c.to_uppercase());
            }
        } else {
            result.push(c);
        }
        previous_is_cased = is_cased;
    }

    result
}

/// Letters whose titlecase form is not their uppercase form.
fn titlecase_mapping(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("Ss"),
        'Ǆ' | 'ǅ' | 'ǆ' => Some("ǅ"),
        'Ǉ' | 'ǈ' | 'ǉ' => Some("ǈ"),
        'Ǌ' | 'ǋ' | 'ǌ' => Some("ǋ"),
        'Ǳ' | 'ǲ' | 'ǳ' => Some("ǲ"),
        'ﬀ' => Some("Ff"),
        'ﬁ' => Some("Fi"),
        'ﬂ' => Some("Fl"),
        'ﬃ' => Some("Ffi"),
        'ﬄ' => Some("Ffl"),
        'ﬅ' | 'ﬆ' => Some("St"),
        _ => None,
    }
}

/// Titlecase digraphs are cased but neither upper nor lower case.
fn is_titlecase_letter(c: char) -> bool {
    matches!(c, 'ǅ' | 'ǈ' | 'ǋ' | 'ǲ')
}
