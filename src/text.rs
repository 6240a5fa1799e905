//! Text formatting shared by every label that reaches the user.

/// ASCII accidental markers and their notational glyphs, longest first so a
/// double marker is never split by the single-marker rule.
const ACCIDENTAL_GLYPHS: &[(&str, &str)] = &[
    ("bb", "\u{1D12B}"),
    ("b", "\u{266D}"),
    ("##", "\u{1D12A}"),
    ("#", "\u{266F}"),
];

/// Replace ASCII accidentals in a key label with unicode glyphs, e.g.
/// `Bb` → `B♭`, `F##` → `F𝄪`.
pub fn beautify_accidentals(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    let mut rest = label;

    'scan: while let Some(ch) = rest.chars().next() {
        for (pattern, glyph) in ACCIDENTAL_GLYPHS {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(glyph);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_markers() {
        assert_eq!(beautify_accidentals("Bb"), "B♭");
        assert_eq!(beautify_accidentals("F#"), "F♯");
    }

    #[test]
    fn double_markers_are_not_shadowed() {
        assert_eq!(beautify_accidentals("B##"), "B𝄪");
        assert_eq!(beautify_accidentals("Ebb"), "E𝄫");
    }

    #[test]
    fn odd_runs_take_the_double_first() {
        assert_eq!(beautify_accidentals("C###"), "C𝄪♯");
        assert_eq!(beautify_accidentals("Abbb"), "A𝄫♭");
    }

    #[test]
    fn plain_labels_pass_through() {
        assert_eq!(beautify_accidentals(""), "");
        assert_eq!(beautify_accidentals("C"), "C");
        assert_eq!(beautify_accidentals("Bø7"), "Bø7");
    }
}
