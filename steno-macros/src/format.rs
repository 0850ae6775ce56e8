//! Printf-style format string analysis.
//!
//! Pulls the conversion specifiers out of a call site's format string so the
//! macros can check the argument list against them during expansion. This is
//! the whole of the format validator: everything here runs at build time and
//! nothing survives into the runtime path.

/// The encoded byte width selected for an integer conversion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Width {
    W1,
    W2,
    W4,
    W8,
}

/// One conversion specifier, in order of appearance.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Specifier {
    Signed(Width),
    Unsigned(Width),
    String,
    Pointer,
    Interned,
}

/// Extracts the specifiers of `format`.
///
/// Supported conversions: `%d`/`%i` (signed), `%u`/`%x`/`%X`/`%o` (unsigned),
/// `%s` (NUL-terminated string), `%p` (raw pointer), `%k` (interned-text
/// reference) and the escape `%%`. The integer conversions accept the length
/// modifiers `hh`, `h`, `l` and `ll`, selecting widths of 1, 2, 4 and 8 bytes;
/// an unmodified integer is 4 bytes wide.
pub(crate) fn parse(format: &str) -> Result<Vec<Specifier>, String> {
    // The interned form is NUL-terminated, so the text cannot embed one.
    if format.contains('\0') {
        return Err("format string must not contain a NUL byte".into());
    }

    let mut specifiers = Vec::new();
    let mut chars = format.chars().peekable();
    while let Some(character) = chars.next() {
        if character != '%' {
            continue;
        }
        let Some(next) = chars.next() else {
            return Err("incomplete conversion specifier at the end of the format string".into());
        };
        if next == '%' {
            continue;
        }
        let (width, conversion) = match next {
            'h' => {
                if chars.peek() == Some(&'h') {
                    chars.next();
                    (Some(Width::W1), chars.next())
                } else {
                    (Some(Width::W2), chars.next())
                }
            }
            'l' => {
                if chars.peek() == Some(&'l') {
                    chars.next();
                    (Some(Width::W8), chars.next())
                } else {
                    (Some(Width::W4), chars.next())
                }
            }
            other => (None, Some(other)),
        };
        let Some(conversion) = conversion else {
            return Err("incomplete conversion specifier at the end of the format string".into());
        };
        let specifier = match conversion {
            'd' | 'i' => Specifier::Signed(width.unwrap_or(Width::W4)),
            'u' | 'x' | 'X' | 'o' => Specifier::Unsigned(width.unwrap_or(Width::W4)),
            's' | 'p' | 'k' if width.is_some() => {
                return Err(format!(
                    "length modifiers are not supported for `%{conversion}`"
                ));
            }
            's' => Specifier::String,
            'p' => Specifier::Pointer,
            'k' => Specifier::Interned,
            other => return Err(format!("unsupported conversion specifier `%{other}`")),
        };
        specifiers.push(specifier);
    }
    Ok(specifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_no_specifiers() {
        assert!(parse("hello world").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn the_basic_conversions_are_recognized() {
        assert_eq!(
            parse("I am %d years old...").unwrap(),
            [Specifier::Signed(Width::W4)]
        );
        assert_eq!(
            parse("%s and %u and %p and %k").unwrap(),
            [
                Specifier::String,
                Specifier::Unsigned(Width::W4),
                Specifier::Pointer,
                Specifier::Interned,
            ]
        );
        assert_eq!(parse("%i").unwrap(), [Specifier::Signed(Width::W4)]);
        assert_eq!(
            parse("%x %X %o").unwrap(),
            [
                Specifier::Unsigned(Width::W4),
                Specifier::Unsigned(Width::W4),
                Specifier::Unsigned(Width::W4),
            ]
        );
    }

    #[test]
    fn length_modifiers_select_the_width() {
        assert_eq!(
            parse("%hhu %hd %lu %lld").unwrap(),
            [
                Specifier::Unsigned(Width::W1),
                Specifier::Signed(Width::W2),
                Specifier::Unsigned(Width::W4),
                Specifier::Signed(Width::W8),
            ]
        );
    }

    #[test]
    fn escaped_percent_consumes_no_argument() {
        assert_eq!(parse("100%% done, %d left").unwrap(), [
            Specifier::Signed(Width::W4)
        ]);
    }

    #[test]
    fn unknown_conversions_are_rejected() {
        assert!(parse("%q").is_err());
        assert!(parse("%f").is_err());
    }

    #[test]
    fn trailing_percent_is_rejected() {
        assert!(parse("100%").is_err());
        assert!(parse("%h").is_err());
        assert!(parse("%ll").is_err());
    }

    #[test]
    fn modifiers_on_non_integers_are_rejected() {
        assert!(parse("%hs").is_err());
        assert!(parse("%lp").is_err());
        assert!(parse("%hhk").is_err());
    }

    #[test]
    fn embedded_nul_is_rejected() {
        assert!(parse("bad\0text").is_err());
    }
}
