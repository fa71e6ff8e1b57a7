pub use rust_i18n::t;

const DEFAULT_LOCALE: &str = "en";
const AVAILABLE_LOCALES: &[&str] = &["en", "ja"];

pub fn init() {
    let locale = system_locale()
        .map(|name| match_locale(&name))
        .unwrap_or(DEFAULT_LOCALE);
    rust_i18n::set_locale(locale);
}

/// Maps an OS locale name (`ja-JP`, `en_US.UTF-8`) to one of the shipped locales.
pub fn match_locale(name: &str) -> &'static str {
    let lang = name
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    AVAILABLE_LOCALES
        .iter()
        .copied()
        .find(|locale| *locale == lang)
        .unwrap_or(DEFAULT_LOCALE)
}

#[cfg(windows)]
fn system_locale() -> Option<String> {
    use windows::Win32::Globalization::GetUserDefaultLocaleName;

    const LOCALE_NAME_MAX_LENGTH: usize = 85;

    let mut buffer = [0u16; LOCALE_NAME_MAX_LENGTH];
    let length = unsafe { GetUserDefaultLocaleName(&mut buffer) };
    if length <= 1 {
        return None;
    }
    // Length includes the terminating null
    String::from_utf16(&buffer[..length as usize - 1]).ok()
}

#[cfg(not(windows))]
fn system_locale() -> Option<String> {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_language_prefix() {
        assert_eq!(match_locale("ja-JP"), "ja");
        assert_eq!(match_locale("en_US.UTF-8"), "en");
        assert_eq!(match_locale("JA"), "ja");
    }

    #[test]
    fn unknown_locales_fall_back_to_english() {
        assert_eq!(match_locale("fr-FR"), "en");
        assert_eq!(match_locale(""), "en");
        assert_eq!(match_locale("C"), "en");
    }

    #[test]
    fn every_locale_has_the_error_strings() {
        for locale in AVAILABLE_LOCALES {
            let text = t!("error.shell_not_found", locale = locale, path = "C:\\cmd.exe");
            assert!(text.contains("C:\\cmd.exe"), "{locale}: {text}");
        }
        assert_ne!(
            t!("error.cancelled", locale = "en"),
            t!("error.cancelled", locale = "ja")
        );
    }
}
