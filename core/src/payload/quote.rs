//! Percent-encoding for payload fields.

/// Percent-encode a field value.
///
/// Every UTF-8 byte outside `A-Z a-z 0-9 - _ . ~ /` becomes `%XX`, so `;`,
/// `,`, `:`, `\` and `%` never reach the payload unescaped. `/` is kept
/// literal to match what common URL quoting produces.
pub fn quote(value: &str) -> String {
    value
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_escaped() {
        assert_eq!(quote(";,:\\%"), "%3B%2C%3A%5C%25");
    }

    #[test]
    fn test_space_and_at() {
        assert_eq!(quote("Home Net"), "Home%20Net");
        assert_eq!(quote("p@ss;1"), "p%40ss%3B1");
    }

    #[test]
    fn test_slash_kept() {
        assert_eq!(quote("a/b c"), "a/b%20c");
    }

    #[test]
    fn test_unicode_encoded_as_utf8() {
        assert_eq!(quote("zażółć"), "za%C5%BC%C3%B3%C5%82%C4%87");
    }

    #[test]
    fn test_decode_restores_original() {
        let samples = [
            "",
            "plain",
            "semi;colon",
            "a,b:c\\d",
            "%41 already escaped?",
            "/leading/and/trailing/",
            "mixed ;,:\\ \"quoted\" ünïcödé",
        ];
        for original in samples {
            let quoted = quote(original);
            let decoded = urlencoding::decode(&quoted).unwrap();
            assert_eq!(decoded, original);
        }
    }
}
