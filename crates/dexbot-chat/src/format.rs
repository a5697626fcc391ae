//! Response formatting: ranked results + dex metadata → presentation.

use std::fmt;

use dexbot_store::Dex;

/// Base URL for the synthesized fallback link when no dex entry exists.
const FALLBACK_DEX_URL: &str = "https://pokemondb.net/pokedex";

/// User-facing presentation of a classification result.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub color: String,
    /// Summary of every supplied candidate: `"Name (0.1234), ..."`.
    pub footer: String,
}

/// Assemble the presentation for a top-K slice of ranked results.
///
/// The caller chooses K by truncating `results`. When the dex has an entry
/// for the top-ranked label its metadata is used; otherwise the fallback is
/// synthesized from the label name alone. The footer always lists every
/// supplied result with its confidence to four decimal places.
pub fn present(results: &[(String, f32)], dex: Option<&Dex>) -> Presentation {
    let footer = results
        .iter()
        .map(|(label, confidence)| format!("{label} ({confidence:.4})"))
        .collect::<Vec<_>>()
        .join(", ");

    let Some((top_label, _)) = results.first() else {
        return Presentation {
            title: String::new(),
            description: String::new(),
            url: String::new(),
            image: String::new(),
            color: String::new(),
            footer,
        };
    };

    match dex.and_then(|d| d.entry(top_label)) {
        Some(entry) => Presentation {
            title: entry.title.clone(),
            description: entry.description.clone(),
            url: entry.url.clone(),
            image: entry.image.clone(),
            color: entry.color.clone(),
            footer,
        },
        None => Presentation {
            title: top_label.clone(),
            description: String::new(),
            url: fallback_url(top_label),
            image: String::new(),
            color: String::new(),
            footer,
        },
    }
}

/// Canonical external reference for a label with no dex entry.
pub fn fallback_url(label: &str) -> String {
    format!("{FALLBACK_DEX_URL}/{}", label.to_lowercase())
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in [&self.title, &self.description, &self.url, &self.footer] {
            if line.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ranked() -> Vec<(String, f32)> {
        vec![
            ("Pikachu".to_string(), 0.91239),
            ("Raichu".to_string(), 0.0561),
            ("Pichu".to_string(), 0.03),
        ]
    }

    fn dex_with_pikachu() -> Dex {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dex.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(
            br##"{"Pikachu": {
                "title": "Pikachu, the Mouse Pokemon",
                "description": "Stores electricity in its cheeks.",
                "url": "https://pokemondb.net/pokedex/pikachu",
                "image": "https://img.pokemondb.net/artwork/pikachu.jpg",
                "color": "#f6bd20"
            }}"##,
        )
        .unwrap();
        Dex::load(&path).unwrap()
    }

    #[test]
    fn uses_dex_entry_for_top_label() {
        let dex = dex_with_pikachu();
        let p = present(&ranked(), Some(&dex));
        assert_eq!(p.title, "Pikachu, the Mouse Pokemon");
        assert_eq!(p.description, "Stores electricity in its cheeks.");
        assert_eq!(p.color, "#f6bd20");
    }

    #[test]
    fn synthesizes_fallback_without_entry() {
        let p = present(&ranked(), None);
        assert_eq!(p.title, "Pikachu");
        assert_eq!(p.url, "https://pokemondb.net/pokedex/pikachu");
        assert!(p.description.is_empty());
        assert!(p.image.is_empty());
        assert!(p.color.is_empty());
    }

    #[test]
    fn footer_lists_all_results_to_four_decimals() {
        let p = present(&ranked(), None);
        assert_eq!(p.footer, "Pikachu (0.9124), Raichu (0.0561), Pichu (0.0300)");
    }

    #[test]
    fn footer_built_even_with_dex_entry() {
        let dex = dex_with_pikachu();
        let p = present(&ranked(), Some(&dex));
        assert_eq!(p.footer, "Pikachu (0.9124), Raichu (0.0561), Pichu (0.0300)");
    }

    #[test]
    fn formatting_is_idempotent() {
        let dex = dex_with_pikachu();
        assert_eq!(present(&ranked(), Some(&dex)), present(&ranked(), Some(&dex)));
        assert_eq!(present(&ranked(), None), present(&ranked(), None));
    }

    #[test]
    fn empty_results_make_empty_presentation() {
        let p = present(&[], None);
        assert!(p.title.is_empty());
        assert!(p.footer.is_empty());
    }

    #[test]
    fn display_skips_empty_segments() {
        let p = present(&ranked()[..1], None);
        let rendered = p.to_string();
        assert_eq!(
            rendered,
            "Pikachu\nhttps://pokemondb.net/pokedex/pikachu\nPikachu (0.9124)"
        );
    }
}
