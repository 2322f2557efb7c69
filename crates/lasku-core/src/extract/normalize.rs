//! Text canonicalization applied before any field extraction.

/// Boilerplate substrings known to pollute alias matching (supplier
/// registration addresses and municipality lines). Compared against the
/// lowercased text.
const BOILERPLATE: &[&str] = &[
    "tuottajantie 41, 60100 seinäjoki",
    "60100 seinäjoki",
    "kotipaikka: seinäjoki",
    "helsingin mylly",
];

/// Canonicalize raw PDF/OCR text into a single-case, single-spaced string.
///
/// Total function; the output feeds every downstream stage. Step order
/// matters: the compound name fuse must run before whitespace collapsing,
/// and the boilerplate strips run on the already-collapsed text. The final
/// collapse makes the function idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.replace('\n', " ").replace('\r', "");
    text = text.to_lowercase();
    text = text.replace(['(', ')', '/'], " ");
    // Fuse so the token survives whitespace splitting in the resolver.
    text = text.replace("espoon keskus", "espoonkeskus");
    text = collapse_whitespace(&text);
    // Removing noise can expose another occurrence ("smsm--") or fuse a
    // boilerplate phrase across the gap, so the strips repeat until stable.
    // Every replacement shortens the text; the loop terminates.
    loop {
        let stripped = collapse_whitespace(&strip_noise(&text));
        if stripped == text {
            break;
        }
        text = stripped;
    }
    text
}

/// One pass of glyph repair, chain-prefix strips and boilerplate strips.
fn strip_noise(text: &str) -> String {
    // Repair the pdftotext rendering of U+00E4 and tame chain prefixes.
    let mut text = text
        .replace(" cid:228 ", "ä")
        .replace("sm-", "")
        .replace("vakka-", "vakka");
    for noise in BOILERPLATE {
        text = text.replace(noise, "");
    }
    text
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
