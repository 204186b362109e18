use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

use crate::links::Link;

lazy_static! {
    // Link spans come first in the alternation so a bracketed title is kept
    // as one atomic token instead of being split into bare words.
    static ref TOKEN_RE: Regex =
        Regex::new(r"\[\[[^\[]+?\]\]|[a-zA-Z0-9]+'[a-zA-Z0-9]+|[a-zA-Z0-9]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// One raw token from the wiki text grammar: an atomic `[[...]]` link span
/// (bracket delimiters stripped) or a plain word run. Apostrophe-joined words
/// like `don't` survive as a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Link(&'a str),
    Word(&'a str),
}

/// Tokenize raw page text lazily, keeping link spans intact. Case is
/// irrelevant to matching; no stemming or stopword removal happens here.
pub fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    TOKEN_RE.find_iter(text).map(|m| {
        let tok = m.as_str();
        if tok.starts_with("[[") {
            Token::Link(&tok[2..tok.len() - 2])
        } else {
            Token::Word(tok)
        }
    })
}

/// Lower-case a word, drop it if it is a stopword, otherwise stem it.
/// Pure function of its input; no page-local state is involved.
pub fn stem_word(word: &str) -> Option<String> {
    let lowered = word.to_lowercase();
    if is_stopword(&lowered) {
        return None;
    }
    Some(STEMMER.stem(&lowered).into_owned())
}

/// Full normalization pipeline: the stems of every content word in `text`,
/// in order. A link span contributes the stems of its indexable text, so
/// queries and link labels normalize the same way page bodies do.
pub fn stems(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for token in tokens(text) {
        match token {
            Token::Word(word) => out.extend(stem_word(word)),
            Token::Link(interior) => {
                let link = Link::parse(interior);
                let text = link.indexable_text();
                for inner in tokens(&text) {
                    if let Token::Word(word) = inner {
                        out.extend(stem_word(word));
                    }
                }
            }
        }
    }
    out
}
