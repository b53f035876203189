// tests/analysis.rs
use pretty_assertions::assert_eq;
use tokenstats::{
    analyze, build_distribution, format_report, logging, tokenize, Analyzer, AnalyzerConfig,
};

const SAMPLE: &str = "\"It's a truth,\" she said, \"that I'd never doubt.\"\n\
                      The cost was $1,000 (or so) -- can't argue w/ that!\n\
                      \n\
                      Later, John's friends didn't agree: they'd paid 3.50/unit.\n";

#[test]
fn documented_examples() {
    assert_eq!(tokenize("Hello, world!"), ["Hello", ",", "world", "!"]);
    assert_eq!(tokenize("He's here."), ["He", "is", "here", "."]);

    let tokens = tokenize("I'm not sure; it's $5, though.");
    for expected in ["am", ";", "is", "$", ",", "."] {
        assert!(tokens.iter().any(|t| t == expected), "missing {:?} in {:?}", expected, tokens);
    }
}

#[test]
fn sample_document_tokens() {
    logging::initialize_for_tests();
    assert_eq!(
        tokenize(SAMPLE),
        [
            "\"", "It", "is", "a", "truth", ",", "\"", "she", "said", ",", "\"", "that", "I",
            "would", "never", "doubt", ".", "\"", "The", "cost", "was", "$", "1,000", "(", "or",
            "so", ")", "--", "ca", "not", "argue", "w/", "that", "!", "Later", ",", "John",
            "'s", "friends", "did", "not", "agree", ":", "they", "would", "paid", "3.50", "/",
            "unit", ".",
        ]
    );
}

#[test]
fn report_invariants_hold() {
    for text in ["", "one", SAMPLE, "a b a c b a", "  \n\n  ", "x?!y..z"] {
        let report = analyze(text);
        let tokens = tokenize(text);
        let table = build_distribution(&tokens);
        assert_eq!(report.token_count(), tokens.len());
        assert_eq!(report.token_count(), table.iter().map(|(_, c)| c).sum::<usize>());
        assert_eq!(report.type_count(), table.len());
    }
}

#[test]
fn paragraphs_do_not_inflate_sentences() {
    let report = analyze("A b.\n\nC d.\n");
    assert_eq!(report.paragraph_count(), 2);
    assert_eq!(report.sentence_count(), 2);
}

#[test]
fn empty_document_report() {
    let report = analyze("");
    assert_eq!(
        format_report(&report),
        "# of paragraphs = 1\n# of sentences = 0\n# of tokens = 0\n# of types = 0\n\n================================\n"
    );
}

#[test]
fn frequency_listing_order() {
    let report = analyze("a b a c b a");
    let formatted = format_report(&report);
    let listing: Vec<&str> = formatted
        .lines()
        .skip_while(|l| !l.starts_with("===="))
        .skip(1)
        .collect();
    assert_eq!(listing, ["a 3", "b 2", "c 1"]);
}

#[test]
fn sample_paragraphs_and_config_independence() {
    let parallel = Analyzer::new(AnalyzerConfig::default()).analyze(SAMPLE);
    let sequential = Analyzer::new(AnalyzerConfig {
        parallel: false,
        ..AnalyzerConfig::default()
    })
    .analyze(SAMPLE);
    assert_eq!(parallel.paragraph_count(), 2);
    assert_eq!(parallel.sentence_count(), 3);
    assert_eq!(parallel, sequential);
}
