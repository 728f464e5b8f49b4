//! Parallel extraction must agree with sequential extraction
#![cfg(feature = "parallel")]

use std::sync::Arc;
use termex_engine::*;

const ARTICLE: &str = "The MCHS Department of Music is one of the most distinguished music programs in the State, having an award-winning choral and band program. The Marching Indians, under the direction of Mr. Mike Weaver, have performed all over the country, most recently at Universal Studios in Orlando, Disney World and the St. Patrick's Day Parade in New York City.

Humans have 23 pairs of chromosomes packed with genes that dictate every aspect of our biological functioning. The Y chromosome contains essential blueprints for the male reproductive system, in particular those for sperm development.
";

fn extractor(parallel: bool, threads: Option<usize>) -> TermExtractor {
    let config = ExtractorConfig::builder()
        .parallel(parallel)
        .threads(threads)
        .build()
        .unwrap();
    TermExtractor::new(Arc::new(LexiconAnnotator::english()), config).unwrap()
}

#[test]
fn test_execution_mode_follows_config() {
    assert_eq!(extractor(false, None).execution_mode(), ExecutionMode::Sequential);
    assert_eq!(extractor(true, None).execution_mode(), ExecutionMode::Parallel);
}

#[test]
fn test_parallel_matches_sequential() {
    let _ = env_logger::builder().is_test(true).try_init();

    let sequential = extractor(false, None).extract_terms_from_text(ARTICLE).unwrap();
    for threads in [Some(1), Some(3), None] {
        let parallel = extractor(true, threads)
            .extract_terms_from_text(ARTICLE)
            .unwrap();
        assert_eq!(parallel, sequential, "threads = {threads:?}");
    }
}

#[test]
fn test_for_each_term_matches_batch() {
    let batch = extractor(true, Some(2)).extract_terms_from_text(ARTICLE).unwrap();

    let mut streamed = Vec::new();
    extractor(true, Some(2))
        .for_each_term(ARTICLE, |term| streamed.push(term))
        .unwrap();

    assert_eq!(streamed, batch);
}
