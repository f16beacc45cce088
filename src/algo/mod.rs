pub mod scoring;
pub mod sparse;
pub mod tags;
pub mod tfidf;
pub mod tokenizer;
