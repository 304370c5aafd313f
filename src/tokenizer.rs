pub mod line_tokenizer;
pub mod word_tokenizer;
