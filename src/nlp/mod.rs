//! Natural Language Processing components
//!
//! This module provides word tokenization for the map step.

pub mod tokenizer;
