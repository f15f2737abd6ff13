use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer over tokenized documents.
///
/// Vocabulary indices are assigned in sorted token order, so a given corpus
/// always produces the same vectorizer. Inverse document frequencies use the
/// smoothed form `ln((1 + n) / (1 + df)) + 1`, and transformed vectors are
/// L2-normalized raw counts weighted by idf.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let n_documents = documents.len();

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for document in documents {
            let unique: HashSet<&str> = document.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let mut tokens: Vec<&str> = document_frequency.keys().copied().collect();
        tokens.sort_unstable();

        let mut vocabulary = HashMap::with_capacity(tokens.len());
        let mut idf = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.into_iter().enumerate() {
            let df = document_frequency[token];
            vocabulary.insert(token.to_string(), index);
            idf.push(((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    /// Weighted feature vector for one tokenized document. Tokens outside
    /// the fitted vocabulary contribute nothing.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                vector[index] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
