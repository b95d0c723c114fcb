// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// The learned fallback: a bag-of-words vectorizer feeding a
// multinomial Naive Bayes classifier.
//
//   vectorizer.rs  — CountVectorizer (vocabulary + term counts)
//   naive_bayes.rs — MultinomialNb (class priors + term log probs)
//   model.rs       — ModelArtifact, the fitted pair that gets saved
//   trainer.rs     — fit_artifact, corpus → ModelArtifact
//
// Persistence lives in Layer 6 (infra::model_store).

/// Bag-of-words term counter
pub mod vectorizer;

/// Multinomial Naive Bayes classifier
pub mod naive_bayes;

/// Fitted (vectorizer, classifier) pair
pub mod model;

/// Fits a ModelArtifact from the full corpus
pub mod trainer;
