//! End-to-end pipeline test: raw corpus → vocabulary → training
//! examples → embedding matrix → batched tensors → model output.
//!
//! Uses the NdArray backend and a word2vec text fixture on disk, so
//! the whole flow runs without a GPU or external data.

use std::path::PathBuf;

use word_rnn::{
    DataProvider, DictionaryMorphology, TrainingBatcher, Vocabulary, Word2vecStore,
    WordRnnConfig, WordVectors,
};

type TestBackend = burn::backend::NdArray;

const MAX_LEN: usize = 3;

/// A corpus with inflected forms the dictionary collapses, one word
/// ("mat") deliberately missing from the pretrained table.
const CORPUS: &str = "The cat sat on the mat. The cats ran; the cat sat.";

fn write_word2vec_fixture() -> PathBuf {
    let path = std::env::temp_dir().join("word_rnn_pipeline_w2v.vec");
    // Covers every lemma except "mat".
    let body = "5 3\n\
        cat 0.1 0.2 0.3\n\
        on 0.4 0.5 0.6\n\
        ran 0.7 0.8 0.9\n\
        sat 1.0 1.1 1.2\n\
        the 1.3 1.4 1.5\n";
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn corpus_to_model_output() {
    let morph = DictionaryMorphology::from_pairs(&[("cats", "cat")]);
    let vocab = Vocabulary::new(CORPUS, MAX_LEN, &morph);

    // Lemmas: the cat sat on the mat the cat ran the cat sat → 12 words,
    // distinct: cat mat on ran sat the.
    assert_eq!(vocab.list_words().len(), 12);
    assert_eq!(vocab.size(), 6);

    let path = write_word2vec_fixture();
    let vectors = Word2vecStore::new(&path).load().unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(vectors.dims(), 3);

    let provider = DataProvider::new(vocab, vectors);

    // 12 words, window 3, stride 3 → floor((12 - 3 - 1) / 3) + 1 = 3 examples.
    let data = provider.training_data();
    assert_eq!(data.len(), 3);
    for (row, target) in data.features.iter().zip(&data.targets) {
        assert_eq!(row.len(), MAX_LEN);
        assert_eq!(target.iter().filter(|&&x| x == 1.0).count(), 1);
    }

    // "mat" is the only word missing from the pretrained table.
    let report = provider.coverage_report();
    assert_eq!(report.unknown_count, 1);
    assert_eq!(report.unknown_sample, vec!["mat".to_string()]);

    let matrix = provider.embedding_matrix();
    assert_eq!(matrix.len(), provider.vocab().size());
    assert!(matrix.iter().all(|row| row.len() == 3));
    assert!(matrix.iter().all(|row| row.iter().any(|&x| x != 0.0)));

    // Batch the examples and run one forward pass through the graph.
    let device = Default::default();
    let batcher = TrainingBatcher::<TestBackend>::new(device);
    let batch = batcher.batch(&data).unwrap();
    assert_eq!(batch.features.dims(), [3, MAX_LEN]);
    assert_eq!(batch.targets.dims(), [3, provider.vocab().size()]);

    let config = WordRnnConfig::new(provider.vocab().size(), MAX_LEN, provider.embedding_dim())
        .with_hidden_size(16);
    let model = config
        .init::<TestBackend>(matrix, &batcher.device)
        .unwrap();

    let probs = model.forward(batch.features);
    assert_eq!(probs.dims(), [3, provider.vocab().size()]);

    let values: Vec<f32> = probs.into_data().to_vec().unwrap();
    for row in values.chunks(provider.vocab().size()) {
        let sum: f32 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
}

#[test]
fn degenerate_corpus_yields_no_examples() {
    let morph = DictionaryMorphology::from_pairs(&[]);
    let vocab = Vocabulary::new("only two", 5, &morph);

    let path = std::env::temp_dir().join("word_rnn_pipeline_w2v_small.vec");
    std::fs::write(&path, "2 2\nonly 0.1 0.2\ntwo 0.3 0.4\n").unwrap();
    let vectors = Word2vecStore::new(&path).load().unwrap();
    std::fs::remove_file(&path).ok();

    let provider = DataProvider::new(vocab, vectors);
    let data = provider.training_data();
    assert!(data.is_empty());

    // An empty example set has no batch shape.
    let batcher = TrainingBatcher::<TestBackend>::new(Default::default());
    assert!(batcher.batch(&data).is_none());
}
