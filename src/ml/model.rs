use anyhow::{ensure, Result};
use burn::{
    module::Param,
    nn::{
        Dropout, DropoutConfig,
        Embedding,
        Linear, LinearConfig,
        Lstm, LstmConfig,
    },
    prelude::*,
    tensor::activation::softmax,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct WordRnnConfig {
    pub vocab_size:    usize,
    pub max_len:       usize,
    pub embedding_dim: usize,
    #[config(default = 128)]
    pub hidden_size:   usize,
    #[config(default = 0.5)]
    pub dropout:       f64,
}

impl WordRnnConfig {
    /// Assemble the model graph with the embedding layer weights
    /// set from `embedding_matrix` ([vocab_size, embedding_dim],
    /// one row per vocabulary index).
    ///
    /// The embedding is initialised, not frozen — it stays
    /// trainable under whatever the training driver does.
    ///
    /// Fails if the matrix shape disagrees with the config; a
    /// mismatched graph would only blow up later at forward time.
    pub fn init<B: Backend>(
        &self,
        embedding_matrix: Vec<Vec<f32>>,
        device: &B::Device,
    ) -> Result<WordRnn<B>> {
        ensure!(
            embedding_matrix.len() == self.vocab_size,
            "embedding matrix has {} rows but the vocabulary has {} words",
            embedding_matrix.len(),
            self.vocab_size,
        );
        ensure!(
            embedding_matrix.iter().all(|row| row.len() == self.embedding_dim),
            "embedding matrix rows must all have length {}",
            self.embedding_dim,
        );

        // Flatten the rows and rebuild as a [vocab, dim] tensor.
        let flat: Vec<f32> = embedding_matrix.into_iter().flatten().collect();
        let weight = Tensor::<B, 1>::from_floats(flat.as_slice(), device)
            .reshape([self.vocab_size, self.embedding_dim]);
        let embedding = Embedding { weight: Param::from_tensor(weight) };

        let lstm1 = LstmConfig::new(self.embedding_dim, self.hidden_size, true).init(device);
        let lstm2 = LstmConfig::new(self.hidden_size, self.hidden_size, true).init(device);
        let dropout1 = DropoutConfig::new(self.dropout).init();
        let dropout2 = DropoutConfig::new(self.dropout).init();
        let output = LinearConfig::new(self.hidden_size, self.vocab_size).init(device);

        Ok(WordRnn {
            embedding,
            lstm1, dropout1,
            lstm2, dropout2,
            output,
            max_len: self.max_len,
        })
    }
}

/// Next-word prediction model: embedding → LSTM → dropout →
/// LSTM → dropout → dense → softmax.
#[derive(Module, Debug)]
pub struct WordRnn<B: Backend> {
    pub embedding: Embedding<B>,
    pub lstm1:     Lstm<B>,
    pub dropout1:  Dropout,
    pub lstm2:     Lstm<B>,
    pub dropout2:  Dropout,
    pub output:    Linear<B>,
    pub max_len:   usize,
}

impl<B: Backend> WordRnn<B> {
    /// sentence_indices: [batch, max_len] → probabilities: [batch, vocab_size]
    ///
    /// The first LSTM feeds its full hidden-state sequence into
    /// the second; only the second's final hidden state reaches
    /// the dense head. Softmax is applied twice in sequence — the
    /// dense activation and a separate explicit normalisation.
    pub fn forward(&self, sentence_indices: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, seq_len] = sentence_indices.dims();
        debug_assert_eq!(seq_len, self.max_len, "input windows must have length max_len");

        let x = self.embedding.forward(sentence_indices); // [batch, seq, dim]

        // Full sequence of hidden states from the first LSTM.
        let (x, _) = self.lstm1.forward(x, None); // [batch, seq, hidden]
        let x = self.dropout1.forward(x);

        // Second LSTM: keep only the final timestep's hidden state.
        let (x, _) = self.lstm2.forward(x, None);
        let [_, _, hidden] = x.dims();
        let x = x
            .slice([0..batch_size, seq_len - 1..seq_len, 0..hidden])
            .reshape([batch_size, hidden]);
        let x = self.dropout2.forward(x);

        let logits = self.output.forward(x); // [batch, vocab]
        let probs = softmax(logits, 1);
        softmax(probs, 1)
    }
}
