// ============================================================
// Layer 3 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn model-architecture code.
//
// Why isolate Burn model code here?
//   - If Burn's API changes, we only update this layer
//   - The architecture is clearly separated from data loading
//
// What's in this layer:
//
//   model.rs — The recurrent language model architecture:
//              • Word embedding initialised from a pretrained
//                matrix (word2vec + random fallbacks)
//              • Two stacked LSTMs (full sequence, then final
//                hidden state) with dropout after each
//              • Dense projection to vocabulary probabilities
//
// The training driver that feeds this model batches and runs an
// optimiser lives outside this crate.
//
// Reference: Hochreiter & Schmidhuber (1997) LSTM paper
//            Burn Book §3 (Building Blocks)

/// Stacked-LSTM next-word prediction model
pub mod model;
