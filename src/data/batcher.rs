// ============================================================
// Layer 2 — Training Batcher
// ============================================================
// Converts TrainingData rows into GPU-ready tensors.
//
// How batching works here:
//   Input:  n feature rows of max_len indices + n one-hot rows
//   Output: an Int tensor [n, max_len] and a Float tensor [n, vocab]
//
//   We flatten all rows into one long Vec, then reshape:
//   [r1_c1, r1_c2, ..., r1_cM, r2_c1, ..., rN_cM] → [N, M]
//
// Why is this easy here?
//   Every feature row already has the same length (max_len) and
//   every target row has the same width (vocab size), so no
//   padding is needed.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use burn::prelude::*;

use crate::data::provider::TrainingData;

/// A batch of training examples ready for the model forward pass.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray) —
/// generic so the same batch works on any device.
#[derive(Debug, Clone)]
pub struct TrainingBatch<B: Backend> {
    /// Index windows — shape: [n_examples, max_len]
    pub features: Tensor<B, 2, Int>,
    /// One-hot next-word rows — shape: [n_examples, vocab_size]
    pub targets: Tensor<B, 2>,
}

/// Stacks TrainingData into a TrainingBatch on one device.
#[derive(Clone, Debug)]
pub struct TrainingBatcher<B: Backend> {
    /// The device to create tensors on (e.g. GPU index 0)
    pub device: B::Device,
}

impl<B: Backend> TrainingBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Convert a TrainingData into a single TrainingBatch.
    ///
    /// Returns None for an empty example set — there is no
    /// meaningful tensor shape for zero rows of unknown width.
    pub fn batch(&self, data: &TrainingData) -> Option<TrainingBatch<B>> {
        let n = data.len();
        let max_len = data.features.first()?.len();
        let vocab_size = data.targets.first()?.len();

        // ── Flatten features ──────────────────────────────────────────────────
        // Vec<Vec<usize>> → Vec<i32> (Burn uses i32 for Int tensors)
        let feature_flat: Vec<i32> = data
            .features
            .iter()
            .flat_map(|row| row.iter().map(|&x| x as i32))
            .collect();

        // ── Flatten targets ───────────────────────────────────────────────────
        let target_flat: Vec<f32> = data
            .targets
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        // from_ints/from_floats build a 1D tensor from a slice,
        // then .reshape() gives the correct 2D shape.
        let features = Tensor::<B, 1, Int>::from_ints(feature_flat.as_slice(), &self.device)
            .reshape([n, max_len]);

        let targets = Tensor::<B, 1>::from_floats(target_flat.as_slice(), &self.device)
            .reshape([n, vocab_size]);

        Some(TrainingBatch { features, targets })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_batch_shapes() {
        let data = TrainingData {
            features: vec![vec![0, 1, 2], vec![2, 1, 0]],
            targets: vec![vec![0.0, 1.0, 0.0, 0.0], vec![1.0, 0.0, 0.0, 0.0]],
        };
        let batcher = TrainingBatcher::<TestBackend>::new(Default::default());
        let batch = batcher.batch(&data).unwrap();
        assert_eq!(batch.features.dims(), [2, 3]);
        assert_eq!(batch.targets.dims(), [2, 4]);
    }

    #[test]
    fn test_row_order_preserved() {
        let data = TrainingData {
            features: vec![vec![3, 4], vec![5, 6]],
            targets: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        };
        let batcher = TrainingBatcher::<TestBackend>::new(Default::default());
        let batch = batcher.batch(&data).unwrap();

        // NdArray stores Int tensors as i64.
        let features: Vec<i64> = batch.features.into_data().to_vec().unwrap();
        assert_eq!(features, vec![3, 4, 5, 6]);

        let targets: Vec<f32> = batch.targets.into_data().to_vec().unwrap();
        assert_eq!(targets, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_empty_data_yields_none() {
        let data = TrainingData { features: vec![], targets: vec![] };
        let batcher = TrainingBatcher::<TestBackend>::new(Default::default());
        assert!(batcher.batch(&data).is_none());
    }
}
