//! Stage 3: model training.
//!
//! Fine-tunes the TorchScript training export on the encoded train split.
//! The export's `forward(input_ids, labels)` returns the batch loss;
//! gradient descent itself stays inside libtorch. AdamW with linear
//! warmup, gradient accumulation, periodic validation and checkpointing.

use rand::seq::SliceRandom;
use tch::nn::OptimizerConfig;
use tch::{Device, Tensor, nn};
use tracing::info;

use crate::core::config::ModelTrainerConfig;
use crate::core::models::EncodedRecord;
use crate::errors::SummarizationError;
use crate::utils::fs::read_jsonl;

// Label padding value the loss ignores, matching the export's convention.
const LABEL_IGNORE_INDEX: i64 = -100;
const PAD_TOKEN_ID: i64 = 0;

const WEIGHTS_FILE: &str = "model_weights.ot";

pub struct ModelTrainer {
    config: ModelTrainerConfig,
}

impl ModelTrainer {
    pub fn new(config: ModelTrainerConfig) -> Self {
        Self { config }
    }

    /// Run the training loop and save the final weights under the stage root.
    pub fn run(&self) -> Result<(), SummarizationError> {
        let train: Vec<EncodedRecord> = read_jsonl(&self.config.data_path.join("train.jsonl"))?;
        if train.is_empty() {
            return Err(SummarizationError::Dataset(
                "training split is empty".to_string(),
            ));
        }
        let validation: Vec<EncodedRecord> =
            read_jsonl(&self.config.data_path.join("validation.jsonl")).unwrap_or_default();
        info!(
            "Training on {} records ({} held out for validation)",
            train.len(),
            validation.len()
        );

        let device = Device::Cpu;
        let vs = nn::VarStore::new(device);
        let mut module = tch::TrainableCModule::load(&self.config.model_path, vs.root())?;
        module.set_train();

        let mut optimizer = nn::AdamW {
            wd: self.config.weight_decay,
            ..nn::AdamW::default()
        }
        .build(&vs, self.config.learning_rate)?;

        let batch_size = self.config.batch_size.max(1);
        let accumulation = self.config.gradient_accumulation_steps.max(1);
        let mut optimizer_steps = 0usize;
        let mut running_loss = 0.0f64;
        let mut running_batches = 0usize;
        let mut rng = rand::thread_rng();

        for epoch in 1..=self.config.num_train_epochs {
            let mut order: Vec<usize> = (0..train.len()).collect();
            order.shuffle(&mut rng);

            for (batch_index, chunk) in order.chunks(batch_size).enumerate() {
                let (input_ids, labels) = batch_tensors(&train, chunk, device);
                let loss = module.forward_ts(&[&input_ids, &labels])?;
                let scaled = &loss / (accumulation as f64);
                scaled.backward();

                running_loss += loss.double_value(&[]);
                running_batches += 1;

                if (batch_index + 1) % accumulation != 0 {
                    continue;
                }

                optimizer.set_lr(warmup_lr(
                    self.config.learning_rate,
                    optimizer_steps,
                    self.config.warmup_steps,
                ));
                optimizer.step();
                optimizer.zero_grad();
                optimizer_steps += 1;

                if self.config.logging_steps > 0 && optimizer_steps % self.config.logging_steps == 0
                {
                    info!(
                        epoch,
                        optimizer_steps,
                        loss = running_loss / running_batches.max(1) as f64,
                        "Training progress"
                    );
                    running_loss = 0.0;
                    running_batches = 0;
                }

                if self.config.eval_steps > 0
                    && optimizer_steps % self.config.eval_steps == 0
                    && !validation.is_empty()
                {
                    let val_loss = validation_loss(&mut module, &validation, batch_size, device)?;
                    info!(epoch, optimizer_steps, val_loss, "Validation checkpoint");
                }

                if self.config.save_steps > 0 && optimizer_steps % self.config.save_steps == 0 {
                    let checkpoint = self
                        .config
                        .root_dir
                        .join(format!("checkpoint-{optimizer_steps}.ot"));
                    vs.save(&checkpoint)?;
                    info!("Saved checkpoint: {}", checkpoint.display());
                }
            }

            info!(epoch, "Epoch completed");
        }

        let weights = self.config.root_dir.join(WEIGHTS_FILE);
        vs.save(&weights)?;
        info!("Saved final weights: {}", weights.display());
        Ok(())
    }
}

/// Linear learning-rate warmup over the first `warmup` optimizer steps.
fn warmup_lr(base: f64, step: usize, warmup: usize) -> f64 {
    if warmup == 0 || step >= warmup {
        base
    } else {
        base * (step + 1) as f64 / warmup as f64
    }
}

/// Pad a batch of records into `(input_ids, labels)` tensors.
fn batch_tensors(records: &[EncodedRecord], indices: &[usize], device: Device) -> (Tensor, Tensor) {
    let max_input = indices
        .iter()
        .map(|&i| records[i].input_ids.len())
        .max()
        .unwrap_or(1)
        .max(1);
    let max_label = indices
        .iter()
        .map(|&i| records[i].labels.len())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut inputs = Vec::with_capacity(indices.len() * max_input);
    let mut labels = Vec::with_capacity(indices.len() * max_label);
    for &index in indices {
        let record = &records[index];
        inputs.extend_from_slice(&record.input_ids);
        inputs.extend(std::iter::repeat(PAD_TOKEN_ID).take(max_input - record.input_ids.len()));
        labels.extend_from_slice(&record.labels);
        labels.extend(std::iter::repeat(LABEL_IGNORE_INDEX).take(max_label - record.labels.len()));
    }

    let rows = indices.len() as i64;
    let input_ids = Tensor::from_slice(&inputs)
        .view([rows, max_input as i64])
        .to_device(device);
    let label_ids = Tensor::from_slice(&labels)
        .view([rows, max_label as i64])
        .to_device(device);
    (input_ids, label_ids)
}

fn validation_loss(
    module: &mut tch::TrainableCModule,
    records: &[EncodedRecord],
    batch_size: usize,
    device: Device,
) -> Result<f64, SummarizationError> {
    module.set_eval();
    let indices: Vec<usize> = (0..records.len()).collect();
    let mut total = 0.0f64;
    let mut batches = 0usize;

    let result: Result<(), tch::TchError> = tch::no_grad(|| {
        for chunk in indices.chunks(batch_size) {
            let (input_ids, labels) = batch_tensors(records, chunk, device);
            let loss = module.forward_ts(&[&input_ids, &labels])?;
            total += loss.double_value(&[]);
            batches += 1;
        }
        Ok(())
    });
    module.set_train();
    result?;

    Ok(total / batches.max(1) as f64)
}
