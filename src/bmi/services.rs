use tracing::info;

use crate::bmi::engine::Measurement;
use crate::bmi::repo::{BmiStore, HISTORY_LIMIT};
use crate::bmi::repo_types::BmiRecord;
use crate::error::BmiError;

/// Computes the BMI and stores it. Validation errors return before anything
/// is written; if the insert fails the computed result is dropped.
pub async fn calculate_and_record(
    store: &BmiStore,
    measurement: Measurement,
) -> Result<BmiRecord, BmiError> {
    let assessment = measurement.assess()?;
    let record = store
        .insert(
            assessment.weight_kg,
            assessment.height_m,
            assessment.bmi,
            assessment.category.label(),
            assessment.color(),
        )
        .await?;

    info!(id = record.id, bmi = record.bmi, category = %record.category, "bmi recorded");
    Ok(record)
}

pub async fn recent_history(store: &BmiStore) -> Result<Vec<BmiRecord>, BmiError> {
    store.list_recent(HISTORY_LIMIT).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_height_in_meters() {
        let store = BmiStore::in_memory().await;
        let record = calculate_and_record(
            &store,
            Measurement {
                weight_kg: 90.0,
                height_cm: 170.0,
            },
        )
        .await
        .expect("recorded");

        assert_eq!(record.height, 1.7);
        assert_eq!(record.bmi, 31.14);
        assert_eq!(record.category, "Obesity");
        assert_eq!(record.color, "#d9534f");
    }

    #[tokio::test]
    async fn rejected_measurement_writes_nothing() {
        let store = BmiStore::in_memory().await;
        let err = calculate_and_record(
            &store,
            Measurement {
                weight_kg: -5.0,
                height_cm: 170.0,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, BmiError::InvalidRange));
        assert!(recent_history(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let store = BmiStore::in_memory().await;
        for (w, h) in [(45.0, 170.0), (70.0, 175.0), (90.0, 170.0)] {
            calculate_and_record(&store, Measurement { weight_kg: w, height_cm: h })
                .await
                .unwrap();
        }

        let bmis: Vec<f64> = recent_history(&store).await.unwrap().iter().map(|r| r.bmi).collect();
        assert_eq!(bmis, vec![31.14, 22.86, 15.57]);
    }
}
