use jiff::Timestamp;
use rand::Rng;
use stockroom::prelude::*;
use stockroom_app::{
    database::{self, Db},
    domain::inventory::PgInventoryService,
};

const ADULT_MAX_EXCLUSIVE: u64 = 50;
const YOUTH_MAX_EXCLUSIVE: u64 = 30;

pub(crate) async fn run(db: Db) -> Result<(), String> {
    database::migrate(db.pool())
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let records = seed_records(&mut rand::thread_rng(), Timestamp::now());

    let saved = PgInventoryService::new(db)
        .replace_all(records)
        .await
        .map_err(|error| format!("failed to seed inventory: {error}"))?;

    for record in &saved {
        println!("{}: {} items", record.brand(), record.total_quantity());
    }

    println!("seeded {} brands", saved.len());

    Ok(())
}

fn seed_records<R: Rng>(rng: &mut R, now: Timestamp) -> Vec<InventoryRecord> {
    Brand::ALL
        .into_iter()
        .map(|brand| {
            let mut record = InventoryRecord::new(brand, now);

            for category in Category::ALL {
                let max = match category {
                    Category::Adult => ADULT_MAX_EXCLUSIVE,
                    Category::Youth => YOUTH_MAX_EXCLUSIVE,
                };

                for &size in category.sizes() {
                    record.adjust(size, category, rng.gen_range(0..max), StockAction::Add);
                }
            }

            record.reconcile(now);

            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn every_brand_gets_every_size() {
        let records = seed_records(&mut StdRng::seed_from_u64(7), Timestamp::UNIX_EPOCH);

        assert_eq!(records.len(), Brand::ALL.len());

        for record in &records {
            assert_eq!(record.adult_sizes().count(), Category::Adult.sizes().len());
            assert_eq!(record.youth_sizes().count(), Category::Youth.sizes().len());
            assert!(record.is_reconciled());
        }
    }

    #[test]
    fn quantities_stay_within_category_bounds() {
        let records = seed_records(&mut StdRng::seed_from_u64(42), Timestamp::UNIX_EPOCH);

        for record in &records {
            assert!(record.adult_sizes().all(|entry| entry.quantity < ADULT_MAX_EXCLUSIVE));
            assert!(record.youth_sizes().all(|entry| entry.quantity < YOUTH_MAX_EXCLUSIVE));
        }
    }
}
