//! Load/mutate/save round trips for the movement log.
//!
//! The public contract addresses movements by 0-based position. Indices are
//! accepted as signed integers so negative values reach the bounds check and
//! surface as out-of-range rather than a routing failure.

use crate::{
    core::errors::{PortalError, Result},
    domain::{Movement, MovementLog},
    storage::{CollectionKind, JsonStore},
};

/// CRUD operations over the movement log, addressed by positional index.
pub struct MovementService {
    store: JsonStore,
}

impl MovementService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns the movements in stored order.
    pub fn list(&self) -> Result<Vec<Movement>> {
        Ok(self.load_log()?.movements)
    }

    /// Fetches the movement at `index`, bounds-checked.
    pub fn get(&self, index: i64) -> Result<Movement> {
        let log = self.load_log()?;
        let position = checked_index(index, log.movements.len())?;
        Ok(log.movements[position].clone())
    }

    /// Appends a movement and returns it together with its index, which is
    /// the tail of the log and not stable across later deletes or inserts.
    pub fn create(&self, movement: Movement) -> Result<(Movement, usize)> {
        let mut log = self.load_log()?;
        log.movements.push(movement.clone());
        self.store.save(CollectionKind::Movements, &log)?;
        Ok((movement, log.movements.len() - 1))
    }

    /// Replaces the movement at `index`, bounds-checked.
    pub fn update(&self, index: i64, movement: Movement) -> Result<()> {
        let mut log = self.load_log()?;
        let position = checked_index(index, log.movements.len())?;
        log.movements[position] = movement;
        self.store.save(CollectionKind::Movements, &log)
    }

    /// Removes the movement at `index`; every later index shifts down by one.
    pub fn delete(&self, index: i64) -> Result<()> {
        let mut log = self.load_log()?;
        let position = checked_index(index, log.movements.len())?;
        log.movements.remove(position);
        self.store.save(CollectionKind::Movements, &log)
    }

    fn load_log(&self) -> Result<MovementLog> {
        Ok(self
            .store
            .load(CollectionKind::Movements)?
            .unwrap_or_default())
    }
}

fn checked_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < len)
        .ok_or(PortalError::MovementOutOfRange(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_with_temp_dir() -> (MovementService, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let service = MovementService::new(JsonStore::new(temp.path().join("data")));
        (service, temp)
    }

    #[test]
    fn get_rejects_negative_and_past_end_indices() {
        let (service, _guard) = service_with_temp_dir();
        service
            .create(Movement::new("01/03/2025", "Pago", "-20,00"))
            .expect("create");

        for index in [-1, 1] {
            let err = service.get(index).expect_err("out of range must fail");
            assert!(
                matches!(err, PortalError::MovementOutOfRange(i) if i == index),
                "unexpected error for {index}: {err:?}"
            );
        }
        assert!(service.get(0).is_ok());
    }

    #[test]
    fn delete_shifts_later_indices_down() {
        let (service, _guard) = service_with_temp_dir();
        for detail in ["first", "second", "third"] {
            service
                .create(Movement::new("01/03/2025", detail, "0,00"))
                .expect("create");
        }

        service.delete(0).expect("delete head");

        let remaining = service.list().expect("list");
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].detail, "second");
        assert_eq!(service.get(1).expect("tail moved up").detail, "third");
    }
}
