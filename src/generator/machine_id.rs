//! Write-once machine id
//!
//! `Unset -> Set`, where `Set` is terminal. Layouts with 0 machine id bits
//! never leave `Unset` and report the id as absent.

use crate::error::SnowflakeError;

use super::SnowflakeGenerator;

impl SnowflakeGenerator {
    /// Assign the machine id. Succeeds at most once per generator
    ///
    /// Accepts any integer type; negative values are rejected as out of range.
    pub fn set_machine_id<T: Into<i128>>(&self, id: T) -> Result<(), SnowflakeError> {
        let id = id.into();

        if !self.layout.has_machine_id() {
            return Err(SnowflakeError::MachineIdUnsupported);
        }
        if let Some(&current) = self.machine_id.get() {
            return Err(SnowflakeError::MachineIdAlreadySet { current });
        }

        let max = self.layout.max_machine_id();
        let machine_id = u64::try_from(id)
            .ok()
            .filter(|&v| v <= max)
            .ok_or(SnowflakeError::MachineIdOutOfRange { machine_id: id, max })?;

        // A concurrent writer may have won between the check above and here
        self.machine_id
            .set(machine_id)
            .map_err(|_| SnowflakeError::MachineIdAlreadySet {
                current: self.machine_id.get().copied().unwrap_or_default(),
            })?;

        tracing::debug!(machine_id, "machine id set");
        Ok(())
    }

    /// The assigned machine id, `None` when the layout has no machine id field
    pub fn machine_id(&self) -> Result<Option<u64>, SnowflakeError> {
        if !self.layout.has_machine_id() {
            return Ok(None);
        }
        self.machine_id
            .get()
            .copied()
            .map(Some)
            .ok_or(SnowflakeError::MachineIdNotSet)
    }

    /// Whether a machine id has been assigned
    #[inline]
    pub fn is_machine_id_set(&self) -> bool {
        self.machine_id.get().is_some()
    }
}
