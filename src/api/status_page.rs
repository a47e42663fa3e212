use crate::error::AcquisitionError;

/// Source of the raw inverter status page.
pub trait StatusPage {
    fn fetch(&self) -> Result<String, AcquisitionError>;
}
